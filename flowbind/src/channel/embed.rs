//! Folding step results into a scope's channel.

use super::{Direct, Family, OptionChannel, ResultChannel};

/// Converts a result of kind `Self` into channel `Fam`.
///
/// Implemented on the kind markers, never on values.
pub trait Embed<Fam: Family, O> {
    /// The success value once folded.
    type Value;

    /// Folds `output` into `Fam`.
    fn embed(output: O) -> Fam::Of<Self::Value>;
}

impl<Fam: Family, O> Embed<Fam, O> for Direct {
    type Value = O;

    fn embed(output: O) -> Fam::Of<O> {
        Fam::pure(output)
    }
}

impl<T> Embed<OptionChannel, Option<T>> for OptionChannel {
    type Value = T;

    fn embed(output: Option<T>) -> Option<T> {
        output
    }
}

impl<E, O> Embed<ResultChannel<E>, O> for OptionChannel {
    type Value = O;

    fn embed(output: O) -> Result<O, E> {
        Ok(output)
    }
}

impl<E, T> Embed<ResultChannel<E>, Result<T, E>> for ResultChannel<E> {
    type Value = T;

    fn embed(output: Result<T, E>) -> Result<T, E> {
        output
    }
}

impl<E, O> Embed<OptionChannel, O> for ResultChannel<E> {
    type Value = O;

    fn embed(output: O) -> Option<O> {
        Some(output)
    }
}

/// Runs an operation and folds its result into channel `Fam`.
///
/// Every operation type implements this. Plain steps are wrapped, steps
/// declared to produce `Fam` are passed through, and nested scopes fold
/// according to their own channel.
pub trait Flatten<Fam: Family, In> {
    /// The success value once folded.
    type Value;

    /// Invokes and folds.
    fn flatten(&self, input: In) -> Fam::Of<Self::Value>;
}
