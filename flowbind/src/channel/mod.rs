//! Result channels and flattening.
//!
//! A step inside a modifier scope can return a plain value, an optional
//! value or a declared error. The scope folds every such result into its
//! own channel:
//!
//! - [`OptionChannel`] is `Option<T>`, used by `Maybe`.
//! - [`ResultChannel<E>`] is `Result<T, E>`, used by `Fallible<E>`.
//! - [`Direct`] marks a plain value that is never flattened.
//!
//! The `Trycatch` scopes wrap their body result without flattening it, so a
//! body returning `None` or a declared `Err` stays distinguishable from an
//! intercepted fault. Their own result still carries a channel kind and
//! flattens when the scope is nested in `Maybe` or `Fallible`.
//!
//! Folding a result into the channel it is declared to carry removes one
//! layer, so a declared step never yields `Some(Some(x))`. Folding it into
//! any other channel wraps it as a plain value. No impl folds
//! `Result<T, E2>` into `ResultChannel<E>`, so mixing error types inside one
//! scope is a compile error until a step converts between them.

mod embed;

pub use embed::{Embed, Flatten};

use std::marker::PhantomData;

/// A channel a scope can fold results into.
pub trait Family {
    /// The channel type carrying a `T`.
    type Of<T>;

    /// Wraps a plain value as a success of this channel.
    fn pure<T>(value: T) -> Self::Of<T>;
}

/// Kind of a step whose result is a plain value.
#[derive(Debug)]
pub enum Direct {}

/// Kind of a step whose result is `Option<T>`.
#[derive(Debug)]
pub enum OptionChannel {}

/// Kind of a step whose result is `Result<T, E>`.
#[derive(Debug)]
pub struct ResultChannel<E> {
    _error: PhantomData<fn() -> E>,
    _never: std::convert::Infallible,
}

impl Family for OptionChannel {
    type Of<T> = Option<T>;

    fn pure<T>(value: T) -> Option<T> {
        Some(value)
    }
}

impl<E> Family for ResultChannel<E> {
    type Of<T> = Result<T, E>;

    fn pure<T>(value: T) -> Result<T, E> {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_pure() {
        assert_eq!(OptionChannel::pure(3), Some(3));
    }

    #[test]
    fn test_result_pure() {
        assert_eq!(ResultChannel::<String>::pure(3), Ok(3));
    }
}
