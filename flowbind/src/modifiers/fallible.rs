//! Short-circuit on a declared error.

use std::marker::PhantomData;

use tracing::trace;

use crate::channel::{Flatten, ResultChannel};
use crate::core::{Modifier, Strategy};

/// Strategy of the [`fallible`] modifier for error type `E`.
///
/// The scope takes `Result<T, E>`. `Err(e)` is returned untouched without
/// running the body; `Ok(t)` runs the body on `t`. Body steps declared with
/// [`lift_fallible`](crate::core::lift_fallible) over the same `E`, and
/// nested `Fallible<E>` scopes, fold into the one `Result` layer: a nested
/// error replaces the outer success.
pub struct Fallible<E> {
    error: PhantomData<fn() -> E>,
}

impl<E> Fallible<E> {
    /// Creates the strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self { error: PhantomData }
    }
}

impl<E> Default for Fallible<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Fallible<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Fallible<E> {}

impl<E> std::fmt::Debug for Fallible<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Fallible<{}>", std::any::type_name::<E>())
    }
}

/// The error-channel short-circuit modifier for error type `E`.
pub const fn fallible<E>() -> Modifier<Fallible<E>> {
    Modifier::new(Fallible::new())
}

impl<E, T, B> Strategy<Result<T, E>, B> for Fallible<E>
where
    B: Flatten<ResultChannel<E>, T>,
{
    type Output = Result<B::Value, E>;
    type Channel = ResultChannel<E>;

    fn apply(&self, body: &B, input: Result<T, E>) -> Self::Output {
        match input {
            Ok(value) => body.flatten(value),
            Err(error) => {
                trace!(modifier = "fallible", "Input is an error, skipping body");
                Err(error)
            }
        }
    }
}
