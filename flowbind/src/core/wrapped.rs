//! The wrapped computation and its constructors.

use std::ops::Shr;
use std::panic::{self, AssertUnwindSafe};

use super::compositor::{Compositor, Sequence};
use super::operation::{Const, Func, Identity, Operation};
use crate::channel::{OptionChannel, ResultChannel};
use crate::errors::UnhandledFault;
use crate::observability::Instrumented;

/// A type-erased operation detached from the composition machinery.
pub type BoxedOperation<In, Out> = Box<dyn Fn(In) -> Out + Send + Sync>;

/// An operation together with the compositor deciding how it merges with
/// the next element of a pipeline.
///
/// Calling a `Wrapped` is exactly calling its operation. Composition with
/// `>>` consumes both operands and returns a new value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[must_use = "a pipeline does nothing until it is called"]
pub struct Wrapped<F, C = Sequence> {
    op: F,
    compositor: C,
}

/// Lifts a plain operation.
///
/// The result is never flattened into a modifier scope's channel, even when
/// it is an `Option` or a `Result`. Inside a [`MAYBE`](crate::modifiers::MAYBE)
/// scope, a lifted `fn(i32) -> Option<i32>` returning `None` yields
/// `Some(None)`; use [`lift_maybe`] to have it collapse into the scope's
/// `Option`, or [`lift_fallible`] for `Result` inside `fallible`.
pub const fn lift<F>(f: F) -> Wrapped<Func<F>> {
    Wrapped::from_parts(Func::new(f), Sequence)
}

/// Lifts an operation whose `None` means "absent".
///
/// Inside a `Maybe` scope its result is flattened instead of being wrapped
/// a second time.
pub const fn lift_maybe<F, In, U>(f: F) -> Wrapped<Func<F, OptionChannel>>
where
    F: Fn(In) -> Option<U>,
{
    Wrapped::from_parts(Func::new(f), Sequence)
}

/// Lifts an operation that reports failures as `Err(E)`.
///
/// Inside a `Fallible<E>` scope its result is flattened.
pub const fn lift_fallible<F, In, U, E>(f: F) -> Wrapped<Func<F, ResultChannel<E>>>
where
    F: Fn(In) -> Result<U, E>,
{
    Wrapped::from_parts(Func::new(f), Sequence)
}

/// Lifts a constant into a zero-argument source.
pub const fn value<T: Clone>(v: T) -> Wrapped<Const<T>> {
    Wrapped::from_parts(Const::new(v), Sequence)
}

/// A computation returning its input unchanged.
pub const fn identity() -> Wrapped<Identity> {
    Wrapped::from_parts(Identity, Sequence)
}

/// Composes two pipeline elements; the same as `left >> right`.
pub fn compose<L, R>(left: L, right: R) -> L::Output
where
    L: Shr<R>,
{
    left >> right
}

impl<F, C> Wrapped<F, C> {
    pub(crate) const fn from_parts(op: F, compositor: C) -> Self {
        Self { op, compositor }
    }

    pub(crate) fn into_parts(self) -> (F, C) {
        (self.op, self.compositor)
    }

    /// Returns the held operation.
    pub const fn operation(&self) -> &F {
        &self.op
    }

    /// Detaches the held operation, dropping the compositor.
    pub fn into_operation(self) -> F {
        self.op
    }

    /// Invokes the pipeline.
    pub fn call<In>(&self, input: In) -> F::Output
    where
        F: Operation<In>,
    {
        self.op.invoke(input)
    }

    /// Invokes a zero-argument pipeline.
    pub fn run(&self) -> F::Output
    where
        F: Operation<()>,
    {
        self.op.invoke(())
    }

    /// Invokes the pipeline, turning any fault that escapes it into an
    /// [`UnhandledFault`].
    pub fn try_call<In>(&self, input: In) -> Result<F::Output, UnhandledFault>
    where
        F: Operation<In>,
    {
        panic::catch_unwind(AssertUnwindSafe(move || self.op.invoke(input)))
            .map_err(UnhandledFault::from_payload)
    }

    /// Detaches the operation as a plain closure.
    pub fn into_fn<In>(self) -> impl Fn(In) -> F::Output
    where
        F: Operation<In>,
    {
        let op = self.op;
        move |input| op.invoke(input)
    }

    /// Detaches the operation behind a boxed trait object, erasing its type.
    pub fn into_boxed<In>(self) -> BoxedOperation<In, F::Output>
    where
        F: Operation<In> + Send + Sync + 'static,
        In: 'static,
        F::Output: 'static,
    {
        let op = self.op;
        Box::new(move |input| op.invoke(input))
    }
}

impl<F> Wrapped<F> {
    /// Wraps every invocation of this computation in a `tracing` span
    /// named after the step.
    ///
    /// Only ordinary computations can be instrumented. To trace a scope,
    /// build it as a standalone segment, instrument it, then compose it.
    pub fn instrument(self, name: &'static str) -> Wrapped<Instrumented<F>> {
        Wrapped::from_parts(Instrumented::new(self.op, name), Sequence)
    }
}

impl<F, C, R> Shr<R> for Wrapped<F, C>
where
    C: Compositor<F, R>,
{
    type Output = Wrapped<C::Op, C::Next>;

    fn shr(self, rhs: R) -> Self::Output {
        self.compositor.compose(self.op, rhs)
    }
}

impl<In, F, C> Operation<In> for Wrapped<F, C>
where
    F: Operation<In>,
{
    type Output = F::Output;

    fn invoke(&self, input: In) -> F::Output {
        self.op.invoke(input)
    }
}
