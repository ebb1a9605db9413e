//! Operations held by wrapped computations.

use std::marker::PhantomData;

use crate::channel::{Direct, Embed, Family, Flatten};

/// A single-input operation with a statically known output.
///
/// Zero-argument sources use `()` as their input.
pub trait Operation<In> {
    /// The value produced by one invocation.
    type Output;

    /// Invokes the operation.
    fn invoke(&self, input: In) -> Self::Output;
}

/// A lifted closure or function item.
///
/// `K` is the channel kind the result is declared to carry. It only matters
/// inside a modifier scope, where it decides whether the result is
/// flattened into the scope's channel or wrapped as a plain value.
pub struct Func<F, K = Direct> {
    f: F,
    kind: PhantomData<fn() -> K>,
}

impl<F, K> Func<F, K> {
    pub(crate) const fn new(f: F) -> Self {
        Self {
            f,
            kind: PhantomData,
        }
    }

    /// Returns the wrapped closure.
    pub fn into_inner(self) -> F {
        self.f
    }
}

impl<F: Clone, K> Clone for Func<F, K> {
    fn clone(&self) -> Self {
        Self::new(self.f.clone())
    }
}

impl<F, K> std::fmt::Debug for Func<F, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Func")
            .field("kind", &std::any::type_name::<K>())
            .finish_non_exhaustive()
    }
}

impl<F, K, In, U> Operation<In> for Func<F, K>
where
    F: Fn(In) -> U,
{
    type Output = U;

    fn invoke(&self, input: In) -> U {
        (self.f)(input)
    }
}

impl<Fam, F, K, In, U> Flatten<Fam, In> for Func<F, K>
where
    Fam: Family,
    F: Fn(In) -> U,
    K: Embed<Fam, U>,
{
    type Value = <K as Embed<Fam, U>>::Value;

    fn flatten(&self, input: In) -> Fam::Of<Self::Value> {
        K::embed((self.f)(input))
    }
}

/// A constant source. Every invocation yields a clone of the held value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Const<T> {
    value: T,
}

impl<T> Const<T> {
    pub(crate) const fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: Clone> Operation<()> for Const<T> {
    type Output = T;

    fn invoke(&self, (): ()) -> T {
        self.value.clone()
    }
}

impl<Fam: Family, T: Clone> Flatten<Fam, ()> for Const<T> {
    type Value = T;

    fn flatten(&self, (): ()) -> Fam::Of<T> {
        Fam::pure(self.value.clone())
    }
}

/// Returns its input unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<T> Operation<T> for Identity {
    type Output = T;

    fn invoke(&self, input: T) -> T {
        input
    }
}

impl<Fam: Family, T> Flatten<Fam, T> for Identity {
    type Value = T;

    fn flatten(&self, input: T) -> Fam::Of<T> {
        Fam::pure(input)
    }
}

/// Two operations run back to back: `second(first(x))`.
#[derive(Debug, Clone)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<A, B> Then<A, B> {
    pub(crate) const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<In, A, B> Operation<In> for Then<A, B>
where
    A: Operation<In>,
    B: Operation<A::Output>,
{
    type Output = B::Output;

    fn invoke(&self, input: In) -> Self::Output {
        self.second.invoke(self.first.invoke(input))
    }
}

// Only the last step decides how the pair folds into a channel.
impl<Fam, In, A, B> Flatten<Fam, In> for Then<A, B>
where
    Fam: Family,
    A: Operation<In>,
    B: Flatten<Fam, A::Output>,
{
    type Value = B::Value;

    fn flatten(&self, input: In) -> Fam::Of<Self::Value> {
        self.second.flatten(self.first.invoke(input))
    }
}
