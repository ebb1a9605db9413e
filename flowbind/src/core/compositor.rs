//! Compositors: how a wrapped computation merges with what follows it.
//!
//! The left operand's compositor always decides. Three exist:
//!
//! - [`Sequence`] runs the right operand after the left one. A modifier on
//!   the right opens a scope headed by the left operation.
//! - [`Fresh`] belongs to a scope with an empty body. The next element
//!   becomes the body.
//! - [`Inside`] belongs to a scope with a body. Every further element is
//!   composed into that body using the body's own compositor, so a modifier
//!   governs the rest of the chain, and a second modifier nests a scope.

use std::ops::Shr;

use super::operation::{Identity, Operation, Then};
use super::wrapped::Wrapped;
use crate::channel::{Embed, Family, Flatten};

/// Merges a left operation with a right operand.
pub trait Compositor<L, R> {
    /// The merged operation.
    type Op;
    /// The compositor propagated to the result.
    type Next;

    /// Builds the merged computation.
    fn compose(self, left: L, right: R) -> Wrapped<Self::Op, Self::Next>;
}

/// Default strict left-to-right sequencing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sequence;

/// Compositor of a scope whose body is still empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fresh;

/// Compositor of a scope; composes into the body with `C`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inside<C>(C);

/// Placeholder for the body of a scope nothing has been composed into.
///
/// It implements neither [`Operation`] nor [`Flatten`], so a pipeline that
/// ends right after a modifier cannot be invoked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Open;

impl<F, G, C> Compositor<F, Wrapped<G, C>> for Sequence {
    type Op = Then<F, G>;
    type Next = Self;

    fn compose(self, left: F, right: Wrapped<G, C>) -> Wrapped<Self::Op, Self> {
        Wrapped::from_parts(Then::new(left, right.into_operation()), self)
    }
}

impl<F, M> Compositor<F, Modifier<M>> for Sequence {
    type Op = Scoped<F, M, Open>;
    type Next = Inside<Fresh>;

    fn compose(self, left: F, right: Modifier<M>) -> Wrapped<Self::Op, Self::Next> {
        Wrapped::from_parts(
            Scoped::new(left, right.into_strategy(), Open),
            Inside(Fresh),
        )
    }
}

impl<G, C> Compositor<Open, Wrapped<G, C>> for Fresh {
    type Op = G;
    type Next = Sequence;

    fn compose(self, _left: Open, right: Wrapped<G, C>) -> Wrapped<G, Sequence> {
        Wrapped::from_parts(right.into_operation(), Sequence)
    }
}

impl<M> Compositor<Open, Modifier<M>> for Fresh {
    type Op = Scoped<Identity, M, Open>;
    type Next = Inside<Self>;

    fn compose(self, _left: Open, right: Modifier<M>) -> Wrapped<Self::Op, Self::Next> {
        right.into_scope()
    }
}

impl<H, M, B, C, R> Compositor<Scoped<H, M, B>, R> for Inside<C>
where
    C: Compositor<B, R>,
{
    type Op = Scoped<H, M, C::Op>;
    type Next = Inside<C::Next>;

    fn compose(self, left: Scoped<H, M, B>, right: R) -> Wrapped<Self::Op, Self::Next> {
        let Scoped {
            head,
            strategy,
            body,
        } = left;
        let (body, next) = self.0.compose(body, right).into_parts();
        Wrapped::from_parts(Scoped::new(head, strategy, body), Inside(next))
    }
}

/// Decides whether and how a scope runs its body.
///
/// `I` is the output of the scope head, `B` the body operation.
pub trait Strategy<I, B> {
    /// What the scope produces.
    type Output;
    /// The channel kind of [`Self::Output`] when this scope is itself a
    /// step inside an enclosing scope.
    type Channel;

    /// Runs the body (or not) for one head output.
    fn apply(&self, body: &B, input: I) -> Self::Output;
}

/// A head operation followed by a body governed by strategy `M`.
#[derive(Debug, Clone)]
pub struct Scoped<H, M, B> {
    head: H,
    strategy: M,
    body: B,
}

impl<H, M, B> Scoped<H, M, B> {
    pub(crate) const fn new(head: H, strategy: M, body: B) -> Self {
        Self {
            head,
            strategy,
            body,
        }
    }

    /// Returns the strategy governing the body.
    pub const fn strategy(&self) -> &M {
        &self.strategy
    }
}

impl<In, H, M, B> Operation<In> for Scoped<H, M, B>
where
    H: Operation<In>,
    M: Strategy<H::Output, B>,
{
    type Output = M::Output;

    fn invoke(&self, input: In) -> M::Output {
        self.strategy.apply(&self.body, self.head.invoke(input))
    }
}

impl<Fam, In, H, M, B> Flatten<Fam, In> for Scoped<H, M, B>
where
    Fam: Family,
    H: Operation<In>,
    M: Strategy<H::Output, B>,
    M::Channel: Embed<Fam, M::Output>,
{
    type Value = <M::Channel as Embed<Fam, M::Output>>::Value;

    fn flatten(&self, input: In) -> Fam::Of<Self::Value> {
        <M::Channel as Embed<Fam, M::Output>>::embed(Operation::<In>::invoke(self, input))
    }
}

/// A composition modifier.
///
/// Not a computation: it has no way to be invoked. Composed onto a
/// computation it opens a scope; composed with a computation on its right
/// it yields a standalone segment that expects the modifier's input channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modifier<M> {
    strategy: M,
}

impl<M> Modifier<M> {
    /// Wraps a strategy.
    pub const fn new(strategy: M) -> Self {
        Self { strategy }
    }

    /// Returns the strategy.
    pub const fn strategy(&self) -> &M {
        &self.strategy
    }

    /// Unwraps the strategy.
    pub fn into_strategy(self) -> M {
        self.strategy
    }

    /// Maps the strategy, keeping the modifier shape.
    pub(crate) fn map<N>(self, f: impl FnOnce(M) -> N) -> Modifier<N> {
        Modifier::new(f(self.strategy))
    }

    pub(crate) fn into_scope(self) -> Wrapped<Scoped<Identity, M, Open>, Inside<Fresh>> {
        Wrapped::from_parts(Scoped::new(Identity, self.strategy, Open), Inside(Fresh))
    }
}

impl<M, R> Shr<R> for Modifier<M>
where
    Wrapped<Scoped<Identity, M, Open>, Inside<Fresh>>: Shr<R>,
{
    type Output = <Wrapped<Scoped<Identity, M, Open>, Inside<Fresh>> as Shr<R>>::Output;

    fn shr(self, rhs: R) -> Self::Output {
        self.into_scope() >> rhs
    }
}
