//! Core composition machinery.
//!
//! This module contains:
//! - The [`Operation`] trait and the operation types pipelines are built from
//! - [`Wrapped`], the invokable and composable pipeline value
//! - Compositors, scopes and the [`Modifier`] type

mod compositor;
mod operation;
mod wrapped;

pub use compositor::{
    Compositor, Fresh, Inside, Modifier, Open, Scoped, Sequence, Strategy,
};
pub use operation::{Const, Func, Identity, Operation, Then};
pub use wrapped::{
    compose, identity, lift, lift_fallible, lift_maybe, value, BoxedOperation, Wrapped,
};
