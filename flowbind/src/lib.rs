//! # Flowbind
//!
//! Typed composition of computations into pipelines.
//!
//! Computations are lifted into [`Wrapped`](core::Wrapped) values and joined
//! with `>>`. A modifier placed in the chain opens a scope that governs every
//! element composed after it:
//!
//! - **Maybe**: skip the rest of the scope when a value is absent
//! - **Fallible**: skip the rest of the scope on the first error
//! - **Trycatch**: intercept faults of one kind and turn them into values
//!
//! Composition is checked at compile time. A pipeline whose steps do not
//! line up simply does not build.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use flowbind::prelude::*;
//!
//! fn add2(i: i32) -> i32 { i + 2 }
//! fn evens_only(i: i32) -> Option<i32> { (i % 2 == 0).then_some(i) }
//!
//! let pipeline = value(Some(12))
//!     >> MAYBE
//!     >> lift(add2)
//!     >> lift_maybe(evens_only)
//!     >> MAYBE
//!     >> lift(add2);
//!
//! assert_eq!(pipeline.run(), Some(16));
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod channel;
pub mod core;
pub mod errors;
pub mod fault;
pub mod modifiers;
pub mod observability;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        compose, identity, lift, lift_fallible, lift_maybe, value, BoxedOperation,
        Modifier, Operation, Wrapped,
    };
    pub use crate::errors::UnhandledFault;
    pub use crate::fault::{raise, Passthrough};
    pub use crate::modifiers::{
        fallible, maybe, trycatch, trycatch_handled, MAYBE,
    };
    pub use crate::observability::Instrumented;
}
