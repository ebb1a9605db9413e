//! Composition modifiers.
//!
//! A modifier is composed into a pipeline like any other element, but it
//! is not a computation: it changes how everything composed after it runs.
//!
//! | Modifier | Trigger | Produced value | Propagates further? |
//! |---|---|---|---|
//! | [`MAYBE`] | input `None` | `None` | no |
//! | [`fallible`] | input `Err(e)` | the same `Err(e)` | no |
//! | [`trycatch`] | fault of kind `F` | `None` | only other kinds |
//! | [`trycatch_handled`] | fault of kind `F` | `Err(handler(&f))` | only other kinds |
//! | [`trycatch_handled`]`.rethrow()` | fault of kind `F` | none | yes, after the handler |
//!
//! ```rust,ignore
//! use flowbind::prelude::*;
//!
//! let pipeline = value(Some(12))
//!     >> MAYBE
//!     >> lift(|x: i32| x + 2)
//!     >> lift_maybe(|x: i32| (x % 2 == 0).then_some(x))
//!     >> MAYBE
//!     >> lift(|x: i32| x + 2);
//!
//! assert_eq!(pipeline.run(), Some(16));
//! ```

mod fallible;
mod maybe;
#[cfg(test)]
mod pipeline_tests;
mod trycatch;

pub use fallible::{fallible, Fallible};
pub use maybe::{maybe, Maybe, MAYBE};
pub use trycatch::{trycatch, trycatch_handled, Absorb, Rethrow, Trycatch, TrycatchHandled};
