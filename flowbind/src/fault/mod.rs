//! Faults raised by operations.
//!
//! A fault is a panic whose payload has a meaningful type, the fault kind.
//! Operations raise one with [`raise`]; the `Trycatch` modifiers intercept
//! payloads of a designated kind and let every other kind keep unwinding,
//! subject to the scope's [`Passthrough`] policy.
//!
//! Interception relies on unwinding. A binary built with `panic = "abort"`
//! terminates on the first fault.
//!
//! Raising a fault runs the process panic hook first, so the default hook
//! writes a `panicked at` line to stderr even when a scope intercepts the
//! fault. [`silence_typed_faults`] installs a hook that keeps typed faults
//! off stderr.

mod payload;
mod policy;

pub use payload::{describe, raise, silence_typed_faults};
pub use policy::Passthrough;
