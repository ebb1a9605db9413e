//! Error types for the flowbind library.
//!
//! Composition itself cannot fail at runtime: mismatched pipelines are
//! rejected by the type checker. The only runtime error is a fault that
//! escapes a whole pipeline when it is invoked through
//! [`Wrapped::try_call`](crate::core::Wrapped::try_call).

use std::any::Any;
use std::panic;

use thiserror::Error;

use crate::fault::describe;

/// A fault that no scope intercepted, caught at the outermost invoker.
///
/// Keeps the original payload so the caller can inspect it, downcast it to
/// its fault kind, or resume unwinding.
#[derive(Debug, Error)]
#[error("Unhandled fault in pipeline: {message}")]
pub struct UnhandledFault {
    /// Human-readable description of the payload.
    message: String,
    /// The original panic payload.
    payload: Box<dyn Any + Send>,
}

impl UnhandledFault {
    /// Wraps a panic payload.
    #[must_use]
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        Self {
            message: describe(&*payload),
            payload,
        }
    }

    /// Returns the description of the fault.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if the fault is of kind `F`.
    #[must_use]
    pub fn is<F: Any>(&self) -> bool {
        self.payload.is::<F>()
    }

    /// Borrows the fault as kind `F`, if it is one.
    #[must_use]
    pub fn downcast_ref<F: Any>(&self) -> Option<&F> {
        self.payload.downcast_ref::<F>()
    }

    /// Takes the fault as kind `F`, or returns `self` unchanged.
    pub fn downcast<F: Any>(self) -> Result<F, Self> {
        match self.payload.downcast::<F>() {
            Ok(fault) => Ok(*fault),
            Err(payload) => Err(Self {
                message: self.message,
                payload,
            }),
        }
    }

    /// Resumes unwinding with the original payload.
    pub fn resume(self) -> ! {
        panic::resume_unwind(self.payload)
    }

    /// Returns the original payload.
    #[must_use]
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }
}
