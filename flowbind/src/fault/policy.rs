//! What a fault-intercepting scope does with faults it does not handle.

use std::any::Any;
use std::panic;

use serde::{Deserialize, Serialize};
use tracing::error;

use super::describe;

/// Policy for faults of a kind the scope was not asked to intercept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Passthrough {
    /// Keep unwinding towards the pipeline's invoker (default).
    #[default]
    Propagate,
    /// Treat the scope as one that never lets a fault escape: log the
    /// fault and abort the process.
    Abort,
}

impl Passthrough {
    /// Returns true if foreign faults keep unwinding.
    #[must_use]
    pub const fn propagates(self) -> bool {
        matches!(self, Self::Propagate)
    }

    /// Applies the policy to a payload the scope did not intercept.
    pub fn escape(self, payload: Box<dyn Any + Send>) -> ! {
        match self {
            Self::Propagate => panic::resume_unwind(payload),
            Self::Abort => {
                error!(
                    fault = %describe(&*payload),
                    "Fault escaped a no-passthrough scope, aborting"
                );
                std::process::abort()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_propagates() {
        assert_eq!(Passthrough::default(), Passthrough::Propagate);
        assert!(Passthrough::default().propagates());
        assert!(!Passthrough::Abort.propagates());
    }

    #[test]
    fn test_propagate_resumes_same_payload() {
        let payload = panic::catch_unwind(|| {
            Passthrough::Propagate.escape(Box::new(41_u8));
        })
        .unwrap_err();
        assert_eq!(payload.downcast_ref::<u8>(), Some(&41));
    }

    #[test]
    fn test_serialization() -> anyhow::Result<()> {
        let json = serde_json::to_string(&Passthrough::Abort)?;
        assert_eq!(json, "\"abort\"");

        let parsed: Passthrough = serde_json::from_str("\"propagate\"")?;
        assert_eq!(parsed, Passthrough::Propagate);
        Ok(())
    }
}
