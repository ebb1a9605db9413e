//! Raising faults and reading their payloads.

use std::any::Any;
use std::panic;

use tracing::trace;

/// Raises `fault` as a panic carrying it as its payload.
#[track_caller]
pub fn raise<F: Any + Send>(fault: F) -> ! {
    std::panic::panic_any(fault)
}

/// Extracts a human-readable message from a fault payload.
///
/// String payloads (from `panic!` with a message) are returned verbatim.
pub fn describe(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        return (*msg).to_string();
    }
    if let Some(msg) = payload.downcast_ref::<String>() {
        return msg.clone();
    }
    "non-string fault payload".to_string()
}

/// Installs a panic hook that stays quiet for typed faults.
///
/// Every [`raise`] goes through the process panic hook before any scope
/// gets to intercept it, so the default hook prints a `panicked at`
/// message even for faults a `Trycatch` scope absorbs. The installed hook
/// records typed payloads as a `trace!` event and forwards string panics
/// (`panic!`, failed assertions) to the previously installed hook.
///
/// The hook is process-wide. Call this once at startup.
pub fn silence_typed_faults() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if is_message(info.payload()) {
            previous(info);
        } else {
            trace!(location = ?info.location(), "Typed fault raised");
        }
    }));
}

fn is_message(payload: &(dyn Any + Send)) -> bool {
    payload.is::<&'static str>() || payload.is::<String>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Overflow(u32);

    #[test]
    fn test_describe_static_str() {
        let payload = panic::catch_unwind(|| panic!("plain message")).unwrap_err();
        assert_eq!(describe(&*payload), "plain message");
    }

    #[test]
    fn test_describe_formatted_string() {
        let payload = panic::catch_unwind(|| panic!("value {}", 7)).unwrap_err();
        assert_eq!(describe(&*payload), "value 7");
    }

    #[test]
    fn test_describe_typed_payload() {
        let payload = panic::catch_unwind(|| raise(Overflow(3))).unwrap_err();
        assert_eq!(describe(&*payload), "non-string fault payload");
    }

    #[test]
    fn test_only_string_payloads_are_messages() {
        assert!(is_message(&"text"));
        assert!(is_message(&String::from("text")));
        assert!(!is_message(&Overflow(1)));
    }

    #[test]
    fn test_silenced_faults_still_unwind() {
        silence_typed_faults();

        let payload = panic::catch_unwind(|| raise(Overflow(2))).unwrap_err();
        assert_eq!(payload.downcast_ref::<Overflow>(), Some(&Overflow(2)));

        let payload = panic::catch_unwind(|| panic!("still reported")).unwrap_err();
        assert_eq!(describe(&*payload), "still reported");
    }

    #[test]
    fn test_raise_keeps_payload_type() {
        let payload = panic::catch_unwind(|| raise(Overflow(9))).unwrap_err();
        assert_eq!(payload.downcast_ref::<Overflow>(), Some(&Overflow(9)));
    }
}
