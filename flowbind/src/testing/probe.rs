//! Counting stubs.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts how many times the operations it taps are invoked.
///
/// Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct Probe {
    calls: Arc<AtomicUsize>,
}

impl Probe {
    /// Creates a probe with a zero count.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps `f` so that every call increments this probe.
    pub fn tap<In, U>(&self, f: impl Fn(In) -> U) -> impl Fn(In) -> U {
        let calls = Arc::clone(&self.calls);
        move |input| {
            calls.fetch_add(1, Ordering::SeqCst);
            f(input)
        }
    }

    /// Returns the number of recorded calls.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Resets the count.
    pub fn reset(&self) {
        self.calls.store(0, Ordering::SeqCst);
    }
}
