//! Observability utilities.

mod span;

pub use span::Instrumented;
