//! Tracing spans around pipeline steps.
//!
//! Spans are created at `TRACE` level, so an instrumented step costs a
//! level check per invocation unless a subscriber enables them.

use tracing::trace_span;

use crate::channel::{Family, Flatten};
use crate::core::Operation;

/// An operation whose invocations run inside a `flowbind.step` span.
#[derive(Debug, Clone)]
pub struct Instrumented<F> {
    op: F,
    name: &'static str,
}

impl<F> Instrumented<F> {
    pub(crate) const fn new(op: F, name: &'static str) -> Self {
        Self { op, name }
    }

    /// Returns the step name recorded on the span.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<In, F> Operation<In> for Instrumented<F>
where
    F: Operation<In>,
{
    type Output = F::Output;

    fn invoke(&self, input: In) -> F::Output {
        let span = trace_span!("flowbind.step", step = self.name);
        let _entered = span.enter();
        self.op.invoke(input)
    }
}

impl<Fam, In, F> Flatten<Fam, In> for Instrumented<F>
where
    Fam: Family,
    F: Flatten<Fam, In>,
{
    type Value = F::Value;

    fn flatten(&self, input: In) -> Fam::Of<F::Value> {
        let span = trace_span!("flowbind.step", step = self.name);
        let _entered = span.enter();
        self.op.flatten(input)
    }
}
