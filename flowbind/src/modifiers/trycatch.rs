//! Fault interception.
//!
//! Both modifiers run their body under `catch_unwind` and look at the type
//! of the payload. A payload of the designated kind `F` is handled; any
//! other payload is left to the scope's [`Passthrough`] policy. The head of
//! the scope runs outside the interception.

use std::any::{type_name, Any};
use std::marker::PhantomData;
use std::panic::{self, AssertUnwindSafe};

use tracing::debug;

use crate::channel::{Direct, OptionChannel, ResultChannel};
use crate::core::{Modifier, Operation, Strategy};
use crate::fault::Passthrough;

/// Strategy of the [`trycatch`] modifier for fault kind `F`.
///
/// Success yields `Some` of the body result, left exactly as the body
/// produced it; only a fault of kind `F` yields `None`.
pub struct Trycatch<F> {
    passthrough: Passthrough,
    fault: PhantomData<fn() -> F>,
}

impl<F> Trycatch<F> {
    /// Creates the strategy with the default passthrough policy.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            passthrough: Passthrough::Propagate,
            fault: PhantomData,
        }
    }

    /// Returns the policy for faults of other kinds.
    #[must_use]
    pub const fn passthrough(&self) -> Passthrough {
        self.passthrough
    }
}

impl<F> Default for Trycatch<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Clone for Trycatch<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for Trycatch<F> {}

impl<F> std::fmt::Debug for Trycatch<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trycatch")
            .field("fault", &type_name::<F>())
            .field("passthrough", &self.passthrough)
            .finish()
    }
}

/// Intercepts faults of kind `F` raised by the rest of the chain.
pub const fn trycatch<F: Any + Send>() -> Modifier<Trycatch<F>> {
    Modifier::new(Trycatch::new())
}

impl<F> Modifier<Trycatch<F>> {
    /// Sets the policy for faults of other kinds.
    #[must_use]
    pub fn with_passthrough(self, passthrough: Passthrough) -> Self {
        self.map(|strategy| Trycatch {
            passthrough,
            ..strategy
        })
    }

    /// Declares that no fault escapes this scope: faults of other kinds
    /// abort the process.
    #[must_use]
    pub fn no_passthrough(self) -> Self {
        self.with_passthrough(Passthrough::Abort)
    }
}

impl<F, I, B> Strategy<I, B> for Trycatch<F>
where
    F: Any,
    B: Operation<I>,
{
    type Output = Option<B::Output>;
    type Channel = OptionChannel;

    fn apply(&self, body: &B, input: I) -> Self::Output {
        match panic::catch_unwind(AssertUnwindSafe(move || body.invoke(input))) {
            Ok(output) => Some(output),
            Err(payload) if payload.is::<F>() => {
                debug!(fault = type_name::<F>(), "Intercepted fault");
                None
            }
            Err(payload) => self.passthrough.escape(payload),
        }
    }
}

/// Mode marker: the handler's result becomes the error case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Absorb;

/// Mode marker: the handler runs, then the fault keeps unwinding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rethrow;

/// Strategy of the [`trycatch_handled`] modifier.
///
/// `H` is called with the intercepted fault of kind `F` and returns `R`.
/// In [`Absorb`] mode the scope yields `Ok` of the body result or
/// `Err(handler(&fault))`. In [`Rethrow`] mode
/// the scope yields exactly the body's result and the fault is re-raised
/// after the handler returns.
pub struct TrycatchHandled<F, H, R, Mode = Absorb> {
    handler: H,
    passthrough: Passthrough,
    marker: PhantomData<fn(F) -> (R, Mode)>,
}

impl<F, H, R, Mode> TrycatchHandled<F, H, R, Mode> {
    /// Returns the policy for faults of other kinds.
    #[must_use]
    pub const fn passthrough(&self) -> Passthrough {
        self.passthrough
    }

    /// Returns the handler.
    pub const fn handler(&self) -> &H {
        &self.handler
    }

    fn into_mode<Next>(self) -> TrycatchHandled<F, H, R, Next> {
        TrycatchHandled {
            handler: self.handler,
            passthrough: self.passthrough,
            marker: PhantomData,
        }
    }
}

impl<F, H: Clone, R, Mode> Clone for TrycatchHandled<F, H, R, Mode> {
    fn clone(&self) -> Self {
        Self {
            handler: self.handler.clone(),
            passthrough: self.passthrough,
            marker: PhantomData,
        }
    }
}

impl<F, H, R, Mode> std::fmt::Debug for TrycatchHandled<F, H, R, Mode> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrycatchHandled")
            .field("fault", &type_name::<F>())
            .field("mode", &type_name::<Mode>())
            .field("passthrough", &self.passthrough)
            .finish_non_exhaustive()
    }
}

/// Intercepts faults of kind `F` and converts them with `handler`.
///
/// Starts in [`Absorb`] mode; call [`rethrow`](Modifier::rethrow) to
/// observe the fault and let it continue.
pub fn trycatch_handled<F, R, H>(handler: H) -> Modifier<TrycatchHandled<F, H, R>>
where
    F: Any + Send,
    H: Fn(&F) -> R,
{
    Modifier::new(TrycatchHandled {
        handler,
        passthrough: Passthrough::Propagate,
        marker: PhantomData,
    })
}

impl<F, H, R> Modifier<TrycatchHandled<F, H, R, Absorb>> {
    /// Switches to rethrow mode: the handler only observes the fault.
    pub fn rethrow(self) -> Modifier<TrycatchHandled<F, H, R, Rethrow>> {
        self.map(TrycatchHandled::into_mode)
    }

    /// Sets the policy for faults of other kinds.
    #[must_use]
    pub fn with_passthrough(self, passthrough: Passthrough) -> Self {
        self.map(|strategy| TrycatchHandled {
            passthrough,
            ..strategy
        })
    }

    /// Declares that no fault escapes this scope: faults of other kinds
    /// abort the process.
    #[must_use]
    pub fn no_passthrough(self) -> Self {
        self.with_passthrough(Passthrough::Abort)
    }
}

impl<F, H, R, I, B> Strategy<I, B> for TrycatchHandled<F, H, R, Absorb>
where
    F: Any,
    H: Fn(&F) -> R,
    B: Operation<I>,
{
    type Output = Result<B::Output, R>;
    type Channel = ResultChannel<R>;

    fn apply(&self, body: &B, input: I) -> Self::Output {
        match panic::catch_unwind(AssertUnwindSafe(move || body.invoke(input))) {
            Ok(output) => Ok(output),
            Err(payload) => match payload.downcast::<F>() {
                Ok(fault) => {
                    debug!(fault = type_name::<F>(), "Intercepted fault, running handler");
                    Err((self.handler)(&*fault))
                }
                Err(payload) => self.passthrough.escape(payload),
            },
        }
    }
}

// Every fault keeps unwinding in rethrow mode, so the passthrough policy
// does not apply.
impl<F, H, R, I, B> Strategy<I, B> for TrycatchHandled<F, H, R, Rethrow>
where
    F: Any,
    H: Fn(&F) -> R,
    B: Operation<I>,
{
    type Output = B::Output;
    type Channel = Direct;

    fn apply(&self, body: &B, input: I) -> Self::Output {
        match panic::catch_unwind(AssertUnwindSafe(move || body.invoke(input))) {
            Ok(output) => output,
            Err(payload) => {
                if let Some(fault) = payload.downcast_ref::<F>() {
                    debug!(fault = type_name::<F>(), "Intercepted fault, rethrowing after handler");
                    let _ = (self.handler)(fault);
                }
                panic::resume_unwind(payload)
            }
        }
    }
}
