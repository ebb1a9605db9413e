//! Short-circuit on absence.

use tracing::trace;

use crate::channel::{Flatten, OptionChannel};
use crate::core::{Modifier, Strategy};

/// Strategy of the [`MAYBE`] modifier.
///
/// The scope takes `Option<T>`. `None` is returned as is without running the
/// body; `Some(t)` runs the body on `t`. The scope yields a single
/// `Option` layer however many absence-producing steps the body contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Maybe;

/// The optional short-circuit modifier.
pub const MAYBE: Modifier<Maybe> = Modifier::new(Maybe);

/// Returns [`MAYBE`].
pub const fn maybe() -> Modifier<Maybe> {
    MAYBE
}

impl<T, B> Strategy<Option<T>, B> for Maybe
where
    B: Flatten<OptionChannel, T>,
{
    type Output = Option<B::Value>;
    type Channel = OptionChannel;

    fn apply(&self, body: &B, input: Option<T>) -> Self::Output {
        let Some(value) = input else {
            trace!(modifier = "maybe", "Input absent, skipping body");
            return None;
        };
        body.flatten(value)
    }
}
