//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to the host or to a submission sink directly.
//! It returns a `Vec<Action>` and the plugin runtime executes them in order.

use crate::domain::ValidatedPayload;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Hands a validated payload to the submission sink.
    ///
    /// Emitted exactly once per successful submit; never emitted while any
    /// field is invalid.
    Submit(ValidatedPayload),
}
