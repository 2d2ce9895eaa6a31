//! Submission sinks.
//!
//! A [`SubmissionSink`] is the collaborator that receives a
//! [`ValidatedPayload`] once the form submits successfully. The engine's job
//! ends at producing the payload; what happens to it is the sink's concern.
//!
//! # Implementations
//!
//! - [`LogSink`]: emits the payload as a structured tracing event (default)
//! - [`MemorySink`]: keeps payloads in memory, for tests and embedding hosts

mod log;
mod memory;

pub use self::log::LogSink;
pub use self::memory::MemorySink;

use crate::domain::{Result, ValidatedPayload};

/// Receives validated submissions.
///
/// # Examples
///
/// ```
/// use air_fryer_form::sink::{MemorySink, SubmissionSink};
/// use air_fryer_form::ValidatedPayload;
///
/// let mut sink = MemorySink::default();
/// let payload = ValidatedPayload {
///     first_name: "Al".into(),
///     last_name: "Li".into(),
///     phone_number: "5551234567".into(),
///     email_address: "a@b.co".into(),
///     price_guess: 19.99,
///     pin: "1234567890123456".into(),
/// };
/// sink.deliver(&payload)?;
/// assert_eq!(sink.delivered(), &[payload]);
/// # Ok::<(), air_fryer_form::FormError>(())
/// ```
pub trait SubmissionSink {
    /// Hands `payload` to the sink.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be serialized or delivered.
    fn deliver(&mut self, payload: &ValidatedPayload) -> Result<()>;
}
