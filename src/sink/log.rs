//! Diagnostic sink that records submissions in the trace log.

use super::SubmissionSink;
use crate::domain::{Result, ValidatedPayload};

/// Emits each submission as an `info` tracing event.
///
/// The payload is serialized to JSON and attached as the `payload` field; the
/// delivery time is attached separately as `submitted_at` and never becomes
/// part of the payload itself.
#[derive(Debug, Default)]
pub struct LogSink {
    delivered: usize,
}

impl LogSink {
    #[must_use]
    pub const fn new() -> Self {
        Self { delivered: 0 }
    }

    /// Number of payloads delivered so far.
    #[must_use]
    pub const fn delivered(&self) -> usize {
        self.delivered
    }

    /// Renders the log record body for `payload`.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be serialized.
    pub fn render(payload: &ValidatedPayload) -> Result<String> {
        Ok(serde_json::to_string(payload)?)
    }
}

impl SubmissionSink for LogSink {
    fn deliver(&mut self, payload: &ValidatedPayload) -> Result<()> {
        // Events only reach the OTLP exporter inside a span.
        let _span = tracing::info_span!("deliver_submission").entered();
        let body = Self::render(payload)?;
        let submitted_at = chrono::Utc::now().to_rfc3339();

        self.delivered += 1;
        tracing::info!(
            submitted_at = %submitted_at,
            sequence = self.delivered,
            payload = %body,
            "interest form submitted successfully"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ValidatedPayload {
        ValidatedPayload {
            first_name: "Al".into(),
            last_name: "Li".into(),
            phone_number: "5551234567".into(),
            email_address: "a@b.co".into(),
            price_guess: 19.99,
            pin: "1234567890123456".into(),
        }
    }

    #[test]
    fn render_is_the_bare_payload() {
        let body = LogSink::render(&payload()).unwrap();
        assert_eq!(
            body,
            r#"{"firstName":"Al","lastName":"Li","phoneNumber":"5551234567","emailAddress":"a@b.co","priceGuess":19.99,"pin":"1234567890123456"}"#
        );
    }

    #[test]
    fn deliver_counts_submissions() {
        let mut sink = LogSink::new();
        sink.deliver(&payload()).unwrap();
        sink.deliver(&payload()).unwrap();
        assert_eq!(sink.delivered(), 2);
    }
}
