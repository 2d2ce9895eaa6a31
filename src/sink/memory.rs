//! In-memory sink.

use super::SubmissionSink;
use crate::domain::{Result, ValidatedPayload};

/// Collects delivered payloads in order.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    payloads: Vec<ValidatedPayload>,
}

impl MemorySink {
    #[must_use]
    pub fn delivered(&self) -> &[ValidatedPayload] {
        &self.payloads
    }

    /// Takes every payload delivered so far, leaving the sink empty.
    pub fn drain(&mut self) -> Vec<ValidatedPayload> {
        std::mem::take(&mut self.payloads)
    }
}

impl SubmissionSink for MemorySink {
    fn deliver(&mut self, payload: &ValidatedPayload) -> Result<()> {
        self.payloads.push(payload.clone());
        Ok(())
    }
}
