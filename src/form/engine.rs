//! The form state engine.
//!
//! [`FormEngine`] owns the six field values, their validation messages, their
//! touched flags and the PIN visibility toggle. It exposes one operation per
//! user action; every operation is synchronous, total over its input and
//! reports validation failure as data.
//!
//! # Error Visibility
//!
//! Errors are *cleared* eagerly on change, as soon as the new value passes, but
//! they are only *set* on blur or submit. A message therefore appears after the
//! user leaves a field and disappears the moment the input is corrected.
//!
//! # Example
//!
//! ```rust
//! use air_fryer_form::{FieldName, FormEngine};
//!
//! let mut engine = FormEngine::new();
//! engine.change_field(FieldName::EmailAddress, "not-an-email");
//! assert_eq!(
//!     engine.blur_field(FieldName::EmailAddress),
//!     Some("Please enter a valid email address")
//! );
//!
//! engine.change_field(FieldName::EmailAddress, "x@y.com");
//! assert_eq!(engine.blur_field(FieldName::EmailAddress), None);
//! ```

use super::format::{digits, format_pin};
use super::validate::parse_price;
use crate::domain::{FieldErrors, FieldName, FormValues, TouchedFlags, ValidatedPayload};

/// Outcome of [`FormEngine::change_field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    /// The value now stored for the field.
    pub value: String,
    /// Whether an existing error entry was removed by this change.
    pub cleared_error: bool,
}

/// Canonical form state plus the operations that mutate it.
#[derive(Debug, Clone, Default)]
pub struct FormEngine {
    values: FormValues,
    errors: FieldErrors,
    touched: TouchedFlags,
    pin_visible: bool,
}

impl FormEngine {
    /// Creates an engine with empty values, no errors, nothing touched and the
    /// PIN masked.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `raw` input to `field`.
    ///
    /// The field's formatter runs first; a refused input (price guesses that
    /// are not decimal-shaped) leaves the stored value untouched. If the
    /// resulting value passes validation, the field's error entry is cleared.
    /// This never adds an error.
    pub fn change_field(&mut self, field: FieldName, raw: &str) -> FieldChange {
        let _span = tracing::debug_span!("change_field", field = %field, raw_len = raw.len()).entered();

        let rule = field.rule();
        let Some(value) = rule.formatter.apply(raw, self.pin_visible) else {
            tracing::trace!("input refused by formatter");
            return FieldChange {
                value: self.values.get(field).to_string(),
                cleared_error: false,
            };
        };

        let passes = rule.validator.check(&value);
        self.values.set(field, value.clone());

        let cleared_error = passes && self.errors.contains(field);
        if passes {
            self.errors.clear(field);
        }

        tracing::trace!(value_len = value.len(), passes, cleared_error, "field changed");

        FieldChange {
            value,
            cleared_error,
        }
    }

    /// Marks `field` touched and refreshes its error entry.
    ///
    /// All fields are validated, but only the blurred field's entry is
    /// written. Returns that field's message, if any.
    pub fn blur_field(&mut self, field: FieldName) -> Option<&'static str> {
        let _span = tracing::debug_span!("blur_field", field = %field).entered();

        self.touched.touch(field);
        let message = self.validate_all().get(field);
        self.errors.set(field, message);

        tracing::debug!(has_error = message.is_some(), "field blurred");
        message
    }

    /// Flips PIN visibility and regroups the stored PIN accordingly.
    ///
    /// The digit sequence is unchanged; only separators are added or removed.
    /// Returns the new display value.
    pub fn toggle_pin_visibility(&mut self) -> &str {
        self.pin_visible = !self.pin_visible;
        let regrouped = format_pin(self.values.get(FieldName::Pin), self.pin_visible);
        self.values.set(FieldName::Pin, regrouped);

        tracing::debug!(pin_visible = self.pin_visible, "pin visibility toggled");
        self.values.get(FieldName::Pin)
    }

    /// Attempts a submission.
    ///
    /// Touches every field and replaces the error map with a full
    /// revalidation. When nothing fails, returns the normalized payload.
    ///
    /// # Errors
    ///
    /// Returns the complete [`FieldErrors`] map when any field is invalid.
    pub fn submit(&mut self) -> Result<ValidatedPayload, FieldErrors> {
        let _span = tracing::debug_span!("submit").entered();

        self.touched.touch_all();
        self.errors = self.validate_all();

        if !self.errors.is_empty() {
            tracing::debug!(error_count = self.errors.len(), "submission rejected");
            return Err(self.errors.clone());
        }

        // Validation guarantees the price parses; the fallback is unreachable.
        let price_guess = parse_price(&self.values.price_guess).unwrap_or_default();

        tracing::debug!("submission accepted");
        Ok(ValidatedPayload {
            first_name: self.values.first_name.clone(),
            last_name: self.values.last_name.clone(),
            phone_number: digits(&self.values.phone_number),
            email_address: self.values.email_address.clone(),
            price_guess,
            pin: digits(&self.values.pin),
        })
    }

    /// Whether every current value passes its validator, regardless of which
    /// fields have been touched.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        FieldName::ALL
            .into_iter()
            .all(|field| field.rule().validator.check(self.values.get(field)))
    }

    /// Validates every field against its stored value.
    #[must_use]
    pub fn validate_all(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field in FieldName::ALL {
            errors.set(field, field.rule().validate(self.values.get(field)));
        }
        errors
    }

    #[must_use]
    pub fn value(&self, field: FieldName) -> &str {
        self.values.get(field)
    }

    /// The recorded error for `field`, whether or not it is shown yet.
    #[must_use]
    pub fn error(&self, field: FieldName) -> Option<&'static str> {
        self.errors.get(field)
    }

    #[must_use]
    pub const fn is_touched(&self, field: FieldName) -> bool {
        self.touched.get(field)
    }

    /// The error for `field` only once the field has been touched.
    #[must_use]
    pub fn visible_error(&self, field: FieldName) -> Option<&'static str> {
        self.error(field).filter(|_| self.is_touched(field))
    }

    #[must_use]
    pub const fn pin_visible(&self) -> bool {
        self.pin_visible
    }

    #[must_use]
    pub const fn values(&self) -> &FormValues {
        &self.values
    }

    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub const fn touched(&self) -> &TouchedFlags {
        &self.touched
    }
}
