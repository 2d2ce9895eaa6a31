//! Per-field records held by the form engine.
//!
//! - [`FormValues`]: the six stored strings (display form, formatting included)
//! - [`FieldErrors`]: current validation message per field, absent when valid
//! - [`TouchedFlags`]: whether each field has been blurred at least once

use super::field::FieldName;
use serde::Serialize;
use std::collections::BTreeMap;

/// The six stored field values.
///
/// Phone number, price guess and PIN hold their *display* strings; callers that
/// need raw digits must strip formatting themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email_address: String,
    pub price_guess: String,
    pub pin: String,
}

impl FormValues {
    /// Returns the stored value for `field`.
    #[must_use]
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::PhoneNumber => &self.phone_number,
            FieldName::EmailAddress => &self.email_address,
            FieldName::PriceGuess => &self.price_guess,
            FieldName::Pin => &self.pin,
        }
    }

    /// Replaces the stored value for `field`.
    pub fn set(&mut self, field: FieldName, value: String) {
        let slot = match field {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::PhoneNumber => &mut self.phone_number,
            FieldName::EmailAddress => &mut self.email_address,
            FieldName::PriceGuess => &mut self.price_guess,
            FieldName::Pin => &mut self.pin,
        };
        *slot = value;
    }
}

/// Validation messages keyed by field.
///
/// A field with no entry is currently valid. Messages come from the static
/// rule table, so entries are `&'static str`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<FieldName, &'static str>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, field: FieldName) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    /// Writes the entry for `field`: `Some` sets a message, `None` clears it.
    pub fn set(&mut self, field: FieldName, message: Option<&'static str>) {
        match message {
            Some(message) => {
                self.0.insert(field, message);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub fn clear(&mut self, field: FieldName) {
        self.0.remove(&field);
    }

    #[must_use]
    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }
}

/// Per-field "has been blurred" flags, all false initially.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchedFlags([bool; FieldName::COUNT]);

impl TouchedFlags {
    #[must_use]
    pub const fn get(&self, field: FieldName) -> bool {
        self.0[field.index()]
    }

    pub fn touch(&mut self, field: FieldName) {
        self.0[field.index()] = true;
    }

    pub fn touch_all(&mut self) {
        self.0 = [true; FieldName::COUNT];
    }

    #[must_use]
    pub fn all(&self) -> bool {
        self.0.iter().all(|touched| *touched)
    }

    #[must_use]
    pub fn any(&self) -> bool {
        self.0.iter().any(|touched| *touched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_get_and_set_address_the_same_slot() {
        let mut values = FormValues::default();
        for field in FieldName::ALL {
            values.set(field, field.key().to_string());
        }
        for field in FieldName::ALL {
            assert_eq!(values.get(field), field.key());
        }
    }

    #[test]
    fn errors_set_none_removes_entry() {
        let mut errors = FieldErrors::new();
        errors.set(FieldName::Pin, Some("bad"));
        assert_eq!(errors.get(FieldName::Pin), Some("bad"));
        errors.set(FieldName::Pin, None);
        assert!(errors.is_empty());
    }

    #[test]
    fn errors_iterate_in_field_order() {
        let mut errors = FieldErrors::new();
        errors.set(FieldName::Pin, Some("p"));
        errors.set(FieldName::FirstName, Some("f"));
        let order: Vec<_> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(order, vec![FieldName::FirstName, FieldName::Pin]);
    }

    #[test]
    fn touched_flags_start_clear() {
        let mut touched = TouchedFlags::default();
        assert!(!touched.any());
        touched.touch(FieldName::EmailAddress);
        assert!(touched.get(FieldName::EmailAddress));
        assert!(!touched.all());
        touched.touch_all();
        assert!(touched.all());
    }
}
