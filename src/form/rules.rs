//! Declarative per-field rule table.
//!
//! Each [`FieldName`] maps to one [`FieldRule`]: how raw input is turned into a
//! stored value, which predicate the stored value must satisfy, and the message
//! reported when it does not. The engine iterates this table uniformly instead
//! of wiring a handler per field.

use super::format::{format_phone, format_pin, is_price_input};
use super::validate::{is_valid_email, is_valid_name, is_valid_phone, is_valid_pin, is_valid_price};
use crate::domain::FieldName;

/// How raw input becomes a stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formatter {
    /// Stored exactly as typed.
    Verbatim,
    /// `(AAA) BBB-CCCC` phone mask.
    Phone,
    /// Sixteen-digit PIN, grouped only while visible.
    Pin,
    /// Free decimal typing; inputs outside the price shape are refused.
    Price,
}

impl Formatter {
    /// Applies the formatter to `raw`.
    ///
    /// Returns `None` when the input is refused and the stored value must stay
    /// as it was.
    #[must_use]
    pub fn apply(self, raw: &str, pin_visible: bool) -> Option<String> {
        match self {
            Self::Verbatim => Some(raw.to_string()),
            Self::Phone => Some(format_phone(raw)),
            Self::Pin => Some(format_pin(raw, pin_visible)),
            Self::Price => is_price_input(raw).then(|| raw.to_string()),
        }
    }
}

/// Predicate a stored value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    Name,
    Phone,
    Email,
    Price,
    Pin,
}

impl Validator {
    #[must_use]
    pub fn check(self, value: &str) -> bool {
        match self {
            Self::Name => is_valid_name(value),
            Self::Phone => is_valid_phone(value),
            Self::Email => is_valid_email(value),
            Self::Price => is_valid_price(value),
            Self::Pin => is_valid_pin(value),
        }
    }
}

/// Formatting, validation and messaging for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: FieldName,
    pub formatter: Formatter,
    pub validator: Validator,
    pub message: &'static str,
}

impl FieldRule {
    /// Validates `value`, returning this rule's message on failure.
    #[must_use]
    pub fn validate(&self, value: &str) -> Option<&'static str> {
        (!self.validator.check(value)).then_some(self.message)
    }
}

/// The rule table, indexed by [`FieldName::index`].
pub static RULES: [FieldRule; FieldName::COUNT] = [
    FieldRule {
        field: FieldName::FirstName,
        formatter: Formatter::Verbatim,
        validator: Validator::Name,
        message: "First name must be at least 2 characters",
    },
    FieldRule {
        field: FieldName::LastName,
        formatter: Formatter::Verbatim,
        validator: Validator::Name,
        message: "Last name must be at least 2 characters",
    },
    FieldRule {
        field: FieldName::PhoneNumber,
        formatter: Formatter::Phone,
        validator: Validator::Phone,
        message: "Please enter a valid 10-digit phone number",
    },
    FieldRule {
        field: FieldName::EmailAddress,
        formatter: Formatter::Verbatim,
        validator: Validator::Email,
        message: "Please enter a valid email address",
    },
    FieldRule {
        field: FieldName::PriceGuess,
        formatter: Formatter::Price,
        validator: Validator::Price,
        message: "Please enter a valid price between $0.01 and $10,000.00",
    },
    FieldRule {
        field: FieldName::Pin,
        formatter: Formatter::Pin,
        validator: Validator::Pin,
        message: "PIN must be exactly 16 digits",
    },
];

impl FieldName {
    /// The rule governing this field.
    #[must_use]
    pub fn rule(self) -> &'static FieldRule {
        &RULES[self.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_field() {
        for field in FieldName::ALL {
            assert_eq!(field.rule().field, field);
        }
    }

    #[test]
    fn price_formatter_refuses_bad_shapes() {
        assert_eq!(Formatter::Price.apply("12.5", false), Some("12.5".into()));
        assert_eq!(Formatter::Price.apply("12.555", false), None);
        assert_eq!(Formatter::Price.apply("", false), Some(String::new()));
    }

    #[test]
    fn verbatim_keeps_whitespace() {
        assert_eq!(Formatter::Verbatim.apply("  Al ", false), Some("  Al ".into()));
    }

    #[test]
    fn validate_returns_the_rule_message() {
        let rule = FieldName::EmailAddress.rule();
        assert_eq!(rule.validate("nope"), Some("Please enter a valid email address"));
        assert_eq!(rule.validate("x@y.com"), None);
    }
}
