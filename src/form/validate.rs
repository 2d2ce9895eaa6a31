//! Field validators.
//!
//! Each validator is a pure predicate over a field's *stored* value, which for
//! masked fields still contains its formatting.

use super::format::{digits, PHONE_DIGITS, PIN_DIGITS};
use regex::Regex;
use std::sync::OnceLock;

/// Minimum trimmed length for first and last names, in characters.
pub const MIN_NAME_CHARS: usize = 2;

/// Largest accepted price guess.
pub const MAX_PRICE: f64 = 10_000.0;

/// Trimmed value has at least [`MIN_NAME_CHARS`] characters.
#[must_use]
pub fn is_valid_name(value: &str) -> bool {
    value.trim().chars().count() >= MIN_NAME_CHARS
}

/// Exactly ten digits once formatting is stripped.
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    digits(value).len() == PHONE_DIGITS
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should always compile")
    })
}

/// Trimmed value looks like `local@domain.tld`.
///
/// ```
/// use air_fryer_form::form::validate::is_valid_email;
///
/// assert!(is_valid_email(" a@b.co "));
/// assert!(!is_valid_email("not-an-email"));
/// ```
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value.trim())
}

/// Parses a stored price guess, returning `None` unless it is a finite number.
#[must_use]
pub fn parse_price(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
}

/// Non-empty, finite and within `(0, MAX_PRICE]`.
#[must_use]
pub fn is_valid_price(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    parse_price(value).is_some_and(|price| price > 0.0 && price <= MAX_PRICE)
}

/// Exactly sixteen digits once separators are stripped.
#[must_use]
pub fn is_valid_pin(value: &str) -> bool {
    digits(value).len() == PIN_DIGITS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_need_two_trimmed_characters() {
        assert!(is_valid_name("Al"));
        assert!(is_valid_name("  Li  "));
        assert!(!is_valid_name(" A "));
        assert!(!is_valid_name(""));
        assert!(is_valid_name("Zoë"));
        assert!(is_valid_name("李明"));
    }

    #[test]
    fn phone_counts_digits_only() {
        assert!(is_valid_phone("(555) 123-4567"));
        assert!(is_valid_phone("5551234567"));
        assert!(!is_valid_phone("(555) 123-456"));
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn price_boundaries() {
        assert!(is_valid_price("10000"));
        assert!(is_valid_price("0.01"));
        assert!(is_valid_price("19.99"));
        assert!(is_valid_price("5."));
        assert!(!is_valid_price("10000.01"));
        assert!(!is_valid_price(""));
        assert!(!is_valid_price("0"));
        assert!(!is_valid_price("."));
        assert!(!is_valid_price("inf"));
        assert!(!is_valid_price("NaN"));
    }

    #[test]
    fn pin_boundaries() {
        assert!(!is_valid_pin("123456789012345"));
        assert!(is_valid_pin("1234567890123456"));
        assert!(is_valid_pin("1234-5678-9012-3456"));
        assert!(!is_valid_pin("12345678901234567"));
    }
}
