//! Input masks applied at the point of change.
//!
//! Every formatter here is total: any string in, a display string out. They
//! operate on ASCII digits only; every other character is treated as
//! formatting and dropped.

use regex::Regex;
use std::sync::OnceLock;

/// Digits kept for a phone number.
pub const PHONE_DIGITS: usize = 10;

/// Digits kept for a PIN.
pub const PIN_DIGITS: usize = 16;

/// Digits per PIN group when the PIN is visible.
pub const PIN_GROUP: usize = 4;

/// Separator inserted between visible PIN groups.
pub const PIN_SEPARATOR: char = '-';

/// Returns only the ASCII digits of `value`, in order.
///
/// ```
/// use air_fryer_form::form::format::digits;
///
/// assert_eq!(digits("(555) 123-4567"), "5551234567");
/// ```
#[must_use]
pub fn digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

fn truncated_digits(value: &str, max: usize) -> String {
    value.chars().filter(char::is_ascii_digit).take(max).collect()
}

/// Renders up to ten digits as `(AAA) BBB-CCCC`, progressively.
///
/// Parentheses appear once a fourth digit exists and the dash once a seventh
/// does.
///
/// ```
/// use air_fryer_form::form::format::format_phone;
///
/// assert_eq!(format_phone("555"), "555");
/// assert_eq!(format_phone("5551"), "(555) 1");
/// assert_eq!(format_phone("5551234567999"), "(555) 123-4567");
/// ```
#[must_use]
pub fn format_phone(value: &str) -> String {
    let d = truncated_digits(value, PHONE_DIGITS);
    match d.len() {
        0..=3 => d,
        4..=6 => format!("({}) {}", &d[..3], &d[3..]),
        _ => format!("({}) {}-{}", &d[..3], &d[3..6], &d[6..]),
    }
}

/// Keeps up to sixteen digits, grouped in fours when `visible`.
///
/// A separator follows each complete group only when another digit comes
/// after it, so a trailing separator never appears.
///
/// ```
/// use air_fryer_form::form::format::format_pin;
///
/// assert_eq!(format_pin("12345", false), "12345");
/// assert_eq!(format_pin("12345", true), "1234-5");
/// assert_eq!(format_pin("1234", true), "1234");
/// ```
#[must_use]
pub fn format_pin(value: &str, visible: bool) -> String {
    let d = truncated_digits(value, PIN_DIGITS);
    if !visible {
        return d;
    }

    let mut out = String::with_capacity(d.len() + d.len() / PIN_GROUP);
    for (i, c) in d.chars().enumerate() {
        if i > 0 && i % PIN_GROUP == 0 {
            out.push(PIN_SEPARATOR);
        }
        out.push(c);
    }
    out
}

fn price_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[0-9]*\.?[0-9]{0,2}$").expect("price pattern should always compile")
    })
}

/// Whether `value` may be stored as an in-progress price guess.
///
/// Accepts the empty string and anything shaped like optional digits, an
/// optional decimal point and at most two fractional digits, so partial
/// decimals such as `"12."` can be typed freely.
#[must_use]
pub fn is_price_input(value: &str) -> bool {
    value.is_empty() || price_pattern().is_match(value)
}
