//! Property tests for the input masks and the engine's validity contract.

use air_fryer_form::form::format::{digits, format_phone, format_pin, is_price_input};
use air_fryer_form::{FieldName, FormEngine};
use proptest::prelude::*;

fn any_input() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{0,24}",
        "[0-9() .+-]{0,24}",
        any::<String>(),
    ]
}

fn form_values() -> impl Strategy<Value = [String; 6]> {
    (
        "[A-Za-z ]{0,4}",
        "[A-Za-z ]{0,4}",
        "[0-9]{8,11}",
        prop_oneof!["[a-z]{1,3}@[a-z]{1,3}\\.[a-z]{2}", "[a-z@. ]{0,6}"],
        prop_oneof!["[0-9]{1,5}(\\.[0-9]{1,2})?", "[0-9.]{0,4}"],
        "[0-9]{14,17}",
    )
        .prop_map(|(first, last, phone, email, price, pin)| [first, last, phone, email, price, pin])
}

proptest! {
    #[test]
    fn phone_never_keeps_more_than_ten_digits(raw in any_input()) {
        let mut engine = FormEngine::new();
        let change = engine.change_field(FieldName::PhoneNumber, &raw);
        prop_assert!(digits(&change.value).len() <= 10);
    }

    #[test]
    fn phone_format_is_idempotent(raw in any_input()) {
        let once = format_phone(&raw);
        prop_assert_eq!(format_phone(&once), once);
    }

    #[test]
    fn visible_pin_format_is_stable(raw in any_input()) {
        let grouped = format_pin(&raw, true);
        prop_assert_eq!(format_pin(&grouped, true), grouped.clone());
        prop_assert_eq!(format_pin(&digits(&grouped), true), grouped);
    }

    #[test]
    fn masked_pin_stores_bare_digits(raw in any_input()) {
        let mut engine = FormEngine::new();
        let change = engine.change_field(FieldName::Pin, &raw);
        let expected: String = digits(&raw).chars().take(16).collect();
        prop_assert_eq!(change.value, expected);
    }

    #[test]
    fn refused_price_input_keeps_previous_value(raw in "[0-9a-z.$,]{0,8}") {
        let mut engine = FormEngine::new();
        engine.change_field(FieldName::PriceGuess, "12.5");
        let change = engine.change_field(FieldName::PriceGuess, &raw);
        if is_price_input(&raw) {
            prop_assert_eq!(change.value, raw);
        } else {
            prop_assert_eq!(change.value, "12.5");
        }
    }

    #[test]
    fn is_valid_agrees_with_submit(values in form_values()) {
        let mut engine = FormEngine::new();
        for (field, raw) in FieldName::ALL.into_iter().zip(values.iter()) {
            engine.change_field(field, raw);
        }
        let valid = engine.is_valid();
        let outcome = engine.submit();
        prop_assert_eq!(valid, outcome.is_ok());
        if let Err(errors) = outcome {
            prop_assert!(!errors.is_empty());
        } else {
            prop_assert!(engine.errors().is_empty());
        }
    }

    #[test]
    fn change_never_adds_an_error(field_idx in 0usize..6, raw in any_input()) {
        let mut engine = FormEngine::new();
        engine.change_field(FieldName::ALL[field_idx], &raw);
        prop_assert!(engine.errors().is_empty());
    }
}

#[test]
fn price_bounds() {
    let mut engine = FormEngine::new();
    let cases = [("10000", true), ("10000.01", false), ("", false), ("0", false), ("0.01", true)];
    for (raw, valid) in cases {
        engine.change_field(FieldName::PriceGuess, raw);
        assert_eq!(
            engine.blur_field(FieldName::PriceGuess).is_none(),
            valid,
            "price {raw:?}"
        );
    }
}

#[test]
fn pin_lengths() {
    let mut engine = FormEngine::new();

    engine.change_field(FieldName::Pin, "123456789012345");
    assert!(engine.blur_field(FieldName::Pin).is_some());

    engine.change_field(FieldName::Pin, "1234-5678-9012-3456");
    assert!(engine.blur_field(FieldName::Pin).is_none());

    let change = engine.change_field(FieldName::Pin, "12345678901234567");
    assert_eq!(change.value, "1234567890123456");
}
