//! The normalized record handed to a submission sink.

use serde::{Deserialize, Serialize};

/// A fully validated, type-coerced submission.
///
/// Only produced by [`FormEngine::submit`](crate::form::FormEngine::submit)
/// when every field passes. Phone number and PIN carry raw digits, the price
/// guess is parsed to a number; the remaining fields are passed through
/// verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedPayload {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email_address: String,
    pub price_guess: f64,
    pub pin: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_exactly_six_camel_case_keys() {
        let payload = ValidatedPayload {
            first_name: "Al".into(),
            last_name: "Li".into(),
            phone_number: "5551234567".into(),
            email_address: "a@b.co".into(),
            price_guess: 19.99,
            pin: "1234567890123456".into(),
        };

        let json = serde_json::to_value(&payload).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 6);
        assert_eq!(json["phoneNumber"], "5551234567");
        assert_eq!(json["priceGuess"], 19.99);
        assert_eq!(json["pin"], "1234567890123456");
    }
}
