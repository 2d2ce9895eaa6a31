//! Field identity for the interest form.
//!
//! [`FieldName`] is the closed set of inputs the form collects. Its declaration
//! order is the on-screen order, the focus order and the iteration order of
//! every per-field record in this crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six inputs collected by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    PhoneNumber,
    EmailAddress,
    PriceGuess,
    Pin,
}

impl FieldName {
    /// Number of fields on the form.
    pub const COUNT: usize = 6;

    /// Every field, in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::FirstName,
        Self::LastName,
        Self::PhoneNumber,
        Self::EmailAddress,
        Self::PriceGuess,
        Self::Pin,
    ];

    /// Position of the field in [`FieldName::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::FirstName => 0,
            Self::LastName => 1,
            Self::PhoneNumber => 2,
            Self::EmailAddress => 3,
            Self::PriceGuess => 4,
            Self::Pin => 5,
        }
    }

    /// The camelCase key used in payloads and logs.
    ///
    /// ```
    /// use air_fryer_form::FieldName;
    ///
    /// assert_eq!(FieldName::PriceGuess.key(), "priceGuess");
    /// ```
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::PhoneNumber => "phoneNumber",
            Self::EmailAddress => "emailAddress",
            Self::PriceGuess => "priceGuess",
            Self::Pin => "pin",
        }
    }

    /// Human-readable label shown above the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::PhoneNumber => "Phone Number",
            Self::EmailAddress => "Email Address",
            Self::PriceGuess => "Guess the Air Fryer's Cost",
            Self::Pin => "Very, VERY Secret 16-digit Spidr PIN",
        }
    }

    /// Looks a field up by its camelCase key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
