//! Domain layer for the interest form.
//!
//! Plain data types shared by every other layer, free of Zellij APIs and of
//! any formatting or validation logic.
//!
//! # Organization
//!
//! - [`error`]: Infrastructure error type and result alias
//! - [`field`]: The [`FieldName`] enum
//! - [`record`]: Values, errors and touched flags keyed by field
//! - [`payload`]: The [`ValidatedPayload`] handed to submission sinks

pub mod error;
pub mod field;
pub mod payload;
pub mod record;

pub use error::{FormError, Result};
pub use field::FieldName;
pub use payload::ValidatedPayload;
pub use record::{FieldErrors, FormValues, TouchedFlags};
