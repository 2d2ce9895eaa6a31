//! Error types for the interest form plugin.
//!
//! Field validation failures are *not* errors in this sense: they are data,
//! carried by [`FieldErrors`](super::FieldErrors). [`FormError`] covers the
//! infrastructure around the form: theme loading, configuration and serializing
//! a payload for a submission sink.

use thiserror::Error;

/// The main error type for plugin infrastructure.
///
/// # Examples
///
/// ```
/// use air_fryer_form::FormError;
///
/// fn check_title(title: &str) -> Result<(), FormError> {
///     if title.is_empty() {
///         return Err(FormError::Config("title must not be empty".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(check_title("").is_err());
/// ```
#[derive(Debug, Error)]
pub enum FormError {
    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A payload could not be serialized for delivery.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A specialized `Result` type for plugin infrastructure.
pub type Result<T> = std::result::Result<T, FormError>;
