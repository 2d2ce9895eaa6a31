//! Form engine: input masks, validators, the per-field rule table and the
//! state engine that applies them.
//!
//! - [`format`]: phone and PIN masks, price input shape
//! - [`validate`]: field predicates
//! - [`rules`]: `field → { formatter, validator, message }` table
//! - [`engine`]: [`FormEngine`], the canonical form state

pub mod engine;
pub mod format;
pub mod rules;
pub mod validate;

pub use engine::{FieldChange, FormEngine};
pub use rules::{FieldRule, Formatter, Validator, RULES};
