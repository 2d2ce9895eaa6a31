//! Air Fryer interest form: a Zellij plugin collecting a validated sign-up.
//!
//! The plugin renders a six-field form (first name, last name, phone number,
//! email address, price guess and a 16-digit PIN) in a floating pane:
//! - Phone numbers and PINs are masked as they are typed
//! - Price guesses that are not decimal-shaped are refused keystroke by keystroke
//! - Errors appear once a field has been left, and clear as soon as it is fixed
//! - The submit control stays disabled until every field validates
//! - A successful submission hands a normalized payload to a submission sink

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs, plugin.rs)            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Focus ring
//! │  - Event handling                                   │  ← Blur on leave
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Form Engine   │   │ Sinks         │
//! │ (ui/)         │   │ (form/)       │   │ (sink/)       │
//! │ - Field adapt.│   │ - Rule table  │   │ - Log sink    │
//! │ - Theming     │   │ - Formatters  │   │ - Memory sink │
//! │ - Components  │   │ - Validators  │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Field names, records, payload (domain/)          │
//! │  - Error types (domain/error)                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Field names, form records, payload and errors
//! - [`form`]: The form engine and its rule table
//! - [`sink`]: Destinations for validated submissions
//! - [`infrastructure`]: Sandbox paths
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing to a rotating file
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/air-fryer-form.wasm" {
//!         theme "catppuccin-latte"
//!         trace_level "debug"
//!         title "Air Fryer Interest Form"
//!     }
//! }
//! ```
//!
//! # Library Usage
//!
//! ```rust
//! use air_fryer_form::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! for c in "Al".chars() {
//!     handle_event(&mut state, &Event::Char(c));
//! }
//! let (_, actions) = handle_event(&mut state, &Event::Submit);
//! // The form is still incomplete, so nothing is submitted.
//! assert!(!actions.iter().any(|a| matches!(a, Action::Submit(_))));
//! ```

pub mod app;
pub mod domain;
pub mod form;
pub mod infrastructure;
pub mod observability;
pub mod sink;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Focus};
pub use domain::{FieldName, FormError, Result, ValidatedPayload};
pub use form::FormEngine;
pub use ui::Theme;

use std::collections::BTreeMap;

/// Theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// Tracing filter used when none is configured.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: String,

    /// Path to a custom TOML theme file; `~` refers to the sandbox `/host`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive, e.g. `debug` or `air_fryer_form::form=trace`.
    pub trace_level: String,

    /// Form heading.
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: DEFAULT_THEME.to_string(),
            theme_file: None,
            trace_level: DEFAULT_TRACE_LEVEL.to_string(),
            title: app::state::DEFAULT_TITLE.to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored; missing or blank values keep their defaults.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use air_fryer_form::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    /// map.insert("title".to_string(), "  ".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name, "catppuccin-latte");
    /// assert_eq!(config.title, "Air Fryer Interest Form");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };
        let defaults = Self::default();

        Self {
            theme_name: value("theme").unwrap_or(defaults.theme_name),
            theme_file: value("theme_file"),
            trace_level: value("trace_level").unwrap_or(defaults.trace_level),
            title: value("title").unwrap_or(defaults.title),
        }
    }

    /// Loads the configured theme: the theme file if set, otherwise the named
    /// built-in theme.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Theme`] when the file cannot be loaded and
    /// [`FormError::Config`] when the name matches no built-in theme.
    pub fn load_theme(&self) -> Result<Theme> {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(infrastructure::expand_tilde(theme_file));
        }

        Theme::from_name(&self.theme_name)
            .ok_or_else(|| FormError::Config(format!("unknown theme '{}'", self.theme_name)))
    }
}

/// Creates the application state for a configuration.
///
/// A theme that fails to load is logged and replaced by the default theme;
/// configuration problems never keep the form from opening.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing interest form plugin");

    let theme = config.load_theme().unwrap_or_else(|e| {
        tracing::debug!(
            theme_name = %config.theme_name,
            theme_file = ?config.theme_file,
            error = %e,
            "failed to load theme, using default"
        );
        Theme::default()
    });

    AppState::new(theme, config.title.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_yields_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn parses_every_key_and_ignores_unknown_ones() {
        let config = Config::from_zellij(&map(&[
            ("theme", "catppuccin-frappe"),
            ("theme_file", "~/themes/form.toml"),
            ("trace_level", "debug"),
            ("title", "Pre-order Survey"),
            ("pane_title", "ignored"),
        ]));

        assert_eq!(config.theme_name, "catppuccin-frappe");
        assert_eq!(config.theme_file.as_deref(), Some("~/themes/form.toml"));
        assert_eq!(config.trace_level, "debug");
        assert_eq!(config.title, "Pre-order Survey");
    }

    #[test]
    fn blank_values_fall_back() {
        let config = Config::from_zellij(&map(&[("trace_level", ""), ("theme_file", " ")]));
        assert_eq!(config.trace_level, DEFAULT_TRACE_LEVEL);
        assert_eq!(config.theme_file, None);
    }

    #[test]
    fn unknown_theme_name_is_a_config_error() {
        let config = Config {
            theme_name: "solarized".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.load_theme(), Err(FormError::Config(_))));
    }

    #[test]
    fn initialize_falls_back_to_default_theme() {
        let config = Config {
            theme_file: Some("/definitely/not/here.toml".to_string()),
            title: "Survey".to_string(),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme, Theme::default());
        assert_eq!(state.title, "Survey");
    }

    #[test]
    fn initialize_loads_theme_file() {
        let latte = Theme::from_name("catppuccin-latte").unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml::to_string(&latte).unwrap().as_bytes())
            .unwrap();

        let config = Config {
            theme_file: Some(file.path().to_string_lossy().into_owned()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme, latte);
    }
}
