//! Application state and view model computation.
//!
//! [`AppState`] owns the form engine together with everything that exists
//! only for the terminal: the focused control, the theme, the title and the
//! confirmation shown after a submission. View models are computed on demand
//! from a state snapshot.
//!
//! # Example
//!
//! ```rust
//! use air_fryer_form::app::AppState;
//! use air_fryer_form::ui::Theme;
//!
//! let state = AppState::new(Theme::default(), "Air Fryer Interest Form");
//! let vm = state.compute_viewmodel(40, 80);
//! assert_eq!(vm.fields.len(), 6);
//! assert!(!vm.submit.enabled);
//! ```

use super::modes::Focus;
use crate::domain::FieldName;
use crate::form::FormEngine;
use crate::ui::field::{present, Decoration, FieldProps, InputKind, Suffix};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, FormViewModel, HeaderInfo, StatusLine, SubmitButton};

/// Heading used when none is configured.
pub const DEFAULT_TITLE: &str = "Air Fryer Interest Form";

/// Confirmation shown after a successful submission.
pub const SUBMITTED_MESSAGE: &str = "Thanks! Your interest has been recorded.";

const SUBMIT_LABEL: &str = "Submit";

const FIELD_KEYBINDINGS: &str =
    "Tab/↑↓: move  Enter: next  Ctrl+t: show/hide PIN  Ctrl+s: submit  Esc: close";
const BUTTON_KEYBINDINGS: &str =
    "Tab/↑↓: move  Enter/Space: press  Ctrl+t: show/hide PIN  Ctrl+s: submit  Esc: close";

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Field values, errors, touched flags and PIN visibility.
    pub engine: FormEngine,

    /// Control receiving keyboard input.
    pub focus: Focus,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Form heading.
    pub title: String,

    /// Confirmation of the last successful submission.
    ///
    /// Cleared as soon as the user edits a field again.
    pub status: Option<String>,

    /// Number of successful submissions in this session.
    pub submissions: usize,
}

impl AppState {
    /// Creates a state with an empty form and focus on the first field.
    #[must_use]
    pub fn new(theme: Theme, title: impl Into<String>) -> Self {
        Self {
            engine: FormEngine::new(),
            focus: Focus::default(),
            theme,
            title: title.into(),
            status: None,
            submissions: 0,
        }
    }

    /// Transforms the current state into a renderable view model.
    ///
    /// Each field goes through [`present`] with its decoration. The submit
    /// control is enabled only while the whole form validates.
    #[must_use]
    pub fn compute_viewmodel(&self, _rows: usize, _cols: usize) -> FormViewModel {
        let fields = FieldName::ALL
            .into_iter()
            .map(|field| {
                present(&FieldProps {
                    id: field.key(),
                    label: field.label(),
                    value: self.engine.value(field),
                    error: self.engine.error(field),
                    touched: self.engine.is_touched(field),
                    focused: self.focus == Focus::Field(field),
                    decoration: self.decoration_for(field),
                })
            })
            .collect();

        FormViewModel {
            header: HeaderInfo {
                title: self.title.clone(),
            },
            fields,
            submit: SubmitButton {
                label: SUBMIT_LABEL.to_string(),
                enabled: self.engine.is_valid(),
                focused: self.focus == Focus::Submit,
            },
            status: self.status.as_ref().map(|message| StatusLine {
                message: message.clone(),
            }),
            footer: self.compute_footer(),
        }
    }

    /// Presentation options per field.
    ///
    /// The PIN input switches between a masked 16-cell box and a visible
    /// 19-cell box (four groups of four plus separators).
    fn decoration_for(&self, field: FieldName) -> Decoration {
        match field {
            FieldName::FirstName | FieldName::LastName => Decoration::new(InputKind::Text),
            FieldName::PhoneNumber => Decoration {
                placeholder: Some("(###) ###-####"),
                max_length: Some(14),
                ..Decoration::new(InputKind::Tel)
            },
            FieldName::EmailAddress => Decoration {
                placeholder: Some("you@example.com"),
                ..Decoration::new(InputKind::Email)
            },
            FieldName::PriceGuess => Decoration {
                placeholder: Some("0.00"),
                prefix: Some("$"),
                ..Decoration::new(InputKind::Decimal)
            },
            FieldName::Pin => {
                let showing = self.engine.pin_visible();
                let toggle = Suffix::PinToggle {
                    showing,
                    focused: self.focus == Focus::PinToggle,
                };
                if showing {
                    Decoration {
                        placeholder: Some("####-####-####-####"),
                        max_length: Some(19),
                        suffix: Some(toggle),
                        ..Decoration::new(InputKind::Text)
                    }
                } else {
                    Decoration {
                        placeholder: Some("################"),
                        max_length: Some(16),
                        suffix: Some(toggle),
                        ..Decoration::new(InputKind::Password)
                    }
                }
            }
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.focus {
            Focus::Field(_) => FIELD_KEYBINDINGS,
            Focus::PinToggle | Focus::Submit => BUTTON_KEYBINDINGS,
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Theme::default(), DEFAULT_TITLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::field::MASK_GLYPH;

    fn fill_valid(state: &mut AppState) {
        let values = [
            (FieldName::FirstName, "Al"),
            (FieldName::LastName, "Li"),
            (FieldName::PhoneNumber, "5551234567"),
            (FieldName::EmailAddress, "a@b.co"),
            (FieldName::PriceGuess, "19.99"),
            (FieldName::Pin, "1234567890123456"),
        ];
        for (field, raw) in values {
            state.engine.change_field(field, raw);
        }
    }

    #[test]
    fn fresh_form_shows_placeholders_and_no_errors() {
        let state = AppState::default();
        let vm = state.compute_viewmodel(40, 80);

        assert_eq!(vm.header.title, DEFAULT_TITLE);
        assert!(vm.fields.iter().all(|f| f.error.is_none()));
        let phone = &vm.fields[FieldName::PhoneNumber.index()];
        assert!(phone.input.placeholder);
        assert_eq!(phone.input.text, "(###) ###-####");
        assert!(vm.fields[0].focused);
        assert!(vm.status.is_none());
    }

    #[test]
    fn submit_enabled_tracks_form_validity() {
        let mut state = AppState::default();
        assert!(!state.compute_viewmodel(40, 80).submit.enabled);

        fill_valid(&mut state);
        assert!(state.compute_viewmodel(40, 80).submit.enabled);
    }

    #[test]
    fn pin_is_masked_until_toggled() {
        let mut state = AppState::default();
        fill_valid(&mut state);

        let pin = state.compute_viewmodel(40, 80).fields[FieldName::Pin.index()].clone();
        assert!(pin.input.masked);
        assert_eq!(pin.input.text, MASK_GLYPH.to_string().repeat(16));
        assert_eq!(pin.suffix.map(|s| s.label), Some("Show".to_string()));

        state.engine.toggle_pin_visibility();
        let pin = state.compute_viewmodel(40, 80).fields[FieldName::Pin.index()].clone();
        assert!(!pin.input.masked);
        assert_eq!(pin.input.text, "1234-5678-9012-3456");
        assert_eq!(pin.input.width, 19);
        assert_eq!(pin.suffix.map(|s| s.label), Some("Hide".to_string()));
    }

    #[test]
    fn price_field_carries_dollar_prefix() {
        let state = AppState::default();
        let vm = state.compute_viewmodel(40, 80);
        let price = &vm.fields[FieldName::PriceGuess.index()];
        assert_eq!(price.prefix.as_deref(), Some("$"));
        assert_eq!(price.label, "Guess the Air Fryer's Cost");
    }

    #[test]
    fn footer_changes_with_focus() {
        let mut state = AppState::default();
        let on_field = state.compute_viewmodel(40, 80).footer.keybindings;
        state.focus = Focus::Submit;
        let on_button = state.compute_viewmodel(40, 80).footer.keybindings;
        assert_ne!(on_field, on_button);
        assert!(state.compute_viewmodel(40, 80).submit.focused);
    }
}
