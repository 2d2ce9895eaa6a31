//! View model types representing renderable UI state.
//!
//! View models are computed from application state via
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain
//! no business logic, only display-ready data.

use super::field::FieldRender;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormViewModel {
    /// Form title.
    pub header: HeaderInfo,

    /// One render description per field, in form order.
    pub fields: Vec<FieldRender>,

    /// Submit control state.
    pub submit: SubmitButton,

    /// Confirmation shown after a successful submission.
    pub status: Option<StatusLine>,

    /// Keybinding hints.
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Submit control display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    /// False whenever any field is invalid.
    pub enabled: bool,
    pub focused: bool,
}

/// Status line shown under the submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub message: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "Tab: next field  Esc: close").
    pub keybindings: String,
}
