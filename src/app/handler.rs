//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point the plugin runtime calls for
//! every key press after translating it into an [`Event`]. It mutates
//! [`AppState`] and returns whether the pane should re-render together with
//! the side effects to execute.
//!
//! # Focus and blur
//!
//! Moving focus away from a text input blurs it, which is the moment its
//! error becomes visible. Typing into a field only ever clears its error.
//!
//! # Example
//!
//! ```rust
//! use air_fryer_form::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::default();
//! let (should_render, actions) = handle_event(&mut state, &Event::Char('A'));
//! assert!(should_render);
//! assert!(actions.is_empty());
//! assert_eq!(state.engine.value(air_fryer_form::FieldName::FirstName), "A");
//! ```

use super::modes::Focus;
use super::state::SUBMITTED_MESSAGE;
use crate::app::{Action, AppState};
use crate::domain::FieldName;

/// Input events the form reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Moves focus to the next control (wraps).
    FocusNext,
    /// Moves focus to the previous control (wraps).
    FocusPrev,
    /// Typed character. Appended to the focused field; a space presses the
    /// focused button.
    Char(char),
    /// Removes the last character of the focused field.
    Backspace,
    /// Enter: advances from a field, presses a focused button.
    Activate,
    /// Flips PIN visibility regardless of focus.
    TogglePin,
    /// Presses the submit control regardless of focus.
    Submit,
    /// Hides the plugin pane.
    CloseFocus,
}

impl Event {
    /// Short name used in spans. Typed characters are never logged since they
    /// may belong to the PIN.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::FocusNext => "focus_next",
            Self::FocusPrev => "focus_prev",
            Self::Char(_) => "char",
            Self::Backspace => "backspace",
            Self::Activate => "activate",
            Self::TogglePin => "toggle_pin",
            Self::Submit => "submit",
            Self::CloseFocus => "close_focus",
        }
    }
}

/// Processes an event, mutates application state, and returns
/// `(should_render, actions)`.
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = event.kind(), focus = ?state.focus).entered();

    match *event {
        Event::FocusNext => {
            let next = state.focus.next();
            move_focus(state, next);
            (true, vec![])
        }
        Event::FocusPrev => {
            let prev = state.focus.prev();
            move_focus(state, prev);
            (true, vec![])
        }
        Event::Char(c) => match state.focus {
            Focus::Field(field) => {
                let mut raw = state.engine.value(field).to_string();
                raw.push(c);
                edit_field(state, field, &raw)
            }
            Focus::PinToggle | Focus::Submit if c == ' ' => press_focused_button(state),
            Focus::PinToggle | Focus::Submit => (false, vec![]),
        },
        Event::Backspace => {
            let Some(field) = state.focus.field() else {
                return (false, vec![]);
            };
            let mut raw = state.engine.value(field).to_string();
            if raw.pop().is_none() {
                return (false, vec![]);
            }
            edit_field(state, field, &raw)
        }
        Event::Activate => match state.focus {
            Focus::Field(_) => {
                let next = state.focus.next();
                move_focus(state, next);
                (true, vec![])
            }
            Focus::PinToggle | Focus::Submit => press_focused_button(state),
        },
        Event::TogglePin => {
            state.engine.toggle_pin_visibility();
            (true, vec![])
        }
        Event::Submit => submit(state),
        Event::CloseFocus => (false, vec![Action::CloseFocus]),
    }
}

/// Moves focus, blurring the field being left.
fn move_focus(state: &mut AppState, next: Focus) {
    if let Some(field) = state.focus.field() {
        state.engine.blur_field(field);
    }
    tracing::debug!(from = ?state.focus, to = ?next, "focus moved");
    state.focus = next;
}

fn edit_field(state: &mut AppState, field: FieldName, raw: &str) -> (bool, Vec<Action>) {
    let change = state.engine.change_field(field, raw);
    state.status = None;
    tracing::trace!(field = %field, cleared_error = change.cleared_error, "field edited");
    (true, vec![])
}

fn press_focused_button(state: &mut AppState) -> (bool, Vec<Action>) {
    match state.focus {
        Focus::PinToggle => {
            state.engine.toggle_pin_visibility();
            (true, vec![])
        }
        Focus::Submit => submit(state),
        Focus::Field(_) => (false, vec![]),
    }
}

/// Submits when the form validates. A disabled submit control does nothing.
fn submit(state: &mut AppState) -> (bool, Vec<Action>) {
    if !state.engine.is_valid() {
        tracing::debug!("submit ignored: form invalid");
        return (false, vec![]);
    }

    match state.engine.submit() {
        Ok(payload) => {
            state.submissions += 1;
            state.status = Some(SUBMITTED_MESSAGE.to_string());
            tracing::info!(submissions = state.submissions, "form submitted");
            (true, vec![Action::Submit(payload)])
        }
        Err(errors) => {
            tracing::warn!(error_count = errors.len(), "submission rejected");
            (true, vec![])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c));
        }
    }

    fn fill_form(state: &mut AppState) {
        for text in ["Al", "Li", "5551234567", "a@b.co", "19.99", "1234567890123456"] {
            type_text(state, text);
            handle_event(state, &Event::FocusNext);
        }
    }

    #[test]
    fn typing_formats_the_phone_number() {
        let mut state = AppState::default();
        state.focus = Focus::Field(FieldName::PhoneNumber);
        type_text(&mut state, "555123456789");
        assert_eq!(state.engine.value(FieldName::PhoneNumber), "(555) 123-4567");
    }

    #[test]
    fn backspace_removes_last_digit_of_pin() {
        let mut state = AppState::default();
        state.focus = Focus::Field(FieldName::Pin);
        handle_event(&mut state, &Event::TogglePin);
        type_text(&mut state, "12345");
        assert_eq!(state.engine.value(FieldName::Pin), "1234-5");

        handle_event(&mut state, &Event::Backspace);
        assert_eq!(state.engine.value(FieldName::Pin), "1234");
    }

    #[test]
    fn backspace_on_empty_field_does_not_render() {
        let mut state = AppState::default();
        assert_eq!(handle_event(&mut state, &Event::Backspace), (false, vec![]));
    }

    #[test]
    fn leaving_a_field_shows_its_error() {
        let mut state = AppState::default();
        type_text(&mut state, "A");
        assert!(state.engine.visible_error(FieldName::FirstName).is_none());

        handle_event(&mut state, &Event::FocusNext);
        assert!(state.engine.is_touched(FieldName::FirstName));
        assert_eq!(
            state.engine.visible_error(FieldName::FirstName),
            Some("First name must be at least 2 characters")
        );
        assert_eq!(state.focus, Focus::Field(FieldName::LastName));
    }

    #[test]
    fn typing_a_fix_clears_the_error() {
        let mut state = AppState::default();
        type_text(&mut state, "A");
        handle_event(&mut state, &Event::FocusPrev);
        handle_event(&mut state, &Event::FocusNext);
        assert!(state.engine.error(FieldName::FirstName).is_some());

        state.focus = Focus::Field(FieldName::FirstName);
        type_text(&mut state, "l");
        assert!(state.engine.error(FieldName::FirstName).is_none());
    }

    #[test]
    fn refused_price_keystroke_keeps_value() {
        let mut state = AppState::default();
        state.focus = Focus::Field(FieldName::PriceGuess);
        type_text(&mut state, "19.999x");
        assert_eq!(state.engine.value(FieldName::PriceGuess), "19.99");
    }

    #[test]
    fn enter_advances_from_a_field() {
        let mut state = AppState::default();
        handle_event(&mut state, &Event::Activate);
        assert_eq!(state.focus, Focus::Field(FieldName::LastName));
        assert!(state.engine.is_touched(FieldName::FirstName));
    }

    #[test]
    fn space_on_toggle_flips_pin_visibility() {
        let mut state = AppState::default();
        state.focus = Focus::PinToggle;
        handle_event(&mut state, &Event::Char(' '));
        assert!(state.engine.pin_visible());
        handle_event(&mut state, &Event::Activate);
        assert!(!state.engine.pin_visible());
    }

    #[test]
    fn submit_on_invalid_form_is_a_no_op() {
        let mut state = AppState::default();
        let outcome = handle_event(&mut state, &Event::Submit);
        assert_eq!(outcome, (false, vec![]));
        assert!(state.engine.errors().is_empty());
        assert!(!state.engine.touched().any());
    }

    #[test]
    fn valid_submit_emits_payload_and_status() {
        let mut state = AppState::default();
        fill_form(&mut state);
        assert_eq!(state.focus, Focus::PinToggle);

        let (should_render, actions) = handle_event(&mut state, &Event::Submit);
        assert!(should_render);
        let [Action::Submit(payload)] = actions.as_slice() else {
            panic!("expected a single submit action, got {actions:?}");
        };
        assert_eq!(payload.phone_number, "5551234567");
        assert_eq!(payload.pin, "1234567890123456");
        assert!((payload.price_guess - 19.99).abs() < f64::EPSILON);
        assert_eq!(state.status.as_deref(), Some(SUBMITTED_MESSAGE));
        assert_eq!(state.submissions, 1);
    }

    #[test]
    fn editing_after_submit_clears_status() {
        let mut state = AppState::default();
        fill_form(&mut state);
        handle_event(&mut state, &Event::Submit);

        state.focus = Focus::Field(FieldName::FirstName);
        type_text(&mut state, "x");
        assert!(state.status.is_none());
    }

    #[test]
    fn close_focus_emits_action_without_render() {
        let mut state = AppState::default();
        assert_eq!(
            handle_event(&mut state, &Event::CloseFocus),
            (false, vec![Action::CloseFocus])
        );
    }
}
