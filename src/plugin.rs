//! Zellij-facing plugin state.
//!
//! # Event Mapping
//!
//! - `Tab`, `Down`, `Ctrl+n` → `Event::FocusNext`
//! - `Shift+Tab`, `Up`, `Ctrl+p` → `Event::FocusPrev`
//! - `Enter` → `Event::Activate`
//! - `Backspace` → `Event::Backspace`
//! - `Ctrl+t` → `Event::TogglePin`
//! - `Ctrl+s` → `Event::Submit`
//! - `Esc` → `Event::CloseFocus`
//! - any other character, optionally with Shift → `Event::Char`

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use air_fryer_form::sink::{LogSink, SubmissionSink};
use air_fryer_form::{handle_event, Action, Config, Event};

/// Plugin state wrapper.
///
/// Pairs the library's `AppState` with the sink that receives submissions.
pub struct State {
    app: air_fryer_form::AppState,
    sink: LogSink,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: air_fryer_form::initialize(&Config::default()),
            sink: LogSink::new(),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        air_fryer_form::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(theme = %config.theme_name, theme_file = ?config.theme_file, "parsed configuration");

        self.app = air_fryer_form::initialize(&config);

        request_permission(&[PermissionType::ChangeApplicationState]);
        subscribe(&[EventType::Key, EventType::PermissionRequestResult]);

        tracing::debug!("plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match Self::map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                match status {
                    PermissionStatus::Granted => tracing::debug!("permissions granted"),
                    PermissionStatus::Denied => {
                        tracing::warn!("permissions denied - Esc cannot hide the pane");
                    }
                }
                return false;
            }
            _ => return false,
        };

        let (should_render, actions) = handle_event(&mut self.app, &our_event);
        tracing::debug!(
            action_count = actions.len(),
            should_render,
            "event handled"
        );
        for action in actions {
            self.execute_action(action);
        }
        should_render
    }

    fn render(&mut self, rows: usize, cols: usize) {
        air_fryer_form::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Maps keyboard events to form events.
    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::FocusNext),
                BareKey::Char('p') => Some(Event::FocusPrev),
                BareKey::Char('t') => Some(Event::TogglePin),
                BareKey::Char('s') => Some(Event::Submit),
                _ => None,
            };
        }
        if key.has_modifiers(&[KeyModifier::Alt]) || key.has_modifiers(&[KeyModifier::Super]) {
            return None;
        }

        Some(match key.bare_key {
            BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::FocusPrev,
            BareKey::Tab | BareKey::Down => Event::FocusNext,
            BareKey::Up => Event::FocusPrev,
            BareKey::Enter => Event::Activate,
            BareKey::Backspace => Event::Backspace,
            BareKey::Esc => Event::CloseFocus,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Translates library actions into host calls.
    fn execute_action(&mut self, action: Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("hiding plugin pane");
                hide_self();
            }
            Action::Submit(payload) => {
                if let Err(e) = self.sink.deliver(&payload) {
                    tracing::error!(error = %e, "failed to deliver submission");
                }
            }
        }
    }
}
