//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (`plugin.rs`) and the form engine:
//!
//! ```text
//! Key Press → Event → handle_event → FormEngine mutations → (should_render, Actions)
//!                                                              ↓
//!                                              plugin runtime: hide pane / deliver payload
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and focus/blur coordination
//! - [`modes`]: The focus ring
//! - [`state`]: Application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::Focus;
pub use state::AppState;
