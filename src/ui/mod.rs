//! User interface rendering layer.
//!
//! Transforms application state into ANSI-styled terminal output:
//!
//! ```text
//! AppState → compute_viewmodel → FormViewModel → render → ANSI Output
//!               │
//!               └─ field::present (per field) → FieldRender
//! ```
//!
//! # Modules
//!
//! - [`field`]: Presentation adapter from field state to a render description
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Cursor positioning and text fitting
//! - [`theme`]: Color schemes and ANSI escape sequence generation

pub mod components;
pub mod field;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use field::{present, Decoration, FieldProps, FieldRender, InputKind, Suffix};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{FooterInfo, FormViewModel, HeaderInfo, StatusLine, SubmitButton};
