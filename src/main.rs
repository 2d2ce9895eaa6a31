//! Zellij plugin wrapper and entry point.
//!
//! The library does all the work; this binary only registers the plugin with
//! Zellij. The shim lives in `plugin.rs` and is compiled for the WASM target
//! only, since `zellij-tile`'s host calls exist nowhere else.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key` and `PermissionRequestResult` events
//! 3. **Update**: Translate key presses into library events, run the handler,
//!    execute the returned actions
//! 4. **Render**: Call the library render function

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_arch = "wasm32")]
mod plugin;

#[cfg(target_arch = "wasm32")]
use zellij_tile::prelude::*;

#[cfg(target_arch = "wasm32")]
register_plugin!(plugin::State);

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("air-fryer-form is a Zellij plugin; build it with `--target wasm32-wasip1` and load the .wasm from Zellij");
}
