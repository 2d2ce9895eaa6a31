//! Paths inside the Zellij plugin sandbox.
//!
//! The host filesystem is mounted under `/host`, which usually resolves to the
//! user's home directory when Zellij is started from there.

use std::path::PathBuf;

/// Sandbox mount point of the host filesystem.
pub const HOST_ROOT: &str = "/host";

/// Name of the OTLP trace file inside [`get_data_dir`].
pub const TRACE_FILE_NAME: &str = "interest-form-otlp.json";

/// Returns the plugin's data directory, `/host/.local/share/zellij/interest-form`.
///
/// ```
/// use air_fryer_form::infrastructure::get_data_dir;
///
/// assert_eq!(
///     get_data_dir().to_str(),
///     Some("/host/.local/share/zellij/interest-form")
/// );
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local/share/zellij")
        .join("interest-form")
}

/// Location of the rotating trace file.
#[must_use]
pub fn trace_file() -> PathBuf {
    get_data_dir().join(TRACE_FILE_NAME)
}

/// Rewrites a leading `~` to the sandbox's `/host` prefix.
///
/// Used for the `theme_file` configuration value. Paths naming another user's
/// home (`~alice/...`) are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path == "~" {
        return HOST_ROOT.to_string();
    }
    path.strip_prefix("~/")
        .map_or_else(|| path.to_string(), |rest| format!("{HOST_ROOT}/{rest}"))
}
