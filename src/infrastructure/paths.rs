//! Path utilities for platform directories and user-supplied paths.
//!
//! This module resolves where ambient files (the log file) live on the
//! current platform and handles tilde expansion for paths coming from the
//! configuration file.

use std::path::PathBuf;

/// Returns the directory ambient files are written to.
///
/// Resolves to `<platform state dir>/alternatives-ui`, falling back to the
/// local data directory on platforms without a state directory, and to the
/// current directory as a last resort.
#[must_use]
pub fn default_log_dir() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("alternatives-ui")
}

/// Expands a leading tilde to the user's home directory.
///
/// Paths without a tilde, and tilde paths on systems where the home directory
/// cannot be determined, are returned unchanged.
///
/// # Examples
///
/// ```
/// use alternatives_ui::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/var/log/dialogs.log"), PathBuf::from("/var/log/dialogs.log"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    } else if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}
