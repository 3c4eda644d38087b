//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber: an environment filter for
//! level control and a fmt layer writing through the rotating file writer.

use std::fs;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::file_writer::{FileWriter, FileWriterHandle};
use crate::infrastructure::paths;
use crate::Config;

/// Default log file name under the platform state directory.
const LOG_FILE_NAME: &str = "alternatives-ui.log";

/// Initializes the tracing subscriber with file-based output.
///
/// Sets up a pipeline that:
/// 1. Filters events based on the configured level
/// 2. Formats them without ANSI styling (the target is a file)
/// 3. Writes through the size-rotating [`FileWriter`]
///
/// # Level Resolution
///
/// 1. `RUST_LOG`, when set, wins
/// 2. Otherwise `config.log_level`
/// 3. Default: `"info"`
///
/// # File Location
///
/// `config.log_file` when set (with `~` expanded), otherwise
/// `<platform state dir>/alternatives-ui/alternatives-ui.log`.
///
/// # Initialization Behavior
///
/// - Creates the log directory if it doesn't exist
/// - Silently returns if directory creation fails (observability is optional)
/// - Idempotent: safe to call multiple times, only the first call takes effect
///
/// # Examples
///
/// ```
/// use alternatives_ui::{observability::init_tracing, Config};
///
/// let config = Config {
///     log_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .log_level
        .clone()
        .unwrap_or_else(|| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let log_file = config.log_file.as_ref().map_or_else(
        || paths::default_log_dir().join(LOG_FILE_NAME),
        |path| paths::expand_tilde(path),
    );

    if let Some(parent) = log_file.parent() {
        if fs::create_dir_all(parent).is_err() {
            // Silently fail if we can't create the directory
            return;
        }
    }

    let writer = Arc::new(FileWriter::new(log_file));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(move || FileWriterHandle::new(Arc::clone(&writer)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
