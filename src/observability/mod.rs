//! Tracing-based observability with file-backed output.
//!
//! This module provides the logging infrastructure for the dialogs. The
//! dialogs own the terminal while they run, so events are written to a
//! rotating log file instead of stderr.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → rotating log file
//! ```
//!
//! # Features
//!
//! - **File-based output**: events go to
//!   `<platform state dir>/alternatives-ui/alternatives-ui.log` by default
//! - **Automatic rotation**: files rotate at 10 MB with 3-backup retention
//! - **Level control**: `RUST_LOG` wins over the configured level
//!
//! # Usage
//!
//! Initialize early, before the first dialog session:
//!
//! ```
//! use alternatives_ui::{observability::init_tracing, Config};
//!
//! init_tracing(&Config::default());
//! tracing::debug!("dialogs initialized");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
mod init;

pub use file_writer::{FileWriter, FileWriterHandle};
pub use init::init_tracing;
