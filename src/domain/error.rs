//! Error types for the alternatives dialogs.
//!
//! This module defines the centralized error type [`AlternativesError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All errors
//! are implemented using the `thiserror` crate for automatic `Error` trait
//! implementation.

use thiserror::Error;

/// The main error type for alternatives dialog operations.
///
/// The dialog layer itself performs no I/O, so most variants exist either to
/// signal a presentation-contract violation ([`ChoiceNotFound`]) or to carry
/// failures from the external alternatives backend through unchanged
/// ([`InvalidChoice`], [`Persistence`]). The remaining variants belong to the
/// ambient configuration and logging stack.
///
/// [`ChoiceNotFound`]: AlternativesError::ChoiceNotFound
/// [`InvalidChoice`]: AlternativesError::InvalidChoice
/// [`Persistence`]: AlternativesError::Persistence
#[derive(Debug, Error)]
pub enum AlternativesError {
    /// A selected choice path could not be resolved within its group.
    ///
    /// The presentation layer only ever reports paths it was previously offered,
    /// so this indicates a programming-contract violation. It is surfaced loudly
    /// rather than silently falling back to some other choice.
    #[error("no choice with path {path:?} in alternative group {group:?}")]
    ChoiceNotFound {
        /// Name of the alternative group that was searched.
        group: String,
        /// The path that failed to resolve.
        path: String,
    },

    /// The backend rejected a path that is not among a group's choices.
    ///
    /// Raised by [`AlternativeSource::choose`](crate::domain::AlternativeSource::choose)
    /// implementations. The dialog layer neither retries nor suppresses it.
    #[error("path {path:?} is not a valid choice for alternative group {group:?}")]
    InvalidChoice {
        /// Name of the alternative group.
        group: String,
        /// The rejected path.
        path: String,
    },

    /// The backend failed to persist a group.
    ///
    /// Raised by [`AlternativeSource::save`](crate::domain::AlternativeSource::save)
    /// implementations on underlying write failures. Propagates to the shell,
    /// which owns user-visible reporting.
    #[error("failed to persist alternative group: {0}")]
    Persistence(String),

    /// Configuration is invalid or malformed.
    ///
    /// Occurs when the optional TOML configuration file cannot be parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations (config reads, log
    /// writer). Automatically converts from `std::io::Error`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for alternatives dialog operations.
///
/// # Examples
///
/// ```
/// use alternatives_ui::{AlternativesError, Result};
///
/// fn resolve(path: &str) -> Result<()> {
///     if path.is_empty() {
///         return Err(AlternativesError::ChoiceNotFound {
///             group: "editor".to_string(),
///             path: path.to_string(),
///         });
///     }
///     Ok(())
/// }
///
/// assert!(resolve("/usr/bin/vim").is_ok());
/// assert!(resolve("").is_err());
/// ```
pub type Result<T> = std::result::Result<T, AlternativesError>;
