//! alternatives-ui: dialog state machines for inspecting and switching
//! system alternatives.
//!
//! Alternatives are symbolic-link indirections that let several installed
//! programs satisfy the same logical command name (multiple editors all
//! providing `editor`). This crate implements the interactive dialogs of a
//! configuration tool for them:
//! - a listing screen over all alternative groups, restricted by a search
//!   term and a "more than one choice" filter
//! - an edit screen for one group, switching between automatic
//!   (priority-based) and manual selection and previewing the slave links
//!   that move together with a choice
//!
//! # Architecture
//!
//! The crate is a library with two external collaborators kept behind seams:
//! the alternatives backend (everything touching the system's alternatives
//! database) and the presentation shell (widgets, colors, input decoding).
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Presentation shell (external)                      │  ← event source,
//! └─────────────────────────────────────────────────────┘    action executor
//!            │ Event                      ▲ Action
//!            ▼                            │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← state machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - Group filtering                                  │
//! └─────────────────────────────────────────────────────┘
//!            │                            │
//! ┌───────────────────────┐   ┌───────────────────────┐
//! │ UI Layer (ui/)        │   │ Domain Layer (domain/)│
//! │ - View models         │   │ - Group/Choice model  │
//! │ - Display formatting  │   │ - AlternativeSource   │
//! │ - Help text           │   │ - Error types         │
//! └───────────────────────┘   └───────────────────────┘
//!            │                            │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Observability                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Tracing to a rotating log file (observability/)  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Dialog state machine with event/action model
//! - [`domain`]: Core domain types, errors, and the backend seam
//! - [`ui`]: View models and display formatting
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`observability`]: Tracing initialization and the rotating log writer
//!
//! # Session Flow
//!
//! 1. The shell loads group snapshots from its
//!    [`AlternativeSource`](domain::AlternativeSource) and builds an
//!    [`AppState`].
//! 2. For every user action it reports an [`Event`] to [`handle_event`],
//!    re-renders from [`AppState::compute_viewmodel`] when asked to, and
//!    executes the returned [`Action`]s.
//! 3. Mutation actions go to the backend; the refreshed snapshot is fed back
//!    via [`Event::GroupUpdated`], keeping the state machine the single
//!    source of truth.
//! 4. [`Action::Close`] ends the session with an accepted or cancelled
//!    outcome.
//!
//! # Examples
//!
//! ```
//! use alternatives_ui::{
//!     handle_event, Action, AlternativeGroup, AppState, Choice, DialogResult, Event, Status,
//! };
//!
//! let groups = vec![AlternativeGroup::new(
//!     "editor",
//!     "/bin/ed",
//!     Status::Manual,
//!     vec![
//!         Choice::new("/bin/ed", 10, "editor.1.gz /usr/share/man/man1/ed.1.gz"),
//!         Choice::new("/usr/bin/vim", 20, "editor.1.gz /usr/share/man/man1/vim.1.gz"),
//!     ],
//! )];
//!
//! let mut state = AppState::new(groups);
//!
//! // Drill into the selected group and pin its second choice.
//! handle_event(&mut state, &Event::EditRequested)?;
//! handle_event(&mut state, &Event::CursorDown)?;
//! let (_redraw, actions) = handle_event(&mut state, &Event::SetChoicePressed)?;
//! assert_eq!(
//!     actions,
//!     vec![Action::Choose { group_index: 0, path: "/usr/bin/vim".to_string() }]
//! );
//!
//! // Accepting persists everything, then closes.
//! let (_redraw, actions) = handle_event(&mut state, &Event::AcceptPressed)?;
//! assert_eq!(actions, vec![Action::SaveAll, Action::Close(DialogResult::Accepted)]);
//! # Ok::<(), alternatives_ui::AlternativesError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Enumerated events instead of widget-id dispatch
//!
//! Presentation events arrive as a closed [`Event`] enum and are processed by
//! a pure handler returning `(redraw, Vec<Action>)`. Every dialog behavior is
//! testable without a UI harness.
//!
//! ## Original-index row addressing
//!
//! Filtered listing rows carry their position in the unfiltered group list,
//! because the shell addresses a row for mutation by that original index, not
//! by identity.
//!
//! ## Delegated mutations
//!
//! Priority computation, slave-link rewriting, and persistence belong to the
//! backend. The handler only emits delegation actions and consumes refreshed
//! snapshots; it never re-derives selection logic locally.

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{
    filtered_groups, handle_event, Action, AppState, DialogResult, EditState, Event,
    FilterCriteria, Screen,
};
pub use domain::{
    AlternativeGroup, AlternativeSource, AlternativesError, Choice, Result, Status,
};
pub use ui::{ChoiceRow, DialogViewModel, EditViewModel, GroupRow, ListViewModel};

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ambient configuration for the dialogs.
///
/// Covers only the ambient stack; there is no dialog behavior to configure.
/// Loaded from a TOML file by the surrounding tool, or constructed directly.
///
/// # Examples
///
/// ```
/// use alternatives_ui::Config;
///
/// let config: Config = toml::from_str(r#"
///     log_level = "debug"
///     log_file = "~/alternatives-ui/debug.log"
/// "#).unwrap();
/// assert_eq!(config.log_level.as_deref(), Some("debug"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tracing level directive (`"trace"` … `"error"`, or any `EnvFilter`
    /// expression). `RUST_LOG` takes precedence when set. Default: `"info"`.
    pub log_level: Option<String>,

    /// Log file override, `~`-expandable. Default:
    /// `<platform state dir>/alternatives-ui/alternatives-ui.log`.
    pub log_file: Option<String>,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`AlternativesError::Io`] when the file cannot be read and
    /// [`AlternativesError::Config`] when it is not valid TOML for this
    /// structure.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| AlternativesError::Config(e.to_string()))
    }
}
