//! Actions representing side effects to be executed by the presentation shell.
//!
//! This module defines the [`Action`] type, the imperative commands produced
//! by the event handler after processing user input. Actions bridge the pure
//! state transformations inside [`handle_event`](super::handle_event) and the
//! effectful operations the shell owns: delegating mutations to the
//! alternatives backend, opening popups, and closing the dialog.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after each event, allowing
//! multiple side effects to be queued atomically. The shell executes them in
//! sequence. For the two mutation actions the shell calls the corresponding
//! [`AlternativeSource`](crate::domain::AlternativeSource) method and feeds
//! the refreshed snapshot back via
//! [`Event::GroupUpdated`](super::Event::GroupUpdated); the dialog layer never
//! re-derives priority-based selection locally.

/// Outcome a dialog session closes with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    /// The user accepted; pending changes were handed to the backend's `save`.
    Accepted,
    /// The user dismissed the dialog; nothing further should be persisted.
    Cancelled,
}

/// Commands representing side effects to be executed by the shell.
///
/// Actions are produced by the event handler and represent the boundary
/// between the pure state machine and the outside world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Opens the help popup with [`help_text`](crate::ui::help::help_text).
    ShowHelp,

    /// Asks the user to confirm discarding unsaved changes.
    ///
    /// The shell reports the answer back as
    /// [`Event::DiscardAnswer`](super::Event::DiscardAnswer).
    ConfirmDiscard,

    /// Ends the dialog session with the given outcome.
    Close(DialogResult),

    /// Delegates "pin this choice" to the backend.
    ///
    /// The shell calls
    /// [`AlternativeSource::choose`](crate::domain::AlternativeSource::choose)
    /// for the group at `group_index` in [`AppState::groups`](super::AppState::groups).
    Choose {
        /// Index of the group in the session's unfiltered group list.
        group_index: usize,
        /// Path of the choice to pin.
        path: String,
    },

    /// Delegates "switch to automatic mode" to the backend.
    ///
    /// The shell calls
    /// [`AlternativeSource::set_automatic_mode`](crate::domain::AlternativeSource::set_automatic_mode).
    SetAutomaticMode {
        /// Index of the group in the session's unfiltered group list.
        group_index: usize,
    },

    /// Persists every group of the session via the backend's `save`.
    ///
    /// Emitted on accept, immediately before `Close(Accepted)`. Persistence
    /// errors surface in the shell and are neither retried nor suppressed by
    /// the dialog layer.
    SaveAll,
}
