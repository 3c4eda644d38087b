//! Alternatives backend abstraction.
//!
//! This module defines the [`AlternativeSource`] trait, the seam between the
//! dialogs and the external component that owns the system's alternatives
//! database. Everything hard lives behind this trait: how priorities are
//! computed, how slave links are rewritten, and how selections are persisted.
//! The dialog layer only reads snapshots and delegates mutations.
//!
//! # Design Philosophy
//!
//! The trait is minimal and focused on the operations the dialogs actually
//! dispatch, not a generic repository. Each method maps directly to one
//! [`Action`](crate::app::Action) the presentation shell executes. Mutators
//! return the refreshed group snapshot so the shell can feed it back into the
//! session via [`Event::GroupUpdated`](crate::app::Event::GroupUpdated).
//!
//! Interaction is synchronous and single-threaded: the shell executes one
//! action at a time between user inputs, so implementations need no internal
//! locking on behalf of this crate.

use super::alternative::AlternativeGroup;
use super::error::Result;

/// Abstraction over the external alternatives backend.
///
/// # Examples
///
/// A shell wires the dialogs to a backend and executes mutation actions
/// against it:
///
/// ```no_run
/// use alternatives_ui::{handle_event, Action, AlternativeSource, AppState, Event};
///
/// fn run(source: &mut dyn AlternativeSource) -> alternatives_ui::Result<()> {
///     let mut state = AppState::new(source.list_all()?);
///     let (_redraw, actions) = handle_event(&mut state, &Event::AutomaticModePressed)?;
///     for action in actions {
///         if let Action::SetAutomaticMode { group_index } = action {
///             let name = state.groups[group_index].name.clone();
///             let refreshed = source.set_automatic_mode(&name)?;
///             handle_event(&mut state, &Event::GroupUpdated { index: group_index, group: refreshed })?;
///         }
///     }
///     Ok(())
/// }
/// ```
pub trait AlternativeSource {
    /// Returns all alternative groups known to the system, in listing order.
    ///
    /// Implementations should already exclude degenerate entries they cannot
    /// represent; the dialogs additionally never list groups with no choices.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn list_all(&self) -> Result<Vec<AlternativeGroup>>;

    /// Pins `path` as the active choice of `group` and switches it to manual
    /// mode, returning the refreshed snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`AlternativesError::InvalidChoice`] if `path` is not among the
    /// group's choices.
    ///
    /// [`AlternativesError::InvalidChoice`]: super::AlternativesError::InvalidChoice
    fn choose(&mut self, group: &str, path: &str) -> Result<AlternativeGroup>;

    /// Switches `group` to automatic mode, letting the backend pick the
    /// highest-priority choice, and returns the refreshed snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the group is unknown to the backend.
    fn set_automatic_mode(&mut self, group: &str) -> Result<AlternativeGroup>;

    /// Persists the current state of `group` to the alternatives database.
    ///
    /// # Errors
    ///
    /// Returns [`AlternativesError::Persistence`] on underlying write
    /// failures. The dialogs neither retry nor suppress this; it propagates to
    /// the shell, which owns user-visible reporting.
    ///
    /// [`AlternativesError::Persistence`]: super::AlternativesError::Persistence
    fn save(&mut self, group: &str) -> Result<()>;
}
