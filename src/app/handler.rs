//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes presentation
//! events, translating them into state changes and action sequences. It is the
//! control-flow coordinator for a dialog session.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the presentation shell
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! There is deliberately no dynamic dispatch keyed by widget identifiers: the
//! event vocabulary is a closed enum and the handler is a pure function of
//! `(state, event)`, so every dialog behavior is testable without a UI
//! harness.
//!
//! # Event Categories
//!
//! - **Navigation**: `CursorUp`, `CursorDown`, `SelectRow`, `RowActivated`
//! - **Filtering**: `SearchEdited`, `MultiChoiceOnlyToggled`
//! - **Screen flow**: `EditRequested`, `CancelPressed`, `AcceptPressed`,
//!   `HelpRequested`, `DiscardAnswer`
//! - **Edit screen**: `ChoiceSelected`, `SetChoicePressed`,
//!   `AutomaticModePressed`
//! - **Backend feedback**: `GroupUpdated`

use crate::app::actions::{Action, DialogResult};
use crate::app::screens::{EditState, Screen};
use crate::app::AppState;
use crate::domain::error::Result;
use crate::domain::AlternativeGroup;

/// Events reported by the presentation shell or fed back after a mutation.
///
/// Each event is a discrete occurrence that may cause state changes and
/// action emissions. The handler processes them sequentially, ensuring
/// deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor up by one row (wraps to the bottom).
    CursorUp,
    /// Moves the cursor down by one row (wraps to the top).
    CursorDown,
    /// Selects a row by its displayed position on the active screen.
    SelectRow(usize),
    /// A row was activated (double-click / Enter on the table).
    ///
    /// On the listing screen this opens the edit screen for that row; on the
    /// edit screen it commits the row as the active choice.
    RowActivated(usize),

    /// The search input changed; carries the full new term.
    SearchEdited(String),
    /// The "more than one choice" checkbox changed.
    MultiChoiceOnlyToggled(bool),

    /// Opens the edit screen for the selected group.
    EditRequested,
    /// Opens the help popup.
    HelpRequested,
    /// Accepts the session: persist everything and close.
    AcceptPressed,
    /// Cancels the active screen.
    ///
    /// On the edit screen: back to the listing, group untouched. On the
    /// listing screen: close, asking for confirmation first when changes are
    /// pending.
    CancelPressed,
    /// The user's answer to [`Action::ConfirmDiscard`].
    DiscardAnswer(bool),

    /// A choice row was highlighted in the edit screen, addressed by path.
    ChoiceSelected(String),
    /// Commits the highlighted choice as the group's active one.
    SetChoicePressed,
    /// Switches the edited group to automatic mode.
    AutomaticModePressed,

    /// The refreshed snapshot after the shell applied a mutation.
    ///
    /// `index` is the group's position in the session's unfiltered list, as
    /// carried by the mutation action that caused it.
    GroupUpdated {
        /// Position of the group in [`AppState::groups`].
        index: usize,
        /// The refreshed snapshot replacing the stale one.
        group: AlternativeGroup,
    },
}

/// Processes an event, mutates session state, and returns actions to execute.
///
/// Returns `(redraw, actions)`: `redraw` tells the shell whether the view
/// model changed and the screen should be re-rendered; `actions` are executed
/// in order. Both may be trivially empty for ignored events.
///
/// # Errors
///
/// Propagates [`ChoiceNotFound`] from the choice selector when the
/// presentation layer reports a path that was never offered, or when a group
/// is opened for editing with a stale current value. These are contract
/// violations and are surfaced loudly rather than papered over.
///
/// [`ChoiceNotFound`]: crate::AlternativesError::ChoiceNotFound
///
/// # Examples
///
/// ```
/// use alternatives_ui::{handle_event, Action, AlternativeGroup, AppState, Choice, Event, Status};
///
/// let mut state = AppState::new(vec![AlternativeGroup::new(
///     "editor",
///     "/usr/bin/vim",
///     Status::Manual,
///     vec![
///         Choice::new("/bin/ed", 10, "s1"),
///         Choice::new("/usr/bin/vim", 20, "s2"),
///     ],
/// )]);
///
/// let (redraw, actions) = handle_event(&mut state, &Event::CursorDown)?;
/// assert!(redraw);
/// assert!(actions.is_empty());
/// # Ok::<(), alternatives_ui::AlternativesError>(())
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::CursorDown => {
            match state.screen {
                Screen::List => state.move_selection_down(),
                Screen::Edit(mut edit) => {
                    let count = state.groups[edit.group_index].choices.len();
                    edit.move_selection_down(count);
                    state.screen = Screen::Edit(edit);
                }
            }
            Ok((true, vec![]))
        }
        Event::CursorUp => {
            match state.screen {
                Screen::List => state.move_selection_up(),
                Screen::Edit(mut edit) => {
                    let count = state.groups[edit.group_index].choices.len();
                    edit.move_selection_up(count);
                    state.screen = Screen::Edit(edit);
                }
            }
            Ok((true, vec![]))
        }
        Event::SelectRow(row) => Ok((select_row(state, *row), vec![])),
        Event::RowActivated(row) => match state.screen {
            Screen::List => {
                if !select_row(state, *row) {
                    return Ok((false, vec![]));
                }
                open_edit_screen(state)
            }
            Screen::Edit(_) => {
                if !select_row(state, *row) {
                    return Ok((false, vec![]));
                }
                commit_selected_choice(state)
            }
        },
        Event::SearchEdited(term) => {
            if state.screen != Screen::List {
                return Ok((false, vec![]));
            }
            tracing::trace!(term = %term, "search term updated");
            state.set_search_term(term.clone());
            Ok((true, vec![]))
        }
        Event::MultiChoiceOnlyToggled(enabled) => {
            if state.screen != Screen::List {
                return Ok((false, vec![]));
            }
            state.set_multi_choice_only(*enabled);
            Ok((true, vec![]))
        }
        Event::EditRequested => {
            if state.screen != Screen::List {
                return Ok((false, vec![]));
            }
            open_edit_screen(state)
        }
        Event::HelpRequested => {
            if state.screen != Screen::List {
                return Ok((false, vec![]));
            }
            Ok((false, vec![Action::ShowHelp]))
        }
        Event::AcceptPressed => {
            if state.screen != Screen::List {
                return Ok((false, vec![]));
            }
            tracing::debug!(dirty = state.dirty, "session accepted");
            Ok((
                false,
                vec![Action::SaveAll, Action::Close(DialogResult::Accepted)],
            ))
        }
        Event::CancelPressed => match state.screen {
            Screen::Edit(_) => {
                state.screen = Screen::List;
                Ok((true, vec![]))
            }
            Screen::List => {
                if state.dirty {
                    tracing::debug!("cancel with pending changes, asking for confirmation");
                    Ok((false, vec![Action::ConfirmDiscard]))
                } else {
                    Ok((false, vec![Action::Close(DialogResult::Cancelled)]))
                }
            }
        },
        Event::DiscardAnswer(discard) => {
            if *discard {
                tracing::debug!("pending changes discarded");
                Ok((false, vec![Action::Close(DialogResult::Cancelled)]))
            } else {
                Ok((false, vec![]))
            }
        }
        Event::ChoiceSelected(path) => {
            let Screen::Edit(edit) = state.screen else {
                return Ok((false, vec![]));
            };
            let position = state.groups[edit.group_index].choice_position(path)?;
            state.screen = Screen::Edit(EditState {
                selected: position,
                ..edit
            });
            Ok((true, vec![]))
        }
        Event::SetChoicePressed => commit_selected_choice(state),
        Event::AutomaticModePressed => {
            let Screen::Edit(edit) = state.screen else {
                return Ok((false, vec![]));
            };
            tracing::info!(
                group = %state.groups[edit.group_index].name,
                "user selected automatic mode"
            );
            state.screen = Screen::List;
            state.dirty = true;
            Ok((
                true,
                vec![Action::SetAutomaticMode {
                    group_index: edit.group_index,
                }],
            ))
        }
        Event::GroupUpdated { index, group } => {
            if *index >= state.groups.len() {
                tracing::warn!(
                    index = *index,
                    total = state.groups.len(),
                    "ignoring group update with out-of-range index"
                );
                return Ok((false, vec![]));
            }
            tracing::debug!(
                group = %group.name,
                value = %group.value,
                status = %group.status,
                "group snapshot refreshed"
            );
            state.groups[*index] = group.clone();
            state.clamp_selection();
            if let Screen::Edit(edit) = &mut state.screen {
                if edit.group_index == *index {
                    let count = state.groups[*index].choices.len();
                    edit.selected = edit.selected.min(count.saturating_sub(1));
                }
            }
            Ok((true, vec![]))
        }
    }
}

/// Sets the cursor to `row` on the active screen; false when out of bounds.
fn select_row(state: &mut AppState, row: usize) -> bool {
    match state.screen {
        Screen::List => {
            if row >= state.visible_len() {
                return false;
            }
            state.selected = row;
            true
        }
        Screen::Edit(mut edit) => {
            if row >= state.groups[edit.group_index].choices.len() {
                return false;
            }
            edit.selected = row;
            state.screen = Screen::Edit(edit);
            true
        }
    }
}

/// Opens the edit screen for the selected listing row.
fn open_edit_screen(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    let Some((group_index, group)) = state.selected_group() else {
        tracing::debug!("edit requested with no selectable row");
        return Ok((false, vec![]));
    };
    let edit = EditState::new(group_index, group)?;
    tracing::debug!(group = %state.groups[group_index].name, "opening edit screen");
    state.screen = Screen::Edit(edit);
    Ok((true, vec![]))
}

/// Commits the highlighted edit-screen choice, returning to the listing.
fn commit_selected_choice(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    let Screen::Edit(edit) = state.screen else {
        return Ok((false, vec![]));
    };
    let group = &state.groups[edit.group_index];
    let Some(choice) = group.choices.get(edit.selected) else {
        return Ok((false, vec![]));
    };
    tracing::info!(group = %group.name, path = %choice.path, "user selected the alternative");
    let action = Action::Choose {
        group_index: edit.group_index,
        path: choice.path.clone(),
    };
    state.screen = Screen::List;
    state.dirty = true;
    Ok((true, vec![action]))
}
