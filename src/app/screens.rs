//! Screen state types for the dialog session.
//!
//! This module defines the state machine enum that controls which dialog
//! screen is active and which keybindings/events apply. A session is either on
//! the listing screen (all alternative groups, filterable) or on the edit
//! screen for one particular group (its choices and their slave links).

use crate::domain::{AlternativeGroup, Result};

/// Per-screen state while editing one alternative group.
///
/// Holds only indices into the session's group list, so the containing
/// [`AppState`](super::AppState) stays freely borrowable while a screen is
/// active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditState {
    /// Index of the edited group in the session's unfiltered group list.
    pub group_index: usize,
    /// Zero-based index of the highlighted choice within the group.
    pub selected: usize,
}

impl EditState {
    /// Opens the edit screen for `group`, preselecting its current choice so
    /// that choice's slave links are shown immediately.
    ///
    /// # Errors
    ///
    /// Returns [`ChoiceNotFound`] when the group's `value` does not resolve to
    /// any of its choices. A stale value is a backend-contract violation and
    /// fails loudly at open time instead of silently highlighting some other
    /// choice.
    ///
    /// [`ChoiceNotFound`]: crate::AlternativesError::ChoiceNotFound
    pub fn new(group_index: usize, group: &AlternativeGroup) -> Result<Self> {
        let selected = group.choice_position(&group.value)?;
        Ok(Self {
            group_index,
            selected,
        })
    }

    /// Moves the choice highlight down by one, wrapping to the top.
    ///
    /// No-op when the group has no choices.
    pub fn move_selection_down(&mut self, choice_count: usize) {
        if choice_count == 0 {
            return;
        }
        self.selected = (self.selected + 1) % choice_count;
    }

    /// Moves the choice highlight up by one, wrapping to the bottom.
    ///
    /// No-op when the group has no choices.
    pub fn move_selection_up(&mut self, choice_count: usize) {
        if choice_count == 0 {
            return;
        }
        if self.selected == 0 {
            self.selected = choice_count - 1;
        } else {
            self.selected -= 1;
        }
    }
}

/// Currently active dialog screen.
///
/// Determines how shared events (cursor movement, row selection, cancel) are
/// interpreted and which view model variant is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The listing screen: every group, restricted by the filter criteria.
    List,
    /// The edit screen for one group's choices.
    Edit(EditState),
}
