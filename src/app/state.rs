//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the state container for one dialog
//! session, along with methods for filtering, selection management, and view
//! model generation. It is the single source of truth for all transient dialog
//! state.
//!
//! # Architecture
//!
//! `AppState` separates core data (the group snapshots handed over at session
//! start) from derived state (the filtered listing, the selected row) to keep
//! state transitions simple. View models are computed on demand from state
//! snapshots; nothing is cached between events.
//!
//! # State Components
//!
//! - **Groups**: the in-memory list of alternative groups for this session
//! - **Criteria**: the live filter restricting the listing screen
//! - **Selection**: cursor position within the filtered listing
//! - **Screen**: whether the listing or the edit screen is active
//! - **Dirty flag**: whether any choice/mode change has been committed

use crate::app::filter::{filtered_groups, FilterCriteria};
use crate::app::screens::{EditState, Screen};
use crate::domain::AlternativeGroup;
use crate::ui::helpers::preformatted;
use crate::ui::viewmodel::{ChoiceRow, DialogViewModel, EditViewModel, GroupRow, ListViewModel};

/// State of one dialog session.
///
/// Mutated by the event handler in response to presentation events; view
/// models are computed on demand. The group list is fixed in length for the
/// session; snapshots are replaced wholesale via
/// [`Event::GroupUpdated`](super::Event::GroupUpdated), never edited in place.
#[derive(Debug, Clone)]
pub struct AppState {
    /// All alternative groups supplied by the backend at session start.
    ///
    /// Indices into this list are the row identifiers the presentation layer
    /// uses when requesting a mutation.
    pub groups: Vec<AlternativeGroup>,

    /// Live filter criteria for the listing screen.
    pub criteria: FilterCriteria,

    /// Zero-based cursor position within the *filtered* listing.
    ///
    /// Clamped back into bounds whenever the filter output shrinks; reset to
    /// zero when it empties. Wraps around during navigation.
    pub selected: usize,

    /// Currently active screen.
    pub screen: Screen,

    /// Whether an edit-screen commit has been issued this session.
    ///
    /// Controls the discard confirmation on cancel.
    pub dirty: bool,
}

impl AppState {
    /// Creates a session over the given group snapshots.
    ///
    /// The filter starts with [`FilterCriteria::default`]: multi-choice-only
    /// on, empty search term.
    ///
    /// # Examples
    ///
    /// ```
    /// use alternatives_ui::AppState;
    ///
    /// let state = AppState::new(vec![]);
    /// assert_eq!(state.selected, 0);
    /// assert!(state.criteria.multi_choice_only);
    /// assert!(!state.dirty);
    /// ```
    #[must_use]
    pub fn new(groups: Vec<AlternativeGroup>) -> Self {
        Self {
            groups,
            criteria: FilterCriteria::default(),
            selected: 0,
            screen: Screen::List,
            dirty: false,
        }
    }

    /// Returns the filtered listing as `(original index, group)` pairs.
    ///
    /// Collected because callers index into it by display row; the lazy form
    /// lives in [`filtered_groups`].
    #[must_use]
    pub fn filtered(&self) -> Vec<(usize, &AlternativeGroup)> {
        filtered_groups(&self.groups, &self.criteria).collect()
    }

    /// Number of rows currently visible on the listing screen.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        filtered_groups(&self.groups, &self.criteria).count()
    }

    /// Returns the selected listing row as `(original index, group)`, if any.
    #[must_use]
    pub fn selected_group(&self) -> Option<(usize, &AlternativeGroup)> {
        filtered_groups(&self.groups, &self.criteria).nth(self.selected)
    }

    /// Moves the listing cursor down by one row, wrapping to the top.
    ///
    /// No-op when the filtered listing is empty.
    pub fn move_selection_down(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1) % len;
    }

    /// Moves the listing cursor up by one row, wrapping to the bottom.
    ///
    /// No-op when the filtered listing is empty.
    pub fn move_selection_up(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        if self.selected == 0 {
            self.selected = len - 1;
        } else {
            self.selected -= 1;
        }
    }

    /// Replaces the search term and re-clamps the selection.
    pub fn set_search_term(&mut self, term: String) {
        self.criteria.search_term = term;
        self.clamp_selection();
    }

    /// Sets the multi-choice-only restriction and re-clamps the selection.
    pub fn set_multi_choice_only(&mut self, enabled: bool) {
        self.criteria.multi_choice_only = enabled;
        self.clamp_selection();
    }

    /// Clamps the listing cursor back into the bounds of the filtered result.
    ///
    /// Called after every change that can shrink the listing: criteria edits
    /// and group snapshot replacements.
    pub fn clamp_selection(&mut self) {
        let len = self.visible_len();
        let clamped = if len == 0 {
            0
        } else {
            self.selected.min(len - 1)
        };
        if clamped != self.selected {
            tracing::debug!(
                from = self.selected,
                to = clamped,
                visible = len,
                "selection clamped after filter change"
            );
            self.selected = clamped;
        }
    }

    /// Computes the view model for the active screen.
    ///
    /// The result is plain display data: the shell renders it without further
    /// business logic.
    #[must_use]
    pub fn compute_viewmodel(&self) -> DialogViewModel {
        let _span = tracing::debug_span!(
            "compute_viewmodel",
            total_groups = self.groups.len(),
            screen = ?self.screen
        )
        .entered();

        match self.screen {
            Screen::List => DialogViewModel::List(self.list_viewmodel()),
            Screen::Edit(edit) => DialogViewModel::Edit(self.edit_viewmodel(&edit)),
        }
    }

    fn list_viewmodel(&self) -> ListViewModel {
        let rows: Vec<GroupRow> = filtered_groups(&self.groups, &self.criteria)
            .map(|(group_index, group)| GroupRow {
                group_index,
                name: group.name.clone(),
                value: group.value.clone(),
                status: group.status.label().to_string(),
            })
            .collect();

        tracing::debug!(visible = rows.len(), "listing view model computed");

        ListViewModel {
            selected_row: self.selected.min(rows.len().saturating_sub(1)),
            rows,
            search_term: self.criteria.search_term.clone(),
            multi_choice_only: self.criteria.multi_choice_only,
        }
    }

    fn edit_viewmodel(&self, edit: &EditState) -> EditViewModel {
        let group = &self.groups[edit.group_index];
        let rows: Vec<ChoiceRow> = group
            .choices
            .iter()
            .map(|choice| ChoiceRow {
                path: choice.path.clone(),
                priority: choice.priority,
            })
            .collect();

        let slaves_preview = group
            .choices
            .get(edit.selected)
            .map(|choice| preformatted(&choice.slaves))
            .unwrap_or_default();

        EditViewModel {
            name: group.name.clone(),
            status: group.status.label().to_string(),
            value: group.value.clone(),
            rows,
            selected_row: edit.selected,
            slaves_preview,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Choice, Status};

    fn groups() -> Vec<AlternativeGroup> {
        vec![
            AlternativeGroup::new(
                "editor",
                "/usr/bin/nano",
                Status::Manual,
                vec![
                    Choice::new("/usr/bin/nano", 20, "nano slaves"),
                    Choice::new("/usr/bin/vim", 30, "vim slaves"),
                ],
            ),
            AlternativeGroup::new(
                "pager",
                "/usr/bin/less",
                Status::Automatic,
                vec![Choice::new("/usr/bin/less", 77, "less slaves")],
            ),
            AlternativeGroup::new(
                "awk",
                "/usr/bin/gawk",
                Status::Automatic,
                vec![
                    Choice::new("/usr/bin/gawk", 10, ""),
                    Choice::new("/usr/bin/mawk", 5, ""),
                ],
            ),
        ]
    }

    #[test]
    fn session_starts_on_the_listing_screen_with_default_criteria() {
        let state = AppState::new(groups());
        assert_eq!(state.screen, Screen::List);
        assert!(state.criteria.multi_choice_only);
        assert!(state.criteria.search_term.is_empty());
        assert_eq!(state.visible_len(), 2);
    }

    #[test]
    fn selection_wraps_over_the_filtered_listing() {
        let mut state = AppState::new(groups());
        assert_eq!(state.selected, 0);
        state.move_selection_down();
        assert_eq!(state.selected, 1);
        state.move_selection_down();
        assert_eq!(state.selected, 0);
        state.move_selection_up();
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn narrowing_the_filter_clamps_the_selection() {
        let mut state = AppState::new(groups());
        state.move_selection_down();
        assert_eq!(state.selected, 1);
        state.set_search_term("edi".to_string());
        assert_eq!(state.visible_len(), 1);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn emptying_the_filter_resets_the_selection() {
        let mut state = AppState::new(groups());
        state.set_search_term("no such group".to_string());
        assert_eq!(state.visible_len(), 0);
        assert_eq!(state.selected, 0);
        assert!(state.selected_group().is_none());
    }

    #[test]
    fn listing_rows_carry_original_indices_and_status_labels() {
        let mut state = AppState::new(groups());
        state.set_multi_choice_only(false);
        let DialogViewModel::List(vm) = state.compute_viewmodel() else {
            panic!("expected the listing view model");
        };
        let rows: Vec<_> = vm
            .rows
            .iter()
            .map(|r| (r.group_index, r.name.as_str(), r.status.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![
                (0, "editor", "manual"),
                (1, "pager", "auto"),
                (2, "awk", "auto"),
            ]
        );
    }

    #[test]
    fn edit_viewmodel_previews_the_highlighted_choice_slaves() {
        let mut state = AppState::new(groups());
        let edit = EditState::new(0, &state.groups[0]).unwrap();
        state.screen = Screen::Edit(edit);
        let DialogViewModel::Edit(vm) = state.compute_viewmodel() else {
            panic!("expected the edit view model");
        };
        assert_eq!(vm.name, "editor");
        assert_eq!(vm.status, "manual");
        assert_eq!(vm.selected_row, 0);
        assert_eq!(vm.slaves_preview, "<pre>nano slaves</pre>");
        assert_eq!(vm.rows.len(), 2);
        assert_eq!(vm.rows[1].path, "/usr/bin/vim");
        assert_eq!(vm.rows[1].priority, 30);
    }
}
