//! View model types representing renderable dialog state.
//!
//! This module defines immutable view models computed from session state,
//! following the MVVM pattern. View models are display-ready data: the shell
//! maps them one-to-one onto its widgets (tables, labels, text panes) and
//! contains no policy of its own.
//!
//! # Architecture
//!
//! View models are created via
//! [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel)
//! and recomputed after every handled event that reports `redraw = true`.
//! They contain no business logic.

/// View model for the active screen of a dialog session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogViewModel {
    /// The listing screen: filterable table of all alternative groups.
    List(ListViewModel),
    /// The edit screen for one group's choices.
    Edit(EditViewModel),
}

/// Display data for the listing screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewModel {
    /// One row per group passing the current filter, in original order.
    pub rows: Vec<GroupRow>,

    /// Displayed row the cursor is on; meaningless when `rows` is empty.
    pub selected_row: usize,

    /// Current search term, echoed for the search input widget.
    pub search_term: String,

    /// Current state of the "more than one choice" checkbox.
    pub multi_choice_only: bool,
}

/// One row of the alternatives table.
///
/// `group_index` is the group's position in the session's *unfiltered* list:
/// the identifier the shell hands back when it requests a mutation for this
/// row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRow {
    /// Position in the unfiltered group list.
    pub group_index: usize,
    /// Group name (the logical command).
    pub name: String,
    /// Path of the currently active choice.
    pub value: String,
    /// Status column label (`"auto"` or `"manual"`).
    pub status: String,
}

/// Display data for the edit screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditViewModel {
    /// Name of the edited group.
    pub name: String,
    /// Status label of the edited group.
    pub status: String,
    /// Path of the group's currently active choice.
    pub value: String,
    /// One row per choice, in backend order.
    pub rows: Vec<ChoiceRow>,
    /// Displayed row the highlight is on.
    pub selected_row: usize,
    /// Slave links of the highlighted choice, wrapped for the preview pane.
    pub slaves_preview: String,
}

/// One row of the choices table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceRow {
    /// Provider path; doubles as the row identifier the shell reports back.
    pub path: String,
    /// Priority assigned by the package creators.
    pub priority: i32,
}
