//! Alternative group and choice domain model.
//!
//! This module defines the snapshot types the dialogs operate on: an
//! [`AlternativeGroup`] is one logical command name (such as `editor`) together
//! with its currently active value, its selection [`Status`], and the ordered
//! list of [`Choice`]s that can provide it. Snapshots are supplied by the
//! external alternatives backend and are replaced wholesale when a mutation is
//! applied; the dialog layer never edits them field by field.

use serde::{Deserialize, Serialize};

use super::error::{AlternativesError, Result};

/// Selection mode of an alternative group.
///
/// In automatic mode the system picks the choice with the highest priority; in
/// manual mode the user's explicit selection is pinned regardless of priority.
/// The display labels (`"auto"` / `"manual"`) match what the status column of
/// the listing dialog renders, and serde round-trips through the same strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// The active choice is selected by highest priority.
    #[serde(rename = "auto")]
    Automatic,
    /// The active choice was pinned explicitly by the user.
    #[serde(rename = "manual")]
    Manual,
}

impl Status {
    /// Returns the display label for the status column.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Automatic => "auto",
            Self::Manual => "manual",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One concrete provider program for an alternative group.
///
/// Immutable from the dialog layer's perspective. `priority` is used only for
/// display and for the backend's automatic-mode selection; `slaves` is the
/// free-form description of the auxiliary links that switch together with this
/// choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Filesystem path of the provider, unique within its group in
    /// well-formed data.
    pub path: String,
    /// Priority assigned by the package creators.
    pub priority: i32,
    /// Free-form text describing the linked slave entries.
    pub slaves: String,
}

impl Choice {
    /// Creates a new choice record.
    #[must_use]
    pub fn new(path: impl Into<String>, priority: i32, slaves: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            priority,
            slaves: slaves.into(),
        }
    }
}

/// A logical command name with its interchangeable provider programs.
///
/// # Examples
///
/// ```
/// use alternatives_ui::{AlternativeGroup, Choice, Status};
///
/// let group = AlternativeGroup::new(
///     "editor",
///     "/usr/bin/vim",
///     Status::Manual,
///     vec![
///         Choice::new("/bin/ed", 10, "s1"),
///         Choice::new("/usr/bin/vim", 20, "s2"),
///     ],
/// );
///
/// let choice = group.find_choice("/usr/bin/vim").unwrap();
/// assert_eq!(choice.priority, 20);
/// assert_eq!(choice.slaves, "s2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeGroup {
    /// Unique name of the group (the logical command, e.g. `editor`).
    pub name: String,
    /// Path of the currently active choice.
    pub value: String,
    /// Whether the active choice is picked automatically or pinned manually.
    pub status: Status,
    /// Ordered list of available choices. Groups with no choices are
    /// considered empty and are excluded from listing by the filter layer.
    pub choices: Vec<Choice>,
}

impl AlternativeGroup {
    /// Creates a new group snapshot.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        status: Status,
        choices: Vec<Choice>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            status,
            choices,
        }
    }

    /// Returns the position of the choice with the given path.
    ///
    /// Resolution is deterministic: if duplicate paths exist (malformed backend
    /// data), the first match in list order wins.
    ///
    /// # Errors
    ///
    /// Returns [`AlternativesError::ChoiceNotFound`] if no choice has that
    /// path. This should never happen under correct presentation-layer use,
    /// since selected paths are always sourced from values previously offered
    /// to it; the lookup is still performed rather than assumed.
    pub fn choice_position(&self, path: &str) -> Result<usize> {
        self.choices
            .iter()
            .position(|choice| choice.path == path)
            .ok_or_else(|| AlternativesError::ChoiceNotFound {
                group: self.name.clone(),
                path: path.to_string(),
            })
    }

    /// Resolves a selected row identifier (a choice's path) back to the full
    /// choice record, for display of its slave-link text.
    ///
    /// # Errors
    ///
    /// Returns [`AlternativesError::ChoiceNotFound`] on a lookup miss; see
    /// [`choice_position`](Self::choice_position).
    pub fn find_choice(&self, path: &str) -> Result<&Choice> {
        self.choice_position(path).map(|index| &self.choices[index])
    }

    /// Whether this group has no choices at all.
    ///
    /// Empty groups are excluded from listing by the group filter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> AlternativeGroup {
        AlternativeGroup::new(
            "editor",
            "/usr/bin/vim",
            Status::Manual,
            vec![
                Choice::new("/bin/ed", 10, "s1"),
                Choice::new("/usr/bin/vim", 20, "s2"),
            ],
        )
    }

    #[test]
    fn find_choice_returns_the_matching_record() {
        let group = editor();
        let choice = group.find_choice("/usr/bin/vim").unwrap();
        assert_eq!(choice.path, "/usr/bin/vim");
        assert_eq!(choice.priority, 20);
        assert_eq!(choice.slaves, "s2");
    }

    #[test]
    fn find_choice_fails_loudly_on_unknown_path() {
        let group = editor();
        let err = group.find_choice("/usr/bin/nano").unwrap_err();
        match err {
            AlternativesError::ChoiceNotFound { group, path } => {
                assert_eq!(group, "editor");
                assert_eq!(path, "/usr/bin/nano");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_paths_resolve_to_the_first_match() {
        let group = AlternativeGroup::new(
            "pager",
            "/usr/bin/less",
            Status::Automatic,
            vec![
                Choice::new("/usr/bin/less", 77, "first"),
                Choice::new("/usr/bin/less", 1, "second"),
            ],
        );
        assert_eq!(group.choice_position("/usr/bin/less").unwrap(), 0);
        assert_eq!(group.find_choice("/usr/bin/less").unwrap().slaves, "first");
    }

    #[test]
    fn status_labels_match_the_listing_columns() {
        assert_eq!(Status::Automatic.label(), "auto");
        assert_eq!(Status::Manual.label(), "manual");
        assert_eq!(Status::Automatic.to_string(), "auto");
    }

    #[test]
    fn status_serializes_through_its_display_labels() {
        let group = editor();
        let encoded = toml::to_string(&group).unwrap();
        assert!(encoded.contains("status = \"manual\""));
        let decoded: AlternativeGroup = toml::from_str(&encoded).unwrap();
        assert_eq!(decoded, group);
    }
}
