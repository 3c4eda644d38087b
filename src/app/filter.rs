//! Group filtering for the listing dialog.
//!
//! This module owns the policy for which alternative groups are displayed:
//! the always-on exclusion of empty groups, the "more than one choice"
//! restriction, and the search-term match. All three are expressed as
//! independent predicates composed in a fixed order, so additional filters can
//! be added without touching the existing ones, and so the policy lives in one
//! place instead of being scattered across call sites.
//!
//! Filtered output pairs each group with its position in the *unfiltered*
//! list. The presentation layer addresses a row for mutation by that original
//! index, not by identity.

use crate::domain::AlternativeGroup;
use serde::{Deserialize, Serialize};

/// User-entered criteria restricting which groups are listed.
///
/// `search_term` is matched as a case-sensitive substring of the group name,
/// with no trimming or normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Substring to match against group names; empty means no restriction.
    pub search_term: String,
    /// When true, only groups with more than one choice are listed.
    pub multi_choice_only: bool,
}

impl Default for FilterCriteria {
    /// The listing dialog starts with the multi-choice restriction on and an
    /// empty search term.
    fn default() -> Self {
        Self {
            search_term: String::new(),
            multi_choice_only: true,
        }
    }
}

/// A group qualifies for listing at all.
///
/// Groups with no choices are degenerate and never displayed.
#[must_use]
pub fn has_any_choice(group: &AlternativeGroup) -> bool {
    !group.is_empty()
}

/// A group offers a real decision to make.
#[must_use]
pub fn has_multiple_choices(group: &AlternativeGroup) -> bool {
    group.choices.len() > 1
}

/// A group's name contains `term` as a case-sensitive substring.
#[must_use]
pub fn name_matches(group: &AlternativeGroup, term: &str) -> bool {
    group.name.contains(term)
}

/// Produces the ordered sub-list of groups to display, paired with each
/// element's index in the unfiltered `groups` slice.
///
/// The result is a lazy, finite iterator; it is recomputed fresh on every
/// criteria change rather than kept as a persistent cursor. Relative order is
/// preserved, and an empty result is a valid outcome, never a fault.
///
/// # Examples
///
/// ```
/// use alternatives_ui::app::filter::{filtered_groups, FilterCriteria};
/// use alternatives_ui::{AlternativeGroup, Choice, Status};
///
/// let groups = vec![
///     AlternativeGroup::new("editor", "/usr/bin/vim", Status::Manual, vec![
///         Choice::new("/bin/ed", 10, ""),
///         Choice::new("/usr/bin/vim", 20, ""),
///     ]),
///     AlternativeGroup::new("pager", "/usr/bin/less", Status::Automatic, vec![
///         Choice::new("/usr/bin/less", 77, ""),
///     ]),
/// ];
///
/// let criteria = FilterCriteria { search_term: String::new(), multi_choice_only: true };
/// let visible: Vec<usize> = filtered_groups(&groups, &criteria).map(|(i, _)| i).collect();
/// assert_eq!(visible, vec![0]);
/// ```
pub fn filtered_groups<'a>(
    groups: &'a [AlternativeGroup],
    criteria: &'a FilterCriteria,
) -> impl Iterator<Item = (usize, &'a AlternativeGroup)> + 'a {
    groups
        .iter()
        .enumerate()
        .filter(|(_, group)| has_any_choice(group))
        .filter(move |(_, group)| !criteria.multi_choice_only || has_multiple_choices(group))
        .filter(move |(_, group)| {
            criteria.search_term.is_empty() || name_matches(group, &criteria.search_term)
        })
}
