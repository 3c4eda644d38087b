//! Full dialog-session tests against a fake alternatives backend.
//!
//! These tests play the presentation shell: they feed events into the state
//! machine, execute the returned actions against an in-memory
//! `AlternativeSource`, and feed refreshed snapshots back, running the same
//! loop a real shell runs between user inputs.

use alternatives_ui::{
    handle_event, Action, AlternativeGroup, AlternativeSource, AlternativesError, AppState,
    Choice, DialogResult, DialogViewModel, Event, Result, Status,
};

/// In-memory backend recording every mutation the dialogs delegate.
struct FakeSource {
    groups: Vec<AlternativeGroup>,
    chosen: Vec<(String, String)>,
    automatic: Vec<String>,
    saved: Vec<String>,
}

impl FakeSource {
    fn new(groups: Vec<AlternativeGroup>) -> Self {
        Self {
            groups,
            chosen: Vec::new(),
            automatic: Vec::new(),
            saved: Vec::new(),
        }
    }

    fn group_mut(&mut self, name: &str) -> Result<&mut AlternativeGroup> {
        self.groups
            .iter_mut()
            .find(|g| g.name == name)
            .ok_or_else(|| AlternativesError::Persistence(format!("unknown group {name}")))
    }
}

impl AlternativeSource for FakeSource {
    fn list_all(&self) -> Result<Vec<AlternativeGroup>> {
        Ok(self.groups.clone())
    }

    fn choose(&mut self, group: &str, path: &str) -> Result<AlternativeGroup> {
        self.chosen.push((group.to_string(), path.to_string()));
        let entry = self.group_mut(group)?;
        if !entry.choices.iter().any(|c| c.path == path) {
            return Err(AlternativesError::InvalidChoice {
                group: group.to_string(),
                path: path.to_string(),
            });
        }
        entry.value = path.to_string();
        entry.status = Status::Manual;
        Ok(entry.clone())
    }

    fn set_automatic_mode(&mut self, group: &str) -> Result<AlternativeGroup> {
        self.automatic.push(group.to_string());
        let entry = self.group_mut(group)?;
        if let Some(best) = entry.choices.iter().max_by_key(|c| c.priority) {
            entry.value = best.path.clone();
        }
        entry.status = Status::Automatic;
        Ok(entry.clone())
    }

    fn save(&mut self, group: &str) -> Result<()> {
        self.saved.push(group.to_string());
        Ok(())
    }
}

/// Executes actions the way a shell would, feeding snapshots back.
///
/// Returns the close outcome, if any action ended the session.
fn execute(
    state: &mut AppState,
    source: &mut FakeSource,
    actions: Vec<Action>,
) -> Result<Option<DialogResult>> {
    let mut outcome = None;
    for action in actions {
        match action {
            Action::Choose { group_index, path } => {
                let name = state.groups[group_index].name.clone();
                let refreshed = source.choose(&name, &path)?;
                handle_event(
                    state,
                    &Event::GroupUpdated {
                        index: group_index,
                        group: refreshed,
                    },
                )?;
            }
            Action::SetAutomaticMode { group_index } => {
                let name = state.groups[group_index].name.clone();
                let refreshed = source.set_automatic_mode(&name)?;
                handle_event(
                    state,
                    &Event::GroupUpdated {
                        index: group_index,
                        group: refreshed,
                    },
                )?;
            }
            Action::SaveAll => {
                for group in &state.groups {
                    source.save(&group.name)?;
                }
            }
            Action::Close(result) => outcome = Some(result),
            Action::ShowHelp | Action::ConfirmDiscard => {}
        }
    }
    Ok(outcome)
}

fn dispatch(
    state: &mut AppState,
    source: &mut FakeSource,
    event: &Event,
) -> Result<Option<DialogResult>> {
    let (_redraw, actions) = handle_event(state, event)?;
    execute(state, source, actions)
}

fn fixture() -> FakeSource {
    FakeSource::new(vec![
        AlternativeGroup::new(
            "editor",
            "/usr/bin/nano",
            Status::Manual,
            vec![
                Choice::new("/usr/bin/nano", 20, "nano slaves\n line2"),
                Choice::new("/usr/bin/vim", 30, "vim slaves\n line2"),
            ],
        ),
        AlternativeGroup::new(
            "pager",
            "/usr/bin/less",
            Status::Automatic,
            vec![Choice::new("/usr/bin/less", 77, "less slaves")],
        ),
    ])
}

#[test]
fn switching_a_choice_flows_through_the_backend_and_back() {
    let mut source = fixture();
    let mut state = AppState::new(source.list_all().unwrap());

    // Default filter lists only the editor group (pager has a single choice).
    assert_eq!(state.visible_len(), 1);

    dispatch(&mut state, &mut source, &Event::EditRequested).unwrap();
    let DialogViewModel::Edit(vm) = state.compute_viewmodel() else {
        panic!("expected the edit screen");
    };
    assert_eq!(vm.selected_row, 0);
    assert_eq!(vm.slaves_preview, "<pre>nano slaves\n line2</pre>");

    dispatch(&mut state, &mut source, &Event::CursorDown).unwrap();
    dispatch(&mut state, &mut source, &Event::SetChoicePressed).unwrap();

    assert_eq!(
        source.chosen,
        vec![("editor".to_string(), "/usr/bin/vim".to_string())]
    );
    assert_eq!(state.groups[0].value, "/usr/bin/vim");
    assert_eq!(state.groups[0].status, Status::Manual);

    // The listing reflects the refreshed snapshot.
    let DialogViewModel::List(vm) = state.compute_viewmodel() else {
        panic!("expected the listing screen");
    };
    assert_eq!(vm.rows[0].value, "/usr/bin/vim");
    assert_eq!(vm.rows[0].status, "manual");
}

#[test]
fn automatic_mode_lets_the_backend_pick_by_priority() {
    let mut source = fixture();
    let mut state = AppState::new(source.list_all().unwrap());

    dispatch(&mut state, &mut source, &Event::EditRequested).unwrap();
    dispatch(&mut state, &mut source, &Event::AutomaticModePressed).unwrap();

    assert_eq!(source.automatic, vec!["editor".to_string()]);
    assert_eq!(state.groups[0].value, "/usr/bin/vim");
    assert_eq!(state.groups[0].status, Status::Automatic);
}

#[test]
fn accepting_saves_every_group_and_closes() {
    let mut source = fixture();
    let mut state = AppState::new(source.list_all().unwrap());

    dispatch(&mut state, &mut source, &Event::EditRequested).unwrap();
    dispatch(&mut state, &mut source, &Event::SetChoicePressed).unwrap();
    let outcome = dispatch(&mut state, &mut source, &Event::AcceptPressed).unwrap();

    assert_eq!(outcome, Some(DialogResult::Accepted));
    assert_eq!(source.saved, vec!["editor".to_string(), "pager".to_string()]);
}

#[test]
fn cancelling_an_untouched_session_mutates_nothing() {
    let mut source = fixture();
    let mut state = AppState::new(source.list_all().unwrap());

    dispatch(&mut state, &mut source, &Event::EditRequested).unwrap();
    dispatch(&mut state, &mut source, &Event::CancelPressed).unwrap();
    let outcome = dispatch(&mut state, &mut source, &Event::CancelPressed).unwrap();

    assert_eq!(outcome, Some(DialogResult::Cancelled));
    assert!(source.chosen.is_empty());
    assert!(source.automatic.is_empty());
    assert!(source.saved.is_empty());
}

#[test]
fn cancelling_with_pending_changes_needs_confirmation() {
    let mut source = fixture();
    let mut state = AppState::new(source.list_all().unwrap());

    dispatch(&mut state, &mut source, &Event::EditRequested).unwrap();
    dispatch(&mut state, &mut source, &Event::SetChoicePressed).unwrap();

    let (_redraw, actions) = handle_event(&mut state, &Event::CancelPressed).unwrap();
    assert_eq!(actions, vec![Action::ConfirmDiscard]);

    // Declining the confirmation keeps the session alive.
    let outcome = dispatch(&mut state, &mut source, &Event::DiscardAnswer(false)).unwrap();
    assert_eq!(outcome, None);

    let outcome = dispatch(&mut state, &mut source, &Event::DiscardAnswer(true)).unwrap();
    assert_eq!(outcome, Some(DialogResult::Cancelled));
    assert!(source.saved.is_empty());
}

#[test]
fn filtering_and_row_addressing_survive_a_full_round_trip() {
    let mut source = fixture();
    let mut state = AppState::new(source.list_all().unwrap());

    // Show everything, then narrow down to the pager group.
    dispatch(&mut state, &mut source, &Event::MultiChoiceOnlyToggled(false)).unwrap();
    dispatch(
        &mut state,
        &mut source,
        &Event::SearchEdited("pag".to_string()),
    )
    .unwrap();

    let DialogViewModel::List(vm) = state.compute_viewmodel() else {
        panic!("expected the listing screen");
    };
    assert_eq!(vm.rows.len(), 1);
    assert_eq!(vm.rows[0].name, "pager");
    // The row still addresses the group by its original position.
    assert_eq!(vm.rows[0].group_index, 1);

    // Activating the single visible row edits the pager group, not row 0's
    // position in the unfiltered list.
    dispatch(&mut state, &mut source, &Event::RowActivated(0)).unwrap();
    let DialogViewModel::Edit(vm) = state.compute_viewmodel() else {
        panic!("expected the edit screen");
    };
    assert_eq!(vm.name, "pager");
    assert_eq!(vm.slaves_preview, "<pre>less slaves</pre>");
}

#[test]
fn a_backend_rejection_propagates_untouched() {
    let mut source = fixture();
    let err = source.choose("editor", "/usr/bin/emacs").unwrap_err();
    assert!(matches!(err, AlternativesError::InvalidChoice { .. }));
}
