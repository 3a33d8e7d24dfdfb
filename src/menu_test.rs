use super::*;

fn opened() -> MenuState {
    let mut state = MenuState::default();
    assert!(state.toggle());
    state
}

// =============================================================
// Open
// =============================================================

#[test]
fn starts_closed_and_unlocked() {
    let state = MenuState::default();
    assert!(!state.is_open());
    assert_eq!(state.body_overflow(), "");
    assert_eq!(state.closed_by(), None);
}

#[test]
fn hamburger_opens_and_locks_scroll() {
    let state = opened();
    assert!(state.is_open());
    assert_eq!(state.body_overflow(), "hidden");
}

// =============================================================
// Close triggers
// =============================================================

#[test]
fn every_close_trigger_unlocks_and_closes() {
    for trigger in [CloseTrigger::LinkClick, CloseTrigger::OutsideClick, CloseTrigger::Hamburger] {
        let mut state = opened();
        assert!(state.close(trigger));
        assert!(!state.is_open());
        assert_eq!(state.body_overflow(), "");
        assert_eq!(state.closed_by(), Some(trigger));
    }
}

#[test]
fn hamburger_reclick_closes_via_same_path() {
    let mut state = opened();
    assert!(!state.toggle());
    assert_eq!(state.body_overflow(), "");
    assert_eq!(state.closed_by(), Some(CloseTrigger::Hamburger));
}

#[test]
fn close_paths_converge_on_identical_state() {
    let mut by_link = opened();
    let mut by_outside = opened();
    let mut by_hamburger = opened();
    by_link.close(CloseTrigger::LinkClick);
    by_outside.close(CloseTrigger::OutsideClick);
    by_hamburger.toggle();
    for state in [by_link, by_outside, by_hamburger] {
        assert!(!state.is_open());
        assert_eq!(state.body_overflow(), "");
    }
}

#[test]
fn closing_when_closed_is_a_no_op() {
    let mut state = MenuState::default();
    assert!(!state.close(CloseTrigger::OutsideClick));
    assert!(!state.is_open());
    assert_eq!(state.closed_by(), None);
}

#[test]
fn reopen_clears_close_reason() {
    let mut state = opened();
    state.close(CloseTrigger::LinkClick);
    assert!(state.toggle());
    assert_eq!(state.closed_by(), None);
}

#[test]
fn outside_click_after_link_click_keeps_first_reason() {
    // A panel link click also bubbles to the document.
    let mut state = opened();
    state.close(CloseTrigger::LinkClick);
    state.close(CloseTrigger::OutsideClick);
    assert_eq!(state.closed_by(), Some(CloseTrigger::LinkClick));
}

// =============================================================
// close_triggers
// =============================================================

#[test]
fn navbar_present_wires_all_three_triggers() {
    let triggers = close_triggers(true);
    assert_eq!(triggers.len(), 3);
    for trigger in [CloseTrigger::Hamburger, CloseTrigger::LinkClick, CloseTrigger::OutsideClick] {
        assert!(triggers.contains(&trigger));
    }
}

#[test]
fn missing_navbar_disables_only_outside_click() {
    let triggers = close_triggers(false);
    assert!(!triggers.contains(&CloseTrigger::OutsideClick));
    assert!(triggers.contains(&CloseTrigger::Hamburger));
    assert!(triggers.contains(&CloseTrigger::LinkClick));
}

#[test]
fn menu_without_navbar_still_unlocks_on_link_click() {
    let mut state = opened();
    for trigger in close_triggers(false) {
        if *trigger == CloseTrigger::LinkClick {
            state.close(*trigger);
        }
    }
    assert!(!state.is_open());
    assert_eq!(state.body_overflow(), "");
}
