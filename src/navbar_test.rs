use super::*;

// =============================================================
// is_scrolled
// =============================================================

#[test]
fn top_of_page_is_not_scrolled() {
    assert!(!is_scrolled(0.0, 20.0));
}

#[test]
fn exactly_at_threshold_is_not_scrolled() {
    assert!(!is_scrolled(20.0, 20.0));
}

#[test]
fn one_past_threshold_is_scrolled() {
    assert!(is_scrolled(21.0, 20.0));
}

#[test]
fn fractional_offset_just_past_threshold_is_scrolled() {
    assert!(is_scrolled(20.5, 20.0));
}

#[test]
fn negative_overscroll_is_not_scrolled() {
    assert!(!is_scrolled(-30.0, 20.0));
}

// =============================================================
// FrameGate
// =============================================================

#[test]
fn gate_starts_idle() {
    assert!(!FrameGate::default().is_pending());
}

#[test]
fn first_schedule_claims_frame() {
    let mut gate = FrameGate::default();
    assert!(gate.try_schedule());
    assert!(gate.is_pending());
}

#[test]
fn burst_of_scrolls_schedules_once() {
    let mut gate = FrameGate::default();
    let scheduled = (0..10).filter(|_| gate.try_schedule()).count();
    assert_eq!(scheduled, 1);
}

#[test]
fn finish_allows_next_frame() {
    let mut gate = FrameGate::default();
    assert!(gate.try_schedule());
    gate.finish();
    assert!(!gate.is_pending());
    assert!(gate.try_schedule());
}

#[test]
fn one_update_per_frame_across_frames() {
    let mut gate = FrameGate::default();
    let mut updates = 0;
    for _frame in 0..3 {
        for _event in 0..5 {
            if gate.try_schedule() {
                updates += 1;
            }
        }
        gate.finish();
    }
    assert_eq!(updates, 3);
}
