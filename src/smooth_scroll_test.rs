#![allow(clippy::float_cmp)]

use super::*;

const NAVBAR: f64 = 80.0;

// =============================================================
// fragment_selector
// =============================================================

#[test]
fn hash_href_is_a_selector() {
    assert_eq!(fragment_selector("#pricing"), Some("#pricing"));
}

#[test]
fn bare_hash_is_not_a_selector() {
    assert_eq!(fragment_selector("#"), None);
}

#[test]
fn page_href_is_not_a_selector() {
    assert_eq!(fragment_selector("about.html#team"), None);
    assert_eq!(fragment_selector(""), None);
}

// =============================================================
// scroll_top
// =============================================================

#[test]
fn subtracts_navbar_height() {
    assert_eq!(scroll_top(500.0, 0.0, NAVBAR), 420.0);
}

#[test]
fn accounts_for_current_scroll() {
    assert_eq!(scroll_top(-200.0, 1000.0, NAVBAR), 720.0);
}

// =============================================================
// resolve_click
// =============================================================

#[test]
fn existing_target_scrolls_to_offset_position() {
    let outcome = resolve_click(Some("#features"), |_| Some(640.0), 100.0, NAVBAR);
    assert_eq!(outcome, ClickOutcome::ScrollTo { top: 660.0 });
}

#[test]
fn lookup_receives_href_as_selector() {
    let mut seen = None;
    let outcome = resolve_click(
        Some("#contact"),
        |selector| {
            seen = Some(selector.to_string());
            None
        },
        0.0,
        NAVBAR,
    );
    assert_eq!(outcome, ClickOutcome::Default);
    assert_eq!(seen.as_deref(), Some("#contact"));
}

#[test]
fn missing_target_keeps_default() {
    let outcome = resolve_click(Some("#nowhere"), |_| None, 0.0, NAVBAR);
    assert_eq!(outcome, ClickOutcome::Default);
}

#[test]
fn missing_href_keeps_default() {
    let outcome = resolve_click(None, |_| Some(10.0), 0.0, NAVBAR);
    assert_eq!(outcome, ClickOutcome::Default);
}

#[test]
fn bare_hash_keeps_default_without_lookup() {
    let outcome = resolve_click(Some("#"), |_| panic!("lookup should not run"), 0.0, NAVBAR);
    assert_eq!(outcome, ClickOutcome::Default);
}
