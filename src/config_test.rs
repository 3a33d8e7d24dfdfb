#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_matches_page_contract() {
    let config = UiConfig::default();
    assert_eq!(config.theme.storage_key, "botify-theme");
    assert_eq!(config.theme.attribute, "data-theme");
    assert_eq!(config.navbar.threshold_px, 20.0);
    assert_eq!(config.menu.open_class, "open");
    assert_eq!(config.smooth_scroll.offset_px, 80.0);
    assert_eq!(config.active_link.home_page, "index.html");
}

#[test]
fn default_reveal_selector_list_joins_all_variants() {
    let config = RevealConfig::default();
    assert_eq!(config.selector_list(), ".reveal, .reveal-left, .reveal-right, .reveal-scale");
    assert_eq!(config.threshold, 0.12);
    assert_eq!(config.root_margin, "0px 0px -40px 0px");
}

// =============================================================
// from_json
// =============================================================

#[test]
fn empty_object_yields_defaults() {
    let config = UiConfig::from_json("{}").unwrap();
    assert_eq!(config.navbar.selector, ".navbar");
    assert_eq!(config.reveal.selectors.len(), 4);
}

#[test]
fn partial_section_keeps_sibling_defaults() {
    let config = UiConfig::from_json(r#"{ "navbar": { "threshold_px": 48 } }"#).unwrap();
    assert_eq!(config.navbar.threshold_px, 48.0);
    assert_eq!(config.navbar.scrolled_class, "scrolled");
    assert_eq!(config.menu.hamburger_id, "hamburger");
}

#[test]
fn malformed_json_is_config_error() {
    let err = UiConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, crate::error::UiError::Config(_)));
}

#[test]
fn wrong_field_type_is_config_error() {
    let err = UiConfig::from_json(r#"{ "smooth_scroll": { "offset_px": "eighty" } }"#).unwrap_err();
    assert!(matches!(err, crate::error::UiError::Config(_)));
}

// =============================================================
// from_block
// =============================================================

#[test]
fn missing_block_uses_defaults() {
    let (config, err) = UiConfig::from_block(None);
    assert!(err.is_none());
    assert_eq!(config.navbar.selector, ".navbar");
}

#[test]
fn valid_block_overrides_defaults() {
    let (config, err) = UiConfig::from_block(Some(r#"{ "theme": { "storage_key": "site-theme" } }"#));
    assert!(err.is_none());
    assert_eq!(config.theme.storage_key, "site-theme");
}

#[test]
fn malformed_block_falls_back_to_defaults() {
    let (config, err) = UiConfig::from_block(Some("{ not json"));
    assert!(matches!(err, Some(crate::error::UiError::Config(_))));
    assert_eq!(config.theme.storage_key, "botify-theme");
    assert_eq!(config.reveal.global_handle, "_revealObserver");
}

// =============================================================
// level
// =============================================================

#[test]
fn level_defaults_to_info() {
    assert_eq!(UiConfig::default().level(), log::Level::Info);
}

#[test]
fn level_parses_known_name() {
    let config = UiConfig::from_json(r#"{ "log_level": "debug" }"#).unwrap();
    assert_eq!(config.level(), log::Level::Debug);
}

#[test]
fn level_falls_back_on_unknown_name() {
    let config = UiConfig::from_json(r#"{ "log_level": "chatty" }"#).unwrap();
    assert_eq!(config.level(), log::Level::Info);
}
