//! Default DOM contract and tuning constants.
//!
//! These are the values the marketing pages are authored against. Every one
//! of them can be overridden through [`crate::config::UiConfig`].

// ── Theme ───────────────────────────────────────────────────────

/// Local storage key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "botify-theme";

/// Attribute set on `<html>` with the applied theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Id of the theme toggle control.
pub const THEME_TOGGLE_ID: &str = "themeToggle";

/// Media query that selects the light theme when no preference is stored.
pub const PREFERS_LIGHT_QUERY: &str = "(prefers-color-scheme: light)";

// ── Navbar ──────────────────────────────────────────────────────

pub const NAVBAR_SELECTOR: &str = ".navbar";

pub const SCROLLED_CLASS: &str = "scrolled";

/// Scroll offset in CSS pixels past which the navbar counts as scrolled.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

// ── Mobile menu ─────────────────────────────────────────────────

pub const HAMBURGER_ID: &str = "hamburger";

pub const MOBILE_MENU_ID: &str = "mobileMenu";

pub const OPEN_CLASS: &str = "open";

// ── Reveal ──────────────────────────────────────────────────────

pub const REVEAL_SELECTORS: [&str; 4] = [".reveal", ".reveal-left", ".reveal-right", ".reveal-scale"];

pub const REVEALED_CLASS: &str = "revealed";

/// Fraction of an element that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.12;

/// Shrinks the bottom of the viewport so elements reveal slightly late.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -40px 0px";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Property on `window` holding the live reveal observer.
pub const REVEAL_OBSERVER_HANDLE: &str = "_revealObserver";

// ── Active link ─────────────────────────────────────────────────

pub const NAV_LINK_SELECTOR: &str = ".nav-link, .mobile-menu a";

pub const ACTIVE_CLASS: &str = "active";

/// Page assumed when the URL path ends in `/`.
pub const HOME_PAGE: &str = "index.html";

// ── Smooth scroll ───────────────────────────────────────────────

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Height of the fixed navbar, subtracted from anchor scroll targets.
pub const NAVBAR_OFFSET_PX: f64 = 80.0;

// ── Config ──────────────────────────────────────────────────────

/// Id of the optional `<script type="application/json">` config block.
pub const CONFIG_ELEMENT_ID: &str = "botify-ui-config";
