//! Browser behaviors for the Botify marketing site.
//!
//! This crate is compiled to WebAssembly and loaded by every page. It owns
//! the small set of cosmetic behaviors the pages share: theme persistence,
//! the navbar scroll shadow, the mobile menu, scroll reveals, active nav
//! links, and smooth anchor scrolling. Each behavior keeps its decisions in
//! plain Rust (tested natively) and a thin `web-sys` binding that applies
//! them to the DOM.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Start-up sequencing and per-controller error isolation |
//! | [`theme`] | Light/dark preference resolution, toggle, persistence |
//! | [`navbar`] | Scroll-shadow class, one update per animation frame |
//! | [`menu`] | Hamburger menu state and body scroll lock |
//! | [`reveal`] | Fire-once intersection reveals, reduced-motion bypass |
//! | [`active_link`] | Current-page nav link highlighting |
//! | [`smooth_scroll`] | Same-page anchor scrolling with navbar offset |
//! | [`config`] | Page-overridable selectors, classes, and thresholds |
//! | [`consts`] | Default DOM contract |
//! | [`dom`] | `web-sys` lookup, class, and listener helpers |
//! | [`error`] | [`error::UiError`] |

pub mod active_link;
pub mod config;
pub mod consts;
pub mod controller;
pub mod dom;
pub mod error;
pub mod menu;
pub mod navbar;
pub mod reveal;
pub mod smooth_scroll;
pub mod theme;

use std::cell::OnceCell;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::UiConfig;
use crate::controller::UiController;
use crate::error::UiError;
use crate::theme::ThemeBinding;

thread_local! {
    /// Config resolved once for the page; shared by `start` and every export.
    static PAGE_CONFIG: OnceCell<UiConfig> = const { OnceCell::new() };
}

fn load_config() -> (UiConfig, Option<UiError>) {
    match dom::document() {
        Ok(document) => UiConfig::from_document(&document),
        Err(err) => (UiConfig::default(), Some(err)),
    }
}

/// The page config, resolving it with the defaults fallback on first use.
fn page_config() -> UiConfig {
    PAGE_CONFIG.with(|cell| cell.get_or_init(|| load_config().0).clone())
}

/// Module entry point, run by the generated JS glue on load.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let (config, config_err) = load_config();
    if console_log::init_with_level(config.level()).is_err() {
        log::debug!("logger already initialized");
    }
    if let Some(err) = config_err {
        log::warn!("using default config: {err}");
    }
    let config = PAGE_CONFIG.with(|cell| cell.get_or_init(|| config).clone());

    if let Err(err) = UiController::new(config).and_then(UiController::start) {
        log::error!("ui start failed: {err}");
    }
}

/// Register an element added after load for a reveal animation.
///
/// # Errors
///
/// Throws if the page has no window.
#[wasm_bindgen(js_name = reveal)]
pub fn reveal_element(element: &Element) -> Result<(), JsValue> {
    let config = page_config();
    reveal::register(&dom::window()?, &config.reveal, element)?;
    Ok(())
}

/// Flip the theme, returning the new value (`"light"` or `"dark"`).
///
/// # Errors
///
/// Throws if the page has no window or the attribute cannot be set.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> Result<String, JsValue> {
    let config = page_config();
    let mut binding = ThemeBinding::new(&dom::window()?, &config.theme)?;
    Ok(binding.toggle()?.as_str().to_string())
}

/// The theme currently applied to the document, if any.
#[wasm_bindgen(js_name = currentTheme)]
#[must_use]
pub fn current_theme() -> Option<String> {
    let config = page_config();
    let Ok(window) = dom::window() else {
        return None;
    };
    let Ok(binding) = ThemeBinding::new(&window, &config.theme) else {
        return None;
    };
    binding.current().map(|theme| theme.as_str().to_string())
}
