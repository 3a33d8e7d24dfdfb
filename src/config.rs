//! Runtime configuration.
//!
//! DESIGN
//! ======
//! One section per controller, each handed to exactly one controller at
//! attach time. Every field is defaulted from [`crate::consts`], so a page
//! may embed a partial JSON block overriding only what it changes:
//!
//! ```html
//! <script type="application/json" id="botify-ui-config">
//!   { "navbar": { "threshold_px": 48 }, "log_level": "debug" }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::Deserialize;
use web_sys::Document;

use crate::consts;
use crate::error::{Result, UiError};

/// Full configuration for every controller.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: ThemeConfig,
    pub navbar: NavbarConfig,
    pub menu: MenuConfig,
    pub reveal: RevealConfig,
    pub active_link: ActiveLinkConfig,
    pub smooth_scroll: SmoothScrollConfig,
    /// `log` level name (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: Option<String>,
}

impl UiConfig {
    /// Parse a (possibly partial) JSON config block.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::UiError::Config`] on malformed JSON or a
    /// field of the wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve a config from the raw block text, if the page has one.
    ///
    /// A missing block yields the defaults. A malformed block also yields
    /// the defaults, alongside the parse error for the caller to report.
    #[must_use]
    pub fn from_block(block: Option<&str>) -> (Self, Option<UiError>) {
        match block.map(Self::from_json) {
            Some(Ok(config)) => (config, None),
            Some(Err(err)) => (Self::default(), Some(err)),
            None => (Self::default(), None),
        }
    }

    /// Read the page's embedded config block. See [`Self::from_block`].
    #[must_use]
    pub fn from_document(document: &Document) -> (Self, Option<UiError>) {
        let block = document
            .get_element_by_id(consts::CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());
        Self::from_block(block.as_deref())
    }

    /// Configured log level, falling back to `Info` for absent or unknown names.
    #[must_use]
    pub fn level(&self) -> log::Level {
        match self.log_level.as_deref().map(log::Level::from_str) {
            Some(Ok(level)) => level,
            _ => log::Level::Info,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub attribute: String,
    pub toggle_id: String,
    pub prefers_light_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: consts::THEME_STORAGE_KEY.into(),
            attribute: consts::THEME_ATTRIBUTE.into(),
            toggle_id: consts::THEME_TOGGLE_ID.into(),
            prefers_light_query: consts::PREFERS_LIGHT_QUERY.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub selector: String,
    pub scrolled_class: String,
    pub threshold_px: f64,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            selector: consts::NAVBAR_SELECTOR.into(),
            scrolled_class: consts::SCROLLED_CLASS.into(),
            threshold_px: consts::SCROLL_THRESHOLD_PX,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub hamburger_id: String,
    pub panel_id: String,
    pub open_class: String,
    /// Region outside of which a click closes the menu.
    pub navbar_selector: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            hamburger_id: consts::HAMBURGER_ID.into(),
            panel_id: consts::MOBILE_MENU_ID.into(),
            open_class: consts::OPEN_CLASS.into(),
            navbar_selector: consts::NAVBAR_SELECTOR.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selectors: Vec<String>,
    pub revealed_class: String,
    pub threshold: f64,
    pub root_margin: String,
    pub reduced_motion_query: String,
    pub global_handle: String,
}

impl RevealConfig {
    /// Comma-joined selector list for `querySelectorAll`.
    #[must_use]
    pub fn selector_list(&self) -> String {
        self.selectors.join(", ")
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selectors: consts::REVEAL_SELECTORS.iter().map(|s| (*s).to_string()).collect(),
            revealed_class: consts::REVEALED_CLASS.into(),
            threshold: consts::REVEAL_THRESHOLD,
            root_margin: consts::REVEAL_ROOT_MARGIN.into(),
            reduced_motion_query: consts::REDUCED_MOTION_QUERY.into(),
            global_handle: consts::REVEAL_OBSERVER_HANDLE.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ActiveLinkConfig {
    pub link_selector: String,
    pub active_class: String,
    pub home_page: String,
}

impl Default for ActiveLinkConfig {
    fn default() -> Self {
        Self {
            link_selector: consts::NAV_LINK_SELECTOR.into(),
            active_class: consts::ACTIVE_CLASS.into(),
            home_page: consts::HOME_PAGE.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SmoothScrollConfig {
    pub anchor_selector: String,
    pub offset_px: f64,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            anchor_selector: consts::ANCHOR_SELECTOR.into(),
            offset_px: consts::NAVBAR_OFFSET_PX,
        }
    }
}
