//! Light/dark theme resolution, application, and persistence.
//!
//! The preference lives in `localStorage` as the literal `"light"` or
//! `"dark"`. On load the stored value wins; otherwise the OS color-scheme
//! preference decides, falling back to dark. Applying a theme writes the
//! `data-theme` attribute on `<html>` and persists the value.
//!
//! [`ThemeManager`] holds the decisions and talks to storage through
//! [`PreferenceStore`]; [`ThemeBinding`] applies them to the document.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use web_sys::{Element, Storage, Window};

use crate::config::ThemeConfig;
use crate::dom;
use crate::error::{Result, UiError};

/// The two supported color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// The persisted / attribute form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value. Anything but the exact lowercase names is rejected.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The theme a toggle switches to, given the current attribute value.
    ///
    /// Only an explicit `"dark"` flips to light; a missing or unknown value
    /// flips to dark.
    #[must_use]
    pub fn toggled_from(current: Option<&str>) -> Self {
        match current {
            Some("dark") => Self::Light,
            _ => Self::Dark,
        }
    }
}

/// Pick the theme to apply at load.
///
/// `stored` is the raw persisted value, if any; `os_prefers_light` is the
/// result of the `prefers-color-scheme: light` media query.
#[must_use]
pub fn resolve(stored: Option<&str>, os_prefers_light: bool) -> Theme {
    if let Some(theme) = stored.and_then(Theme::parse) {
        return theme;
    }
    if os_prefers_light { Theme::Light } else { Theme::default() }
}

// =============================================================
// Storage seam
// =============================================================

/// Key-value storage for the theme preference.
///
/// Implementations swallow their own failures: an unreadable store reads as
/// empty and a failed write is dropped.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// `window.localStorage`, or nothing when storage is disabled.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    #[must_use]
    pub fn new(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::debug!("localStorage unavailable: {err:?}");
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("localStorage read of {key:?} failed: {err:?}");
                None
            }
        }
    }

    fn save(&self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::debug!("localStorage write of {key:?} failed: {err:?}");
        }
    }
}

// =============================================================
// Manager
// =============================================================

/// Theme decisions and persistence, independent of the DOM.
///
/// The document attribute is the source of truth for what is shown; the
/// manager only decides and persists.
pub struct ThemeManager<S: PreferenceStore> {
    store: S,
    key: String,
}

impl<S: PreferenceStore> ThemeManager<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// Stored preference if valid, else the OS preference, else dark.
    #[must_use]
    pub fn resolve_preference(&self, os_prefers_light: bool) -> Theme {
        resolve(self.store.load(&self.key).as_deref(), os_prefers_light)
    }

    /// Persist `theme` and hand it back for the caller to show.
    pub fn apply(&mut self, theme: Theme) -> Theme {
        self.store.save(&self.key, theme.as_str());
        theme
    }

    /// Persist and return the inverse of `current`, the attribute value now shown.
    pub fn toggle_from(&mut self, current: Option<&str>) -> Theme {
        self.apply(Theme::toggled_from(current))
    }
}

// =============================================================
// Browser binding
// =============================================================

/// Applies themes to `<html>` and persists them to `localStorage`.
pub struct ThemeBinding {
    root: Element,
    attribute: String,
    prefers_light: bool,
    manager: ThemeManager<LocalStore>,
}

impl ThemeBinding {
    /// Bind to the current document.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::NoDocument`] if the document has no root element.
    pub fn new(window: &Window, config: &ThemeConfig) -> Result<Self> {
        let root = window
            .document()
            .and_then(|doc| doc.document_element())
            .ok_or(UiError::NoDocument)?;
        Ok(Self {
            root,
            attribute: config.attribute.clone(),
            prefers_light: dom::media_matches(window, &config.prefers_light_query),
            manager: ThemeManager::new(LocalStore::new(window), config.storage_key.as_str()),
        })
    }

    /// Resolve the preference and apply it. Runs before the body is parsed.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Js`] if the attribute cannot be set.
    pub fn apply_preferred(&mut self) -> Result<Theme> {
        let theme = self.manager.resolve_preference(self.prefers_light);
        self.apply(theme)
    }

    /// Set the document attribute and persist `theme`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Js`] if the attribute cannot be set.
    pub fn apply(&mut self, theme: Theme) -> Result<Theme> {
        self.show(theme)?;
        Ok(self.manager.apply(theme))
    }

    fn show(&self, theme: Theme) -> Result<Theme> {
        self.root.set_attribute(&self.attribute, theme.as_str())?;
        Ok(theme)
    }

    /// Invert whatever the document currently shows.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Js`] if the attribute cannot be set.
    pub fn toggle(&mut self) -> Result<Theme> {
        let current = self.current_attribute();
        let next = self.manager.toggle_from(current.as_deref());
        self.show(next)
    }

    /// The theme currently shown by the document, if the attribute is valid.
    #[must_use]
    pub fn current(&self) -> Option<Theme> {
        self.current_attribute().as_deref().and_then(Theme::parse)
    }

    fn current_attribute(&self) -> Option<String> {
        self.root.get_attribute(&self.attribute)
    }
}

/// Wire the toggle control to `binding`. Missing control is a no-op.
///
/// # Errors
///
/// Returns [`UiError::Js`] if the listener cannot be registered.
pub fn attach_toggle(window: &Window, config: &ThemeConfig, mut binding: ThemeBinding) -> Result<()> {
    let document = window.document().ok_or(UiError::NoDocument)?;
    let Some(toggle) = document.get_element_by_id(&config.toggle_id) else {
        log::debug!("theme: no #{} control, toggle disabled", config.toggle_id);
        return Ok(());
    };
    dom::listen(&toggle, "click", move |_| match binding.toggle() {
        Ok(theme) => log::debug!("theme: switched to {}", theme.as_str()),
        Err(err) => log::warn!("theme: toggle failed: {err}"),
    })
}
