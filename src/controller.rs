//! Page-level initialization of every behavior.
//!
//! The theme is applied synchronously as soon as the module starts so the
//! first paint already has the right colors. Everything else needs the
//! parsed body and is attached on `DOMContentLoaded` (or immediately, when
//! the module loads after parsing finished). Each controller is attached
//! independently: one failing is logged and does not stop the rest.

use web_sys::{Document, Window};

use crate::config::UiConfig;
use crate::error::{Result, UiError};
use crate::theme::{self, ThemeBinding};
use crate::{active_link, dom, menu, navbar, reveal, smooth_scroll};

pub struct UiController {
    window: Window,
    document: Document,
    config: UiConfig,
}

impl UiController {
    /// # Errors
    ///
    /// Returns [`UiError::NoWindow`] or [`UiError::NoDocument`] outside a page.
    pub fn new(config: UiConfig) -> Result<Self> {
        let window = dom::window()?;
        let document = window.document().ok_or(UiError::NoDocument)?;
        Ok(Self { window, document, config })
    }

    /// Apply the theme now and schedule the remaining controllers.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Js`] if the theme cannot be applied or the ready
    /// listener cannot be registered.
    pub fn start(self) -> Result<()> {
        let mut binding = ThemeBinding::new(&self.window, &self.config.theme)?;
        let theme = binding.apply_preferred()?;
        log::debug!("theme: applied {} before first paint", theme.as_str());

        if self.document.ready_state() == "loading" {
            let document = self.document.clone();
            let mut pending = Some((self, binding));
            dom::listen(&document, "DOMContentLoaded", move |_| {
                if let Some((controller, binding)) = pending.take() {
                    controller.attach_all(binding);
                }
            })
        } else {
            self.attach_all(binding);
            Ok(())
        }
    }

    fn attach_all(&self, binding: ThemeBinding) {
        let window = &self.window;
        let config = &self.config;
        report("theme", theme::attach_toggle(window, &config.theme, binding));
        report("navbar", navbar::attach(window, &config.navbar));
        report("menu", menu::attach(window, &config.menu));
        report("reveal", reveal::attach(window, &config.reveal));
        report("active_link", active_link::attach(window, &config.active_link));
        report("smooth_scroll", smooth_scroll::attach(window, &config.smooth_scroll));
        log::info!("ui behaviors attached");
    }
}

fn report(name: &str, result: Result<()>) {
    if let Err(err) = result {
        log::warn!("{name}: not attached: {err}");
    }
}
