//! Mobile hamburger menu.
//!
//! DESIGN
//! ======
//! [`MenuState`] is the single source of truth. Every DOM event is turned
//! into either a toggle or a [`CloseTrigger`], the state is updated, and the
//! binding re-renders both `open` class flags and the body scroll lock from
//! it. The three close paths therefore cannot leave the page half-closed.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, Node, Window};

use crate::config::MenuConfig;
use crate::dom;
use crate::error::{Result, UiError};

/// What caused the menu to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    /// A link inside the panel was followed.
    LinkClick,
    /// A click landed outside the navbar.
    OutsideClick,
    /// The hamburger was clicked while open.
    Hamburger,
}

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
    closed_by: Option<CloseTrigger>,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Inline `overflow` for `<body>`: scrolling is locked exactly while open.
    #[must_use]
    pub fn body_overflow(self) -> &'static str {
        if self.open { "hidden" } else { "" }
    }

    /// Hamburger click: open when closed, close when open. Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        if self.open {
            self.close(CloseTrigger::Hamburger);
        } else {
            self.open = true;
            self.closed_by = None;
        }
        self.open
    }

    /// Close from any trigger. Returns `true` if the menu was open.
    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        let was_open = self.open;
        self.open = false;
        if was_open {
            self.closed_by = Some(trigger);
        }
        was_open
    }

    /// The trigger of the most recent close, cleared on reopen.
    #[must_use]
    pub fn closed_by(self) -> Option<CloseTrigger> {
        self.closed_by
    }
}

/// Close triggers wired for a page. Without a navbar region there is no
/// "outside", so only the hamburger and panel links can close the menu.
#[must_use]
pub fn close_triggers(has_navbar: bool) -> &'static [CloseTrigger] {
    if has_navbar {
        &[CloseTrigger::Hamburger, CloseTrigger::LinkClick, CloseTrigger::OutsideClick]
    } else {
        &[CloseTrigger::Hamburger, CloseTrigger::LinkClick]
    }
}

// =============================================================
// Browser binding
// =============================================================

struct MenuBinding {
    hamburger: Element,
    panel: Element,
    body: Option<HtmlElement>,
    open_class: String,
    state: RefCell<MenuState>,
}

impl MenuBinding {
    fn toggle(&self) {
        self.state.borrow_mut().toggle();
        self.log_transition();
        self.render();
    }

    fn close(&self, trigger: CloseTrigger) {
        if self.state.borrow_mut().close(trigger) {
            self.log_transition();
        }
        self.render();
    }

    fn log_transition(&self) {
        let state = *self.state.borrow();
        match state.closed_by() {
            Some(trigger) if !state.is_open() => log::debug!("menu: closed by {trigger:?}"),
            _ => log::debug!("menu: opened"),
        }
    }

    fn render(&self) {
        let state = *self.state.borrow();
        dom::set_class(&self.hamburger, &self.open_class, state.is_open());
        dom::set_class(&self.panel, &self.open_class, state.is_open());
        if let Some(body) = &self.body {
            if let Err(err) = body.style().set_property("overflow", state.body_overflow()) {
                log::warn!("menu: scroll lock update failed: {err:?}");
            }
        }
    }
}

fn event_node(event: &Event) -> Option<Node> {
    match event.target()?.dyn_into::<Node>() {
        Ok(node) => Some(node),
        Err(_) => None,
    }
}

/// Wire the hamburger, panel links, and outside-click close.
///
/// Missing hamburger or panel disables the menu; a missing navbar only
/// disables outside-click closing.
///
/// # Errors
///
/// Returns [`UiError::NoDocument`] or [`UiError::Js`] if a listener is rejected.
pub fn attach(window: &Window, config: &MenuConfig) -> Result<()> {
    let document = window.document().ok_or(UiError::NoDocument)?;
    let (Some(hamburger), Some(panel)) = (
        document.get_element_by_id(&config.hamburger_id),
        document.get_element_by_id(&config.panel_id),
    ) else {
        log::debug!("menu: #{} or #{} missing", config.hamburger_id, config.panel_id);
        return Ok(());
    };
    let navbar = dom::query_one(&document, &config.navbar_selector);

    let binding = Rc::new(MenuBinding {
        hamburger: hamburger.clone(),
        panel: panel.clone(),
        body: document.body(),
        open_class: config.open_class.clone(),
        state: RefCell::new(MenuState::default()),
    });

    for trigger in close_triggers(navbar.is_some()) {
        match trigger {
            CloseTrigger::Hamburger => {
                let on_hamburger = Rc::clone(&binding);
                dom::listen(&hamburger, "click", move |_| on_hamburger.toggle())?;
            }
            CloseTrigger::LinkClick => {
                for link in dom::query_all_in(&panel, "a") {
                    let on_link = Rc::clone(&binding);
                    dom::listen(&link, "click", move |_| on_link.close(CloseTrigger::LinkClick))?;
                }
            }
            CloseTrigger::OutsideClick => {
                let Some(navbar) = navbar.clone() else {
                    continue;
                };
                let on_outside = Rc::clone(&binding);
                dom::listen(&document, "click", move |event: Event| {
                    let inside = event_node(&event).is_some_and(|node| navbar.contains(Some(&node)));
                    if !inside {
                        on_outside.close(CloseTrigger::OutsideClick);
                    }
                })?;
            }
        }
    }
    if navbar.is_none() {
        log::debug!("menu: no {} region, outside-click close disabled", config.navbar_selector);
    }

    Ok(())
}
