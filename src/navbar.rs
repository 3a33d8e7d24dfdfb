//! Navbar scroll shadow.
//!
//! Adds the `scrolled` class to `.navbar` once the page is scrolled past a
//! threshold. Scroll events are coalesced so at most one class update is
//! queued per animation frame.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Window};

use crate::config::NavbarConfig;
use crate::dom;
use crate::error::{Result, UiError};

/// Strictly past the threshold counts as scrolled.
#[must_use]
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Single in-flight flag coalescing frame requests.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Claim the next frame. Returns `false` if one is already queued.
    pub fn try_schedule(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Release the gate once the queued frame has run.
    pub fn finish(&mut self) {
        self.pending = false;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

struct ScrollShadow {
    window: Window,
    navbar: Element,
    class: String,
    threshold: f64,
    gate: RefCell<FrameGate>,
}

impl ScrollShadow {
    fn update(&self) {
        let offset = match self.window.scroll_y() {
            Ok(y) => y,
            Err(err) => {
                log::debug!("navbar: scrollY unavailable: {err:?}");
                0.0
            }
        };
        dom::set_class(&self.navbar, &self.class, is_scrolled(offset, self.threshold));
    }
}

fn on_scroll(shadow: &Rc<ScrollShadow>) {
    if !shadow.gate.borrow_mut().try_schedule() {
        return;
    }

    let shadow_for_cb = Rc::clone(shadow);
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        shadow_for_cb.update();
        shadow_for_cb.gate.borrow_mut().finish();
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if shadow
        .window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .is_ok()
    {
        *holder.borrow_mut() = Some(cb);
    } else {
        shadow.update();
        shadow.gate.borrow_mut().finish();
    }
}

/// Attach the scroll listener and set the initial state. Missing navbar is a no-op.
///
/// # Errors
///
/// Returns [`UiError::NoDocument`] or [`UiError::Js`] if the listener is rejected.
pub fn attach(window: &Window, config: &NavbarConfig) -> Result<()> {
    let document = window.document().ok_or(UiError::NoDocument)?;
    let Some(navbar) = dom::query_one(&document, &config.selector) else {
        log::debug!("navbar: no {} element", config.selector);
        return Ok(());
    };

    let shadow = Rc::new(ScrollShadow {
        window: window.clone(),
        navbar,
        class: config.scrolled_class.clone(),
        threshold: config.threshold_px,
        gate: RefCell::new(FrameGate::default()),
    });

    let shadow_for_scroll = Rc::clone(&shadow);
    dom::listen_passive(window, "scroll", move |_| on_scroll(&shadow_for_scroll))?;
    on_scroll(&shadow);
    Ok(())
}
