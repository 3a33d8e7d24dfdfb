//! Thin helpers over `web-sys` used by every controller binding.
//!
//! Lookups return `Option` because a missing element only disables the
//! behavior that needs it. Class mutations cannot meaningfully fail on a
//! live element, so their errors are logged rather than propagated.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, NodeList, Window};

use crate::error::{Result, UiError};

/// The global `window`.
///
/// # Errors
///
/// Returns [`UiError::NoWindow`] outside a browser main thread.
pub fn window() -> Result<Window> {
    web_sys::window().ok_or(UiError::NoWindow)
}

/// The window's document.
///
/// # Errors
///
/// Returns [`UiError::NoWindow`] or [`UiError::NoDocument`].
pub fn document() -> Result<Document> {
    window()?.document().ok_or(UiError::NoDocument)
}

/// All elements matching `selector`, in document order.
///
/// An invalid selector yields an empty list.
#[must_use]
pub fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(nodes) => elements(&nodes),
        Err(_) => {
            log::debug!("invalid selector {selector:?}");
            Vec::new()
        }
    }
}

/// Elements matching `selector` below `root`.
#[must_use]
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(nodes) => elements(&nodes),
        Err(_) => {
            log::debug!("invalid selector {selector:?}");
            Vec::new()
        }
    }
}

fn elements(nodes: &NodeList) -> Vec<Element> {
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .flat_map(|node| node.dyn_into::<Element>())
        .collect()
}

/// First element matching `selector`, treating invalid selectors as no match.
#[must_use]
pub fn query_one(root: &Document, selector: &str) -> Option<Element> {
    match root.query_selector(selector) {
        Ok(found) => found,
        Err(_) => {
            log::debug!("invalid selector {selector:?}");
            None
        }
    }
}

/// Add or remove `class` on `el`.
pub fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let result = if on { list.add_1(class) } else { list.remove_1(class) };
    if let Err(err) = result {
        log::warn!("class {class:?} update failed: {err:?}");
    }
}

/// Whether `query` currently matches via `matchMedia`. Unsupported queries count as no match.
#[must_use]
pub fn media_matches(window: &Window, query: &str) -> bool {
    match window.match_media(query) {
        Ok(Some(list)) => list.matches(),
        _ => false,
    }
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
///
/// # Errors
///
/// Returns [`UiError::Js`] if the browser rejects the listener.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Like [`listen`], but registers a passive listener (cannot cancel the event).
///
/// # Errors
///
/// Returns [`UiError::Js`] if the browser rejects the listener.
pub fn listen_passive<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &options,
    )?;
    cb.forget();
    Ok(())
}
