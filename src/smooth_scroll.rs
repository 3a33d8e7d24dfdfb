//! Smooth scrolling for same-page anchor links.
//!
//! A click on `a[href^="#"]` whose target exists is taken over: the default
//! jump is cancelled and the window scrolls smoothly to the target, leaving
//! room for the fixed navbar. Anything else falls through to the browser.

#[cfg(test)]
#[path = "smooth_scroll_test.rs"]
mod smooth_scroll_test;

use web_sys::{Event, ScrollBehavior, ScrollToOptions, Window};

use crate::config::SmoothScrollConfig;
use crate::dom;
use crate::error::{Result, UiError};

/// What to do with an anchor click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickOutcome {
    /// Let the browser handle the click.
    Default,
    /// Cancel the click and smooth-scroll to `top` (document coordinates).
    ScrollTo { top: f64 },
}

/// The selector an anchor `href` targets, if it names a fragment.
#[must_use]
pub fn fragment_selector(href: &str) -> Option<&str> {
    (href.len() > 1 && href.starts_with('#')).then_some(href)
}

/// Document-space scroll position for a target at `rect_top` in the viewport.
#[must_use]
pub fn scroll_top(rect_top: f64, page_offset: f64, navbar_offset: f64) -> f64 {
    rect_top + page_offset - navbar_offset
}

/// Decide the outcome of a click on an anchor with `href`.
///
/// `target_top` resolves a selector to the target's viewport-relative top,
/// or `None` when no such element exists.
#[must_use]
pub fn resolve_click(
    href: Option<&str>,
    target_top: impl FnOnce(&str) -> Option<f64>,
    page_offset: f64,
    navbar_offset: f64,
) -> ClickOutcome {
    let Some(selector) = href.and_then(fragment_selector) else {
        return ClickOutcome::Default;
    };
    match target_top(selector) {
        Some(rect_top) => ClickOutcome::ScrollTo { top: scroll_top(rect_top, page_offset, navbar_offset) },
        None => ClickOutcome::Default,
    }
}

/// Intercept clicks on every same-page anchor present at load.
///
/// # Errors
///
/// Returns [`UiError::NoDocument`] or [`UiError::Js`] if a listener is rejected.
pub fn attach(window: &Window, config: &SmoothScrollConfig) -> Result<()> {
    let document = window.document().ok_or(UiError::NoDocument)?;
    let anchors = dom::query_all(&document, &config.anchor_selector);
    log::debug!("smooth_scroll: {} anchors", anchors.len());

    for anchor in anchors {
        let window = window.clone();
        let document = document.clone();
        let navbar_offset = config.offset_px;
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |event: Event| {
            let href = link.get_attribute("href");
            let page_offset = match window.page_y_offset() {
                Ok(y) => y,
                Err(err) => {
                    log::debug!("smooth_scroll: pageYOffset unavailable: {err:?}");
                    0.0
                }
            };
            let outcome = resolve_click(
                href.as_deref(),
                |selector| dom::query_one(&document, selector).map(|target| target.get_bounding_client_rect().top()),
                page_offset,
                navbar_offset,
            );
            if let ClickOutcome::ScrollTo { top } = outcome {
                event.prevent_default();
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        })?;
    }
    Ok(())
}
