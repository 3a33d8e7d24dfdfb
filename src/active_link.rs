//! Current-page highlighting for the primary and mobile nav links.
//!
//! Runs once at load; there is no client-side routing to follow.

#[cfg(test)]
#[path = "active_link_test.rs"]
mod active_link_test;

use web_sys::Window;

use crate::config::ActiveLinkConfig;
use crate::dom;
use crate::error::{Result, UiError};

/// Final segment of `pathname`, or `home` when that segment is empty.
#[must_use]
pub fn current_page<'a>(pathname: &'a str, home: &'a str) -> &'a str {
    match pathname.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => home,
    }
}

/// Exact `href` match, with an empty page standing in for `home`.
#[must_use]
pub fn is_active(href: &str, page: &str, home: &str) -> bool {
    href == page || (page.is_empty() && href == home)
}

/// Mark every nav link pointing at the current page.
///
/// # Errors
///
/// Returns [`UiError::NoDocument`] or [`UiError::Js`] if the location is unreadable.
pub fn attach(window: &Window, config: &ActiveLinkConfig) -> Result<()> {
    let document = window.document().ok_or(UiError::NoDocument)?;
    let pathname = window.location().pathname()?;
    let page = current_page(&pathname, &config.home_page);

    let mut marked = 0usize;
    for link in dom::query_all(&document, &config.link_selector) {
        let Some(href) = link.get_attribute("href") else {
            continue;
        };
        if is_active(&href, page, &config.home_page) {
            dom::set_class(&link, &config.active_class, true);
            marked += 1;
        }
    }
    log::debug!("active_link: {page} matched {marked} links");
    Ok(())
}
