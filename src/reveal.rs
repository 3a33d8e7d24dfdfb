//! Scroll-triggered reveal animations.
//!
//! Candidates start pending and gain the `revealed` class the first time
//! they intersect the (bottom-inset) viewport, after which they are
//! unobserved. The transition is one-way. With reduced motion requested,
//! everything is revealed up front and no observer is created.
//!
//! The observer is published on `window` (see
//! [`crate::consts::REVEAL_OBSERVER_HANDLE`]) so sections loaded later can
//! register their own elements; [`register`] is the Rust-side entry for that.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use js_sys::{Array, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::config::RevealConfig;
use crate::dom;
use crate::error::{Result, UiError};

/// Where a candidate element is in its one-way lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Pending,
    Revealed,
}

impl Phase {
    /// Next phase after an intersection report. Never leaves `Revealed`.
    #[must_use]
    pub fn advance(self, is_intersecting: bool) -> Self {
        match self {
            Self::Revealed => Self::Revealed,
            Self::Pending if is_intersecting => Self::Revealed,
            Self::Pending => Self::Pending,
        }
    }
}

/// How the controller handles the candidate set at load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    /// Reveal every candidate immediately; no observer.
    RevealAll,
    /// Observe candidates and reveal on first intersection.
    Observe,
}

impl Plan {
    /// Whether candidates are handed to the intersection observer.
    #[must_use]
    pub fn observes(self) -> bool {
        self == Self::Observe
    }

    /// Phase a candidate is in right after the plan is carried out.
    #[must_use]
    pub fn initial_phase(self) -> Phase {
        match self {
            Self::RevealAll => Phase::Revealed,
            Self::Observe => Phase::Pending,
        }
    }
}

/// Plan for the candidates present at load.
#[must_use]
pub fn plan(reduced_motion: bool) -> Plan {
    if reduced_motion { Plan::RevealAll } else { Plan::Observe }
}

/// Plan for an element registered after load: observe it only if a live
/// observer was published, otherwise reveal it on the spot.
#[must_use]
pub fn register_plan(has_observer: bool) -> Plan {
    if has_observer { Plan::Observe } else { Plan::RevealAll }
}

/// Apply one intersection report to `phase`.
///
/// Returns the new phase and whether the element should stop being observed.
#[must_use]
pub fn on_intersection(phase: Phase, is_intersecting: bool) -> (Phase, bool) {
    let next = phase.advance(is_intersecting);
    (next, next == Phase::Revealed)
}

// =============================================================
// Browser binding
// =============================================================

fn phase_of(el: &Element, revealed_class: &str) -> Phase {
    if el.class_list().contains(revealed_class) { Phase::Revealed } else { Phase::Pending }
}

fn new_observer(config: &RevealConfig) -> Result<IntersectionObserver> {
    let revealed_class = config.revealed_class.clone();
    let cb = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let (next, done) = on_intersection(phase_of(&target, &revealed_class), entry.is_intersecting());
            if next == Phase::Revealed {
                dom::set_class(&target, &revealed_class, true);
            }
            if done {
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin);
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options)?;
    cb.forget();
    Ok(observer)
}

/// Reveal or observe every candidate on the page.
///
/// # Errors
///
/// Returns [`UiError::NoDocument`], or [`UiError::Js`] if the observer
/// cannot be created or published.
pub fn attach(window: &Window, config: &RevealConfig) -> Result<()> {
    let document = window.document().ok_or(UiError::NoDocument)?;
    let candidates = dom::query_all(&document, &config.selector_list());
    let reduced_motion = dom::media_matches(window, &config.reduced_motion_query);

    let plan = plan(reduced_motion);
    if plan.observes() {
        let observer = new_observer(config)?;
        Reflect::set(window, &JsValue::from_str(&config.global_handle), &observer)?;
        for el in &candidates {
            observer.observe(el);
        }
        log::debug!("reveal: observing {} elements", candidates.len());
    } else {
        log::debug!("reveal: reduced motion, revealing {} elements", candidates.len());
    }
    if plan.initial_phase() == Phase::Revealed {
        for el in &candidates {
            dom::set_class(el, &config.revealed_class, true);
        }
    }
    Ok(())
}

/// Register an element inserted after load.
///
/// Uses the published observer when there is one; otherwise (reduced motion,
/// or the controller never ran) the element is revealed immediately.
///
/// # Errors
///
/// Returns [`UiError::Js`] if the handle cannot be read from `window`.
pub fn register(window: &Window, config: &RevealConfig, el: &Element) -> Result<()> {
    let handle = Reflect::get(window, &JsValue::from_str(&config.global_handle))?;
    let observer = match handle.dyn_into::<IntersectionObserver>() {
        Ok(observer) => Some(observer),
        Err(_) => None,
    };
    match (register_plan(observer.is_some()), observer) {
        (Plan::Observe, Some(observer)) => observer.observe(el),
        _ => dom::set_class(el, &config.revealed_class, true),
    }
    Ok(())
}
