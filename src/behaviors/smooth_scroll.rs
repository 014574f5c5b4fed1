//! Smooth scrolling for in-page anchor links.
//!
//! A click on `a[href="#id"]` scrolls smoothly to the target, leaving
//! `anchor_offset_px` of room above it for a fixed header, and records the
//! fragment in the address bar through the History API.

#[cfg(test)]
#[path = "smooth_scroll_test.rs"]
mod smooth_scroll_test;

/// The `#fragment` selector for an in-page `href`; `None` for a bare `#`
/// or anything that does not start with `#`.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    let trimmed = href.trim();
    (trimmed.len() > 1 && trimmed.starts_with('#')).then_some(trimmed)
}

/// Scroll position that places a target at `offset_top` just below the
/// header band.
#[must_use]
pub fn scroll_destination(offset_top: f64, offset: f64) -> f64 {
    offset_top - offset
}

#[cfg(feature = "hydrate")]
pub fn attach(
    document: &web_sys::Document,
    config: &crate::config::BehaviorConfig,
) -> Result<usize, crate::error::BehaviorError> {
    use wasm_bindgen::JsValue;
    use web_sys::{ScrollBehavior, ScrollToOptions};

    use crate::consts::ANCHOR_SELECTOR;
    use crate::dom;

    let window = dom::window()?;
    let offset = config.anchor_offset_px;
    let anchors = dom::query_all(document, ANCHOR_SELECTOR)?;
    let wired = anchors.len();

    for anchor in anchors {
        let window = window.clone();
        let document = document.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |event| {
            event.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(selector) = anchor_target(&href) else {
                return;
            };
            let target = match document.query_selector(selector) {
                Ok(Some(target)) => target,
                Ok(None) => return,
                Err(err) => {
                    log::debug!("anchor {selector:?} is not a valid selector: {err:?}");
                    return;
                }
            };

            let options = ScrollToOptions::new();
            options.set_top(scroll_destination(dom::offset_top(&target), offset));
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);

            match window.history() {
                Ok(history) => {
                    if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(selector)) {
                        log::warn!("history update for {selector:?} failed: {err:?}");
                    }
                }
                Err(err) => log::warn!("history unavailable: {err:?}"),
            }
        })?;
    }
    Ok(wired)
}
