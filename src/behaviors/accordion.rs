//! Accordion: clicking an item's header closes every other open item and
//! toggles the clicked one.
//!
//! TRADE-OFFS
//! ==========
//! All `.accordion-item`s on a page form one group regardless of which
//! container they sit in, so two accordions on the same page close each
//! other's items.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

use crate::consts::ACTIVE_CLASS;
use crate::node::Node;

/// Handle a header click on `items[clicked]`. Returns whether the clicked
/// item is open afterwards; `false` for an out-of-range index.
pub fn on_header_click<N: Node>(items: &[N], clicked: usize) -> bool {
    let Some(target) = items.get(clicked) else {
        return false;
    };
    for (idx, item) in items.iter().enumerate() {
        if idx != clicked && item.has_class(ACTIVE_CLASS) {
            item.remove_class(ACTIVE_CLASS);
        }
    }
    target.toggle_class(ACTIVE_CLASS)
}

#[cfg(feature = "hydrate")]
pub fn attach(
    document: &web_sys::Document,
    _config: &crate::config::BehaviorConfig,
) -> Result<usize, crate::error::BehaviorError> {
    use std::rc::Rc;

    use crate::consts::{ACCORDION_HEADER_SELECTOR, ACCORDION_ITEM_SELECTOR};
    use crate::dom;

    let items = Rc::new(dom::query_all(document, ACCORDION_ITEM_SELECTOR)?);
    let mut wired = 0;
    for (idx, item) in items.iter().enumerate() {
        let Some(header) = item.query_selector(ACCORDION_HEADER_SELECTOR)? else {
            continue;
        };
        let items = Rc::clone(&items);
        dom::listen(&header, "click", move |_| {
            on_header_click(items.as_slice(), idx);
        })?;
        wired += 1;
    }
    Ok(wired)
}
