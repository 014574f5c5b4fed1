//! Reveal-on-scroll: `.reveal` elements gain `active` once their top edge
//! comes within `reveal_offset_px` of the viewport bottom. Activation is
//! one-way.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::ACTIVE_CLASS;
use crate::node::Node;

#[must_use]
pub fn is_in_view(top: f64, viewport_height: f64, offset: f64) -> bool {
    top < viewport_height - offset
}

/// Activate every element (paired with its current bounding top) that is in
/// view. Returns how many were newly activated.
pub fn reveal_visible<'a, N, I>(elements: I, viewport_height: f64, offset: f64) -> usize
where
    N: Node + 'a,
    I: IntoIterator<Item = (&'a N, f64)>,
{
    let mut newly_active = 0;
    for (element, top) in elements {
        if is_in_view(top, viewport_height, offset) && !element.has_class(ACTIVE_CLASS) {
            element.add_class(ACTIVE_CLASS);
            newly_active += 1;
        }
    }
    newly_active
}

#[cfg(feature = "hydrate")]
pub fn attach(
    document: &web_sys::Document,
    config: &crate::config::BehaviorConfig,
) -> Result<usize, crate::error::BehaviorError> {
    use crate::consts::REVEAL_SELECTOR;
    use crate::dom::{self, Listen};

    let window = dom::window()?;
    let elements = dom::query_all(document, REVEAL_SELECTOR)?;
    if elements.is_empty() {
        return Ok(0);
    }
    let wired = elements.len();
    let offset = config.reveal_offset_px;

    let check = {
        let window = window.clone();
        move || {
            let viewport_height = dom::viewport_height(&window);
            let tops = elements.iter().map(|el| (el, el.get_bounding_client_rect().top()));
            let revealed = reveal_visible(tops, viewport_height, offset);
            if revealed > 0 {
                log::trace!("revealed {revealed} elements");
            }
        }
    };

    check();
    dom::listen_with(&window, "scroll", Listen::PASSIVE, move |_| check())?;
    Ok(wired)
}
