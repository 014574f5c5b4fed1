//! Scroll-spy navigation highlighting.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections carry `data-scrollspy` and an `id`; nav links carry
//! `.scroll-nav-link` and `href="#<id>"`. On every scroll the last section
//! (in document order) whose top, less the configured lead, has been scrolled
//! past becomes current, and exactly the first link pointing at it is marked
//! `active`.

#[cfg(test)]
#[path = "scroll_spy_test.rs"]
mod scroll_spy_test;

use crate::consts::ACTIVE_CLASS;
use crate::node::Node;

/// A spied section, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: Option<String>,
    pub top: f64,
}

/// Id of the section the reader is currently in.
///
/// `None` when no section has been reached, or when the reached section has
/// no usable id.
#[must_use]
pub fn current_section(sections: &[Section], scroll_y: f64, offset: f64) -> Option<&str> {
    sections
        .iter()
        .rfind(|section| scroll_y >= section.top - offset)
        .and_then(|section| section.id.as_deref())
        .filter(|id| !id.is_empty())
}

/// Fragment named by an in-page `href`, without the leading `#`.
#[must_use]
pub fn fragment_of(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

/// Clear every link, then activate the first whose fragment equals `current`.
/// Returns the index of the activated link.
pub fn highlight<'a, N, H, I>(links: I, current: Option<&str>) -> Option<usize>
where
    N: Node + 'a,
    H: AsRef<str>,
    I: IntoIterator<Item = (&'a N, H)>,
{
    let mut active = None;
    for (idx, (link, href)) in links.into_iter().enumerate() {
        link.remove_class(ACTIVE_CLASS);
        if active.is_none() && current.is_some() && fragment_of(href.as_ref()) == current {
            link.add_class(ACTIVE_CLASS);
            active = Some(idx);
        }
    }
    active
}

#[cfg(feature = "hydrate")]
pub fn attach(
    document: &web_sys::Document,
    config: &crate::config::BehaviorConfig,
) -> Result<usize, crate::error::BehaviorError> {
    use crate::consts::{SCROLLSPY_LINK_SELECTOR, SCROLLSPY_SECTION_SELECTOR};
    use crate::dom;

    let sections = dom::query_all(document, SCROLLSPY_SECTION_SELECTOR)?;
    let links = dom::query_all(document, SCROLLSPY_LINK_SELECTOR)?;
    if sections.is_empty() || links.is_empty() {
        return Ok(0);
    }

    let window = dom::window()?;
    let offset = config.scroll_spy_offset_px;
    let hrefs: Vec<String> = links
        .iter()
        .map(|link| link.get_attribute("href").unwrap_or_default())
        .collect();
    let wired = links.len();

    let viewport = window.clone();
    dom::listen(&window, "scroll", move |_| {
        let measured: Vec<Section> = sections
            .iter()
            .map(|el| Section { id: el.get_attribute("id"), top: dom::offset_top(el) })
            .collect();
        let current = current_section(&measured, dom::scroll_y(&viewport), offset);
        highlight(links.iter().zip(&hrefs), current);
    })?;
    Ok(wired)
}
