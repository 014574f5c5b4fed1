//! Exit transition on link navigation.
//!
//! A document-level click listener delays ordinary link navigation long
//! enough for `page-transition-out` to animate the page away. In-page
//! fragments, `javascript:` links, and Ctrl/Cmd clicks (new-tab intents) are
//! left to the browser. Once started a navigation cannot be cancelled.

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

/// Modifier keys that signal "open elsewhere" rather than "navigate here".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickModifiers {
    pub ctrl: bool,
    pub meta: bool,
}

/// Whether a click on a link with raw `href` attribute should be delayed for
/// the exit transition.
#[must_use]
pub fn should_intercept(href: Option<&str>, modifiers: ClickModifiers) -> bool {
    let Some(href) = href else {
        return false;
    };
    if modifiers.ctrl || modifiers.meta {
        return false;
    }
    !href.starts_with('#') && !is_script_url(href)
}

fn is_script_url(href: &str) -> bool {
    const SCHEME: &str = "javascript:";
    href.trim_start()
        .get(..SCHEME.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(SCHEME))
}

/// Register the document-level listener. Runs before the document is ready;
/// the body is looked up per click.
#[cfg(feature = "hydrate")]
pub fn attach(
    document: &web_sys::Document,
    config: &crate::config::BehaviorConfig,
) -> Result<usize, crate::error::BehaviorError> {
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlAnchorElement, MouseEvent};

    use crate::consts::TRANSITION_OUT_CLASS;
    use crate::dom;
    use crate::node::Node;

    let delay_ms = config.transition_delay_ms;
    let window = dom::window()?;
    let doc = document.clone();

    dom::listen(document, "click", move |event| {
        let Some(link) = dom::event_element(&event).and_then(|el| el.closest("a").unwrap_or_default()) else {
            return;
        };
        let modifiers = event
            .dyn_ref::<MouseEvent>()
            .map(|mouse| ClickModifiers { ctrl: mouse.ctrl_key(), meta: mouse.meta_key() })
            .unwrap_or_default();
        let href = link.get_attribute("href");
        if !should_intercept(href.as_deref(), modifiers) {
            return;
        }

        event.prevent_default();
        match dom::body(&doc) {
            Ok(body) => body.add_class(TRANSITION_OUT_CLASS),
            Err(err) => log::warn!("page transition without body: {err}"),
        }

        let destination = link
            .dyn_ref::<HtmlAnchorElement>()
            .map(HtmlAnchorElement::href)
            .or(href)
            .unwrap_or_default();
        let location = window.location();
        dom::after(delay_ms, move || {
            if let Err(err) = location.set_href(&destination) {
                log::warn!("navigation to {destination:?} failed: {err:?}");
            }
        });
    })?;
    Ok(1)
}
