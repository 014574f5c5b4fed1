//! Browser glue shared by the behavior `attach` functions.
//!
//! Listeners and timers registered here are leaked on purpose: they serve
//! the page for its whole lifetime and are never removed.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use crate::error::BehaviorError;

/// Listener registration flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct Listen {
    pub passive: bool,
    pub once: bool,
}

impl Listen {
    pub const PASSIVE: Self = Self { passive: true, once: false };
    pub const ONCE: Self = Self { passive: false, once: true };
}

pub fn window() -> Result<Window, BehaviorError> {
    web_sys::window().ok_or(BehaviorError::NoWindow)
}

pub fn document() -> Result<Document, BehaviorError> {
    window()?.document().ok_or(BehaviorError::NoDocument)
}

pub fn body(document: &Document) -> Result<Element, BehaviorError> {
    document.body().map(Element::from).ok_or(BehaviorError::NoBody)
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, BehaviorError> {
    Ok(elements(&document.query_selector_all(selector)?))
}

/// All descendants of `root` matching `selector`.
pub fn query_within(root: &Element, selector: &str) -> Result<Vec<Element>, BehaviorError> {
    Ok(elements(&root.query_selector_all(selector)?))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), BehaviorError>
where
    F: FnMut(Event) + 'static,
{
    listen_with(target, event, Listen::default(), handler)
}

pub fn listen_with<F>(target: &EventTarget, event: &str, flags: Listen, handler: F) -> Result<(), BehaviorError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(flags.passive);
    options.set_once(flags.once);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

/// Run `callback` once after `millis`.
pub fn after<F>(millis: u32, callback: F)
where
    F: FnOnce() + 'static,
{
    Timeout::new(millis, callback).forget();
}

/// The element an event was dispatched to, if it is an element.
pub fn event_element(event: &Event) -> Option<Element> {
    event.target().and_then(|target| target.dyn_ref::<Element>().cloned())
}

/// `offsetTop` of an HTML element; zero for non-HTML elements.
pub fn offset_top(element: &Element) -> f64 {
    element
        .dyn_ref::<HtmlElement>()
        .map_or(0.0, |el| f64::from(el.offset_top()))
}

pub fn viewport_height(window: &Window) -> f64 {
    match window.inner_height() {
        Ok(height) => height.as_f64().unwrap_or(0.0),
        Err(err) => {
            log::warn!("innerHeight unavailable: {err:?}");
            0.0
        }
    }
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}
