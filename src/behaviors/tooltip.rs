//! Tooltips toggle on click or touch, and close when the user clicks
//! anywhere outside them.

#[cfg(test)]
#[path = "tooltip_test.rs"]
mod tooltip_test;

use crate::consts::ACTIVE_CLASS;
use crate::node::Node;

/// Returns whether the tooltip is now shown.
pub fn toggle<N: Node>(tooltip: &N) -> bool {
    tooltip.toggle_class(ACTIVE_CLASS)
}

/// Close every tooltip not containing the click target. Each tooltip is
/// paired with whether it contains the target. Returns how many closed.
pub fn close_outside<'a, N, I>(tooltips: I) -> usize
where
    N: Node + 'a,
    I: IntoIterator<Item = (&'a N, bool)>,
{
    let mut closed = 0;
    for (tooltip, contains_target) in tooltips {
        if !contains_target && tooltip.has_class(ACTIVE_CLASS) {
            tooltip.remove_class(ACTIVE_CLASS);
            closed += 1;
        }
    }
    closed
}

#[cfg(feature = "hydrate")]
pub fn attach(
    document: &web_sys::Document,
    _config: &crate::config::BehaviorConfig,
) -> Result<usize, crate::error::BehaviorError> {
    use std::rc::Rc;

    use wasm_bindgen::JsCast;

    use crate::consts::TOOLTIP_SELECTOR;
    use crate::dom;

    let tooltips = Rc::new(dom::query_all(document, TOOLTIP_SELECTOR)?);
    if tooltips.is_empty() {
        return Ok(0);
    }

    for tooltip in tooltips.iter() {
        for event_name in ["click", "touchstart"] {
            let handle = tooltip.clone();
            dom::listen(tooltip, event_name, move |event| {
                event.prevent_default();
                event.stop_propagation();
                toggle(&handle);
            })?;
        }
    }

    // One document listener serves every tooltip.
    let all = Rc::clone(&tooltips);
    dom::listen(document, "click", move |event| {
        let target = event.target();
        let target = target.as_ref().and_then(|t| t.dyn_ref::<web_sys::Node>());
        close_outside(all.iter().map(|tooltip| (tooltip, tooltip.contains(target))));
    })?;

    Ok(tooltips.len())
}
