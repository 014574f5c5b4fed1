//! Page loader: after window load, mark `.page-loader` as `loaded` so its
//! CSS transition runs, then remove it once the transition has had time to
//! finish. Both steps run on fixed delays and cannot be cancelled.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use crate::config::BehaviorConfig;
use crate::consts::LOADED_CLASS;
use crate::node::Node;

/// Delays for the two loader steps, each measured from the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderSchedule {
    pub mark_loaded_after_ms: u32,
    pub remove_after_ms: u32,
}

impl LoaderSchedule {
    #[must_use]
    pub fn from_config(config: &BehaviorConfig) -> Self {
        Self {
            mark_loaded_after_ms: config.loader_reveal_delay_ms,
            remove_after_ms: config.loader_remove_delay_ms,
        }
    }

    /// Milliseconds from window load until the loader leaves the document.
    #[must_use]
    pub fn total_ms(self) -> u32 {
        self.mark_loaded_after_ms.saturating_add(self.remove_after_ms)
    }
}

pub fn mark_loaded<N: Node>(loader: &N) {
    loader.add_class(LOADED_CLASS);
}

pub fn dismiss<N: Node>(loader: &N) {
    loader.detach();
}

#[cfg(feature = "hydrate")]
pub fn attach(document: &web_sys::Document, config: &BehaviorConfig) -> Result<usize, crate::error::BehaviorError> {
    use web_sys::Element;

    use crate::consts::LOADER_SELECTOR;
    use crate::dom::{self, Listen};

    fn run(loader: Element, schedule: LoaderSchedule) {
        dom::after(schedule.mark_loaded_after_ms, move || {
            mark_loaded(&loader);
            dom::after(schedule.remove_after_ms, move || dismiss(&loader));
        });
    }

    let Some(loader) = document.query_selector(LOADER_SELECTOR)? else {
        return Ok(0);
    };
    let schedule = LoaderSchedule::from_config(config);

    // The module may initialise after `load` has already fired.
    if document.ready_state() == "complete" {
        run(loader, schedule);
    } else {
        let window = dom::window()?;
        let mut pending = Some(loader);
        dom::listen_with(&window, "load", Listen::ONCE, move |_| {
            if let Some(loader) = pending.take() {
                run(loader, schedule);
            }
        })?;
    }
    Ok(1)
}
