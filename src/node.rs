//! Element handle abstraction used by every behavior core.
//!
//! SYSTEM CONTEXT
//! ==============
//! Behavior logic only needs class membership, text content, and removal.
//! Expressing that as a trait lets the same functions drive real
//! `web_sys::Element`s in the browser and in-memory fakes in native tests.
//!
//! Methods take `&self`: DOM handles are shared references to mutable
//! browser-owned state, and the fakes mirror that with interior mutability.

#[cfg(test)]
#[path = "node_fake.rs"]
pub(crate) mod fake;

pub trait Node {
    fn has_class(&self, name: &str) -> bool;
    fn add_class(&self, name: &str);
    fn remove_class(&self, name: &str);
    fn set_text(&self, text: &str);
    /// Remove the node from its document.
    fn detach(&self);

    /// Flip `name` and return whether it is now present.
    fn toggle_class(&self, name: &str) -> bool {
        if self.has_class(name) {
            self.remove_class(name);
            false
        } else {
            self.add_class(name);
            true
        }
    }
}

#[cfg(feature = "hydrate")]
impl Node for web_sys::Element {
    fn has_class(&self, name: &str) -> bool {
        self.class_list().contains(name)
    }

    fn add_class(&self, name: &str) {
        if let Err(err) = self.class_list().add_1(name) {
            log::warn!("add class {name:?} failed: {err:?}");
        }
    }

    fn remove_class(&self, name: &str) {
        if let Err(err) = self.class_list().remove_1(name) {
            log::warn!("remove class {name:?} failed: {err:?}");
        }
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn detach(&self) {
        self.remove();
    }
}
