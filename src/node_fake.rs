//! In-memory [`Node`] for native tests.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use super::Node;

#[derive(Debug, Default)]
struct FakeState {
    classes: BTreeSet<String>,
    text: String,
    detached: bool,
}

/// Cloning shares state, like two JS references to one element.
#[derive(Debug, Clone, Default)]
pub struct FakeNode {
    state: Rc<RefCell<FakeState>>,
}

impl FakeNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classes(classes: &[&str]) -> Self {
        let node = Self::new();
        for class in classes {
            node.add_class(class);
        }
        node
    }

    pub fn classes(&self) -> Vec<String> {
        self.state.borrow().classes.iter().cloned().collect()
    }

    pub fn text(&self) -> String {
        self.state.borrow().text.clone()
    }

    pub fn is_detached(&self) -> bool {
        self.state.borrow().detached
    }
}

impl Node for FakeNode {
    fn has_class(&self, name: &str) -> bool {
        self.state.borrow().classes.contains(name)
    }

    fn add_class(&self, name: &str) {
        self.state.borrow_mut().classes.insert(name.to_owned());
    }

    fn remove_class(&self, name: &str) {
        self.state.borrow_mut().classes.remove(name);
    }

    fn set_text(&self, text: &str) {
        text.clone_into(&mut self.state.borrow_mut().text);
    }

    fn detach(&self) {
        self.state.borrow_mut().detached = true;
    }
}
