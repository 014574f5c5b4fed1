use super::*;
use crate::node::fake::FakeNode;

#[test]
fn selection_shows_exactly_that_file_name() {
    let wrapper = FakeNode::new();
    let label = FakeNode::new();

    show_selection(&wrapper, Some(&label), Some("report.pdf"));

    assert!(wrapper.has_class("has-file"));
    assert_eq!(label.text(), "report.pdf");
}

#[test]
fn new_selection_replaces_previous_name() {
    let wrapper = FakeNode::new();
    let label = FakeNode::new();

    show_selection(&wrapper, Some(&label), Some("a.csv"));
    show_selection(&wrapper, Some(&label), Some("b.csv"));

    assert_eq!(label.text(), "b.csv");
}

#[test]
fn clearing_selection_clears_label_and_class() {
    let wrapper = FakeNode::new();
    let label = FakeNode::new();
    show_selection(&wrapper, Some(&label), Some("report.pdf"));

    show_selection(&wrapper, Some(&label), None);

    assert!(!wrapper.has_class("has-file"));
    assert_eq!(label.text(), "");
}

#[test]
fn missing_label_still_flags_wrapper() {
    let wrapper = FakeNode::new();
    show_selection(&wrapper, None, Some("photo.png"));
    assert!(wrapper.has_class("has-file"));
}
