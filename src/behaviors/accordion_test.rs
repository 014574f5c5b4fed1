use super::*;
use crate::node::fake::FakeNode;

fn items(n: usize) -> Vec<FakeNode> {
    (0..n).map(|_| FakeNode::with_classes(&["accordion-item"])).collect()
}

#[test]
fn clicking_a_then_b_leaves_only_b_open() {
    let group = items(2);

    assert!(on_header_click(&group, 0));
    assert!(on_header_click(&group, 1));

    assert!(!group[0].has_class("active"));
    assert!(group[1].has_class("active"));
}

#[test]
fn clicking_open_item_closes_it() {
    let group = items(3);
    on_header_click(&group, 2);

    assert!(!on_header_click(&group, 2));
    assert!(group.iter().all(|item| !item.has_class("active")));
}

#[test]
fn clicking_closes_every_other_open_item() {
    let group = items(3);
    group[0].add_class("active");
    group[2].add_class("active");

    on_header_click(&group, 1);

    assert!(!group[0].has_class("active"));
    assert!(group[1].has_class("active"));
    assert!(!group[2].has_class("active"));
}

#[test]
fn out_of_range_click_changes_nothing() {
    let group = items(2);
    group[0].add_class("active");

    assert!(!on_header_click(&group, 5));
    assert!(group[0].has_class("active"));
}
