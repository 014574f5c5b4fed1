use std::cell::{Cell, RefCell};

use super::*;

/// A field whose parent holds at most a list of message elements.
#[derive(Default)]
struct FakeField {
    value: RefCell<String>,
    group_error: Cell<bool>,
    messages: RefCell<Vec<String>>,
}

impl FakeField {
    fn with_value(value: &str) -> Self {
        let field = Self::default();
        field.fill(value);
        field
    }

    fn fill(&self, value: &str) {
        *self.value.borrow_mut() = value.to_owned();
    }

    fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl RequiredField for FakeField {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn set_group_error(&self, failed: bool) {
        self.group_error.set(failed);
    }

    fn show_message(&self, message: &str) {
        let mut messages = self.messages.borrow_mut();
        match messages.first_mut() {
            Some(existing) => *existing = message.to_owned(),
            None => messages.push(message.to_owned()),
        }
    }

    fn clear_message(&self) {
        self.messages.borrow_mut().clear();
    }
}

const MESSAGE: &str = "This field is required";

#[test]
fn whitespace_counts_as_blank() {
    assert!(is_blank(""));
    assert!(is_blank("  \t\n"));
    assert!(!is_blank(" x "));
}

#[test]
fn one_empty_field_blocks_with_single_message() {
    let fields = [FakeField::with_value("Ada"), FakeField::with_value("   ")];

    let verdict = validate(&fields, MESSAGE);

    assert_eq!(verdict, Verdict { checked: 2, failed: 1 });
    assert!(!verdict.is_valid());
    assert!(fields[1].group_error.get());
    assert_eq!(fields[1].messages(), vec![MESSAGE.to_owned()]);
    assert!(!fields[0].group_error.get());
    assert!(fields[0].messages().is_empty());
}

#[test]
fn repeated_failures_reuse_the_message() {
    let fields = [FakeField::default()];
    validate(&fields, MESSAGE);
    validate(&fields, MESSAGE);
    assert_eq!(fields[0].messages().len(), 1);
}

#[test]
fn filling_and_resubmitting_clears_error_and_allows_submit() {
    let fields = [FakeField::default()];
    assert!(!validate(&fields, MESSAGE).is_valid());

    fields[0].fill("filled in");
    let verdict = validate(&fields, MESSAGE);

    assert!(verdict.is_valid());
    assert!(!fields[0].group_error.get());
    assert!(fields[0].messages().is_empty());
}

#[test]
fn form_without_required_fields_is_valid() {
    let fields: [FakeField; 0] = [];
    assert_eq!(validate(&fields, MESSAGE), Verdict { checked: 0, failed: 0 });
}
