//! Required-field validation for `form[data-validate]`.
//!
//! SYSTEM CONTEXT
//! ==============
//! On submit, every `[required]` field with a blank (whitespace-only) value
//! flags its `.form-group` with `has-error` and shows an `.error-message`
//! beside the field; fields that now have a value lose both. A single failure
//! cancels the submit, otherwise the browser submits natively.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// DOM operations validation needs from one required field.
pub trait RequiredField {
    fn value(&self) -> String;
    /// Add or remove `has-error` on the enclosing form group, if any.
    fn set_group_error(&self, failed: bool);
    /// Create the error message element on first use, then update its text.
    fn show_message(&self, message: &str);
    fn clear_message(&self);
}

/// Outcome of one validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub checked: usize,
    pub failed: usize,
}

impl Verdict {
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.failed == 0
    }
}

#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validate every field, updating its error presentation.
pub fn validate<F: RequiredField>(fields: &[F], message: &str) -> Verdict {
    let mut failed = 0;
    for field in fields {
        if is_blank(&field.value()) {
            failed += 1;
            field.set_group_error(true);
            field.show_message(message);
        } else {
            field.set_group_error(false);
            field.clear_message();
        }
    }
    Verdict { checked: fields.len(), failed }
}

/// A required form control in the live document.
#[cfg(feature = "hydrate")]
pub struct DomField {
    element: web_sys::Element,
}

#[cfg(feature = "hydrate")]
impl DomField {
    pub fn new(element: web_sys::Element) -> Self {
        Self { element }
    }

    fn existing_message(&self) -> Option<web_sys::Element> {
        use crate::consts::ERROR_MESSAGE_SELECTOR;

        let parent = self.element.parent_element()?;
        match parent.query_selector(ERROR_MESSAGE_SELECTOR) {
            Ok(found) => found,
            Err(err) => {
                log::warn!("error message lookup failed: {err:?}");
                None
            }
        }
    }
}

#[cfg(feature = "hydrate")]
impl RequiredField for DomField {
    fn value(&self) -> String {
        // Inputs, selects, and textareas all expose `value`.
        match js_sys::Reflect::get(&self.element, &wasm_bindgen::JsValue::from_str("value")) {
            Ok(value) => value.as_string().unwrap_or_default(),
            Err(_) => String::new(),
        }
    }

    fn set_group_error(&self, failed: bool) {
        use crate::consts::{FORM_GROUP_SELECTOR, HAS_ERROR_CLASS};
        use crate::node::Node;

        if let Ok(Some(group)) = self.element.closest(FORM_GROUP_SELECTOR) {
            if failed {
                group.add_class(HAS_ERROR_CLASS);
            } else {
                group.remove_class(HAS_ERROR_CLASS);
            }
        }
    }

    fn show_message(&self, message: &str) {
        use crate::consts::ERROR_MESSAGE_CLASS;

        if let Some(existing) = self.existing_message() {
            existing.set_text_content(Some(message));
            return;
        }
        let (Some(parent), Some(document)) = (self.element.parent_element(), self.element.owner_document()) else {
            return;
        };
        match document.create_element("div") {
            Ok(div) => {
                div.set_class_name(ERROR_MESSAGE_CLASS);
                div.set_text_content(Some(message));
                if let Err(err) = parent.append_child(&div) {
                    log::warn!("error message insert failed: {err:?}");
                }
            }
            Err(err) => log::warn!("error message create failed: {err:?}"),
        }
    }

    fn clear_message(&self) {
        if let Some(existing) = self.existing_message() {
            existing.remove();
        }
    }
}

#[cfg(feature = "hydrate")]
pub fn attach(
    document: &web_sys::Document,
    config: &crate::config::BehaviorConfig,
) -> Result<usize, crate::error::BehaviorError> {
    use crate::consts::{REQUIRED_FIELD_SELECTOR, VALIDATED_FORM_SELECTOR};
    use crate::dom;

    let forms = dom::query_all(document, VALIDATED_FORM_SELECTOR)?;
    let wired = forms.len();
    for form in forms {
        let scope = form.clone();
        let message = config.required_message.clone();
        dom::listen(&form, "submit", move |event| {
            let fields: Vec<DomField> = match dom::query_within(&scope, REQUIRED_FIELD_SELECTOR) {
                Ok(elements) => elements.into_iter().map(DomField::new).collect(),
                Err(err) => {
                    log::warn!("required field lookup failed: {err}");
                    return;
                }
            };
            let verdict = validate(&fields, &message);
            if !verdict.is_valid() {
                log::debug!("blocked submit: {} of {} required fields empty", verdict.failed, verdict.checked);
                event.prevent_default();
            }
        })?;
    }
    Ok(wired)
}
