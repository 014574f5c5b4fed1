//! Custom file-input label: mirrors the first selected file name into the
//! wrapper's `.file-name` element and flags the wrapper with `has-file`.

#[cfg(test)]
#[path = "file_input_test.rs"]
mod file_input_test;

use crate::consts::HAS_FILE_CLASS;
use crate::node::Node;

/// Reflect the current selection. `first_file` is the name of the first
/// selected file, `None` when the selection is empty.
pub fn show_selection<N: Node>(wrapper: &N, label: Option<&N>, first_file: Option<&str>) {
    match first_file {
        Some(name) => {
            wrapper.add_class(HAS_FILE_CLASS);
            if let Some(label) = label {
                label.set_text(name);
            }
        }
        None => {
            wrapper.remove_class(HAS_FILE_CLASS);
            if let Some(label) = label {
                label.set_text("");
            }
        }
    }
}

#[cfg(feature = "hydrate")]
pub fn attach(
    document: &web_sys::Document,
    _config: &crate::config::BehaviorConfig,
) -> Result<usize, crate::error::BehaviorError> {
    use wasm_bindgen::JsCast;
    use web_sys::HtmlInputElement;

    use crate::consts::{FILE_INPUT_SELECTOR, FILE_NAME_SELECTOR, FILE_WRAPPER_SELECTOR};
    use crate::dom;

    let mut wired = 0;
    for element in dom::query_all(document, FILE_INPUT_SELECTOR)? {
        let Some(wrapper) = element.closest(FILE_WRAPPER_SELECTOR)? else {
            continue;
        };
        let Some(input) = element.dyn_ref::<HtmlInputElement>().cloned() else {
            continue;
        };
        let label = wrapper.query_selector(FILE_NAME_SELECTOR)?;

        dom::listen(&element, "change", move |_| {
            let first = input.files().and_then(|files| files.get(0)).map(|file| file.name());
            show_selection(&wrapper, label.as_ref(), first.as_deref());
        })?;
        wired += 1;
    }
    Ok(wired)
}
