//! HTML element kinds and their constructors.
//!
//! Every constructor returns a plain [`Element`] configured for its kind:
//! `id` and `name` properties set to the element id, the trim and
//! control-character filters installed, and the kind's renderer, validators,
//! converter and behavior attached.
//!
//! # Kind hierarchy
//!
//! ```text
//! element
//! ├── html-element
//! │   ├── input
//! │   │   ├── password
//! │   │   └── date-picker
//! │   ├── textarea
//! │   ├── hidden
//! │   ├── checkbox
//! │   ├── button            (no default decorators)
//! │   └── choice
//! │       ├── select
//! │       │   └── multiselect
//! │       └── multi-option
//! │           ├── radio
//! │           └── multicheckbox
//! └── static-html           (no default decorators)
//! ```

use std::sync::Arc;

use formwork_core::{Behavior, Element, RemoveControlCharacters, StringTrim};
use formwork_model::{ELEMENT, ElementKind};

use crate::renderers::{HiddenRenderer, InputRenderer, PasswordRenderer, TextareaRenderer};

pub mod button;
pub mod checkbox;
pub mod choice;
pub mod date_picker;
pub mod static_html;

pub use button::{BUTTON_TYPE_BUTTON, BUTTON_TYPE_RESET, BUTTON_TYPE_SUBMIT, button, button_with_type};
pub use checkbox::{
    CheckboxConverter, DEFAULT_ENABLED_VALUE, checkbox, enabled_value, is_checked, set_checked,
    set_enabled_value,
};
pub use choice::{
    DEFAULT_SEPARATOR, ESCAPE_OPTION_LABELS_HINT, PREPEND_OPTION_LABELS_HINT, SEPARATOR_HINT,
    multicheckbox, multiselect, radio, select,
};
pub use date_picker::{
    DATE_FORMAT_HINT, DEFAULT_DATE_FORMAT, DateConverter, date_format, date_picker, set_date,
    set_date_format,
};
pub use static_html::static_html;

// =============================================================================
// KINDS
// =============================================================================

pub static HTML_ELEMENT: ElementKind = ElementKind::new("html-element", &ELEMENT);
pub static INPUT: ElementKind = ElementKind::new("input", &HTML_ELEMENT);
pub static PASSWORD: ElementKind = ElementKind::new("password", &INPUT);
pub static DATE_PICKER: ElementKind = ElementKind::new("date-picker", &INPUT);
pub static TEXTAREA: ElementKind = ElementKind::new("textarea", &HTML_ELEMENT);
pub static HIDDEN: ElementKind = ElementKind::new("hidden", &HTML_ELEMENT);
pub static CHECKBOX: ElementKind = ElementKind::new("checkbox", &HTML_ELEMENT);
pub static BUTTON: ElementKind =
    ElementKind::new("button", &HTML_ELEMENT).ignoring_default_decorators();
pub static CHOICE: ElementKind = ElementKind::new("choice", &HTML_ELEMENT);
pub static SELECT: ElementKind = ElementKind::new("select", &CHOICE);
pub static MULTISELECT: ElementKind = ElementKind::new("multiselect", &SELECT);
pub static MULTI_OPTION: ElementKind = ElementKind::new("multi-option", &CHOICE);
pub static RADIO: ElementKind = ElementKind::new("radio", &MULTI_OPTION);
pub static MULTICHECKBOX: ElementKind = ElementKind::new("multicheckbox", &MULTI_OPTION);
pub static STATIC_HTML: ElementKind =
    ElementKind::new("static-html", &ELEMENT).ignoring_default_decorators();

/// Every built-in kind, parents before children.
pub static KINDS: [&ElementKind; 16] = [
    &ELEMENT,
    &HTML_ELEMENT,
    &INPUT,
    &PASSWORD,
    &DATE_PICKER,
    &TEXTAREA,
    &HIDDEN,
    &CHECKBOX,
    &BUTTON,
    &CHOICE,
    &SELECT,
    &MULTISELECT,
    &MULTI_OPTION,
    &RADIO,
    &MULTICHECKBOX,
    &STATIC_HTML,
];

/// Look a kind up by name.
pub fn kind_by_name(name: &str) -> Option<&'static ElementKind> {
    KINDS.iter().copied().find(|kind| kind.name() == name)
}

// =============================================================================
// CONSTRUCTORS
// =============================================================================

/// Base configuration shared by every HTML kind.
pub(crate) fn html_element(id: &str, kind: &'static ElementKind) -> Element {
    Element::new(id, kind)
        .with_property("id", id)
        .with_property("name", id)
        .with_filter(Arc::new(StringTrim))
        .with_filter(Arc::new(RemoveControlCharacters::new()))
}

/// A text input.
pub fn input(id: &str) -> Element {
    html_element(id, &INPUT)
        .with_property("type", "text")
        .with_default_renderer(Arc::new(InputRenderer))
}

/// A password input. Its value is never echoed back.
pub fn password(id: &str) -> Element {
    html_element(id, &PASSWORD)
        .with_property("type", "password")
        .with_default_renderer(Arc::new(PasswordRenderer))
}

pub fn textarea(id: &str) -> Element {
    html_element(id, &TEXTAREA).with_default_renderer(Arc::new(TextareaRenderer))
}

/// A hidden input. Population and reset leave its value alone.
pub fn hidden(id: &str) -> Element {
    html_element(id, &HIDDEN)
        .with_behavior(Behavior::default().fixed_values())
        .with_default_renderer(Arc::new(HiddenRenderer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lineage() {
        assert!(MULTICHECKBOX.is_a(&CHOICE));
        assert!(MULTISELECT.is_a(&SELECT));
        assert!(!RADIO.is_a(&SELECT));
        assert!(STATIC_HTML.ignores_default_decorators());
        assert!(BUTTON.ignores_default_decorators());
        assert!(!INPUT.ignores_default_decorators());
    }

    #[test]
    fn test_kind_lookup() {
        assert_eq!(kind_by_name("date-picker"), Some(&DATE_PICKER));
        assert!(kind_by_name("unknown").is_none());
        for kind in KINDS.iter().skip(1) {
            let parent = kind.parent().unwrap();
            assert!(KINDS.iter().position(|k| *k == parent) < KINDS.iter().position(|k| k == kind));
        }
    }

    #[test]
    fn test_html_defaults() {
        let mut element = input("email");
        assert_eq!(element.property("id"), Some("email"));
        assert_eq!(element.name(), Some("email"));
        element.set_value("  a\u{0007}b \n");
        assert_eq!(element.first_value(), Some("ab"));
    }

    #[test]
    fn test_hidden_keeps_value() {
        let mut element = hidden("token").with_value("abc");
        element.populate(vec![Some("other".into())]);
        element.reset();
        assert_eq!(element.first_value(), Some("abc"));
    }
}
