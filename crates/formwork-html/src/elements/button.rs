//! Buttons.
//!
//! A button holds no value and takes no part in validation or data
//! extraction. Its label becomes the button content, escaped unless the
//! `escape` hint is `false`.

use std::sync::Arc;

use formwork_core::{Behavior, Element};

use super::{BUTTON, html_element};
use crate::renderers::ButtonRenderer;

pub const BUTTON_TYPE_BUTTON: &str = "button";
pub const BUTTON_TYPE_SUBMIT: &str = "submit";
pub const BUTTON_TYPE_RESET: &str = "reset";

/// A `type="button"` button.
pub fn button(id: &str) -> Element {
    button_with_type(id, BUTTON_TYPE_BUTTON)
}

/// A button of the given `type` attribute.
pub fn button_with_type(id: &str, button_type: &str) -> Element {
    let mut element = html_element(id, &BUTTON)
        .with_behavior(Behavior::default().ignoring_values().fixed_values())
        .with_fixed_value_type(None)
        .with_property("type", button_type)
        .with_hint("escape", "true")
        .with_default_renderer(Arc::new(ButtonRenderer));
    element.remove_property("name");
    element
}
