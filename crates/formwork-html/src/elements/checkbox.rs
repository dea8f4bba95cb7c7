//! Single checkboxes.
//!
//! A checkbox is checked when its first value equals its enabled value, the
//! `value` property (`1` unless changed). It always converts to a boolean.

use std::sync::Arc;

use formwork_core::{Element, Result, ValueConverter};
use formwork_model::{TypedValue, ValueType};

use super::{CHECKBOX, html_element};
use crate::renderers::CheckboxRenderer;

/// Enabled value used when the `value` property is absent.
pub const DEFAULT_ENABLED_VALUE: &str = "1";

/// Converts a checkbox to `Bool(checked)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckboxConverter;

impl ValueConverter for CheckboxConverter {
    fn convert(&self, element: &Element, _values: &[Option<String>]) -> Result<TypedValue> {
        Ok(TypedValue::Bool(is_checked(element)))
    }
}

pub fn checkbox(id: &str) -> Element {
    html_element(id, &CHECKBOX)
        .with_fixed_value_type(Some(ValueType::Bool))
        .with_property("type", "checkbox")
        .with_property("value", DEFAULT_ENABLED_VALUE)
        .with_converter(Arc::new(CheckboxConverter))
        .with_default_renderer(Arc::new(CheckboxRenderer))
}

/// The value submitted when the checkbox is checked.
pub fn enabled_value(element: &Element) -> &str {
    element.property("value").unwrap_or(DEFAULT_ENABLED_VALUE)
}

pub fn is_checked(element: &Element) -> bool {
    element.first_value() == Some(enabled_value(element))
}

/// Check or uncheck by writing the enabled value or an empty value.
pub fn set_checked(element: &mut Element, checked: bool) {
    let value = if checked {
        enabled_value(element).to_string()
    } else {
        String::new()
    };
    element.set_value(value);
}

/// Change the enabled value, keeping the checked state.
pub fn set_enabled_value(element: &mut Element, value: &str) {
    let checked = is_checked(element);
    element.set_property("value", value);
    set_checked(element, checked);
}
