//! Custom value conversion.

use formwork_model::TypedValue;

use crate::element::Element;
use crate::error::Result;

/// Converts an element's values into a typed value, bypassing basic conversion.
///
/// The result must be assignable to the element's value type; the element
/// checks this after every call.
pub trait ValueConverter: Send + Sync {
    fn convert(&self, element: &Element, values: &[Option<String>]) -> Result<TypedValue>;
}
