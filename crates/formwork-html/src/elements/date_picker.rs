//! Date pickers.
//!
//! The date format is a chrono pattern kept in the `date-format` hint. The
//! built-in [`DateValidator`] and [`DateConverter`] both read it, so changing
//! the hint changes how the element validates and converts.

use std::sync::Arc;

use chrono::NaiveDate;
use formwork_core::{Element, FormError, Result, ValueConverter};
use formwork_model::{TypedValue, ValueType};

use super::{DATE_PICKER, html_element};
use crate::renderers::InputRenderer;
use crate::validators::DateValidator;

pub const DATE_FORMAT_HINT: &str = "date-format";
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// The date format of `element`, or the default.
pub fn date_format(element: &Element) -> &str {
    element.hint(DATE_FORMAT_HINT).unwrap_or(DEFAULT_DATE_FORMAT)
}

/// Parses the first value with the element's date format.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateConverter;

impl ValueConverter for DateConverter {
    fn convert(&self, element: &Element, values: &[Option<String>]) -> Result<TypedValue> {
        let Some(text) = values
            .first()
            .and_then(Option::as_deref)
            .map(str::trim)
            .filter(|text| !text.is_empty())
        else {
            return Ok(TypedValue::Null);
        };
        let format = date_format(element);
        NaiveDate::parse_from_str(text, format)
            .map(TypedValue::Date)
            .map_err(|source| FormError::CustomConversion {
                element: element.id().to_string(),
                value: text.to_string(),
                message: format!("not a date for the format {format}: {source}"),
            })
    }
}

/// A `type="date"` input converting to a date.
pub fn date_picker(id: &str) -> Element {
    html_element(id, &DATE_PICKER)
        .with_fixed_value_type(Some(ValueType::Date))
        .with_property("type", "date")
        .with_hint(DATE_FORMAT_HINT, DEFAULT_DATE_FORMAT)
        .with_validator(Arc::new(DateValidator::new()))
        .with_converter(Arc::new(DateConverter))
        .with_default_renderer(Arc::new(InputRenderer))
}

/// Set the date format used for validation and conversion.
pub fn set_date_format(element: &mut Element, format: &str) {
    element.set_hint(DATE_FORMAT_HINT, format);
}

/// Write a date using the element's date format.
pub fn set_date(element: &mut Element, date: NaiveDate) {
    let text = date.format(date_format(element)).to_string();
    element.set_value(text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use formwork_i18n::Translation;

    #[test]
    fn test_conversion() {
        let mut element = date_picker("start");
        assert_eq!(element.converted_value().unwrap(), TypedValue::Null);
        element.set_value("2024-02-29");
        assert_eq!(
            element.converted_value().unwrap(),
            TypedValue::Date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        );
        element.set_value("2023-02-29");
        assert!(matches!(
            element.converted_value(),
            Err(FormError::CustomConversion { .. })
        ));
    }

    #[test]
    fn test_format_change() {
        let mut element = date_picker("start");
        set_date_format(&mut element, "%d/%m/%Y");
        set_date(&mut element, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(element.first_value(), Some("05/01/2024"));
        assert!(element.is_valid(&Translation::default()));

        element.set_value("2024-01-05");
        assert_eq!(
            element.validate(&Translation::default()),
            vec!["'2024-01-05' is not a valid date for the format %d/%m/%Y".to_string()]
        );
    }
}
