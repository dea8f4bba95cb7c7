use chrono::NaiveDate;
use formwork_core::{Element, Validator};
use formwork_i18n::Translation;

use super::{DATE_INVALID, present_value};
use crate::elements::date_format;

/// The value must be a date in a chrono format.
///
/// Without an explicit format, the element's `date-format` hint applies.
#[derive(Debug, Clone, Default)]
pub struct DateValidator {
    format: Option<String>,
}

impl DateValidator {
    /// Validate with the element's own date format.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate with `format`, ignoring the element hint.
    pub fn with_format(format: impl Into<String>) -> Self {
        Self {
            format: Some(format.into()),
        }
    }
}

impl Validator for DateValidator {
    fn validate(
        &self,
        element: &Element,
        values: &[Option<String>],
        translation: &Translation,
    ) -> Vec<String> {
        let Some(value) = present_value(values).map(str::trim) else {
            return Vec::new();
        };
        let format = self.format.as_deref().unwrap_or_else(|| date_format(element));
        if NaiveDate::parse_from_str(value, format).is_ok() {
            Vec::new()
        } else {
            vec![translation.message(DATE_INVALID, &[&value, &format])]
        }
    }

    fn breaks_chain_on_error(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::input;
    use crate::validators::test_support::check;

    #[test]
    fn test_explicit_format() {
        let validator = DateValidator::with_format("%m/%d/%Y");
        let mut element = input("when");
        assert!(check(&validator, &mut element, Some("12/31/2024")).is_empty());
        assert_eq!(
            check(&validator, &mut element, Some("31/12/2024")),
            vec!["'31/12/2024' is not a valid date for the format %m/%d/%Y".to_string()]
        );
    }

    #[test]
    fn test_default_format_without_hint() {
        let mut element = input("when");
        assert!(check(&DateValidator::new(), &mut element, Some("2024-12-31")).is_empty());
        assert_eq!(check(&DateValidator::new(), &mut element, Some("2024-13-01")).len(), 1);
    }
}
