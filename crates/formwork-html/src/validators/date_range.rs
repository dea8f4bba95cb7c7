use formwork_core::{Element, Form, FormData, FormError, FormValidator, Result};
use formwork_model::{TypedValue, ValueType};

use super::{DATE_RANGE_INVALID, DATE_RANGE_SAME};

const VALIDATOR_NAME: &str = "DateRangeValidator";

/// The start date must not be after the end date.
///
/// Both elements must hold dates and carry a converter. The rule only
/// compares once both elements are individually valid and hold a date, so it
/// never duplicates their own messages.
#[derive(Debug, Clone)]
pub struct DateRangeValidator {
    start_id: String,
    end_id: String,
    allow_same_date: bool,
}

impl DateRangeValidator {
    pub fn new(start_id: impl Into<String>, end_id: impl Into<String>) -> Self {
        Self {
            start_id: start_id.into(),
            end_id: end_id.into(),
            allow_same_date: true,
        }
    }

    /// Reject ranges that start and end on the same day.
    #[must_use]
    pub fn disallow_same_date(mut self) -> Self {
        self.allow_same_date = false;
        self
    }

    pub fn allows_same_date(&self) -> bool {
        self.allow_same_date
    }
}

fn date_element<'a>(form: &'a Form, id: &str) -> Result<&'a Element> {
    let element = form.require_element(id)?;
    let reason = if element.value_type() != Some(ValueType::Date) {
        Some("does not hold dates")
    } else if element.converter().is_none() {
        Some("has no converter")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(FormError::InvalidValidatorTarget {
            validator: VALIDATOR_NAME,
            element: id.to_string(),
            reason,
        }),
        None => Ok(element),
    }
}

fn label(form: &Form, element: &Element) -> String {
    element
        .translated_label(form.translation())
        .unwrap_or_else(|| element.id().to_string())
}

impl FormValidator for DateRangeValidator {
    fn validate(&self, form: &Form, _data: &FormData) -> Result<Vec<String>> {
        let start = date_element(form, &self.start_id)?;
        let end = date_element(form, &self.end_id)?;

        let translation = form.translation();
        if !start.is_valid(translation) || !end.is_valid(translation) {
            return Ok(Vec::new());
        }
        let (TypedValue::Date(start_date), TypedValue::Date(end_date)) =
            (start.converted_value()?, end.converted_value()?)
        else {
            return Ok(Vec::new());
        };

        let code = if start_date > end_date {
            DATE_RANGE_INVALID
        } else if start_date == end_date && !self.allow_same_date {
            DATE_RANGE_SAME
        } else {
            return Ok(Vec::new());
        };
        let (start_label, end_label) = (label(form, start), label(form, end));
        Ok(vec![translation.message(code, &[&start_label, &end_label])])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{date_picker, input};

    fn form(start: &str, end: &str) -> Form {
        let mut form = Form::new();
        form.add_element(date_picker("from").with_label("From").with_value(start))
            .unwrap();
        form.add_element(date_picker("to").with_value(end)).unwrap();
        form
    }

    fn check(validator: &DateRangeValidator, form: &Form) -> Result<Vec<String>> {
        validator.validate(form, &form.data_multivalue()?)
    }

    #[test]
    fn test_range_order() {
        let validator = DateRangeValidator::new("from", "to");
        assert!(check(&validator, &form("2024-01-01", "2024-01-31")).unwrap().is_empty());
        assert!(check(&validator, &form("2024-01-01", "2024-01-01")).unwrap().is_empty());
        assert_eq!(
            check(&validator, &form("2024-02-01", "2024-01-31")).unwrap(),
            vec!["Invalid date range for 'From' and 'to'".to_string()]
        );
    }

    #[test]
    fn test_same_date_disallowed() {
        let validator = DateRangeValidator::new("from", "to").disallow_same_date();
        assert_eq!(
            check(&validator, &form("2024-01-01", "2024-01-01")).unwrap(),
            vec!["Same date is not allowed for 'From' and 'to'".to_string()]
        );
    }

    #[test]
    fn test_skips_invalid_or_missing_dates() {
        let validator = DateRangeValidator::new("from", "to");
        assert!(check(&validator, &form("not a date", "2024-01-31")).unwrap().is_empty());
        assert!(check(&validator, &form("", "2024-01-31")).unwrap().is_empty());
    }

    #[test]
    fn test_target_checks() {
        let mut form = form("2024-01-01", "2024-01-02");
        form.add_element(input("note")).unwrap();

        let error = check(&DateRangeValidator::new("from", "missing"), &form).unwrap_err();
        assert!(matches!(error, FormError::ElementNotFound { .. }));

        let error = check(&DateRangeValidator::new("from", "note"), &form).unwrap_err();
        assert!(matches!(
            error,
            FormError::InvalidValidatorTarget { reason: "does not hold dates", .. }
        ));
    }
}
