//! Rules for choice elements, checked against the element's own options.

use std::collections::HashSet;

use formwork_core::{Element, Validator};
use formwork_i18n::Translation;

use super::{
    MULTISELECT_INVALID, MULTISELECT_REPEATED, NUMBER_OF_OPTIONS_MAX, NUMBER_OF_OPTIONS_MIN,
    SELECT_INVALID, present_value,
};

/// The value must be one of the enabled options.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleOptionValidator;

impl Validator for SingleOptionValidator {
    fn validate(
        &self,
        element: &Element,
        values: &[Option<String>],
        translation: &Translation,
    ) -> Vec<String> {
        match present_value(values) {
            Some(value) if !element.options().has_value_enabled(value) => {
                vec![translation.message(SELECT_INVALID, &[])]
            }
            _ => Vec::new(),
        }
    }

    fn breaks_chain_on_error(&self) -> bool {
        true
    }
}

/// Every value must be a distinct enabled option.
///
/// An empty list, or a list holding a single empty value, passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultipleOptionValidator;

impl Validator for MultipleOptionValidator {
    fn validate(
        &self,
        element: &Element,
        values: &[Option<String>],
        translation: &Translation,
    ) -> Vec<String> {
        if values.is_empty() || (values.len() == 1 && present_value(values).is_none()) {
            return Vec::new();
        }
        let options = element.options();
        let mut seen = HashSet::with_capacity(values.len());
        let mut errors = Vec::new();
        for value in values {
            let Some(value) = value.as_deref().filter(|value| options.has_value_enabled(value))
            else {
                errors.push(translation.message(MULTISELECT_INVALID, &[]));
                break;
            };
            if !seen.insert(value) {
                errors.push(translation.message(MULTISELECT_REPEATED, &[]));
                break;
            }
        }
        errors
    }

    fn breaks_chain_on_error(&self) -> bool {
        true
    }
}

/// Bounds on the number of distinct selected values.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberOfSelectedOptionsValidator {
    min: Option<usize>,
    max: Option<usize>,
}

impl NumberOfSelectedOptionsValidator {
    pub fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Self { min, max }
    }
}

impl Validator for NumberOfSelectedOptionsValidator {
    fn validate(
        &self,
        _element: &Element,
        values: &[Option<String>],
        translation: &Translation,
    ) -> Vec<String> {
        let selected = values
            .iter()
            .filter_map(Option::as_deref)
            .filter(|value| !value.is_empty())
            .collect::<HashSet<_>>()
            .len();
        if let Some(min) = self.min
            && selected < min
        {
            return vec![translation.message(NUMBER_OF_OPTIONS_MIN, &[&min])];
        }
        if let Some(max) = self.max
            && selected > max
        {
            return vec![translation.message(NUMBER_OF_OPTIONS_MAX, &[&max])];
        }
        Vec::new()
    }

    fn breaks_chain_on_error(&self) -> bool {
        true
    }
}
