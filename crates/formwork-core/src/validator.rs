//! Validation rules.
//!
//! Element rules receive the element and its current values; form rules
//! receive the whole form and its multi-value data snapshot. Both follow the
//! same chain semantics: messages accumulate in order, and a rule whose
//! [`breaks_chain_on_error`](Validator::breaks_chain_on_error) is true stops
//! the chain as soon as it reports anything.

use formwork_i18n::Translation;

use crate::element::Element;
use crate::error::Result;
use crate::form::{Form, FormData};

/// A rule evaluated against one element's values.
pub trait Validator: Send + Sync {
    /// Messages describing why `values` are invalid. Empty means valid.
    fn validate(
        &self,
        element: &Element,
        values: &[Option<String>],
        translation: &Translation,
    ) -> Vec<String>;

    /// Whether later rules are skipped once this one reports errors.
    fn breaks_chain_on_error(&self) -> bool {
        false
    }
}

/// A rule evaluated against a whole form.
pub trait FormValidator: Send + Sync {
    /// Messages describing why `data` is invalid.
    ///
    /// # Errors
    ///
    /// Returns an error when the rule is misconfigured for this form.
    fn validate(&self, form: &Form, data: &FormData) -> Result<Vec<String>>;

    fn breaks_chain_on_error(&self) -> bool {
        false
    }
}

/// Message code used by [`RequiredValidator`].
pub const REQUIRED_MESSAGE: &str = "validators.required.invalid";

/// Fails when no value is present or any value is blank.
///
/// Elements flagged as required run this rule before their own validators.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredValidator;

impl RequiredValidator {
    /// Check a value list without producing messages.
    pub fn is_missing(values: &[Option<String>]) -> bool {
        values.is_empty()
            || values
                .iter()
                .any(|value| value.as_deref().is_none_or(|text| text.trim().is_empty()))
    }
}

impl Validator for RequiredValidator {
    fn validate(
        &self,
        _element: &Element,
        values: &[Option<String>],
        translation: &Translation,
    ) -> Vec<String> {
        if Self::is_missing(values) {
            vec![translation.message(REQUIRED_MESSAGE, &[])]
        } else {
            Vec::new()
        }
    }

    fn breaks_chain_on_error(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(items: &[Option<&str>]) -> Vec<Option<String>> {
        items.iter().map(|item| item.map(str::to_string)).collect()
    }

    #[test]
    fn test_missing_values() {
        assert!(RequiredValidator::is_missing(&[]));
        assert!(RequiredValidator::is_missing(&values(&[None])));
        assert!(RequiredValidator::is_missing(&values(&[Some("  ")])));
        assert!(RequiredValidator::is_missing(&values(&[Some("a"), Some("")])));
        assert!(!RequiredValidator::is_missing(&values(&[Some("a"), Some("b")])));
    }

    #[test]
    fn test_required_breaks_chain() {
        assert!(RequiredValidator.breaks_chain_on_error());
    }
}
