//! Whole-form validation.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::Serialize;

use crate::error::Result;
use crate::form::Form;

/// Report key under which form-level messages are stored.
pub const FORM_LEVEL_KEY: &str = "@form";

/// Validation messages keyed by element id, plus [`FORM_LEVEL_KEY`] for
/// messages produced by form validators. Only failing entries are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record messages for `key`. Empty lists are ignored.
    pub fn insert(&mut self, key: impl Into<String>, messages: Vec<String>) {
        if messages.is_empty() {
            return;
        }
        self.errors.entry(key.into()).or_default().extend(messages);
    }

    pub fn element_errors(&self, id: &str) -> Option<&[String]> {
        self.errors.get(id).map(Vec::as_slice)
    }

    pub fn form_errors(&self) -> Option<&[String]> {
        self.element_errors(FORM_LEVEL_KEY)
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of messages.
    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<String>> {
        self.errors.iter()
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = btree_map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl Form {
    /// Validate every element with a value type, then the form validators.
    ///
    /// Form validators only run when the form has any, and receive one
    /// multi-value data snapshot taken after element validation.
    ///
    /// # Errors
    ///
    /// Fails when data extraction fails or a form validator is misconfigured.
    /// Validation failures themselves end up in the report.
    pub fn validate(&self) -> Result<ValidationReport> {
        let mut report = ValidationReport::new();
        for element in self.elements() {
            if element.value_type().is_none() {
                continue;
            }
            report.insert(element.id(), element.validate(&self.translation));
        }
        report.insert(FORM_LEVEL_KEY, self.form_level_errors()?);
        self.validation_performed.set(true);

        tracing::debug!(
            elements = self.len(),
            errors = report.error_count(),
            "form validated"
        );
        Ok(report)
    }

    /// Whether [`validate`](Self::validate) reports no messages.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn is_valid(&self) -> Result<bool> {
        Ok(self.validate()?.is_valid())
    }

    /// Run only the form validators.
    ///
    /// # Errors
    ///
    /// Fails when data extraction fails or a validator is misconfigured.
    pub fn form_level_errors(&self) -> Result<Vec<String>> {
        if self.validators.is_empty() {
            return Ok(Vec::new());
        }
        let data = self.data_multivalue()?;
        let mut errors = Vec::new();
        for validator in &self.validators {
            let found = validator.validate(self, &data)?;
            let failed = !found.is_empty();
            errors.extend(found);
            if failed && validator.breaks_chain_on_error() {
                break;
            }
        }
        Ok(errors)
    }

    /// Whether [`validate`](Self::validate) ran since the last reset.
    pub fn validation_performed(&self) -> bool {
        self.validation_performed.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_skips_empty_lists() {
        let mut report = ValidationReport::new();
        report.insert("a", Vec::new());
        assert!(report.is_valid());
        report.insert("a", vec!["one".into()]);
        report.insert("a", vec!["two".into()]);
        report.insert(FORM_LEVEL_KEY, vec!["form".into()]);
        assert_eq!(report.element_errors("a").map(<[String]>::len), Some(2));
        assert_eq!(report.form_errors(), Some(&["form".to_string()][..]));
        assert_eq!(report.error_count(), 3);
    }
}
