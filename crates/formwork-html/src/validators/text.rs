//! Textual value rules.

use std::collections::BTreeSet;
use std::fmt;

use formwork_core::{Element, FormError, Result, Validator};
use formwork_i18n::Translation;
use regex::Regex;

use super::{
    ALNUM_INVALID, IN_SET_INVALID, REGEX_INVALID, STRING_LENGTH_MAX, STRING_LENGTH_MIN,
    present_value,
};

// =============================================================================
// REGEX
// =============================================================================

/// The whole value must match a pattern.
#[derive(Clone)]
pub struct RegexValidator {
    pattern: String,
    regex: Regex,
}

impl fmt::Debug for RegexValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegexValidator")
            .field("pattern", &self.pattern)
            .finish()
    }
}

impl RegexValidator {
    /// Compile `pattern`, anchored at both ends.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidPattern`] when the pattern does not compile.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
            FormError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            }
        })?;
        Ok(Self { pattern, regex })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Validator for RegexValidator {
    fn validate(
        &self,
        _element: &Element,
        values: &[Option<String>],
        translation: &Translation,
    ) -> Vec<String> {
        match present_value(values) {
            Some(value) if !self.regex.is_match(value) => {
                vec![translation.message(REGEX_INVALID, &[])]
            }
            _ => Vec::new(),
        }
    }

    fn breaks_chain_on_error(&self) -> bool {
        true
    }
}

// =============================================================================
// STRING LENGTH
// =============================================================================

/// Bounds on the number of characters of the value.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringLengthValidator {
    min: Option<usize>,
    max: Option<usize>,
}

impl StringLengthValidator {
    pub fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Self { min, max }
    }

    pub fn min(min: usize) -> Self {
        Self::new(Some(min), None)
    }

    pub fn max(max: usize) -> Self {
        Self::new(None, Some(max))
    }
}

impl Validator for StringLengthValidator {
    fn validate(
        &self,
        _element: &Element,
        values: &[Option<String>],
        translation: &Translation,
    ) -> Vec<String> {
        let Some(value) = present_value(values) else {
            return Vec::new();
        };
        let length = value.chars().count();
        let mut errors = Vec::new();
        if let Some(min) = self.min
            && length < min
        {
            errors.push(translation.message(STRING_LENGTH_MIN, &[&min]));
        }
        if let Some(max) = self.max
            && length > max
        {
            errors.push(translation.message(STRING_LENGTH_MAX, &[&max]));
        }
        errors
    }
}

// =============================================================================
// ALPHANUMERIC
// =============================================================================

/// Only ASCII letters and digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphanumericValidator;

impl Validator for AlphanumericValidator {
    fn validate(
        &self,
        _element: &Element,
        values: &[Option<String>],
        translation: &Translation,
    ) -> Vec<String> {
        match present_value(values) {
            Some(value) if !value.chars().all(|ch| ch.is_ascii_alphanumeric()) => {
                vec![translation.message(ALNUM_INVALID, &[])]
            }
            _ => Vec::new(),
        }
    }
}

// =============================================================================
// IN SET
// =============================================================================

/// Every value must belong to a fixed set.
#[derive(Debug, Clone, Default)]
pub struct InSetValidator {
    allowed: BTreeSet<String>,
}

impl InSetValidator {
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    pub fn allowed(&self) -> impl Iterator<Item = &str> {
        self.allowed.iter().map(String::as_str)
    }
}

impl Validator for InSetValidator {
    fn validate(
        &self,
        _element: &Element,
        values: &[Option<String>],
        translation: &Translation,
    ) -> Vec<String> {
        if present_value(values).is_none() {
            return Vec::new();
        }
        values
            .iter()
            .flatten()
            .find(|value| !self.allowed.contains(value.as_str()))
            .map(|value| vec![translation.message(IN_SET_INVALID, &[value])])
            .unwrap_or_default()
    }

    fn breaks_chain_on_error(&self) -> bool {
        true
    }
}
