//! Input filters.
//!
//! Filters run when a value is written to an element, in the order they were
//! added. Closures of type `Fn(&str) -> String` are filters too.

use std::sync::LazyLock;

use regex::Regex;

/// Control characters other than carriage return, line feed and tab.
static CONTROL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{Cc}&&[^\r\n\t]]").expect("Invalid regex"));

/// A pure string transform applied to incoming values.
pub trait Filter: Send + Sync {
    fn filter(&self, value: &str) -> String;
}

impl<F> Filter for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn filter(&self, value: &str) -> String {
        self(value)
    }
}

/// Removes leading and trailing whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringTrim;

impl Filter for StringTrim {
    fn filter(&self, value: &str) -> String {
        value.trim().to_string()
    }
}

/// Removes control characters, keeping `\r`, `\n` and `\t`.
#[derive(Debug, Clone, Default)]
pub struct RemoveControlCharacters {
    replacement: String,
}

impl RemoveControlCharacters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace each control character with `replacement` instead of dropping it.
    #[must_use]
    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = replacement.into();
        self
    }
}

impl Filter for RemoveControlCharacters {
    fn filter(&self, value: &str) -> String {
        CONTROL_CHARS
            .replace_all(value, regex::NoExpand(&self.replacement))
            .into_owned()
    }
}
