//! Normalized language tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A language tag such as `en`, `es` or `es-mx`.
///
/// Tags are trimmed, lower-cased and use `-` as separator, so `es_MX` and
/// `es-mx` are the same locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self(tag.as_ref().trim().replace('_', "-").to_lowercase())
    }

    /// The locale every built-in catalog provides.
    pub fn english() -> Self {
        Self::new("en")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The language part of the tag (`es` for `es-mx`).
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// The base-language locale, if this tag carries a region.
    pub fn parent(&self) -> Option<Locale> {
        let language = self.language();
        (language != self.0).then(|| Locale(language.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

impl From<String> for Locale {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Locale {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<Locale> for String {
    fn from(value: Locale) -> Self {
        value.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        assert_eq!(Locale::new(" es_MX "), Locale::new("es-mx"));
        assert_eq!(Locale::new("EN").as_str(), "en");
    }

    #[test]
    fn test_language_and_parent() {
        let locale = Locale::new("es-MX");
        assert_eq!(locale.language(), "es");
        assert_eq!(locale.parent(), Some(Locale::new("es")));
        assert_eq!(Locale::new("es").parent(), None);
    }
}
