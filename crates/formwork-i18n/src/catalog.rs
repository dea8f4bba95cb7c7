//! Message catalogs.
//!
//! A catalog maps message codes to patterns for one locale. Catalogs are
//! written in TOML:
//!
//! ```toml
//! locale = "es"
//!
//! [messages]
//! "validators.required.invalid" = "Se requiere un valor"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{I18nError, Result};
use crate::locale::Locale;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    locale: String,
    #[serde(default)]
    messages: BTreeMap<String, String>,
}

/// Message patterns for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    locale: Locale,
    messages: BTreeMap<String, String>,
}

impl MessageCatalog {
    /// Create an empty catalog.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            messages: BTreeMap::new(),
        }
    }

    /// Parse a catalog from TOML text. `origin` names the source in errors.
    pub fn from_toml_str(text: &str, origin: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(text).map_err(|source| I18nError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        let locale = Locale::new(&file.locale);
        if locale.is_empty() {
            return Err(I18nError::EmptyLocale {
                origin: origin.to_string(),
            });
        }
        Ok(Self {
            locale,
            messages: file.messages,
        })
    }

    /// Read and parse a catalog file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| I18nError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, &path.display().to_string())
    }

    #[must_use]
    pub fn with_message(mut self, code: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.insert(code, pattern);
        self
    }

    pub fn insert(&mut self, code: impl Into<String>, pattern: impl Into<String>) {
        self.messages.insert(code.into(), pattern.into());
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.messages.get(code).map(String::as_str)
    }

    /// Copy every message of `other` into this catalog, overriding duplicates.
    pub fn merge(&mut self, other: MessageCatalog) {
        self.messages.extend(other.messages);
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog() {
        let catalog = MessageCatalog::from_toml_str(
            "locale = \"ES_mx\"\n[messages]\n\"a.b\" = \"hola\"\n",
            "inline",
        )
        .unwrap();
        assert_eq!(catalog.locale(), &Locale::new("es-mx"));
        assert_eq!(catalog.get("a.b"), Some("hola"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_missing_locale_is_error() {
        let error = MessageCatalog::from_toml_str("[messages]\n", "inline").unwrap_err();
        assert!(matches!(error, I18nError::Parse { .. }));
    }

    #[test]
    fn test_blank_locale_is_error() {
        let error = MessageCatalog::from_toml_str("locale = \" \"\n", "inline").unwrap_err();
        assert!(matches!(error, I18nError::EmptyLocale { .. }));
    }

    #[test]
    fn test_merge_overrides() {
        let mut base = MessageCatalog::new(Locale::english()).with_message("x", "one");
        base.merge(
            MessageCatalog::new(Locale::english())
                .with_message("x", "two")
                .with_message("y", "three"),
        );
        assert_eq!(base.get("x"), Some("two"));
        assert_eq!(base.get("y"), Some("three"));
    }
}
