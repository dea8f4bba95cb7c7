//! Translators resolve a message code for one locale.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use crate::catalog::MessageCatalog;
use crate::embedded;
use crate::error::Result;
use crate::locale::Locale;

static EMBEDDED: LazyLock<Arc<CatalogTranslator>> = LazyLock::new(|| {
    Arc::new(CatalogTranslator::embedded().expect("embedded catalogs are valid TOML"))
});

/// Resolves message patterns.
///
/// `lookup` answers for exactly the given locale; the fallback chain lives in
/// [`Translation`](crate::Translation).
pub trait Translator: Send + Sync {
    /// The pattern for `code` in `locale`, if this translator has one.
    fn lookup(&self, code: &str, locale: &Locale) -> Option<String>;

    /// The locale consulted when every other locale misses.
    fn base_locale(&self) -> Locale {
        Locale::english()
    }
}

/// A translator backed by in-memory catalogs, one per locale.
#[derive(Debug, Clone)]
pub struct CatalogTranslator {
    catalogs: HashMap<Locale, MessageCatalog>,
    base: Locale,
}

impl CatalogTranslator {
    /// Create a translator without catalogs.
    pub fn new(base: Locale) -> Self {
        Self {
            catalogs: HashMap::new(),
            base,
        }
    }

    /// Create a translator holding the built-in catalogs.
    pub fn embedded() -> Result<Self> {
        let mut translator = Self::new(Locale::english());
        for catalog in embedded::catalogs()? {
            translator.add_catalog(catalog);
        }
        Ok(translator)
    }

    /// Shared instance of [`embedded`](Self::embedded), parsed once.
    pub fn shared() -> Arc<CatalogTranslator> {
        Arc::clone(&EMBEDDED)
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: MessageCatalog) -> Self {
        self.add_catalog(catalog);
        self
    }

    /// Add a catalog, merging it into an existing catalog of the same locale.
    pub fn add_catalog(&mut self, catalog: MessageCatalog) {
        match self.catalogs.get_mut(catalog.locale()) {
            Some(existing) => existing.merge(catalog),
            None => {
                tracing::debug!(locale = %catalog.locale(), messages = catalog.len(), "catalog added");
                self.catalogs.insert(catalog.locale().clone(), catalog);
            }
        }
    }

    pub fn catalog(&self, locale: &Locale) -> Option<&MessageCatalog> {
        self.catalogs.get(locale)
    }

    /// Locales with a catalog, sorted.
    pub fn locales(&self) -> Vec<&Locale> {
        let mut locales: Vec<&Locale> = self.catalogs.keys().collect();
        locales.sort();
        locales
    }
}

impl Translator for CatalogTranslator {
    fn lookup(&self, code: &str, locale: &Locale) -> Option<String> {
        self.catalogs
            .get(locale)
            .and_then(|catalog| catalog.get(code))
            .map(str::to_string)
    }

    fn base_locale(&self) -> Locale {
        self.base.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_exact_locale_only() {
        let translator = CatalogTranslator::new(Locale::english())
            .with_catalog(MessageCatalog::new(Locale::new("es")).with_message("hi", "hola"));
        assert_eq!(translator.lookup("hi", &Locale::new("es")), Some("hola".to_string()));
        assert_eq!(translator.lookup("hi", &Locale::new("es-mx")), None);
        assert_eq!(translator.lookup("hi", &Locale::english()), None);
    }

    #[test]
    fn test_catalogs_merge_per_locale() {
        let translator = CatalogTranslator::new(Locale::english())
            .with_catalog(MessageCatalog::new(Locale::english()).with_message("a", "1"))
            .with_catalog(MessageCatalog::new(Locale::english()).with_message("b", "2"));
        assert_eq!(translator.locales().len(), 1);
        assert_eq!(translator.lookup("a", &Locale::english()), Some("1".to_string()));
        assert_eq!(translator.lookup("b", &Locale::english()), Some("2".to_string()));
    }

    #[test]
    fn test_shared_has_builtin_locales() {
        let shared = CatalogTranslator::shared();
        let locales: Vec<&str> = shared.locales().into_iter().map(Locale::as_str).collect();
        assert_eq!(locales, vec!["en", "es"]);
    }
}
