//! The translation context handed to render and validate calls.

use std::fmt;
use std::sync::Arc;

use crate::format::format_message;
use crate::locale::Locale;
use crate::translator::{CatalogTranslator, Translator};

/// A translator paired with the locale of the current request.
#[derive(Clone)]
pub struct Translation {
    translator: Arc<dyn Translator>,
    locale: Locale,
}

impl fmt::Debug for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translation")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl Default for Translation {
    /// Built-in catalogs, English.
    fn default() -> Self {
        Self::new(CatalogTranslator::shared(), Locale::english())
    }
}

impl Translation {
    pub fn new(translator: Arc<dyn Translator>, locale: Locale) -> Self {
        Self { translator, locale }
    }

    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn translator(&self) -> &Arc<dyn Translator> {
        &self.translator
    }

    fn candidates(&self, requested: Option<&Locale>) -> Vec<Locale> {
        let mut chain: Vec<Locale> = Vec::with_capacity(5);
        let mut push = |locale: Locale| {
            if !locale.is_empty() && !chain.contains(&locale) {
                chain.push(locale);
            }
        };
        for locale in requested.into_iter().chain(std::iter::once(&self.locale)) {
            push(locale.clone());
            if let Some(parent) = locale.parent() {
                push(parent);
            }
        }
        push(self.translator.base_locale());
        chain
    }

    /// The raw pattern for `code`, walking the fallback chain.
    pub fn translation_string(&self, code: &str, requested: Option<&Locale>) -> Option<String> {
        self.candidates(requested)
            .iter()
            .find_map(|locale| self.translator.lookup(code, locale))
    }

    /// Translate `code` for the context locale.
    pub fn translate(&self, code: &str, args: &[&dyn fmt::Display]) -> Option<String> {
        self.translation_string(code, None)
            .map(|pattern| format_message(&pattern, args))
    }

    /// Translate `code` for a specific locale, falling back to the context locale.
    pub fn translate_in(
        &self,
        code: &str,
        locale: &Locale,
        args: &[&dyn fmt::Display],
    ) -> Option<String> {
        self.translation_string(code, Some(locale))
            .map(|pattern| format_message(&pattern, args))
    }

    /// Translate `code`, formatting `default` instead when no locale has it.
    pub fn translate_or(&self, code: &str, default: &str, args: &[&dyn fmt::Display]) -> String {
        let pattern = self
            .translation_string(code, None)
            .unwrap_or_else(|| default.to_string());
        format_message(&pattern, args)
    }

    /// Translate `code`, falling back to the code itself.
    pub fn message(&self, code: &str, args: &[&dyn fmt::Display]) -> String {
        self.translate_or(code, code, args)
    }
}
