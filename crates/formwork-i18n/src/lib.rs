//! Message lookup and formatting for formwork.
//!
//! Validators and decorators never hard-code user-facing text. They ask a
//! [`Translation`] context for a message code and receive the pattern of the
//! best matching locale, formatted with positional arguments.
//!
//! # Module Organization
//!
//! - [`locale`]: Normalized language tags
//! - [`catalog`]: Message catalogs parsed from TOML
//! - [`embedded`]: Built-in catalogs compiled into the binary
//! - [`translator`]: The [`Translator`] trait and [`CatalogTranslator`]
//! - [`context`]: The [`Translation`] context passed to render and validate calls
//! - [`format`]: Positional argument substitution
//!
//! # Fallback order
//!
//! A lookup tries the requested locale, then its base language, then the
//! context locale, then the translator's base locale. When every step misses,
//! callers fall back to a literal default (usually the code itself).

pub mod catalog;
pub mod context;
pub mod embedded;
pub mod error;
pub mod format;
pub mod locale;
pub mod translator;

pub use catalog::MessageCatalog;
pub use context::Translation;
pub use error::{I18nError, Result};
pub use format::format_message;
pub use locale::Locale;
pub use translator::{CatalogTranslator, Translator};
