//! Loading catalogs from disk and layering them over the built-in messages.

use std::io::Write;
use std::sync::Arc;

use formwork_i18n::{CatalogTranslator, I18nError, Locale, MessageCatalog, Translation};

#[test]
fn file_catalog_overrides_builtin_messages() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "locale = \"en\"\n\n[messages]\n\"validators.required.invalid\" = \"Please fill in this field\"\n\"app.title\" = \"Sign up\""
    )
    .unwrap();

    let catalog = MessageCatalog::from_path(file.path()).unwrap();
    let translator = CatalogTranslator::embedded().unwrap().with_catalog(catalog);
    let translation = Translation::new(Arc::new(translator), Locale::english());

    assert_eq!(
        translation.message("validators.required.invalid", &[]),
        "Please fill in this field"
    );
    assert_eq!(translation.message("app.title", &[]), "Sign up");
    assert_eq!(
        translation.message("validators.select.invalid", &[]),
        "Invalid value selected"
    );
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let error = MessageCatalog::from_path(&path).unwrap_err();
    assert!(matches!(error, I18nError::Io { .. }));
    assert!(error.to_string().contains("absent.toml"));
}

#[test]
fn builtin_messages_format_arguments() {
    let translation = Translation::default();
    assert_eq!(
        translation.message("validators.stringlength.max", &[&10]),
        "Must be at most 10 characters long"
    );
    assert_eq!(
        translation.message("formvalidators.daterange.invalid", &[&"Start", &"End"]),
        "Invalid date range for 'Start' and 'End'"
    );
}
