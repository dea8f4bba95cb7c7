//! Form processing pipeline with explicit stages.
//!
//! 1. **Load**: parse the TOML definition and build the form
//! 2. **Populate**: read submitted JSON data into the form
//! 3. **Validate**: run element and form rules
//!
//! Rendering happens on the returned [`HtmlForm`].

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result, bail};
use formwork_core::form::mapping::record_data;
use formwork_core::{FormData, ValidationReport};
use formwork_html::HtmlForm;
use formwork_i18n::Locale;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::definition::FormDefinition;
use crate::logging::redact_value;

/// A built form and the definition it came from.
#[derive(Debug)]
pub struct LoadedForm {
    pub definition: FormDefinition,
    pub form: HtmlForm,
}

/// Load a definition file and build its form. `locale` overrides the
/// definition locale.
pub fn load(path: &Path, locale: Option<&str>) -> Result<LoadedForm> {
    let definition = FormDefinition::from_path(path)?;
    let mut form = definition
        .build()
        .with_context(|| format!("build form from {}", path.display()))?;
    if let Some(locale) = locale {
        form.set_locale(Locale::new(locale));
    }
    info!(
        path = %path.display(),
        elements = definition.element_count(),
        "form loaded"
    );
    Ok(LoadedForm { definition, form })
}

/// Read submitted data from a JSON object file.
pub fn read_data(path: &Path) -> Result<FormData> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_data(&text).with_context(|| format!("parse data in {}", path.display()))
}

/// Parse submitted data from JSON text.
///
/// Arrays become multiple values, `null` clears a field and other scalars
/// populate as their text.
pub fn parse_data(text: &str) -> Result<FormData> {
    let value: Value = serde_json::from_str(text).context("invalid JSON")?;
    if !value.is_object() {
        bail!("submitted data must be a JSON object");
    }
    Ok(record_data(&value)?)
}

/// Populate `form` and return the submitted names no element accepts.
pub fn populate(form: &mut HtmlForm, data: &FormData) -> Result<Vec<String>> {
    form.populate(data).context("populate form")?;
    let known: BTreeSet<&str> = form
        .elements()
        .filter(|element| element.value_type().is_some())
        .filter_map(|element| element.name())
        .collect();
    let unknown: Vec<String> = data
        .keys()
        .filter(|name| !known.contains(name.as_str()))
        .cloned()
        .collect();
    for name in &unknown {
        warn!(name = %name, "submitted name matches no element");
    }
    for (name, values) in data {
        if known.contains(name.as_str()) {
            let shown: Vec<&str> = values
                .iter()
                .map(|value| redact_value(value.as_deref().unwrap_or("")))
                .collect();
            debug!(name = %name, values = ?shown, "value submitted");
        }
    }
    Ok(unknown)
}

/// Validate `form`, logging the outcome.
pub fn validate(form: &HtmlForm) -> Result<ValidationReport> {
    let report = form.validate().context("validate form")?;
    if report.is_valid() {
        info!("form is valid");
    } else {
        info!(errors = report.error_count(), "form is invalid");
    }
    Ok(report)
}
