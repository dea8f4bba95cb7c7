//! TOML form definitions.
//!
//! A definition lists the form attributes, an optional locale and a tree of
//! fields. A field of kind `group` opens a decorator scope wrapping its own
//! fields in a tag; every other kind names an HTML element kind.
//!
//! ```toml
//! locale = "en"
//!
//! [attributes]
//! action = "/signup"
//!
//! [[fields]]
//! kind = "input"
//! id = "email"
//! label = "Email"
//! required = true
//! validators = [{ rule = "regex", pattern = "[^@]+@[^@]+" }]
//!
//! [[fields]]
//! kind = "group"
//! id = "dates"
//! tag = "fieldset"
//!
//! [[fields.fields]]
//! kind = "date-picker"
//! id = "from"
//!
//! [[validators]]
//! rule = "date-range"
//! start = "from"
//! end = "to"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use formwork_core::{Element, Form, FormError, OptionGroup, SelectOption, Validator};
use formwork_html::elements::{self, set_date_format};
use formwork_html::validators::{
    AlphanumericValidator, DateRangeValidator, DateValidator, InSetValidator, NumericValidator,
    NumberOfSelectedOptionsValidator, RegexValidator, StringLengthValidator,
};
use formwork_html::{HtmlForm, HtmlTagDecorator};
use formwork_i18n::Locale;
use formwork_model::{Tag, ValueType};
use serde::Deserialize;
use thiserror::Error;

/// Kind name of the field grouping other fields.
pub const GROUP_KIND: &str = "group";

/// Element kinds a field may name.
pub const FIELD_KINDS: [&str; 12] = [
    "input",
    "password",
    "textarea",
    "hidden",
    "checkbox",
    "date-picker",
    "button",
    "select",
    "multiselect",
    "radio",
    "multicheckbox",
    "static-html",
];

// =============================================================================
// ERRORS
// =============================================================================

/// Errors raised while loading or building a definition.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DefinitionError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid form definition in {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Field '{id}' has unknown kind '{kind}'")]
    UnknownKind { id: String, kind: String },

    /// Abstract kinds such as `choice` only exist as defaults targets.
    #[error("Field '{id}' uses abstract kind '{kind}'")]
    AbstractKind { id: String, kind: String },

    #[error("Field '{id}' of kind '{kind}' does not support {feature}")]
    Unsupported {
        id: String,
        kind: String,
        feature: &'static str,
    },

    #[error(transparent)]
    Form(#[from] FormError),
}

pub type Result<T> = std::result::Result<T, DefinitionError>;

// =============================================================================
// SCHEMA
// =============================================================================

/// A complete form definition.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormDefinition {
    /// Locale of rendered and validation messages.
    #[serde(default)]
    pub locale: Option<String>,
    /// Translate labels and descriptions of every element.
    #[serde(default)]
    pub auto_translate: bool,
    /// Attributes of the `<form>` tag.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
    /// Form-level rules.
    #[serde(default)]
    pub validators: Vec<FormRuleDefinition>,
}

/// An element, or a group of fields when `kind = "group"`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDefinition {
    pub kind: String,
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Overrides the `name` property, which defaults to the id.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value_type: Option<ValueType>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub translate: Option<bool>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub hints: BTreeMap<String, String>,
    /// Chrono format of date pickers.
    #[serde(default)]
    pub date_format: Option<String>,
    #[serde(default)]
    pub options: Vec<OptionDefinition>,
    #[serde(default)]
    pub option_groups: Vec<OptionGroupDefinition>,
    #[serde(default)]
    pub validators: Vec<RuleDefinition>,
    /// Tag name of groups and static HTML. Groups default to `div`.
    #[serde(default)]
    pub tag: Option<String>,
    /// Content of static HTML, escaped unless `raw` is set.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub raw: bool,
    /// Fields of a group.
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionDefinition {
    pub value: String,
    /// Display text, the value when absent.
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionGroupDefinition {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub options: Vec<OptionDefinition>,
}

/// Element rules, tagged by `rule`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "rule", rename_all = "kebab-case", deny_unknown_fields)]
pub enum RuleDefinition {
    Regex {
        pattern: String,
    },
    Length {
        min: Option<usize>,
        max: Option<usize>,
    },
    Numeric {
        #[serde(default)]
        decimals: bool,
        at_least: Option<f64>,
        greater_than: Option<f64>,
        at_most: Option<f64>,
        less_than: Option<f64>,
    },
    Alphanumeric,
    InSet {
        values: Vec<String>,
    },
    Date {
        format: Option<String>,
    },
    SelectedCount {
        min: Option<usize>,
        max: Option<usize>,
    },
}

/// Form-level rules, tagged by `rule`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "rule", rename_all = "kebab-case", deny_unknown_fields)]
pub enum FormRuleDefinition {
    DateRange {
        start: String,
        end: String,
        #[serde(default = "default_true")]
        allow_same_date: bool,
    },
}

fn default_true() -> bool {
    true
}

// =============================================================================
// LOADING
// =============================================================================

impl FormDefinition {
    /// Parse a definition from TOML text. `origin` names the source in errors.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::Parse`] on invalid TOML or unknown fields.
    pub fn from_toml_str(text: &str, origin: &str) -> Result<Self> {
        toml::from_str(text).map_err(|source| DefinitionError::Parse {
            origin: origin.to_string(),
            source,
        })
    }

    /// Read and parse a definition file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| DefinitionError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, &path.display().to_string())
    }

    /// Number of element fields, groups excluded.
    pub fn element_count(&self) -> usize {
        fn count(fields: &[FieldDefinition]) -> usize {
            fields
                .iter()
                .map(|field| {
                    if field.kind == GROUP_KIND {
                        count(&field.fields)
                    } else {
                        1
                    }
                })
                .sum()
        }
        count(&self.fields)
    }

    /// Build the HTML form described by this definition.
    ///
    /// # Errors
    ///
    /// Fails on unknown kinds, invalid rule configuration and any form
    /// assembly error such as duplicate ids.
    pub fn build(&self) -> Result<HtmlForm> {
        let mut form = HtmlForm::new()?;
        for (key, value) in &self.attributes {
            form.set_property(key, value.as_str());
        }
        if let Some(locale) = &self.locale {
            form.set_locale(Locale::new(locale));
        }
        form.set_auto_enable_translation(self.auto_translate);
        add_fields(&mut form, &self.fields)?;
        for rule in &self.validators {
            match rule {
                FormRuleDefinition::DateRange {
                    start,
                    end,
                    allow_same_date,
                } => {
                    let mut validator = DateRangeValidator::new(start, end);
                    if !allow_same_date {
                        validator = validator.disallow_same_date();
                    }
                    form.add_validator(Arc::new(validator));
                }
            }
        }
        tracing::debug!(
            elements = form.len(),
            validators = form.validators().len(),
            "form definition built"
        );
        Ok(form)
    }
}

// =============================================================================
// BUILDING
// =============================================================================

fn add_fields(form: &mut Form, fields: &[FieldDefinition]) -> Result<()> {
    for field in fields {
        if field.kind == GROUP_KIND {
            let mut wrapper = HtmlTagDecorator::new(field.tag.as_deref().unwrap_or("div"));
            for (key, value) in &field.attributes {
                wrapper = wrapper.with_attribute(key, value);
            }
            form.start_decorator(field.id.as_str(), Box::new(wrapper))?;
            add_fields(form, &field.fields)?;
            form.end_decorator()?;
        } else {
            form.add_element(build_element(field)?)?;
        }
    }
    Ok(())
}

fn unsupported(field: &FieldDefinition, feature: &'static str) -> DefinitionError {
    DefinitionError::Unsupported {
        id: field.id.clone(),
        kind: field.kind.clone(),
        feature,
    }
}

fn base_element(field: &FieldDefinition) -> Result<Element> {
    let id = field.id.as_str();
    let element = match field.kind.as_str() {
        "input" => elements::input(id),
        "password" => elements::password(id),
        "textarea" => elements::textarea(id),
        "hidden" => elements::hidden(id),
        "checkbox" => elements::checkbox(id),
        "date-picker" => elements::date_picker(id),
        "button" => elements::button(id),
        "select" => elements::select(id),
        "multiselect" => elements::multiselect(id),
        "radio" => elements::radio(id),
        "multicheckbox" => elements::multicheckbox(id),
        "static-html" => {
            let mut tag = Tag::new(field.tag.as_deref().unwrap_or("div")).with_escape(!field.raw);
            if let Some(content) = &field.content {
                tag = tag.with_content(content);
            }
            elements::static_html(id, tag)
        }
        kind if elements::kind_by_name(kind).is_some() => {
            return Err(DefinitionError::AbstractKind {
                id: field.id.clone(),
                kind: field.kind.clone(),
            });
        }
        _ => {
            return Err(DefinitionError::UnknownKind {
                id: field.id.clone(),
                kind: field.kind.clone(),
            });
        }
    };
    Ok(element)
}

fn build_element(field: &FieldDefinition) -> Result<Element> {
    let mut element = base_element(field)?;

    if let Some(label) = &field.label {
        element.set_label(Some(label.clone()));
    }
    if let Some(description) = &field.description {
        element.set_description(Some(description.clone()));
    }
    if let Some(translate) = field.translate {
        element.set_translation_enabled(translate);
    }
    element.set_required(field.required);
    if let Some(name) = &field.name {
        element.set_property("name", name.as_str());
    }
    if let Some(value_type) = field.value_type {
        element.set_value_type(Some(value_type))?;
    }
    for (key, value) in &field.attributes {
        element.set_property(key, value.as_str());
    }
    for (key, value) in &field.hints {
        element.set_hint(key, value.as_str());
    }
    if let Some(format) = &field.date_format {
        if !element.kind().is_a(&elements::DATE_PICKER) {
            return Err(unsupported(field, "date formats"));
        }
        set_date_format(&mut element, format);
    }
    if let Some(value) = &field.value {
        element.set_value(value.as_str());
    }

    let has_options = !field.options.is_empty() || !field.option_groups.is_empty();
    if has_options && !element.kind().is_a(&elements::CHOICE) {
        return Err(unsupported(field, "options"));
    }
    for option in &field.options {
        element.options_mut().add_option(select_option(option))?;
    }
    for group in &field.option_groups {
        let mut built = OptionGroup::new(&group.id, &group.label);
        if group.disabled {
            built = built.disabled();
        }
        for option in &group.options {
            built = built.with_option(select_option(option));
        }
        element.options_mut().add_group(built)?;
    }

    for rule in &field.validators {
        element.add_validator(build_rule(rule)?);
    }
    Ok(element)
}

fn select_option(option: &OptionDefinition) -> SelectOption {
    let text = option.text.as_deref().unwrap_or(&option.value);
    let built = SelectOption::new(&option.value, text);
    if option.disabled { built.disabled() } else { built }
}

fn build_rule(rule: &RuleDefinition) -> Result<Arc<dyn Validator>> {
    let validator: Arc<dyn Validator> = match rule {
        RuleDefinition::Regex { pattern } => Arc::new(RegexValidator::new(pattern.as_str())?),
        RuleDefinition::Length { min, max } => Arc::new(StringLengthValidator::new(*min, *max)),
        RuleDefinition::Numeric {
            decimals,
            at_least,
            greater_than,
            at_most,
            less_than,
        } => {
            let mut validator = if *decimals {
                NumericValidator::decimal()
            } else {
                NumericValidator::integer()
            };
            if let Some(bound) = *at_least {
                validator = validator.at_least(bound);
            }
            if let Some(bound) = *greater_than {
                validator = validator.greater_than(bound);
            }
            if let Some(bound) = *at_most {
                validator = validator.at_most(bound);
            }
            if let Some(bound) = *less_than {
                validator = validator.less_than(bound);
            }
            Arc::new(validator)
        }
        RuleDefinition::Alphanumeric => Arc::new(AlphanumericValidator),
        RuleDefinition::InSet { values } => Arc::new(InSetValidator::new(values.iter().cloned())),
        RuleDefinition::Date { format } => match format {
            Some(format) => Arc::new(DateValidator::with_format(format.as_str())),
            None => Arc::new(DateValidator::new()),
        },
        RuleDefinition::SelectedCount { min, max } => {
            Arc::new(NumberOfSelectedOptionsValidator::new(*min, *max))
        }
    };
    Ok(validator)
}
