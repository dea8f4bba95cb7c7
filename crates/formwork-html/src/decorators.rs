//! Decorators for labels, error lists and wrapping tags.
//!
//! | decorator | property | default |
//! |---|---|---|
//! | [`LabelDecorator`] | `class` | `element-label` |
//! | | `escape` | `true` |
//! | | `prepend` | `true` |
//! | [`ElementErrorsDecorator`] | `class` | `validation-errors` |
//! | | `prepend` | `false` |
//! | [`FormErrorsDecorator`] | `class` | `form-validation-errors` |
//! | | `prepend` | `false` |
//! | [`HtmlTagDecorator`] | `tagName` | required |
//!
//! Every other property of [`HtmlTagDecorator`] becomes an attribute of the
//! wrapping tag. All four can serve as element defaults.

use formwork_core::decorator::single_element;
use formwork_core::{Decorator, Element, FormError, RenderContext, Result};
use formwork_model::{PropertyStore, Tag};

pub const CLASS_PROPERTY: &str = "class";
pub const ESCAPE_PROPERTY: &str = "escape";
pub const PREPEND_PROPERTY: &str = "prepend";
pub const TAG_NAME_PROPERTY: &str = "tagName";

fn flag(properties: &PropertyStore, key: &str, default: bool) -> bool {
    properties.get_bool(key).unwrap_or(default)
}

fn class_of(properties: &PropertyStore) -> Option<&str> {
    properties
        .get(CLASS_PROPERTY)
        .filter(|class| !class.trim().is_empty())
}

/// Put `extra` before or after `rendered`.
fn place(rendered: Vec<Tag>, extra: Tag, prepend: bool) -> Vec<Tag> {
    let mut result = Vec::with_capacity(rendered.len() + 1);
    if prepend {
        result.push(extra);
        result.extend(rendered);
    } else {
        result.extend(rendered);
        result.push(extra);
    }
    result
}

fn error_list(properties: &PropertyStore, errors: Vec<String>) -> Tag {
    let mut list = Tag::new("ul")
        .with_children(errors.into_iter().map(|error| Tag::new("li").with_content(error)));
    if let Some(class) = class_of(properties) {
        list.set_attribute(CLASS_PROPERTY, class);
    }
    list
}

// =============================================================================
// LABEL
// =============================================================================

/// Adds a `<label for="...">` with the element's translated label.
#[derive(Debug, Clone)]
pub struct LabelDecorator {
    properties: PropertyStore,
}

impl Default for LabelDecorator {
    fn default() -> Self {
        Self {
            properties: PropertyStore::new()
                .with(CLASS_PROPERTY, "element-label")
                .with(ESCAPE_PROPERTY, "true")
                .with(PREPEND_PROPERTY, "true"),
        }
    }
}

impl LabelDecorator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Decorator for LabelDecorator {
    fn render(
        &self,
        ctx: &RenderContext<'_>,
        elements: &[&Element],
        rendered: Vec<Tag>,
    ) -> Result<Vec<Tag>> {
        let element = single_element("LabelDecorator", elements)?;
        let Some(text) = element.translated_label(ctx.translation()) else {
            return Ok(rendered);
        };
        let mut label = Tag::new("label")
            .with_attribute("for", element.property("id").unwrap_or(element.id()))
            .with_content(text)
            .with_escape(flag(&self.properties, ESCAPE_PROPERTY, true));
        if let Some(class) = class_of(&self.properties) {
            label.set_attribute(CLASS_PROPERTY, class);
        }
        Ok(place(rendered, label, flag(&self.properties, PREPEND_PROPERTY, true)))
    }

    fn properties(&self) -> &PropertyStore {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyStore {
        &mut self.properties
    }

    fn new_instance(&self) -> Option<Box<dyn Decorator>> {
        Some(Box::new(Self::default()))
    }

    fn name(&self) -> &'static str {
        "LabelDecorator"
    }
}

// =============================================================================
// ELEMENT ERRORS
// =============================================================================

/// Lists the element's validation messages once the element was validated.
#[derive(Debug, Clone)]
pub struct ElementErrorsDecorator {
    properties: PropertyStore,
}

impl Default for ElementErrorsDecorator {
    fn default() -> Self {
        Self {
            properties: PropertyStore::new()
                .with(CLASS_PROPERTY, "validation-errors")
                .with(PREPEND_PROPERTY, "false"),
        }
    }
}

impl ElementErrorsDecorator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Decorator for ElementErrorsDecorator {
    fn render(
        &self,
        ctx: &RenderContext<'_>,
        elements: &[&Element],
        rendered: Vec<Tag>,
    ) -> Result<Vec<Tag>> {
        let element = single_element("ElementErrorsDecorator", elements)?;
        if !element.validation_performed() {
            return Ok(rendered);
        }
        let errors = element.validate(ctx.translation());
        if errors.is_empty() {
            return Ok(rendered);
        }
        let list = error_list(&self.properties, errors).with_attribute("data-id", element.id());
        Ok(place(rendered, list, flag(&self.properties, PREPEND_PROPERTY, false)))
    }

    fn properties(&self) -> &PropertyStore {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyStore {
        &mut self.properties
    }

    fn new_instance(&self) -> Option<Box<dyn Decorator>> {
        Some(Box::new(Self::default()))
    }

    fn name(&self) -> &'static str {
        "ElementErrorsDecorator"
    }
}

// =============================================================================
// FORM ERRORS
// =============================================================================

/// Lists the form-level validation messages once the form was validated.
///
/// Does nothing outside of a form.
#[derive(Debug, Clone)]
pub struct FormErrorsDecorator {
    properties: PropertyStore,
}

impl Default for FormErrorsDecorator {
    fn default() -> Self {
        Self {
            properties: PropertyStore::new()
                .with(CLASS_PROPERTY, "form-validation-errors")
                .with(PREPEND_PROPERTY, "false"),
        }
    }
}

impl FormErrorsDecorator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Decorator for FormErrorsDecorator {
    fn render(
        &self,
        ctx: &RenderContext<'_>,
        _elements: &[&Element],
        rendered: Vec<Tag>,
    ) -> Result<Vec<Tag>> {
        let Some(form) = ctx.form().filter(|form| form.validation_performed()) else {
            return Ok(rendered);
        };
        let errors = form.form_level_errors()?;
        if errors.is_empty() {
            return Ok(rendered);
        }
        let list = error_list(&self.properties, errors);
        Ok(place(rendered, list, flag(&self.properties, PREPEND_PROPERTY, false)))
    }

    fn properties(&self) -> &PropertyStore {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyStore {
        &mut self.properties
    }

    fn new_instance(&self) -> Option<Box<dyn Decorator>> {
        Some(Box::new(Self::default()))
    }

    fn name(&self) -> &'static str {
        "FormErrorsDecorator"
    }
}

// =============================================================================
// HTML TAG
// =============================================================================

/// Wraps the rendered output in a tag.
#[derive(Debug, Clone, Default)]
pub struct HtmlTagDecorator {
    properties: PropertyStore,
}

impl HtmlTagDecorator {
    pub fn new(tag_name: &str) -> Self {
        Self {
            properties: PropertyStore::new().with(TAG_NAME_PROPERTY, tag_name),
        }
    }

    /// Add an attribute of the wrapping tag.
    #[must_use]
    pub fn with_attribute(mut self, key: &str, value: &str) -> Self {
        self.properties.set(key, value);
        self
    }
}

impl Decorator for HtmlTagDecorator {
    fn render(
        &self,
        _ctx: &RenderContext<'_>,
        _elements: &[&Element],
        rendered: Vec<Tag>,
    ) -> Result<Vec<Tag>> {
        let tag_name = self
            .properties
            .get(TAG_NAME_PROPERTY)
            .filter(|name| !name.trim().is_empty())
            .ok_or(FormError::MissingProperty {
                owner: "HtmlTagDecorator",
                property: TAG_NAME_PROPERTY,
            })?;
        let tag_key = TAG_NAME_PROPERTY.to_ascii_lowercase();
        let mut wrapper = Tag::new(tag_name.trim());
        for (key, value) in self.properties.iter().filter(|(key, _)| *key != tag_key) {
            wrapper.set_attribute(key, value);
        }
        Ok(vec![wrapper.with_children(rendered)])
    }

    fn properties(&self) -> &PropertyStore {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyStore {
        &mut self.properties
    }

    fn new_instance(&self) -> Option<Box<dyn Decorator>> {
        Some(Box::new(Self::default()))
    }

    fn name(&self) -> &'static str {
        "HtmlTagDecorator"
    }
}
