//! The form composite.
//!
//! A [`Form`] owns its elements, the decorator scopes opened around groups of
//! elements and the render program that interleaves both. The submodules
//! split the engine by concern:
//!
//! - [`defaults`]: default decorators and renderers per element kind
//! - [`program`]: decorator scopes and the render stack machine
//! - [`validation`]: whole-form validation and [`ValidationReport`]
//! - [`data`]: data extraction, population and typed conversion
//! - [`mapping`]: mapping serde records into and out of a form

use std::cell::Cell;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use formwork_i18n::{Locale, Translation};
use formwork_model::PropertyStore;

use crate::decorator::{self, Decorator};
use crate::element::Element;
use crate::error::{FormError, Result};
use crate::renderer::Renderer;
use crate::validator::FormValidator;

pub mod data;
pub mod defaults;
pub mod mapping;
pub mod program;
pub mod validation;

pub use data::{DataValue, FormData};
pub use program::RenderPart;
pub use validation::{FORM_LEVEL_KEY, ValidationReport};

/// A composite of uniquely identified elements and decorator scopes.
pub struct Form {
    elements: HashMap<String, Element>,
    element_order: Vec<String>,
    element_scopes: HashMap<String, String>,
    decorators: HashMap<String, Box<dyn Decorator>>,
    program: Vec<RenderPart>,
    open_scopes: Vec<String>,
    default_decorators: HashMap<&'static str, Vec<Box<dyn Decorator>>>,
    default_renderers: HashMap<&'static str, Arc<dyn Renderer>>,
    validators: Vec<Arc<dyn FormValidator>>,
    properties: PropertyStore,
    translation: Translation,
    auto_enable_translation: bool,
    validation_performed: Cell<bool>,
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("elements", &self.element_order)
            .field("program", &self.program)
            .field("open_scopes", &self.open_scopes)
            .field("properties", &self.properties)
            .field("translation", &self.translation)
            .finish_non_exhaustive()
    }
}

impl Form {
    /// Create an empty form using the built-in English messages.
    pub fn new() -> Self {
        Self {
            elements: HashMap::new(),
            element_order: Vec::new(),
            element_scopes: HashMap::new(),
            decorators: HashMap::new(),
            program: Vec::new(),
            open_scopes: Vec::new(),
            default_decorators: HashMap::new(),
            default_renderers: HashMap::new(),
            validators: Vec::new(),
            properties: PropertyStore::new(),
            translation: Translation::default(),
            auto_enable_translation: false,
            validation_performed: Cell::new(false),
        }
    }

    // =========================================================================
    // ELEMENTS
    // =========================================================================

    /// Add an element, applying default decorators when it has none.
    ///
    /// # Errors
    ///
    /// See [`add_element_with_defaults`](Self::add_element_with_defaults).
    pub fn add_element(&mut self, element: Element) -> Result<&mut Self> {
        self.add_element_with_defaults(element, true)
    }

    /// Add several elements in order.
    ///
    /// # Errors
    ///
    /// Stops at the first element that cannot be added.
    pub fn add_elements(&mut self, elements: impl IntoIterator<Item = Element>) -> Result<&mut Self> {
        for element in elements {
            self.add_element(element)?;
        }
        Ok(self)
    }

    /// Add an element.
    ///
    /// Without an explicit renderer the element receives the default renderer
    /// resolved for its kind. When `use_default_decorators` is set, the
    /// element has no decorators and its kind does not opt out, it receives
    /// fresh copies of the resolved default decorators. Elements added while a
    /// decorator scope is open belong to the innermost scope.
    ///
    /// # Errors
    ///
    /// Fails on blank, reserved or duplicate ids and when a default decorator
    /// cannot be copied.
    pub fn add_element_with_defaults(
        &mut self,
        mut element: Element,
        use_default_decorators: bool,
    ) -> Result<&mut Self> {
        let id = element.id().to_string();
        if id.trim().is_empty() {
            return Err(FormError::EmptyElementId);
        }
        if id == FORM_LEVEL_KEY {
            return Err(FormError::ReservedElementId { id });
        }
        if self.elements.contains_key(&id) {
            return Err(FormError::DuplicateElement { id });
        }

        let kind = element.kind();
        if element.renderer().is_none()
            && let Some(renderer) = self.resolve_default_renderer(kind)
        {
            element.set_renderer(Some(Arc::clone(renderer)));
        }
        if use_default_decorators
            && !kind.ignores_default_decorators()
            && element.decorators().is_empty()
            && let Some(defaults) = self.resolve_default_decorators(kind)
        {
            let copies = defaults
                .iter()
                .map(|default| decorator::fresh_copy(&**default))
                .collect::<Result<Vec<_>>>()?;
            element.set_decorators(copies);
        }
        if self.auto_enable_translation {
            element.set_translation_enabled(true);
        }

        tracing::debug!(
            element = %id,
            kind = %kind,
            decorators = element.decorators().len(),
            scope = self.open_scopes.last().map(String::as_str),
            "element added"
        );
        if let Some(scope) = self.open_scopes.last() {
            self.element_scopes.insert(id.clone(), scope.clone());
        }
        self.program.push(RenderPart::Element(id.clone()));
        self.element_order.push(id.clone());
        self.elements.insert(id, element);
        Ok(self)
    }

    /// Remove an element together with its render program entry.
    pub fn remove_element(&mut self, id: &str) -> Option<Element> {
        let element = self.elements.remove(id)?;
        self.element_order.retain(|existing| existing != id);
        self.element_scopes.remove(id);
        self.program
            .retain(|part| !matches!(part, RenderPart::Element(existing) if existing == id));
        Some(element)
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    /// Like [`element`](Self::element) but failing for unknown ids.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::ElementNotFound`].
    pub fn require_element(&self, id: &str) -> Result<&Element> {
        self.elements
            .get(id)
            .ok_or_else(|| FormError::ElementNotFound { id: id.to_string() })
    }

    /// Mutable form of [`require_element`](Self::require_element).
    ///
    /// # Errors
    ///
    /// Returns [`FormError::ElementNotFound`].
    pub fn require_element_mut(&mut self, id: &str) -> Result<&mut Element> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| FormError::ElementNotFound { id: id.to_string() })
    }

    /// Elements in insertion order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.element_order
            .iter()
            .filter_map(|id| self.elements.get(id))
    }

    pub fn element_ids(&self) -> &[String] {
        &self.element_order
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Reset every element and the form's validation flag.
    pub fn reset(&mut self) {
        for element in self.elements.values_mut() {
            element.reset();
        }
        self.validation_performed.set(false);
    }

    /// Forget that validation ran, on the form and every element.
    pub fn clear_validation(&self) {
        for element in self.elements.values() {
            element.clear_validation();
        }
        self.validation_performed.set(false);
    }

    // =========================================================================
    // FORM VALIDATORS
    // =========================================================================

    pub fn add_validator(&mut self, validator: Arc<dyn FormValidator>) -> &mut Self {
        self.validators.push(validator);
        self
    }

    pub fn remove_validator(&mut self, index: usize) -> Option<Arc<dyn FormValidator>> {
        (index < self.validators.len()).then(|| self.validators.remove(index))
    }

    pub fn clear_validators(&mut self) {
        self.validators.clear();
    }

    pub fn validators(&self) -> &[Arc<dyn FormValidator>] {
        &self.validators
    }

    // =========================================================================
    // PROPERTIES
    // =========================================================================

    pub fn properties(&self) -> &PropertyStore {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key)
    }

    pub fn set_property(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.properties.set(key, value);
        self
    }

    pub fn remove_property(&mut self, key: &str) -> Option<String> {
        self.properties.remove(key)
    }

    /// Append a class to the `class` property.
    pub fn add_class(&mut self, class: &str) -> &mut Self {
        self.properties.add_class(class);
        self
    }

    // =========================================================================
    // TRANSLATION
    // =========================================================================

    pub fn translation(&self) -> &Translation {
        &self.translation
    }

    pub fn set_translation(&mut self, translation: Translation) {
        self.translation = translation;
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.translation.set_locale(locale);
    }

    /// Enable label translation on every element added from now on.
    pub fn set_auto_enable_translation(&mut self, enabled: bool) {
        self.auto_enable_translation = enabled;
    }

    pub fn auto_enable_translation(&self) -> bool {
        self.auto_enable_translation
    }
}
