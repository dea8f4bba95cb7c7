//! Elements: the stateful leaf units of a form.

use std::cell::Cell;
use std::fmt;
use std::sync::Arc;

use formwork_i18n::Translation;
use formwork_model::{ElementKind, PropertyStore, Tag, TypedValue, ValueType, convert_basic};

use crate::converter::ValueConverter;
use crate::decorator::{self, Decorator};
use crate::error::{FormError, Result};
use crate::filter::Filter;
use crate::options::OptionSet;
use crate::renderer::{RenderContext, Renderer};
use crate::validator::{RequiredValidator, Validator};

static REQUIRED: RequiredValidator = RequiredValidator;

/// Per-kind behavior switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Behavior {
    /// Keeps every value instead of truncating to the first.
    pub multi_value: bool,
    /// `set_values` stores values at all.
    pub accepts_values: bool,
    /// `populate` changes the values.
    pub populatable: bool,
    /// `reset` clears the values.
    pub resettable: bool,
    /// `set_value_type` is rejected.
    pub value_type_locked: bool,
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            multi_value: false,
            accepts_values: true,
            populatable: true,
            resettable: true,
            value_type_locked: false,
        }
    }
}

impl Behavior {
    #[must_use]
    pub fn multi_valued(mut self) -> Self {
        self.multi_value = true;
        self
    }

    #[must_use]
    pub fn ignoring_values(mut self) -> Self {
        self.accepts_values = false;
        self
    }

    /// Values survive `populate` and `reset`.
    #[must_use]
    pub fn fixed_values(mut self) -> Self {
        self.populatable = false;
        self.resettable = false;
        self
    }

    #[must_use]
    pub fn locked_value_type(mut self) -> Self {
        self.value_type_locked = true;
        self
    }
}

/// A named unit holding values, configuration and processing pipelines.
pub struct Element {
    id: String,
    kind: &'static ElementKind,
    behavior: Behavior,
    label: Option<String>,
    description: Option<String>,
    translation_enabled: bool,
    required: bool,
    value_type: Option<ValueType>,
    values: Vec<Option<String>>,
    properties: PropertyStore,
    hints: PropertyStore,
    filters: Vec<Arc<dyn Filter>>,
    validators: Vec<Arc<dyn Validator>>,
    decorators: Vec<Box<dyn Decorator>>,
    renderer: Option<Arc<dyn Renderer>>,
    default_renderer: Option<Arc<dyn Renderer>>,
    converter: Option<Arc<dyn ValueConverter>>,
    options: OptionSet,
    validation_performed: Cell<bool>,
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.id)
            .field("kind", &self.kind.name())
            .field("values", &self.values)
            .field("required", &self.required)
            .field("value_type", &self.value_type)
            .field("properties", &self.properties)
            .field("decorators", &self.decorators.len())
            .finish_non_exhaustive()
    }
}

impl Element {
    /// Create an element of `kind` holding text values.
    pub fn new(id: impl Into<String>, kind: &'static ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            behavior: Behavior::default(),
            label: None,
            description: None,
            translation_enabled: false,
            required: false,
            value_type: Some(ValueType::Text),
            values: Vec::new(),
            properties: PropertyStore::new(),
            hints: PropertyStore::new(),
            filters: Vec::new(),
            validators: Vec::new(),
            decorators: Vec::new(),
            renderer: None,
            default_renderer: None,
            converter: None,
            options: OptionSet::new(),
            validation_performed: Cell::new(false),
        }
    }

    // =========================================================================
    // IDENTITY AND BEHAVIOR
    // =========================================================================

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> &'static ElementKind {
        self.kind
    }

    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    #[must_use]
    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn is_multi_value(&self) -> bool {
        self.behavior.multi_value
    }

    /// The `name` property, the key used for data extraction.
    pub fn name(&self) -> Option<&str> {
        self.properties.get("name")
    }

    // =========================================================================
    // LABEL, DESCRIPTION, TRANSLATION
    // =========================================================================

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    /// The label as configured.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The label, translated when translation is enabled. The label itself
    /// is both code and fallback.
    pub fn translated_label(&self, translation: &Translation) -> Option<String> {
        self.translate_text(self.label.as_deref(), translation)
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn translated_description(&self, translation: &Translation) -> Option<String> {
        self.translate_text(self.description.as_deref(), translation)
    }

    fn translate_text(&self, text: Option<&str>, translation: &Translation) -> Option<String> {
        let text = text?;
        if self.translation_enabled {
            Some(translation.translate_or(text, text, &[]))
        } else {
            Some(text.to_string())
        }
    }

    #[must_use]
    pub fn with_translation(mut self, enabled: bool) -> Self {
        self.translation_enabled = enabled;
        self
    }

    pub fn set_translation_enabled(&mut self, enabled: bool) {
        self.translation_enabled = enabled;
    }

    pub fn is_translation_enabled(&self) -> bool {
        self.translation_enabled
    }

    // =========================================================================
    // REQUIRED AND VALUE TYPE
    // =========================================================================

    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn value_type(&self) -> Option<ValueType> {
        self.value_type
    }

    /// Change the value type. `None` excludes the element from validation
    /// and data extraction.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::ValueTypeLocked`] for kinds with a fixed type.
    pub fn set_value_type(&mut self, value_type: Option<ValueType>) -> Result<()> {
        if self.behavior.value_type_locked {
            return Err(FormError::ValueTypeLocked {
                element: self.id.clone(),
            });
        }
        self.value_type = value_type;
        Ok(())
    }

    /// Set the value type and lock it, for kind constructors.
    #[must_use]
    pub fn with_fixed_value_type(mut self, value_type: Option<ValueType>) -> Self {
        self.value_type = value_type;
        self.behavior.value_type_locked = true;
        self
    }

    // =========================================================================
    // VALUES
    // =========================================================================

    /// Replace the values. Empty input clears them; single-valued elements
    /// keep only the first value; filters run on every present value.
    pub fn set_values(&mut self, values: Vec<Option<String>>) {
        if !self.behavior.accepts_values {
            return;
        }
        let mut values = values;
        if !self.behavior.multi_value {
            values.truncate(1);
        }
        self.values = values
            .into_iter()
            .map(|value| value.map(|text| self.apply_filters(text)))
            .collect();
    }

    /// Set a single value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.set_values(vec![Some(value.into())]);
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    pub fn clear_value(&mut self) {
        self.values.clear();
    }

    fn apply_filters(&self, value: String) -> String {
        self.filters
            .iter()
            .fold(value, |current, filter| filter.filter(&current))
    }

    pub fn values(&self) -> &[Option<String>] {
        &self.values
    }

    pub fn first_value(&self) -> Option<&str> {
        self.values.first().and_then(Option::as_deref)
    }

    pub fn has_value(&self) -> bool {
        !self.values.is_empty()
    }

    /// Whether the `disabled` property is present.
    pub fn is_disabled(&self) -> bool {
        self.properties.contains("disabled")
    }

    /// Set values coming from submitted data. Disabled elements and kinds
    /// with fixed values are left untouched.
    pub fn populate(&mut self, values: Vec<Option<String>>) {
        if !self.behavior.populatable || self.is_disabled() {
            return;
        }
        self.set_values(values);
    }

    /// Clear values and the validation flag.
    pub fn reset(&mut self) {
        if !self.behavior.resettable {
            return;
        }
        if !self.is_disabled() {
            self.values.clear();
        }
        self.validation_performed.set(false);
    }

    /// The values converted to the element's value type.
    ///
    /// A custom converter takes precedence over basic conversion; its result
    /// must be assignable to the value type. Multi-valued elements without a
    /// converter yield a list.
    ///
    /// # Errors
    ///
    /// Fails when the element has no value type, when conversion fails, or
    /// when a converter returns a mismatching type.
    pub fn converted_value(&self) -> Result<TypedValue> {
        let Some(value_type) = self.value_type else {
            return Err(FormError::MissingValueType {
                element: self.id.clone(),
            });
        };
        if let Some(converter) = &self.converter {
            let value = converter.convert(self, &self.values)?;
            if !value.is_assignable_to(value_type) {
                return Err(FormError::ConvertedTypeMismatch {
                    element: self.id.clone(),
                    expected: value_type,
                    actual: value
                        .value_type()
                        .map_or_else(|| "list".to_string(), |actual| actual.to_string()),
                });
            }
            return Ok(value);
        }
        if self.behavior.multi_value {
            let items = self
                .values
                .iter()
                .map(|value| convert_basic(value.as_deref(), value_type))
                .collect::<formwork_model::Result<Vec<_>>>()
                .map_err(|source| FormError::conversion(&self.id, source))?;
            return Ok(TypedValue::List(items));
        }
        convert_basic(self.first_value(), value_type)
            .map_err(|source| FormError::conversion(&self.id, source))
    }

    #[must_use]
    pub fn with_converter(mut self, converter: Arc<dyn ValueConverter>) -> Self {
        self.converter = Some(converter);
        self
    }

    pub fn set_converter(&mut self, converter: Option<Arc<dyn ValueConverter>>) {
        self.converter = converter;
    }

    pub fn converter(&self) -> Option<&Arc<dyn ValueConverter>> {
        self.converter.as_ref()
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

    pub fn bool_property(&self, key: &str) -> Option<bool> {
        self.properties.get_bool(key)
    }

    pub fn int_property(&self, key: &str) -> Option<i64> {
        self.properties.get_int(key)
    }

    pub fn set_property(&mut self, key: &str, value: impl Into<String>) {
        self.properties.set(key, value);
    }

    #[must_use]
    pub fn with_property(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set_property(key, value);
        self
    }

    pub fn remove_property(&mut self, key: &str) -> Option<String> {
        self.properties.remove(key)
    }

    /// Append a class to the `class` property.
    pub fn add_class(&mut self, class: &str) {
        self.properties.add_class(class);
    }

    /// Rendering settings that are not markup attributes.
    pub fn hints(&self) -> &PropertyStore {
        &self.hints
    }

    pub fn hint(&self, key: &str) -> Option<&str> {
        self.hints.get(key)
    }

    pub fn set_hint(&mut self, key: &str, value: impl Into<String>) {
        self.hints.set(key, value);
    }

    #[must_use]
    pub fn with_hint(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set_hint(key, value);
        self
    }

    // =========================================================================
    // FILTERS AND VALIDATORS
    // =========================================================================

    #[must_use]
    pub fn with_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn add_filter(&mut self, filter: Arc<dyn Filter>) {
        self.filters.push(filter);
    }

    pub fn remove_filter(&mut self, index: usize) -> Option<Arc<dyn Filter>> {
        (index < self.filters.len()).then(|| self.filters.remove(index))
    }

    pub fn set_filters(&mut self, filters: Vec<Arc<dyn Filter>>) {
        self.filters = filters;
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    #[must_use]
    pub fn with_validator(mut self, validator: Arc<dyn Validator>) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn add_validator(&mut self, validator: Arc<dyn Validator>) {
        self.validators.push(validator);
    }

    pub fn remove_validator(&mut self, index: usize) -> Option<Arc<dyn Validator>> {
        (index < self.validators.len()).then(|| self.validators.remove(index))
    }

    pub fn set_validators(&mut self, validators: Vec<Arc<dyn Validator>>) {
        self.validators = validators;
    }

    pub fn clear_validators(&mut self) {
        self.validators.clear();
    }

    pub fn validators(&self) -> &[Arc<dyn Validator>] {
        &self.validators
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// Run the validation chain against the current values.
    ///
    /// Required elements run [`RequiredValidator`] first. Messages accumulate
    /// in chain order; a rule that breaks the chain stops evaluation once it
    /// reports errors.
    pub fn validate(&self, translation: &Translation) -> Vec<String> {
        self.validation_performed.set(true);
        let required = self.required.then_some(&REQUIRED as &dyn Validator);
        let chain = required
            .into_iter()
            .chain(self.validators.iter().map(|validator| &**validator));
        let mut errors = Vec::new();
        for validator in chain {
            let found = validator.validate(self, &self.values, translation);
            let failed = !found.is_empty();
            errors.extend(found);
            if failed && validator.breaks_chain_on_error() {
                break;
            }
        }
        errors
    }

    pub fn is_valid(&self, translation: &Translation) -> bool {
        self.validate(translation).is_empty()
    }

    /// Whether [`validate`](Self::validate) ran since the last reset.
    pub fn validation_performed(&self) -> bool {
        self.validation_performed.get()
    }

    pub fn clear_validation(&self) {
        self.validation_performed.set(false);
    }

    // =========================================================================
    // OPTIONS
    // =========================================================================

    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut OptionSet {
        &mut self.options
    }

    // =========================================================================
    // RENDERING
    // =========================================================================

    #[must_use]
    pub fn with_renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn set_renderer(&mut self, renderer: Option<Arc<dyn Renderer>>) {
        self.renderer = renderer;
    }

    pub fn renderer(&self) -> Option<&Arc<dyn Renderer>> {
        self.renderer.as_ref()
    }

    /// Fallback renderer provided by the element kind.
    #[must_use]
    pub fn with_default_renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.default_renderer = Some(renderer);
        self
    }

    pub fn default_renderer(&self) -> Option<&Arc<dyn Renderer>> {
        self.default_renderer.as_ref()
    }

    /// Render the element in isolation: baseline tags from the renderer, then
    /// each decorator in order.
    ///
    /// # Errors
    ///
    /// Fails when no renderer is available or a decorator fails.
    pub fn render(&self, ctx: &RenderContext<'_>) -> Result<Vec<Tag>> {
        let renderer = self
            .renderer
            .as_ref()
            .or(self.default_renderer.as_ref())
            .ok_or_else(|| FormError::MissingRenderer {
                element: self.id.clone(),
            })?;
        let mut tags = renderer.render(self, ctx);
        for decorator in &self.decorators {
            tags = decorator.render(ctx, &[self], tags)?;
        }
        Ok(tags)
    }

    // =========================================================================
    // DECORATORS
    // =========================================================================

    #[must_use]
    pub fn with_decorator(mut self, decorator: Box<dyn Decorator>) -> Self {
        self.decorators.push(decorator);
        self
    }

    pub fn add_decorator(&mut self, decorator: Box<dyn Decorator>) {
        self.decorators.push(decorator);
    }

    pub fn set_decorators(&mut self, decorators: Vec<Box<dyn Decorator>>) {
        self.decorators = decorators;
    }

    pub fn remove_decorator(&mut self, index: usize) -> Option<Box<dyn Decorator>> {
        (index < self.decorators.len()).then(|| self.decorators.remove(index))
    }

    pub fn clear_decorators(&mut self) {
        self.decorators.clear();
    }

    pub fn decorators(&self) -> &[Box<dyn Decorator>] {
        &self.decorators
    }

    /// The first decorator of type `D`.
    pub fn decorator<D: Decorator>(&self) -> Option<&D> {
        self.decorators
            .iter()
            .find_map(|item| decorator::downcast_ref::<D>(&**item))
    }

    pub fn decorator_mut<D: Decorator>(&mut self) -> Option<&mut D> {
        self.decorators
            .iter_mut()
            .find_map(|item| decorator::downcast_mut::<D>(&mut **item))
    }

    /// The last decorator of type `D`.
    pub fn last_decorator<D: Decorator>(&self) -> Option<&D> {
        self.decorators
            .iter()
            .rev()
            .find_map(|item| decorator::downcast_ref::<D>(&**item))
    }

    pub fn last_decorator_mut<D: Decorator>(&mut self) -> Option<&mut D> {
        self.decorators
            .iter_mut()
            .rev()
            .find_map(|item| decorator::downcast_mut::<D>(&mut **item))
    }

    /// Set a property on the first decorator of type `D`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::DecoratorNotFound`] if there is none.
    pub fn set_decorator_property<D: Decorator>(&mut self, key: &str, value: &str) -> Result<()> {
        let id = self.id.clone();
        let decorator = self
            .decorator_mut::<D>()
            .ok_or_else(|| FormError::DecoratorNotFound {
                element: id,
                decorator: std::any::type_name::<D>(),
            })?;
        decorator.set_property(key, value);
        Ok(())
    }

    /// Set a property on the last decorator of type `D`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::DecoratorNotFound`] if there is none.
    pub fn set_last_decorator_property<D: Decorator>(
        &mut self,
        key: &str,
        value: &str,
    ) -> Result<()> {
        let id = self.id.clone();
        let decorator = self
            .last_decorator_mut::<D>()
            .ok_or_else(|| FormError::DecoratorNotFound {
                element: id,
                decorator: std::any::type_name::<D>(),
            })?;
        decorator.set_property(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::StringTrim;
    use formwork_model::ELEMENT;

    #[test]
    fn test_single_valued_truncates() {
        let mut element = Element::new("a", &ELEMENT);
        element.set_values(vec![Some("x".into()), Some("y".into())]);
        assert_eq!(element.values(), &[Some("x".to_string())]);
    }

    #[test]
    fn test_multi_valued_keeps_all() {
        let mut element = Element::new("a", &ELEMENT).with_behavior(Behavior::default().multi_valued());
        element.set_values(vec![Some("x".into()), None, Some("y".into())]);
        assert_eq!(element.values().len(), 3);
    }

    #[test]
    fn test_filters_run_in_order() {
        let mut element = Element::new("a", &ELEMENT)
            .with_filter(Arc::new(StringTrim))
            .with_filter(Arc::new(|value: &str| format!("<{value}>")));
        element.set_value("  x ");
        assert_eq!(element.first_value(), Some("<x>"));

        assert!(element.remove_filter(2).is_none());
        assert!(element.remove_filter(0).is_some());
        element.set_value("  y ");
        assert_eq!(element.first_value(), Some("<  y >"));
    }

    #[test]
    fn test_empty_input_clears() {
        let mut element = Element::new("a", &ELEMENT).with_value("x");
        element.set_values(Vec::new());
        assert!(!element.has_value());
    }

    #[test]
    fn test_disabled_skips_populate_and_reset() {
        let mut element = Element::new("a", &ELEMENT)
            .with_value("kept")
            .with_property("disabled", "disabled");
        element.populate(vec![Some("new".into())]);
        assert_eq!(element.first_value(), Some("kept"));
        element.reset();
        assert_eq!(element.first_value(), Some("kept"));
    }

    #[test]
    fn test_fixed_values_survive_reset() {
        let mut element = Element::new("a", &ELEMENT)
            .with_behavior(Behavior::default().fixed_values())
            .with_value("token");
        element.populate(vec![Some("other".into())]);
        element.reset();
        assert_eq!(element.first_value(), Some("token"));
    }

    #[test]
    fn test_locked_value_type() {
        let mut element = Element::new("a", &ELEMENT).with_fixed_value_type(Some(ValueType::Bool));
        assert!(matches!(
            element.set_value_type(Some(ValueType::Text)),
            Err(FormError::ValueTypeLocked { .. })
        ));
        assert_eq!(element.value_type(), Some(ValueType::Bool));
    }

    #[test]
    fn test_add_class() {
        let mut element = Element::new("a", &ELEMENT);
        element.add_class("one");
        element.add_class("two");
        element.add_class("one");
        assert_eq!(element.property("class"), Some("one two"));
    }

    #[test]
    fn test_basic_conversion() {
        let mut element = Element::new("age", &ELEMENT);
        element.set_value_type(Some(ValueType::Int)).unwrap();
        element.set_value(" 41 ");
        assert_eq!(element.converted_value().unwrap(), TypedValue::Int(41));
        element.set_value("forty");
        assert!(matches!(
            element.converted_value(),
            Err(FormError::Conversion { .. })
        ));
    }

    #[test]
    fn test_multi_value_conversion() {
        let mut element = Element::new("ids", &ELEMENT).with_behavior(Behavior::default().multi_valued());
        element.set_value_type(Some(ValueType::Long)).unwrap();
        assert_eq!(element.converted_value().unwrap(), TypedValue::List(Vec::new()));
        element.set_values(vec![Some("1".into()), Some(" ".into())]);
        assert_eq!(
            element.converted_value().unwrap(),
            TypedValue::List(vec![TypedValue::Long(1), TypedValue::Null])
        );
    }

    #[test]
    fn test_label_translation() {
        let translation = Translation::default();
        let element = Element::new("a", &ELEMENT).with_label("validators.required.invalid");
        assert_eq!(
            element.translated_label(&translation).as_deref(),
            Some("validators.required.invalid")
        );
        let element = element.with_translation(true);
        assert_eq!(
            element.translated_label(&translation).as_deref(),
            Some("A value is required")
        );
        let untranslated = Element::new("b", &ELEMENT)
            .with_label("Plain label")
            .with_translation(true);
        assert_eq!(
            untranslated.translated_label(&translation).as_deref(),
            Some("Plain label")
        );
    }

    #[test]
    fn test_missing_renderer() {
        let element = Element::new("a", &ELEMENT);
        let translation = Translation::default();
        let error = element
            .render(&RenderContext::standalone(&translation))
            .unwrap_err();
        assert!(matches!(error, FormError::MissingRenderer { .. }));
    }
}
