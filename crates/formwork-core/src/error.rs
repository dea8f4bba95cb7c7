//! Error types for the formwork engine.
//!
//! Every variant is a configuration or internal-consistency failure and
//! aborts the operation that raised it. Validation failures are not errors;
//! they are returned as message lists.

use formwork_model::{ModelError, ValueType};
use thiserror::Error;

/// Fatal errors raised while assembling, rendering or reading a form.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FormError {
    // =========================================================================
    // ASSEMBLY ERRORS
    // =========================================================================
    /// An element with the same id is already part of the form.
    #[error("Element id '{id}' already exists in the form")]
    DuplicateElement { id: String },

    /// Element ids must not be blank.
    #[error("Element id cannot be empty")]
    EmptyElementId,

    /// The id collides with the key reserved for form-level errors.
    #[error("Element id '{id}' is reserved")]
    ReservedElementId { id: String },

    /// No element with the given id.
    #[error("Element '{id}' not found")]
    ElementNotFound { id: String },

    /// A decorator scope with the same id is already part of the form.
    #[error("Decorator id '{scope}' already exists in the form")]
    DuplicateScope { scope: String },

    /// `end_decorator` was called with no scope open.
    #[error("There is no open decorator to end")]
    NoOpenScope,

    /// The value type of this element kind is fixed.
    #[error("Value type of element '{element}' cannot be changed")]
    ValueTypeLocked { element: String },

    /// Two option groups share an id.
    #[error("Option group '{group}' already exists")]
    DuplicateOptionGroup { group: String },

    /// Two options share a value.
    #[error("Option value '{value}' already exists")]
    DuplicateOptionValue { value: String },

    /// A decorator used as a default cannot produce a fresh instance.
    #[error("Decorator {decorator} cannot be copied for use as a default")]
    DecoratorNotCopyable { decorator: &'static str },

    /// Typed decorator access found no decorator of the requested type.
    #[error("Element '{element}' has no decorator of type {decorator}")]
    DecoratorNotFound {
        element: String,
        decorator: &'static str,
    },

    // =========================================================================
    // RENDERING ERRORS
    // =========================================================================
    /// `render` was called while decorator scopes were still open.
    #[error("Unclosed decorators: {}", .scopes.join(", "))]
    UnclosedScopes { scopes: Vec<String> },

    /// The render program references something the form does not own.
    #[error("Unknown render program entry: {part}")]
    UnknownRenderPart { part: String },

    /// Neither an explicit nor a default renderer is set.
    #[error("Element '{element}' does not have a renderer")]
    MissingRenderer { element: String },

    /// A decorator was handed the wrong number of elements.
    #[error("Decorator {decorator} expects {expected} element(s), got {actual}")]
    DecoratorElementCount {
        decorator: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A required decorator or element property is absent.
    #[error("{owner} requires the '{property}' property")]
    MissingProperty {
        owner: &'static str,
        property: &'static str,
    },

    // =========================================================================
    // DATA ERRORS
    // =========================================================================
    /// Only single-valued elements may share a name.
    #[error("Element '{element}' is multi-valued and shares the name '{name}'")]
    SharedNameMultiValued { name: String, element: String },

    /// Elements sharing a name must declare the same value type.
    #[error("Elements named '{name}' declare different value types")]
    SharedNameTypeMismatch { name: String },

    /// Array-style names are not supported.
    #[error("Name '{name}' of element '{element}' cannot be in array form")]
    ArrayName { name: String, element: String },

    /// Typed value requested for an element without a value type.
    #[error("Element '{element}' has no value type")]
    MissingValueType { element: String },

    /// Basic conversion failed.
    #[error("Element '{element}': {source}")]
    Conversion {
        element: String,
        #[source]
        source: ModelError,
    },

    /// A custom converter returned a value of the wrong type.
    #[error("Element '{element}' converted to {actual} but declares value type {expected}")]
    ConvertedTypeMismatch {
        element: String,
        expected: ValueType,
        actual: String,
    },

    /// A custom converter rejected the element's values.
    #[error("Element '{element}' could not convert {value:?}: {message}")]
    CustomConversion {
        element: String,
        value: String,
        message: String,
    },

    /// A form validator references elements it cannot work with.
    #[error("Invalid target for {validator}: element '{element}' {reason}")]
    InvalidValidatorTarget {
        validator: &'static str,
        element: String,
        reason: &'static str,
    },

    /// A validator pattern failed to compile.
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Records mapped into or out of a form must be objects.
    #[error("Record must serialize to an object, found {found}")]
    RecordNotObject { found: &'static str },

    // =========================================================================
    // WRAPPED ERRORS
    // =========================================================================
    /// Record mapping error.
    #[error("Mapping error: {0}")]
    Mapping(#[from] serde_json::Error),
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

impl FormError {
    /// Wrap a basic conversion failure with the element id.
    pub fn conversion(element: impl Into<String>, source: ModelError) -> Self {
        Self::Conversion {
            element: element.into(),
            source,
        }
    }

    /// Check if this error stems from submitted data rather than form setup.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::Conversion { .. } | Self::CustomConversion { .. } | Self::Mapping(_)
        )
    }

    /// Get a user-friendly suggestion for fixing this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::DuplicateElement { .. } | Self::DuplicateScope { .. } => {
                Some("Give every element and decorator scope a unique id.")
            }
            Self::UnclosedScopes { .. } | Self::NoOpenScope => {
                Some("Pair every start_decorator call with exactly one end_decorator call.")
            }
            Self::DecoratorNotCopyable { .. } => {
                Some("Implement Decorator::new_instance for decorators used as defaults.")
            }
            Self::MissingRenderer { .. } => {
                Some("Set a renderer on the element or a default renderer for its kind.")
            }
            Self::SharedNameMultiValued { .. } | Self::SharedNameTypeMismatch { .. } => {
                Some("Only single-valued elements of one value type may share a name.")
            }
            Self::Conversion { .. } | Self::CustomConversion { .. } => {
                Some("Add validators so only convertible values pass validation.")
            }
            Self::ConvertedTypeMismatch { .. } => {
                Some("Make the converter return values of the declared value type.")
            }
            _ => None,
        }
    }
}
