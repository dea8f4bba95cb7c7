//! Error types for value conversion.

use thiserror::Error;

use crate::value::ValueType;

/// Errors raised while converting submitted text into typed values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModelError {
    /// The text could not be parsed as the requested type.
    #[error(
        "Error while converting value '{value}' to data type {value_type}. \
         Make sure the element has correct values and/or validators"
    )]
    Conversion {
        value: String,
        value_type: ValueType,
        message: String,
    },

    /// Basic conversion does not handle this type; a custom converter is needed.
    #[error("Data type {value_type} has no basic conversion")]
    UnsupportedType { value_type: ValueType },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
