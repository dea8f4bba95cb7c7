//! Mapping serde records into and out of a form.
//!
//! Records go through [`serde_json::Value`]: a record is serialized to an
//! object whose fields are read by element name, and converted form data is
//! deserialized back into the record type.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{FormError, Result};
use crate::form::{Form, FormData};

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

fn field_values(value: Value) -> Vec<Option<String>> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.into_iter().map(scalar_text).collect(),
        other => vec![scalar_text(other)],
    }
}

impl Form {
    /// Populate the form from the fields of `record`.
    ///
    /// Null fields clear, arrays fill multi-valued or shared names, and other
    /// scalars populate as their text form.
    ///
    /// # Errors
    ///
    /// Fails when `record` does not serialize to an object.
    pub fn populate_from<T: Serialize>(&mut self, record: &T) -> Result<()> {
        let data = record_data(record)?;
        self.populate(&data)
    }

    /// Build a record from the converted form data.
    ///
    /// # Errors
    ///
    /// Fails on conversion failures and when the data does not fit `T`.
    pub fn data_into<T: DeserializeOwned>(&self) -> Result<T> {
        let converted = self.converted_data()?;
        let value = serde_json::to_value(converted)?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Flatten a record into form data.
///
/// # Errors
///
/// Fails when `record` does not serialize to an object.
pub fn record_data<T: Serialize>(record: &T) -> Result<FormData> {
    match serde_json::to_value(record)? {
        Value::Object(fields) => Ok(fields
            .into_iter()
            .map(|(name, value)| (name, field_values(value)))
            .collect()),
        other => Err(FormError::RecordNotObject {
            found: value_kind(&other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Signup {
        name: String,
        age: u32,
        tags: Vec<String>,
        nickname: Option<String>,
    }

    #[test]
    fn test_record_flattening() {
        let data = record_data(&Signup {
            name: "Alice".into(),
            age: 30,
            tags: vec!["a".into(), "b".into()],
            nickname: None,
        })
        .unwrap();
        assert_eq!(data["name"], vec![Some("Alice".to_string())]);
        assert_eq!(data["age"], vec![Some("30".to_string())]);
        assert_eq!(data["tags"].len(), 2);
        assert!(data["nickname"].is_empty());
    }

    #[test]
    fn test_non_object_rejected() {
        let error = record_data(&vec![1, 2]).unwrap_err();
        assert!(matches!(error, FormError::RecordNotObject { found: "an array" }));
    }
}
