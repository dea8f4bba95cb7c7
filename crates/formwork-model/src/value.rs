//! Value types and basic conversion of submitted text.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Declared type of an element's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Text,
    Byte,
    Short,
    Int,
    Long,
    BigInt,
    Float,
    Double,
    Bool,
    /// Calendar date; requires a custom converter.
    Date,
}

impl ValueType {
    pub const ALL: [ValueType; 10] = [
        ValueType::Text,
        ValueType::Byte,
        ValueType::Short,
        ValueType::Int,
        ValueType::Long,
        ValueType::BigInt,
        ValueType::Float,
        ValueType::Double,
        ValueType::Bool,
        ValueType::Date,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Text => "text",
            ValueType::Byte => "byte",
            ValueType::Short => "short",
            ValueType::Int => "int",
            ValueType::Long => "long",
            ValueType::BigInt => "bigint",
            ValueType::Float => "float",
            ValueType::Double => "double",
            ValueType::Bool => "bool",
            ValueType::Date => "date",
        }
    }

    /// Whether [`convert_basic`] can produce this type.
    pub fn has_basic_conversion(&self) -> bool {
        !matches!(self, ValueType::Date)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        ValueType::ALL
            .into_iter()
            .find(|value_type| value_type.as_str() == lowered)
            .ok_or_else(|| format!("unknown value type '{s}'"))
    }
}

/// A converted element value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypedValue {
    Null,
    Text(String),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    BigInt(i128),
    Float(f32),
    Double(f64),
    Bool(bool),
    Date(NaiveDate),
    /// Values of a multi-valued element or of elements sharing a name.
    List(Vec<TypedValue>),
}

impl TypedValue {
    /// The type of a scalar value. `Null` and `List` have none.
    pub fn value_type(&self) -> Option<ValueType> {
        match self {
            TypedValue::Null | TypedValue::List(_) => None,
            TypedValue::Text(_) => Some(ValueType::Text),
            TypedValue::Byte(_) => Some(ValueType::Byte),
            TypedValue::Short(_) => Some(ValueType::Short),
            TypedValue::Int(_) => Some(ValueType::Int),
            TypedValue::Long(_) => Some(ValueType::Long),
            TypedValue::BigInt(_) => Some(ValueType::BigInt),
            TypedValue::Float(_) => Some(ValueType::Float),
            TypedValue::Double(_) => Some(ValueType::Double),
            TypedValue::Bool(_) => Some(ValueType::Bool),
            TypedValue::Date(_) => Some(ValueType::Date),
        }
    }

    /// Check whether this value may be stored in an element of type `value_type`.
    ///
    /// `Null` fits every type; lists fit when each item fits.
    pub fn is_assignable_to(&self, value_type: ValueType) -> bool {
        match self {
            TypedValue::Null => true,
            TypedValue::List(items) => items.iter().all(|item| item.is_assignable_to(value_type)),
            scalar => scalar.value_type() == Some(value_type),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, TypedValue::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            TypedValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            TypedValue::Date(date) => Some(*date),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[TypedValue]> {
        match self {
            TypedValue::List(items) => Some(items),
            _ => None,
        }
    }
}

fn parse<T>(trimmed: &str, original: &str, value_type: ValueType) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    trimmed.parse::<T>().map_err(|error| ModelError::Conversion {
        value: original.to_string(),
        value_type,
        message: error.to_string(),
    })
}

/// Convert submitted text into a typed value.
///
/// Text is returned untouched. For every other type the input is trimmed and
/// a missing or blank value becomes [`TypedValue::Null`]. Booleans follow the
/// lenient rule: only `"true"` (any case) is true.
///
/// # Errors
///
/// Returns [`ModelError::Conversion`] when the text does not parse and
/// [`ModelError::UnsupportedType`] for [`ValueType::Date`].
pub fn convert_basic(value: Option<&str>, value_type: ValueType) -> Result<TypedValue> {
    if value_type == ValueType::Text {
        return Ok(value.map_or(TypedValue::Null, |text| TypedValue::Text(text.to_string())));
    }
    let Some(original) = value else {
        return Ok(TypedValue::Null);
    };
    let trimmed = original.trim();
    if trimmed.is_empty() {
        return Ok(TypedValue::Null);
    }
    let converted = match value_type {
        ValueType::Text => TypedValue::Text(original.to_string()),
        ValueType::Byte => TypedValue::Byte(parse(trimmed, original, value_type)?),
        ValueType::Short => TypedValue::Short(parse(trimmed, original, value_type)?),
        ValueType::Int => TypedValue::Int(parse(trimmed, original, value_type)?),
        ValueType::Long => TypedValue::Long(parse(trimmed, original, value_type)?),
        ValueType::BigInt => TypedValue::BigInt(parse(trimmed, original, value_type)?),
        ValueType::Float => TypedValue::Float(parse(trimmed, original, value_type)?),
        ValueType::Double => TypedValue::Double(parse(trimmed, original, value_type)?),
        ValueType::Bool => TypedValue::Bool(trimmed.eq_ignore_ascii_case("true")),
        ValueType::Date => return Err(ModelError::UnsupportedType { value_type }),
    };
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_untouched() {
        assert_eq!(
            convert_basic(Some("  a "), ValueType::Text).unwrap(),
            TypedValue::Text("  a ".to_string())
        );
        assert_eq!(
            convert_basic(Some(""), ValueType::Text).unwrap(),
            TypedValue::Text(String::new())
        );
        assert_eq!(convert_basic(None, ValueType::Text).unwrap(), TypedValue::Null);
    }

    #[test]
    fn test_blank_becomes_null() {
        assert_eq!(convert_basic(Some("   "), ValueType::Long).unwrap(), TypedValue::Null);
        assert_eq!(convert_basic(None, ValueType::Int).unwrap(), TypedValue::Null);
    }

    #[test]
    fn test_numbers_are_trimmed() {
        assert_eq!(convert_basic(Some(" 7 "), ValueType::Byte).unwrap(), TypedValue::Byte(7));
        assert_eq!(
            convert_basic(Some("-300"), ValueType::Short).unwrap(),
            TypedValue::Short(-300)
        );
        assert_eq!(
            convert_basic(Some("2.5"), ValueType::Double).unwrap(),
            TypedValue::Double(2.5)
        );
        assert_eq!(
            convert_basic(Some("170141183460469231731687303715884105727"), ValueType::BigInt)
                .unwrap(),
            TypedValue::BigInt(i128::MAX)
        );
    }

    #[test]
    fn test_overflow_is_error() {
        let error = convert_basic(Some("300"), ValueType::Byte).unwrap_err();
        assert!(matches!(error, ModelError::Conversion { value_type: ValueType::Byte, .. }));
        assert!(error.to_string().contains("'300'"));
    }

    #[test]
    fn test_bool_is_lenient() {
        assert_eq!(convert_basic(Some("TRUE"), ValueType::Bool).unwrap(), TypedValue::Bool(true));
        assert_eq!(convert_basic(Some("yes"), ValueType::Bool).unwrap(), TypedValue::Bool(false));
    }

    #[test]
    fn test_date_needs_converter() {
        assert_eq!(
            convert_basic(Some("2024-01-01"), ValueType::Date),
            Err(ModelError::UnsupportedType {
                value_type: ValueType::Date
            })
        );
        assert_eq!(convert_basic(Some(" "), ValueType::Date).unwrap(), TypedValue::Null);
    }

    #[test]
    fn test_assignability() {
        assert!(TypedValue::Null.is_assignable_to(ValueType::Date));
        assert!(TypedValue::Int(1).is_assignable_to(ValueType::Int));
        assert!(!TypedValue::Int(1).is_assignable_to(ValueType::Long));
        let list = TypedValue::List(vec![TypedValue::Text("a".into()), TypedValue::Null]);
        assert!(list.is_assignable_to(ValueType::Text));
    }

    #[test]
    fn test_value_type_from_str() {
        assert_eq!("BigInt".parse::<ValueType>(), Ok(ValueType::BigInt));
        assert!("decimal".parse::<ValueType>().is_err());
    }

    #[test]
    fn test_serializes_untagged() {
        let value = TypedValue::List(vec![
            TypedValue::Long(1),
            TypedValue::Null,
            TypedValue::Date(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()),
        ]);
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"[1,null,"2024-03-09"]"#);
    }
}
