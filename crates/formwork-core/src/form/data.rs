//! Data extraction, population and typed conversion.
//!
//! Data is keyed by the `name` property. Several single-valued elements of
//! one value type may share a name; their values are then read and written
//! positionally, in insertion order. Elements without a value type or with a
//! blank name take no part.

use std::collections::BTreeMap;

use formwork_model::TypedValue;
use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::{FormError, Result};
use crate::form::Form;

/// Multi-value data: every name maps to its list of values.
pub type FormData = BTreeMap<String, Vec<Option<String>>>;

/// One entry of single-or-list data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Single(Option<String>),
    List(Vec<Option<String>>),
}

impl DataValue {
    /// The values as a list, whatever the shape.
    pub fn into_values(self) -> Vec<Option<String>> {
        match self {
            Self::Single(value) => vec![value],
            Self::List(values) => values,
        }
    }
}

impl Form {
    /// Group participating elements by name, checking sharing rules.
    fn name_groups(&self) -> Result<BTreeMap<String, Vec<&Element>>> {
        let mut groups: BTreeMap<String, Vec<&Element>> = BTreeMap::new();
        for element in self.elements() {
            if element.value_type().is_none() {
                continue;
            }
            let Some(name) = element.name().filter(|name| !name.trim().is_empty()) else {
                continue;
            };
            if name.contains('[') && name.contains(']') {
                return Err(FormError::ArrayName {
                    name: name.to_string(),
                    element: element.id().to_string(),
                });
            }
            groups.entry(name.to_string()).or_default().push(element);
        }

        for (name, members) in &groups {
            if members.len() < 2 {
                continue;
            }
            if let Some(multi) = members.iter().find(|element| element.is_multi_value()) {
                return Err(FormError::SharedNameMultiValued {
                    name: name.clone(),
                    element: multi.id().to_string(),
                });
            }
            let first_type = members[0].value_type();
            if members.iter().any(|element| element.value_type() != first_type) {
                return Err(FormError::SharedNameTypeMismatch { name: name.clone() });
            }
        }
        Ok(groups)
    }

    /// Raw values keyed by name. Shared names list the first value of each
    /// element in insertion order.
    ///
    /// # Errors
    ///
    /// Fails when elements break the name sharing rules.
    pub fn data_multivalue(&self) -> Result<FormData> {
        let groups = self.name_groups()?;
        Ok(groups
            .into_iter()
            .map(|(name, members)| {
                let values = match members.as_slice() {
                    [single] => single.values().to_vec(),
                    _ => members
                        .iter()
                        .map(|element| element.first_value().map(str::to_string))
                        .collect(),
                };
                (name, values)
            })
            .collect())
    }

    /// Raw values keyed by name: a single value for lone single-valued
    /// elements, a list otherwise.
    ///
    /// # Errors
    ///
    /// Fails when elements break the name sharing rules.
    pub fn data(&self) -> Result<BTreeMap<String, DataValue>> {
        let groups = self.name_groups()?;
        Ok(groups
            .into_iter()
            .map(|(name, members)| {
                let value = match members.as_slice() {
                    [single] if single.is_multi_value() => DataValue::List(single.values().to_vec()),
                    [single] => DataValue::Single(single.first_value().map(str::to_string)),
                    _ => DataValue::List(
                        members
                            .iter()
                            .map(|element| element.first_value().map(str::to_string))
                            .collect(),
                    ),
                };
                (name, value)
            })
            .collect())
    }

    /// Typed values keyed by name. Shared names produce a list of each
    /// element's converted value.
    ///
    /// # Errors
    ///
    /// Fails on name sharing violations and on conversion failures.
    pub fn converted_data(&self) -> Result<BTreeMap<String, TypedValue>> {
        let groups = self.name_groups()?;
        let mut converted = BTreeMap::new();
        for (name, members) in groups {
            let value = match members.as_slice() {
                [single] => single.converted_value()?,
                _ => TypedValue::List(
                    members
                        .iter()
                        .map(|element| element.converted_value())
                        .collect::<Result<Vec<_>>>()?,
                ),
            };
            converted.insert(name, value);
        }
        Ok(converted)
    }

    /// Raw values of one element.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::ElementNotFound`] for unknown ids.
    pub fn element_values(&self, id: &str) -> Result<&[Option<String>]> {
        Ok(self.require_element(id)?.values())
    }

    /// First value of one element.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::ElementNotFound`] for unknown ids.
    pub fn element_value(&self, id: &str) -> Result<Option<&str>> {
        Ok(self.require_element(id)?.first_value())
    }

    /// Typed value of one element.
    ///
    /// # Errors
    ///
    /// Fails for unknown ids and on conversion failures.
    pub fn element_converted_value(&self, id: &str) -> Result<TypedValue> {
        self.require_element(id)?.converted_value()
    }

    /// Replace the values of one element, running its filters.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::ElementNotFound`] for unknown ids.
    pub fn set_element_value(&mut self, id: &str, values: Vec<Option<String>>) -> Result<()> {
        self.require_element_mut(id)?.set_values(values);
        Ok(())
    }

    /// Reset the form, then populate elements from `data` by name.
    ///
    /// A lone element receives the whole list. Elements sharing a name
    /// receive the value at their position, when the list has one. Names
    /// without matching elements are ignored.
    ///
    /// # Errors
    ///
    /// Fails when elements break the name sharing rules.
    pub fn populate(&mut self, data: &FormData) -> Result<()> {
        self.reset();
        let targets: Vec<(String, Vec<String>)> = self
            .name_groups()?
            .into_iter()
            .map(|(name, members)| {
                let ids = members.iter().map(|element| element.id().to_string()).collect();
                (name, ids)
            })
            .collect();

        for (name, ids) in targets {
            let Some(values) = data.get(&name) else {
                continue;
            };
            if let [id] = ids.as_slice() {
                if let Some(element) = self.elements.get_mut(id) {
                    element.populate(values.clone());
                }
                continue;
            }
            for (position, id) in ids.iter().enumerate() {
                let Some(value) = values.get(position) else {
                    break;
                };
                if let Some(element) = self.elements.get_mut(id) {
                    element.populate(vec![value.clone()]);
                }
            }
        }
        tracing::debug!(names = data.len(), "form populated");
        Ok(())
    }
}
