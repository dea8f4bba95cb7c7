//! Option groups for choice elements (selects, radios, checkbox lists).
//!
//! Options live in ordered groups. The group without id is the default
//! group; it is created on first use. Option values are unique across the
//! whole set.

use serde::Serialize;

use crate::error::{FormError, Result};

/// A selectable value with display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    value: String,
    text: String,
    enabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
            enabled: true,
        }
    }

    /// Builder form of [`set_enabled`](Self::set_enabled)`(false)`.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

/// An ordered group of options, optionally identified and labelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionGroup {
    id: Option<String>,
    text: Option<String>,
    enabled: bool,
    options: Vec<SelectOption>,
}

impl OptionGroup {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            text: Some(text.into()),
            enabled: true,
            options: Vec::new(),
        }
    }

    fn unnamed() -> Self {
        Self {
            id: None,
            text: None,
            enabled: true,
            options: Vec::new(),
        }
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    #[must_use]
    pub fn with_option(mut self, option: SelectOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }
}

fn group_label(id: Option<&str>) -> String {
    id.unwrap_or("(default)").to_string()
}

/// All option groups of an element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OptionSet {
    groups: Vec<OptionGroup>,
}

impl OptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option to the default group.
    pub fn add_option(&mut self, option: SelectOption) -> Result<()> {
        self.add_option_to_group(None, option)
    }

    /// Add an option to the group `group_id`, creating an untitled group if needed.
    pub fn add_option_to_group(&mut self, group_id: Option<&str>, option: SelectOption) -> Result<()> {
        self.ensure_unique(option.value())?;
        let index = match self.group_index(group_id) {
            Some(index) => index,
            None => {
                let group = match group_id {
                    Some(id) => OptionGroup {
                        id: Some(id.to_string()),
                        ..OptionGroup::unnamed()
                    },
                    None => OptionGroup::unnamed(),
                };
                self.groups.push(group);
                self.groups.len() - 1
            }
        };
        self.groups[index].options.push(option);
        Ok(())
    }

    /// Add a complete group.
    pub fn add_group(&mut self, group: OptionGroup) -> Result<()> {
        if self.group_index(group.id()).is_some() {
            return Err(FormError::DuplicateOptionGroup {
                group: group_label(group.id()),
            });
        }
        let mut seen: Vec<&str> = Vec::with_capacity(group.options.len());
        for option in &group.options {
            if seen.contains(&option.value()) {
                return Err(FormError::DuplicateOptionValue {
                    value: option.value().to_string(),
                });
            }
            self.ensure_unique(option.value())?;
            seen.push(option.value());
        }
        self.groups.push(group);
        Ok(())
    }

    /// Remove the option with `value` from whichever group holds it.
    pub fn remove_option(&mut self, value: &str) -> Option<SelectOption> {
        for group in &mut self.groups {
            if let Some(position) = group.options.iter().position(|option| option.value() == value) {
                return Some(group.options.remove(position));
            }
        }
        None
    }

    pub fn remove_group(&mut self, group_id: Option<&str>) -> Option<OptionGroup> {
        self.group_index(group_id)
            .map(|index| self.groups.remove(index))
    }

    pub fn group(&self, group_id: Option<&str>) -> Option<&OptionGroup> {
        self.group_index(group_id).map(|index| &self.groups[index])
    }

    pub fn group_mut(&mut self, group_id: Option<&str>) -> Option<&mut OptionGroup> {
        self.group_index(group_id).map(|index| &mut self.groups[index])
    }

    pub fn groups(&self) -> &[OptionGroup] {
        &self.groups
    }

    /// Every option in group order.
    pub fn options(&self) -> impl Iterator<Item = &SelectOption> {
        self.groups.iter().flat_map(|group| group.options.iter())
    }

    pub fn option(&self, value: &str) -> Option<&SelectOption> {
        self.options().find(|option| option.value() == value)
    }

    pub fn option_mut(&mut self, value: &str) -> Option<&mut SelectOption> {
        self.groups
            .iter_mut()
            .flat_map(|group| group.options.iter_mut())
            .find(|option| option.value() == value)
    }

    pub fn has_value(&self, value: &str) -> bool {
        self.option(value).is_some()
    }

    /// Whether `value` exists and neither it nor its group is disabled.
    pub fn has_value_enabled(&self, value: &str) -> bool {
        self.groups.iter().any(|group| {
            group.enabled
                && group
                    .options
                    .iter()
                    .any(|option| option.enabled && option.value() == value)
        })
    }

    /// Values that may be selected, in group order.
    pub fn enabled_values(&self) -> Vec<&str> {
        self.groups
            .iter()
            .filter(|group| group.enabled)
            .flat_map(|group| group.options.iter())
            .filter(|option| option.enabled)
            .map(SelectOption::value)
            .collect()
    }

    pub fn clear(&mut self) {
        self.groups.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|group| group.options.is_empty())
    }

    fn group_index(&self, group_id: Option<&str>) -> Option<usize> {
        self.groups.iter().position(|group| group.id() == group_id)
    }

    fn ensure_unique(&self, value: &str) -> Result<()> {
        if self.has_value(value) {
            return Err(FormError::DuplicateOptionValue {
                value: value.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_group_created_on_first_use() {
        let mut set = OptionSet::new();
        set.add_option(SelectOption::new("a", "A")).unwrap();
        set.add_option(SelectOption::new("b", "B")).unwrap();
        assert_eq!(set.groups().len(), 1);
        assert_eq!(set.groups()[0].id(), None);
        assert_eq!(set.enabled_values(), vec!["a", "b"]);
    }

    #[test]
    fn test_duplicate_values_rejected_across_groups() {
        let mut set = OptionSet::new();
        set.add_option(SelectOption::new("a", "A")).unwrap();
        let error = set
            .add_group(OptionGroup::new("g", "G").with_option(SelectOption::new("a", "again")))
            .unwrap_err();
        assert!(matches!(error, FormError::DuplicateOptionValue { .. }));
        assert_eq!(set.groups().len(), 1);
    }

    #[test]
    fn test_duplicate_group_rejected() {
        let mut set = OptionSet::new();
        set.add_group(OptionGroup::new("g", "G")).unwrap();
        let error = set.add_group(OptionGroup::new("g", "Other")).unwrap_err();
        assert!(matches!(error, FormError::DuplicateOptionGroup { .. }));
    }

    #[test]
    fn test_disabled_options_and_groups() {
        let mut set = OptionSet::new();
        set.add_option(SelectOption::new("a", "A")).unwrap();
        set.add_option(SelectOption::new("b", "B").disabled()).unwrap();
        set.add_group(
            OptionGroup::new("g", "G")
                .disabled()
                .with_option(SelectOption::new("c", "C")),
        )
        .unwrap();
        assert!(set.has_value("b"));
        assert!(!set.has_value_enabled("b"));
        assert!(!set.has_value_enabled("c"));
        assert!(set.has_value_enabled("a"));
        assert_eq!(set.enabled_values(), vec!["a"]);
    }

    #[test]
    fn test_remove_option() {
        let mut set = OptionSet::new();
        set.add_option_to_group(Some("x"), SelectOption::new("a", "A")).unwrap();
        assert_eq!(set.group(Some("x")).map(OptionGroup::text), Some(None));
        assert!(set.remove_option("a").is_some());
        assert!(set.is_empty());
    }
}
