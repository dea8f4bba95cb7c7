//! Case-insensitive property store.
//!
//! Every configurable entity (element, decorator, form, tag) keeps its
//! settings in a [`PropertyStore`]. Keys are trimmed and lower-cased on every
//! access, so `"Class"`, `" class "` and `"CLASS"` address the same entry.
//! Iteration follows the normalized key order, which keeps rendered attribute
//! lists stable.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Deserializer, Serialize};

/// A string-keyed bag with case-insensitive keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PropertyStore {
    /// Maps normalized key -> value
    inner: BTreeMap<String, String>,
}

fn normalize(key: &str) -> Option<String> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

impl PropertyStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }

    /// Set a property, replacing any previous value.
    ///
    /// Blank keys are ignored.
    pub fn set(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        match normalize(key.as_ref()) {
            Some(key) => {
                self.inner.insert(key, value.into());
            }
            None => tracing::warn!("ignoring property with blank key"),
        }
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, key: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Get a property value.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&str> {
        normalize(key.as_ref()).and_then(|key| self.inner.get(&key).map(String::as_str))
    }

    /// Get a property parsed as a boolean (`"true"`, case-insensitive).
    pub fn get_bool(&self, key: impl AsRef<str>) -> Option<bool> {
        self.get(key).map(|value| value.trim().eq_ignore_ascii_case("true"))
    }

    /// Get a property parsed as an integer. Unparseable values yield `None`.
    pub fn get_int(&self, key: impl AsRef<str>) -> Option<i64> {
        self.get(key).and_then(|value| value.trim().parse().ok())
    }

    /// Remove a property, returning its previous value.
    pub fn remove(&mut self, key: impl AsRef<str>) -> Option<String> {
        normalize(key.as_ref()).and_then(|key| self.inner.remove(&key))
    }

    /// Append a whitespace-separated `class` to the `class` entry. Blank and
    /// already present classes leave the entry unchanged.
    pub fn add_class(&mut self, class: &str) {
        let class = class.trim();
        if class.is_empty() {
            return;
        }
        let merged = match self.get("class").map(str::trim) {
            Some(existing) if existing.split_whitespace().any(|item| item == class) => return,
            Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        self.set("class", merged);
    }

    /// Check whether a property is present.
    pub fn contains(&self, key: impl AsRef<str>) -> bool {
        normalize(key.as_ref()).is_some_and(|key| self.inner.contains_key(&key))
    }

    /// Copy every entry of `other` into this store.
    pub fn extend_from(&mut self, other: &PropertyStore) {
        for (key, value) in other.iter() {
            self.inner.insert(key.to_string(), value.to_string());
        }
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Iterate over `(normalized key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for PropertyStore
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (key, value) in iter {
            store.set(key, value);
        }
        store
    }
}

/// Deserialized keys are normalized like [`PropertyStore::set`].
impl<'de> Deserialize<'de> for PropertyStore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
        Ok(raw.into_iter().collect())
    }
}

impl<K, V> Extend<(K, V)> for PropertyStore
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl IntoIterator for PropertyStore {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_get() {
        let mut props = PropertyStore::new();
        props.set("DataId", "42");
        assert_eq!(props.get("dataid"), Some("42"));
        assert_eq!(props.get("DATAID"), Some("42"));
        assert_eq!(props.get("  DataId "), Some("42"));
        assert!(props.contains("dataID"));
    }

    #[test]
    fn test_set_replaces_regardless_of_case() {
        let mut props = PropertyStore::new();
        props.set("class", "a");
        props.set("CLASS", "b");
        assert_eq!(props.len(), 1);
        assert_eq!(props.get("class"), Some("b"));
    }

    #[test]
    fn test_blank_key_ignored() {
        let mut props = PropertyStore::new();
        props.set("   ", "value");
        assert!(props.is_empty());
        assert_eq!(props.get(""), None);
    }

    #[test]
    fn test_typed_getters() {
        let props = PropertyStore::new()
            .with("disabled", "TRUE")
            .with("size", " 12 ")
            .with("bad", "x");
        assert_eq!(props.get_bool("disabled"), Some(true));
        assert_eq!(props.get_int("size"), Some(12));
        assert_eq!(props.get_int("bad"), None);
        assert_eq!(props.get_bool("missing"), None);
    }

    #[test]
    fn test_copy_is_independent() {
        let original = PropertyStore::new().with("a", "1");
        let mut copy = original.clone();
        copy.set("a", "2");
        assert_eq!(original.get("a"), Some("1"));
    }

    #[test]
    fn test_iteration_is_sorted() {
        let props: PropertyStore = [("type", "text"), ("ID", "x"), ("name", "x")]
            .into_iter()
            .collect();
        let keys: Vec<&str> = props.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["id", "name", "type"]);
    }

    #[test]
    fn test_remove() {
        let mut props = PropertyStore::new().with("Name", "x");
        assert_eq!(props.remove("NAME"), Some("x".to_string()));
        assert!(!props.contains("name"));
    }
}
