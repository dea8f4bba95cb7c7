//! Property-based tests for key normalization.

use formwork_model::PropertyStore;
use proptest::prelude::*;

proptest! {
    #[test]
    fn lookup_ignores_case_and_padding(key in "[A-Za-z][A-Za-z0-9_-]{0,12}", value in ".*") {
        let mut props = PropertyStore::new();
        props.set(&key, value.clone());
        let upper = key.to_uppercase();
        let padded = format!("  {key}\t");
        prop_assert_eq!(props.get(&upper), Some(value.as_str()));
        prop_assert_eq!(props.get(&padded), Some(value.as_str()));
        prop_assert_eq!(props.len(), 1);
    }

    #[test]
    fn keys_are_stored_lowercase(keys in proptest::collection::vec("[A-Za-z]{1,8}", 1..10)) {
        let props: PropertyStore = keys.iter().map(|key| (key.as_str(), "v")).collect();
        for (key, _) in props.iter() {
            prop_assert_eq!(key.to_string(), key.to_lowercase());
        }
        let mut unique: Vec<String> = keys.iter().map(|key| key.to_lowercase()).collect();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(props.len(), unique.len());
    }
}

#[test]
fn test_deserialized_keys_are_normalized() {
    let props: PropertyStore = serde_json::from_str(r#"{" Class ":"a","":"blank","ID":"x"}"#).unwrap();
    assert_eq!(props.len(), 2);
    assert_eq!(props.get("class"), Some("a"));
    assert_eq!(props.get("id"), Some("x"));
    let keys: Vec<&str> = props.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["class", "id"]);
}

#[test]
fn test_add_class_merges_once() {
    let mut props = PropertyStore::new().with("Class", "  first ");
    props.add_class(" second ");
    props.add_class("first");
    props.add_class("");
    assert_eq!(props.get("class"), Some("first second"));

    let mut empty = PropertyStore::new();
    empty.add_class("only");
    assert_eq!(empty.get("class"), Some("only"));
}
