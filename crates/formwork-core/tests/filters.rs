//! Property tests for the built-in filters.

use formwork_core::{Filter, RemoveControlCharacters, StringTrim};
use proptest::prelude::*;

proptest! {
    #[test]
    fn trim_is_idempotent(value in ".*") {
        let once = StringTrim.filter(&value);
        prop_assert_eq!(StringTrim.filter(&once), once.clone());
        prop_assert_eq!(once.as_str(), value.trim());
    }

    #[test]
    fn control_characters_are_removed(value in "[a-z\\x00-\\x1f\\x7f\r\n\t]{0,32}") {
        let filtered = RemoveControlCharacters::new().filter(&value);
        prop_assert!(filtered
            .chars()
            .all(|ch| !ch.is_control() || matches!(ch, '\r' | '\n' | '\t')));
        let kept = value
            .chars()
            .filter(|ch| !ch.is_control() || matches!(ch, '\r' | '\n' | '\t'))
            .count();
        prop_assert_eq!(filtered.chars().count(), kept);
    }
}
