//! Integration tests for data extraction, population and record mapping.

mod common;

use common::{list, named, text, values};
use formwork_core::{DataValue, Element, Form, FormData, FormError, Result, StringTrim, ValueConverter};
use formwork_model::{TypedValue, ValueType};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

fn data(entries: &[(&str, &[Option<&str>])]) -> FormData {
    entries
        .iter()
        .map(|(name, items)| (name.to_string(), values(items)))
        .collect()
}

#[test]
fn test_shared_names_collect_first_values() {
    let mut form = Form::new();
    form.add_element(named("t1", "tag").with_value("a")).unwrap();
    form.add_element(named("t2", "tag").with_value("b")).unwrap();
    form.add_element(text("title").with_value("x")).unwrap();

    let multivalue = form.data_multivalue().unwrap();
    assert_eq!(multivalue["tag"], values(&[Some("a"), Some("b")]));

    let single = form.data().unwrap();
    assert_eq!(single["tag"], DataValue::List(values(&[Some("a"), Some("b")])));
    assert_eq!(single["title"], DataValue::Single(Some("x".into())));
}

#[test]
fn test_multi_valued_elements_cannot_share_names() {
    let mut form = Form::new();
    form.add_element(named("t1", "tags")).unwrap();
    form.add_element(list("tags")).unwrap();
    assert!(matches!(
        form.data(),
        Err(FormError::SharedNameMultiValued { .. })
    ));
}

#[test]
fn test_shared_names_need_one_value_type() {
    let mut form = Form::new();
    form.add_element(named("a", "n")).unwrap();
    let mut number = named("b", "n");
    number.set_value_type(Some(ValueType::Int)).unwrap();
    form.add_element(number).unwrap();
    assert!(matches!(
        form.data_multivalue(),
        Err(FormError::SharedNameTypeMismatch { .. })
    ));
}

#[test]
fn test_array_names_rejected() {
    let mut form = Form::new();
    form.add_element(named("a", "items[]")).unwrap();
    assert!(matches!(form.data(), Err(FormError::ArrayName { .. })));
}

#[test]
fn test_populate_shared_names_positionally() {
    let mut form = Form::new();
    for id in ["n1", "n2", "n3"] {
        form.add_element(named(id, "n")).unwrap();
    }
    form.populate(&data(&[("n", &[None, Some("2"), Some("3"), Some("4")])]))
        .unwrap();

    assert_eq!(form.element_value("n1").unwrap(), None);
    assert_eq!(form.element_values("n1").unwrap(), values(&[None]).as_slice());
    assert_eq!(form.element_value("n2").unwrap(), Some("2"));
    assert_eq!(form.element_value("n3").unwrap(), Some("3"));
}

#[test]
fn test_populate_single_and_multi() {
    let mut form = Form::new();
    form.add_element(text("one")).unwrap();
    form.add_element(list("many")).unwrap();
    form.populate(&data(&[
        ("one", &[Some("1"), Some("2")]),
        ("many", &[Some("1"), Some("2")]),
        ("unknown", &[Some("ignored")]),
    ]))
    .unwrap();

    assert_eq!(form.element_values("one").unwrap(), values(&[Some("1")]).as_slice());
    assert_eq!(form.element_values("many").unwrap().len(), 2);
}

#[test]
fn test_converted_shared_names() {
    let mut form = Form::new();
    for id in ["l1", "l2", "l3"] {
        let mut element = named(id, "l");
        element.set_value_type(Some(ValueType::Long)).unwrap();
        form.add_element(element).unwrap();
    }
    form.set_element_value("l1", values(&[Some("1")])).unwrap();
    form.set_element_value("l3", values(&[Some("  ")])).unwrap();

    let converted = form.converted_data().unwrap();
    assert_eq!(
        converted["l"],
        TypedValue::List(vec![TypedValue::Long(1), TypedValue::Null, TypedValue::Null])
    );
}

/// Always answers with text, whatever the element declares.
struct TextConverter;

impl ValueConverter for TextConverter {
    fn convert(&self, _element: &Element, _values: &[Option<String>]) -> Result<TypedValue> {
        Ok(TypedValue::Text("seven".to_string()))
    }
}

#[test]
fn test_converter_must_match_value_type() {
    let mut element = text("a").with_converter(Arc::new(TextConverter));
    element.set_value_type(Some(ValueType::Int)).unwrap();
    element.set_value("7");

    let error = element.converted_value().unwrap_err();
    assert!(matches!(
        &error,
        FormError::ConvertedTypeMismatch { element, expected: ValueType::Int, actual }
            if element == "a" && actual == "text"
    ));

    let mut form = Form::new();
    form.add_element(element).unwrap();
    assert!(matches!(
        form.converted_data(),
        Err(FormError::ConvertedTypeMismatch { .. })
    ));
}

#[test]
fn test_reset_then_populate_round_trip() {
    let mut form = Form::new();
    form.add_element(text("city").with_filter(Arc::new(StringTrim)))
        .unwrap();
    form.add_element(list("tags")).unwrap();
    form.populate(&data(&[
        ("city", &[Some("  Lima ")]),
        ("tags", &[Some("a"), None]),
    ]))
    .unwrap();

    let snapshot = form.data_multivalue().unwrap();
    assert_eq!(snapshot["city"], values(&[Some("Lima")]));

    form.reset();
    assert!(form.element_values("city").unwrap().is_empty());
    form.populate(&snapshot).unwrap();
    assert_eq!(form.data_multivalue().unwrap(), snapshot);
}

#[test]
fn test_unknown_element_lookup() {
    let form = Form::new();
    assert!(matches!(
        form.element_value("missing"),
        Err(FormError::ElementNotFound { .. })
    ));
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Profile {
    name: String,
    age: i32,
    tags: Vec<String>,
    subscribed: Option<bool>,
}

#[test]
fn test_record_mapping() {
    let mut form = Form::new();
    form.add_element(text("name")).unwrap();
    let mut age = text("age");
    age.set_value_type(Some(ValueType::Int)).unwrap();
    form.add_element(age).unwrap();
    form.add_element(list("tags")).unwrap();
    let mut subscribed = text("subscribed");
    subscribed.set_value_type(Some(ValueType::Bool)).unwrap();
    form.add_element(subscribed).unwrap();

    let profile = Profile {
        name: "Alice".into(),
        age: 30,
        tags: vec!["a".into(), "b".into()],
        subscribed: None,
    };
    form.populate_from(&profile).unwrap();
    assert_eq!(form.element_value("age").unwrap(), Some("30"));
    assert!(form.element_values("subscribed").unwrap().is_empty());

    let restored: Profile = form.data_into().unwrap();
    assert_eq!(restored, profile);
}
