//! Integration tests for default decorators and renderers.

mod common;

use common::{FIELD, LIST, NOTE, Pinned, TEXT, Wrap, input_renderer, list, text};
use formwork_core::{Decorator, Element, Form, FormError};
use formwork_model::ELEMENT;

#[test]
fn test_defaults_resolve_through_kind_hierarchy() {
    let mut form = Form::new();
    form.add_default_decorator(&ELEMENT, Wrap::boxed("p"));
    form.add_default_decorator(&FIELD, Wrap::boxed("section"));
    form.add_element(text("a")).unwrap();

    let element = form.element("a").unwrap();
    assert_eq!(element.decorators().len(), 1);
    assert_eq!(element.decorators()[0].property("tag"), Some("section"));
}

#[test]
fn test_explicit_empty_defaults_shadow_ancestors() {
    let mut form = Form::new();
    form.add_default_decorator(&ELEMENT, Wrap::boxed("p"));
    form.set_default_decorators(&LIST, Vec::new());
    form.add_element(list("tags")).unwrap();
    form.add_element(text("a")).unwrap();

    assert!(form.element("tags").unwrap().decorators().is_empty());
    assert_eq!(form.element("a").unwrap().decorators().len(), 1);
    assert_eq!(form.resolve_default_decorators(&LIST).map(<[_]>::len), Some(0));
    assert!(form.default_decorators(&TEXT).is_none());
}

#[test]
fn test_default_copies_are_independent() {
    let mut form = Form::new();
    form.add_default_decorator(&ELEMENT, Wrap::boxed("p"));
    form.add_element(text("a")).unwrap();
    form.add_element(text("b")).unwrap();

    form.element_mut("a")
        .unwrap()
        .set_decorator_property::<Wrap>("tag", "aside")
        .unwrap();

    assert_eq!(form.element("a").unwrap().decorators()[0].property("tag"), Some("aside"));
    assert_eq!(form.element("b").unwrap().decorators()[0].property("tag"), Some("p"));
    assert_eq!(
        form.default_decorators(&ELEMENT).unwrap()[0].property("tag"),
        Some("p")
    );
}

#[test]
fn test_explicit_decorators_and_opt_outs_win() {
    let mut form = Form::new();
    form.add_default_decorator(&ELEMENT, Wrap::boxed("p"));
    form.add_element(text("own").with_decorator(Wrap::boxed("em"))).unwrap();
    form.add_element(Element::new("note", &NOTE)).unwrap();
    form.add_element_with_defaults(text("bare"), false).unwrap();

    let own = form.element("own").unwrap();
    assert_eq!(own.decorators().len(), 1);
    assert_eq!(own.decorators()[0].property("tag"), Some("em"));
    assert!(form.element("note").unwrap().decorators().is_empty());
    assert!(form.element("bare").unwrap().decorators().is_empty());
}

#[test]
fn test_uncopyable_default_fails() {
    let mut form = Form::new();
    form.add_default_decorator(&ELEMENT, Box::new(Pinned::default()));
    let error = form.add_element(text("a")).unwrap_err();
    assert!(matches!(error, FormError::DecoratorNotCopyable { .. }));
    assert!(form.is_empty());
}

#[test]
fn test_default_renderer_applied_when_missing() {
    let mut form = Form::new();
    form.set_default_renderer(&FIELD, input_renderer());
    form.add_element(text("a")).unwrap();
    form.add_element(Element::new("note", &NOTE)).unwrap();

    assert!(form.element("a").unwrap().renderer().is_some());
    assert!(form.element("note").unwrap().renderer().is_none());
}

#[test]
fn test_element_ids_are_checked() {
    let mut form = Form::new();
    form.add_element(text("a")).unwrap();
    assert!(matches!(
        form.add_element(text("a")),
        Err(FormError::DuplicateElement { .. })
    ));
    assert!(matches!(
        form.add_element(text("  ")),
        Err(FormError::EmptyElementId)
    ));
    assert!(matches!(
        form.add_element(text("@form")),
        Err(FormError::ReservedElementId { .. })
    ));
    assert_eq!(form.len(), 1);
}

#[test]
fn test_auto_enable_translation() {
    let mut form = Form::new();
    form.set_auto_enable_translation(true);
    form.add_element(text("a")).unwrap();
    assert!(form.element("a").unwrap().is_translation_enabled());
}
