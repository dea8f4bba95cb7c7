//! Shared kinds, renderers and decorators for the engine tests.

#![allow(dead_code)]

use std::sync::Arc;

use formwork_core::{Behavior, Decorator, Element, RenderContext, Renderer, Result};
use formwork_model::{ELEMENT, ElementKind, PropertyStore, Tag};

pub static FIELD: ElementKind = ElementKind::new("field", &ELEMENT);
pub static TEXT: ElementKind = ElementKind::new("text", &FIELD);
pub static LIST: ElementKind = ElementKind::new("list", &FIELD);
pub static NOTE: ElementKind = ElementKind::new("note", &ELEMENT).ignoring_default_decorators();

pub fn text(id: &str) -> Element {
    Element::new(id, &TEXT).with_property("name", id)
}

pub fn named(id: &str, name: &str) -> Element {
    Element::new(id, &TEXT).with_property("name", name)
}

pub fn list(id: &str) -> Element {
    Element::new(id, &LIST)
        .with_behavior(Behavior::default().multi_valued())
        .with_property("name", id)
}

/// Renders `<input id=.. value=..>`.
pub struct InputRenderer;

impl Renderer for InputRenderer {
    fn render(&self, element: &Element, _ctx: &RenderContext<'_>) -> Vec<Tag> {
        vec![
            Tag::new("input")
                .with_attribute("id", element.id())
                .with_attribute("value", element.first_value().unwrap_or_default()),
        ]
    }
}

pub fn input_renderer() -> Arc<dyn Renderer> {
    Arc::new(InputRenderer)
}

/// Wraps its input in one tag named by the `tag` property (default `div`).
#[derive(Default)]
pub struct Wrap {
    properties: PropertyStore,
}

impl Wrap {
    pub fn boxed(tag: &str) -> Box<dyn Decorator> {
        let mut wrap = Self::default();
        wrap.set_property("tag", tag);
        Box::new(wrap)
    }
}

impl Decorator for Wrap {
    fn render(
        &self,
        _ctx: &RenderContext<'_>,
        elements: &[&Element],
        rendered: Vec<Tag>,
    ) -> Result<Vec<Tag>> {
        let ids: Vec<&str> = elements.iter().map(|element| element.id()).collect();
        Ok(vec![
            Tag::new(self.property("tag").unwrap_or("div"))
                .with_attribute("data-elements", ids.join(","))
                .with_children(rendered),
        ])
    }

    fn properties(&self) -> &PropertyStore {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyStore {
        &mut self.properties
    }

    fn new_instance(&self) -> Option<Box<dyn Decorator>> {
        Some(Box::new(Self::default()))
    }
}

/// A decorator that cannot be copied.
#[derive(Default)]
pub struct Pinned {
    properties: PropertyStore,
}

impl Decorator for Pinned {
    fn render(
        &self,
        _ctx: &RenderContext<'_>,
        _elements: &[&Element],
        rendered: Vec<Tag>,
    ) -> Result<Vec<Tag>> {
        Ok(rendered)
    }

    fn properties(&self) -> &PropertyStore {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyStore {
        &mut self.properties
    }
}

/// Tag names of a tag sequence, depth first.
pub fn tag_names(tags: &[Tag]) -> Vec<String> {
    let mut names = Vec::new();
    for tag in tags {
        if let Some(name) = tag.name() {
            names.push(name.to_string());
        }
        names.extend(tag_names(tag.children()));
    }
    names
}

pub fn values(items: &[Option<&str>]) -> Vec<Option<String>> {
    items.iter().map(|item| item.map(str::to_string)).collect()
}
