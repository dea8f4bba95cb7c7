//! Abstract markup tree.
//!
//! Renderers and decorators never produce strings directly; they produce
//! [`Tag`] nodes that a serializer turns into markup later. A tag without a
//! name is a fragment: only its content and children are emitted.

use serde::Serialize;

use crate::property::PropertyStore;

/// A markup node with attributes, optional text content and children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    name: Option<String>,
    attributes: PropertyStore,
    content: Option<String>,
    escape_content: bool,
    children: Vec<Tag>,
}

impl Default for Tag {
    fn default() -> Self {
        Self {
            name: None,
            attributes: PropertyStore::new(),
            content: None,
            escape_content: true,
            children: Vec::new(),
        }
    }
}

impl Tag {
    /// Create an empty tag with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Create a nameless fragment.
    pub fn fragment() -> Self {
        Self::default()
    }

    /// Create a nameless fragment holding escaped text.
    pub fn text(content: impl Into<String>) -> Self {
        Self::default().with_content(content)
    }

    /// Create a nameless fragment holding raw, unescaped markup.
    pub fn raw(content: impl Into<String>) -> Self {
        Self::default().with_content(content).with_escape(false)
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.attributes.set(key, value);
        self
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: &PropertyStore) -> Self {
        self.attributes.extend_from(attributes);
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Builder form of [`set_escape_content`](Self::set_escape_content).
    #[must_use]
    pub fn with_escape(mut self, escape: bool) -> Self {
        self.escape_content = escape;
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Tag) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Tag>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn attributes(&self) -> &PropertyStore {
        &self.attributes
    }

    pub fn attribute(&self, key: impl AsRef<str>) -> Option<&str> {
        self.attributes.get(key)
    }

    pub fn set_attribute(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        self.attributes.set(key, value);
    }

    pub fn remove_attribute(&mut self, key: impl AsRef<str>) -> Option<String> {
        self.attributes.remove(key)
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn set_content(&mut self, content: Option<String>) {
        self.content = content;
    }

    pub fn escape_content(&self) -> bool {
        self.escape_content
    }

    /// Whether content is escaped during serialization (default `true`).
    pub fn set_escape_content(&mut self, escape: bool) {
        self.escape_content = escape;
    }

    pub fn children(&self) -> &[Tag] {
        &self.children
    }

    pub fn push_child(&mut self, child: Tag) {
        self.children.push(child);
    }

    /// Check whether this tag is a nameless fragment.
    pub fn is_fragment(&self) -> bool {
        self.name.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let tag = Tag::new("label")
            .with_attribute("For", "email")
            .with_content("Email")
            .with_child(Tag::new("span"));
        assert_eq!(tag.name(), Some("label"));
        assert_eq!(tag.attribute("for"), Some("email"));
        assert_eq!(tag.content(), Some("Email"));
        assert_eq!(tag.children().len(), 1);
        assert!(tag.escape_content());
    }

    #[test]
    fn test_fragments() {
        assert!(Tag::fragment().is_fragment());
        assert!(Tag::text("a").escape_content());
        assert!(!Tag::raw("<b>").escape_content());
    }
}
