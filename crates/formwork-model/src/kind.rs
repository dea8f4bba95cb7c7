//! Element kind hierarchy.
//!
//! Each element carries a static [`ElementKind`] tag. Kinds declare their
//! parent, forming a single-rooted tree with [`ELEMENT`] at the top. Forms
//! key their default decorators and renderers by kind and walk this tree
//! from the most specific kind upwards when resolving defaults.

use std::fmt;
use std::hash::{Hash, Hasher};

/// The root kind. Every other kind descends from it.
pub static ELEMENT: ElementKind = ElementKind::root("element");

/// A static type tag with a declared parent kind.
///
/// Kinds are compared by name, so names must be unique across a program.
#[derive(Debug)]
pub struct ElementKind {
    name: &'static str,
    parent: Option<&'static ElementKind>,
    ignore_default_decorators: bool,
}

impl ElementKind {
    /// Declare a kind with no parent. Only [`ELEMENT`] should use this.
    pub const fn root(name: &'static str) -> Self {
        Self {
            name,
            parent: None,
            ignore_default_decorators: false,
        }
    }

    /// Declare a kind descending from `parent`.
    pub const fn new(name: &'static str, parent: &'static ElementKind) -> Self {
        Self {
            name,
            parent: Some(parent),
            ignore_default_decorators: false,
        }
    }

    /// Mark the kind so forms never apply default decorators to it.
    pub const fn ignoring_default_decorators(mut self) -> Self {
        self.ignore_default_decorators = true;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn parent(&self) -> Option<&'static ElementKind> {
        self.parent
    }

    pub fn ignores_default_decorators(&self) -> bool {
        self.ignore_default_decorators
    }

    /// Iterate from this kind up to the root, this kind first.
    pub fn lineage(&self) -> Lineage<'_> {
        Lineage { next: Some(self) }
    }

    /// Check whether this kind is `other` or descends from it.
    pub fn is_a(&self, other: &ElementKind) -> bool {
        self.lineage().any(|kind| kind == other)
    }
}

impl PartialEq for ElementKind {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ElementKind {}

impl Hash for ElementKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Iterator over a kind and its ancestors.
#[derive(Debug, Clone)]
pub struct Lineage<'a> {
    next: Option<&'a ElementKind>,
}

impl<'a> Iterator for Lineage<'a> {
    type Item = &'a ElementKind;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent;
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static FIELD: ElementKind = ElementKind::new("field", &ELEMENT);
    static TEXT: ElementKind = ElementKind::new("text", &FIELD);
    static BANNER: ElementKind = ElementKind::new("banner", &ELEMENT).ignoring_default_decorators();

    #[test]
    fn test_lineage_walks_to_root() {
        let names: Vec<&str> = TEXT.lineage().map(ElementKind::name).collect();
        assert_eq!(names, vec!["text", "field", "element"]);
    }

    #[test]
    fn test_is_a() {
        assert!(TEXT.is_a(&FIELD));
        assert!(TEXT.is_a(&ELEMENT));
        assert!(!FIELD.is_a(&TEXT));
        assert!(!BANNER.is_a(&FIELD));
    }

    #[test]
    fn test_ignore_flag() {
        assert!(BANNER.ignores_default_decorators());
        assert!(!TEXT.ignores_default_decorators());
        assert_eq!(ELEMENT.parent(), None);
    }
}
