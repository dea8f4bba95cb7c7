//! Default decorators and renderers keyed by element kind.
//!
//! Lookups by kind are exact. Resolution walks from the element's kind up to
//! the root and returns the first entry found, so an entry for a subkind
//! (even an explicitly empty decorator list) shadows its ancestors.

use std::sync::Arc;

use formwork_model::ElementKind;

use crate::decorator::Decorator;
use crate::form::Form;
use crate::renderer::Renderer;

impl Form {
    /// Append a default decorator for `kind`, creating its list if absent.
    pub fn add_default_decorator(&mut self, kind: &ElementKind, decorator: Box<dyn Decorator>) {
        self.default_decorators
            .entry(kind.name())
            .or_default()
            .push(decorator);
    }

    /// Replace the default decorators for `kind`. An empty list is kept as an
    /// explicit "no decorators" entry.
    pub fn set_default_decorators(&mut self, kind: &ElementKind, decorators: Vec<Box<dyn Decorator>>) {
        self.default_decorators.insert(kind.name(), decorators);
    }

    /// Default decorators registered for exactly `kind`.
    pub fn default_decorators(&self, kind: &ElementKind) -> Option<&[Box<dyn Decorator>]> {
        self.default_decorators.get(kind.name()).map(Vec::as_slice)
    }

    pub fn remove_default_decorators(&mut self, kind: &ElementKind) -> Option<Vec<Box<dyn Decorator>>> {
        self.default_decorators.remove(kind.name())
    }

    /// The decorators applied to new elements of `kind`.
    ///
    /// `None` means no kind in the lineage has an entry; `Some(&[])` means the
    /// nearest entry is explicitly empty.
    pub fn resolve_default_decorators(&self, kind: &ElementKind) -> Option<&[Box<dyn Decorator>]> {
        kind.lineage()
            .find_map(|candidate| self.default_decorators.get(candidate.name()))
            .map(Vec::as_slice)
    }

    pub fn set_default_renderer(&mut self, kind: &ElementKind, renderer: Arc<dyn Renderer>) {
        self.default_renderers.insert(kind.name(), renderer);
    }

    /// Default renderer registered for exactly `kind`.
    pub fn default_renderer(&self, kind: &ElementKind) -> Option<&Arc<dyn Renderer>> {
        self.default_renderers.get(kind.name())
    }

    pub fn remove_default_renderer(&mut self, kind: &ElementKind) -> Option<Arc<dyn Renderer>> {
        self.default_renderers.remove(kind.name())
    }

    /// The renderer applied to new elements of `kind` without one.
    pub fn resolve_default_renderer(&self, kind: &ElementKind) -> Option<&Arc<dyn Renderer>> {
        kind.lineage()
            .find_map(|candidate| self.default_renderers.get(candidate.name()))
    }
}
