//! Decorators transform previously rendered output.
//!
//! A decorator attached to an element receives that element's tags. A
//! decorator opened as a form scope receives the concatenated output of every
//! element rendered inside the scope, together with those elements.
//!
//! Default decorators are copied for each element they are applied to, so a
//! decorator that should serve as a default must override
//! [`Decorator::new_instance`]. Scoped decorators are used as given.

use std::any::Any;

use formwork_model::{PropertyStore, Tag};

use crate::element::Element;
use crate::error::{FormError, Result};
use crate::renderer::RenderContext;

/// Upcast to [`Any`] for typed decorator access.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A transform over an already produced tag sequence.
pub trait Decorator: AsAny + Send + Sync {
    /// Produce new output from `rendered`, the output of `elements`.
    ///
    /// # Errors
    ///
    /// Returns an error when the decorator is misconfigured or receives an
    /// element list it cannot handle.
    fn render(
        &self,
        ctx: &RenderContext<'_>,
        elements: &[&Element],
        rendered: Vec<Tag>,
    ) -> Result<Vec<Tag>>;

    fn properties(&self) -> &PropertyStore;

    fn properties_mut(&mut self) -> &mut PropertyStore;

    /// A fresh instance with default configuration, or `None` when the
    /// decorator cannot be copied.
    fn new_instance(&self) -> Option<Box<dyn Decorator>> {
        None
    }

    /// Type name used in error messages.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn property(&self, key: &str) -> Option<&str> {
        self.properties().get(key)
    }

    fn set_property(&mut self, key: &str, value: &str) {
        self.properties_mut().set(key, value);
    }

    fn remove_property(&mut self, key: &str) -> Option<String> {
        self.properties_mut().remove(key)
    }
}

/// Downcast a decorator to its concrete type.
pub fn downcast_ref<D: Decorator>(decorator: &dyn Decorator) -> Option<&D> {
    AsAny::as_any(decorator).downcast_ref::<D>()
}

/// Mutable form of [`downcast_ref`].
pub fn downcast_mut<D: Decorator>(decorator: &mut dyn Decorator) -> Option<&mut D> {
    AsAny::as_any_mut(decorator).downcast_mut::<D>()
}

/// Copy a decorator for use as an element default: a fresh instance carrying
/// a copy of the original's properties.
///
/// # Errors
///
/// Returns [`FormError::DecoratorNotCopyable`] when the decorator has no
/// fresh-instance capability.
pub fn fresh_copy(decorator: &dyn Decorator) -> Result<Box<dyn Decorator>> {
    let mut copy = decorator
        .new_instance()
        .ok_or_else(|| FormError::DecoratorNotCopyable {
            decorator: decorator.name(),
        })?;
    *copy.properties_mut() = decorator.properties().clone();
    Ok(copy)
}

/// Check that a decorator received exactly one element and return it.
///
/// # Errors
///
/// Returns [`FormError::DecoratorElementCount`] otherwise.
pub fn single_element<'a>(decorator: &'static str, elements: &[&'a Element]) -> Result<&'a Element> {
    match elements {
        [element] => Ok(*element),
        _ => Err(FormError::DecoratorElementCount {
            decorator,
            expected: 1,
            actual: elements.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Marker {
        properties: PropertyStore,
    }

    impl Decorator for Marker {
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

        fn new_instance(&self) -> Option<Box<dyn Decorator>> {
            Some(Box::new(Marker::default()))
        }
    }

    struct Pinned {
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

    #[test]
    fn test_fresh_copy_carries_properties() {
        let mut original = Marker::default();
        original.set_property("Class", "hint");
        let mut copy = fresh_copy(&original).unwrap();
        assert_eq!(copy.property("class"), Some("hint"));

        copy.set_property("class", "changed");
        assert_eq!(original.property("class"), Some("hint"));
    }

    #[test]
    fn test_not_copyable() {
        let pinned = Pinned {
            properties: PropertyStore::new(),
        };
        let error = fresh_copy(&pinned).err().unwrap();
        assert!(matches!(error, FormError::DecoratorNotCopyable { .. }));
        assert!(error.to_string().contains("Pinned"));
    }

    #[test]
    fn test_downcast() {
        let boxed: Box<dyn Decorator> = Box::new(Marker::default());
        assert!(downcast_ref::<Marker>(boxed.as_ref()).is_some());
        assert!(downcast_ref::<Pinned>(boxed.as_ref()).is_none());
    }
}
