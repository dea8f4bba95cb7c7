//! Decorator scopes and the render stack machine.

use formwork_model::Tag;

use crate::decorator::{self, Decorator};
use crate::element::Element;
use crate::error::{FormError, Result};
use crate::form::Form;
use crate::renderer::RenderContext;

/// One entry of a form's render program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderPart {
    /// Render the element with this id.
    Element(String),
    /// Open the decorator scope with this id.
    DecoratorStart(String),
    /// Close the decorator scope with this id.
    DecoratorEnd(String),
}

/// An open scope while the program runs.
struct Frame<'a> {
    scope: &'a str,
    decorator: &'a dyn Decorator,
    output: Vec<Tag>,
    elements: Vec<&'a Element>,
}

impl Form {
    /// Open a decorator scope. Elements added until the matching
    /// [`end_decorator`](Self::end_decorator) are rendered first and then
    /// handed to `decorator` as one unit. The decorator is used as given.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::DuplicateScope`] if `scope` is already in use.
    pub fn start_decorator(
        &mut self,
        scope: impl Into<String>,
        decorator: Box<dyn Decorator>,
    ) -> Result<&mut Self> {
        let scope = scope.into();
        if self.decorators.contains_key(&scope) {
            return Err(FormError::DuplicateScope { scope });
        }
        tracing::debug!(scope = %scope, decorator = decorator.name(), "decorator scope opened");
        self.decorators.insert(scope.clone(), decorator);
        self.program.push(RenderPart::DecoratorStart(scope.clone()));
        self.open_scopes.push(scope);
        Ok(self)
    }

    /// Close the innermost open decorator scope.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::NoOpenScope`] when no scope is open.
    pub fn end_decorator(&mut self) -> Result<&mut Self> {
        let scope = self.open_scopes.pop().ok_or(FormError::NoOpenScope)?;
        self.program.push(RenderPart::DecoratorEnd(scope));
        Ok(self)
    }

    /// Remove a scoped decorator and both of its program markers. Elements
    /// inside the scope stay in the program.
    pub fn remove_decorator(&mut self, scope: &str) -> Option<Box<dyn Decorator>> {
        let decorator = self.decorators.remove(scope)?;
        self.program.retain(|part| match part {
            RenderPart::DecoratorStart(existing) | RenderPart::DecoratorEnd(existing) => {
                existing != scope
            }
            RenderPart::Element(_) => true,
        });
        self.open_scopes.retain(|existing| existing != scope);
        for owner in self.element_scopes.values_mut() {
            if owner == scope {
                owner.clear();
            }
        }
        self.element_scopes.retain(|_, owner| !owner.is_empty());
        Some(decorator)
    }

    pub fn decorator(&self, scope: &str) -> Option<&dyn Decorator> {
        self.decorators.get(scope).map(|item| &**item)
    }

    pub fn decorator_mut(&mut self, scope: &str) -> Option<&mut dyn Decorator> {
        self.decorators.get_mut(scope).map(|item| &mut **item)
    }

    /// The scoped decorator `scope`, if it has type `D`.
    pub fn decorator_as<D: Decorator>(&self, scope: &str) -> Option<&D> {
        self.decorators
            .get(scope)
            .and_then(|item| decorator::downcast_ref::<D>(&**item))
    }

    pub fn decorator_as_mut<D: Decorator>(&mut self, scope: &str) -> Option<&mut D> {
        self.decorators
            .get_mut(scope)
            .and_then(|item| decorator::downcast_mut::<D>(&mut **item))
    }

    /// Scope ids in program order.
    pub fn decorator_ids(&self) -> impl Iterator<Item = &str> {
        self.program.iter().filter_map(|part| match part {
            RenderPart::DecoratorStart(scope) => Some(scope.as_str()),
            _ => None,
        })
    }

    /// Scopes opened and not yet closed, outermost first.
    pub fn open_scopes(&self) -> &[String] {
        &self.open_scopes
    }

    /// The innermost scope that was open when the element was added.
    pub fn scope_of(&self, element_id: &str) -> Option<&str> {
        self.element_scopes.get(element_id).map(String::as_str)
    }

    /// Elements added directly inside `scope`, in insertion order.
    pub fn elements_in_scope(&self, scope: &str) -> Vec<&Element> {
        self.elements()
            .filter(|element| self.scope_of(element.id()) == Some(scope))
            .collect()
    }

    pub fn program(&self) -> &[RenderPart] {
        &self.program
    }

    /// Run the render program.
    ///
    /// Elements render in isolation and their output goes to the innermost
    /// open scope (or the result). Closing a scope hands the collected output
    /// and elements to its decorator; the decorator's output and the elements
    /// move on to the next scope out.
    ///
    /// # Errors
    ///
    /// Fails when scopes are still open, the program references unknown
    /// entries, or any renderer or decorator fails.
    pub fn render(&self) -> Result<Vec<Tag>> {
        if !self.open_scopes.is_empty() {
            return Err(FormError::UnclosedScopes {
                scopes: self.open_scopes.clone(),
            });
        }
        let ctx = RenderContext::for_form(self);
        let mut result: Vec<Tag> = Vec::new();
        let mut frames: Vec<Frame<'_>> = Vec::new();

        for part in &self.program {
            tracing::trace!(?part, depth = frames.len(), "render step");
            match part {
                RenderPart::Element(id) => {
                    let element =
                        self.elements
                            .get(id)
                            .ok_or_else(|| FormError::UnknownRenderPart {
                                part: format!("element '{id}'"),
                            })?;
                    let tags = element.render(&ctx)?;
                    match frames.last_mut() {
                        Some(frame) => {
                            frame.output.extend(tags);
                            frame.elements.push(element);
                        }
                        None => result.extend(tags),
                    }
                }
                RenderPart::DecoratorStart(scope) => {
                    let decorator = self.decorators.get(scope).ok_or_else(|| {
                        FormError::UnknownRenderPart {
                            part: format!("decorator '{scope}'"),
                        }
                    })?;
                    frames.push(Frame {
                        scope: scope.as_str(),
                        decorator: &**decorator,
                        output: Vec::new(),
                        elements: Vec::new(),
                    });
                }
                RenderPart::DecoratorEnd(scope) => {
                    let frame = match frames.pop() {
                        Some(frame) if frame.scope == scope.as_str() => frame,
                        _ => {
                            return Err(FormError::UnknownRenderPart {
                                part: format!("end of decorator '{scope}'"),
                            });
                        }
                    };
                    let tags = frame.decorator.render(&ctx, &frame.elements, frame.output)?;
                    match frames.last_mut() {
                        Some(outer) => {
                            outer.output.extend(tags);
                            outer.elements.extend(frame.elements);
                        }
                        None => result.extend(tags),
                    }
                }
            }
        }

        if let Some(frame) = frames.last() {
            return Err(FormError::UnclosedScopes {
                scopes: vec![frame.scope.to_string()],
            });
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_program(program: Vec<RenderPart>) -> Result<Vec<Tag>> {
        let mut form = Form::new();
        form.program = program;
        form.render()
    }

    #[test]
    fn test_dangling_parts_fail_to_render() {
        let cases = [
            (RenderPart::Element("ghost".into()), "element 'ghost'"),
            (RenderPart::DecoratorStart("ghost".into()), "decorator 'ghost'"),
            (RenderPart::DecoratorEnd("ghost".into()), "end of decorator 'ghost'"),
        ];
        for (part, expected) in cases {
            match render_program(vec![part]) {
                Err(FormError::UnknownRenderPart { part }) => assert_eq!(part, expected),
                other => panic!("expected an unknown part error, got {other:?}"),
            }
        }
    }
}
