//! Baseline renderers and the context they run in.

use formwork_i18n::Translation;
use formwork_model::Tag;

use crate::element::Element;
use crate::form::Form;

/// Everything a renderer or decorator may consult besides the element itself.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    form: Option<&'a Form>,
    translation: &'a Translation,
}

impl<'a> RenderContext<'a> {
    /// Context for rendering inside `form`.
    pub fn for_form(form: &'a Form) -> Self {
        Self {
            form: Some(form),
            translation: form.translation(),
        }
    }

    /// Context for rendering an element outside of any form.
    pub fn standalone(translation: &'a Translation) -> Self {
        Self {
            form: None,
            translation,
        }
    }

    pub fn form(&self) -> Option<&'a Form> {
        self.form
    }

    pub fn translation(&self) -> &'a Translation {
        self.translation
    }
}

/// Produces the baseline tags for one element.
pub trait Renderer: Send + Sync {
    fn render(&self, element: &Element, ctx: &RenderContext<'_>) -> Vec<Tag>;
}
