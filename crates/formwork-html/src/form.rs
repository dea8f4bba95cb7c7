//! A form preconfigured for HTML output.

use std::ops::{Deref, DerefMut};

use formwork_core::Form;
use formwork_model::{ELEMENT, Tag};

use crate::decorators::{ElementErrorsDecorator, FormErrorsDecorator, LabelDecorator};
use crate::error::Result;
use crate::markup::to_html;

/// Scope id of the decorator listing form-level errors.
pub const FORM_LEVEL_ERRORS_SCOPE: &str = "form-level-errors";

/// A [`Form`] rendered inside a `<form>` tag.
///
/// New forms use `method="POST"`, give every element a label and an error
/// list by default, and start with an empty scope that lists form-level
/// errors once the form has been validated.
#[derive(Debug)]
pub struct HtmlForm {
    form: Form,
}

impl HtmlForm {
    /// # Errors
    ///
    /// Only fails if the form-level error scope cannot be opened, which does
    /// not happen on a fresh form.
    pub fn new() -> formwork_core::Result<Self> {
        let mut form = Form::new();
        form.set_property("method", "POST");
        form.add_default_decorator(&ELEMENT, Box::new(LabelDecorator::new()));
        form.add_default_decorator(&ELEMENT, Box::new(ElementErrorsDecorator::new()));
        form.start_decorator(FORM_LEVEL_ERRORS_SCOPE, Box::new(FormErrorsDecorator::new()))?
            .end_decorator()?;
        Ok(Self { form })
    }

    /// Append `class` to the `class` attribute of the form tag.
    pub fn add_class(&mut self, class: &str) -> &mut Self {
        self.form.add_class(class);
        self
    }

    /// Render the program wrapped in a `<form>` tag carrying the form
    /// properties as attributes.
    ///
    /// # Errors
    ///
    /// Fails when the form cannot be rendered.
    pub fn render(&self) -> Result<Vec<Tag>> {
        let body = self.form.render()?;
        Ok(vec![
            Tag::new("form")
                .with_attributes(self.form.properties())
                .with_children(body),
        ])
    }

    /// Render and serialize the whole form.
    ///
    /// # Errors
    ///
    /// Fails when the form cannot be rendered or serialized.
    pub fn render_html(&self) -> Result<String> {
        let html = to_html(&self.render()?)?;
        tracing::debug!(bytes = html.len(), elements = self.form.len(), "form rendered");
        Ok(html)
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn into_inner(self) -> Form {
        self.form
    }
}

impl Deref for HtmlForm {
    type Target = Form;

    fn deref(&self) -> &Form {
        &self.form
    }
}

impl DerefMut for HtmlForm {
    fn deref_mut(&mut self) -> &mut Form {
        &mut self.form
    }
}
