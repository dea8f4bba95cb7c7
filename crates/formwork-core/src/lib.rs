//! The formwork engine.
//!
//! A [`Form`] owns uniquely identified [`Element`]s and an ordered render
//! program. Elements carry their own [`Filter`]s, [`Validator`]s, an optional
//! [`Renderer`] and a list of [`Decorator`]s. Forms add three things on top:
//!
//! - **Default configuration**: decorator lists and renderers keyed by
//!   [`ElementKind`](formwork_model::ElementKind), resolved by walking the
//!   kind hierarchy when an element is added
//! - **Decorator scopes**: decorators wrapping the output of every element
//!   added between [`Form::start_decorator`] and [`Form::end_decorator`]
//! - **Whole-form validation and data extraction** keyed by the `name`
//!   property of each element
//!
//! Configuration mistakes are reported as [`FormError`]. Validation failures
//! are data: a [`ValidationReport`] of messages per element.
//!
//! # Example
//!
//! ```rust,ignore
//! use formwork_core::{Element, Form};
//!
//! let mut form = Form::new();
//! form.add_element(Element::new("email", &TEXT).with_required(true))?;
//! let report = form.validate()?;
//! assert!(report.element_errors("email").is_some());
//! ```

pub mod converter;
pub mod decorator;
pub mod element;
pub mod error;
pub mod filter;
pub mod form;
pub mod options;
pub mod renderer;
pub mod validator;

pub use converter::ValueConverter;
pub use decorator::{AsAny, Decorator, fresh_copy};
pub use element::{Behavior, Element};
pub use error::{FormError, Result};
pub use filter::{Filter, RemoveControlCharacters, StringTrim};
pub use form::{DataValue, FORM_LEVEL_KEY, Form, FormData, RenderPart, ValidationReport};
pub use options::{OptionGroup, OptionSet, SelectOption};
pub use renderer::{RenderContext, Renderer};
pub use validator::{FormValidator, RequiredValidator, Validator};
