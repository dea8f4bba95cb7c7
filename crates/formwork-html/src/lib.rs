//! HTML building blocks for formwork.
//!
//! This crate provides:
//!
//! - **Element kinds** for inputs, textareas, selects, radios, checkboxes,
//!   date pickers, buttons and static markup ([`elements`])
//! - **Renderers** producing the baseline tags of each kind ([`renderers`])
//! - **Decorators** for labels, error lists and wrapping tags ([`decorators`])
//! - **Validators** for common value rules and the date range form rule
//!   ([`validators`])
//! - [`HtmlForm`], a form preconfigured for HTML output
//! - [`markup`], the serializer turning tag trees into HTML text
//!
//! # Example
//!
//! ```rust
//! use formwork_html::{HtmlForm, elements};
//!
//! let mut form = HtmlForm::new().unwrap();
//! form.add_element(elements::input("email").with_label("Email")).unwrap();
//! let html = form.render_html().unwrap();
//! assert!(html.starts_with("<form method=\"POST\">"));
//! ```

pub mod decorators;
pub mod elements;
pub mod error;
pub mod form;
pub mod markup;
pub mod renderers;
pub mod validators;

pub use decorators::{ElementErrorsDecorator, FormErrorsDecorator, HtmlTagDecorator, LabelDecorator};
pub use error::{HtmlError, Result};
pub use form::{FORM_LEVEL_ERRORS_SCOPE, HtmlForm};
pub use markup::to_html;
