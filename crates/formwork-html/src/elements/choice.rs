//! Elements offering a fixed set of options.
//!
//! Single-choice kinds (select, radio) accept one enabled option value;
//! multi-choice kinds (multiselect, multicheckbox) accept any number of
//! distinct enabled values. Radio and multicheckbox render one input per
//! option and read three hints:
//!
//! | hint | default | effect |
//! |---|---|---|
//! | `separator` | `" "` | raw markup placed between options |
//! | `prepend-option-labels` | `false` | option text before the input |
//! | `escape-option-labels` | `true` | escape the option text |

use std::sync::Arc;

use formwork_core::{Behavior, Element};

use super::{MULTICHECKBOX, MULTISELECT, RADIO, SELECT, html_element};
use crate::renderers::{InputType, MultiOptionRenderer, SelectRenderer};
use crate::validators::{MultipleOptionValidator, SingleOptionValidator};

pub const SEPARATOR_HINT: &str = "separator";
pub const PREPEND_OPTION_LABELS_HINT: &str = "prepend-option-labels";
pub const ESCAPE_OPTION_LABELS_HINT: &str = "escape-option-labels";

pub const DEFAULT_SEPARATOR: &str = " ";

/// A single-choice `<select>`.
pub fn select(id: &str) -> Element {
    html_element(id, &SELECT)
        .with_validator(Arc::new(SingleOptionValidator))
        .with_default_renderer(Arc::new(SelectRenderer))
}

/// A `<select multiple>`.
pub fn multiselect(id: &str) -> Element {
    html_element(id, &MULTISELECT)
        .with_behavior(Behavior::default().multi_valued())
        .with_validator(Arc::new(MultipleOptionValidator))
        .with_default_renderer(Arc::new(SelectRenderer))
}

fn multi_option(element: Element) -> Element {
    element
        .with_hint(SEPARATOR_HINT, DEFAULT_SEPARATOR)
        .with_hint(PREPEND_OPTION_LABELS_HINT, "false")
        .with_hint(ESCAPE_OPTION_LABELS_HINT, "true")
}

/// A group of radio buttons.
pub fn radio(id: &str) -> Element {
    multi_option(html_element(id, &RADIO))
        .with_validator(Arc::new(SingleOptionValidator))
        .with_default_renderer(Arc::new(MultiOptionRenderer::new(InputType::Radio)))
}

/// A group of checkboxes sharing one name.
pub fn multicheckbox(id: &str) -> Element {
    multi_option(html_element(id, &MULTICHECKBOX))
        .with_behavior(Behavior::default().multi_valued())
        .with_validator(Arc::new(MultipleOptionValidator))
        .with_default_renderer(Arc::new(MultiOptionRenderer::new(InputType::Checkbox)))
}
