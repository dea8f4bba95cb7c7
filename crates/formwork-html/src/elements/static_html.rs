//! Fixed markup placed between elements.

use std::sync::Arc;

use formwork_core::{Behavior, Element};
use formwork_model::Tag;

use super::STATIC_HTML;
use crate::renderers::StaticHtmlRenderer;

/// An element that always renders `tag`, plus any properties set on the
/// element as extra attributes. It holds no value.
pub fn static_html(id: &str, tag: Tag) -> Element {
    Element::new(id, &STATIC_HTML)
        .with_behavior(Behavior::default().ignoring_values().fixed_values())
        .with_fixed_value_type(None)
        .with_default_renderer(Arc::new(StaticHtmlRenderer::new(tag)))
}
