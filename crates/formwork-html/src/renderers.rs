//! Baseline renderers for the HTML kinds.
//!
//! Renderers copy the element properties onto the produced tag as
//! attributes and add what the kind needs on top (`value`, `required`,
//! `checked`, ...). They never consult decorators or the form.

use std::collections::HashSet;

use formwork_core::{Element, RenderContext, Renderer};
use formwork_model::Tag;

use crate::elements::{
    DEFAULT_SEPARATOR, ESCAPE_OPTION_LABELS_HINT, PREPEND_OPTION_LABELS_HINT, SEPARATOR_HINT,
    enabled_value,
};

/// The element's properties as a tag, plus `required` when set.
fn base_tag(name: &str, element: &Element) -> Tag {
    let mut tag = Tag::new(name).with_attributes(element.properties());
    if element.is_required() {
        tag.set_attribute("required", "required");
    }
    tag
}

fn hint_flag(element: &Element, key: &str, default: bool) -> bool {
    element
        .hint(key)
        .map_or(default, |value| value.trim().eq_ignore_ascii_case("true"))
}

/// `value` with every run of spaces replaced by a single `-`.
fn dashed(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut in_run = false;
    for ch in value.chars() {
        if ch == ' ' {
            if !in_run {
                result.push('-');
            }
            in_run = true;
        } else {
            result.push(ch);
            in_run = false;
        }
    }
    result
}

/// `<input value="...">` using the element's `type` property (`text` if unset).
#[derive(Debug, Clone, Copy, Default)]
pub struct InputRenderer;

impl Renderer for InputRenderer {
    fn render(&self, element: &Element, _ctx: &RenderContext<'_>) -> Vec<Tag> {
        let mut tag = base_tag("input", element);
        if element.property("type").is_none() {
            tag.set_attribute("type", "text");
        }
        tag.set_attribute("value", element.first_value().unwrap_or_default());
        vec![tag]
    }
}

/// `<input type="password">` without a `value` attribute.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordRenderer;

impl Renderer for PasswordRenderer {
    fn render(&self, element: &Element, _ctx: &RenderContext<'_>) -> Vec<Tag> {
        let mut tag = base_tag("input", element);
        tag.set_attribute("type", "password");
        tag.remove_attribute("value");
        vec![tag]
    }
}

/// `<input type="hidden">`. Hidden inputs are never marked required.
#[derive(Debug, Clone, Copy, Default)]
pub struct HiddenRenderer;

impl Renderer for HiddenRenderer {
    fn render(&self, element: &Element, _ctx: &RenderContext<'_>) -> Vec<Tag> {
        vec![
            Tag::new("input")
                .with_attributes(element.properties())
                .with_attribute("type", "hidden")
                .with_attribute("value", element.first_value().unwrap_or_default()),
        ]
    }
}

/// `<textarea>` with the value as escaped content.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextareaRenderer;

impl Renderer for TextareaRenderer {
    fn render(&self, element: &Element, _ctx: &RenderContext<'_>) -> Vec<Tag> {
        let tag = base_tag("textarea", element).with_content(element.first_value().unwrap_or_default());
        vec![tag]
    }
}

/// `<input type="checkbox">`, checked when the value equals the enabled value.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckboxRenderer;

impl Renderer for CheckboxRenderer {
    fn render(&self, element: &Element, _ctx: &RenderContext<'_>) -> Vec<Tag> {
        let mut tag = base_tag("input", element);
        tag.set_attribute("type", "checkbox");
        tag.set_attribute("value", enabled_value(element));
        tag.remove_attribute("checked");
        if element.first_value() == Some(enabled_value(element)) {
            tag.set_attribute("checked", "checked");
        }
        vec![tag]
    }
}

/// `<select>` with one `<option>` per option.
///
/// Groups with both an id and a text become `<optgroup>` tags with id
/// `{select id}-{group id}`; other groups contribute their options directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectRenderer;

impl Renderer for SelectRenderer {
    fn render(&self, element: &Element, _ctx: &RenderContext<'_>) -> Vec<Tag> {
        let mut select = base_tag("select", element);
        if element.is_multi_value() {
            select.set_attribute("multiple", "multiple");
        }
        let selected: HashSet<&str> = element
            .values()
            .iter()
            .filter_map(Option::as_deref)
            .collect();

        for group in element.options().groups() {
            if group.options().is_empty() {
                continue;
            }
            let options = group.options().iter().map(|option| {
                let mut tag = Tag::new("option")
                    .with_attribute("value", option.value())
                    .with_content(option.text());
                if selected.contains(option.value()) {
                    tag.set_attribute("selected", "selected");
                }
                if !option.is_enabled() {
                    tag.set_attribute("disabled", "disabled");
                }
                tag
            });

            let labelled = group
                .id()
                .zip(group.text())
                .filter(|(id, text)| !id.trim().is_empty() && !text.trim().is_empty());
            match labelled {
                Some((id, text)) => {
                    let mut optgroup = Tag::new("optgroup")
                        .with_attribute("id", format!("{}-{id}", element.id()))
                        .with_attribute("label", text)
                        .with_children(options);
                    if !group.is_enabled() {
                        optgroup.set_attribute("disabled", "disabled");
                    }
                    select.push_child(optgroup);
                }
                None => select.push_child(Tag::fragment().with_children(options)),
            }
        }
        vec![select]
    }
}

/// Input type produced by [`MultiOptionRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Radio,
    Checkbox,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
        }
    }
}

/// One `<label><input ...>text</label>` per option, joined by the
/// `separator` hint.
///
/// Option ids are `{element id}-{value}` with runs of spaces replaced by
/// `-`. Options that cannot be selected (disabled themselves or in a disabled
/// group) render `disabled`. Only radios carry `required`; a required
/// checkbox list would force every box.
#[derive(Debug, Clone, Copy)]
pub struct MultiOptionRenderer {
    input_type: InputType,
}

impl MultiOptionRenderer {
    pub fn new(input_type: InputType) -> Self {
        Self { input_type }
    }

    pub fn input_type(&self) -> InputType {
        self.input_type
    }
}

impl Renderer for MultiOptionRenderer {
    fn render(&self, element: &Element, _ctx: &RenderContext<'_>) -> Vec<Tag> {
        let enabled = element.options().enabled_values();
        let current: HashSet<&str> = element
            .values()
            .iter()
            .filter_map(Option::as_deref)
            .collect();
        let prepend = hint_flag(element, PREPEND_OPTION_LABELS_HINT, false);
        let escape = hint_flag(element, ESCAPE_OPTION_LABELS_HINT, true);
        let separator = element.hint(SEPARATOR_HINT).unwrap_or(DEFAULT_SEPARATOR);
        let element_id = element.property("id");

        let mut result = Vec::new();
        for option in element.options().options() {
            let value = option.value();
            let mut input = Tag::new("input")
                .with_attributes(element.properties())
                .with_attribute("type", self.input_type.as_str())
                .with_attribute("value", value);
            if let Some(id) = element_id {
                input.set_attribute("id", format!("{id}-{}", dashed(value)));
            }
            if current.contains(value) {
                input.set_attribute("checked", "checked");
            }
            if !enabled.contains(&value) {
                input.set_attribute("disabled", "disabled");
            }
            if element.is_required() && self.input_type == InputType::Radio {
                input.set_attribute("required", "required");
            }

            let text = Tag::fragment()
                .with_content(option.text())
                .with_escape(escape);
            let label = if prepend {
                Tag::new("label").with_child(text).with_child(input)
            } else {
                Tag::new("label").with_child(input).with_child(text)
            };

            if !result.is_empty() && !separator.is_empty() {
                result.push(Tag::raw(separator));
            }
            result.push(label);
        }
        result
    }
}

/// `<button>` with the translated label as content.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonRenderer;

impl Renderer for ButtonRenderer {
    fn render(&self, element: &Element, ctx: &RenderContext<'_>) -> Vec<Tag> {
        let mut tag = Tag::new("button")
            .with_attributes(element.properties())
            .with_escape(hint_flag(element, "escape", true));
        if let Some(label) = element.translated_label(ctx.translation()) {
            tag.set_content(Some(label));
        }
        vec![tag]
    }
}

/// Renders a fixed tag with the element's properties merged in.
#[derive(Debug, Clone)]
pub struct StaticHtmlRenderer {
    tag: Tag,
}

impl StaticHtmlRenderer {
    pub fn new(tag: Tag) -> Self {
        Self { tag }
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }
}

impl Renderer for StaticHtmlRenderer {
    fn render(&self, element: &Element, _ctx: &RenderContext<'_>) -> Vec<Tag> {
        let mut tag = self.tag.clone();
        if !element.properties().is_empty() {
            tag = tag.with_attributes(element.properties());
        }
        vec![tag]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{checkbox, input, password, radio, select, set_checked, textarea};
    use crate::markup::to_html;
    use formwork_core::{OptionGroup, SelectOption};
    use formwork_i18n::Translation;

    fn html(element: &Element) -> String {
        let translation = Translation::default();
        let ctx = RenderContext::standalone(&translation);
        let renderer = element.default_renderer().unwrap();
        to_html(&renderer.render(element, &ctx)).unwrap()
    }

    #[test]
    fn test_input_and_password() {
        let element = input("name").with_value("Ann").with_required(true);
        assert_eq!(
            html(&element),
            r#"<input id="name" name="name" required="required" type="text" value="Ann"/>"#
        );
        let element = password("secret").with_value("hunter2");
        assert_eq!(html(&element), r#"<input id="secret" name="secret" type="password"/>"#);
    }

    #[test]
    fn test_textarea_is_never_self_closed() {
        assert_eq!(html(&textarea("bio")), r#"<textarea id="bio" name="bio"></textarea>"#);
    }

    #[test]
    fn test_checkbox() {
        let mut element = checkbox("chk");
        set_checked(&mut element, true);
        assert_eq!(
            html(&element),
            r#"<input checked="checked" id="chk" name="chk" type="checkbox" value="1"/>"#
        );
    }

    #[test]
    fn test_select_groups() {
        let mut element = select("test").with_value("2");
        let options = element.options_mut();
        options.add_option(SelectOption::new("1", "One")).unwrap();
        options.add_option(SelectOption::new("2", "Two")).unwrap();
        options.add_option(SelectOption::new("3", "Three").disabled()).unwrap();
        options
            .add_group(OptionGroup::new("g1", "Group one").with_option(SelectOption::new("4", "Four")))
            .unwrap();
        options
            .add_group(
                OptionGroup::new("off", "Disabled group")
                    .disabled()
                    .with_option(SelectOption::new("9", "Nine")),
            )
            .unwrap();
        assert_eq!(
            html(&element),
            concat!(
                r#"<select id="test" name="test">"#,
                r#"<option value="1">One</option>"#,
                r#"<option selected="selected" value="2">Two</option>"#,
                r#"<option disabled="disabled" value="3">Three</option>"#,
                r#"<optgroup id="test-g1" label="Group one"><option value="4">Four</option></optgroup>"#,
                r#"<optgroup disabled="disabled" id="test-off" label="Disabled group"><option value="9">Nine</option></optgroup>"#,
                "</select>"
            )
        );
    }

    #[test]
    fn test_radio_options() {
        let mut element = radio("test").with_value("2").with_required(true);
        element.options_mut().add_option(SelectOption::new("1", "One")).unwrap();
        element.options_mut().add_option(SelectOption::new("2", "Two")).unwrap();
        element.options_mut().add_option(SelectOption::new("a b", "<i>AB</i>")).unwrap();
        assert_eq!(
            html(&element),
            concat!(
                r#"<label><input id="test-1" name="test" required="required" type="radio" value="1"/>One</label> "#,
                r#"<label><input checked="checked" id="test-2" name="test" required="required" type="radio" value="2"/>Two</label> "#,
                r#"<label><input id="test-a-b" name="test" required="required" type="radio" value="a b"/>&lt;i&gt;AB&lt;/i&gt;</label>"#
            )
        );

        element.set_hint(SEPARATOR_HINT, "<br/>");
        element.set_hint(PREPEND_OPTION_LABELS_HINT, "true");
        element.set_hint(ESCAPE_OPTION_LABELS_HINT, "false");
        element.options_mut().remove_option("2");
        element.options_mut().remove_option("a b");
        element.options_mut().add_option(SelectOption::new("x", "<b>X</b>")).unwrap();
        assert_eq!(
            html(&element),
            concat!(
                r#"<label>One<input id="test-1" name="test" required="required" type="radio" value="1"/></label><br/>"#,
                r#"<label><b>X</b><input id="test-x" name="test" required="required" type="radio" value="x"/></label>"#
            )
        );
    }
}
