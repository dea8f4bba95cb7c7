//! Tag tree to HTML serialization.
//!
//! - Attributes are written in key order with every special character
//!   escaped.
//! - Void elements (`input`, `br`, ...) are always self-closed and never
//!   carry content.
//! - Every other element gets an explicit end tag, even when empty.
//! - Escaped content has `<`, `>` and `&` escaped; raw content is written
//!   as is.
//! - Nameless tags contribute only their content and children.

use std::io::Write;

use formwork_model::Tag;
use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::Result;

/// Elements that cannot have content.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Whether `name` is an HTML void element.
pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|void| void.eq_ignore_ascii_case(name))
}

/// Serialize a tag sequence to an HTML string.
///
/// # Errors
///
/// Only fails if the serializer produces invalid UTF-8, which it does not
/// for valid string input.
pub fn to_html(tags: &[Tag]) -> Result<String> {
    let mut buffer = Vec::new();
    write_html(&mut buffer, tags)?;
    Ok(String::from_utf8(buffer)?)
}

/// Serialize a tag sequence into `writer`.
///
/// # Errors
///
/// Returns any error produced by the underlying writer.
pub fn write_html<W: Write>(writer: W, tags: &[Tag]) -> Result<()> {
    let mut html = Writer::new(writer);
    for tag in tags {
        write_tag(&mut html, tag)?;
    }
    Ok(())
}

fn write_tag<W: Write>(html: &mut Writer<W>, tag: &Tag) -> Result<()> {
    let Some(name) = tag.name() else {
        write_body(html, tag)?;
        return Ok(());
    };

    let mut start = BytesStart::new(name);
    for (key, value) in tag.attributes().iter() {
        start.push_attribute((key, value));
    }

    if is_void_element(name) {
        html.write_event(Event::Empty(start))?;
        return Ok(());
    }
    html.write_event(Event::Start(start))?;
    write_body(html, tag)?;
    html.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_body<W: Write>(html: &mut Writer<W>, tag: &Tag) -> Result<()> {
    if let Some(content) = tag.content()
        && !content.is_empty()
    {
        let text = if tag.escape_content() {
            BytesText::from_escaped(partial_escape(content))
        } else {
            BytesText::from_escaped(content)
        };
        html.write_event(Event::Text(text))?;
    }
    for child in tag.children() {
        write_tag(html, child)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_and_empty_elements() {
        let tags = vec![
            Tag::new("input").with_attribute("name", "a").with_attribute("id", "a"),
            Tag::new("textarea").with_content(""),
        ];
        assert_eq!(
            to_html(&tags).unwrap(),
            r#"<input id="a" name="a"/><textarea></textarea>"#
        );
    }

    #[test]
    fn test_escaping() {
        let tag = Tag::new("label")
            .with_attribute("title", r#"say "hi" & <go>"#)
            .with_content(r#"<b>"x" & 'y'</b>"#);
        assert_eq!(
            to_html(&[tag]).unwrap(),
            r#"<label title="say &quot;hi&quot; &amp; &lt;go&gt;">&lt;b&gt;"x" &amp; 'y'&lt;/b&gt;</label>"#
        );
    }

    #[test]
    fn test_fragments_and_raw_content() {
        let tags = vec![
            Tag::raw("<div>arbitrary content</div>"),
            Tag::fragment()
                .with_child(Tag::new("li").with_content("one"))
                .with_child(Tag::text(" & ")),
        ];
        assert_eq!(
            to_html(&tags).unwrap(),
            "<div>arbitrary content</div><li>one</li> &amp; "
        );
    }

    #[test]
    fn test_content_before_children() {
        let tag = Tag::new("label")
            .with_content("Pick")
            .with_child(Tag::new("input").with_attribute("type", "radio"));
        assert_eq!(
            to_html(&[tag]).unwrap(),
            r#"<label>Pick<input type="radio"/></label>"#
        );
    }
}
