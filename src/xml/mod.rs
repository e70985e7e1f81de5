//! Entry extraction from localization XML.
//!
//! Elements are never re-serialized from a tree: every element keeps its
//! original start and end tag bytes, and only the text content of an entry
//! is replaced when it is rendered.

mod document;
mod fragment;

use std::ops::Range;

use quick_xml::Reader;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesStart, Event};

pub use document::{Document, parse_document};
pub use fragment::{EntryLine, looks_like_entry, parse_entry_line};

/// Local name of translatable elements.
pub const ENTRY_TAG: &str = "entry";

const BOM: char = '\u{FEFF}';

/// Drops a leading UTF-8 byte order mark.
///
/// quick-xml skips the mark without counting it in `buffer_position`, so
/// offsets only line up with the text after it.
pub fn strip_bom(src: &str) -> &str {
    src.strip_prefix(BOM).unwrap_or(src)
}

/// One element of the source, split into raw tags and its text value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element<'a> {
    /// Qualified tag name, used when a self-closing tag has to be expanded.
    pub name: String,
    pub local_name: String,
    pub start_tag: &'a str,
    /// `None` for self-closing elements.
    pub end_tag: Option<&'a str>,
    /// Concatenated unescaped text and CDATA of all descendants.
    pub value: String,
    /// The element exactly as it appears in the source.
    pub raw: &'a str,
    pub span: Range<usize>,
}

impl Element<'_> {
    pub fn is_entry(&self) -> bool {
        self.local_name == ENTRY_TAG
    }

    /// Serializes the element with its content replaced by `value`.
    pub fn render(&self, value: &str) -> String {
        let escaped = partial_escape(value);
        match self.end_tag {
            Some(end_tag) => format!("{}{escaped}{end_tag}", self.start_tag),
            None if value.is_empty() => self.start_tag.to_string(),
            None => {
                let open = self.start_tag.trim_end_matches("/>").trim_end();
                format!("{open}>{escaped}</{}>", self.name)
            }
        }
    }
}

/// Failure while scanning, positioned by byte offset in the scanned text.
#[derive(Debug)]
struct ScanError {
    pos: usize,
    message: String,
    /// The input ended before the element or markup was complete.
    truncated: bool,
}

impl ScanError {
    fn new(pos: usize, message: impl Into<String>) -> Self {
        Self {
            pos,
            message: message.into(),
            truncated: false,
        }
    }

    fn truncated(pos: usize, message: impl Into<String>) -> Self {
        Self {
            truncated: true,
            ..Self::new(pos, message)
        }
    }

    fn from_reader(pos: usize, err: &quick_xml::Error) -> Self {
        match err {
            quick_xml::Error::Syntax(_) => Self::truncated(pos, err.to_string()),
            _ => Self::new(pos, err.to_string()),
        }
    }
}

fn position(reader: &Reader<&[u8]>) -> usize {
    reader.buffer_position() as usize
}

/// Start offset of the tag that ends at `tag_end`.
///
/// `<` cannot occur inside a well-formed tag, so the last one before the end
/// opens it.
fn tag_start(src: &str, tag_end: usize) -> usize {
    src[..tag_end].rfind('<').unwrap_or(0)
}

/// 1-based line number of byte offset `pos`.
fn line_at(src: &str, pos: usize) -> usize {
    src[..pos.min(src.len())].matches('\n').count() + 1
}

/// Reads the rest of an element whose start tag was just consumed and ended
/// at `tag_end`.
fn read_element<'a>(
    reader: &mut Reader<&'a [u8]>,
    src: &'a str,
    start: &BytesStart<'_>,
    tag_end: usize,
    empty: bool,
) -> Result<Element<'a>, ScanError> {
    let begin = tag_start(src, tag_end);
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let local_name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
    let start_tag = &src[begin..tag_end];

    if empty {
        return Ok(Element {
            name,
            local_name,
            start_tag,
            end_tag: None,
            value: String::new(),
            raw: start_tag,
            span: begin..tag_end,
        });
    }

    let mut depth = 1usize;
    let mut value = String::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| ScanError::from_reader(position(reader), &e))?;
        let pos = position(reader);

        match event {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    let end_begin = tag_start(src, pos);
                    return Ok(Element {
                        name,
                        local_name,
                        start_tag,
                        end_tag: Some(&src[end_begin..pos]),
                        value,
                        raw: &src[begin..pos],
                        span: begin..pos,
                    });
                }
            }
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(|e| ScanError::new(pos, e.to_string()))?;
                value.push_str(&text);
            }
            Event::CData(cdata) => value.push_str(&String::from_utf8_lossy(&cdata)),
            Event::Eof => {
                return Err(ScanError::truncated(pos, format!("<{name}> is not closed")));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn first_element(src: &str) -> Element<'_> {
        let mut reader = Reader::from_str(src);
        loop {
            match reader.read_event().unwrap() {
                Event::Start(start) => {
                    let end = position(&reader);
                    return read_element(&mut reader, src, &start, end, false).unwrap();
                }
                Event::Empty(start) => {
                    let end = position(&reader);
                    return read_element(&mut reader, src, &start, end, true).unwrap();
                }
                Event::Eof => panic!("no element in {src:?}"),
                _ => {}
            }
        }
    }

    #[test]
    fn test_read_element_collects_value_and_tags() {
        let element = first_element(r#"<entry name="title">Fish &amp; Chips</entry>"#);
        assert!(element.is_entry());
        assert_eq!(element.start_tag, r#"<entry name="title">"#);
        assert_eq!(element.end_tag, Some("</entry>"));
        assert_eq!(element.value, "Fish & Chips");
    }

    #[test]
    fn test_read_element_concatenates_nested_text_and_cdata() {
        let element = first_element("<entry>Hello <b>bold</b><![CDATA[ <raw>]]></entry>");
        assert_eq!(element.value, "Hello bold <raw>");
    }

    #[test]
    fn test_render_escapes_markup() {
        let element = first_element(r#"<entry name="x">old</entry>"#);
        assert_eq!(
            element.render("a < b & c"),
            r#"<entry name="x">a &lt; b &amp; c</entry>"#
        );
    }

    #[test]
    fn test_render_expands_self_closing_tag() {
        let element = first_element(r#"<ns:entry name="x" />"#);
        assert!(element.is_entry());
        assert_eq!(element.render(""), r#"<ns:entry name="x" />"#);
        assert_eq!(element.render("Hola"), r#"<ns:entry name="x">Hola</ns:entry>"#);
    }

    #[test]
    fn test_line_at() {
        let src = "a\nb\nc";
        assert_eq!(line_at(src, 0), 1);
        assert_eq!(line_at(src, 2), 2);
        assert_eq!(line_at(src, 100), 3);
    }
}
