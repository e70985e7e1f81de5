use quick_xml::Reader;
use quick_xml::events::Event;

use super::{ENTRY_TAG, Element, position, read_element};
use crate::error::{Error, Result};

/// Returns `true` if the line opens with an `<entry` tag prefix.
///
/// This is only a cheap filter; [`parse_entry_line`] decides whether the
/// line really holds an `entry` element.
pub fn looks_like_entry(line: &str) -> bool {
    line.trim_start()
        .strip_prefix('<')
        .is_some_and(|rest| rest.starts_with(ENTRY_TAG))
}

/// A single source line holding one complete entry element.
#[derive(Debug, Clone)]
pub struct EntryLine<'a> {
    pub indent: &'a str,
    pub element: Element<'a>,
    /// Anything after the element's end tag on the same line.
    pub trailing: &'a str,
}

impl EntryLine<'_> {
    pub fn value(&self) -> &str {
        &self.element.value
    }

    /// Renders the line with the entry's content replaced by `value`.
    pub fn render(&self, value: &str) -> String {
        format!("{}{}{}", self.indent, self.element.render(value), self.trailing)
    }
}

/// Parses `line` (1-based `line_no`) as a standalone XML fragment.
///
/// Returns `Ok(None)` when the line starts with some other element whose
/// name merely begins with `entry`, such as `<entryGroup>`.
pub fn parse_entry_line(line: &str, line_no: usize) -> Result<Option<EntryLine<'_>>> {
    let trimmed = line.trim_start();
    let indent = &line[..line.len() - trimmed.len()];

    let mut reader = Reader::from_str(trimmed);
    let event = reader
        .read_event()
        .map_err(|e| Error::xml(line_no, e.to_string()))?;
    let tag_end = position(&reader);

    let (start, empty) = match event {
        Event::Start(start) => (start, false),
        Event::Empty(start) => (start, true),
        _ => return Ok(None),
    };
    if start.local_name().as_ref() != ENTRY_TAG.as_bytes() {
        return Ok(None);
    }

    let element = read_element(&mut reader, trimmed, &start, tag_end, empty).map_err(|err| {
        if err.truncated {
            Error::xml(line_no, "entry element does not close on this line")
        } else {
            Error::xml(line_no, err.message)
        }
    })?;
    let trailing = &trimmed[element.span.end..];

    Ok(Some(EntryLine {
        indent,
        element,
        trailing,
    }))
}
