use quick_xml::Reader;
use quick_xml::events::Event;

use super::{Element, ScanError, line_at, position, read_element, strip_bom, tag_start};
use crate::error::{Error, Result};

/// A whole document reduced to its root tags and direct child elements.
///
/// Text, comments and processing instructions between children are not kept.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    /// Everything before the root start tag (declaration, comments, doctype).
    pub prolog: &'a str,
    pub root_start: &'a str,
    /// `None` when the root element is self-closing.
    pub root_end: Option<&'a str>,
    pub children: Vec<Element<'a>>,
}

impl Document<'_> {
    pub fn entry_count(&self) -> usize {
        self.children.iter().filter(|c| c.is_entry()).count()
    }
}

/// Splits `src` into prolog, root tags and direct children.
///
/// A leading byte order mark is dropped; all spans index the text after it.
pub fn parse_document(src: &str) -> Result<Document<'_>> {
    let src = strip_bom(src);
    let mut reader = Reader::from_str(src);
    let to_error = |err: ScanError| Error::xml(line_at(src, err.pos), err.message);

    loop {
        let event = reader
            .read_event()
            .map_err(|e| Error::xml(line_at(src, position(&reader)), e.to_string()))?;
        let tag_end = position(&reader);

        match event {
            Event::Start(_) => {
                let begin = tag_start(src, tag_end);
                let (children, root_end) = read_children(&mut reader, src).map_err(to_error)?;
                return Ok(Document {
                    prolog: &src[..begin],
                    root_start: &src[begin..tag_end],
                    root_end: Some(root_end),
                    children,
                });
            }
            Event::Empty(_) => {
                let begin = tag_start(src, tag_end);
                return Ok(Document {
                    prolog: &src[..begin],
                    root_start: &src[begin..tag_end],
                    root_end: None,
                    children: Vec::new(),
                });
            }
            Event::Eof => return Err(Error::xml(line_at(src, tag_end), "no root element")),
            _ => {}
        }
    }
}

fn read_children<'a>(
    reader: &mut Reader<&'a [u8]>,
    src: &'a str,
) -> Result<(Vec<Element<'a>>, &'a str), ScanError> {
    let mut children = Vec::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| ScanError::from_reader(position(reader), &e))?;
        let pos = position(reader);

        match event {
            Event::Start(start) => children.push(read_element(reader, src, &start, pos, false)?),
            Event::Empty(start) => children.push(read_element(reader, src, &start, pos, true)?),
            Event::End(_) => return Ok((children, &src[tag_start(src, pos)..pos])),
            Event::Eof => return Err(ScanError::new(pos, "root element is not closed")),
            _ => {}
        }
    }
}
