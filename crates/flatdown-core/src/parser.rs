//! Block segmentation for the flat element model.
//!
//! The parser owns a single cursor over the whole input and classifies
//! each position as a heading start, an explicit break, or the start of a
//! paragraph run. Paragraph content is handed to [`crate::inline`] one
//! line window at a time. Parsing is total: every input, including the
//! empty string, produces a defined element sequence.

use crate::ast::{Break, Element, Heading, Paragraph, Tag};
use crate::cursor::Cursor;
use crate::ident::{IdSource, RandomIds};
use crate::inline;

/// Exact two-character sequence that separates paragraphs.
const BREAK_MARK: &str = "\n\n";

/// Block parser, generic over its identifier source.
///
/// The default source hands out random UUIDs; inject a
/// [`crate::ident::SequentialIds`] for reproducible results.
pub struct Parser<I = RandomIds> {
    ids: I,
}

impl Parser<RandomIds> {
    /// Create a parser with the default random id source.
    #[inline]
    pub fn new() -> Self {
        Self { ids: RandomIds }
    }
}

impl Default for Parser<RandomIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdSource> Parser<I> {
    /// Create a parser drawing identifiers from `ids`.
    #[inline]
    pub fn with_ids(ids: I) -> Self {
        Self { ids }
    }

    /// Parse `text` into its ordered element sequence.
    ///
    /// Never fails; an empty input yields an empty sequence.
    pub fn parse<'a>(&mut self, text: &'a str) -> Vec<Element<'a>> {
        let mut elements = Vec::with_capacity(16);
        let mut cursor = Cursor::new(text);

        while !cursor.is_eof() {
            if let Some(level) = heading_level(cursor.rest()) {
                elements.push(self.parse_heading(&mut cursor, level));
            } else if cursor.starts_with(BREAK_MARK) {
                elements.push(Element::Break(Break {
                    id: self.ids.fresh(),
                }));
                cursor.advance(BREAK_MARK.len());
            } else {
                elements.push(self.parse_paragraph(&mut cursor));
            }

            // Consume one line-ending newline that does not open a break,
            // so a lone newline between two lines neither becomes content
            // nor re-triggers the break test. A `\n\n` pair stays put for
            // the next round.
            if cursor.peek() == Some(b'\n') && !cursor.starts_with(BREAK_MARK) {
                cursor.advance(1);
            }
        }

        elements
    }

    fn parse_heading<'a>(&mut self, cursor: &mut Cursor<'a>, level: usize) -> Element<'a> {
        let line = cursor.line();
        // Skip the `#` run and exactly one following space; the heading
        // test guarantees that space exists.
        let content = line[level + 1..].trim();
        let tags = vec![Tag::plain(content, self.ids.fresh())];
        cursor.advance(line.len());
        Element::Heading(Heading {
            level,
            tags,
            id: self.ids.fresh(),
        })
    }

    fn parse_paragraph<'a>(&mut self, cursor: &mut Cursor<'a>) -> Element<'a> {
        let line = cursor.line();
        let tags = inline::parse_tags(line, &mut self.ids);
        cursor.advance(line.len());
        Element::Paragraph(Paragraph {
            tags,
            id: self.ids.fresh(),
        })
    }
}

/// Heading test: a run of `#` at the start of the remaining input is a
/// heading only when the byte immediately after the run is a space. The
/// run length is the level, with no upper bound.
fn heading_level(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let level = bytes.iter().take_while(|&&b| b == b'#').count();
    if level > 0 && bytes.get(level) == Some(&b' ') {
        Some(level)
    } else {
        None
    }
}

/// Parse `text` into its ordered element sequence using random ids.
///
/// Convenience wrapper over [`Parser::new`] plus [`Parser::parse`].
#[inline]
pub fn parse_markdown_elements(text: &str) -> Vec<Element<'_>> {
    Parser::new().parse(text)
}
