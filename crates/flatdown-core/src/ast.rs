//! Element and tag types produced by the parser.
//!
//! The output model is deliberately flat: a document is an ordered
//! `Vec<Element>`, and each heading or paragraph carries an ordered list of
//! styled [`Tag`]s. There is no nesting below the tag level. The model is:
//!
//! - **Zero-copy**: tag content uses `Cow<'a, str>` to borrow from the input
//! - **Identity-carrying**: every element and tag holds a process-assigned
//!   [`Id`] for downstream list re-rendering and editing
//! - **Order-preserving**: elements appear in source order

use crate::ident::Id;

/// Inline style of a [`Tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagStyle {
    /// Unstyled text, preserved exactly as authored.
    Plain,
    /// Text delimited by a `**` pair; content trimmed at the marker boundary.
    Bold,
    /// Text delimited by a `_` pair; content trimmed at the marker boundary.
    Italic,
}

/// One styled run of text inside a heading or paragraph.
///
/// A block's tag sequence, concatenated in order, reconstructs the block's
/// raw line text minus the style marker characters (modulo the trimming of
/// bold/italic content).
#[derive(Debug, Clone, PartialEq)]
pub struct Tag<'a> {
    /// The inline style of this run.
    pub style: TagStyle,
    /// The literal text content.
    pub content: CowStr<'a>,
    /// Process-assigned identifier, unique within one parse result.
    pub id: Id,
}

impl<'a> Tag<'a> {
    /// Create a plain tag over the given text.
    #[inline]
    pub fn plain(content: impl Into<CowStr<'a>>, id: Id) -> Self {
        Self {
            style: TagStyle::Plain,
            content: content.into(),
            id,
        }
    }

    /// Create a tag with the given style over the given text.
    #[inline]
    pub fn styled(style: TagStyle, content: impl Into<CowStr<'a>>, id: Id) -> Self {
        Self {
            style,
            content: content.into(),
            id,
        }
    }
}

/// A block-level element of the parsed document.
#[derive(Debug, Clone, PartialEq)]
pub enum Element<'a> {
    /// Section heading with its `#`-run length as the level.
    Heading(Heading<'a>),
    /// One logical line of paragraph text with inline styling.
    Paragraph(Paragraph<'a>),
    /// Explicit paragraph boundary (`\n\n` in the source). Carries no tags.
    Break(Break),
}

impl<'a> Element<'a> {
    /// The element's process-assigned identifier.
    #[inline]
    pub fn id(&self) -> Id {
        match self {
            Element::Heading(h) => h.id,
            Element::Paragraph(p) => p.id,
            Element::Break(b) => b.id,
        }
    }

    /// The element's tag sequence; empty for break markers.
    #[inline]
    pub fn tags(&self) -> &[Tag<'a>] {
        match self {
            Element::Heading(h) => &h.tags,
            Element::Paragraph(p) => &p.tags,
            Element::Break(_) => &[],
        }
    }
}

/// Section heading.
///
/// The level is the length of the leading `#` run and is not clamped; a
/// seven-hash heading parses to level 7 and is passed through as-is.
/// Headings always carry exactly one plain tag: inline markers inside a
/// heading line are emitted verbatim, not interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct Heading<'a> {
    /// Length of the leading `#` run.
    pub level: usize,
    /// Exactly one plain tag with the trimmed line remainder.
    pub tags: Vec<Tag<'a>>,
    /// Process-assigned identifier.
    pub id: Id,
}

/// Paragraph built from one logical run of non-heading, non-break text.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph<'a> {
    /// Styled runs covering the paragraph's line exactly, left to right.
    /// Never empty; a blank line yields a single empty plain tag.
    pub tags: Vec<Tag<'a>>,
    /// Process-assigned identifier.
    pub id: Id,
}

/// Explicit paragraph boundary. Structural only; no content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Break {
    /// Process-assigned identifier.
    pub id: Id,
}

/// Borrowed or owned string type for zero-copy parsing.
pub type CowStr<'a> = std::borrow::Cow<'a, str>;
