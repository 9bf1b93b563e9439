//! # Flatdown Core
//!
//! A parser for a restricted Markdown subset into a flat, typed element
//! sequence, meant to feed a downstream renderer or editor model that
//! needs structured data rather than raw text.
//!
//! The format knows three block forms — `#`-run headings, explicit `\n\n`
//! paragraph breaks, and single-line paragraphs — and three inline styles
//! inside paragraphs: plain, `**bold**`, and `_italic_`. Every element and
//! tag carries a unique identifier for downstream list re-rendering.
//!
//! ## Quick Start
//!
//! ```rust
//! use flatdown_core::{parse_markdown_elements, Element};
//!
//! let elements = parse_markdown_elements("# Hello World\n\nSome **bold** text.");
//!
//! assert_eq!(elements.len(), 3);
//! assert!(matches!(elements[0], Element::Heading(_)));
//! assert!(matches!(elements[1], Element::Break(_)));
//! assert!(matches!(elements[2], Element::Paragraph(_)));
//! ```
//!
//! ## Deterministic Identifiers
//!
//! Identifiers come from an injectable [`IdSource`]; the default is UUID
//! v4. Injecting [`SequentialIds`] makes results reproducible:
//!
//! ```rust
//! use flatdown_core::{Id, Parser, SequentialIds, TagStyle};
//!
//! let mut parser = Parser::with_ids(SequentialIds::new());
//! let elements = parser.parse("**Hello World**");
//!
//! let tag = &elements[0].tags()[0];
//! assert_eq!(tag.style, TagStyle::Bold);
//! assert_eq!(tag.content, "Hello World");
//! assert_eq!(tag.id, Id::from_u128(1));
//! ```
//!
//! ## Parsing Policy
//!
//! Parsing never fails. Malformed input is classified, not rejected: a
//! `#` run without a following space is an ordinary paragraph line, and an
//! unterminated `**` or `_` marker is literal plain text.

pub mod ast;
pub mod cursor;
pub mod ident;
pub mod inline;
pub mod parser;

pub use ast::{Break, CowStr, Element, Heading, Paragraph, Tag, TagStyle};
pub use ident::{Id, IdSource, RandomIds, SequentialIds};
pub use parser::{parse_markdown_elements, Parser};
