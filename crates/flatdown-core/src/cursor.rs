//! Byte cursor over the input text.
//!
//! The block segmenter walks the whole input with a single cursor instead
//! of repeated index arithmetic. The conventions the rest of the parser
//! depends on: a line extends to the next newline or the end of the input,
//! exclusive of the newline itself, and advancing past a consumed block
//! leaves the cursor sitting on that newline.

use memchr::memchr;

/// Position-plus-remaining-slice view into the input.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `text`.
    #[inline]
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Current byte offset into the input.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// True when all input has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// The byte at the cursor, if any.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    /// True if the remaining input starts with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.text.as_bytes()[self.pos..].starts_with(prefix.as_bytes())
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    /// The remaining unconsumed input.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// The current line: from the cursor to the next newline or the end of
    /// the input, newline excluded.
    #[inline]
    pub fn line(&self) -> &'a str {
        let rest = self.rest();
        match memchr(b'\n', rest.as_bytes()) {
            Some(end) => &rest[..end],
            None => rest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cursor = Cursor::new("hello");
        assert_eq!(cursor.pos(), 0);
        assert!(!cursor.is_eof());
        assert_eq!(cursor.peek(), Some(b'h'));
        cursor.advance(1);
        assert_eq!(cursor.pos(), 1);
        assert_eq!(cursor.rest(), "ello");
    }

    #[test]
    fn empty_input() {
        let cursor = Cursor::new("");
        assert!(cursor.is_eof());
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.rest(), "");
        assert_eq!(cursor.line(), "");
    }

    #[test]
    fn starts_with_prefix() {
        let mut cursor = Cursor::new("\n\nrest");
        assert!(cursor.starts_with("\n\n"));
        cursor.advance(1);
        assert!(!cursor.starts_with("\n\n"));
    }

    #[test]
    fn starts_with_pattern_longer_than_remaining() {
        let mut cursor = Cursor::new("ab");
        cursor.advance(1);
        assert!(!cursor.starts_with("bc"));
        assert!(cursor.starts_with("b"));
    }

    #[test]
    fn line_stops_at_newline() {
        let mut cursor = Cursor::new("first\nsecond");
        assert_eq!(cursor.line(), "first");
        cursor.advance("first".len());
        assert_eq!(cursor.peek(), Some(b'\n'));
        cursor.advance(1);
        assert_eq!(cursor.line(), "second");
    }

    #[test]
    fn line_without_trailing_newline_runs_to_end() {
        let cursor = Cursor::new("no newline here");
        assert_eq!(cursor.line(), "no newline here");
    }

    #[test]
    fn advance_to_exact_end_is_eof() {
        let mut cursor = Cursor::new("ab");
        cursor.advance(2);
        assert!(cursor.is_eof());
        assert_eq!(cursor.peek(), None);
    }
}
