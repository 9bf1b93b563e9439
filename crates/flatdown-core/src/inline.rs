//! Inline tag extraction for paragraph windows.
//!
//! Greedy, left-to-right scanning with no backtracking. Each round of the
//! scan searches the unconsumed remainder independently for the first
//! complete bold pair and the first complete italic pair, orders them by
//! opening position, and emits plain text before each styled run. A marker
//! with no matching closer is not a style at all; its characters fall
//! through as ordinary plain text.

use memchr::memmem;

use crate::ast::{Tag, TagStyle};
use crate::ident::IdSource;

const BOLD_MARK: &str = "**";
const ITALIC_MARK: &str = "_";

/// A complete delimited run located inside a window.
///
/// All offsets are relative to the searched slice. `end` is the index one
/// past the closing delimiter, which is exactly how far the scan advances
/// after consuming the run.
#[derive(Debug, Clone, Copy)]
struct StyledRun {
    /// Offset of the opening marker.
    start: usize,
    /// Offset of the first content byte, past the opening marker.
    content_start: usize,
    /// Offset of the closing marker.
    content_end: usize,
    /// Offset one past the closing marker.
    end: usize,
}

/// Find the first complete `marker`-delimited run in `text`.
///
/// Both an opening and a closing occurrence must exist; otherwise the
/// style is absent for this scan.
fn find_styled_run(text: &str, marker: &str) -> Option<StyledRun> {
    let bytes = text.as_bytes();
    let start = memmem::find(bytes, marker.as_bytes())?;
    let content_start = start + marker.len();
    let close = memmem::find(&bytes[content_start..], marker.as_bytes())?;
    let content_end = content_start + close;
    Some(StyledRun {
        start,
        content_start,
        content_end,
        end: content_end + marker.len(),
    })
}

/// Emit the plain prefix (if non-empty) and the styled run itself, and
/// return how many bytes of `rest` were consumed.
fn push_styled<'a, I: IdSource>(
    tags: &mut Vec<Tag<'a>>,
    rest: &'a str,
    run: StyledRun,
    style: TagStyle,
    ids: &mut I,
) -> usize {
    if run.start > 0 {
        tags.push(Tag::plain(&rest[..run.start], ids.fresh()));
    }
    let content = rest[run.content_start..run.content_end].trim();
    tags.push(Tag::styled(style, content, ids.fresh()));
    run.end
}

/// Extract the tag sequence covering `window` exactly, left to right.
///
/// Pure function of the window text plus the id source; never fails. Plain
/// content is preserved exactly as authored, bold and italic content is
/// trimmed at the marker boundary.
pub fn parse_tags<'a, I: IdSource>(window: &'a str, ids: &mut I) -> Vec<Tag<'a>> {
    let mut tags = Vec::with_capacity(4);
    let mut pos = 0;

    while pos < window.len() {
        let rest = &window[pos..];
        let bold = find_styled_run(rest, BOLD_MARK);
        let italic = find_styled_run(rest, ITALIC_MARK);

        match (bold, italic) {
            (None, None) => {
                tags.push(Tag::plain(rest, ids.fresh()));
                break;
            }
            (Some(run), None) => {
                pos += push_styled(&mut tags, rest, run, TagStyle::Bold, ids);
            }
            (None, Some(run)) => {
                pos += push_styled(&mut tags, rest, run, TagStyle::Italic, ids);
            }
            (Some(bold), Some(italic)) => {
                let italic_first = italic.start < bold.start;
                let (first, first_style) = if italic_first {
                    (italic, TagStyle::Italic)
                } else {
                    (bold, TagStyle::Bold)
                };
                let consumed = push_styled(&mut tags, rest, first, first_style, ids);
                pos += consumed;

                // After the first run, only the other style is searched in
                // this round. A further run of the first style is left to
                // the next round, where it may end up inside a plain prefix.
                let (other_mark, other_style) = if italic_first {
                    (BOLD_MARK, TagStyle::Bold)
                } else {
                    (ITALIC_MARK, TagStyle::Italic)
                };
                let after = &rest[consumed..];
                if let Some(second) = find_styled_run(after, other_mark) {
                    pos += push_styled(&mut tags, after, second, other_style, ids);
                }
            }
        }
    }

    // Headings and paragraphs never carry an empty tag list; a zero-length
    // window still yields one empty plain tag.
    if tags.is_empty() {
        tags.push(Tag::plain("", ids.fresh()));
    }

    tags
}
