#![forbid(unsafe_code)]

//! Width-aware wrapping of marked lines.
//!
//! Wrapping respects:
//! - grapheme cluster boundaries (a code point or emoji is never cut)
//! - display widths (CJK characters are 2 columns)
//! - change spans (a span cut by a wrap continues, with the same kind, on
//!   the next fragment)
//!
//! Wrapping is character based, not word based: every fragment but the last
//! is filled as far as the width allows, so concatenating the fragments
//! gives back the original text.
//!
//! # Example
//! ```
//! use ocdiff_text::{MarkedLine, wrap_line};
//!
//! let lines = wrap_line(&MarkedLine::plain("Supercalifragilistic"), 10);
//! assert_eq!(lines.len(), 2);
//! assert_eq!(lines[0].plain_text(), "Supercalif");
//! ```

use crate::part::MarkedLine;

/// Split a marked line into fragments no wider than `width`.
///
/// A line that already fits is returned as a single fragment, and so is an
/// empty line. A width of zero is treated as one.
#[must_use]
pub fn wrap_line(line: &MarkedLine, width: usize) -> Vec<MarkedLine> {
    let width = width.max(1);
    if line.width() <= width {
        return vec![line.clone()];
    }

    let mut fragments = Vec::new();
    let mut rest = line.clone();
    loop {
        let (head, tail) = rest.split_at_width(width);
        fragments.push(head);
        if tail.width() <= width {
            if !tail.is_empty() {
                fragments.push(tail);
            }
            break;
        }
        rest = tail;
    }

    tracing::trace!(width, fragments = fragments.len(), "wrapped line");
    fragments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::{Part, PartKind};

    #[test]
    fn no_wrap_needed() {
        let line = MarkedLine::plain("hello");
        assert_eq!(wrap_line(&line, 10), vec![line]);
    }

    #[test]
    fn exact_width_is_not_split() {
        let line = MarkedLine::plain("0123456789");
        assert_eq!(wrap_line(&line, 10).len(), 1);
    }

    #[test]
    fn empty_line_is_one_fragment() {
        let fragments = wrap_line(&MarkedLine::new(), 5);
        assert_eq!(fragments, vec![MarkedLine::new()]);
    }

    #[test]
    fn wraps_into_full_fragments() {
        let fragments = wrap_line(&MarkedLine::plain("abcdefghij"), 4);
        let texts: Vec<String> = fragments.iter().map(MarkedLine::plain_text).collect();
        assert_eq!(texts, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn marked_span_is_reopened_after_wrap() {
        let mut line = MarkedLine::new();
        line.push_equal("ab");
        line.push_insert("cdefgh");
        let fragments = wrap_line(&line, 4);
        assert_eq!(fragments.len(), 2);
        assert_eq!(
            fragments[0].parts(),
            &[Part::equal("ab"), Part::new(PartKind::Insert, "cd")]
        );
        assert_eq!(fragments[1].parts(), &[Part::new(PartKind::Insert, "efgh")]);
    }

    #[test]
    fn span_covering_whole_tail_stays_one_color() {
        let line = MarkedLine::uniform(PartKind::Delete, "x".repeat(25));
        let fragments = wrap_line(&line, 10);
        assert_eq!(fragments.len(), 3);
        for fragment in &fragments {
            assert_eq!(fragment.parts().len(), 1);
            assert_eq!(fragment.parts()[0].kind, PartKind::Delete);
        }
    }

    #[test]
    fn wide_chars_respect_width() {
        let fragments = wrap_line(&MarkedLine::plain("你好世界"), 5);
        let texts: Vec<String> = fragments.iter().map(MarkedLine::plain_text).collect();
        assert_eq!(texts, vec!["你好", "世界"]);
    }

    #[test]
    fn width_one_with_wide_chars_still_terminates() {
        let fragments = wrap_line(&MarkedLine::plain("中文"), 1);
        assert_eq!(fragments.len(), 2);
    }

    #[test]
    fn zero_width_behaves_like_one() {
        let fragments = wrap_line(&MarkedLine::plain("abc"), 0);
        assert_eq!(fragments.len(), 3);
    }
}
