#![forbid(unsafe_code)]

//! Change-classified text spans.
//!
//! A [`Part`] is the atomic unit of diffed text: a run of characters with a
//! single [`PartKind`]. A [`MarkedLine`] is the ordered list of parts making
//! up one side of an aligned line.
//!
//! Lines never carry in-band marker bytes; the [`marker`](crate::marker)
//! module converts to and from that encoding at the boundary.
//!
//! # Example
//! ```
//! use ocdiff_text::{MarkedLine, PartKind};
//!
//! let mut line = MarkedLine::new();
//! line.push_equal("Hello ");
//! line.push_delete("World");
//! assert_eq!(line.plain_text(), "Hello World");
//! assert_eq!(line.width(), 11);
//! assert_eq!(line.parts()[1].kind, PartKind::Delete);
//! ```

use crate::width::{display_width, grapheme_width};
use smallvec::SmallVec;
use unicode_segmentation::UnicodeSegmentation;

/// Change classification of a span of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PartKind {
    /// Unchanged text.
    #[default]
    Equal,
    /// Text only present on this side, added.
    Insert,
    /// Text only present on this side, removed.
    Delete,
    /// Text present on both sides but different.
    Change,
}

impl PartKind {
    /// Marker tag character for this kind (`None` for unmarked text).
    #[must_use]
    pub const fn tag(self) -> Option<char> {
        match self {
            Self::Equal => None,
            Self::Insert => Some('+'),
            Self::Delete => Some('-'),
            Self::Change => Some('^'),
        }
    }

    /// Parse a marker tag character.
    #[must_use]
    pub const fn from_tag(tag: char) -> Option<Self> {
        match tag {
            '+' => Some(Self::Insert),
            '-' => Some(Self::Delete),
            '^' => Some(Self::Change),
            _ => None,
        }
    }

    /// Whether the kind denotes a difference.
    #[inline]
    #[must_use]
    pub const fn is_marked(self) -> bool {
        !matches!(self, Self::Equal)
    }
}

/// A contiguous run of text with one change classification.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Part {
    /// Classification of the text.
    pub kind: PartKind,
    /// The text content.
    pub text: String,
}

impl Part {
    /// Create a part.
    #[must_use]
    pub fn new(kind: PartKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Create an unchanged part.
    #[must_use]
    pub fn equal(text: impl Into<String>) -> Self {
        Self::new(PartKind::Equal, text)
    }

    /// Display width of the text.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        display_width(&self.text)
    }

    /// Whether the text is non-empty and consists only of whitespace.
    ///
    /// Carriage returns do not count: they are drawn as a visible `\r`.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(|c| c.is_whitespace() && c != '\r')
    }
}

/// One side of an aligned line, as an ordered list of parts.
///
/// Adjacent parts of the same kind are merged on push, and empty parts are
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MarkedLine {
    parts: SmallVec<[Part; 4]>,
}

impl MarkedLine {
    /// Create an empty line.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            parts: SmallVec::new(),
        }
    }

    /// Create a line holding unmarked text.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        let mut line = Self::new();
        line.push(PartKind::Equal, text);
        line
    }

    /// Create a line whose whole text carries one kind.
    #[must_use]
    pub fn uniform(kind: PartKind, text: impl Into<String>) -> Self {
        let mut line = Self::new();
        line.push(kind, text);
        line
    }

    /// Build a line from parts, merging and dropping empties.
    #[must_use]
    pub fn from_parts(parts: impl IntoIterator<Item = Part>) -> Self {
        let mut line = Self::new();
        for part in parts {
            line.push(part.kind, part.text);
        }
        line
    }

    /// Append text of the given kind.
    pub fn push(&mut self, kind: PartKind, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        match self.parts.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(&text),
            _ => self.parts.push(Part { kind, text }),
        }
    }

    /// Append unchanged text.
    pub fn push_equal(&mut self, text: impl Into<String>) {
        self.push(PartKind::Equal, text);
    }

    /// Append inserted text.
    pub fn push_insert(&mut self, text: impl Into<String>) {
        self.push(PartKind::Insert, text);
    }

    /// Append deleted text.
    pub fn push_delete(&mut self, text: impl Into<String>) {
        self.push(PartKind::Delete, text);
    }

    /// Append changed text.
    pub fn push_change(&mut self, text: impl Into<String>) {
        self.push(PartKind::Change, text);
    }

    /// The parts of this line.
    #[inline]
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Whether the line has no text.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Whether any part carries a change classification.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.parts.iter().any(|p| p.kind.is_marked())
    }

    /// Concatenated text with all classification removed.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.parts.iter().map(|p| p.text.as_str()).collect()
    }

    /// Display width of the whole line.
    #[must_use]
    pub fn width(&self) -> usize {
        self.parts.iter().map(Part::width).sum()
    }

    /// Remove trailing whitespace from a trailing run of unchanged text.
    ///
    /// Marked text is never trimmed, so a whitespace-only change at the end
    /// of a line stays visible.
    pub fn trim_end(&mut self) {
        while let Some(last) = self.parts.last_mut() {
            if last.kind.is_marked() {
                return;
            }
            let trimmed = last.text.trim_end().len();
            last.text.truncate(trimmed);
            if !last.text.is_empty() {
                return;
            }
            self.parts.pop();
        }
    }

    /// Split the line so the head fits in `width` display columns.
    ///
    /// Splits only at grapheme cluster boundaries. A part cut by the split
    /// appears in both halves with the same kind, so each half is
    /// independently well-formed. If the first cluster alone is wider than
    /// `width` it still goes to the head, so repeated splitting always makes
    /// progress.
    #[must_use]
    pub fn split_at_width(&self, width: usize) -> (Self, Self) {
        let mut head = Self::new();
        let mut tail = Self::new();
        let mut used = 0usize;
        let mut full = false;

        for part in &self.parts {
            if full {
                tail.push(part.kind, part.text.clone());
                continue;
            }
            let mut cut = part.text.len();
            for (offset, grapheme) in part.text.grapheme_indices(true) {
                let w = grapheme_width(grapheme);
                if used + w > width && !(used == 0 && head.is_empty() && offset == 0) {
                    cut = offset;
                    full = true;
                    break;
                }
                used += w;
            }
            let (left, right) = part.text.split_at(cut);
            head.push(part.kind, left);
            tail.push(part.kind, right);
        }

        (head, tail)
    }
}

impl From<&str> for MarkedLine {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for MarkedLine {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}

impl FromIterator<Part> for MarkedLine {
    fn from_iter<I: IntoIterator<Item = Part>>(iter: I) -> Self {
        Self::from_parts(iter)
    }
}
