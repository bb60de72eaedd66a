#![forbid(unsafe_code)]

//! HTML theme: class names and the embedded stylesheet.
//!
//! All class names derive from one prefix, so a page can embed several
//! differently prefixed diffs without their styles interfering.

use ocdiff_text::{PartKind, Side};
use std::fmt::Write;

/// Class of a line span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineClass {
    /// Unchanged text.
    Equal,
    /// Text present only on the right.
    Insert,
    /// Text present only on the left.
    Delete,
    /// No content on this side.
    None,
}

impl LineClass {
    /// Class for a part of `kind` drawn on `side`.
    ///
    /// A change has no class of its own: it reads as a deletion on the left
    /// and as an insertion on the right.
    #[must_use]
    pub const fn for_part(kind: PartKind, side: Side) -> Self {
        match (kind, side) {
            (PartKind::Equal, _) => Self::Equal,
            (PartKind::Insert, _) => Self::Insert,
            (PartKind::Delete, _) => Self::Delete,
            (PartKind::Change, Side::Left) => Self::Delete,
            (PartKind::Change, Side::Right) => Self::Insert,
        }
    }

    /// Suffix appended to the prefix.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Insert => "insert",
            Self::Delete => "delete",
            Self::None => "none",
        }
    }
}

/// Class names and colors of the HTML output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlTheme {
    /// CSS class prefix for generated elements.
    pub class_prefix: String,
    /// Page background of the container.
    pub background: String,
    /// Default text color.
    pub foreground: String,
    /// Line number color.
    pub lineno_foreground: String,
    /// Line number background.
    pub lineno_background: String,
    /// Color of deleted text.
    pub delete_color: String,
    /// Color of inserted text.
    pub insert_color: String,
}

impl Default for HtmlTheme {
    fn default() -> Self {
        Self {
            class_prefix: "ocdiff".into(),
            background: "#141414".into(),
            foreground: "#acacac".into(),
            lineno_foreground: "#3b3b3b".into(),
            lineno_background: "#00003d".into(),
            delete_color: "red".into(),
            insert_color: "green".into(),
        }
    }
}

impl HtmlTheme {
    /// The `<style>` element content.
    #[must_use]
    pub fn stylesheet(&self) -> String {
        let p = &self.class_prefix;
        let mut css = String::with_capacity(320);
        let _ = write!(
            css,
            ".{p}-container {{ display: flex; background-color: {}; color: {}; }}",
            self.background, self.foreground
        );
        let _ = write!(css, ".{p}-side {{ overflow-x: auto; margin: 0; }}");
        let _ = write!(
            css,
            ".{p}-lineno {{ color: {}; background-color: {}; }}",
            self.lineno_foreground, self.lineno_background
        );
        let _ = write!(css, ".{p}-delete {{ color: {}; }}", self.delete_color);
        let _ = write!(css, ".{p}-insert {{ color: {}; }}", self.insert_color);
        css
    }

    /// Class of the flex container.
    #[must_use]
    pub fn container_class(&self) -> String {
        format!("{}-container", self.class_prefix)
    }

    /// Class of each `<pre>` column.
    #[must_use]
    pub fn side_class(&self) -> String {
        format!("{}-side", self.class_prefix)
    }

    /// Class of the line number span.
    #[must_use]
    pub fn lineno_class(&self) -> String {
        format!("{}-lineno", self.class_prefix)
    }

    /// Full class attribute of a line span, e.g. `ocdiff-line ocdiff-insert`.
    #[must_use]
    pub fn line_class(&self, class: LineClass) -> String {
        format!(
            "{p}-line {p}-{}",
            class.suffix(),
            p = self.class_prefix
        )
    }
}
