#![forbid(unsafe_code)]

//! Terminal palettes.
//!
//! A palette is an explicit table from what is being drawn to an optional
//! SGR style. `None` means "draw unstyled", which is how the plain palette
//! produces escape-free output.

use crate::color::{Ansi16, Sgr};
use ocdiff_text::PartKind;

/// Styles used by the terminal renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalPalette {
    /// Inserted text.
    pub insert: Option<Sgr>,
    /// Deleted text.
    pub delete: Option<Sgr>,
    /// Changed text.
    pub change: Option<Sgr>,
    /// The `---` separator rows.
    pub separator: Option<Sgr>,
    /// Line numbers in the gutter.
    pub line_number: Option<Sgr>,
}

impl Default for TerminalPalette {
    fn default() -> Self {
        Self {
            insert: Some(Sgr::bold(Ansi16::Green)),
            delete: Some(Sgr::bold(Ansi16::Red)),
            change: Some(Sgr::bold(Ansi16::Yellow)),
            separator: Some(Sgr::normal(Ansi16::Blue)),
            line_number: Some(Sgr::normal(Ansi16::White)),
        }
    }
}

impl TerminalPalette {
    /// A palette that emits no escape sequences at all.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            insert: None,
            delete: None,
            change: None,
            separator: None,
            line_number: None,
        }
    }

    /// Default palette, or the plain one when `color` is false.
    #[must_use]
    pub fn for_color(color: bool) -> Self {
        if color { Self::default() } else { Self::plain() }
    }

    /// Style for a part of the given kind. Equal text is never styled.
    #[must_use]
    pub const fn style(&self, kind: PartKind) -> Option<Sgr> {
        match kind {
            PartKind::Equal => None,
            PartKind::Insert => self.insert,
            PartKind::Delete => self.delete,
            PartKind::Change => self.change,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Attr;

    #[test]
    fn default_maps_kinds_to_bold_colors() {
        let palette = TerminalPalette::default();
        assert_eq!(palette.style(PartKind::Insert), Some(Sgr::bold(Ansi16::Green)));
        assert_eq!(palette.style(PartKind::Delete), Some(Sgr::bold(Ansi16::Red)));
        assert_eq!(palette.style(PartKind::Change), Some(Sgr::bold(Ansi16::Yellow)));
        assert_eq!(palette.style(PartKind::Equal), None);
    }

    #[test]
    fn chrome_is_normal_intensity() {
        let palette = TerminalPalette::default();
        assert_eq!(palette.separator.map(|s| s.attr), Some(Attr::Normal));
        assert_eq!(palette.line_number.map(|s| s.params()), Some((0, 37)));
    }

    #[test]
    fn plain_palette_has_no_styles() {
        let palette = TerminalPalette::for_color(false);
        assert_eq!(palette, TerminalPalette::plain());
        for kind in [PartKind::Insert, PartKind::Delete, PartKind::Change] {
            assert_eq!(palette.style(kind), None);
        }
        assert_ne!(TerminalPalette::for_color(true), TerminalPalette::plain());
    }
}
