#![forbid(unsafe_code)]

//! Terminal colorizer.
//!
//! Each marked part is wrapped in its palette style and a reset. A marked
//! part made only of whitespace is drawn in reverse video instead, so a
//! whitespace-only change shows up as a colored block rather than as
//! invisible colored spaces.

use crate::ansi::push_styled;
use ocdiff_style::TerminalPalette;
use ocdiff_text::{MarkedLine, TAB_PLACEHOLDER};

/// Append the visible form of `text`: tab placeholders become spaces and
/// a carriage return becomes the two characters `\r`.
pub fn push_visible(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            TAB_PLACEHOLDER => out.push(' '),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
}

/// Append a colorized line.
pub fn colorize(out: &mut String, line: &MarkedLine, palette: &TerminalPalette) {
    let mut visible = String::new();
    for part in line.parts() {
        let style = palette
            .style(part.kind)
            .map(|sgr| if part.is_blank() { sgr.inverse() } else { sgr });
        match style {
            Some(_) => {
                visible.clear();
                push_visible(&mut visible, &part.text);
                push_styled(out, style, &visible);
            }
            None => push_visible(out, &part.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocdiff_text::PartKind;

    fn render(line: &MarkedLine) -> String {
        let mut out = String::new();
        colorize(&mut out, line, &TerminalPalette::default());
        out
    }

    #[test]
    fn equal_text_is_unstyled() {
        assert_eq!(render(&MarkedLine::plain("same")), "same");
    }

    #[test]
    fn kinds_get_their_colors() {
        let mut line = MarkedLine::new();
        line.push_equal("H");
        line.push_change("e");
        line.push_equal("llo ");
        line.push_delete("World");
        line.push_insert("!");
        assert_eq!(
            render(&line),
            "H\x1b[1;33me\x1b[mllo \x1b[1;31mWorld\x1b[m\x1b[1;32m!\x1b[m"
        );
    }

    #[test]
    fn whitespace_only_change_is_inverse() {
        let mut line = MarkedLine::new();
        line.push_equal("a");
        line.push_change("  ");
        line.push_equal("b");
        let out = render(&line);
        assert_eq!(out, "a\x1b[7;33m  \x1b[mb");
        assert!(!out.contains("\x1b[1;33m"));
    }

    #[test]
    fn tab_placeholders_render_as_spaces() {
        let line = MarkedLine::uniform(PartKind::Insert, "\t\tx");
        assert_eq!(render(&line), "\x1b[1;32m  x\x1b[m");
    }

    #[test]
    fn inserted_tab_only_run_is_inverse() {
        let line = MarkedLine::uniform(PartKind::Insert, "\t\t\t\t");
        assert_eq!(render(&line), "\x1b[7;32m    \x1b[m");
    }

    #[test]
    fn carriage_return_is_visible() {
        assert_eq!(render(&MarkedLine::plain("end\r")), "end\\r");
        let line = MarkedLine::uniform(PartKind::Delete, "\r");
        assert_eq!(render(&line), "\x1b[1;31m\\r\x1b[m");
    }

    #[test]
    fn plain_palette_emits_no_escapes() {
        let mut line = MarkedLine::new();
        line.push_delete("gone");
        line.push_equal(" kept");
        let mut out = String::new();
        colorize(&mut out, &line, &TerminalPalette::plain());
        assert_eq!(out, "gone kept");
    }
}
