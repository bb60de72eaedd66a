#![forbid(unsafe_code)]

//! Table assembly: gutters, padding and the final output text.
//!
//! The terminal table is one output line per physical row, each side padded
//! to half the total width. The HTML table is two `<pre>` columns holding
//! one line per row.

use crate::ansi::push_styled;
use crate::rows::{Gutter, RowSide, TableRow};
use crate::{html, terminal};
use ocdiff_style::{HtmlTheme, TerminalPalette};
use ocdiff_text::width::padding_for;
use ocdiff_text::{AlignedPair, Side};
use std::fmt::Write;

/// Width of the right-justified line number field.
const LINENO_FIELD: usize = 8;
/// Blank gutter: the number field plus its trailing space.
const BLANK_GUTTER: &str = "         ";
/// Glyph for rows continuing an overflowed line.
const OVERFLOW_GLYPH: &str = "…";
/// Text of a separator cell.
const SEPARATOR: &str = "---";

/// The collaborator opens its stream with a separator standing for "no
/// context before line 1". It is not a real gap.
fn skip_leading_separator(rows: &[TableRow]) -> &[TableRow] {
    match rows.split_first() {
        Some((TableRow::Separator, rest)) => {
            tracing::debug!("suppressed leading separator");
            rest
        }
        _ => rows,
    }
}

fn push_padding(out: &mut String, count: usize) {
    out.extend(std::iter::repeat_n(' ', count));
}

/// Geometry of the terminal table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalLayout {
    /// Total output width.
    pub columns: usize,
    /// Draw the line-number gutter.
    pub line_numbers: bool,
}

impl TerminalLayout {
    /// Width each side is padded to.
    #[must_use]
    pub const fn side_width(&self) -> usize {
        (self.columns / 2).saturating_sub(1)
    }
}

fn push_terminal_gutter(out: &mut String, gutter: Gutter, palette: &TerminalPalette) {
    let number;
    let (style, text) = match gutter {
        Gutter::Number(n) => {
            number = n.to_string();
            (palette.line_number, number.as_str())
        }
        Gutter::Overflow => (None, OVERFLOW_GLYPH),
        Gutter::Continuation | Gutter::Blank => {
            out.push_str(BLANK_GUTTER);
            return;
        }
    };
    let mut field = String::new();
    push_styled(&mut field, style, text);
    push_padding(out, padding_for(&field, LINENO_FIELD));
    out.push_str(&field);
    out.push(' ');
}

fn push_terminal_cell(
    out: &mut String,
    side: &RowSide,
    layout: &TerminalLayout,
    palette: &TerminalPalette,
) {
    if layout.line_numbers {
        push_terminal_gutter(out, side.gutter, palette);
    }
    if let Some(line) = &side.line {
        terminal::colorize(out, line, palette);
    }
}

/// Assemble rows into colored two-column terminal text.
///
/// Every row, including the last, ends with `'\n'`.
#[must_use]
pub fn assemble_terminal(
    rows: &[TableRow],
    layout: &TerminalLayout,
    palette: &TerminalPalette,
) -> String {
    let rows = skip_leading_separator(rows);
    let width = layout.side_width();
    let mut out = String::with_capacity(rows.len() * (layout.columns + 16));
    let mut left = String::new();
    let mut right = String::new();

    for row in rows {
        left.clear();
        right.clear();
        match row {
            TableRow::Separator => {
                push_styled(&mut left, palette.separator, SEPARATOR);
                push_styled(&mut right, palette.separator, SEPARATOR);
            }
            TableRow::Pair(pair) => {
                push_terminal_cell(&mut left, &pair.left, layout, palette);
                push_terminal_cell(&mut right, &pair.right, layout, palette);
            }
        }
        out.push_str(&left);
        push_padding(&mut out, padding_for(&left, width));
        out.push(' ');
        out.push_str(&right);
        push_padding(&mut out, padding_for(&right, width));
        out.push('\n');
    }

    out
}

/// Geometry of the HTML table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlLayout {
    /// Digits of the largest line number.
    pub lineno_width: usize,
}

impl HtmlLayout {
    /// Padding on each side of the line number.
    pub const LINENO_PADDING: usize = 1;

    /// Layout sized for the line numbers in `pairs`.
    #[must_use]
    pub fn for_pairs(pairs: &[AlignedPair]) -> Self {
        let max = pairs
            .iter()
            .filter_map(AlignedPair::max_lineno)
            .max()
            .unwrap_or(0);
        Self {
            lineno_width: max.to_string().len(),
        }
    }

    /// Width the gutter text is centered in.
    #[must_use]
    pub const fn gutter_width(&self) -> usize {
        self.lineno_width + 2 * Self::LINENO_PADDING
    }

    /// Wrap width for a total width limit, or `None` when the limit leaves
    /// no room for text.
    #[must_use]
    pub fn wrap_width(&self, column_limit: usize) -> Option<usize> {
        (column_limit / 2)
            .checked_sub(self.gutter_width())
            .filter(|&width| width > 0)
    }
}

fn push_html_row(
    out: &mut String,
    side: &RowSide,
    which: Side,
    layout: &HtmlLayout,
    theme: &HtmlTheme,
    lineno_class: &str,
) {
    let number;
    let gutter = match side.gutter {
        Gutter::Number(n) => {
            number = n.to_string();
            number.as_str()
        }
        Gutter::Overflow => OVERFLOW_GLYPH,
        Gutter::Continuation | Gutter::Blank => "",
    };
    let _ = write!(
        out,
        "<span class=\"{lineno_class}\">{gutter:^width$}</span>",
        width = layout.gutter_width()
    );
    html::colorize(out, side.line.as_ref(), which, theme);
    out.push('\n');
}

/// Assemble rows into a self-contained HTML fragment.
///
/// Separator rows are left out; the jump in line numbers marks the gap.
#[must_use]
pub fn assemble_html(rows: &[TableRow], layout: &HtmlLayout, theme: &HtmlTheme) -> String {
    let lineno_class = theme.lineno_class();
    let mut left = String::new();
    let mut right = String::new();

    for row in rows {
        let TableRow::Pair(pair) = row else {
            continue;
        };
        push_html_row(&mut left, &pair.left, Side::Left, layout, theme, &lineno_class);
        push_html_row(&mut right, &pair.right, Side::Right, layout, theme, &lineno_class);
    }

    let side_class = theme.side_class();
    let mut out = String::with_capacity(left.len() + right.len() + 512);
    let _ = write!(
        out,
        "<div><style>{}</style><div class=\"{}\">",
        theme.stylesheet(),
        theme.container_class()
    );
    let _ = write!(out, "<pre class=\"{side_class}\">{left}</pre>");
    let _ = write!(out, "<pre class=\"{side_class}\">{right}</pre>");
    out.push_str("</div></div>");
    out
}
