#![forbid(unsafe_code)]

//! HTML colorizer.
//!
//! Every part becomes a `<span>` whose class names its change kind from the
//! point of view of its column. A side without content becomes a single
//! empty span of class `none`.

use ocdiff_style::{HtmlTheme, LineClass};
use ocdiff_text::{MarkedLine, Side, TAB_PLACEHOLDER};

/// HTML-escape `text` into `out`. Tab placeholders become spaces and a
/// carriage return is spelled out as `\r`, matching its two-column width.
pub fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            TAB_PLACEHOLDER => out.push(' '),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
}

fn push_span(out: &mut String, class: &str, text: &str) {
    out.push_str("<span class=\"");
    out.push_str(class);
    out.push_str("\">");
    escape_into(out, text);
    out.push_str("</span>");
}

/// Append the spans of one row side.
pub fn colorize(out: &mut String, line: Option<&MarkedLine>, side: Side, theme: &HtmlTheme) {
    let Some(line) = line else {
        push_span(out, &theme.line_class(LineClass::None), "");
        return;
    };
    for part in line.parts() {
        let class = LineClass::for_part(part.kind, side);
        push_span(out, &theme.line_class(class), &part.text);
    }
}
