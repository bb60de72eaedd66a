#![forbid(unsafe_code)]

//! ocdiff public facade crate.
//!
//! Renders a side-by-side comparison of two texts from the aligned line
//! pairs an alignment collaborator produces. Computing the alignment itself
//! is out of scope; this crate only lays it out. Source texts should go
//! through [`DiffOptions::split_lines`] before alignment so tabs land on the
//! configured stops.
//!
//! # Example
//! ```
//! use ocdiff::prelude::*;
//!
//! let pairs = vec![
//!     AlignedPair::from_marked(Some((1, "H\0^e\u{1}llo")), Some((1, "H\0^a\u{1}llo")), PairFlag::Changed)?,
//!     AlignedPair::equal(2, 2, "world"),
//! ];
//! let options = DiffOptions::default().color(false);
//! let table = ocdiff::render_terminal(&pairs, &options)?;
//! assert!(table.starts_with("       1 Hello"));
//!
//! let html = ocdiff::render_html(&pairs, &options)?;
//! assert!(html.contains("<span class=\"ocdiff-line ocdiff-insert\">a</span>"));
//! # Ok::<(), ocdiff::Error>(())
//! ```

pub mod context;
pub mod options;

use ocdiff_render::{
    Gutter, HtmlLayout, RowOptions, TerminalLayout, assemble_html, assemble_terminal, layout_rows,
};
use std::fmt;

// --- Re-exports -------------------------------------------------------------

pub use context::window;
pub use ocdiff_style::{HtmlTheme, TerminalPalette};
pub use ocdiff_text::{
    AlignedPair, ContractError, MarkedLine, MarkerError, PairFlag, PairSide, Part, PartKind,
    expand_tabs, marker, split_lines, validate_pairs,
};
pub use options::{DiffOptions, OptionsError};

pub use ocdiff_render as render;
pub use ocdiff_style as style;
pub use ocdiff_text as text;

// --- Errors ---------------------------------------------------------------

/// Top-level error type for ocdiff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed in-band change markers.
    Marker(MarkerError),
    /// A pair stream that breaks the alignment contract.
    Contract(ContractError),
    /// Unusable render options.
    Options(OptionsError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Marker(err) => write!(f, "malformed markers: {err}"),
            Self::Contract(err) => write!(f, "invalid pair stream: {err}"),
            Self::Options(err) => write!(f, "invalid options: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Marker(err) => Some(err),
            Self::Contract(err) => Some(err),
            Self::Options(err) => Some(err),
        }
    }
}

impl From<MarkerError> for Error {
    fn from(err: MarkerError) -> Self {
        Self::Marker(err)
    }
}

impl From<ContractError> for Error {
    fn from(err: ContractError) -> Self {
        Self::Contract(err)
    }
}

impl From<OptionsError> for Error {
    fn from(err: OptionsError) -> Self {
        Self::Options(err)
    }
}

/// Standard result type for ocdiff APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Rendering --------------------------------------------------------------

/// Render pairs as a colored two-column terminal table.
///
/// Pairs are windowed to `options.context_lines` first. Every output line
/// ends with `'\n'`.
///
/// # Errors
/// Returns [`Error::Options`] for unusable options and [`Error::Contract`]
/// for a malformed pair stream. No output is produced in either case.
pub fn render_terminal(pairs: &[AlignedPair], options: &DiffOptions) -> Result<String> {
    render_terminal_with(pairs, options, &TerminalPalette::for_color(options.color))
}

/// [`render_terminal`] with an explicit palette; `options.color` is ignored.
///
/// # Errors
/// As [`render_terminal`].
pub fn render_terminal_with(
    pairs: &[AlignedPair],
    options: &DiffOptions,
    palette: &TerminalPalette,
) -> Result<String> {
    let _span = tracing::debug_span!(
        "render_terminal",
        pairs = pairs.len(),
        columns = options.columns
    )
    .entered();

    let wrap_column = options.wrap_column()?;
    validate_pairs(pairs)?;

    let pairs = window(pairs, options.context_lines);
    let rows = layout_rows(
        &pairs,
        &RowOptions {
            width: Some(wrap_column),
            continuation: Gutter::Continuation,
            trim_trailing: true,
        },
    );
    let layout = TerminalLayout {
        columns: options.columns,
        line_numbers: options.line_numbers,
    };
    Ok(assemble_terminal(&rows, &layout, palette))
}

/// Render pairs as a self-contained HTML fragment.
///
/// Only `context_lines` and `column_limit` apply. With a column limit, lines
/// that do not fit continue on the next row under a `…` gutter.
///
/// # Errors
/// Returns [`Error::Options`] if the column limit leaves no room for text
/// and [`Error::Contract`] for a malformed pair stream.
pub fn render_html(pairs: &[AlignedPair], options: &DiffOptions) -> Result<String> {
    render_html_with(pairs, options, &HtmlTheme::default())
}

/// [`render_html`] with an explicit theme.
///
/// # Errors
/// As [`render_html`].
pub fn render_html_with(
    pairs: &[AlignedPair],
    options: &DiffOptions,
    theme: &HtmlTheme,
) -> Result<String> {
    let _span = tracing::debug_span!(
        "render_html",
        pairs = pairs.len(),
        column_limit = ?options.column_limit
    )
    .entered();

    validate_pairs(pairs)?;
    let pairs = window(pairs, options.context_lines);
    let layout = HtmlLayout::for_pairs(&pairs);
    let width = options.html_wrap_width(&layout)?;

    let rows = layout_rows(
        &pairs,
        &RowOptions {
            width,
            continuation: Gutter::Overflow,
            trim_trailing: false,
        },
    );
    Ok(assemble_html(&rows, &layout, theme))
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        AlignedPair, DiffOptions, Error, MarkedLine, PairFlag, PairSide, PartKind, Result,
        render_html, render_terminal, split_lines,
    };
}
