#![forbid(unsafe_code)]

//! Rendering for ocdiff.
//!
//! Turns a stream of [`AlignedPair`](ocdiff_text::AlignedPair)s into text:
//!
//! 1. [`rows`] wraps each side and synchronizes the two into row pairs
//! 2. [`terminal`] / [`html`] colorize the text of one row side
//! 3. [`table`] adds gutters and padding and joins everything into output
//!
//! Each stage is a pure function of its inputs.

pub mod ansi;
pub mod html;
pub mod rows;
pub mod table;
pub mod terminal;

pub use rows::{Gutter, RowOptions, RowPair, RowSide, TableRow, layout_rows, synchronize, wrap_side};
pub use table::{HtmlLayout, TerminalLayout, assemble_html, assemble_terminal};
