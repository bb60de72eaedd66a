#![forbid(unsafe_code)]

//! Text handling for ocdiff.
//!
//! This crate provides the text primitives of the side-by-side renderer:
//! - [`Part`] / [`MarkedLine`] - change-classified spans of one line
//! - [`marker`] - the in-band `\0+ … \x01` encoding used by aligners
//! - [`display_width`] / [`real_length`] - column measurement
//! - [`tabs`] - tab expansion with placeholder tagging
//! - [`wrap_line`] - width-aware, span-preserving wrapping
//! - [`AlignedPair`] - the alignment collaborator's output unit
//!
//! # Example
//! ```
//! use ocdiff_text::{MarkedLine, marker, wrap_line};
//!
//! let line = marker::decode("Hello \0-World, how are you\u{1}").unwrap();
//! let rows = wrap_line(&line, 10);
//! assert_eq!(rows.len(), 3);
//! assert_eq!(rows[1].plain_text(), "d, how are");
//!
//! let plain = MarkedLine::plain("unchanged");
//! assert_eq!(plain.width(), 9);
//! ```

pub mod marker;
pub mod pair;
pub mod part;
pub mod tabs;
pub mod width;
pub mod wrap;

pub use marker::MarkerError;
pub use pair::{AlignedPair, ContractError, PairFlag, PairSide, Side, validate_pairs};
pub use part::{MarkedLine, Part, PartKind};
pub use tabs::{TAB_PLACEHOLDER, expand_tabs, split_lines};
pub use width::{char_width, display_width, grapheme_width, real_length};
pub use wrap::wrap_line;
