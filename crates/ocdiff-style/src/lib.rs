#![forbid(unsafe_code)]

//! Styling for ocdiff.
//!
//! Styles are plain values: a [`TerminalPalette`] maps part kinds to SGR
//! styles and an [`HtmlTheme`] maps them to CSS classes. Renderers take the
//! palette or theme as an argument, so differently themed renders can run
//! side by side without shared state.

pub mod color;
pub mod palette;
pub mod theme;

pub use color::{Ansi16, Attr, Sgr};
pub use palette::TerminalPalette;
pub use theme::{HtmlTheme, LineClass};
