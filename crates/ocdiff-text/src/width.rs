#![forbid(unsafe_code)]

//! Display width measurement.
//!
//! Widths follow the terminal side-by-side layout rules:
//! - East Asian Full/Wide characters take 2 columns
//! - a carriage return takes 2 columns (it is drawn as the two characters `\r`)
//! - every other character, including combining marks and controls, takes 1
//!
//! [`real_length`] additionally ignores marker bytes and ANSI SGR sequences,
//! so it can measure text that has already been colorized.
//!
//! # Example
//! ```
//! use ocdiff_text::{display_width, real_length};
//!
//! assert_eq!(display_width("a中b"), 4);
//! assert_eq!(real_length("\x1b[1;32mab\x1b[m"), 2);
//! ```

use unicode_width::UnicodeWidthChar;

const ESC: char = '\x1b';

/// Width of a single character.
#[inline]
#[must_use]
pub fn char_width(c: char) -> usize {
    if c == '\r' || c.width() == Some(2) {
        2
    } else {
        1
    }
}

/// Width of a grapheme cluster (sum of its characters).
#[inline]
#[must_use]
pub fn grapheme_width(grapheme: &str) -> usize {
    grapheme.chars().map(char_width).sum()
}

/// Display width of a string in columns.
#[must_use]
pub fn display_width(text: &str) -> usize {
    if text.is_ascii() && !text.contains('\r') {
        return text.len();
    }
    text.chars().map(char_width).sum()
}

/// Width of rendered text, ignoring markup.
///
/// Marker bytes are removed, tabs count as one column and ANSI CSI
/// sequences of the form `ESC [ ... m` take no space. An escape sequence
/// that is never terminated swallows the remainder of the string. A lone
/// `ESC` that does not start a sequence counts as one column.
#[must_use]
pub fn real_length(text: &str) -> usize {
    let stripped = crate::marker::strip(text);
    let mut width = 0usize;
    let mut in_escape = false;
    let mut chars = stripped.chars().peekable();

    while let Some(c) = chars.next() {
        if in_escape {
            if c == 'm' {
                in_escape = false;
            }
            continue;
        }
        if c == ESC && chars.peek() == Some(&'[') {
            chars.next();
            in_escape = true;
            continue;
        }
        width += if c == '\t' { 1 } else { char_width(c) };
    }

    width
}

/// Spaces needed to pad `text` to `field_width` columns (never negative).
#[inline]
#[must_use]
pub fn padding_for(text: &str, field_width: usize) -> usize {
    field_width.saturating_sub(real_length(text))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn ascii_width_equals_length(s in "[ -~]{1,120}") {
            prop_assert_eq!(display_width(&s), s.len());
        }

        #[test]
        fn colorizing_does_not_change_real_length(s in "[a-zA-Z0-9 ]{0,60}", code in 30u8..38) {
            let painted = format!("\x1b[1;{code}m{s}\x1b[m");
            prop_assert_eq!(real_length(&painted), display_width(&s));
        }

        #[test]
        fn real_length_never_exceeds_char_count_times_two(s in "\\PC{0,60}") {
            prop_assert!(real_length(&s) <= s.chars().count() * 2);
        }
    }
}
