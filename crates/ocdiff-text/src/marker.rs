#![forbid(unsafe_code)]

//! In-band change markers.
//!
//! Alignment collaborators in the difflib tradition describe intra-line
//! changes by embedding control characters in the text:
//!
//! | Sequence   | Meaning                          |
//! |------------|----------------------------------|
//! | `\0+`      | open an insert span              |
//! | `\0-`      | open a delete span               |
//! | `\0^`      | open a change span               |
//! | `\x01`     | close the most recently opened span |
//!
//! Spans never nest. This module converts that encoding to and from
//! [`MarkedLine`]; nothing downstream sees marker bytes.
//!
//! Decoding is strict: an unbalanced or nested marker is an error rather
//! than being repaired. Input text that itself contains `\0` or `\x01` is
//! indistinguishable from markup and is not guarded against.

use crate::part::{MarkedLine, PartKind};
use std::borrow::Cow;
use std::fmt;

/// Character introducing an open marker.
pub const OPEN: char = '\0';
/// Character closing the current span.
pub const CLOSE: char = '\u{1}';

/// Errors produced while decoding marked text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerError {
    /// A close marker with no open span.
    UnexpectedClose { position: usize },
    /// An open marker while another span is still open.
    NestedOpen { position: usize },
    /// A span still open at end of text.
    UnclosedSpan { kind: PartKind, position: usize },
    /// An open marker with a tag other than `+`, `-` or `^`.
    UnknownTag { tag: char, position: usize },
    /// An open marker at the very end of the text, with no tag.
    DanglingOpen { position: usize },
}

impl fmt::Display for MarkerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedClose { position } => {
                write!(f, "close marker at position {position} with no open span")
            }
            Self::NestedOpen { position } => {
                write!(f, "nested open marker at position {position}")
            }
            Self::UnclosedSpan { kind, position } => {
                write!(f, "{kind:?} span opened at position {position} is never closed")
            }
            Self::UnknownTag { tag, position } => {
                write!(f, "unknown marker tag {tag:?} at position {position}")
            }
            Self::DanglingOpen { position } => {
                write!(f, "open marker without tag at position {position}")
            }
        }
    }
}

impl std::error::Error for MarkerError {}

/// Marker sequence opening a span of `kind` (empty for [`PartKind::Equal`]).
#[must_use]
pub const fn open(kind: PartKind) -> &'static str {
    match kind {
        PartKind::Equal => "",
        PartKind::Insert => "\0+",
        PartKind::Delete => "\0-",
        PartKind::Change => "\0^",
    }
}

/// Marker sequence closing the current span.
#[must_use]
pub const fn close() -> &'static str {
    "\u{1}"
}

/// Remove every marker byte, keeping the text.
///
/// Lenient: an open marker consumes the character after it whatever it is,
/// and unbalanced markers are simply dropped.
#[must_use]
pub fn strip(text: &str) -> Cow<'_, str> {
    if !text.contains([OPEN, CLOSE]) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        match c {
            OPEN => {
                chars.next();
            }
            CLOSE => {}
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Decode marked text into a [`MarkedLine`].
///
/// # Errors
/// Returns [`MarkerError`] if a marker is unbalanced, nested, or carries an
/// unknown tag.
pub fn decode(text: &str) -> Result<MarkedLine, MarkerError> {
    let mut line = MarkedLine::new();
    let mut current = String::new();
    let mut open_span: Option<(PartKind, usize)> = None;
    let mut chars = text.chars().enumerate();

    while let Some((position, c)) = chars.next() {
        match c {
            OPEN => {
                if open_span.is_some() {
                    return Err(reject(MarkerError::NestedOpen { position }));
                }
                let Some((_, tag)) = chars.next() else {
                    return Err(reject(MarkerError::DanglingOpen { position }));
                };
                let Some(kind) = PartKind::from_tag(tag) else {
                    return Err(reject(MarkerError::UnknownTag { tag, position }));
                };
                line.push(PartKind::Equal, std::mem::take(&mut current));
                open_span = Some((kind, position));
            }
            CLOSE => {
                let Some((kind, _)) = open_span.take() else {
                    return Err(reject(MarkerError::UnexpectedClose { position }));
                };
                line.push(kind, std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }

    if let Some((kind, position)) = open_span {
        return Err(reject(MarkerError::UnclosedSpan { kind, position }));
    }
    line.push(PartKind::Equal, current);
    Ok(line)
}

/// Encode a [`MarkedLine`] back into marked text.
#[must_use]
pub fn encode(line: &MarkedLine) -> String {
    let mut out = String::new();
    for part in line.parts() {
        if part.kind.is_marked() {
            out.push_str(open(part.kind));
            out.push_str(&part.text);
            out.push_str(close());
        } else {
            out.push_str(&part.text);
        }
    }
    out
}

fn reject(err: MarkerError) -> MarkerError {
    tracing::debug!(error = %err, "rejected marked text");
    err
}
