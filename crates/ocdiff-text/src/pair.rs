#![forbid(unsafe_code)]

//! Aligned line pairs, as produced by the alignment collaborator.
//!
//! The collaborator hands over an ordered stream of [`AlignedPair`]s: one
//! per displayed line, with either side possibly absent, plus separator
//! entries where context was collapsed. The order of the stream is the
//! display order; nothing here reorders or deduplicates it.

use crate::marker::{self, MarkerError};
use crate::part::MarkedLine;
use std::fmt;

/// Classification of a whole aligned pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairFlag {
    /// Both sides hold the same line.
    Equal,
    /// The sides differ, or one side is absent.
    Changed,
    /// Collapsed context between two non-adjacent blocks.
    Separator,
}

/// Which column of the table a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The first text.
    Left,
    /// The second text.
    Right,
}

/// One side of an aligned pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairSide {
    /// 1-based line number in the source text.
    pub lineno: usize,
    /// The line's text with change classification.
    pub line: MarkedLine,
}

impl PairSide {
    /// Create a side.
    #[must_use]
    pub fn new(lineno: usize, line: impl Into<MarkedLine>) -> Self {
        Self {
            lineno,
            line: line.into(),
        }
    }
}

/// One row of the alignment: left side, right side and flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedPair {
    /// Line from the first text, absent for pure insertions.
    pub left: Option<PairSide>,
    /// Line from the second text, absent for pure deletions.
    pub right: Option<PairSide>,
    /// Pair classification.
    pub flag: PairFlag,
}

impl AlignedPair {
    /// An unchanged line present on both sides.
    #[must_use]
    pub fn equal(left_lineno: usize, right_lineno: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            left: Some(PairSide::new(left_lineno, text.clone())),
            right: Some(PairSide::new(right_lineno, text)),
            flag: PairFlag::Equal,
        }
    }

    /// A changed pair from already classified sides.
    #[must_use]
    pub fn changed(left: Option<PairSide>, right: Option<PairSide>) -> Self {
        Self {
            left,
            right,
            flag: PairFlag::Changed,
        }
    }

    /// A context separator.
    #[must_use]
    pub const fn separator() -> Self {
        Self {
            left: None,
            right: None,
            flag: PairFlag::Separator,
        }
    }

    /// Build a pair from marker-encoded text, as difflib-style aligners
    /// produce it.
    ///
    /// # Errors
    /// Returns [`MarkerError`] if either side's markers are malformed.
    pub fn from_marked(
        left: Option<(usize, &str)>,
        right: Option<(usize, &str)>,
        flag: PairFlag,
    ) -> Result<Self, MarkerError> {
        let decode_side = |side: Option<(usize, &str)>| -> Result<Option<PairSide>, MarkerError> {
            side.map(|(lineno, text)| Ok(PairSide::new(lineno, marker::decode(text)?)))
                .transpose()
        };
        Ok(Self {
            left: decode_side(left)?,
            right: decode_side(right)?,
            flag,
        })
    }

    /// The line on `side`, if present.
    #[must_use]
    pub fn side(&self, side: Side) -> Option<&PairSide> {
        match side {
            Side::Left => self.left.as_ref(),
            Side::Right => self.right.as_ref(),
        }
    }

    /// Whether this pair is a separator.
    #[inline]
    #[must_use]
    pub fn is_separator(&self) -> bool {
        self.flag == PairFlag::Separator
    }

    /// Whether this pair represents a difference.
    #[inline]
    #[must_use]
    pub fn is_changed(&self) -> bool {
        self.flag == PairFlag::Changed
    }

    /// Largest line number on either side.
    #[must_use]
    pub fn max_lineno(&self) -> Option<usize> {
        let left = self.left.as_ref().map(|s| s.lineno);
        let right = self.right.as_ref().map(|s| s.lineno);
        left.max(right)
    }
}

/// Ways a pair stream can violate the collaborator contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// Two separators in a row.
    ConsecutiveSeparators { index: usize },
    /// A separator that carries line content.
    SeparatorWithContent { index: usize },
    /// A non-separator pair with neither side present.
    EmptyPair { index: usize },
    /// An equal pair missing one side.
    EqualPairMissingSide { index: usize },
    /// An equal pair whose text carries change markers.
    ChangedContentInEqualPair { index: usize },
}

impl fmt::Display for ContractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConsecutiveSeparators { index } => {
                write!(f, "pair {index}: separator directly follows another separator")
            }
            Self::SeparatorWithContent { index } => {
                write!(f, "pair {index}: separator carries line content")
            }
            Self::EmptyPair { index } => write!(f, "pair {index}: both sides are absent"),
            Self::EqualPairMissingSide { index } => {
                write!(f, "pair {index}: equal pair is missing a side")
            }
            Self::ChangedContentInEqualPair { index } => {
                write!(f, "pair {index}: equal pair contains change markers")
            }
        }
    }
}

impl std::error::Error for ContractError {}

/// Check a pair stream against the collaborator contract.
///
/// # Errors
/// Returns the first [`ContractError`] found, in stream order.
pub fn validate_pairs(pairs: &[AlignedPair]) -> Result<(), ContractError> {
    let mut previous_separator = false;
    for (index, pair) in pairs.iter().enumerate() {
        let result = match pair.flag {
            PairFlag::Separator if previous_separator => {
                Err(ContractError::ConsecutiveSeparators { index })
            }
            PairFlag::Separator if pair.left.is_some() || pair.right.is_some() => {
                Err(ContractError::SeparatorWithContent { index })
            }
            PairFlag::Separator => Ok(()),
            _ if pair.left.is_none() && pair.right.is_none() => {
                Err(ContractError::EmptyPair { index })
            }
            PairFlag::Equal => match (&pair.left, &pair.right) {
                (Some(left), Some(right)) => {
                    if left.line.has_changes() || right.line.has_changes() {
                        Err(ContractError::ChangedContentInEqualPair { index })
                    } else {
                        Ok(())
                    }
                }
                _ => Err(ContractError::EqualPairMissingSide { index }),
            },
            PairFlag::Changed => Ok(()),
        };
        if let Err(err) = result {
            tracing::debug!(error = %err, "rejected pair stream");
            return Err(err);
        }
        previous_separator = pair.is_separator();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::PartKind;
    use tracing_test::traced_test;

    fn inserted(lineno: usize, text: &str) -> AlignedPair {
        AlignedPair::changed(
            None,
            Some(PairSide::new(lineno, MarkedLine::uniform(PartKind::Insert, text))),
        )
    }

    #[test]
    fn from_marked_decodes_both_sides() {
        let pair = AlignedPair::from_marked(
            Some((1, "H\0^e\u{1}llo")),
            Some((1, "H\0^a\u{1}llo")),
            PairFlag::Changed,
        )
        .unwrap();
        assert_eq!(pair.left.unwrap().line.parts()[1].text, "e");
        assert_eq!(pair.right.unwrap().line.parts()[1].text, "a");
    }

    #[test]
    fn from_marked_propagates_marker_errors() {
        let err = AlignedPair::from_marked(Some((1, "\0+x")), None, PairFlag::Changed);
        assert!(matches!(err, Err(MarkerError::UnclosedSpan { .. })));
    }

    #[test]
    fn max_lineno_takes_larger_side() {
        let pair = AlignedPair::equal(3, 7, "x");
        assert_eq!(pair.max_lineno(), Some(7));
        assert_eq!(AlignedPair::separator().max_lineno(), None);
    }

    #[test]
    fn side_selects_column() {
        let pair = inserted(4, "new");
        assert!(pair.side(Side::Left).is_none());
        assert_eq!(pair.side(Side::Right).map(|s| s.lineno), Some(4));
    }

    #[test]
    fn valid_stream_passes() {
        let pairs = vec![
            AlignedPair::separator(),
            AlignedPair::equal(1, 1, "a"),
            inserted(2, "b"),
            AlignedPair::separator(),
            AlignedPair::equal(9, 10, "c"),
        ];
        assert_eq!(validate_pairs(&pairs), Ok(()));
    }

    #[traced_test]
    #[test]
    fn rejection_is_logged() {
        let pairs = vec![AlignedPair::changed(None, None)];
        assert!(validate_pairs(&pairs).is_err());
        assert!(logs_contain("rejected pair stream"));
        assert!(logs_contain("both sides are absent"));
    }

    #[test]
    fn rejects_consecutive_separators() {
        let pairs = vec![AlignedPair::separator(), AlignedPair::separator()];
        assert_eq!(
            validate_pairs(&pairs),
            Err(ContractError::ConsecutiveSeparators { index: 1 })
        );
    }

    #[test]
    fn rejects_empty_changed_pair() {
        let pairs = vec![AlignedPair::changed(None, None)];
        assert_eq!(validate_pairs(&pairs), Err(ContractError::EmptyPair { index: 0 }));
    }

    #[test]
    fn rejects_equal_pair_with_missing_side() {
        let pairs = vec![AlignedPair {
            left: Some(PairSide::new(1, "x")),
            right: None,
            flag: PairFlag::Equal,
        }];
        assert_eq!(
            validate_pairs(&pairs),
            Err(ContractError::EqualPairMissingSide { index: 0 })
        );
    }

    #[test]
    fn rejects_markers_in_equal_pair() {
        let pairs = vec![AlignedPair {
            left: Some(PairSide::new(1, MarkedLine::uniform(PartKind::Change, "x"))),
            right: Some(PairSide::new(1, "y")),
            flag: PairFlag::Equal,
        }];
        assert_eq!(
            validate_pairs(&pairs),
            Err(ContractError::ChangedContentInEqualPair { index: 0 })
        );
    }

    #[test]
    fn rejects_separator_with_content() {
        let pairs = vec![AlignedPair {
            left: Some(PairSide::new(1, "x")),
            right: None,
            flag: PairFlag::Separator,
        }];
        assert_eq!(
            validate_pairs(&pairs),
            Err(ContractError::SeparatorWithContent { index: 0 })
        );
    }
}
