#![forbid(unsafe_code)]

//! Row layout: wrapping each side of a pair and synchronizing the two.
//!
//! One [`AlignedPair`] becomes one or more physical rows. Each side is
//! wrapped on its own, then the shorter side is padded with blank rows so
//! both columns advance together.

use ocdiff_text::{AlignedPair, MarkedLine, PairSide, Side, wrap_line};

/// What the line-number gutter of a row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gutter {
    /// First row of a source line.
    Number(usize),
    /// Further row of a wrapped line, drawn blank.
    Continuation,
    /// Further row of a line that overflowed the column limit, drawn `…`.
    Overflow,
    /// Padding row with no source line.
    Blank,
}

/// One side of a physical row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSide {
    /// Gutter content.
    pub gutter: Gutter,
    /// Text of the row, `None` for padding.
    pub line: Option<MarkedLine>,
}

impl RowSide {
    /// A padding row.
    #[must_use]
    pub const fn blank() -> Self {
        Self {
            gutter: Gutter::Blank,
            line: None,
        }
    }

    /// Whether this is a padding row.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.line.is_none()
    }
}

/// Left and right side of one physical row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowPair {
    /// First text.
    pub left: RowSide,
    /// Second text.
    pub right: RowSide,
}

impl RowPair {
    /// The row side for `side`.
    #[must_use]
    pub fn side(&self, side: Side) -> &RowSide {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

/// A physical row of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    /// Content on at least one side.
    Pair(RowPair),
    /// Collapsed context.
    Separator,
}

/// How sides are broken into rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowOptions {
    /// Wrap width in columns; `None` never wraps.
    pub width: Option<usize>,
    /// Gutter shown on the rows after the first of a wrapped line.
    pub continuation: Gutter,
    /// Drop trailing whitespace before wrapping.
    pub trim_trailing: bool,
}

impl Default for RowOptions {
    fn default() -> Self {
        Self {
            width: None,
            continuation: Gutter::Continuation,
            trim_trailing: false,
        }
    }
}

/// Wrap one side of a pair into row sides.
///
/// An absent side yields no rows; [`synchronize`] pads it.
#[must_use]
pub fn wrap_side(side: Option<&PairSide>, options: &RowOptions) -> Vec<RowSide> {
    let Some(side) = side else {
        return Vec::new();
    };

    let mut line = side.line.clone();
    if options.trim_trailing {
        line.trim_end();
    }
    let fragments = match options.width {
        Some(width) => wrap_line(&line, width),
        None => vec![line],
    };

    fragments
        .into_iter()
        .enumerate()
        .map(|(i, line)| RowSide {
            gutter: if i == 0 {
                Gutter::Number(side.lineno)
            } else {
                options.continuation
            },
            line: Some(line),
        })
        .collect()
}

/// Zip two row lists, padding the shorter one with blank rows.
///
/// The result has `max(left.len(), right.len())` rows, and each row has
/// content on at least one side.
#[must_use]
pub fn synchronize(left: Vec<RowSide>, right: Vec<RowSide>) -> Vec<RowPair> {
    let rows = left.len().max(right.len());
    let mut left = left.into_iter();
    let mut right = right.into_iter();
    (0..rows)
        .map(|_| RowPair {
            left: left.next().unwrap_or_else(RowSide::blank),
            right: right.next().unwrap_or_else(RowSide::blank),
        })
        .collect()
}

/// Lay out a pair stream as physical rows, in stream order.
#[must_use]
pub fn layout_rows(pairs: &[AlignedPair], options: &RowOptions) -> Vec<TableRow> {
    let mut rows = Vec::with_capacity(pairs.len());
    for pair in pairs {
        if pair.is_separator() {
            rows.push(TableRow::Separator);
            continue;
        }
        let left = wrap_side(pair.left.as_ref(), options);
        let right = wrap_side(pair.right.as_ref(), options);
        if left.len() > 1 || right.len() > 1 {
            tracing::trace!(
                left_rows = left.len(),
                right_rows = right.len(),
                "wrapped pair"
            );
        }
        rows.extend(synchronize(left, right).into_iter().map(TableRow::Pair));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocdiff_text::PartKind;

    fn wrap_at(width: usize) -> RowOptions {
        RowOptions {
            width: Some(width),
            ..RowOptions::default()
        }
    }

    #[test]
    fn short_side_is_one_numbered_row() {
        let side = PairSide::new(3, "short");
        let rows = wrap_side(Some(&side), &wrap_at(10));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].gutter, Gutter::Number(3));
    }

    #[test]
    fn wrapped_rows_use_continuation_gutter() {
        let side = PairSide::new(1, "abcdefghij");
        let options = RowOptions {
            width: Some(4),
            continuation: Gutter::Overflow,
            trim_trailing: false,
        };
        let gutters: Vec<Gutter> = wrap_side(Some(&side), &options)
            .iter()
            .map(|r| r.gutter)
            .collect();
        assert_eq!(
            gutters,
            vec![Gutter::Number(1), Gutter::Overflow, Gutter::Overflow]
        );
    }

    #[test]
    fn trailing_whitespace_does_not_wrap() {
        let side = PairSide::new(1, "abc      ");
        let options = RowOptions {
            trim_trailing: true,
            ..wrap_at(4)
        };
        let rows = wrap_side(Some(&side), &options);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].line.as_ref().map(MarkedLine::plain_text).as_deref(), Some("abc"));
    }

    #[test]
    fn absent_side_has_no_rows() {
        assert!(wrap_side(None, &wrap_at(4)).is_empty());
    }

    #[test]
    fn synchronize_pads_shorter_side() {
        let left = wrap_side(Some(&PairSide::new(1, "abcdefghij")), &wrap_at(4));
        let right = wrap_side(Some(&PairSide::new(1, "ab")), &wrap_at(4));
        let rows = synchronize(left, right);
        assert_eq!(rows.len(), 3);
        assert!(!rows[0].right.is_blank());
        assert!(rows[1].right.is_blank());
        assert_eq!(rows[2].right, RowSide::blank());
    }

    #[test]
    fn inserted_line_pads_left() {
        let pair = AlignedPair::changed(
            None,
            Some(PairSide::new(4, MarkedLine::uniform(PartKind::Insert, "Moar and more"))),
        );
        let rows = layout_rows(&[pair], &RowOptions::default());
        let [TableRow::Pair(row)] = rows.as_slice() else {
            panic!("expected one pair row, got {rows:?}");
        };
        assert!(row.side(Side::Left).is_blank());
        assert_eq!(row.side(Side::Right).gutter, Gutter::Number(4));
    }

    #[test]
    fn layout_keeps_separators_in_place() {
        let pairs = vec![
            AlignedPair::separator(),
            AlignedPair::equal(7, 7, "x"),
            AlignedPair::separator(),
            AlignedPair::equal(20, 20, "y"),
        ];
        let rows = layout_rows(&pairs, &RowOptions::default());
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], TableRow::Separator);
        assert!(matches!(rows[1], TableRow::Pair(_)));
        assert_eq!(rows[2], TableRow::Separator);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use ocdiff_text::PartKind;
    use proptest::prelude::*;

    fn side_strategy() -> impl Strategy<Value = Option<PairSide>> {
        prop::option::of((1usize..500, "[a-z 中\t]{0,40}")).prop_map(|side| {
            side.map(|(lineno, text)| PairSide::new(lineno, MarkedLine::uniform(PartKind::Change, text)))
        })
    }

    proptest! {
        #[test]
        fn rows_always_pair_up(
            left in side_strategy(),
            right in side_strategy(),
            width in 1usize..20,
        ) {
            let options = RowOptions { width: Some(width), ..RowOptions::default() };
            let left_rows = wrap_side(left.as_ref(), &options);
            let right_rows = wrap_side(right.as_ref(), &options);
            let expected = left_rows.len().max(right_rows.len());
            let rows = synchronize(left_rows, right_rows);
            prop_assert_eq!(rows.len(), expected);
            for row in &rows {
                prop_assert!(!(row.left.is_blank() && row.right.is_blank()));
            }
        }
    }
}
