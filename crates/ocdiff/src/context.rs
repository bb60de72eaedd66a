#![forbid(unsafe_code)]

//! Context windowing.
//!
//! Collapses unchanged stretches of a pair stream, keeping `n` pairs of
//! context around every change. Each kept block that follows something
//! hidden is introduced by a separator, including the very first block
//! (the table drops that leading separator when it draws).

use ocdiff_text::AlignedPair;
use std::borrow::Cow;

/// Which pairs of `run` lie within `context` of a changed pair.
fn keep_mask(run: &[AlignedPair], context: usize) -> Vec<bool> {
    let mut keep = vec![false; run.len()];
    let last = run.len().saturating_sub(1);
    for (i, _) in run.iter().enumerate().filter(|(_, pair)| pair.is_changed()) {
        let start = i.saturating_sub(context);
        let end = i.saturating_add(context).min(last);
        keep[start..=end].fill(true);
    }
    keep
}

/// Window a pair stream to `context_lines` of context.
///
/// `None` returns the stream untouched. Distances are measured within runs
/// between separators already present in the input; such a separator
/// counts as hidden context. A stream without changes windows to nothing.
#[must_use]
pub fn window(pairs: &[AlignedPair], context_lines: Option<usize>) -> Cow<'_, [AlignedPair]> {
    let Some(context) = context_lines else {
        return Cow::Borrowed(pairs);
    };

    let mut out = Vec::new();
    let mut after_separator = false;
    for run in pairs.split(AlignedPair::is_separator) {
        let mut hidden = after_separator;
        for (pair, kept) in run.iter().zip(keep_mask(run, context)) {
            if !kept {
                hidden = true;
                continue;
            }
            if hidden {
                out.push(AlignedPair::separator());
                hidden = false;
            }
            out.push(pair.clone());
        }
        after_separator = true;
    }

    tracing::trace!(
        context,
        input = pairs.len(),
        kept = out.len(),
        "windowed pairs"
    );
    Cow::Owned(out)
}
