#![forbid(unsafe_code)]

//! Tab normalization.
//!
//! Tabs are expanded to tab stops before lines are handed to the alignment
//! collaborator, so columns line up on both sides. The columns produced by a
//! tab are filled with [`TAB_PLACEHOLDER`] instead of spaces: a tab never
//! compares equal to a real space, and renderers draw the placeholder as a
//! blank cell.
//!
//! # Example
//! ```
//! use ocdiff_text::tabs::expand_tabs;
//!
//! assert_eq!(expand_tabs("a\tb c", 4), "a\t\t\tb c");
//! ```

/// Character standing in for one column of an expanded tab.
pub const TAB_PLACEHOLDER: char = '\t';

/// Expand tabs to `tabsize`-aligned stops, tagging the inserted columns.
///
/// Every character advances the column by one; `\n` and `\r` reset it.
/// Original spaces are kept as spaces. Trailing newlines are removed. A
/// `tabsize` of zero deletes tabs.
#[must_use]
pub fn expand_tabs(line: &str, tabsize: usize) -> String {
    let mut out = String::with_capacity(line.len());
    let mut column = 0usize;

    for c in line.chars() {
        match c {
            '\t' => {
                if tabsize == 0 {
                    continue;
                }
                let fill = tabsize - column % tabsize;
                out.extend(std::iter::repeat_n(TAB_PLACEHOLDER, fill));
                column += fill;
            }
            '\n' | '\r' => {
                out.push(c);
                column = 0;
            }
            _ => {
                out.push(c);
                column += 1;
            }
        }
    }

    let kept = out.trim_end_matches('\n').len();
    out.truncate(kept);
    out
}

/// Split a text into lines and normalize tabs in each.
///
/// Lines are split on `\n` (a trailing `\r` is kept, it is rendered
/// visibly). A final newline does not produce an extra empty line.
#[must_use]
pub fn split_lines(text: &str, tabsize: usize) -> Vec<String> {
    text.split_terminator('\n')
        .map(|line| expand_tabs(line, tabsize))
        .collect()
}
