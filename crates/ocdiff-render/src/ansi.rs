#![forbid(unsafe_code)]

//! ANSI escape sequence generation helpers.
//!
//! Pure string-building functions; no state is tracked between calls.
//!
//! | Sequence | Description |
//! |----------|-------------|
//! | `ESC [ a ; c m` | SGR with attribute `a` and foreground `c` |
//! | `ESC [ m` | SGR reset |

use ocdiff_style::Sgr;

/// SGR reset: `CSI m`
pub const SGR_RESET: &str = "\x1b[m";

#[inline]
fn push_u8_dec(out: &mut String, n: u8) {
    if n >= 100 {
        out.push(char::from(b'0' + n / 100));
    }
    if n >= 10 {
        out.push(char::from(b'0' + (n / 10) % 10));
    }
    out.push(char::from(b'0' + n % 10));
}

/// Append `ESC [ attr ; fg m`.
#[inline]
pub fn push_sgr(out: &mut String, sgr: Sgr) {
    let (attr, fg) = sgr.params();
    out.push_str("\x1b[");
    push_u8_dec(out, attr);
    out.push(';');
    push_u8_dec(out, fg);
    out.push('m');
}

/// Append the reset sequence.
#[inline]
pub fn push_reset(out: &mut String) {
    out.push_str(SGR_RESET);
}

/// Append `text`, wrapped in `style` and a reset when a style is given.
pub fn push_styled(out: &mut String, style: Option<Sgr>, text: &str) {
    match style {
        Some(sgr) => {
            push_sgr(out, sgr);
            out.push_str(text);
            push_reset(out);
        }
        None => out.push_str(text),
    }
}
