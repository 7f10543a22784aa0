//! Printf-style placeholders in phrase templates.
//!
//! Templates use a `%` sigil followed by a single verb letter (`%d`, `%v`, ...).
//! `%%` is a literal percent sign. Width and flag modifiers are not supported.

use std::fmt::Write as _;

const fn is_verb(b: u8) -> bool {
    matches!(
        b,
        b'v' | b'T'
            | b't'
            | b'b'
            | b'c'
            | b'd'
            | b'o'
            | b'O'
            | b'q'
            | b'x'
            | b'X'
            | b'U'
            | b'e'
            | b'E'
            | b'f'
            | b'F'
            | b'g'
            | b'G'
            | b's'
            | b'p'
    )
}

/// Count the positional placeholders in `template`.
///
/// Usable in const context, which is how shipped locale tables are checked at
/// compile time.
#[must_use]
pub const fn count_params(template: &str) -> usize {
    let bytes = template.as_bytes();
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 1 < bytes.len() {
            if bytes[i + 1] == b'%' {
                i += 2;
                continue;
            }
            if is_verb(bytes[i + 1]) {
                count += 1;
                i += 2;
                continue;
            }
        }
        i += 1;
    }
    count
}

/// Substitute `value` for every placeholder of `template` and unescape `%%`.
#[must_use]
pub fn render(template: &str, value: u64) -> String {
    let mut out = String::with_capacity(template.len() + 4);
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(verb) if verb.is_ascii() && is_verb(verb as u8) => {
                chars.next();
                let _ = write!(out, "{value}");
            }
            _ => out.push('%'),
        }
    }
    out
}
