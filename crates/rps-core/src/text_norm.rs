// crates/rps-core/src/text_norm.rs
//
// Line-ending cleanup applied before splitting on `\n`.
//
// Rules:
// - Convert CRLF and CR to LF.
// - Leave all other characters unchanged.

use std::borrow::Cow;

pub fn normalize_newlines(input: &str) -> Cow<'_, str> {
    if !input.contains('\r') {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            // CRLF -> LF, lone CR -> LF
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
            continue;
        }
        out.push(c);
    }
    Cow::Owned(out)
}
