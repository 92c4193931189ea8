use crate::indent::{leading_spaces, scan};

/// Strip the indentation shared by every non-blank line.
///
/// Lines are split on `\n` only; a trailing separator keeps its trailing empty
/// line, so the output always has the same line count as the input. Blank
/// lines (empty or spaces only) are not considered when computing the common
/// offset, but they are still trimmed by up to that many spaces.
///
/// Total over all inputs and idempotent: after one pass the common offset of
/// the result is 0.
pub fn normalize(text: &str) -> String {
    let offset = scan(text).offset;
    strip_offset(text, offset)
}

/// Remove up to `offset` leading spaces from every line.
///
/// A line with fewer leading spaces loses only the ones it has; nothing but
/// U+0020 is ever removed.
pub fn strip_offset(text: &str, offset: usize) -> String {
    if offset == 0 {
        return text.to_owned();
    }

    let mut out = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let cut = offset.min(leading_spaces(line));
        out.push_str(&line[cut..]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_offset_zero_is_identity() {
        assert_eq!(strip_offset("  a\n b", 0), "  a\n b");
    }

    #[test]
    fn strip_offset_never_goes_past_the_indent() {
        assert_eq!(strip_offset("    a\n b\nc\n", 3), " a\nb\nc\n");
    }
}
