// crates/rps-core/src/indent.rs
//
// Leading-space accounting over `\n`-separated lines.
//
// Only U+0020 counts as indentation. Tabs and every other character end the
// indent run.
//
// A line is "blank" when it is empty or made only of spaces. Blank lines never
// take part in the common offset: a stray "   " line between two blocks must
// not drag the offset down (or up) for the real content.

/// Number of consecutive spaces at the start of `line`.
#[inline]
pub fn leading_spaces(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b' ').count()
}

/// Empty, or spaces only.
#[inline]
pub fn is_blank(line: &str) -> bool {
    line.bytes().all(|b| b == b' ')
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IndentScan {
    /// Lines after splitting on `\n` (an empty text is one empty line).
    pub line_count: usize,
    /// Minimum leading-space count over participating lines; 0 when none.
    pub offset: usize,
    /// Leading-space count of the first participating line; 0 when none.
    pub first_indent: usize,
    /// Lines that contributed to `offset` (non-blank lines).
    pub participating: usize,
}

impl IndentScan {
    /// True when there is a common indent to strip.
    pub fn needs_work(&self) -> bool {
        self.offset > 0
    }
}

pub fn scan(text: &str) -> IndentScan {
    let mut out = IndentScan::default();
    let mut min: Option<usize> = None;

    for line in text.split('\n') {
        out.line_count += 1;
        if is_blank(line) {
            continue;
        }

        let n = leading_spaces(line);
        if out.participating == 0 {
            out.first_indent = n;
        }
        out.participating += 1;
        min = Some(min.map_or(n, |m| m.min(n)));
    }

    out.offset = min.unwrap_or(0);
    out
}
