use crate::error::{Result, RpsError};
use crate::indent::{leading_spaces, scan};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verified {
    /// Spaces removed from each non-blank line.
    pub offset: usize,
    pub line_count: usize,
}

/// Check that `processed` is `original` with its common indent stripped.
pub fn verify(original: &str, processed: &str) -> Result<Verified> {
    let before = scan(original);
    let after = scan(processed);

    if before.line_count != after.line_count {
        return Err(RpsError::Verification(format!(
            "line count changed: {} -> {}",
            before.line_count, after.line_count
        )));
    }

    if before.needs_work() && original == processed {
        return Err(RpsError::Verification(
            "no changes were made to the text".into(),
        ));
    }

    if after.needs_work() {
        return Err(RpsError::Verification(format!(
            "result still has {} common leading spaces",
            after.offset
        )));
    }

    for (i, (o, p)) in original.split('\n').zip(processed.split('\n')).enumerate() {
        let cut = before.offset.min(leading_spaces(o));
        if p != &o[cut..] {
            return Err(RpsError::Verification(format!(
                "line {} is not the original with {} leading spaces removed",
                i + 1,
                before.offset
            )));
        }
    }

    Ok(Verified {
        offset: before.offset,
        line_count: before.line_count,
    })
}
