//! Property tests for indentation normalization.

use proptest::prelude::*;
use rps_core::indent::{is_blank, leading_spaces};
use rps_core::{normalize, scan, verify};

/// Lines that look like indented source: some spaces, then a mix of
/// letters, tabs and spaces.
fn indented_text() -> impl Strategy<Value = String> {
    prop::collection::vec("[ ]{0,8}[a-z \t]{0,10}", 0..12).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn idempotent(s in indented_text()) {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn idempotent_on_arbitrary_strings(s in any::<String>()) {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn line_count_preserved(s in any::<String>()) {
        prop_assert_eq!(normalize(&s).split('\n').count(), s.split('\n').count());
    }

    #[test]
    fn residual_offset_is_zero(s in indented_text()) {
        prop_assert_eq!(scan(&normalize(&s)).offset, 0);
    }

    #[test]
    fn relative_indent_preserved(s in indented_text()) {
        let offset = scan(&s).offset;
        let out = normalize(&s);
        for (o, p) in s.split('\n').zip(out.split('\n')) {
            if is_blank(o) {
                continue;
            }
            prop_assert_eq!(leading_spaces(p), leading_spaces(o) - offset);
            prop_assert_eq!(p.trim_start_matches(' '), o.trim_start_matches(' '));
        }
    }

    #[test]
    fn output_always_verifies(s in any::<String>()) {
        let out = normalize(&s);
        prop_assert!(verify(&s, &out).is_ok());
    }
}
