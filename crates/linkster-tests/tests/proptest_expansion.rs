//! Property-based expansion tests using proptest.
//!
//! These check counts, ordering and idempotence for arbitrary ranges.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p linkster-tests --test proptest_expansion
//! ```

use linkster_glob::{parse_range, split, Expander, Interval};
use proptest::prelude::*;

// ============================================================================
// 1. Single-step Expansion
// ============================================================================

proptest! {
    /// Ascending numeric ranges produce end - start + 1 strings in order.
    #[test]
    fn numeric_step_count_and_order(start in -500i64..500, len in 0i64..60) {
        let end = start + len;
        let token = format!("{}..{}", start, end);
        let out = Expander::default().expand_once("P{[]}S", &token).unwrap();

        prop_assert_eq!(out.len() as i64, len + 1);
        for (i, s) in out.iter().enumerate() {
            prop_assert_eq!(s, &format!("P{}S", start + i as i64));
        }
    }

    /// Descending numeric ranges produce nothing.
    #[test]
    fn numeric_descending_is_empty(start in -500i64..500, gap in 1i64..60) {
        let token = format!("{}..{}", start, start - gap);
        let out = Expander::default().expand_once("P{[]}", &token).unwrap();
        prop_assert!(out.is_empty());
    }

    /// Alphabetic ranges over ASCII from '0' to '~' produce one string per code point.
    #[test]
    fn alpha_step_count_and_order(a in 0x30u32..0x7f, b in 0x30u32..0x7f) {
        let (lo, hi) = (a.min(b), a.max(b));
        let lo_c = char::from_u32(lo).unwrap();
        let hi_c = char::from_u32(hi).unwrap();
        let token = format!("A:{}..{}", lo_c, hi_c);
        let out = Expander::default().expand_once("U{[]}", &token).unwrap();

        prop_assert_eq!(out.len() as u32, hi - lo + 1);
        let chars: Vec<u32> = out
            .iter()
            .map(|s| s.chars().nth(1).unwrap() as u32)
            .collect();
        prop_assert!(chars.windows(2).all(|w| w[0] < w[1]));
    }

    /// Parsed intervals report the same size as the strings they produce.
    #[test]
    fn interval_size_matches_output(start in -100i64..100, end in -100i64..100) {
        let token = format!("{}..{}", start, end);
        let interval = parse_range(&token).unwrap();
        prop_assert_eq!(interval, Interval::Numeric { start, end });
        let out = Expander::default().expand_once("{[]}", &token).unwrap();
        prop_assert_eq!(out.len() as u64, interval.size());
    }
}

// ============================================================================
// 2. Recursive Expansion
// ============================================================================

proptest! {
    /// Two markers give the row-major product of both ranges.
    #[test]
    fn two_level_product(n in 1i64..12, m in 1i64..12) {
        let ranges = [format!("1..{}", n), format!("1..{}", m)];
        let out = Expander::default().expand("R{[]}C{[]}", &ranges, 0).unwrap();

        prop_assert_eq!(out.len() as i64, n * m);
        let mut expected = Vec::new();
        for r in 1..=n {
            for c in 1..=m {
                expected.push(format!("R{}C{}", r, c));
            }
        }
        prop_assert_eq!(out, expected);
    }

    /// Resolved strings come back unchanged regardless of the range list.
    #[test]
    fn resolved_strings_are_fixed_points(
        text in "[a-zA-Z0-9/:._-]{0,40}",
        ranges in prop::collection::vec("[0-9a-z.:]{0,8}", 1..4),
    ) {
        let out = Expander::default().expand(&text, &ranges, 0).unwrap();
        prop_assert_eq!(out, vec![text]);
    }

    /// Feeding results back through expand leaves them unchanged.
    #[test]
    fn expansion_is_idempotent(n in 1i64..6, m in 1i64..6) {
        let expander = Expander::default();
        let ranges = [format!("1..{}", n), format!("1..{}", m)];
        let out = expander.expand("B{[]}/F{[]}", &ranges, 0).unwrap();
        for s in &out {
            prop_assert_eq!(expander.expand(s, &ranges, 0).unwrap(), vec![s.clone()]);
        }
    }
}

// ============================================================================
// 3. Tokenizer
// ============================================================================

proptest! {
    /// Collapsing mode never yields empty tokens and never loses content.
    #[test]
    fn split_collapse_drops_only_empties(input in "[a,]{0,30}") {
        let tokens = split(Some(input.as_str()), ',', false).unwrap();
        prop_assert!(tokens.iter().all(|t| !t.is_empty()));
        prop_assert_eq!(tokens.concat(), input.replace(',', ""));
    }

    /// Preserving mode yields one more token than separators (for non-empty input).
    #[test]
    fn split_preserve_counts_separators(input in "[a,]{1,30}") {
        let tokens = split(Some(input.as_str()), ',', true).unwrap();
        prop_assert_eq!(tokens.len(), input.matches(',').count() + 1);
        prop_assert_eq!(tokens.join(","), input);
    }

    /// Tokenizing never panics on arbitrary input.
    #[test]
    fn split_never_panics(input in ".{0,50}", preserve in any::<bool>()) {
        let _ = split(Some(input.as_str()), ',', preserve);
    }
}
