//! Sub-range searches report positions in the outer slice.

use proptest::prelude::*;
use rangeseek::Algorithm;

/// A sorted vector plus a valid `start..end` inside it.
fn sorted_with_range() -> impl Strategy<Value = (Vec<i32>, usize, usize)> {
    prop::collection::vec(-30i32..30, 0..60)
        .prop_map(|mut v| {
            v.sort_unstable();
            v
        })
        .prop_flat_map(|v| {
            let len = v.len();
            (Just(v), 0..=len).prop_flat_map(move |(v, start)| (Just(v), Just(start), start..=len))
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Property: answers land in `[start, end]` and a miss is exactly `end`.
    #[test]
    fn prop_sub_range_answers_are_absolute(
        (seq, start, end) in sorted_with_range(),
        value in -35i32..35,
    ) {
        let window = &seq[start..end];
        for algorithm in Algorithm::ALL {
            let pos = algorithm.search_in(&seq, start..end, value);
            prop_assert!(pos >= start && pos <= end, "{} returned {}", algorithm, pos);
            if algorithm.is_bound() {
                prop_assert_eq!(pos, start + algorithm.search(window, value));
            } else if window.contains(&value) {
                prop_assert_eq!(seq[pos], value, "{}", algorithm);
            } else {
                prop_assert_eq!(pos, end, "{}", algorithm);
            }
        }
    }
}
