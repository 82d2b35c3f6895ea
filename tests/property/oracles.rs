//! Differential tests against `partition_point` and `contains`.

use super::common::{oracle_lower_bound, oracle_upper_bound};
use proptest::prelude::*;
use rangeseek::{lower_bound, search_binary, search_binary_recursive, upper_bound, Algorithm};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Sorted vectors with plenty of duplicates.
fn sorted_dense() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-20i32..20, 0..80).prop_map(|mut v| {
        v.sort_unstable();
        v
    })
}

/// Sorted vectors spread over a wide range, mostly distinct.
fn sorted_sparse() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1_000_000i64..1_000_000, 0..200).prop_map(|mut v| {
        v.sort_unstable();
        v
    })
}

/// Sorted `i64` over the full range, so neighbours often share an `f64`.
fn sorted_wide_i64() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(any::<i64>(), 1..64).prop_map(|mut v| {
        v.sort_unstable();
        v
    })
}

/// Sorted `u64` packed just below `u64::MAX`.
fn sorted_top_u64() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..4096, 1..64).prop_map(|v| {
        let mut v: Vec<u64> = v.into_iter().map(|d| u64::MAX - d).collect();
        v.sort_unstable();
        v
    })
}

/// Sorted floats without NaN; infinities and extreme magnitudes allowed.
fn sorted_floats() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(
        prop_oneof![
            any::<f64>().prop_filter("no NaN", |x| !x.is_nan()),
            Just(f64::INFINITY),
            Just(f64::NEG_INFINITY),
            -10.0f64..10.0,
        ],
        1..48,
    )
    .prop_map(|mut v| {
        v.sort_by(f64::total_cmp);
        v
    })
}

fn exact_algorithms() -> impl Iterator<Item = Algorithm> {
    Algorithm::ALL.into_iter().filter(|a| !a.is_bound())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Property: full-range `i64` members are found by every exact search.
    #[test]
    fn prop_wide_i64_members_found(seq in sorted_wide_i64(), pick in any::<prop::sample::Index>()) {
        let value = seq[pick.index(seq.len())];
        for algorithm in exact_algorithms() {
            let pos = algorithm.search(&seq, value);
            prop_assert_eq!(seq.get(pos), Some(&value), "{}", algorithm);
        }
    }

    /// Property: `u64` keys that collapse to one `f64` are still told apart.
    #[test]
    fn prop_top_u64_members_found(seq in sorted_top_u64(), pick in any::<prop::sample::Index>()) {
        let value = seq[pick.index(seq.len())];
        for algorithm in exact_algorithms() {
            let pos = algorithm.search(&seq, value);
            prop_assert_eq!(seq.get(pos), Some(&value), "{}", algorithm);
        }
    }

    /// Property: sorted floats with infinities agree with `contains`.
    #[test]
    fn prop_sorted_floats_match_contains(
        seq in sorted_floats(),
        pick in any::<prop::sample::Index>(),
        stray in -20.0f64..20.0,
    ) {
        let member = seq[pick.index(seq.len())];
        for value in [member, stray] {
            let present = seq.contains(&value);
            for algorithm in exact_algorithms() {
                let pos = algorithm.search(&seq, value);
                if present {
                    prop_assert!(seq.get(pos).is_some_and(|x| *x == value), "{} missed {}", algorithm, value);
                } else {
                    prop_assert_eq!(pos, seq.len(), "{} invented {}", algorithm, value);
                }
            }
        }
    }

    /// Property: the bounds match `partition_point` exactly.
    #[test]
    fn prop_bounds_match_partition_point(seq in sorted_dense(), value in -25i32..25) {
        prop_assert_eq!(lower_bound(&seq, value), oracle_lower_bound(&seq, value));
        prop_assert_eq!(upper_bound(&seq, value), oracle_upper_bound(&seq, value));
    }

    /// Property: `lower_bound <= upper_bound`, and the gap counts the copies.
    #[test]
    fn prop_bounds_count_copies(seq in sorted_dense(), value in -25i32..25) {
        let lb = lower_bound(&seq, value);
        let ub = upper_bound(&seq, value);
        prop_assert!(lb <= ub);
        prop_assert_eq!(ub - lb, seq.iter().filter(|x| **x == value).count());
    }

    /// Property: exact searches hit a copy iff the value is present.
    #[test]
    fn prop_exact_match_iff_present(seq in sorted_dense(), value in -25i32..25) {
        for algorithm in Algorithm::ALL.into_iter().filter(|a| !a.is_bound()) {
            let pos = algorithm.search(&seq, value);
            if seq.contains(&value) {
                prop_assert!(pos < seq.len(), "{} missed {}", algorithm, value);
                prop_assert_eq!(seq[pos], value);
            } else {
                prop_assert_eq!(pos, seq.len(), "{} invented {}", algorithm, value);
            }
        }
    }

    /// Property: sparse data, probes drawn from the data itself.
    #[test]
    fn prop_finds_every_member(seq in sorted_sparse(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!seq.is_empty());
        let value = seq[pick.index(seq.len())];
        for algorithm in Algorithm::ALL.into_iter().filter(|a| !a.is_bound()) {
            let pos = algorithm.search(&seq, value);
            prop_assert_eq!(seq.get(pos), Some(&value), "{}", algorithm);
        }
    }

    /// Property: recursive and iterative binary search split identically.
    #[test]
    fn prop_recursive_matches_iterative(seq in sorted_dense(), value in -25i32..25) {
        prop_assert_eq!(search_binary(&seq, value), search_binary_recursive(&seq, value));
    }
}
