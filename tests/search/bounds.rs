//! Lower and upper bound suites.
//!
//! Each case checks the answer against `partition_point` and, where the
//! bound lands on a real element, the value found there.

use super::common::{oracle_lower_bound, oracle_upper_bound, runs_even, runs_odd};
use rangeseek::{lower_bound, upper_bound};

// ============================================================================
// LOWER BOUND
// ============================================================================

#[test]
fn test_lower_bound_empty_range() {
    let runs = runs_odd();
    assert_eq!(lower_bound(&runs[..0], 3), 0);
}

#[test]
fn test_lower_bound_single_repeated_value() {
    let ones = [1; 13];
    assert_eq!(lower_bound(&ones, 1), 0);
    assert_eq!(lower_bound(&ones, 2), ones.len());
}

#[test]
fn test_lower_bound_odd_length() {
    let runs = runs_odd();
    // regular, to the left, to the right, at the beginning, at the end
    for (value, expected) in [(3, 5), (2, 3), (4, 8), (1, 0), (5, 11)] {
        let lb = lower_bound(&runs, value);
        assert_eq!(lb, expected, "value {}", value);
        assert_eq!(runs[lb], value);
        assert_eq!(lb, oracle_lower_bound(&runs, value));
    }
}

#[test]
fn test_lower_bound_even_length() {
    let runs = runs_even();
    for (value, expected) in [(3, 6), (2, 3), (4, 9), (1, 0), (5, 12)] {
        let lb = lower_bound(&runs, value);
        assert_eq!(lb, expected, "value {}", value);
        assert_eq!(runs[lb], value);
        assert_eq!(lb, oracle_lower_bound(&runs, value));
    }
}

#[test]
fn test_lower_bound_target_outside() {
    let runs = runs_odd();
    assert_eq!(lower_bound(&runs, -4), 0);
    assert_eq!(lower_bound(&runs, 10), runs.len());
}

#[test]
fn test_lower_bound_target_between_runs() {
    let odd = [1, 1, 1, 3, 3, 5, 5, 5, 7, 7, 7, 9, 9];
    for (value, expected) in [(2, 3), (4, 5), (6, 8), (8, 11)] {
        assert_eq!(lower_bound(&odd, value), expected, "value {}", value);
    }
}

// ============================================================================
// UPPER BOUND
// ============================================================================

#[test]
fn test_upper_bound_empty_range() {
    let runs = runs_odd();
    assert_eq!(upper_bound(&runs[..0], 3), 0);
}

#[test]
fn test_upper_bound_single_repeated_value() {
    let ones = [1; 13];
    assert_eq!(upper_bound(&ones, 1), ones.len());
    assert_eq!(upper_bound(&ones, 0), 0);
}

#[test]
fn test_upper_bound_odd_length() {
    let runs = runs_odd();
    for (value, expected) in [(3, 8), (2, 5), (4, 11), (1, 3), (5, 13)] {
        let ub = upper_bound(&runs, value);
        assert_eq!(ub, expected, "value {}", value);
        assert_eq!(ub, oracle_upper_bound(&runs, value));
        if ub < runs.len() {
            assert!(runs[ub] > value);
        }
    }
}

#[test]
fn test_upper_bound_even_length() {
    let runs = runs_even();
    for (value, expected) in [(3, 9), (2, 6), (4, 12), (1, 3), (5, 14)] {
        let ub = upper_bound(&runs, value);
        assert_eq!(ub, expected, "value {}", value);
        assert_eq!(ub, oracle_upper_bound(&runs, value));
    }
}

#[test]
fn test_upper_bound_target_outside() {
    let runs = runs_odd();
    assert_eq!(upper_bound(&runs, -4), 0);
    assert_eq!(upper_bound(&runs, 10), runs.len());
}

#[test]
fn test_upper_bound_target_between_runs() {
    let odd = [1, 1, 1, 3, 3, 5, 5, 5, 7, 7, 7, 9, 9];
    for (value, expected) in [(2, 3), (4, 5), (6, 8), (8, 11)] {
        assert_eq!(upper_bound(&odd, value), expected, "value {}", value);
    }
}

// ============================================================================
// BOTH
// ============================================================================

#[test]
fn test_bounds_delimit_equal_run() {
    let runs = runs_even();
    for value in 1..=5 {
        let lb = lower_bound(&runs, value);
        let ub = upper_bound(&runs, value);
        assert!(runs[lb..ub].iter().all(|x| *x == value));
        assert_eq!(ub - lb, runs.iter().filter(|x| **x == value).count());
    }
}
