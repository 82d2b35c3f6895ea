//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures and reference answers to avoid duplication.

#![doc(hidden)]

use crate::types::{Algorithm, SearchKey};

pub use crate::bench::progression;

/// Sorted runs `[1, 1, 1, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5]` used by the bound suites.
pub fn runs_odd() -> Vec<i32> {
    vec![1, 1, 1, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5]
}

/// Even-length variant of [`runs_odd`].
pub fn runs_even() -> Vec<i32> {
    vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5]
}

/// Reference lower bound.
pub fn oracle_lower_bound<T: SearchKey>(seq: &[T], value: T) -> usize {
    seq.partition_point(|x| *x < value)
}

/// Reference upper bound.
pub fn oracle_upper_bound<T: SearchKey>(seq: &[T], value: T) -> usize {
    seq.partition_point(|x| *x <= value)
}

/// Check an algorithm's answer against the reference for sorted input.
///
/// Exact-match searches must land on some copy of `value` (or the sentinel
/// when absent); bound searches must equal the reference exactly.
pub fn answer_is_correct<T: SearchKey>(algorithm: Algorithm, seq: &[T], value: T) -> bool {
    let pos = algorithm.search(seq, value);
    match algorithm {
        Algorithm::LowerBound => pos == oracle_lower_bound(seq, value),
        Algorithm::UpperBound => pos == oracle_upper_bound(seq, value),
        _ => {
            if seq.contains(&value) {
                seq.get(pos).is_some_and(|x| *x == value)
            } else {
                pos == seq.len()
            }
        }
    }
}
