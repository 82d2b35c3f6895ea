// Copyright 2025-present The rangeseek Authors
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the search algorithms.
//!
//! Debug-mode assertions on the answers the searches give. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Hold for **any input**, sorted or not
//!
//! Unsorted input to a binary search is a precondition violation with an
//! unspecified answer, not a crash, so nothing here checks sortedness. Every
//! search still guarantees that the answer lies inside `[0, len]` and that a
//! position reported as a match really holds the target.
//!
//! # Contract table
//!
//! | Contract Function              | Guarantee                                  |
//! |--------------------------------|--------------------------------------------|
//! | `check_position_in_range`      | `pos <= len` (sentinel included)           |
//! | `check_match_or_sentinel`      | `pos == len` or `seq[pos] == value`        |
//! | `check_window`                 | `lo <= hi <= len` while narrowing          |
//!
//! # Usage
//!
//! ```ignore
//! let pos = narrow(seq, value);
//! check_match_or_sentinel(seq, value, pos, "binary");
//! ```

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// The exponential probe starts at 1 and doubles. Starting at 0 would never
/// grow, so pin the start value here.
const _: () = {
    const FIRST_PROBE: usize = crate::search::exponential::FIRST_PROBE;
    assert!(FIRST_PROBE == 1);
};

use crate::types::SearchKey;

// ============================================================================
// POSITION CONTRACTS
// ============================================================================

/// Check that a returned position is inside the closed range `[0, len]`.
///
/// # Panics (debug builds only)
/// Panics if `pos > len`.
#[inline]
pub fn check_position_in_range(pos: usize, len: usize, algorithm: &str) {
    debug_assert!(
        pos <= len,
        "Contract violation: {} returned position {} beyond sentinel {}",
        algorithm,
        pos,
        len
    );
}

/// Check that an exact-match search returned either the sentinel or a
/// position holding `value`.
///
/// # Panics (debug builds only)
/// Panics if `pos < len` and `seq[pos] != value`, or if `pos > len`.
#[inline]
pub fn check_match_or_sentinel<T: SearchKey>(seq: &[T], value: T, pos: usize, algorithm: &str) {
    check_position_in_range(pos, seq.len(), algorithm);

    if let Some(found) = seq.get(pos) {
        debug_assert!(
            *found == value,
            "Contract violation: {} reported a match at {} that does not hold the target",
            algorithm,
            pos
        );
    }
}

// ============================================================================
// NARROWING CONTRACTS
// ============================================================================

/// Check that a search window `[lo, hi)` is well formed.
///
/// # Panics (debug builds only)
/// Panics if `lo > hi` or `hi > len`.
#[inline]
pub fn check_window(lo: usize, hi: usize, len: usize, algorithm: &str) {
    debug_assert!(
        lo <= hi && hi <= len,
        "Contract violation: {} narrowed to malformed window [{}, {}) of length {}",
        algorithm,
        lo,
        hi,
        len
    );
}
