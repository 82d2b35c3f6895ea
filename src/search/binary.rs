// Copyright 2025-present The rangeseek Authors
// SPDX-License-Identifier: Apache-2.0

//! Binary search, iterative and recursive.
//!
//! Both share one narrowing rule over the window `[lo, hi)`:
//!
//! ```text
//! mid = lo + (hi - lo) / 2
//! seq[mid] == value  →  done
//! seq[mid] <  value  →  [mid + 1, hi)
//! seq[mid] >  value  →  [lo, mid)
//! ```
//!
//! `hi` moves while the loop runs, so the "not found" answer is taken from an
//! immutable copy of the original length, never from the live window.

use crate::contracts::{check_match_or_sentinel, check_window};
use crate::types::SearchKey;

/// Find some position holding `value` in an ascending slice.
///
/// Returns `seq.len()` if `value` is absent. With duplicates, any one of the
/// matching positions may be returned.
///
/// # Example
///
/// ```
/// use rangeseek::search_binary;
///
/// let data = [1, 2, 3, 4, 5, 6, 7];
/// assert_eq!(search_binary(&data, 4), 3);
/// assert_eq!(search_binary(&data, -4), 7);
/// ```
pub fn search_binary<T: SearchKey>(seq: &[T], value: T) -> usize {
    let not_found = seq.len();
    let mut lo = 0usize;
    let mut hi = seq.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let probe = seq[mid];
        if probe == value {
            check_match_or_sentinel(seq, value, mid, "search_binary");
            return mid;
        } else if value > probe {
            lo = mid + 1;
        } else {
            hi = mid;
        }
        check_window(lo, hi, seq.len(), "search_binary");
    }

    not_found
}

/// Recursive formulation of [`search_binary`]. Same answers for every input.
///
/// Recursion depth is O(log n).
pub fn search_binary_recursive<T: SearchKey>(seq: &[T], value: T) -> usize {
    let not_found = seq.len();
    let pos = descend(seq, 0, seq.len(), value, not_found);
    check_match_or_sentinel(seq, value, pos, "search_binary_recursive");
    pos
}

/// Search `[lo, hi)`, answering `not_found` on a miss.
///
/// The sentinel may be one past the end, so a child's answer is compared by
/// position before anything is read through it.
fn descend<T: SearchKey>(seq: &[T], lo: usize, hi: usize, value: T, not_found: usize) -> usize {
    if lo >= hi {
        return not_found;
    }

    let mid = lo + (hi - lo) / 2;
    let probe = seq[mid];
    if probe == value {
        return mid;
    }

    let found = if value > probe {
        descend(seq, mid + 1, hi, value, not_found)
    } else {
        descend(seq, lo, mid, value, not_found)
    };

    if found != not_found {
        check_match_or_sentinel(seq, value, found, "search_binary_recursive");
    }
    found
}
