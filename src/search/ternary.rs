// Copyright 2025-present The rangeseek Authors
// SPDX-License-Identifier: Apache-2.0

//! Ternary search.
//!
//! Splits the window in three with two probes per iteration. Fewer
//! iterations than binary search (log3 n) but more comparisons in each, so
//! it is not faster in practice. It is here for comparison.
//!
//! ```text
//! [lo ........ mid_l ........ mid_r ........ hi)
//!  value < seq[mid_l]        → [lo, mid_l)
//!  seq[mid_l] < value < seq[mid_r] → [mid_l + 1, mid_r)
//!  value > seq[mid_r]        → [mid_r + 1, hi)
//! ```
//!
//! With fewer than three elements `len / 3 == 0` and both probes land on
//! `lo`; the outer branches still shrink the window, so the loop ends.

use crate::contracts::{check_match_or_sentinel, check_window};
use crate::types::SearchKey;

/// Find some position holding `value` in an ascending slice, or `seq.len()`.
///
/// # Example
///
/// ```
/// use rangeseek::search_ternary;
///
/// let data = [1, 3, 5, 7, 9, 11, 13, 15, 17];
/// assert_eq!(search_ternary(&data, 13), 6);
/// assert_eq!(search_ternary(&data, 14), data.len());
/// ```
pub fn search_ternary<T: SearchKey>(seq: &[T], value: T) -> usize {
    let not_found = seq.len();
    let mut lo = 0usize;
    let mut hi = seq.len();

    while lo < hi {
        let third = (hi - lo) / 3;
        let mid_l = lo + third;
        let mid_r = mid_l + third;

        let left = seq[mid_l];
        let right = seq[mid_r];

        if left == value {
            check_match_or_sentinel(seq, value, mid_l, "search_ternary");
            return mid_l;
        }
        if right == value {
            check_match_or_sentinel(seq, value, mid_r, "search_ternary");
            return mid_r;
        }

        if value < left {
            hi = mid_l;
        } else if value > right {
            lo = mid_r + 1;
        } else {
            // Incomparable targets (NaN) reach here even when mid_l == mid_r
            lo = mid_l + 1;
            hi = mid_r.max(lo);
        }
        check_window(lo, hi, seq.len(), "search_ternary");
    }

    not_found
}
