// Copyright 2025-present The rangeseek Authors
// SPDX-License-Identifier: Apache-2.0

//! Lower and upper bound.
//!
//! Binary narrowing with no equality test and no early exit: the window
//! shrinks until it is empty and `lo` is the answer. The results agree with
//! `slice::partition_point`:
//!
//! ```text
//! lower_bound(seq, v) == seq.partition_point(|x| x <  v)
//! upper_bound(seq, v) == seq.partition_point(|x| x <= v)
//! ```
//!
//! Together they delimit the run of elements equal to `v`:
//! `seq[lower_bound(seq, v)..upper_bound(seq, v)]`.

use crate::contracts::{check_position_in_range, check_window};
use crate::types::SearchKey;

/// First position whose value is not less than `value`, or `seq.len()`.
///
/// # Example
///
/// ```
/// use rangeseek::lower_bound;
///
/// let data = [1, 1, 1, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5];
/// assert_eq!(lower_bound(&data, 3), 5);
/// assert_eq!(lower_bound(&data, 0), 0);
/// assert_eq!(lower_bound(&data, 6), data.len());
/// ```
pub fn lower_bound<T: SearchKey>(seq: &[T], value: T) -> usize {
    let mut lo = 0usize;
    let mut hi = seq.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if seq[mid] >= value {
            hi = mid;
        } else {
            lo = mid + 1;
        }
        check_window(lo, hi, seq.len(), "lower_bound");
    }

    check_position_in_range(lo, seq.len(), "lower_bound");
    lo
}

/// First position whose value is strictly greater than `value`, or `seq.len()`.
///
/// # Example
///
/// ```
/// use rangeseek::upper_bound;
///
/// let data = [1, 1, 1, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5];
/// assert_eq!(upper_bound(&data, 3), 8);
/// assert_eq!(upper_bound(&data, 5), data.len());
/// ```
pub fn upper_bound<T: SearchKey>(seq: &[T], value: T) -> usize {
    let mut lo = 0usize;
    let mut hi = seq.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if seq[mid] > value {
            hi = mid;
        } else {
            lo = mid + 1;
        }
        check_window(lo, hi, seq.len(), "upper_bound");
    }

    check_position_in_range(lo, seq.len(), "upper_bound");
    lo
}
