// Copyright 2025-present The rangeseek Authors
// SPDX-License-Identifier: Apache-2.0

//! Interpolation search.
//!
//! Binary search always probes the middle. Interpolation search probes where
//! the target *should* be if the values grew linearly between the two ends
//! of the window:
//!
//! ```text
//! offset = (value - seq[lo]) / (seq[hi-1] - seq[lo]) * (hi - lo - 1)
//! ```
//!
//! On an arithmetic progression the first probe lands on the answer. On
//! near-uniform data the expected cost is O(log log n). On skewed data
//! (say, exponential growth) the estimate keeps landing near one end and the
//! cost degrades towards O(n). That trade-off is inherent to the method.
//!
//! The estimate is computed in `f64` and truncated. It is clamped into the
//! window, so precision loss on very large integers costs probes, not
//! correctness. When no estimate exists (the ends round to the same `f64`,
//! or the window spans an infinity) the window is split at its midpoint.

use crate::contracts::{check_match_or_sentinel, check_window};
use crate::types::SearchKey;

/// Estimate where `value` sits in a window whose end values are `low` and
/// `high`, as an offset from the start of the window.
///
/// Returns `None` when the estimate is undefined in `f64`: a zero or
/// non-finite span, or a non-finite ratio. A zero span does not mean the ends
/// are equal; integers beyond 2^53 may round together. The result is always
/// `< window_len` when `window_len > 0`.
///
/// # Example
///
/// ```
/// use rangeseek::estimate_offset;
///
/// assert_eq!(estimate_offset(10, 20, 15, 11), Some(5));
/// assert_eq!(estimate_offset(3, 3, 3, 4), None);
/// ```
pub fn estimate_offset<T: SearchKey>(low: T, high: T, value: T, window_len: usize) -> Option<usize> {
    let low = low.to_f64()?;
    let high = high.to_f64()?;
    let value = value.to_f64()?;

    let span = high - low;
    if span == 0.0 || !span.is_finite() {
        return None;
    }

    let ratio = (value - low) / span;
    if !ratio.is_finite() {
        return None;
    }

    let last = window_len.saturating_sub(1);
    // `as` saturates: negative ratios become 0
    let offset = (ratio * last as f64) as usize;
    Some(offset.min(last))
}

/// Find some position holding `value` in an ascending slice, or `seq.len()`.
///
/// Works best on evenly spaced values. A window whose ends are equal has no
/// data range to interpolate over; unless its first element is the target,
/// the search gives up and returns `seq.len()`. A window the estimator cannot
/// handle falls back to a binary split.
///
/// # Example
///
/// ```
/// use rangeseek::search_interpolation;
///
/// let data = [1, 2, 4, 7, 11, 16];
/// assert_eq!(search_interpolation(&data, 7), 3);
/// assert_eq!(search_interpolation(&[10, 20], 15), 2);
/// ```
pub fn search_interpolation<T: SearchKey>(seq: &[T], value: T) -> usize {
    let not_found = seq.len();
    let mut lo = 0usize;
    let mut hi = seq.len();

    while lo < hi {
        let low = seq[lo];

        if hi - lo == 1 {
            return if low == value { lo } else { not_found };
        }

        let high = seq[hi - 1];
        if value < low || value > high {
            return not_found;
        }
        if low == value {
            return lo;
        }

        if low == high {
            return not_found;
        }

        let pos = match estimate_offset(low, high, value, hi - lo) {
            Some(offset) => lo + offset,
            None => lo + (hi - lo) / 2,
        };
        let probe = seq[pos];
        if probe == value {
            check_match_or_sentinel(seq, value, pos, "search_interpolation");
            return pos;
        } else if probe < value {
            lo = pos + 1;
        } else {
            hi = pos;
        }
        check_window(lo, hi, seq.len(), "search_interpolation");
    }

    not_found
}
