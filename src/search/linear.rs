// Copyright 2025-present The rangeseek Authors
// SPDX-License-Identifier: Apache-2.0

//! Linear scan: the correctness baseline.

use crate::types::SearchKey;

/// Return the first position holding `value`, or `seq.len()` if none does.
///
/// No ordering precondition. O(n).
///
/// # Example
///
/// ```
/// use rangeseek::search_linear;
///
/// let data = [7, 3, 9, 3];
/// assert_eq!(search_linear(&data, 3), 1);
/// assert_eq!(search_linear(&data, 4), data.len());
/// ```
pub fn search_linear<T: SearchKey>(seq: &[T], value: T) -> usize {
    seq.iter().position(|x| *x == value).unwrap_or(seq.len())
}
