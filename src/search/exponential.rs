// Copyright 2025-present The rangeseek Authors
// SPDX-License-Identifier: Apache-2.0

//! Exponential (galloping) search.
//!
//! Probe positions 1, 2, 4, 8, ... until the probe reaches or passes the
//! target (or the end of the slice). That brackets the target between the
//! previous probe and the current one in O(log p) steps, where `p` is the
//! target's position. A binary search over the bracket finishes the job.
//!
//! ```text
//! bound: 1 → 2 → 4 → 8        seq[8] >= value
//!                 └── binary search over [4, 9)
//! ```
//!
//! Good for very long inputs when the target is expected near the front.

use crate::contracts::check_match_or_sentinel;
use crate::search::binary::search_binary;
use crate::types::SearchKey;

/// First probe position. Doubling from zero would never move.
pub(crate) const FIRST_PROBE: usize = 1;

/// Find some position holding `value` in an ascending slice, or `seq.len()`.
///
/// # Example
///
/// ```
/// use rangeseek::search_exponential;
///
/// let data = [1, 2, 3, 4, 5, 6, 7];
/// assert_eq!(search_exponential(&data, 6), 5);
/// assert_eq!(search_exponential(&[10, 20], 15), 2);
/// ```
pub fn search_exponential<T: SearchKey>(seq: &[T], value: T) -> usize {
    let not_found = seq.len();
    if seq.is_empty() {
        return not_found;
    }

    let mut bound = FIRST_PROBE;
    while bound < seq.len() && seq[bound] < value {
        bound = bound.saturating_mul(2);
    }

    // seq[bound] itself may hold the target, so the bracket includes it
    let start = bound / 2;
    let end = bound.saturating_add(1).min(seq.len());

    let window = &seq[start..end];
    let rel = search_binary(window, value);
    if rel == window.len() {
        return not_found;
    }

    let pos = start + rel;
    check_match_or_sentinel(seq, value, pos, "search_exponential");
    pos
}
