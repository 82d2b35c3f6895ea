// Copyright 2025-present The rangeseek Authors
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the rangeseek search loops.
//!
//! This standalone crate extracts the narrowing loops, monomorphised to
//! `i32`, and proves their index arithmetic for every input up to a small
//! length bound.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: no loop indexes outside the slice, sorted or not
//! 2. **Range**: every answer lies in `[0, len]`
//! 3. **Correctness**: on sorted input the bounds equal the linear reference
//!    and exact searches return the sentinel iff the value is absent

/// Largest slice the proofs enumerate.
pub const MAX_LEN: usize = 8;

// ============================================================================
// SEARCH LOOPS (copied from src/search/)
// ============================================================================

/// First index whose element is not less than `value`.
pub fn lower_bound(seq: &[i32], value: i32) -> usize {
    let mut lo = 0usize;
    let mut hi = seq.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if seq[mid] >= value {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

/// First index whose element is greater than `value`.
pub fn upper_bound(seq: &[i32], value: i32) -> usize {
    let mut lo = 0usize;
    let mut hi = seq.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if seq[mid] > value {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

/// Iterative binary search; `seq.len()` when absent.
pub fn search_binary(seq: &[i32], value: i32) -> usize {
    let mut lo = 0usize;
    let mut hi = seq.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if seq[mid] == value {
            return mid;
        } else if value > seq[mid] {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    seq.len()
}

/// Ternary search; `seq.len()` when absent.
pub fn search_ternary(seq: &[i32], value: i32) -> usize {
    let mut lo = 0usize;
    let mut hi = seq.len();
    while lo < hi {
        let third = (hi - lo) / 3;
        let mid_l = lo + third;
        let mid_r = mid_l + third;
        if seq[mid_l] == value {
            return mid_l;
        }
        if seq[mid_r] == value {
            return mid_r;
        }
        if value < seq[mid_l] {
            hi = mid_l;
        } else if value > seq[mid_r] {
            lo = mid_r + 1;
        } else {
            lo = mid_l + 1;
            hi = mid_r.max(lo);
        }
    }
    seq.len()
}

/// Exponential search; `seq.len()` when absent.
pub fn search_exponential(seq: &[i32], value: i32) -> usize {
    if seq.is_empty() {
        return 0;
    }
    let mut bound = 1usize;
    while bound < seq.len() && seq[bound] < value {
        bound = bound.saturating_mul(2);
    }
    let start = bound / 2;
    let end = bound.saturating_add(1).min(seq.len());
    let window = &seq[start..end];
    let rel = search_binary(window, value);
    if rel == window.len() {
        seq.len()
    } else {
        start + rel
    }
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Symbolic slice of length `<= MAX_LEN`.
    fn any_slice(buf: &mut [i32; MAX_LEN]) -> &[i32] {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        for slot in buf.iter_mut() {
            *slot = kani::any();
        }
        &buf[..len]
    }

    /// Same, constrained to ascending order.
    fn any_sorted_slice(buf: &mut [i32; MAX_LEN]) -> &[i32] {
        let seq = any_slice(buf);
        for i in 1..seq.len() {
            kani::assume(seq[i - 1] <= seq[i]);
        }
        seq
    }

    /// Reference lower bound by linear scan.
    fn reference_lower(seq: &[i32], value: i32) -> usize {
        let mut i = 0;
        while i < seq.len() && seq[i] < value {
            i += 1;
        }
        i
    }

    /// Reference upper bound by linear scan.
    fn reference_upper(seq: &[i32], value: i32) -> usize {
        let mut i = 0;
        while i < seq.len() && seq[i] <= value {
            i += 1;
        }
        i
    }

    fn contains(seq: &[i32], value: i32) -> bool {
        let mut i = 0;
        while i < seq.len() {
            if seq[i] == value {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Verify no loop panics or escapes `[0, len]` on arbitrary input.
    #[kani::proof]
    #[kani::unwind(10)] // MAX_LEN + 2
    fn verify_unsorted_in_range() {
        let mut buf = [0i32; MAX_LEN];
        let seq = any_slice(&mut buf);
        let value: i32 = kani::any();

        kani::assert(lower_bound(seq, value) <= seq.len(), "lower_bound in range");
        kani::assert(upper_bound(seq, value) <= seq.len(), "upper_bound in range");
        kani::assert(search_binary(seq, value) <= seq.len(), "binary in range");
        kani::assert(search_ternary(seq, value) <= seq.len(), "ternary in range");
        kani::assert(search_exponential(seq, value) <= seq.len(), "exponential in range");
    }

    /// Verify the bounds equal the linear reference on sorted input.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_bounds_match_reference() {
        let mut buf = [0i32; MAX_LEN];
        let seq = any_sorted_slice(&mut buf);
        let value: i32 = kani::any();

        kani::assert(
            lower_bound(seq, value) == reference_lower(seq, value),
            "lower_bound must equal the first index not less than value",
        );
        kani::assert(
            upper_bound(seq, value) == reference_upper(seq, value),
            "upper_bound must equal the first index greater than value",
        );
    }

    /// Verify exact searches hit iff present, and only ever on a real match.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_exact_searches_sound_and_complete() {
        let mut buf = [0i32; MAX_LEN];
        let seq = any_sorted_slice(&mut buf);
        let value: i32 = kani::any();
        let present = contains(seq, value);

        for pos in [
            search_binary(seq, value),
            search_ternary(seq, value),
            search_exponential(seq, value),
        ] {
            if present {
                kani::assert(pos < seq.len(), "present value must be found");
                kani::assert(seq[pos] == value, "found position must hold value");
            } else {
                kani::assert(pos == seq.len(), "absent value must give sentinel");
            }
        }
    }

    /// Verify the exponential bracket never starts past the slice.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_exponential_bracket() {
        let len: usize = kani::any_where(|&n| n >= 1 && n <= MAX_LEN);
        let steps: u32 = kani::any_where(|&s| s <= 4);
        let bound = 1usize << steps;
        let start = bound / 2;
        let end = bound.saturating_add(1).min(len);
        kani::assume(bound / 2 < len);
        kani::assert(start < end, "bracket must be non-empty");
        kani::assert(end <= len, "bracket must end inside the slice");
    }
}
