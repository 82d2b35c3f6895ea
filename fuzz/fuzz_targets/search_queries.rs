// Copyright 2025-present The rangeseek Authors
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the exact-match searches.
//!
//! Feeds arbitrary sequences, sorted or not, plus an arbitrary target and a
//! sub-range. No algorithm may panic or leave `[start, end]`; once the input
//! is sorted every algorithm must agree with `contains`.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rangeseek::{search_linear, Algorithm};

#[derive(Debug, Arbitrary)]
struct SearchInput {
    seq: Vec<i32>,
    value: i32,
    start: u16,
    end: u16,
}

fuzz_target!(|input: SearchInput| {
    let SearchInput { mut seq, value, start, end } = input;
    seq.truncate(4096);

    let len = seq.len();
    let end = (end as usize).min(len);
    let start = (start as usize).min(end);

    // INVARIANT 1: arbitrary order never panics and never escapes the window
    for algorithm in Algorithm::ALL {
        let pos = algorithm.search_in(&seq, start..end, value);
        assert!(pos >= start && pos <= end, "{} returned {} for {}..{}", algorithm, pos, start, end);
        if !algorithm.is_bound() && pos < end {
            assert_eq!(seq[pos], value, "{} reported a false match", algorithm);
        }
    }

    // INVARIANT 2: linear search needs no ordering
    let expected = seq.iter().position(|x| *x == value).unwrap_or(len);
    assert_eq!(search_linear(&seq, value), expected);

    // INVARIANT 3: on sorted input every exact search is correct
    seq.sort_unstable();
    let present = seq.contains(&value);
    for algorithm in Algorithm::ALL.into_iter().filter(|a| !a.is_bound()) {
        let pos = algorithm.search(&seq, value);
        if present {
            assert_eq!(seq.get(pos), Some(&value), "{} missed {}", algorithm, value);
        } else {
            assert_eq!(pos, len, "{} invented {}", algorithm, value);
        }
    }
});
