// Copyright 2025-present The rangeseek Authors
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for lower and upper bound.
//!
//! Narrow value ranges force long runs of duplicates, which is where
//! off-by-one errors in the bound loops hide.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rangeseek::{lower_bound, upper_bound};

fuzz_target!(|input: (Vec<u8>, u8)| {
    let (mut seq, value) = input;
    seq.sort_unstable();

    let lb = lower_bound(&seq, value);
    let ub = upper_bound(&seq, value);

    assert_eq!(lb, seq.partition_point(|x| *x < value));
    assert_eq!(ub, seq.partition_point(|x| *x <= value));
    assert!(lb <= ub);
    assert!(seq[lb..ub].iter().all(|x| *x == value));
});
