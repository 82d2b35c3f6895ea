// Copyright 2025-present The rangeseek Authors
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for floating-point keys.
//!
//! NaN compares false both ways and infinities break the interpolation
//! estimate. Every algorithm must still terminate inside `[0, len]`.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rangeseek::Algorithm;

fuzz_target!(|input: (Vec<f64>, f64)| {
    let (mut seq, value) = input;
    seq.truncate(1024);

    for algorithm in Algorithm::ALL {
        assert!(algorithm.search(&seq, value) <= seq.len(), "{}", algorithm);
    }

    // Sorted by total order, NaNs gather at the ends
    seq.sort_by(f64::total_cmp);
    for algorithm in Algorithm::ALL {
        assert!(algorithm.search(&seq, value) <= seq.len(), "{}", algorithm);
    }
});
