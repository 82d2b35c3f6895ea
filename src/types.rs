// Copyright 2025-present The rangeseek Authors
// SPDX-License-Identifier: Apache-2.0

//! Shared types: the element bound and the algorithm catalogue.
//!
//! Every search works on a borrowed slice `&[T]` and answers with a `usize`
//! position. A miss is reported as the slice length (the exclusive upper
//! bound of the range), never as `None`.

use std::fmt;
use std::ops::Range;

use clap::ValueEnum;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::search::{
    lower_bound, search_binary, search_binary_recursive, search_exponential,
    search_interpolation, search_linear, search_ternary, upper_bound,
};

/// Element type accepted by the searches.
///
/// Implemented for every primitive integer and float. `PartialOrd` is enough
/// for the narrowing loops; `ToPrimitive` feeds the interpolation estimator.
/// Floats must not contain NaN (the results are unspecified otherwise).
pub trait SearchKey: Copy + PartialOrd + ToPrimitive {}

macro_rules! impl_search_key {
    ($($t:ty),* $(,)?) => {
        $(impl SearchKey for $t {})*
    };
}

impl_search_key!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// The eight search strategies, in report column order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Forward scan, no ordering required
    Linear,
    /// Iterative binary search
    Binary,
    /// Recursive binary search
    BinaryRecursive,
    /// Three-way narrowing
    Ternary,
    /// First position not less than the target
    LowerBound,
    /// First position greater than the target
    UpperBound,
    /// Position estimated by linear interpolation
    Interpolation,
    /// Doubling probe followed by binary search
    Exponential,
}

impl Algorithm {
    pub const ALL: [Algorithm; 8] = [
        Algorithm::Linear,
        Algorithm::Binary,
        Algorithm::BinaryRecursive,
        Algorithm::Ternary,
        Algorithm::LowerBound,
        Algorithm::UpperBound,
        Algorithm::Interpolation,
        Algorithm::Exponential,
    ];

    /// Short label used as a report column header.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Linear => "LSearch",
            Algorithm::Binary => "BSearch",
            Algorithm::BinaryRecursive => "BSearch_Rec",
            Algorithm::Ternary => "TSearch",
            Algorithm::LowerBound => "LBound",
            Algorithm::UpperBound => "UBound",
            Algorithm::Interpolation => "ISearch",
            Algorithm::Exponential => "ESearch",
        }
    }

    /// Expected cost, for `rangeseek list`.
    pub fn complexity(self) -> &'static str {
        match self {
            Algorithm::Linear => "O(n)",
            Algorithm::Binary | Algorithm::BinaryRecursive => "O(log n)",
            Algorithm::LowerBound | Algorithm::UpperBound => "O(log n)",
            Algorithm::Ternary => "O(log3 n), more comparisons per step",
            Algorithm::Interpolation => "O(log log n) uniform, O(n) worst case",
            Algorithm::Exponential => "O(log p), p = offset of the target",
        }
    }

    /// Whether the answer is only meaningful on ascending input.
    pub fn requires_sorted(self) -> bool {
        !matches!(self, Algorithm::Linear)
    }

    /// True for the bound searches, which answer with an insertion point
    /// rather than an exact match.
    pub fn is_bound(self) -> bool {
        matches!(self, Algorithm::LowerBound | Algorithm::UpperBound)
    }

    /// Run this strategy over the whole slice.
    pub fn search<T: SearchKey>(self, seq: &[T], value: T) -> usize {
        match self {
            Algorithm::Linear => search_linear(seq, value),
            Algorithm::Binary => search_binary(seq, value),
            Algorithm::BinaryRecursive => search_binary_recursive(seq, value),
            Algorithm::Ternary => search_ternary(seq, value),
            Algorithm::LowerBound => lower_bound(seq, value),
            Algorithm::UpperBound => upper_bound(seq, value),
            Algorithm::Interpolation => search_interpolation(seq, value),
            Algorithm::Exponential => search_exponential(seq, value),
        }
    }

    /// Run this strategy over `seq[range]`, answering with a position in `seq`.
    ///
    /// A miss yields `range.end`, the caller's own upper bound.
    ///
    /// # Panics
    ///
    /// Panics if `range` is not a valid range of `seq`, like slice indexing.
    pub fn search_in<T: SearchKey>(self, seq: &[T], range: Range<usize>, value: T) -> usize {
        let first = range.start;
        first + self.search(&seq[range], value)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
