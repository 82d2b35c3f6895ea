// Copyright 2025-present The rangeseek Authors
// SPDX-License-Identifier: Apache-2.0

//! Search algorithms over ascending slices.
//!
//! Every function here takes a borrowed slice and a target and returns a
//! position. A miss is the slice length: the exclusive upper bound of the
//! range the caller handed in. Callers working on a sub-range of a larger
//! buffer either re-slice or go through [`crate::Algorithm::search_in`].
//!
//! Everything except [`search_linear`] assumes ascending order. That is a
//! precondition, not something checked: unsorted input produces an
//! unspecified position inside `[0, len]`, never a panic or an
//! out-of-bounds read.
//!
//! | Function                    | Narrowing                  | Cost                  |
//! |-----------------------------|----------------------------|-----------------------|
//! | [`search_linear`]           | none                       | O(n)                  |
//! | [`search_binary`]           | halves                     | O(log n)              |
//! | [`search_binary_recursive`] | halves, recursively        | O(log n) depth        |
//! | [`lower_bound`]             | halves, no early exit      | O(log n)              |
//! | [`upper_bound`]             | halves, no early exit      | O(log n)              |
//! | [`search_ternary`]          | thirds                     | O(log3 n) iterations  |
//! | [`search_interpolation`]    | estimated split point      | O(log log n) uniform  |
//! | [`search_exponential`]      | doubling, then halves      | O(log p)              |

pub(crate) mod binary;
pub(crate) mod bounds;
pub(crate) mod exponential;
pub(crate) mod interpolation;
pub(crate) mod linear;
pub(crate) mod ternary;

pub use binary::{search_binary, search_binary_recursive};
pub use bounds::{lower_bound, upper_bound};
pub use exponential::search_exponential;
pub use interpolation::{estimate_offset, search_interpolation};
pub use linear::search_linear;
pub use ternary::search_ternary;
