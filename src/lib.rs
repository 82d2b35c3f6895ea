//! Search algorithms over sorted numeric slices.
//!
//! Eight strategies behind one contract: given a slice (the half-open range
//! `[first, last)`) and a target, return the position of a match, or the
//! slice length when there is none. The "not found" answer is always the
//! caller's own upper bound, never `None` and never an error.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────────┐     ┌─────────────┐
//! │  types.rs   │────▶│  search/             │◀────│  bench/     │
//! │ (SearchKey, │     │  linear  binary      │     │ (timing,    │
//! │  Algorithm) │     │  bounds  ternary     │     │  reports)   │
//! └─────────────┘     │  interpolation       │     └─────────────┘
//!                     │  exponential ──▶ binary
//!                     └──────────────────────┘
//!                                │
//!                                ▼
//!                     ┌──────────────────────┐
//!                     │    contracts.rs      │
//!                     │ (debug postconditions│
//!                     │  on every answer)    │
//!                     └──────────────────────┘
//! ```
//!
//! # Preconditions
//!
//! Everything except [`search_linear`] expects ascending input. Unsorted
//! input yields an unspecified position in `[0, len]`. It never panics and
//! never reads outside the slice, and it is never silently "fixed".
//!
//! # Usage
//!
//! ```
//! use rangeseek::{lower_bound, search_binary, upper_bound, Algorithm};
//!
//! let data = [1, 1, 1, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5];
//! assert_eq!(lower_bound(&data, 3), 5);
//! assert_eq!(upper_bound(&data, 3), 8);
//! assert_eq!(search_binary(&data, 9), data.len());
//!
//! // Sub-ranges report positions in the outer slice; a miss is the range end
//! assert_eq!(Algorithm::Exponential.search_in(&data, 3..8, 9), 8);
//! ```

// Module declarations
pub mod bench;
pub mod contracts;
mod search;
pub mod testing;
mod types;

// Re-exports for public API
pub use search::{
    estimate_offset, lower_bound, search_binary, search_binary_recursive, search_exponential,
    search_interpolation, search_linear, search_ternary, upper_bound,
};
pub use types::{Algorithm, SearchKey};
