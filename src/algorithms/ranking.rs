//! Rank generation for rank-frequency fits.
//!
//! ## Purpose
//!
//! This module turns a frequency series into the `(rank, count)` series fed
//! to the regression engine, so that the largest count receives rank 1.
//!
//! ## Design notes
//!
//! * **Asymmetric**: Only the counts are sorted (ascending). Ranks are
//!   generated positionally as `n, n-1, ..., 1` and never reordered, so the
//!   last and largest sorted count lines up with rank 1.
//! * **Copying**: The caller's slice is left untouched.
//! * **Ties**: Equal counts are interchangeable; their relative order does
//!   not change the fit.
//!
//! ## Non-goals
//!
//! * This module does not average ranks for ties.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

/// Positional ranks `n, n-1, ..., 1` for a series of length `n`.
pub fn descending_ranks<T: Float>(n: usize) -> Vec<T> {
    (0..n)
        .map(|i| T::from(n - i).unwrap_or_else(T::infinity))
        .collect()
}

/// Copy of `counts` sorted in ascending order.
pub fn sorted_counts<T: Float>(counts: &[T]) -> Vec<T> {
    let mut sorted = counts.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Equal));
    sorted
}

/// Build the `(ranks, counts)` series for a rank-frequency fit.
pub fn rank_series<T: Float>(counts: &[T]) -> (Vec<T>, Vec<T>) {
    (descending_ranks(counts.len()), sorted_counts(counts))
}
