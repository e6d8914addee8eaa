#![cfg(feature = "dev")]
//! Tests for rank generation.
//!
//! ## Test Organization
//!
//! 1. **Ranks** - Positional descending ranks
//! 2. **Sorting** - Counts sorted ascending, ranks untouched

use zipf_rs::internals::algorithms::ranking::{descending_ranks, rank_series, sorted_counts};

// ============================================================================
// Rank Tests
// ============================================================================

#[test]
fn test_descending_ranks() {
    let ranks: Vec<f64> = descending_ranks(4);
    assert_eq!(ranks, vec![4.0, 3.0, 2.0, 1.0]);
}

#[test]
fn test_descending_ranks_single_and_empty() {
    assert_eq!(descending_ranks::<f64>(1), vec![1.0]);
    assert!(descending_ranks::<f64>(0).is_empty());
}

// ============================================================================
// Sorting Tests
// ============================================================================

#[test]
fn test_sorted_counts_leaves_input_untouched() {
    let counts = [4.0, 1.0, 2.0];
    let sorted = sorted_counts(&counts);

    assert_eq!(sorted, vec![1.0, 2.0, 4.0]);
    assert_eq!(counts, [4.0, 1.0, 2.0]);
}

#[test]
fn test_rank_series_largest_count_gets_rank_one() {
    let (ranks, counts) = rank_series(&[2.0, 7.0, 1.0, 3.0]);

    assert_eq!(ranks, vec![4.0, 3.0, 2.0, 1.0]);
    assert_eq!(counts, vec![1.0, 2.0, 3.0, 7.0]);

    // Rank 1 is paired with the largest count
    let rank_one = ranks.iter().position(|&r| r == 1.0).unwrap();
    assert_eq!(counts[rank_one], 7.0);
}

#[test]
fn test_rank_series_with_ties() {
    let (ranks, counts) = rank_series(&[5.0, 5.0, 5.0]);

    assert_eq!(ranks, vec![3.0, 2.0, 1.0]);
    assert_eq!(counts, vec![5.0, 5.0, 5.0]);
}
