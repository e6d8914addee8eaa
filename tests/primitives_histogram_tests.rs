//! Tests for event histograms.
//!
//! ## Test Organization
//!
//! 1. **Tallying** - Counting events, ordering, totals
//! 2. **Export** - Counts and sizes as float series

use zipf_rs::prelude::*;

// ============================================================================
// Tallying Tests
// ============================================================================

#[test]
fn test_histogram_counts_events() {
    let histogram = Histogram::from_events([1, 2, 2, 3, 3, 3, 3]);

    assert_eq!(histogram.len(), 3);
    assert_eq!(histogram.total(), 7);
    assert_eq!(histogram.get(&1), 1);
    assert_eq!(histogram.get(&2), 2);
    assert_eq!(histogram.get(&3), 4);
    assert_eq!(histogram.get(&4), 0);
}

#[test]
fn test_histogram_iterates_in_key_order() {
    let histogram: Histogram<&str> = ["b", "a", "c", "a"].into_iter().collect();
    let pairs: Vec<(&str, usize)> = histogram.iter().map(|(k, v)| (*k, v)).collect();

    assert_eq!(pairs, vec![("a", 2), ("b", 1), ("c", 1)]);
}

#[test]
fn test_histogram_empty() {
    let histogram: Histogram<u32> = Histogram::new();

    assert!(histogram.is_empty());
    assert_eq!(histogram.total(), 0);
    assert!(histogram.counts::<f64>().is_empty());
}

#[test]
fn test_histogram_record() {
    let mut histogram = Histogram::default();
    histogram.record('x');
    histogram.record('x');
    histogram.record('y');

    assert_eq!(histogram.get(&'x'), 2);
    assert_eq!(histogram.get(&'y'), 1);
}

// ============================================================================
// Export Tests
// ============================================================================

#[test]
fn test_histogram_counts_and_sizes_pair_positionally() {
    let histogram = Histogram::from_events([3, 1, 3, 2, 3, 2, 3]);

    let sizes: Vec<f64> = histogram.sizes().unwrap();
    let counts: Vec<f64> = histogram.counts();

    assert_eq!(sizes, vec![1.0, 2.0, 3.0]);
    assert_eq!(counts, vec![1.0, 2.0, 4.0]);
}

#[test]
fn test_histogram_counts_f32() {
    let histogram = Histogram::from_events(["a", "a", "b"]);
    let counts: Vec<f32> = histogram.counts();

    assert_eq!(counts, vec![2.0f32, 1.0f32]);
}
