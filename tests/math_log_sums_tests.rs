#![cfg(feature = "dev")]
//! Tests for log-log sum accumulation.
//!
//! ## Test Organization
//!
//! 1. **Accumulation** - Sums over powers of ten
//! 2. **Derived Terms** - Cross term, spreads, intercept
//! 3. **Edge Cases** - Empty accumulator, unit values

use approx::assert_relative_eq;

use zipf_rs::internals::math::log_sums::LogSums;

// ============================================================================
// Accumulation Tests
// ============================================================================

#[test]
fn test_log_sums_powers_of_ten() {
    let sums = LogSums::from_pairs([(10.0, 100.0), (100.0, 10.0)]);

    assert_eq!(sums.n, 2);
    assert_relative_eq!(sums.sum_x, 3.0, epsilon = 1e-12);
    assert_relative_eq!(sums.sum_y, 3.0, epsilon = 1e-12);
    assert_relative_eq!(sums.sum_xy, 4.0, epsilon = 1e-12);
    assert_relative_eq!(sums.sum_x2, 5.0, epsilon = 1e-12);
    assert_relative_eq!(sums.sum_y2, 5.0, epsilon = 1e-12);
}

#[test]
fn test_log_sums_push_matches_from_pairs() {
    let pairs = [(3.0, 1.0), (2.0, 2.0), (1.0, 4.0)];

    let mut pushed = LogSums::new();
    for &(x, y) in &pairs {
        pushed.push(x, y);
    }

    assert_eq!(pushed, LogSums::from_pairs(pairs));
}

// ============================================================================
// Derived Terms Tests
// ============================================================================

#[test]
fn test_log_sums_derived_terms() {
    let sums = LogSums::from_pairs([(10.0, 100.0), (100.0, 10.0)]);

    // n·Σxy − Σx·Σy = 2·4 − 3·3
    assert_relative_eq!(sums.cross_term(), -1.0, epsilon = 1e-12);
    // n·Σx² − (Σx)² = 2·5 − 9
    assert_relative_eq!(sums.x_spread(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(sums.y_spread(), 1.0, epsilon = 1e-12);
    // (Σy − slope·Σx) / n = (3 + 3) / 2
    assert_relative_eq!(sums.intercept(-1.0), 3.0, epsilon = 1e-12);
}

// ============================================================================
// Edge Case Tests
// ============================================================================

#[test]
fn test_log_sums_empty() {
    let sums: LogSums<f64> = LogSums::default();

    assert_eq!(sums.n, 0);
    assert_eq!(sums.cross_term(), 0.0);
    assert_eq!(sums.intercept(1.0), 0.0);
}

#[test]
fn test_log_sums_unit_x_has_zero_spread() {
    // log10(1) is exactly zero, so every x term vanishes
    let sums = LogSums::from_pairs([(1.0, 2.0), (1.0, 5.0), (1.0, 9.0)]);

    assert_eq!(sums.sum_x, 0.0);
    assert_eq!(sums.x_spread(), 0.0);
    assert_eq!(sums.cross_term(), 0.0);
}
