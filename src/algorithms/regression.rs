//! Log-log least-squares regression for Zipf fitting.
//!
//! ## Purpose
//!
//! This module provides the regression engine shared by the rank-based and
//! size-based fits: ordinary least squares of `log10(y)` on `log10(x)`,
//! reporting slope, R^2 and y-intercept.
//!
//! ## Design notes
//!
//! * **Classification first**: Degenerate distributions are detected before
//!   any division and mapped to fixed results (see [`DistributionShape`]).
//! * **Unconditional sums**: Log sums are always accumulated, because the
//!   intercept needs them even on the shortcut paths.
//! * **Exact-zero guards**: Division guards compare against `0.0` exactly.
//!   No epsilon is applied. This is a known sharp edge: a denominator that
//!   should be zero but lands on a tiny nonzero value through rounding is
//!   divided by as-is.
//! * **Cancellation**: A negative correlation denominator can only come from
//!   rounding in the spread terms and is treated like zero. `r^2` is capped
//!   at 1 for the same reason.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! ```text
//! slope = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)
//! r     = (n·Σxy − Σx·Σy) / sqrt((n·Σx² − (Σx)²)(n·Σy² − (Σy)²))
//! b     = (Σy − slope·Σx) / n
//! ```
//!
//! ## Invariants
//!
//! * `0 <= r2 <= 1` for every result.
//! * The engine never fails on validated input.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by the validator).
//! * This module does not support weighted or multi-dimensional regression.

use core::fmt::{Display, Formatter, Result};

// External dependencies
use log::{debug, trace};
use num_traits::Float;

// Internal dependencies
use crate::math::log_sums::LogSums;

// ============================================================================
// Fit Result
// ============================================================================

/// Best-fit line of a frequency distribution in log-log space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitResult<T> {
    /// Slope of the fitted line.
    pub slope: T,

    /// Coefficient of determination, in `[0, 1]`.
    pub r2: T,

    /// Value of the fitted line at `log10(x) = 0`.
    pub y_intercept: T,
}

impl<T: Float + Display> Display for FitResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "slope={}, r2={}, y_intercept={}",
            self.slope, self.r2, self.y_intercept
        )
    }
}

// ============================================================================
// Distribution Shape
// ============================================================================

/// Branch taken by the regression engine for a frequency series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistributionShape {
    /// Single observation: no line can be drawn.
    ///
    /// Reported as slope 0 and R^2 0.
    Monotonous,

    /// Several observations, all with the same count.
    ///
    /// Reported as slope 0 and R^2 1 (a horizontal line fits perfectly).
    Uniform,

    /// Anything else: slope and R^2 come from least squares.
    #[default]
    General,
}

impl DistributionShape {
    /// Classify a frequency series.
    ///
    /// An empty series is classified as `General`; the engine never sees one.
    pub fn classify<T: Float>(counts: &[T]) -> Self {
        match counts.len() {
            1 => DistributionShape::Monotonous,
            n if n > 1 && counts.windows(2).all(|w| w[0] == w[1]) => DistributionShape::Uniform,
            _ => DistributionShape::General,
        }
    }
}

// ============================================================================
// Regression Engine
// ============================================================================

/// Full output of the regression engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Regression<T> {
    /// Slope, R^2 and intercept.
    pub fit: FitResult<T>,

    /// Branch taken.
    pub shape: DistributionShape,

    /// Log sums the fit was derived from.
    pub sums: LogSums<T>,
}

/// Fit `log10(ys)` against `log10(xs)`, returning the fit and its diagnostics.
///
/// # Panics
///
/// Panics if `xs` and `ys` differ in length or are empty. Callers validate
/// their inputs before reaching the engine.
pub fn fit_log_log<T: Float>(xs: &[T], ys: &[T]) -> Regression<T> {
    assert_eq!(
        xs.len(),
        ys.len(),
        "ranks and counts must have the same length"
    );
    assert!(!ys.is_empty(), "regression requires at least one point");

    let sums = LogSums::from_pairs(xs.iter().copied().zip(ys.iter().copied()));
    let shape = DistributionShape::classify(ys);
    trace!("zipf regression over {} points: {:?}", sums.n, shape);

    let (slope, r2) = match shape {
        DistributionShape::Monotonous => (T::zero(), T::zero()),
        DistributionShape::Uniform => (T::zero(), T::one()),
        DistributionShape::General => least_squares(&sums),
    };

    Regression {
        fit: FitResult {
            slope,
            r2,
            y_intercept: sums.intercept(slope),
        },
        shape,
        sums,
    }
}

/// Fit `log10(ys)` against `log10(xs)` without validating the inputs.
///
/// Values must be strictly positive; prefer `by_rank` or `by_size`, which
/// validate first.
///
/// # Panics
///
/// Panics if `xs` and `ys` differ in length or are empty.
#[inline]
pub fn regress<T: Float>(xs: &[T], ys: &[T]) -> FitResult<T> {
    fit_log_log(xs, ys).fit
}

/// Slope and R^2 of the general case.
fn least_squares<T: Float>(sums: &LogSums<T>) -> (T, T) {
    let cross = sums.cross_term();
    let x_spread = sums.x_spread();

    let slope = if x_spread == T::zero() {
        debug!("zipf regression: x spread is exactly zero, slope set to 0");
        T::zero()
    } else {
        cross / x_spread
    };

    let product = x_spread * sums.y_spread();
    let r2 = if product == T::zero() {
        debug!("zipf regression: correlation denominator is exactly zero, r2 set to 0");
        T::zero()
    } else if product < T::zero() {
        // Only reachable through cancellation in the spread terms.
        debug!("zipf regression: correlation denominator is negative, r2 set to 0");
        T::zero()
    } else {
        let r = cross / product.sqrt();
        (r * r).min(T::one())
    };

    (slope, r2)
}
