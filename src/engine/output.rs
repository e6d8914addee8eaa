//! Output types for Zipf fitting.
//!
//! ## Purpose
//!
//! This module defines [`ZipfResult`], the value returned by the adapter
//! executors. It wraps the core [`FitResult`] with the branch the engine took
//! and, on request, the log sums behind the fit.
//!
//! ## Non-goals
//!
//! * This module does not compute anything; it only assembles and formats.

use core::fmt::{Display, Formatter, Result};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::{DistributionShape, FitResult, Regression};
use crate::math::log_sums::LogSums;

/// Result of a configured Zipf fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZipfResult<T> {
    /// Slope, R^2 and y-intercept.
    pub fit: FitResult<T>,

    /// Branch taken by the regression engine.
    pub shape: DistributionShape,

    /// Number of `(x, y)` pairs fitted.
    pub n_points: usize,

    /// Log sums, present when diagnostics were requested.
    pub diagnostics: Option<LogSums<T>>,
}

impl<T: Float> ZipfResult<T> {
    /// Assemble a result from the engine output.
    pub(crate) fn from_regression(regression: Regression<T>, return_diagnostics: bool) -> Self {
        Self {
            fit: regression.fit,
            shape: regression.shape,
            n_points: regression.sums.n,
            diagnostics: return_diagnostics.then_some(regression.sums),
        }
    }

    /// Slope of the fitted line.
    #[inline]
    pub fn slope(&self) -> T {
        self.fit.slope
    }

    /// Coefficient of determination.
    #[inline]
    pub fn r2(&self) -> T {
        self.fit.r2
    }

    /// Y-intercept of the fitted line.
    #[inline]
    pub fn y_intercept(&self) -> T {
        self.fit.y_intercept
    }
}

impl<T: Float + Display> Display for ZipfResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.n_points)?;
        writeln!(f, "  Shape: {:?}", self.shape)?;
        writeln!(f)?;
        writeln!(f, "Fit:")?;
        writeln!(f, "  Slope:       {:.6}", self.fit.slope)?;
        writeln!(f, "  R^2:         {:.6}", self.fit.r2)?;
        write!(f, "  Y-intercept: {:.6}", self.fit.y_intercept)?;

        if let Some(sums) = &self.diagnostics {
            writeln!(f)?;
            writeln!(f)?;
            writeln!(f, "Log sums:")?;
            writeln!(f, "  sum_x:  {:.6}", sums.sum_x)?;
            writeln!(f, "  sum_y:  {:.6}", sums.sum_y)?;
            writeln!(f, "  sum_xy: {:.6}", sums.sum_xy)?;
            writeln!(f, "  sum_x2: {:.6}", sums.sum_x2)?;
            write!(f, "  sum_y2: {:.6}", sums.sum_y2)?;
        }

        Ok(())
    }
}
