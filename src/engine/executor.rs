//! Execution engine for Zipf fits.
//!
//! ## Purpose
//!
//! This module orchestrates a single Zipf fit: validation, the framing
//! transform (rank-based or size-based), and the regression engine. Both the
//! plain functions of the API and the configured adapters run through here.
//!
//! ## Design notes
//!
//! * Validation always happens before any regression work.
//! * Rank-based fits validate the generated `(rank, sorted count)` series.
//! * Size-based fits forward the caller's series verbatim.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * No partial result is produced on failure.
//! * Calls are stateless; identical inputs give bit-identical outputs.
//!
//! ## Non-goals
//!
//! * This module does not provide public-facing result formatting.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::ranking::rank_series;
use crate::algorithms::regression::{Regression, fit_log_log};
use crate::engine::output::ZipfResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::ZipfError;
use crate::primitives::series::Series;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a Zipf fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZipfConfig {
    /// Whether to keep the log sums in the result.
    pub return_diagnostics: bool,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs validation, transform and regression for one fit.
pub struct ZipfExecutor;

impl ZipfExecutor {
    /// Fit counts against their descending ranks.
    pub fn fit_by_rank<T: Float>(counts: &[T]) -> Result<Regression<T>, ZipfError> {
        let (ranks, sorted) = rank_series(counts);
        Validator::validate_inputs(&ranks, Series::Ranks, &sorted)?;
        Ok(fit_log_log(&ranks, &sorted))
    }

    /// Fit counts against caller-supplied sizes.
    pub fn fit_by_size<T: Float>(sizes: &[T], counts: &[T]) -> Result<Regression<T>, ZipfError> {
        Validator::validate_inputs(sizes, Series::Sizes, counts)?;
        Ok(fit_log_log(sizes, counts))
    }

    /// Run a rank-framed fit with the given configuration.
    pub fn run_by_rank<T: Float>(
        counts: &[T],
        config: &ZipfConfig,
    ) -> Result<ZipfResult<T>, ZipfError> {
        let regression = Self::fit_by_rank(counts)?;
        Ok(ZipfResult::from_regression(regression, config.return_diagnostics))
    }

    /// Run a size-framed fit with the given configuration.
    pub fn run_by_size<T: Float>(
        sizes: &[T],
        counts: &[T],
        config: &ZipfConfig,
    ) -> Result<ZipfResult<T>, ZipfError> {
        let regression = Self::fit_by_size(sizes, counts)?;
        Ok(ZipfResult::from_regression(regression, config.return_diagnostics))
    }
}
