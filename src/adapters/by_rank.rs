//! Rank-frequency adapter for Zipf fitting.
//!
//! ## Purpose
//!
//! This module provides the rank-based framing: counts are plotted against
//! their rank, from largest (rank 1) to smallest (rank n), in log-log space.
//!
//! ## Design notes
//!
//! * **Delegation**: Validation, ranking and regression are delegated to the
//!   execution engine.
//! * **Generics**: `fit` is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Ranks are generated internally and are never caller-supplied.
//! * The caller's counts are not modified.
//!
//! ## Non-goals
//!
//! * This adapter does not accept explicit ranks (use the size adapter).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{ZipfConfig, ZipfExecutor};
use crate::engine::output::ZipfResult;
use crate::primitives::errors::ZipfError;
use crate::primitives::histogram::Histogram;

/// Configured rank-frequency Zipf fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankZipf {
    config: ZipfConfig,
}

impl Default for RankZipf {
    fn default() -> Self {
        Self::new(false)
    }
}

impl RankZipf {
    /// Create a rank adapter.
    pub fn new(return_diagnostics: bool) -> Self {
        Self {
            config: ZipfConfig { return_diagnostics },
        }
    }

    /// Fit a frequency series against its ranks.
    pub fn fit<T: Float>(&self, counts: &[T]) -> Result<ZipfResult<T>, ZipfError> {
        ZipfExecutor::run_by_rank(counts, &self.config)
    }

    /// Tally `events` and fit the per-event counts against their ranks.
    pub fn fit_events<K, T, I>(&self, events: I) -> Result<ZipfResult<T>, ZipfError>
    where
        K: Ord,
        T: Float,
        I: IntoIterator<Item = K>,
    {
        let histogram = Histogram::from_events(events);
        self.fit(&histogram.counts::<T>())
    }
}
