//! Size-frequency adapter for Zipf fitting.
//!
//! ## Purpose
//!
//! This module provides the size-based framing: counts are plotted against
//! caller-supplied keys ("sizes") in log-log space.
//!
//! ## Design notes
//!
//! * **Verbatim**: Sizes are used as given. No ranking or sorting is done, so
//!   the caller's pairing is preserved exactly.
//! * **Generics**: `fit` is generic over `Float` types.
//!
//! ## Invariants
//!
//! * `sizes[i]` is paired with `counts[i]`.

// External dependencies
use core::fmt::Debug;
use num_traits::{Float, ToPrimitive};

// Internal dependencies
use crate::engine::executor::{ZipfConfig, ZipfExecutor};
use crate::engine::output::ZipfResult;
use crate::primitives::errors::ZipfError;
use crate::primitives::histogram::Histogram;

/// Configured size-frequency Zipf fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeZipf {
    config: ZipfConfig,
}

impl Default for SizeZipf {
    fn default() -> Self {
        Self::new(false)
    }
}

impl SizeZipf {
    /// Create a size adapter.
    pub fn new(return_diagnostics: bool) -> Self {
        Self {
            config: ZipfConfig { return_diagnostics },
        }
    }

    /// Fit `counts` against the paired `sizes`.
    pub fn fit<T: Float>(&self, sizes: &[T], counts: &[T]) -> Result<ZipfResult<T>, ZipfError> {
        ZipfExecutor::run_by_size(sizes, counts, &self.config)
    }

    /// Tally numeric `events` and fit each event's count against its value.
    pub fn fit_events<K, T, I>(&self, events: I) -> Result<ZipfResult<T>, ZipfError>
    where
        K: Ord + ToPrimitive + Debug,
        T: Float,
        I: IntoIterator<Item = K>,
    {
        let histogram = Histogram::from_events(events);
        let sizes = histogram.sizes::<T>()?;
        self.fit(&sizes, &histogram.counts::<T>())
    }
}
