//! High-level API for Zipf fitting.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points. The two plain
//! functions [`by_rank`] and [`by_size`] cover the common case and return the
//! bare [`FitResult`]. The fluent [`ZipfBuilder`] additionally reports the
//! distribution shape and, on request, the log sums behind the fit.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Plain functions for one-off fits, builder for more detail.
//! * **Polymorphic**: Marker types select the framing adapter.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ZipfBuilder`] via `Zipf::new()`.
//! 2. Chain configuration methods (`.return_diagnostics()`).
//! 3. Select a framing via `.adapter(ByRank)` or `.adapter(BySize)`.
//! 4. Call `.fit(...)` on the adapter.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::ZipfExecutor;

// Publicly re-exported types
pub use crate::adapters::by_rank::RankZipf;
pub use crate::adapters::by_size::SizeZipf;
pub use crate::algorithms::regression::{DistributionShape, FitResult, regress};
pub use crate::engine::output::ZipfResult;
pub use crate::math::log_sums::LogSums;
pub use crate::primitives::errors::ZipfError;
pub use crate::primitives::histogram::Histogram;
pub use crate::primitives::series::Series;

// ============================================================================
// Plain Functions
// ============================================================================

/// Zipf fit of `counts` against their ranks (largest count is rank 1).
///
/// # Errors
///
/// * [`ZipfError::EmptyInput`] if `counts` is empty.
/// * [`ZipfError::NonPositiveValue`] if any count is `<= 0`.
/// * [`ZipfError::InvalidNumericValue`] if any count is NaN or infinite.
///
/// # Examples
///
/// ```
/// use zipf_rs::by_rank;
///
/// let fit = by_rank(&[1.0, 2.0, 4.0])?;
/// assert!(fit.slope < 0.0);
/// # Ok::<(), zipf_rs::prelude::ZipfError>(())
/// ```
pub fn by_rank<T: Float>(counts: &[T]) -> Result<FitResult<T>, ZipfError> {
    ZipfExecutor::fit_by_rank(counts).map(|regression| regression.fit)
}

/// Zipf fit of `counts` against the paired `sizes`, in the order given.
///
/// # Errors
///
/// * [`ZipfError::EmptyInput`] if either series is empty.
/// * [`ZipfError::NonPositiveValue`] if any value is `<= 0`.
/// * [`ZipfError::InvalidNumericValue`] if any value is NaN or infinite.
/// * [`ZipfError::MismatchedInputs`] if the lengths differ.
pub fn by_size<T: Float>(sizes: &[T], counts: &[T]) -> Result<FitResult<T>, ZipfError> {
    ZipfExecutor::fit_by_size(sizes, counts).map(|regression| regression.fit)
}

// ============================================================================
// Builder
// ============================================================================

/// Marker types for selecting framing adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{ByRank, BySize};
}

/// Fluent builder for configured Zipf fits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZipfBuilder {
    /// Keep the log sums in the result.
    pub return_diagnostics: Option<bool>,
}

impl ZipfBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Include the log sums in the result.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }

    /// Select a framing adapter.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: ZipfAdapter,
    {
        A::convert(self)
    }
}

/// Trait for converting the generic builder into a framing adapter.
pub trait ZipfAdapter {
    /// The configured adapter.
    type Output;

    /// Convert a [`ZipfBuilder`] into the adapter.
    fn convert(builder: ZipfBuilder) -> Self::Output;
}

/// Marker for rank-frequency fits.
#[derive(Debug, Clone, Copy)]
pub struct ByRank;

impl ZipfAdapter for ByRank {
    type Output = RankZipf;

    fn convert(builder: ZipfBuilder) -> Self::Output {
        RankZipf::new(builder.return_diagnostics.unwrap_or(false))
    }
}

/// Marker for size-frequency fits.
#[derive(Debug, Clone, Copy)]
pub struct BySize;

impl ZipfAdapter for BySize {
    type Output = SizeZipf;

    fn convert(builder: ZipfBuilder) -> Self::Output {
        SizeZipf::new(builder.return_diagnostics.unwrap_or(false))
    }
}
