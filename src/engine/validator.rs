//! Input validation for Zipf fitting.
//!
//! ## Purpose
//!
//! This module checks the series handed to a Zipf fit before any regression
//! work starts: both must be non-empty, strictly positive, finite, and of
//! equal length.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Order**: Counts are checked before the independent series, and
//!   lengths last.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Positivity**: Every value must have a real logarithm, so the series
//!   minimum must be `> 0`. The minimum is reported on failure.
//! * **Pairing**: The two series are paired positionally, so their lengths
//!   must agree. Both lengths are reported on failure.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ZipfError;
use crate::primitives::series::Series;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for Zipf input data.
///
/// Provides static methods that return `Result<(), ZipfError>` and fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate an independent series `x` and its paired counts `y`.
    pub fn validate_inputs<T: Float>(
        x: &[T],
        x_series: Series,
        y: &[T],
    ) -> Result<(), ZipfError> {
        // Check 1: Counts are usable
        Self::validate_series(y, Series::Counts)?;

        // Check 2: Ranks/sizes are usable
        Self::validate_series(x, x_series)?;

        // Check 3: Matching lengths
        if x.len() != y.len() {
            return Err(ZipfError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        Ok(())
    }

    /// Validate a single series: non-empty, strictly positive, finite.
    pub fn validate_series<T: Float>(values: &[T], series: Series) -> Result<(), ZipfError> {
        if values.is_empty() {
            return Err(ZipfError::EmptyInput { series });
        }

        // `Float::min` skips NaN, which is reported by the finiteness check
        let min = values.iter().copied().fold(T::infinity(), T::min);
        if min <= T::zero() {
            return Err(ZipfError::NonPositiveValue {
                series,
                min: min.to_f64().unwrap_or(f64::NAN),
            });
        }

        for (i, &val) in values.iter().enumerate() {
            if !val.is_finite() {
                return Err(ZipfError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    series,
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }
}
