//! Error types for Zipf fitting.
//!
//! ## Purpose
//!
//! This module defines the single error type returned by every fallible
//! operation in the crate. Input problems (empty series, values that cannot be
//! log-transformed, mismatched lengths) are hard caller errors and are always
//! reported before any regression work starts.
//!
//! ## Design notes
//!
//! * **Typed**: One variant per failure kind, carrying the diagnostic values.
//! * **no_std**: `Display` is implemented by hand; `std::error::Error` only
//!   with the `std` feature.
//!
//! ## Non-goals
//!
//! * The regression math itself never produces an error. Degenerate
//!   distributions resolve to fixed slope/R^2 defaults instead.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::series::Series;

// ============================================================================
// ZipfError
// ============================================================================

/// Errors raised while validating inputs or configuring a fit.
#[derive(Debug, Clone, PartialEq)]
pub enum ZipfError {
    /// A required series has no elements.
    EmptyInput {
        /// The empty series.
        series: Series,
    },

    /// A series contains a value `<= 0`, which has no logarithm.
    NonPositiveValue {
        /// The offending series.
        series: Series,
        /// Minimum value found in the series.
        min: f64,
    },

    /// The independent and dependent series differ in length.
    MismatchedInputs {
        /// Length of the independent series (ranks or sizes).
        x_len: usize,
        /// Length of the dependent series (counts).
        y_len: usize,
    },

    /// A value is NaN or infinite.
    InvalidNumericValue(String),
}

impl Display for ZipfError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ZipfError::EmptyInput { series } => {
                write!(f, "Empty input: {} must contain at least one element", series)
            }
            ZipfError::NonPositiveValue { series, min } => write!(
                f,
                "Non-positive value in {}: minimum is {} (must be > 0)",
                series, min
            ),
            ZipfError::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {} points, y has {}", x_len, y_len)
            }
            ZipfError::InvalidNumericValue(msg) => write!(f, "Invalid numeric value: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ZipfError {}
