//! # zipf-rs — Zipfian fits of frequency distributions for Rust
//!
//! Computes the slope, coefficient of determination (R^2) and y-intercept of
//! the best-fit line through a frequency distribution in log10-log10 space.
//!
//! ## What is a Zipf fit?
//!
//! Zipf's law is the empirical observation that, for many frequency
//! distributions (word counts, city sizes, note durations, ...), frequency
//! plotted against rank is approximately a straight line in log-log scale.
//! The slope of that line says how sharply frequency falls off, and R^2 says
//! how well the straight-line model holds. A slope near -1 with a high R^2
//! is the classic "pink noise" Zipf distribution.
//!
//! Two framings are provided:
//!
//! - **By rank**: counts are sorted and plotted against their rank, where the
//!   largest count has rank 1. Ranks are generated automatically.
//! - **By size**: counts are plotted against caller-supplied keys ("sizes"),
//!   in the order given.
//!
//! ## Quick Start
//!
//! ```rust
//! use zipf_rs::prelude::*;
//!
//! // Occurrences of each distinct event
//! let counts = vec![1.0, 2.0, 4.0];
//!
//! let fit = by_rank(&counts)?;
//! println!("slope = {:.4}, r2 = {:.4}", fit.slope, fit.r2);
//!
//! let sizes = vec![1.0, 2.0, 3.0];
//! let fit = by_size(&sizes, &counts)?;
//! println!("slope = {:.4}, r2 = {:.4}", fit.slope, fit.r2);
//! # Result::<(), ZipfError>::Ok(())
//! ```
//!
//! ### From raw events
//!
//! ```rust
//! use zipf_rs::prelude::*;
//!
//! let phenomenon = [1, 2, 2, 3, 3, 3, 3];
//!
//! let result = Zipf::new()
//!     .return_diagnostics()
//!     .adapter(ByRank)
//!     .fit_events::<_, f64, _>(phenomenon)?;
//!
//! println!("{}", result);
//! # Result::<(), ZipfError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Data points: 3
//!   Shape: General
//!
//! Fit:
//!   Slope:       -1.233662
//!   R^2:         0.977654
//!   Y-intercept: 0.621022
//! ...
//! ```
//!
//! ## Degenerate distributions
//!
//! | Input | Shape | Slope | R^2 |
//! |---|---|---|---|
//! | One count | `Monotonous` | 0 | 0 |
//! | Several equal counts | `Uniform` | 0 | 1 |
//! | Anything else | `General` | least squares | least squares |
//!
//! The y-intercept is always `(Σlog10(y) − slope·Σlog10(x)) / n`.
//!
//! Division guards in the least-squares path compare against exactly `0.0`.
//! No tolerance is applied, so inputs that should be degenerate but are not
//! bit-exactly so go through the general formulas.
//!
//! ## Errors
//!
//! Inputs are validated before any computation. Empty series, values
//! `<= 0`, non-finite values and mismatched lengths are reported as
//! [`ZipfError`](prelude::ZipfError). The regression itself never fails.
//!
//! ## Features
//!
//! - `std` (default): use the standard library. Without it the crate is
//!   `no_std` + `alloc`, with math routines from `libm`.
//! - `dev`: expose internal modules for testing.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - error types, series labels, histograms.
mod primitives;

// Layer 2: Math - log-log sum accumulation.
mod math;

// Layer 3: Algorithms - regression engine and rank generation.
mod algorithms;

// Layer 4: Engine - validation, orchestration and result assembly.
mod engine;

// Layer 5: Adapters - rank-based and size-based framings.
mod adapters;

// High-level API.
mod api;

pub use api::{by_rank, by_size, regress};

// ============================================================================
// Prelude
// ============================================================================

/// Standard Zipf prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use zipf_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Adapter::{ByRank, BySize},
        DistributionShape, FitResult, Histogram, LogSums, RankZipf, Series, SizeZipf,
        ZipfBuilder as Zipf, ZipfError, ZipfResult, by_rank, by_size,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal adapters.
    pub mod adapters {
        pub use crate::adapters::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
