//! Sums of log10-transformed pairs for least-squares fitting.
//!
//! ## Purpose
//!
//! This module accumulates the five running sums needed by ordinary least
//! squares in log-log space, in a single pass over zipped `(x, y)` pairs.
//!
//! ## Design notes
//!
//! * **Pairing**: Input is an iterator of explicit `(x, y)` tuples, so the two
//!   series cannot drift out of alignment.
//! * **Base**: All logarithms are base 10; squared terms use the transformed
//!   values, not the raw ones.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! ```text
//! sum_x  = Σ log10(x)          sum_x2 = Σ log10(x)^2
//! sum_y  = Σ log10(y)          sum_y2 = Σ log10(y)^2
//! sum_xy = Σ log10(x) log10(y)
//! ```
//!
//! ## Invariants
//!
//! * Inputs are strictly positive (checked upstream by the validator).
//!
//! ## Non-goals
//!
//! * This module does not decide how degenerate sums are interpreted.

// External dependencies
use num_traits::Float;

// ============================================================================
// LogSums
// ============================================================================

/// Running sums over log10-transformed `(x, y)` pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogSums<T> {
    /// Number of accumulated pairs.
    pub n: usize,

    /// Σ log10(x)
    pub sum_x: T,

    /// Σ log10(y)
    pub sum_y: T,

    /// Σ log10(x)·log10(y)
    pub sum_xy: T,

    /// Σ log10(x)²
    pub sum_x2: T,

    /// Σ log10(y)²
    pub sum_y2: T,
}

impl<T: Float> Default for LogSums<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LogSums<T> {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self {
            n: 0,
            sum_x: T::zero(),
            sum_y: T::zero(),
            sum_xy: T::zero(),
            sum_x2: T::zero(),
            sum_y2: T::zero(),
        }
    }

    /// Accumulate sums over raw (untransformed) pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, T)>,
    {
        pairs
            .into_iter()
            .fold(Self::new(), |mut acc, (x, y)| {
                acc.push(x, y);
                acc
            })
    }

    /// Add one raw pair.
    #[inline]
    pub fn push(&mut self, x: T, y: T) {
        let lx = x.log10();
        let ly = y.log10();

        self.n += 1;
        self.sum_x = self.sum_x + lx;
        self.sum_y = self.sum_y + ly;
        self.sum_xy = self.sum_xy + lx * ly;
        self.sum_x2 = self.sum_x2 + lx * lx;
        self.sum_y2 = self.sum_y2 + ly * ly;
    }

    /// Number of pairs as a float.
    #[inline]
    pub fn count(&self) -> T {
        T::from(self.n).unwrap_or_else(T::infinity)
    }

    /// `n·Σxy − Σx·Σy`, the shared numerator of slope and correlation.
    #[inline]
    pub fn cross_term(&self) -> T {
        self.count() * self.sum_xy - self.sum_x * self.sum_y
    }

    /// `n·Σx² − (Σx)²`, zero when every log-x is identical.
    #[inline]
    pub fn x_spread(&self) -> T {
        self.count() * self.sum_x2 - self.sum_x * self.sum_x
    }

    /// `n·Σy² − (Σy)²`, zero when every log-y is identical.
    #[inline]
    pub fn y_spread(&self) -> T {
        self.count() * self.sum_y2 - self.sum_y * self.sum_y
    }

    /// Intercept of the line with the given slope through the centroid.
    ///
    /// Returns zero for an empty accumulator.
    #[inline]
    pub fn intercept(&self, slope: T) -> T {
        if self.n == 0 {
            return T::zero();
        }
        (self.sum_y - slope * self.sum_x) / self.count()
    }
}
