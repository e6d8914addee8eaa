//! Labels for the input series of a Zipf fit.
//!
//! ## Purpose
//!
//! Errors raised during validation name the offending series. This module
//! provides the label type so that messages read "counts" or "sizes" instead
//! of an anonymous "x" or "y".

use core::fmt::{Display, Formatter, Result};

/// Identifies which input series a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Series {
    /// Dependent variable: observed frequencies.
    Counts,

    /// Independent variable generated by the rank transform.
    Ranks,

    /// Independent variable supplied by the caller for size-based fits.
    Sizes,
}

impl Series {
    /// Lowercase name used in error messages.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Series::Counts => "counts",
            Series::Ranks => "ranks",
            Series::Sizes => "sizes",
        }
    }
}

impl Display for Series {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}
