//! Event occurrence histograms.
//!
//! ## Purpose
//!
//! Zipf fits are usually computed over "counts of counts": a sequence of
//! events is tallied per distinct event, and the tallies become the frequency
//! series. This module provides that tally step.
//!
//! ## Design notes
//!
//! * **Ordering**: Backed by a `BTreeMap`, so keys iterate in ascending
//!   order and `counts()` pairs positionally with `sizes()`.
//! * **Generics**: Any `Ord` key; numeric keys can additionally be exported
//!   as sizes for size-based fits.
//!
//! ## Non-goals
//!
//! * This module does not weight events or merge histograms.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap, format, vec::Vec};
#[cfg(feature = "std")]
use std::{collections::BTreeMap, vec::Vec};

// External dependencies
use num_traits::{Float, ToPrimitive};

// Internal dependencies
use crate::primitives::errors::ZipfError;

/// Number of occurrences of each distinct event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram<K: Ord> {
    bins: BTreeMap<K, usize>,
}

impl<K: Ord> Default for Histogram<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<K> for Histogram<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from_events(iter)
    }
}

impl<K: Ord> Histogram<K> {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self {
            bins: BTreeMap::new(),
        }
    }

    /// Tally a sequence of events.
    pub fn from_events<I: IntoIterator<Item = K>>(events: I) -> Self {
        let mut histogram = Self::new();
        for event in events {
            histogram.record(event);
        }
        histogram
    }

    /// Record one occurrence of `event`.
    #[inline]
    pub fn record(&mut self, event: K) {
        *self.bins.entry(event).or_insert(0) += 1;
    }

    /// Number of distinct events.
    #[inline]
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Whether no event has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Total number of recorded occurrences.
    pub fn total(&self) -> usize {
        self.bins.values().sum()
    }

    /// Occurrences of `event` (zero if never recorded).
    pub fn get(&self, event: &K) -> usize {
        self.bins.get(event).copied().unwrap_or(0)
    }

    /// Iterate over `(event, occurrences)` in ascending event order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.bins.iter().map(|(k, &v)| (k, v))
    }

    /// Occurrence counts in ascending event order, as the frequency series.
    pub fn counts<T: Float>(&self) -> Vec<T> {
        self.bins
            .values()
            .map(|&c| T::from(c).unwrap_or_else(T::infinity))
            .collect()
    }
}

impl<K: Ord + ToPrimitive + core::fmt::Debug> Histogram<K> {
    /// Event keys in ascending order, as the size series.
    ///
    /// Pairs positionally with [`Histogram::counts`].
    pub fn sizes<T: Float>(&self) -> Result<Vec<T>, ZipfError> {
        self.bins
            .keys()
            .map(|k| {
                k.to_f64().and_then(T::from).ok_or_else(|| {
                    ZipfError::InvalidNumericValue(format!("size key {:?} is not representable", k))
                })
            })
            .collect()
    }
}

