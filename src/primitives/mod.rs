//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental data types shared by every other layer:
//! - Error types
//! - Series labels used in diagnostics
//! - Event histograms
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for Zipf fitting.
pub mod errors;

/// Labels identifying input series.
pub mod series;

/// Event occurrence histograms.
pub mod histogram;
