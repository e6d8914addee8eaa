//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the Zipf-specific algorithms:
//! - The log-log regression engine with degenerate-case classification
//! - The rank transform pairing sorted counts with positional ranks
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Log-log least-squares regression.
pub mod regression;

/// Rank generation for rank-frequency fits.
pub mod ranking;
