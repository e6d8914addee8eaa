//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical building blocks with no
//! Zipf-specific branching:
//! - Log-log sum accumulation for least-squares fitting
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sums of log10-transformed pairs.
pub mod log_sums;
