//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer provides the two framings of a Zipf fit as configured
//! executors:
//! - Rank-frequency (`ByRank`)
//! - Size-frequency (`BySize`)
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Rank-frequency adapter.
pub mod by_rank;

/// Size-frequency adapter.
pub mod by_size;
