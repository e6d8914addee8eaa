//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a complete fit:
//! - Input validation
//! - Framing transform and regression
//! - Result assembly
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit orchestration.
pub mod executor;

/// Result types.
pub mod output;

/// Input validation.
pub mod validator;
