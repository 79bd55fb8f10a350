//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer adapts the engine to alternative calling conventions:
//!
//! - **Functional**: free functions taking and returning raw strings
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

/// String-in, string-out list functions.
pub mod functional;
