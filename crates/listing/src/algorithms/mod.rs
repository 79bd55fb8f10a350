//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the sequence algorithms the list delegates to:
//! default item ordering, duplicate handling, random permutation, and
//! list-driven word replacement. All of them operate on borrowed item slices.
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

/// Default item ordering.
pub mod ordering;

/// Duplicate detection and removal.
pub mod dedup;

/// Fisher–Yates shuffling.
pub mod shuffle;

/// Word replacement.
pub mod replace;
