//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer implements the list itself: the [`Listing`](crate::Listing)
//! value type, its borrowed item iterator, and the validation of the
//! operations that can fail.
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

/// The delimited-string list.
pub mod listing;

/// Borrowed item iterator.
pub mod iter;

/// Contract validation.
pub mod validator;
