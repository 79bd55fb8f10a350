//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the numeric view of list items: conversion of items to
//! floating-point values and simple aggregates over them.
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

/// Item-to-number conversion and aggregates.
pub mod numeric;
