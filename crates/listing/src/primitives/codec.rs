//! Splitting and joining of raw list strings.
//!
//! ## Purpose
//!
//! This module converts between the raw string of a list and its sequence of
//! items. Every list operation runs through a split-operate-join cycle built on
//! these two functions.
//!
//! ## Key concepts
//!
//! ### Split-Operate-Join Pattern
//! 1. **Split**: The raw string is decomposed by its inferred delimiter.
//! 2. **Operate**: The operation works on the borrowed item slices.
//! 3. **Join**: The result is re-encoded with the same delimiter.
//!
//! ## Invariants
//!
//! * `join(&split(raw, d), d) == raw` for every raw string and delimiter.
//! * The empty string splits into zero items, and zero items join into the empty string.
//!
//! ## Non-goals
//!
//! * This module does not infer delimiters (see `delimiter`).
//! * This module does not escape items that contain the delimiter.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

// External dependencies
use core::fmt::{Display, Write};

// Internal dependencies
use crate::primitives::delimiter::Delimiter;

// ============================================================================
// Split / Join
// ============================================================================

/// Split a raw list string into borrowed items.
#[inline]
pub fn split(raw: &str, delimiter: Delimiter) -> Vec<&str> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(delimiter.as_char()).collect()
}

/// Join items into a raw list string.
pub fn join<I>(items: I, delimiter: Delimiter) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut raw = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            raw.push(delimiter.as_char());
        }
        // Writing into a `String` cannot fail
        let _ = write!(raw, "{item}");
    }
    raw
}

/// Count the items of a raw list string without allocating.
#[inline]
pub fn count(raw: &str, delimiter: Delimiter) -> usize {
    if raw.is_empty() {
        return 0;
    }
    raw.matches(delimiter.as_char()).count() + 1
}
