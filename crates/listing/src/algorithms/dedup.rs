//! Duplicate detection and removal.
//!
//! ## Purpose
//!
//! This module finds items that occur more than once and removes repeated
//! occurrences while keeping the first one.
//!
//! ## Design notes
//!
//! * **Exact matching**: Items are compared byte-for-byte (case-sensitive).
//! * **Order preserving**: Neither operation reorders the surviving items.
//! * **Ordered sets**: `BTreeMap`/`BTreeSet` keep the module available without `std`.
//!
//! ## Invariants
//!
//! * Every item returned by [`duplicates`] occurs at least twice in the input,
//!   and each such item is returned exactly once.
//! * After [`remove_duplicates`], all items are distinct and the first
//!   occurrence of each original item is kept.
//!
//! ## Non-goals
//!
//! * This module does not perform case-insensitive deduplication.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{
    collections::{BTreeMap, BTreeSet},
    vec::Vec,
};
#[cfg(feature = "std")]
use std::collections::{BTreeMap, BTreeSet};

// ============================================================================
// Duplicates
// ============================================================================

/// Items occurring more than once, ordered by their first occurrence.
pub fn duplicates<'a>(items: &[&'a str]) -> Vec<&'a str> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for &item in items {
        *counts.entry(item).or_insert(0) += 1;
    }

    let mut result = Vec::new();
    for &item in items {
        if let Some(count) = counts.get_mut(item) {
            if *count > 1 {
                result.push(item);
                // Emit each duplicated item once
                *count = 0;
            }
        }
    }

    result
}

/// Remove repeated items in place, keeping first occurrences.
pub fn remove_duplicates(items: &mut Vec<&str>) {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    items.retain(|item| seen.insert(*item));
}
