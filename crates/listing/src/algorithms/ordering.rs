//! Default ordering of list items.
//!
//! ## Purpose
//!
//! This module defines how `sort()` orders items when no comparator is
//! supplied. Lists of numbers sort numerically (`"10"` after `"9"`), lists of
//! words sort lexicographically, and mixed lists keep a consistent order.
//!
//! ## Design notes
//!
//! * **Numbers first**: Numeric items sort before non-numeric items.
//! * **Tie-break**: Numerically equal items (`"1"`, `"1.0"`) fall back to byte order.
//! * **Stability**: Sorting uses the standard stable sort.
//!
//! ## Invariants
//!
//! * [`natural_cmp`] is a total order, so sorting never observes an
//!   inconsistent comparator and sorting twice equals sorting once.
//!
//! ## Non-goals
//!
//! * This module does not implement locale-aware collation.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::math::numeric::numeric_value;

// ============================================================================
// Comparison
// ============================================================================

/// Compare two items by the default list ordering.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    match (numeric_value(a), numeric_value(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

// ============================================================================
// Sorting
// ============================================================================

/// Sort items in place by the default ordering.
#[inline]
pub fn sort_natural(items: &mut [&str]) {
    // Already sorted input is left untouched
    if items.windows(2).all(|w| natural_cmp(w[0], w[1]) != Ordering::Greater) {
        return;
    }
    items.sort_by(|a, b| natural_cmp(a, b));
}
