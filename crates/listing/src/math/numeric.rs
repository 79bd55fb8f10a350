//! Numeric interpretation of list items.
//!
//! ## Purpose
//!
//! Lists frequently hold numbers (`"4,1,2,6"`). This module converts items to
//! floating-point values and provides the small aggregates the list exposes
//! on top of them: mean, minimum, and maximum.
//!
//! ## Design notes
//!
//! * **Generics**: All functions are generic over `num_traits::Float`.
//! * **Lenient**: Conversion never fails; unparsable items become NaN.
//! * **Whitespace**: Items are trimmed before parsing; an empty item is zero.
//! * **Special values**: Only the spelling `Infinity` (optionally signed) names an
//!   infinite value; words such as `inf`, `infinity`, or `nan` are not numbers.
//!
//! ## Invariants
//!
//! * `parse` is total and deterministic.
//! * Aggregates return `None` exactly when the input is empty.
//! * `min` and `max` ignore NaN values unless every value is NaN.
//!
//! ## Non-goals
//!
//! * This module does not parse hexadecimal, octal, or locale-specific formats.

// External dependencies
use num_traits::Float;

// ============================================================================
// Conversion
// ============================================================================

// Alphabetic spellings the float parser accepts, other than `Infinity`.
#[inline]
fn is_special_word(trimmed: &str) -> bool {
    let body = trimmed
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(trimmed);
    body.starts_with(|c: char| c.is_ascii_alphabetic()) && body != "Infinity"
}

/// Convert a single item to a number.
#[inline]
pub fn parse<T: Float>(item: &str) -> T {
    let trimmed = item.trim();
    if trimmed.is_empty() {
        return T::zero();
    }
    if is_special_word(trimmed) {
        return T::nan();
    }
    T::from_str_radix(trimmed, 10).unwrap_or_else(|_| T::nan())
}

/// Strict numeric value of an item: `None` for empty, unparsable, or NaN items.
#[inline]
pub fn numeric_value(item: &str) -> Option<f64> {
    let trimmed = item.trim();
    if trimmed.is_empty() || is_special_word(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| !v.is_nan())
}

// ============================================================================
// Aggregates
// ============================================================================

/// Arithmetic mean of the values.
pub fn mean<T: Float>(values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    let n = T::from(values.len()).unwrap_or(T::one());
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    Some(sum / n)
}

/// Smallest value.
pub fn min<T: Float>(values: &[T]) -> Option<T> {
    values.iter().copied().reduce(T::min)
}

/// Largest value.
pub fn max<T: Float>(values: &[T]) -> Option<T> {
    values.iter().copied().reduce(T::max)
}
