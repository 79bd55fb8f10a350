//! Functional adapter: list operations as free functions over raw strings.
//!
//! ## Purpose
//!
//! This module offers a string-in, string-out calling convention: every
//! function takes the raw list string as its first argument and returns a
//! new string (or a read result) instead of mutating a value.
//!
//! ## Design notes
//!
//! * **Thin**: Every function wraps a [`Listing`] operation.
//! * **Classic inference**: Delimiters are inferred from the classic set `, ; :`.
//! * **Delimiter preserving**: Results are joined with the input's own delimiter.
//! * **Owned reads**: Item reads return owned `String`s.
//!
//! ## Non-goals
//!
//! * This module does not add behavior beyond [`Listing`], apart from the
//!   two-list word replacement (`replace`, `replace_no_case`).
//!
//! ```rust
//! use listing::functional;
//!
//! assert_eq!(functional::append("1,2,3,4", 5), "1,2,3,4,5");
//! assert_eq!(functional::sort("4;1;3;2"), "1;2;3;4");
//! assert_eq!(
//!     functional::replace("hello i am lars", "i,am,lars", "you,are,peter"),
//!     "hello you are peter"
//! );
//! ```

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};

// External dependencies
use core::fmt::Display;

// Internal dependencies
use crate::algorithms::replace::replace_words;
use crate::engine::listing::Listing;
use crate::primitives::codec;
use crate::primitives::delimiter::DelimiterSet;
use crate::primitives::errors::ListingError;

// ============================================================================
// Helpers
// ============================================================================

// View a raw string as a list with classic delimiter inference.
#[inline]
fn view(list: &str) -> Listing {
    Listing::with_delimiter_set(list, DelimiterSet::Classic)
}

// Apply an in-place operation to a copy of the list and return its raw string.
#[inline]
fn apply<F>(list: &str, op: F) -> String
where
    F: FnOnce(&mut Listing),
{
    let mut listing = view(list);
    op(&mut listing);
    listing.into_string()
}

// Fallible variant of `apply`.
#[inline]
fn try_apply<F>(list: &str, op: F) -> Result<String, ListingError>
where
    F: FnOnce(&mut Listing) -> Result<(), ListingError>,
{
    let mut listing = view(list);
    op(&mut listing)?;
    Ok(listing.into_string())
}

// ============================================================================
// Reads
// ============================================================================

/// Number of items.
pub fn len(list: &str) -> usize {
    view(list).len()
}

/// Items as owned strings.
pub fn to_array(list: &str) -> Vec<String> {
    view(list).to_vec()
}

/// First item.
pub fn first(list: &str) -> Option<String> {
    view(list).first().map(ToString::to_string)
}

/// Last item.
pub fn last(list: &str) -> Option<String> {
    view(list).last().map(ToString::to_string)
}

/// Item at `position` (negative positions count from the end).
pub fn get_at(list: &str, position: isize) -> Option<String> {
    view(list).get_at(position).map(ToString::to_string)
}

/// Index of the first item equal to `value`.
pub fn index_of(list: &str, value: &str) -> Option<usize> {
    view(list).index_of(value)
}

/// Index of the first item containing `substring`.
pub fn contains(list: &str, substring: &str) -> Option<usize> {
    view(list).contains(substring)
}

/// Index of the first item containing `substring`, ignoring case.
pub fn contains_no_case(list: &str, substring: &str) -> Option<usize> {
    view(list).contains_no_case(substring)
}

/// Check whether an item equals `value`.
pub fn find(list: &str, value: &str) -> bool {
    view(list).find(value)
}

/// Check whether an item equals `value`, ignoring case.
pub fn find_no_case(list: &str, value: &str) -> bool {
    view(list).find_no_case(value)
}

/// Number of items equal to `value`.
pub fn value_count(list: &str, value: &str) -> usize {
    view(list).value_count(value)
}

/// Number of items equal to `value`, ignoring case.
pub fn value_count_no_case(list: &str, value: &str) -> usize {
    view(list).value_count_no_case(value)
}

/// Items occurring more than once.
pub fn get_duplicates(list: &str) -> String {
    view(list).duplicates().into_string()
}

/// Call `callback` with every item and its index.
pub fn each<F>(list: &str, callback: F)
where
    F: FnMut(&str, usize),
{
    view(list).each(callback);
}

// ============================================================================
// Numeric
// ============================================================================

/// Mean of the items, formatted with two decimals.
pub fn avg(list: &str) -> Option<String> {
    view(list).avg::<f64>().map(|mean| format!("{mean:.2}"))
}

/// Smallest item as a number.
pub fn min(list: &str) -> Option<f64> {
    view(list).min()
}

/// Largest item as a number.
pub fn max(list: &str) -> Option<f64> {
    view(list).max()
}

// ============================================================================
// Transformations
// ============================================================================

/// Append `value`.
pub fn append(list: &str, value: impl Display) -> String {
    apply(list, |l| l.append(value))
}

/// Prepend `value`.
pub fn prepend(list: &str, value: impl Display) -> String {
    apply(list, |l| l.prepend(value))
}

/// Add `value` at both ends.
pub fn qualify(list: &str, value: impl Display) -> String {
    apply(list, |l| l.qualify(value))
}

/// Insert `value` before the item at `position`.
pub fn insert_at(list: &str, position: isize, value: impl Display) -> String {
    apply(list, |l| l.insert_at(position, value))
}

/// Remove the item at `position`; out-of-range positions leave the list unchanged.
pub fn delete_at(list: &str, position: isize) -> String {
    apply(list, |l| {
        l.delete_at(position);
    })
}

/// Replace the item at `position` with `value`.
pub fn set_at(list: &str, position: isize, value: impl Display) -> Result<String, ListingError> {
    try_apply(list, |l| l.set_at(position, value))
}

/// Exchange the items at two positions.
pub fn swap(list: &str, position1: isize, position2: isize) -> Result<String, ListingError> {
    try_apply(list, |l| l.swap(position1, position2))
}

/// Reverse the item order.
pub fn reverse(list: &str) -> String {
    apply(list, Listing::reverse)
}

/// Sort by the default ordering (numbers numerically).
pub fn sort(list: &str) -> String {
    apply(list, Listing::sort)
}

/// Remove repeated items.
pub fn remove_duplicates(list: &str) -> String {
    apply(list, Listing::remove_duplicates)
}

/// All items but the first.
pub fn rest(list: &str) -> String {
    view(list).rest().into_string()
}

/// Items in `[start, end)`.
pub fn slice(list: &str, start: isize, end: Option<isize>) -> String {
    view(list).slice(start, end).into_string()
}

/// Append the items of `other`.
pub fn concat(list: &str, other: &str) -> String {
    apply(list, |l| l.concat(&view(other)))
}

/// Re-delimit `list` with the delimiter inferred from `new_delimiter`.
///
/// `new_delimiter` may be a single delimiter (`";"`) or any string whose
/// first classic delimiter is used; strings without one select `,`.
pub fn change_delims(list: &str, new_delimiter: &str) -> String {
    let target = DelimiterSet::Classic.infer(new_delimiter);
    codec::join(view(list).iter(), target)
}

// ============================================================================
// Word Replacement
// ============================================================================

/// Replace words of `sentence` that equal an item of `from` with the item at
/// the same index of `to`.
pub fn replace(sentence: &str, from: &str, to: &str) -> String {
    replace_with(sentence, from, to, true)
}

/// Case-insensitive variant of [`replace`].
pub fn replace_no_case(sentence: &str, from: &str, to: &str) -> String {
    replace_with(sentence, from, to, false)
}

fn replace_with(sentence: &str, from: &str, to: &str, case_sensitive: bool) -> String {
    let from = view(from);
    let to = view(to);
    let patterns: Vec<&str> = from.iter().collect();
    let replacements: Vec<&str> = to.iter().collect();
    replace_words(sentence, &patterns, &replacements, case_sensitive)
}
