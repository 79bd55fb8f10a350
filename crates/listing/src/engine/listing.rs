//! The delimited-string list.
//!
//! ## Purpose
//!
//! This module defines [`Listing`], an ordered sequence of string items stored
//! as a single raw string such as `"1,2,3"`. The delimiter is inferred from the
//! raw string on every access, and sequence operations run through a
//! split-operate-join cycle over that string.
//!
//! ## Design notes
//!
//! * **Single source of truth**: Only the raw string and the candidate set are stored.
//! * **Borrowing reads**: Reads split the raw string into `&str` slices without copying.
//! * **Permissive reads**: Out-of-range reads return `None`; only explicit contracts
//!   (`set_at`, `swap`, `set_delimiter`) return errors.
//! * **Literal equality**: Two lists are equal iff their raw strings are identical.
//!
//! ## Key concepts
//!
//! * **In-place operations** (`append`, `sort`, `reverse`, ...) rewrite the raw string.
//! * **Derivations** (`filter`, `map`, `slice`, `rest`, `duplicates`) return a new list
//!   with the source's delimiter and candidate set.
//! * **Positions** are signed; negative positions count from the end.
//!
//! ## Invariants
//!
//! * Splitting the raw string by the inferred delimiter and re-joining reproduces it.
//! * `len() == 0` iff the raw string is empty.
//! * In-place operations keep the inferred delimiter (except `set_delimiter`).
//!
//! ## Non-goals
//!
//! * This module does not escape items containing a delimiter character.
//! * This module does not synchronize concurrent mutation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{
    string::{String, ToString},
    vec::Vec,
};

// External dependencies
use core::cmp::Ordering;
use core::convert::Infallible;
use core::fmt::{self, Display, Formatter, Write};
use core::hash::{Hash, Hasher};
use core::str::FromStr;
use num_traits::Float;
use rand::Rng;
use tracing::trace;

// Internal dependencies
use crate::algorithms::{dedup, ordering, shuffle};
use crate::engine::iter::Items;
use crate::engine::validator::Validator;
use crate::math::numeric;
use crate::primitives::codec;
use crate::primitives::delimiter::{Delimiter, DelimiterSet};
use crate::primitives::errors::ListingError;
use crate::primitives::position;

// ============================================================================
// Listing
// ============================================================================

/// An ordered list of string items encoded as one delimited string.
///
/// ```rust
/// use listing::prelude::*;
///
/// let mut list = Listing::new("1,2,3,4");
/// list.append(5);
/// list.reverse();
/// assert_eq!(list, "5,4,3,2,1");
/// assert_eq!(list.delimiter(), Comma);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Listing {
    /// Raw string; the empty string is the empty list.
    list: String,

    /// Characters recognized during delimiter inference.
    delimiters: DelimiterSet,
}

impl Listing {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a list from a raw string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self::with_delimiter_set(raw, DelimiterSet::default())
    }

    /// Create a list from a raw string, inferring delimiters from `set`.
    pub fn with_delimiter_set(raw: impl Into<String>, set: DelimiterSet) -> Self {
        Self {
            list: raw.into(),
            delimiters: set,
        }
    }

    /// Create a list by joining `items` with `delimiter`.
    ///
    /// ```rust
    /// use listing::prelude::*;
    ///
    /// let list = Listing::from_items([1, 2, 3, 4], Semicolon);
    /// assert_eq!(list, "1;2;3;4");
    /// ```
    pub fn from_items<I>(items: I, delimiter: Delimiter) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        Self::new(codec::join(items, delimiter))
    }

    // Build a derived list sharing this list's delimiter and candidate set.
    fn derive<I>(&self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        Self {
            list: codec::join(items, self.delimiter()),
            delimiters: self.delimiters,
        }
    }

    // Split, operate on the borrowed items, and re-join with the same delimiter.
    fn rewrite<F>(&mut self, op: F)
    where
        F: FnOnce(&mut Vec<&str>),
    {
        let delimiter = self.delimiter();
        let mut items = codec::split(&self.list, delimiter);
        op(&mut items);
        self.list = codec::join(items, delimiter);
    }

    fn traced(&self, op: &'static str) {
        trace!(op, len = self.len(), delimiter = %self.delimiter(), "list mutated");
    }

    // ========================================================================
    // Delimiter Handling
    // ========================================================================

    /// Check whether `c` is a recognized delimiter (`, ; : - _ .`).
    pub fn is_valid_delimiter(c: char) -> bool {
        DelimiterSet::Extended.is_valid(c)
    }

    /// The delimiter inferred from the raw string (`,` if none is present).
    #[inline]
    pub fn delimiter(&self) -> Delimiter {
        self.delimiters.infer(&self.list)
    }

    /// The candidate set used for delimiter inference.
    #[inline]
    pub fn delimiter_set(&self) -> DelimiterSet {
        self.delimiters
    }

    /// Replace every occurrence of the current delimiter with `delimiter`.
    ///
    /// Fails with [`ListingError::InvalidDelimiter`] if `delimiter` is not in
    /// this list's candidate set.
    pub fn set_delimiter(&mut self, delimiter: char) -> Result<(), ListingError> {
        let new = Validator::validate_delimiter(delimiter, self.delimiters)?;
        if new != self.delimiter() {
            self.list = codec::join(self.iter(), new);
        }
        self.traced("set_delimiter");
        Ok(())
    }

    // ========================================================================
    // Read Operations
    // ========================================================================

    /// The raw string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.list
    }

    /// Consume the list, returning its raw string.
    pub fn into_string(self) -> String {
        self.list
    }

    /// Number of items (zero for the empty string).
    #[inline]
    pub fn len(&self) -> usize {
        codec::count(&self.list, self.delimiter())
    }

    /// Check whether the list has no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Iterate over the items.
    #[inline]
    pub fn iter(&self) -> Items<'_> {
        Items::new(&self.list, self.delimiter())
    }

    /// Iterate over the items (alias of [`iter`](Self::iter)).
    #[inline]
    pub fn values(&self) -> Items<'_> {
        self.iter()
    }

    /// Owned copy of the items.
    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }

    /// First item.
    pub fn first(&self) -> Option<&str> {
        self.iter().next()
    }

    /// Last item.
    pub fn last(&self) -> Option<&str> {
        self.iter().next_back()
    }

    /// Item at `position`; negative positions count from the end.
    pub fn get_at(&self, position: isize) -> Option<&str> {
        let index = position::resolve(position, self.len())?;
        self.iter().nth(index)
    }

    /// Index of the first item equal to `item`.
    pub fn index_of(&self, item: &str) -> Option<usize> {
        self.iter().position(|candidate| candidate == item)
    }

    /// Index of the first item containing `substring` (case-sensitive).
    pub fn contains(&self, substring: &str) -> Option<usize> {
        self.iter().position(|item| item.contains(substring))
    }

    /// Index of the first item containing `substring` (case-insensitive).
    pub fn contains_no_case(&self, substring: &str) -> Option<usize> {
        let needle = substring.to_lowercase();
        self.iter()
            .position(|item| item.to_lowercase().contains(needle.as_str()))
    }

    /// Check whether an item equals `item` (case-sensitive).
    pub fn find(&self, item: &str) -> bool {
        self.iter().any(|candidate| candidate == item)
    }

    /// Check whether an item equals `item` (case-insensitive).
    pub fn find_no_case(&self, item: &str) -> bool {
        let needle = item.to_lowercase();
        self.iter().any(|candidate| candidate.to_lowercase() == needle)
    }

    /// Check whether any item satisfies `predicate`.
    pub fn some<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&str) -> bool,
    {
        self.iter().any(|item| predicate(item))
    }

    /// Number of items equal to `item` (case-sensitive).
    pub fn value_count(&self, item: &str) -> usize {
        self.iter().filter(|&candidate| candidate == item).count()
    }

    /// Number of items equal to `item` (case-insensitive).
    pub fn value_count_no_case(&self, item: &str) -> usize {
        let needle = item.to_lowercase();
        self.iter()
            .filter(|candidate| candidate.to_lowercase() == needle)
            .count()
    }

    /// Check for literal equality of the raw strings.
    ///
    /// `"1,2"` and `"1;2"` are different lists even though their items match.
    pub fn equals(&self, other: &Listing) -> bool {
        self.list == other.list
    }

    /// New list of the items occurring more than once, each listed once in
    /// the order of its first occurrence.
    pub fn duplicates(&self) -> Listing {
        self.derive(dedup::duplicates(&codec::split(&self.list, self.delimiter())))
    }

    // ========================================================================
    // Mutating Operations
    // ========================================================================

    /// Append an item.
    pub fn append(&mut self, item: impl Display) {
        let delimiter = self.delimiter();
        if !self.list.is_empty() {
            self.list.push(delimiter.as_char());
        }
        // Writing into a `String` cannot fail
        let _ = write!(self.list, "{item}");
        self.traced("append");
    }

    /// Insert an item as the new first element.
    pub fn prepend(&mut self, item: impl Display) {
        self.insert_at(0, item);
    }

    /// Insert an item as both the first and the last element.
    pub fn qualify(&mut self, item: impl Display) {
        let delimiter = self.delimiter();
        let item = item.to_string();
        let mut items = codec::split(&self.list, delimiter);
        items.insert(0, &item);
        items.push(&item);
        self.list = codec::join(items, delimiter);
        self.traced("qualify");
    }

    /// Insert an item before the element at `position`.
    ///
    /// Negative positions count from the end; positions past either end are
    /// clamped, so the item is always inserted.
    pub fn insert_at(&mut self, position: isize, item: impl Display) {
        let delimiter = self.delimiter();
        let item = item.to_string();
        let mut items = codec::split(&self.list, delimiter);
        let index = position::clamp(position, items.len());
        items.insert(index, &item);
        self.list = codec::join(items, delimiter);
        self.traced("insert_at");
    }

    /// Remove and return the item at `position`.
    ///
    /// Returns `None` and leaves the list untouched when `position` is out of range.
    pub fn delete_at(&mut self, position: isize) -> Option<String> {
        let delimiter = self.delimiter();
        let mut items = codec::split(&self.list, delimiter);
        let index = position::resolve(position, items.len())?;
        let removed = items.remove(index).to_string();
        self.list = codec::join(items, delimiter);
        self.traced("delete_at");
        Some(removed)
    }

    /// Replace the item at `position` with `value`.
    ///
    /// Fails with [`ListingError::InvalidPosition`] if `position` does not
    /// resolve to an existing item.
    pub fn set_at(&mut self, position: isize, value: impl Display) -> Result<(), ListingError> {
        let delimiter = self.delimiter();
        let value = value.to_string();
        let mut items = codec::split(&self.list, delimiter);
        let index = Validator::validate_position(position, items.len())?;
        items[index] = value.as_str();
        self.list = codec::join(items, delimiter);
        self.traced("set_at");
        Ok(())
    }

    /// Exchange the items at two positions.
    ///
    /// Fails with [`ListingError::InvalidPosition`] if either position does
    /// not resolve to an existing item.
    pub fn swap(&mut self, position1: isize, position2: isize) -> Result<(), ListingError> {
        let len = self.len();
        let i = Validator::validate_position(position1, len)?;
        let j = Validator::validate_position(position2, len)?;
        self.rewrite(|items| items.swap(i, j));
        self.traced("swap");
        Ok(())
    }

    /// Reverse the item order.
    pub fn reverse(&mut self) {
        self.rewrite(|items| items.reverse());
        self.traced("reverse");
    }

    /// Sort items by the default ordering: numbers numerically, before
    /// other items, which sort lexicographically.
    pub fn sort(&mut self) {
        self.rewrite(|items| ordering::sort_natural(items));
        self.traced("sort");
    }

    /// Sort items with a comparator (stable).
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&str, &str) -> Ordering,
    {
        self.rewrite(|items| items.sort_by(|a, b| compare(a, b)));
        self.traced("sort_by");
    }

    /// Shuffle items with the thread-local random generator.
    #[cfg(feature = "std")]
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Shuffle items with the supplied random generator.
    pub fn shuffle_with<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.rewrite(|items| shuffle::fisher_yates(items, rng));
        self.traced("shuffle");
    }

    /// Remove repeated items, keeping the first occurrence of each.
    pub fn remove_duplicates(&mut self) {
        self.rewrite(|items| dedup::remove_duplicates(items));
        self.traced("remove_duplicates");
    }

    /// Append all items of `other`.
    pub fn concat(&mut self, other: &Listing) {
        let delimiter = self.delimiter();
        let mut items = codec::split(&self.list, delimiter);
        items.extend(other.iter());
        self.list = codec::join(items, delimiter);
        self.traced("concat");
    }

    /// Append the items of `other` that are not already present.
    pub fn merge(&mut self, other: &Listing) {
        let delimiter = self.delimiter();
        let mut items = codec::split(&self.list, delimiter);
        for item in other.iter() {
            if !items.contains(&item) {
                items.push(item);
            }
        }
        self.list = codec::join(items, delimiter);
        self.traced("merge");
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.list.clear();
        self.traced("clear");
    }

    // ========================================================================
    // Derivation Operations
    // ========================================================================

    /// New list of the items satisfying `predicate`.
    pub fn filter<F>(&self, mut predicate: F) -> Listing
    where
        F: FnMut(&str) -> bool,
    {
        self.derive(self.iter().filter(|&item| predicate(item)))
    }

    /// New list of `transform` applied to every item.
    pub fn map<F, S>(&self, transform: F) -> Listing
    where
        F: FnMut(&str) -> S,
        S: Display,
    {
        self.derive(self.iter().map(transform))
    }

    /// New list of the items in `[start, end)`.
    ///
    /// Negative bounds count from the end, bounds are clamped to the list,
    /// and `None` as `end` means the list length.
    pub fn slice(&self, start: isize, end: Option<isize>) -> Listing {
        let items = codec::split(&self.list, self.delimiter());
        let n = items.len();
        let from = position::clamp(start, n);
        let to = end.map_or(n, |e| position::clamp(e, n));
        let selected = if from < to { &items[from..to] } else { &[][..] };
        self.derive(selected)
    }

    /// New list without the first item.
    pub fn rest(&self) -> Listing {
        self.derive(self.iter().skip(1))
    }

    // ========================================================================
    // Iteration & Numeric Views
    // ========================================================================

    /// Call `callback` with every item and its index, in order.
    pub fn each<F>(&self, mut callback: F)
    where
        F: FnMut(&str, usize),
    {
        for (i, item) in self.iter().enumerate() {
            callback(item, i);
        }
    }

    /// Call `callback` with every item converted to a number, and its index.
    ///
    /// Unparsable items are passed as NaN; empty items as zero.
    pub fn each_parsed<T, F>(&self, mut callback: F)
    where
        T: Float,
        F: FnMut(T, usize),
    {
        for (i, item) in self.iter().enumerate() {
            callback(numeric::parse(item), i);
        }
    }

    /// Items converted to numbers.
    pub fn parsed<T: Float>(&self) -> Vec<T> {
        self.iter().map(numeric::parse).collect()
    }

    /// Mean of the items as numbers.
    pub fn avg<T: Float>(&self) -> Option<T> {
        numeric::mean(&self.parsed::<T>())
    }

    /// Smallest item as a number.
    pub fn min<T: Float>(&self) -> Option<T> {
        numeric::min(&self.parsed::<T>())
    }

    /// Largest item as a number.
    pub fn max<T: Float>(&self) -> Option<T> {
        numeric::max(&self.parsed::<T>())
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for Listing {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Listing {}

impl Hash for Listing {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.list.hash(state);
    }
}

impl PartialEq<str> for Listing {
    fn eq(&self, other: &str) -> bool {
        self.list == other
    }
}

impl PartialEq<&str> for Listing {
    fn eq(&self, other: &&str) -> bool {
        self.list == *other
    }
}

impl Display for Listing {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.list)
    }
}

impl AsRef<str> for Listing {
    fn as_ref(&self) -> &str {
        &self.list
    }
}

impl From<&str> for Listing {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Listing {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl FromStr for Listing {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(raw))
    }
}

impl<S: Display> FromIterator<S> for Listing {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_items(iter, Delimiter::Comma)
    }
}

impl<'a> IntoIterator for &'a Listing {
    type Item = &'a str;
    type IntoIter = Items<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
