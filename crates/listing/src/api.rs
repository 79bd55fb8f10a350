//! High-level API for delimited-string lists.
//!
//! ## Purpose
//!
//! This module is the primary user-facing entry point. It re-exports the list
//! type and its supporting types, and implements a fluent builder for lists
//! whose source and delimiter are configured up front and validated once.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Deferred**: Duplicate parameters are recorded while chaining and reported by `.build()`.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ListingBuilder`] via `Listing::builder()` or `ListingBuilder::new()`.
//! 2. Choose a source with `.raw()` or `.items()` (default: empty list).
//! 3. Optionally choose `.delimiter()` and `.delimiter_set()`.
//! 4. Call `.build()` to obtain a [`Listing`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{
    string::{String, ToString},
    vec::Vec,
};

// External dependencies
use core::fmt::Display;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::codec;

// Publicly re-exported types
pub use crate::engine::iter::Items;
pub use crate::engine::listing::Listing;
pub use crate::primitives::delimiter::{Delimiter, DelimiterSet};
pub use crate::primitives::errors::ListingError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a [`Listing`].
///
/// ```rust
/// use listing::prelude::*;
///
/// let list = Listing::builder()
///     .items(["hello", "how", "are", "you"])
///     .delimiter(';')
///     .build()?;
/// assert_eq!(list, "hello;how;are;you");
/// # Result::<(), ListingError>::Ok(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListingBuilder {
    /// Raw list string.
    pub raw: Option<String>,

    /// Items to join.
    pub items: Option<Vec<String>>,

    /// Delimiter of the built list (default: inferred from `raw`, or `,` for items).
    pub delimiter: Option<char>,

    /// Candidate set for delimiter inference (default: `Extended`).
    pub delimiter_set: Option<DelimiterSet>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl Listing {
    /// Start configuring a list with a [`ListingBuilder`].
    pub fn builder() -> ListingBuilder {
        ListingBuilder::new()
    }
}

impl ListingBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            raw: None,
            items: None,
            delimiter: None,
            delimiter_set: None,
            duplicate_param: None,
        }
    }

    /// Use a raw list string as the source.
    pub fn raw(mut self, raw: impl Into<String>) -> Self {
        if self.raw.is_some() {
            self.duplicate_param = Some("raw");
        } else if self.items.is_some() {
            self.duplicate_param = Some("source");
        }
        self.raw = Some(raw.into());
        self
    }

    /// Use a sequence of items (strings or numbers) as the source.
    pub fn items<I>(mut self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        if self.items.is_some() {
            self.duplicate_param = Some("items");
        } else if self.raw.is_some() {
            self.duplicate_param = Some("source");
        }
        self.items = Some(items.into_iter().map(|item| item.to_string()).collect());
        self
    }

    /// Set the delimiter of the built list.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        if self.delimiter.is_some() {
            self.duplicate_param = Some("delimiter");
        }
        self.delimiter = Some(delimiter);
        self
    }

    /// Set the candidate set used for delimiter inference.
    pub fn delimiter_set(mut self, set: DelimiterSet) -> Self {
        if self.delimiter_set.is_some() {
            self.duplicate_param = Some("delimiter_set");
        }
        self.delimiter_set = Some(set);
        self
    }

    /// Validate the configuration and build the list.
    pub fn build(self) -> Result<Listing, ListingError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let set = self.delimiter_set.unwrap_or_default();
        let delimiter = self
            .delimiter
            .map(|c| Validator::validate_delimiter(c, set))
            .transpose()?;

        match (self.raw, self.items) {
            (Some(raw), _) => {
                let mut list = Listing::with_delimiter_set(raw, set);
                if let Some(d) = delimiter {
                    list.set_delimiter(d.as_char())?;
                }
                Ok(list)
            }
            (None, Some(items)) => {
                let raw = codec::join(&items, delimiter.unwrap_or_default());
                Ok(Listing::with_delimiter_set(raw, set))
            }
            (None, None) => Ok(Listing::with_delimiter_set(String::new(), set)),
        }
    }
}
