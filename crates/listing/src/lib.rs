//! # listing: Delimited-String Lists for Rust
//!
//! Array operations on lists that live inside a single string, such as
//! `"1,2,3"` or `"red;green;blue"`. The delimiter is detected automatically,
//! and every operation (append, slice, sort, filter, map, deduplicate,
//! shuffle, swap, ...) reads and writes that string directly.
//!
//! ## What is a listing?
//!
//! A listing is a string whose items are separated by one of the characters
//! `, ; : - _ .`. The delimiter is not stored: it is the first of these
//! characters found in the string, or `,` if there is none. The empty string
//! is the empty list.
//!
//! ## Quick Start
//!
//! ```rust
//! use listing::prelude::*;
//!
//! let mut list = Listing::new("4,1,2,6,3,8,9");
//!
//! list.sort();                       // numeric order
//! assert_eq!(list, "1,2,3,4,6,8,9");
//!
//! list.append(10);
//! list.set_at(-1, 7)?;               // negative positions count from the end
//! assert_eq!(list.get_at(-1), Some("7"));
//!
//! let even = list.filter(|item| item.parse::<u32>().is_ok_and(|n| n % 2 == 0));
//! assert_eq!(even, "2,4,6,8");
//!
//! list.set_delimiter(';')?;
//! assert_eq!(list.delimiter(), Semicolon);
//! # Result::<(), ListingError>::Ok(())
//! ```
//!
//! ### Builder
//!
//! ```rust
//! use listing::prelude::*;
//!
//! let list = Listing::builder()
//!     .items([1, 2, 3])
//!     .delimiter(':')
//!     .delimiter_set(Classic)
//!     .build()?;
//!
//! assert_eq!(list, "1:2:3");
//! assert_eq!(list.avg::<f64>(), Some(2.0));
//! # Result::<(), ListingError>::Ok(())
//! ```
//!
//! ### Functional style
//!
//! ```rust
//! use listing::functional;
//!
//! assert_eq!(functional::reverse("1,2,3"), "3,2,1");
//! assert_eq!(functional::value_count("1,3,3,2,3", "3"), 3);
//! ```
//!
//! ### Result and Error Handling
//!
//! Reads never fail: out-of-range positions return `None`. Operations with an
//! explicit contract return `Result<_, ListingError>`:
//!
//! - **`set_delimiter`**: `InvalidDelimiter` for characters outside the candidate set.
//! - **`set_at`, `swap`**: `InvalidPosition` for positions that resolve outside the list.
//! - **`ListingBuilder::build`**: `DuplicateParameter` for parameters set twice.
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std` environments with `alloc`. Disable default
//! features to remove the standard library dependency; `shuffle()` (which
//! uses the thread-local generator) is then unavailable, while
//! `shuffle_with()` accepts any `rand::Rng`:
//!
//! ```toml
//! [dependencies]
//! listing = { version = "0.3", default-features = false }
//! ```
//!
//! ## Logging
//!
//! Mutations emit `tracing` events at `TRACE` level and rejected contracts at
//! `DEBUG` level. No subscriber is installed by the crate.
//!
//! ## Limitations
//!
//! Items are never escaped: an item containing a delimiter character is split
//! when the list is read back.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors, delimiters, positions, split/join.
mod primitives;

// Layer 2: Math - numeric view of items.
mod math;

// Layer 3: Algorithms - ordering, deduplication, shuffling, replacement.
mod algorithms;

// Layer 4: Engine - the list type, its iterator, and validation.
mod engine;

// Layer 5: Adapters - alternative calling conventions.
mod adapters;

// High-level API and builder.
mod api;

pub use adapters::functional;
pub use api::{Delimiter, DelimiterSet, Items, Listing, ListingBuilder, ListingError};

// Standard listing prelude.
pub mod prelude {
    pub use crate::api::{
        Delimiter,
        Delimiter::{Colon, Comma, Dot, Hyphen, Semicolon, Underscore},
        DelimiterSet,
        DelimiterSet::{Classic, Extended},
        Items, Listing, ListingBuilder, ListingError,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
