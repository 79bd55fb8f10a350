//! Validation of explicit list contracts.
//!
//! ## Purpose
//!
//! This module checks the inputs of the operations that are allowed to fail:
//! delimiter changes, positional writes and swaps, and builder configuration.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Resolving**: Successful checks return the resolved value (delimiter or index),
//!   so callers never re-derive it.
//! * **Logged**: Every rejection emits a `debug` event.
//!
//! ## Invariants
//!
//! * A returned delimiter is a member of the requested candidate set.
//! * A returned index is strictly less than the supplied length.
//!
//! ## Non-goals
//!
//! * This module does not validate reads; out-of-range reads return `None`.
//! * This module does not provide automatic correction of invalid inputs.

// External dependencies
use tracing::debug;

// Internal dependencies
use crate::primitives::delimiter::{Delimiter, DelimiterSet};
use crate::primitives::errors::ListingError;
use crate::primitives::position;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for list operations and builder configuration.
pub struct Validator;

impl Validator {
    /// Validate a requested delimiter against a candidate set.
    pub fn validate_delimiter(c: char, set: DelimiterSet) -> Result<Delimiter, ListingError> {
        set.lookup(c).ok_or_else(|| {
            debug!(delimiter = ?c, set = ?set, "rejected delimiter");
            ListingError::InvalidDelimiter(c)
        })
    }

    /// Validate a signed position against the list length.
    pub fn validate_position(position: isize, len: usize) -> Result<usize, ListingError> {
        position::resolve(position, len).ok_or_else(|| {
            debug!(position, len, "rejected list position");
            ListingError::InvalidPosition { position, len }
        })
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), ListingError> {
        if let Some(parameter) = duplicate_param {
            debug!(parameter, "rejected duplicate builder parameter");
            return Err(ListingError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
