//! Error types for listing operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions raised by operations with an
//! explicit contract: changing the delimiter, writing or swapping by position,
//! and building a list through the fluent builder.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending value (e.g., position and length).
//! * **Narrow**: Reads never fail; they return `Option` for out-of-range input.
//! * **No-std**: Only `core` formatting is used, so the type is available without `std`.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Positions are reported exactly as the caller supplied them (before resolution).
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for listing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingError {
    /// The requested delimiter is not one of the recognized candidates.
    InvalidDelimiter(char),

    /// A position resolved to an index outside `[0, len)`.
    InvalidPosition {
        /// Position as supplied by the caller (may be negative).
        position: isize,
        /// Number of items in the list at the time of the call.
        len: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ListingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidDelimiter(delimiter) => {
                write!(f, "Invalid delimiter: {delimiter:?} (not a recognized list delimiter)")
            }
            Self::InvalidPosition { position, len } => {
                write!(f, "Invalid list position: {position} (list has {len} items)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ListingError {}
