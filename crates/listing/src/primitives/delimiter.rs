//! Delimiter candidates and inference.
//!
//! ## Purpose
//!
//! This module defines the characters a list may be delimited by and the
//! inference rule that derives a list's delimiter from its raw string.
//!
//! ## Design notes
//!
//! * **Derived**: The delimiter is never stored; it is recomputed from the raw string.
//! * **First match wins**: The first character of the raw string that is a candidate
//!   becomes the delimiter, regardless of its position in the candidate table.
//! * **Configurable**: Two candidate sets exist, `Classic` (`, ; :`) and `Extended`
//!   (`, ; : - _ .`). The extended set is the default.
//!
//! ## Invariants
//!
//! * Inference is total: a raw string without candidates infers [`Delimiter::Comma`].
//! * Every delimiter returned by [`DelimiterSet::infer`] is a member of that set.
//!
//! ## Non-goals
//!
//! * This module does not split or join strings (see `codec`).
//! * This module does not escape delimiter characters inside items.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::errors::ListingError;

// ============================================================================
// Delimiter
// ============================================================================

/// A character that separates the items of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Delimiter {
    /// `,` (the fallback when nothing else is found).
    #[default]
    Comma,

    /// `;`
    Semicolon,

    /// `:`
    Colon,

    /// `-`
    Hyphen,

    /// `_`
    Underscore,

    /// `.`
    Dot,
}

impl Delimiter {
    /// All delimiters, in the order of the extended candidate set.
    pub const ALL: [Delimiter; 6] = [
        Delimiter::Comma,
        Delimiter::Semicolon,
        Delimiter::Colon,
        Delimiter::Hyphen,
        Delimiter::Underscore,
        Delimiter::Dot,
    ];

    /// The character this delimiter stands for.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Self::Comma => ',',
            Self::Semicolon => ';',
            Self::Colon => ':',
            Self::Hyphen => '-',
            Self::Underscore => '_',
            Self::Dot => '.',
        }
    }

    /// Look up the delimiter for a character, if it is one.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            ',' => Some(Self::Comma),
            ';' => Some(Self::Semicolon),
            ':' => Some(Self::Colon),
            '-' => Some(Self::Hyphen),
            '_' => Some(Self::Underscore),
            '.' => Some(Self::Dot),
            _ => None,
        }
    }
}

impl TryFrom<char> for Delimiter {
    type Error = ListingError;

    fn try_from(c: char) -> core::result::Result<Self, Self::Error> {
        Self::from_char(c).ok_or(ListingError::InvalidDelimiter(c))
    }
}

impl From<Delimiter> for char {
    fn from(delimiter: Delimiter) -> char {
        delimiter.as_char()
    }
}

impl Display for Delimiter {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.as_char())
    }
}

// ============================================================================
// Candidate Sets
// ============================================================================

/// The set of characters recognized as delimiters during inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DelimiterSet {
    /// `, ; :` only.
    Classic,

    /// `, ; : - _ .`
    #[default]
    Extended,
}

impl DelimiterSet {
    /// Candidate delimiters of this set.
    pub fn candidates(self) -> &'static [Delimiter] {
        match self {
            Self::Classic => &Delimiter::ALL[..3],
            Self::Extended => &Delimiter::ALL,
        }
    }

    /// Check whether `c` is a delimiter recognized by this set.
    #[inline]
    pub fn is_valid(self, c: char) -> bool {
        self.lookup(c).is_some()
    }

    /// Map `c` to a delimiter of this set.
    #[inline]
    pub fn lookup(self, c: char) -> Option<Delimiter> {
        Delimiter::from_char(c).filter(|d| self.candidates().contains(d))
    }

    /// Infer the delimiter of a raw list string.
    ///
    /// Returns the first candidate character occurring in `raw`, or
    /// [`Delimiter::Comma`] if there is none.
    pub fn infer(self, raw: &str) -> Delimiter {
        raw.chars()
            .find_map(|c| self.lookup(c))
            .unwrap_or_default()
    }
}
