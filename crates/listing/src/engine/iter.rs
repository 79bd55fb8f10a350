//! Borrowed item iterator.

// External dependencies
use core::iter::FusedIterator;
use core::str::Split;

// Internal dependencies
use crate::primitives::delimiter::Delimiter;

/// Iterator over the items of a list, borrowing its raw string.
///
/// Created by [`Listing::iter`](crate::Listing::iter). Every call starts
/// a fresh traversal; an empty list yields nothing.
#[derive(Debug, Clone)]
pub struct Items<'a> {
    inner: Option<Split<'a, char>>,
}

impl<'a> Items<'a> {
    pub(crate) fn new(raw: &'a str, delimiter: Delimiter) -> Self {
        let inner = (!raw.is_empty()).then(|| raw.split(delimiter.as_char()));
        Self { inner }
    }
}

impl<'a> Iterator for Items<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Some(split) => split.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl DoubleEndedIterator for Items<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next_back()
    }
}

impl FusedIterator for Items<'_> {}
