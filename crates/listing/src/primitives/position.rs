//! Position resolution for signed list indices.
//!
//! Positions are `isize`; a negative position counts from the end of the list
//! (`position + len`). Two resolution rules exist: strict resolution used by
//! reads and writes of a single element, and clamping used by splice-like
//! operations (insertion and slicing).

// Signed length, saturating for lists that do not fit in `isize`.
#[inline]
fn signed_len(len: usize) -> isize {
    isize::try_from(len).unwrap_or(isize::MAX)
}

// Resolve `position` to an index in `[0, len)`, or `None` when out of range.
#[inline]
pub fn resolve(position: isize, len: usize) -> Option<usize> {
    let index = if position < 0 {
        position.checked_add(signed_len(len))?
    } else {
        position
    };

    usize::try_from(index).ok().filter(|&i| i < len)
}

// Resolve `position` to a boundary in `[0, len]`, clamping instead of failing.
#[inline]
pub fn clamp(position: isize, len: usize) -> usize {
    let n = signed_len(len);
    let index = if position < 0 {
        position.saturating_add(n).max(0)
    } else {
        position.min(n)
    };

    // `index` is within `[0, n]` here
    usize::try_from(index).unwrap_or(0)
}
