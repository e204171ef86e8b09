//! Interop with the `-1` "not found" convention.
//!
//! Index searches return `Option<usize>`. Code that stores or exchanges
//! indices as signed integers with `-1` for a miss converts at the boundary
//! with these helpers.

use crate::search::{find_index, find_last_index};

/// Signed marker for "no matching index".
pub const NOT_FOUND: isize = -1;

/// `Some(i)` becomes `i`, `None` becomes [`NOT_FOUND`].
///
/// Indices above `isize::MAX` (only reachable with zero-sized elements) also
/// map to [`NOT_FOUND`].
pub fn to_sentinel(index: Option<usize>) -> isize {
    index
        .and_then(|i| isize::try_from(i).ok())
        .unwrap_or(NOT_FOUND)
}

/// Non-negative values become `Some`, negative values `None`.
pub fn from_sentinel(value: isize) -> Option<usize> {
    usize::try_from(value).ok()
}

/// [`find_index`] with a `-1` miss.
///
/// ```
/// use seq_ops::sentinel::find_index_or_sentinel;
///
/// assert_eq!(find_index_or_sentinel(&[1, 2, 3], |x, _| *x == 3), 2);
/// assert_eq!(find_index_or_sentinel(&[1, 2, 3], |x, _| *x == 9), -1);
/// ```
pub fn find_index_or_sentinel<T, P>(seq: &[T], predicate: P) -> isize
where
    P: FnMut(&T, usize) -> bool,
{
    to_sentinel(find_index(seq, predicate))
}

/// [`find_last_index`] with a `-1` miss.
pub fn find_last_index_or_sentinel<T, P>(seq: &[T], predicate: P) -> isize
where
    P: FnMut(&T, usize) -> bool,
{
    to_sentinel(find_last_index(seq, predicate))
}
