//! Existential and universal checks over a slice.

use crate::trace::trace_op;

/// True if `predicate` holds for at least one element.
///
/// Stops at the first match. An empty slice is `false`.
pub fn some<T, P>(seq: &[T], mut predicate: P) -> bool
where
    P: FnMut(&T, usize) -> bool,
{
    let found = seq
        .iter()
        .enumerate()
        .any(|(index, element)| predicate(element, index));
    trace_op!(op = "some", len = seq.len(), result = found);
    found
}

/// True if `predicate` holds for every element.
///
/// Stops at the first failure. An empty slice is vacuously `true`.
pub fn every<T, P>(seq: &[T], mut predicate: P) -> bool
where
    P: FnMut(&T, usize) -> bool,
{
    let all = seq
        .iter()
        .enumerate()
        .all(|(index, element)| predicate(element, index));
    trace_op!(op = "every", len = seq.len(), result = all);
    all
}
