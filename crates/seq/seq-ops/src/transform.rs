//! Operations that derive a new value from every element.

use crate::trace::trace_op;

/// Keep the elements for which `predicate(element, index)` holds.
///
/// Relative order is preserved. Matching elements are cloned into a new
/// `Vec`, so the input is left untouched.
///
/// # Example
///
/// ```
/// use seq_ops::filter;
///
/// let odd_positions = filter(&["a", "b", "c", "d"], |_, i| i % 2 == 1);
/// assert_eq!(odd_positions, vec!["b", "d"]);
/// ```
pub fn filter<T, P>(seq: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T, usize) -> bool,
{
    let kept: Vec<T> = seq
        .iter()
        .enumerate()
        .filter(|(index, element)| predicate(*element, *index))
        .map(|(_, element)| element.clone())
        .collect();
    trace_op!(op = "filter", len = seq.len(), kept = kept.len());
    kept
}

/// Build a same-length `Vec` whose element `i` is `transform(&seq[i], i)`.
pub fn map<T, U, F>(seq: &[T], mut transform: F) -> Vec<U>
where
    F: FnMut(&T, usize) -> U,
{
    let mapped: Vec<U> = seq
        .iter()
        .enumerate()
        .map(|(index, element)| transform(element, index))
        .collect();
    trace_op!(op = "map", len = seq.len());
    mapped
}

/// Left fold: `acc = accumulator(acc, element, index)` starting at `initial`.
///
/// An empty slice returns `initial` without calling `accumulator`.
///
/// # Example
///
/// ```
/// use seq_ops::reduce;
///
/// let weighted = reduce(&[10, 20, 30], |acc, x, i| acc + x * i as i32, 0);
/// assert_eq!(weighted, 80);
/// ```
pub fn reduce<T, A, F>(seq: &[T], mut accumulator: F, initial: A) -> A
where
    F: FnMut(A, &T, usize) -> A,
{
    let folded = seq
        .iter()
        .enumerate()
        .fold(initial, |acc, (index, element)| {
            accumulator(acc, element, index)
        });
    trace_op!(op = "reduce", len = seq.len());
    folded
}
