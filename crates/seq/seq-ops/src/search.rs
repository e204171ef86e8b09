//! Forward and reverse searches.
//!
//! `find` and `find_index` scan from index 0 upwards; the `_last` variants
//! scan from `len - 1` down to 0 and stop at the first match, so callbacks
//! see descending indices. Values are returned as borrows into the input.

use crate::trace::trace_op;

fn scan_forward<T, P>(seq: &[T], mut predicate: P) -> Option<usize>
where
    P: FnMut(&T, usize) -> bool,
{
    seq.iter()
        .enumerate()
        .find_map(|(index, element)| predicate(element, index).then_some(index))
}

fn scan_reverse<T, P>(seq: &[T], mut predicate: P) -> Option<usize>
where
    P: FnMut(&T, usize) -> bool,
{
    seq.iter()
        .enumerate()
        .rev()
        .find_map(|(index, element)| predicate(element, index).then_some(index))
}

/// First element satisfying `predicate`, scanning forward.
///
/// # Example
///
/// ```
/// use seq_ops::find;
///
/// let words = vec!["apple", "banana", "blueberry"];
/// assert_eq!(find(&words, |w, _| w.starts_with('b')), Some(&"banana"));
/// assert_eq!(find(&words, |w, _| w.is_empty()), None);
/// ```
pub fn find<T, P>(seq: &[T], predicate: P) -> Option<&T>
where
    P: FnMut(&T, usize) -> bool,
{
    let matched = scan_forward(seq, predicate);
    trace_op!(op = "find", len = seq.len(), matched = ?matched);
    matched.and_then(|index| seq.get(index))
}

/// Last element satisfying `predicate`, scanning from the end.
pub fn find_last<T, P>(seq: &[T], predicate: P) -> Option<&T>
where
    P: FnMut(&T, usize) -> bool,
{
    let matched = scan_reverse(seq, predicate);
    trace_op!(op = "find_last", len = seq.len(), matched = ?matched);
    matched.and_then(|index| seq.get(index))
}

/// Index of the first element satisfying `predicate`.
///
/// Use [`crate::sentinel::to_sentinel`] when a `-1` result is needed.
pub fn find_index<T, P>(seq: &[T], predicate: P) -> Option<usize>
where
    P: FnMut(&T, usize) -> bool,
{
    let matched = scan_forward(seq, predicate);
    trace_op!(op = "find_index", len = seq.len(), matched = ?matched);
    matched
}

/// Index of the last element satisfying `predicate`, scanning from the end.
pub fn find_last_index<T, P>(seq: &[T], predicate: P) -> Option<usize>
where
    P: FnMut(&T, usize) -> bool,
{
    let matched = scan_reverse(seq, predicate);
    trace_op!(op = "find_last_index", len = seq.len(), matched = ?matched);
    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn even(x: &i32, _: usize) -> bool {
        x % 2 == 0
    }

    #[test]
    fn find_index_first_even() {
        assert_eq!(find_index(&[1, 2, 3, 4, 5], even), Some(1));
    }

    #[test]
    fn find_last_index_last_even() {
        assert_eq!(find_last_index(&[1, 2, 3, 4, 5], even), Some(3));
    }

    #[test]
    fn find_returns_borrow_into_input() {
        let xs = vec![1, 2, 3, 4, 5];
        let hit = find(&xs, even);
        assert!(hit.is_some_and(|x| std::ptr::eq(x, &xs[1])));
    }

    #[test]
    fn find_last_returns_last_match() {
        let xs = vec![(1, 'a'), (2, 'b'), (1, 'c')];
        assert_eq!(find_last(&xs, |pair, _| pair.0 == 1), Some(&(1, 'c')));
    }

    #[test]
    fn misses_are_none() {
        let xs = vec![1, 3, 5];
        assert_eq!(find(&xs, even), None);
        assert_eq!(find_last(&xs, even), None);
        assert_eq!(find_index(&xs, even), None);
        assert_eq!(find_last_index(&xs, even), None);
    }

    #[test]
    fn reverse_scan_visits_descending_indices() {
        let xs = vec![10, 20, 30, 40];
        let mut seen = Vec::new();
        let hit = find_last_index(&xs, |x, i| {
            seen.push(i);
            *x == 20
        });
        assert_eq!(hit, Some(1));
        assert_eq!(seen, vec![3, 2, 1]);
    }

    #[test]
    fn forward_scan_stops_at_first_match() {
        let xs = vec![0, 7, 7, 7];
        let mut calls = 0;
        let hit = find(&xs, |x, _| {
            calls += 1;
            *x == 7
        });
        assert_eq!(hit, Some(&7));
        assert_eq!(calls, 2);
    }

    #[test]
    fn empty_input_never_calls_predicate() {
        let xs: Vec<i32> = vec![];
        let mut calls = 0;
        let mut count = |_: &i32, _: usize| {
            calls += 1;
            true
        };
        assert_eq!(find(&xs, &mut count), None);
        assert_eq!(find_last(&xs, &mut count), None);
        assert_eq!(find_index(&xs, &mut count), None);
        assert_eq!(find_last_index(&xs, &mut count), None);
        assert_eq!(calls, 0);
    }
}
