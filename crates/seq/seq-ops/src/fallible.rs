//! Operations whose callbacks return `Result`.
//!
//! Each `try_*` function matches its infallible counterpart for callbacks
//! that always return `Ok`. The first `Err` ends the iteration and is
//! returned exactly as the callback produced it; anything built up to that
//! point is dropped.
//!
//! ```
//! use seq_ops::try_map;
//!
//! let parsed: Result<Vec<i32>, _> = try_map(&["1", "2", "x"], |s, _| s.parse::<i32>());
//! assert!(parsed.is_err());
//! ```

use crate::trace::trace_op;

/// Fallible [`crate::filter`].
pub fn try_filter<T, E, P>(seq: &[T], mut predicate: P) -> Result<Vec<T>, E>
where
    T: Clone,
    P: FnMut(&T, usize) -> Result<bool, E>,
{
    let mut kept = Vec::new();
    for (index, element) in seq.iter().enumerate() {
        if predicate(element, index)? {
            kept.push(element.clone());
        }
    }
    trace_op!(op = "try_filter", len = seq.len(), kept = kept.len());
    Ok(kept)
}

/// Fallible [`crate::map`].
pub fn try_map<T, U, E, F>(seq: &[T], mut transform: F) -> Result<Vec<U>, E>
where
    F: FnMut(&T, usize) -> Result<U, E>,
{
    let mapped = seq
        .iter()
        .enumerate()
        .map(|(index, element)| transform(element, index))
        .collect::<Result<Vec<U>, E>>()?;
    trace_op!(op = "try_map", len = seq.len());
    Ok(mapped)
}

/// Fallible [`crate::reduce`].
pub fn try_reduce<T, A, E, F>(seq: &[T], mut accumulator: F, initial: A) -> Result<A, E>
where
    F: FnMut(A, &T, usize) -> Result<A, E>,
{
    let folded = seq
        .iter()
        .enumerate()
        .try_fold(initial, |acc, (index, element)| {
            accumulator(acc, element, index)
        })?;
    trace_op!(op = "try_reduce", len = seq.len());
    Ok(folded)
}

/// Fallible [`crate::some`].
pub fn try_some<T, E, P>(seq: &[T], predicate: P) -> Result<bool, E>
where
    P: FnMut(&T, usize) -> Result<bool, E>,
{
    let found = try_scan_forward(seq, predicate)?.is_some();
    trace_op!(op = "try_some", len = seq.len(), result = found);
    Ok(found)
}

/// Fallible [`crate::every`].
pub fn try_every<T, E, P>(seq: &[T], mut predicate: P) -> Result<bool, E>
where
    P: FnMut(&T, usize) -> Result<bool, E>,
{
    let failed = try_scan_forward(seq, |element, index| {
        predicate(element, index).map(|ok| !ok)
    })?;
    let all = failed.is_none();
    trace_op!(op = "try_every", len = seq.len(), result = all);
    Ok(all)
}

/// Fallible [`crate::find`].
pub fn try_find<T, E, P>(seq: &[T], predicate: P) -> Result<Option<&T>, E>
where
    P: FnMut(&T, usize) -> Result<bool, E>,
{
    let matched = try_scan_forward(seq, predicate)?;
    trace_op!(op = "try_find", len = seq.len(), matched = ?matched);
    Ok(matched.and_then(|index| seq.get(index)))
}

/// Fallible [`crate::find_last`].
pub fn try_find_last<T, E, P>(seq: &[T], predicate: P) -> Result<Option<&T>, E>
where
    P: FnMut(&T, usize) -> Result<bool, E>,
{
    let matched = try_scan_reverse(seq, predicate)?;
    trace_op!(op = "try_find_last", len = seq.len(), matched = ?matched);
    Ok(matched.and_then(|index| seq.get(index)))
}

/// Fallible [`crate::find_index`].
pub fn try_find_index<T, E, P>(seq: &[T], predicate: P) -> Result<Option<usize>, E>
where
    P: FnMut(&T, usize) -> Result<bool, E>,
{
    let matched = try_scan_forward(seq, predicate)?;
    trace_op!(op = "try_find_index", len = seq.len(), matched = ?matched);
    Ok(matched)
}

/// Fallible [`crate::find_last_index`].
pub fn try_find_last_index<T, E, P>(seq: &[T], predicate: P) -> Result<Option<usize>, E>
where
    P: FnMut(&T, usize) -> Result<bool, E>,
{
    let matched = try_scan_reverse(seq, predicate)?;
    trace_op!(op = "try_find_last_index", len = seq.len(), matched = ?matched);
    Ok(matched)
}

fn try_scan_forward<T, E, P>(seq: &[T], mut predicate: P) -> Result<Option<usize>, E>
where
    P: FnMut(&T, usize) -> Result<bool, E>,
{
    for (index, element) in seq.iter().enumerate() {
        if predicate(element, index)? {
            return Ok(Some(index));
        }
    }
    Ok(None)
}

fn try_scan_reverse<T, E, P>(seq: &[T], mut predicate: P) -> Result<Option<usize>, E>
where
    P: FnMut(&T, usize) -> Result<bool, E>,
{
    for (index, element) in seq.iter().enumerate().rev() {
        if predicate(element, index)? {
            return Ok(Some(index));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    struct Boom(usize);

    fn fail_at(bad: usize) -> impl FnMut(&i32, usize) -> Result<bool, Boom> {
        move |x, i| if i == bad { Err(Boom(i)) } else { Ok(x % 2 == 0) }
    }

    #[test]
    fn try_filter_ok_matches_filter() {
        let xs = vec![1, 2, 3, 4, 5];
        let out: Result<Vec<i32>, Boom> = try_filter(&xs, |x, _| Ok(x % 2 == 0));
        assert_eq!(out, Ok(crate::filter(&xs, |x, _| x % 2 == 0)));
    }

    #[test]
    fn try_filter_returns_callback_error_unchanged() {
        let xs = vec![1, 2, 3, 4, 5];
        assert_eq!(try_filter(&xs, fail_at(2)), Err(Boom(2)));
    }

    #[test]
    fn try_map_stops_at_first_error() {
        let xs = vec!["1", "2", "x", "y"];
        let mut calls = 0;
        let out = try_map(&xs, |s, _| {
            calls += 1;
            s.parse::<i32>()
        });
        assert!(out.is_err());
        assert_eq!(calls, 3);
    }

    #[test]
    fn try_map_ok() {
        let out: Result<Vec<usize>, Boom> = try_map(&["a", "bb"], |s, i| Ok(s.len() + i));
        assert_eq!(out, Ok(vec![1, 3]));
    }

    #[test]
    fn try_reduce_propagates_error() {
        let xs = vec![1u8, 200, 100];
        let sum = try_reduce(
            &xs,
            |acc: u8, x, i| acc.checked_add(*x).ok_or(Boom(i)),
            0,
        );
        assert_eq!(sum, Err(Boom(2)));
    }

    #[test]
    fn try_reduce_empty_returns_initial() {
        let xs: Vec<u8> = vec![];
        let out: Result<&str, Boom> = try_reduce(&xs, |_, _, i| Err(Boom(i)), "init");
        assert_eq!(out, Ok("init"));
    }

    #[test]
    fn try_some_error_before_match_wins() {
        let xs = vec![1, 3, 4];
        assert_eq!(try_some(&xs, fail_at(1)), Err(Boom(1)));
    }

    #[test]
    fn try_some_match_before_error_wins() {
        let xs = vec![2, 3, 4];
        assert_eq!(try_some(&xs, fail_at(1)), Ok(true));
    }

    #[test]
    fn try_every_short_circuits() {
        let xs = vec![2, 3, 4];
        assert_eq!(try_every(&xs, fail_at(2)), Ok(false));
        assert_eq!(try_every(&[] as &[i32], fail_at(0)), Ok(true));
    }

    #[test]
    fn try_find_family() {
        let xs = vec![1, 2, 3, 4, 5];
        assert_eq!(try_find(&xs, fail_at(9)), Ok(Some(&2)));
        assert_eq!(try_find_last(&xs, fail_at(9)), Ok(Some(&4)));
        assert_eq!(try_find_index(&xs, fail_at(9)), Ok(Some(1)));
        assert_eq!(try_find_last_index(&xs, fail_at(9)), Ok(Some(3)));
    }

    #[test]
    fn try_find_last_scans_from_the_end() {
        let xs = vec![1, 2, 3, 5];
        // index 3 is odd, index 2 fails before index 1 could match
        assert_eq!(try_find_last_index(&xs, fail_at(2)), Err(Boom(2)));
        assert_eq!(try_find_last(&xs, fail_at(0)), Ok(Some(&2)));
    }
}
