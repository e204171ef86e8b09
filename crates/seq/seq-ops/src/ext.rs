//! Method syntax for the free functions.
//!
//! `SeqExt` is implemented for `[T]`, so it applies to `Vec<T>` and boxed
//! slices through deref. Arrays have an inherent `map` that takes
//! precedence; call `.as_slice()` first to reach [`SeqExt::map`].

/// Index-aware higher-order operations as methods.
pub trait SeqExt<T> {
    /// See [`crate::filter`].
    fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T, usize) -> bool;

    /// See [`crate::map`].
    fn map<U, F>(&self, transform: F) -> Vec<U>
    where
        F: FnMut(&T, usize) -> U;

    /// See [`crate::reduce`].
    fn reduce<A, F>(&self, accumulator: F, initial: A) -> A
    where
        F: FnMut(A, &T, usize) -> A;

    /// See [`crate::some`].
    fn some<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T, usize) -> bool;

    /// See [`crate::every`].
    fn every<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T, usize) -> bool;

    /// See [`crate::find`].
    fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&T, usize) -> bool;

    /// See [`crate::find_last`].
    fn find_last<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&T, usize) -> bool;

    /// See [`crate::find_index`].
    fn find_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T, usize) -> bool;

    /// See [`crate::find_last_index`].
    fn find_last_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T, usize) -> bool;

    /// See [`crate::try_map`].
    fn try_map<U, E, F>(&self, transform: F) -> Result<Vec<U>, E>
    where
        F: FnMut(&T, usize) -> Result<U, E>;

    /// See [`crate::try_reduce`].
    fn try_reduce<A, E, F>(&self, accumulator: F, initial: A) -> Result<A, E>
    where
        F: FnMut(A, &T, usize) -> Result<A, E>;

    /// See [`crate::try_filter`].
    fn try_filter<E, P>(&self, predicate: P) -> Result<Vec<T>, E>
    where
        T: Clone,
        P: FnMut(&T, usize) -> Result<bool, E>;

    /// See [`crate::try_some`].
    fn try_some<E, P>(&self, predicate: P) -> Result<bool, E>
    where
        P: FnMut(&T, usize) -> Result<bool, E>;

    /// See [`crate::try_every`].
    fn try_every<E, P>(&self, predicate: P) -> Result<bool, E>
    where
        P: FnMut(&T, usize) -> Result<bool, E>;

    /// See [`crate::try_find`].
    fn try_find<E, P>(&self, predicate: P) -> Result<Option<&T>, E>
    where
        P: FnMut(&T, usize) -> Result<bool, E>;

    /// See [`crate::try_find_last`].
    fn try_find_last<E, P>(&self, predicate: P) -> Result<Option<&T>, E>
    where
        P: FnMut(&T, usize) -> Result<bool, E>;

    /// See [`crate::try_find_index`].
    fn try_find_index<E, P>(&self, predicate: P) -> Result<Option<usize>, E>
    where
        P: FnMut(&T, usize) -> Result<bool, E>;

    /// See [`crate::try_find_last_index`].
    fn try_find_last_index<E, P>(&self, predicate: P) -> Result<Option<usize>, E>
    where
        P: FnMut(&T, usize) -> Result<bool, E>;
}

impl<T> SeqExt<T> for [T] {
    fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T, usize) -> bool,
    {
        crate::transform::filter(self, predicate)
    }

    fn map<U, F>(&self, transform: F) -> Vec<U>
    where
        F: FnMut(&T, usize) -> U,
    {
        crate::transform::map(self, transform)
    }

    fn reduce<A, F>(&self, accumulator: F, initial: A) -> A
    where
        F: FnMut(A, &T, usize) -> A,
    {
        crate::transform::reduce(self, accumulator, initial)
    }

    fn some<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T, usize) -> bool,
    {
        crate::quantifiers::some(self, predicate)
    }

    fn every<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T, usize) -> bool,
    {
        crate::quantifiers::every(self, predicate)
    }

    fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&T, usize) -> bool,
    {
        crate::search::find(self, predicate)
    }

    fn find_last<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&T, usize) -> bool,
    {
        crate::search::find_last(self, predicate)
    }

    fn find_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T, usize) -> bool,
    {
        crate::search::find_index(self, predicate)
    }

    fn find_last_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T, usize) -> bool,
    {
        crate::search::find_last_index(self, predicate)
    }

    fn try_map<U, E, F>(&self, transform: F) -> Result<Vec<U>, E>
    where
        F: FnMut(&T, usize) -> Result<U, E>,
    {
        crate::fallible::try_map(self, transform)
    }

    fn try_reduce<A, E, F>(&self, accumulator: F, initial: A) -> Result<A, E>
    where
        F: FnMut(A, &T, usize) -> Result<A, E>,
    {
        crate::fallible::try_reduce(self, accumulator, initial)
    }

    fn try_filter<E, P>(&self, predicate: P) -> Result<Vec<T>, E>
    where
        T: Clone,
        P: FnMut(&T, usize) -> Result<bool, E>,
    {
        crate::fallible::try_filter(self, predicate)
    }

    fn try_some<E, P>(&self, predicate: P) -> Result<bool, E>
    where
        P: FnMut(&T, usize) -> Result<bool, E>,
    {
        crate::fallible::try_some(self, predicate)
    }

    fn try_every<E, P>(&self, predicate: P) -> Result<bool, E>
    where
        P: FnMut(&T, usize) -> Result<bool, E>,
    {
        crate::fallible::try_every(self, predicate)
    }

    fn try_find<E, P>(&self, predicate: P) -> Result<Option<&T>, E>
    where
        P: FnMut(&T, usize) -> Result<bool, E>,
    {
        crate::fallible::try_find(self, predicate)
    }

    fn try_find_last<E, P>(&self, predicate: P) -> Result<Option<&T>, E>
    where
        P: FnMut(&T, usize) -> Result<bool, E>,
    {
        crate::fallible::try_find_last(self, predicate)
    }

    fn try_find_index<E, P>(&self, predicate: P) -> Result<Option<usize>, E>
    where
        P: FnMut(&T, usize) -> Result<bool, E>,
    {
        crate::fallible::try_find_index(self, predicate)
    }

    fn try_find_last_index<E, P>(&self, predicate: P) -> Result<Option<usize>, E>
    where
        P: FnMut(&T, usize) -> Result<bool, E>,
    {
        crate::fallible::try_find_last_index(self, predicate)
    }
}
