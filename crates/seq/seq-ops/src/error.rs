use thiserror::Error;

/// Errors produced by this crate.
///
/// Searches themselves return `Option`; this type exists for callers that
/// prefer to treat a miss as an error and propagate it with `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeqError {
    /// No element satisfied the predicate
    #[error("no element matched the predicate ({searched} searched)")]
    NotFound {
        /// Number of elements that were examined
        searched: usize,
    },
}

/// Converts search results into `Result<_, SeqError>`.
///
/// # Example
///
/// ```
/// use seq_ops::{find_index, OptionExt, SeqError};
///
/// fn first_negative(xs: &[i32]) -> Result<usize, SeqError> {
///     find_index(xs, |x, _| *x < 0).or_not_found(xs.len())
/// }
///
/// assert_eq!(first_negative(&[3, -1]), Ok(1));
/// assert_eq!(first_negative(&[3, 1]), Err(SeqError::NotFound { searched: 2 }));
/// ```
pub trait OptionExt<T> {
    /// `Some(v)` becomes `Ok(v)`; `None` becomes [`SeqError::NotFound`].
    fn or_not_found(self, searched: usize) -> Result<T, SeqError>;
}

impl<T> OptionExt<T> for Option<T> {
    fn or_not_found(self, searched: usize) -> Result<T, SeqError> {
        self.ok_or(SeqError::NotFound { searched })
    }
}
