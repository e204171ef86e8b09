#![deny(missing_docs)]

//! Index-aware higher-order operations over slices.
//!
//! Every operation borrows its input, hands each callback the element and its
//! zero-based position, and never mutates the sequence. Operations that
//! produce a sequence allocate a fresh `Vec`.
//!
//! - [`transform`]: [`filter`], [`map`], [`reduce`]
//! - [`quantifiers`]: [`some`], [`every`]
//! - [`search`]: [`find`], [`find_last`], [`find_index`], [`find_last_index`]
//! - [`fallible`]: `try_*` twins whose callbacks return `Result`
//! - [`sentinel`]: `-1` interop for index results
//!
//! # Example
//!
//! ```
//! use seq_ops::prelude::*;
//!
//! let xs = vec![1, 2, 3, 4, 5];
//! let even = |x: &i32, _: usize| x % 2 == 0;
//!
//! assert_eq!(filter(&xs, even), vec![2, 4]);
//! assert_eq!(find_index(&xs, even), Some(1));
//! assert_eq!(find_last_index(&xs, even), Some(3));
//! assert_eq!(map(&[1, 2, 3], |x, _| x * x), vec![1, 4, 9]);
//! assert_eq!(reduce(&xs, |acc, x, _| acc + x, 0), 15);
//!
//! // Method syntax through the extension trait
//! assert!(xs.some(|x, _| *x > 4));
//! assert_eq!(xs.find_last(even), Some(&4));
//! ```

mod trace;

/// Error type for "not found" results
pub mod error;
/// Method-syntax extension trait over slices
pub mod ext;
/// Operations whose callbacks can fail
pub mod fallible;
/// `some` / `every`
pub mod quantifiers;
/// Forward and reverse searches
pub mod search;
/// Conversions between `Option<usize>` and the `-1` sentinel
pub mod sentinel;
/// `filter` / `map` / `reduce`
pub mod transform;

pub use crate::error::{OptionExt, SeqError};
pub use crate::ext::SeqExt;
pub use crate::fallible::{
    try_every, try_filter, try_find, try_find_index, try_find_last, try_find_last_index, try_map,
    try_reduce, try_some,
};
pub use crate::quantifiers::{every, some};
pub use crate::search::{find, find_index, find_last, find_last_index};
pub use crate::sentinel::{NOT_FOUND, from_sentinel, to_sentinel};
pub use crate::transform::{filter, map, reduce};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{OptionExt, SeqError};
    pub use crate::ext::SeqExt;
    pub use crate::fallible::*;
    pub use crate::quantifiers::*;
    pub use crate::search::*;
    pub use crate::transform::*;
}
