//! Error types for fantree.

use thiserror::Error;

use crate::common::config::MIN_ORDER;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in fantree.
///
/// Only construction can fail with caller-supplied data. Everything else a
/// tree can do wrong is an internal invariant violation and panics instead
/// of surfacing here: a search miss is `None`, not an error, and a duplicate
/// insert is defined behavior (overwrite).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The requested order (minimum degree) is below [`MIN_ORDER`].
    ///
    /// No partially-constructed tree is returned.
    #[error("invalid order: {0} (must be at least {MIN_ORDER})")]
    InvalidOrder(usize),
}
