//! Error and result types for repository operations.
//!
//! Use [`RepositoryResult<T>`] as the return type for fallible repository
//! operations.

use thiserror::Error;

/// Errors raised by document repository operations.
///
/// The in-memory repository never fails for well-formed inputs: a lookup on
/// an unknown id returns `None` and a search with no matches returns an
/// empty vec. `InvalidArgument` is the failure mode reserved for repository
/// adapters that can still receive an absent document or id across a
/// process boundary (FFI, a service layer).
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// A required argument was absent or malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// A specialized `Result` type for repository operations.
///
/// This type alias is used throughout the crate to indicate operations that
/// may fail with a [`RepositoryError`].
pub type RepositoryResult<T> = Result<T, RepositoryError>;
