//! Error types for the tree.

use thiserror::Error;

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong when mutating a [`Tree`](crate::Tree).
///
/// Looking up or deleting an id that isn't in the tree is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A record with this id is already stored. The tree was left unchanged.
    #[error("duplicate key: a record with id {0} is already in the tree")]
    DuplicateKey(i64),
}
