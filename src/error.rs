//! Error types for map operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by fallible map operations.
///
/// Lookup misses are not errors: `get` returns `Option`, and the keyed
/// `Index` impl panics like the std maps do. Only operations whose contract
/// can actually be violated return one of these.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum Error {
    /// A duplicate-intolerant insert was given a key the map already holds.
    #[error("duplicate key")]
    DuplicateKey,

    /// A positional query was given an index at or past the entry count.
    #[error("index {index} out of range for map of {len} entries")]
    OutOfRange { index: usize, len: usize },

    /// A cursor observed a mutation made after it was created. The cursor
    /// is permanently invalid; obtain a fresh one from the map.
    #[error("map modified during traversal")]
    Modified,
}
