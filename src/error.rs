//! Error types for the checked entry points of the tree.

use thiserror::Error;

/// Errors reported by construction and by the `try_*` methods of
/// [`SegmentTree`](crate::SegmentTree).
///
/// The unchecked methods never fail: they treat inverted or out-of-bounds
/// ranges as empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A tree must cover at least one index.
    #[error("cannot build a segment tree over an empty range")]
    EmptyTree,

    /// The inclusive range `[lo, hi]` is inverted or reaches past the end of the tree.
    #[error("invalid range [{lo}, {hi}] for a tree of length {len}")]
    InvalidRange { lo: usize, hi: usize, len: usize },
}

/// A specialized Result type for segment tree operations.
pub type Result<T> = std::result::Result<T, Error>;
