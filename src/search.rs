//! Results of the prefix searches,
//! [`SegmentTree::lower_bound`](crate::SegmentTree::lower_bound) and
//! [`SegmentTree::upper_bound`](crate::SegmentTree::upper_bound).

/// Where the accumulated prefix `lo..=hi` first crosses the searched predicate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Boundary {
    /// Even the empty prefix crosses the predicate.
    Empty,
    /// `query(lo, hi)` is the first prefix that crosses the predicate.
    At(usize),
    /// No prefix crosses the predicate, including the whole suffix starting at `lo`.
    NotFound,
}
use Boundary::*;

impl Boundary {
    /// The found index, if there is one.
    pub fn index(self) -> Option<usize> {
        match self {
            At(hi) => Some(hi),
            _ => None,
        }
    }

    /// The exclusive end of the longest prefix starting at `lo` that didn't cross the predicate,
    /// in a tree of length `len`.
    pub fn end(self, lo: usize, len: usize) -> usize {
        match self {
            Empty => lo,
            At(hi) => hi,
            NotFound => len,
        }
    }

    /// Translates the raw result of the recursive search, which is `hi + 1`
    /// for the first crossing index `hi`.
    pub(crate) fn from_raw_end(raw_end: usize, lo: usize, len: usize) -> Boundary {
        if lo >= len || raw_end > len {
            NotFound
        } else if raw_end == lo {
            Empty
        } else {
            At(raw_end - 1)
        }
    }
}
