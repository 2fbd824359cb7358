//! The algebra the tree is generic over.
//!
//! A tree stores *summaries*: values that describe a whole segment of the
//! underlying array, like its sum, its minimum, or how many brackets in it match.
//! Summaries are combined with `+`, which must be associative, but doesn't have
//! to be commutative: the left segment's summary always goes on the left.
//! `Default::default()` must return the summary of the empty segment, i.e.,
//! `S::default() + s == s + S::default() == s`.
//!
//! A tree also stores *actions*: pending modifications that should be applied
//! to every element of a segment. See [`Action`].

pub mod example_data;

use std::ops::Add;

/// Marker trait for the summaries that can be stored in a tree.
/// Implemented automatically for every type with the right bounds.
pub trait Summary: Clone + Default + Add<Output = Self> {}

impl<S: Clone + Default + Add<Output = S>> Summary for S {}

/// An update that can be applied to a whole segment at once.
///
/// The following laws should hold, for every summary `s` of a segment of length `len`:
/// * `b.act(a.act(s, len), len) == b.compose(&a).act(s, len)`
/// * acting on a segment is the same as acting on its two halves and adding them up:
///   `a.act(l + r, len_l + len_r) == a.act(l, len_l) + a.act(r, len_r)`
pub trait Action<S>: Clone {
    /// Compose two actions. `self` is the later one, i.e.,
    /// `later.compose(&earlier)` is the action of applying `earlier` first and `later` second.
    fn compose(&self, earlier: &Self) -> Self;

    /// Apply the action to the summary of a segment with `len` elements.
    fn act(&self, summary: S, len: usize) -> S;
}

/// The empty action. Use it for trees that only answer queries.
impl<S> Action<S> for () {
    fn compose(&self, _earlier: &()) {}

    fn act(&self, summary: S, _len: usize) -> S {
        summary
    }
}
