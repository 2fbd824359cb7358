//! The segment tree module.
//!
//! This module implements a segment tree with lazy propagation over a fixed-length
//! array, generic over the [`Summary`] that is accumulated and the [`Action`]
//! that is applied to ranges. See [`SegmentTree`].

mod node;

use std::ops::{Bound, RangeBounds};

use crate::data::*;
use crate::error::{Error, Result};
use crate::filters::Filter;
use crate::search::Boundary;
use node::Node;

/// A segment tree with lazy propagation, answering range queries
/// and applying range updates in `O(log n)` time.
///
/// The tree covers the indices `0..len`, and its length is fixed at construction.
/// All ranges in the index-pair methods are inclusive, i.e., `query(lo, hi)` accumulates
/// the elements `lo..=hi`, from left to right. Ranges that are inverted (`lo > hi`)
/// or that lie outside the tree are treated as empty: queries return `S::default()` and
/// updates do nothing. Use [`SegmentTree::try_query`] and [`SegmentTree::try_update`]
/// to get an error instead.
///
/// Even the queries take `&mut self`, because they push pending actions down the tree.
///
/// ```
/// use sapling::SegmentTree;
/// use sapling::example_data::{Add, Sum};
///
/// let mut tree: SegmentTree<Sum, Add> = vec![1, 2, 3, 4, 5]
///     .into_iter()
///     .map(Sum::new)
///     .collect::<Vec<_>>()
///     .try_into()
///     .unwrap();
/// assert_eq!(tree.query(0, 4).sum, 15);
/// tree.update(1, 3, Add(10));
/// assert_eq!(tree.query(0, 4).sum, 45);
/// assert_eq!(tree.query(1, 3).sum, 39);
/// assert_eq!(tree.point_query(0).sum, 1);
/// ```
#[derive(Clone, Debug)]
pub struct SegmentTree<S, A = ()> {
    root: Node<S, A>,
}

impl<S: Summary, A: Action<S>> SegmentTree<S, A> {
    /// Builds a tree over `0..len`, where `init(i)` is the summary of the `i`-th element.
    /// `init` is called exactly once per index, in increasing order.
    ///
    /// Fails with [`Error::EmptyTree`] if `len == 0`.
    ///
    /// O(n)
    pub fn from_fn<F>(len: usize, mut init: F) -> Result<Self>
    where
        F: FnMut(usize) -> S,
    {
        if len == 0 {
            return Err(Error::EmptyTree);
        }
        tracing::debug!(len, "building segment tree");
        Ok(SegmentTree {
            root: Node::build(&mut init, 0, len - 1),
        })
    }

    /// The number of elements in the tree. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.root.rightmost() + 1
    }

    /// The summary of the whole tree. Equivalent to `query(0, len - 1)`.
    /// O(1)
    pub fn total(&self) -> S {
        self.root.summary().clone()
    }

    /// Accumulates the summaries of `lo..=hi`.
    /// O(log n)
    pub fn query(&mut self, lo: usize, hi: usize) -> S {
        self.root.query(lo, hi)
    }

    /// Applies `action` to every element of `lo..=hi`, lazily.
    /// O(log n)
    pub fn update(&mut self, lo: usize, hi: usize, action: A) {
        self.root.update(lo, hi, &action);
    }

    /// The summary of the element at `index`. Same as `query(index, index)`.
    pub fn point_query(&mut self, index: usize) -> S {
        self.query(index, index)
    }

    /// Applies `action` to the element at `index`. Same as `update(index, index, action)`.
    pub fn point_update(&mut self, index: usize, action: A) {
        self.update(index, index, action)
    }

    /// Like [`SegmentTree::query`], for a range given with Rust range syntax, e.g., `2..5` or `3..`.
    pub fn query_range<R: RangeBounds<usize>>(&mut self, range: R) -> S {
        match self.inclusive_bounds(&range) {
            Some((lo, hi)) => self.query(lo, hi),
            None => S::default(),
        }
    }

    /// Like [`SegmentTree::update`], for a range given with Rust range syntax.
    pub fn update_range<R: RangeBounds<usize>>(&mut self, range: R, action: A) {
        if let Some((lo, hi)) = self.inclusive_bounds(&range) {
            self.update(lo, hi, action);
        }
    }

    /// Like [`SegmentTree::query`], but fails if `lo..=hi` isn't a non-empty range inside the tree.
    pub fn try_query(&mut self, lo: usize, hi: usize) -> Result<S> {
        self.check_range(lo, hi)?;
        Ok(self.query(lo, hi))
    }

    /// Like [`SegmentTree::update`], but fails if `lo..=hi` isn't a non-empty range inside the tree.
    pub fn try_update(&mut self, lo: usize, hi: usize, action: A) -> Result<()> {
        self.check_range(lo, hi)?;
        self.update(lo, hi, action);
        Ok(())
    }

    /// Same as [`SegmentTree::query`], except that only the segments accepted by the filter
    /// are accumulated. Whenever `query` would accumulate a whole segment, the filter
    /// is called on its summary instead:
    /// * [`Verdict::Accept`](crate::Verdict::Accept): the segment is accumulated.
    /// * [`Verdict::Reject`](crate::Verdict::Reject): the segment is dropped.
    /// * [`Verdict::Descend`](crate::Verdict::Descend): the two halves of the segment
    ///   are examined, left half first. A single element is dropped.
    ///
    /// The running time depends on the filter, and might be as bad as O(n):
    /// if the filter always descends, every element in the range is visited.
    pub fn query_if<F: Filter<S>>(&mut self, lo: usize, hi: usize, filter: F) -> S {
        self.root.query_if(lo, hi, &filter)
    }

    /// Applies `action` to the segments of `lo..=hi` accepted by the filter.
    /// The filter has the same effect as in [`SegmentTree::query_if`].
    pub fn update_if<F: Filter<S>>(&mut self, lo: usize, hi: usize, action: A, filter: F) {
        self.root.update_if(lo, hi, &action, &filter);
    }

    /// Searches for the first index `hi` such that `!pred(&query(lo, hi), target)`.
    ///
    /// `pred` is intuitively a `<` operator, and must be monotone: once
    /// `pred(&query(lo, hi), target)` is false, it has to stay false for every larger `hi`.
    /// This isn't checked, unless the `search_checks` feature is enabled. With a
    /// predicate that isn't monotone, the result is meaningless.
    ///
    /// Returns [`Boundary::Empty`] if `!pred(&S::default(), target)`, and
    /// [`Boundary::NotFound`] if no such index exists.
    ///
    /// O(log n)
    pub fn lower_bound<P>(&mut self, lo: usize, target: &S, pred: P) -> Boundary
    where
        P: Fn(&S, &S) -> bool,
    {
        self.search(lo, |acc: &S| !pred(acc, target))
    }

    /// Searches for the first index `hi` such that `pred(target, &query(lo, hi))`.
    /// See [`SegmentTree::lower_bound`] for the requirements on `pred`.
    ///
    /// O(log n)
    pub fn upper_bound<P>(&mut self, lo: usize, target: &S, pred: P) -> Boundary
    where
        P: Fn(&S, &S) -> bool,
    {
        self.search(lo, |acc: &S| pred(target, acc))
    }

    /// Returns the summaries of all of the elements, in order.
    ///
    /// Since it pushes at every node of the tree, it runs in O(n log n) time.
    pub fn contents(&mut self) -> Vec<S> {
        let mut res = Vec::with_capacity(self.len());
        self.root.contents(&mut res);
        res
    }

    fn search<C>(&mut self, lo: usize, crossed: C) -> Boundary
    where
        C: Fn(&S) -> bool,
    {
        let (raw_end, _) = self.root.search(lo, &crossed, S::default());
        let res = Boundary::from_raw_end(raw_end, lo, self.len());
        tracing::trace!(lo, ?res, "prefix search");
        if cfg!(feature = "search_checks") {
            self.check_boundary(lo, res, &crossed);
        }
        res
    }

    /// Verifies a search result by walking every prefix from `lo`, one element at a time.
    /// Panics if a prefix before the boundary crosses, or if the boundary itself doesn't.
    ///
    /// O(n log n)
    fn check_boundary<C>(&mut self, lo: usize, res: Boundary, crossed: &C)
    where
        C: Fn(&S) -> bool,
    {
        const NOT_MONOTONE: &str = "search predicate isn't monotone";
        if lo >= self.len() {
            return;
        }
        let mut acc = S::default();
        if res == Boundary::Empty {
            assert!(crossed(&acc), "{}: the empty prefix doesn't cross", NOT_MONOTONE);
            return;
        }
        assert!(!crossed(&acc), "{}: the empty prefix crosses", NOT_MONOTONE);
        let end = res.end(lo, self.len()).max(lo);
        for index in lo..end {
            acc = acc + self.point_query(index);
            assert!(
                !crossed(&acc),
                "{}: prefix {}..={} crosses before {:?}",
                NOT_MONOTONE,
                lo,
                index,
                res
            );
        }
        if let Boundary::At(hi) = res {
            acc = acc + self.point_query(hi);
            assert!(crossed(&acc), "{}: prefix {}..={} doesn't cross", NOT_MONOTONE, lo, hi);
        }
    }

    fn check_range(&self, lo: usize, hi: usize) -> Result<()> {
        let len = self.len();
        if lo > hi || hi >= len {
            tracing::debug!(lo, hi, len, "rejected range");
            return Err(Error::InvalidRange { lo, hi, len });
        }
        Ok(())
    }

    /// Converts a range to inclusive bounds. Returns `None` for empty ranges.
    fn inclusive_bounds<R: RangeBounds<usize>>(&self, range: &R) -> Option<(usize, usize)> {
        let lo = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.checked_add(1)?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => self.len(),
        };
        if lo >= end {
            None
        } else {
            Some((lo, end - 1))
        }
    }
}

impl<S: Summary, A: Action<S>> TryFrom<Vec<S>> for SegmentTree<S, A> {
    type Error = Error;

    /// Builds a tree whose elements are the given summaries.
    fn try_from(values: Vec<S>) -> Result<Self> {
        let len = values.len();
        let mut values = values.into_iter();
        // `from_fn` calls the initializer in increasing index order
        SegmentTree::from_fn(len, |_| values.next().unwrap_or_default())
    }
}
