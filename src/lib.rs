//! A segment tree library with lazy propagation, generic over user-defined
//! summaries and actions.
//!
//! The tree stores a fixed-length array, and supports, in `O(log n)` time:
//! * accumulating the summary of a range ([`SegmentTree::query`]),
//! * applying an action to every element of a range ([`SegmentTree::update`]),
//! * searching for the shortest prefix of a suffix whose summary crosses a monotone
//!   predicate ([`SegmentTree::lower_bound`], [`SegmentTree::upper_bound`]).
//!
//! It also supports the conditional operations [`SegmentTree::query_if`] and
//! [`SegmentTree::update_if`], which only use the parts of a range that a [`Filter`] accepts.
//!
//! The summary type `S` must be [`Summary`]: `+` combines the summaries of two adjacent
//! segments and must be associative, and `S::default()` is the summary of the empty segment.
//! The action type `A` must implement [`Action<S>`]. See [`example_data`] for
//! ready-made summaries and actions.

pub mod data;
pub mod error;
pub mod filters;
pub mod search;
pub mod segment_tree;

pub use data::example_data;
pub use data::{Action, Summary};
pub use error::{Error, Result};
pub use filters::{Filter, FromBool, Verdict};
pub use search::Boundary;
pub use segment_tree::SegmentTree;
