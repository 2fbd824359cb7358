//! The filter module provides the predicates of the conditional operations,
//! [`SegmentTree::query_if`](crate::SegmentTree::query_if) and
//! [`SegmentTree::update_if`](crate::SegmentTree::update_if).
//!
//! Whenever the plain operation would use a whole segment at once, the filter is asked
//! about that segment's summary, and decides whether to use the segment, to drop it,
//! or to look at its two halves separately. See [`Verdict`].

/// The answer of a [`Filter`] about a segment.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Verdict {
    /// Drop the whole segment. It won't be accumulated or updated,
    /// and none of its sub-segments will be visited.
    Reject,
    /// Look at the two halves of the segment separately, the left half first.
    /// A single element that gets this verdict is dropped.
    Descend,
    /// Use the whole segment, exactly like the unconditional operation would.
    Accept,
}
use Verdict::*;

impl From<bool> for Verdict {
    /// `true` accepts, `false` descends.
    fn from(accept: bool) -> Verdict {
        if accept {
            Accept
        } else {
            Descend
        }
    }
}

/// Filters are the predicates of the conditional operations.
///
/// References to anonymous functions of the type `Fn(&S) -> Verdict` can be used as filters.
///
/// The filter is called on segments from left to right, so a filter may carry state
/// through interior mutability, e.g., a budget in a [`std::cell::Cell`] that is
/// spent by every accepted segment.
///
/// Note that the running time depends on the filter. If a filter descends on every
/// segment, every element of the range is visited.
pub trait Filter<S> {
    fn judge(&self, summary: &S) -> Verdict;
}

impl<S, F> Filter<S> for F
where
    F: Fn(&S) -> Verdict,
{
    fn judge(&self, summary: &S) -> Verdict {
        self(summary)
    }
}

/// A constant filter, giving the same verdict for every segment.
/// `Accept` reproduces the unconditional operations. `Descend` and `Reject` use nothing:
/// `Descend` visits every element of the range and then drops each of them.
impl<S> Filter<S> for Verdict {
    fn judge(&self, _summary: &S) -> Verdict {
        *self
    }
}

/// Wrapper for boolean predicates: `true` accepts and `false` descends.
/// Since a boolean predicate never rejects, there are no early exits,
/// and every element whose segments were not accepted is visited.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FromBool<F>(pub F);

impl<S, F> Filter<S> for FromBool<F>
where
    F: Fn(&S) -> bool,
{
    fn judge(&self, summary: &S) -> Verdict {
        (self.0)(summary).into()
    }
}
