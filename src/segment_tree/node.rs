use crate::data::*;
use crate::filters::{Filter, Verdict};

/// A node of the tree, responsible for the inclusive index range `leftmost..=rightmost`.
///
/// A leaf stores the summary of its single element. An internal node stores
/// the sum of its children's summaries, as it was the last time its pending action
/// was pushed, with that pending action already applied. That is, the summary of a node
/// is always up to date, but its descendants might be missing some of its pending action.
#[derive(Clone, Debug)]
pub(crate) struct Node<S, A> {
    leftmost: usize,
    rightmost: usize,
    summary: S,
    /// Should be applied to the children. Always `None` in leaves.
    pending: Option<A>,
    children: Option<Box<Children<S, A>>>,
}

#[derive(Clone, Debug)]
struct Children<S, A> {
    left: Node<S, A>,
    right: Node<S, A>,
}

impl<S: Summary, A: Action<S>> Node<S, A> {
    /// Builds the subtree over `lo..=hi`. `init` is called once for every index,
    /// in increasing order.
    pub fn build<F>(init: &mut F, lo: usize, hi: usize) -> Self
    where
        F: FnMut(usize) -> S,
    {
        if lo == hi {
            return Node {
                leftmost: lo,
                rightmost: hi,
                summary: init(lo),
                pending: None,
                children: None,
            };
        }
        let mid = lo + (hi - lo) / 2;
        let left = Node::build(init, lo, mid);
        let right = Node::build(init, mid + 1, hi);
        Node {
            leftmost: lo,
            rightmost: hi,
            summary: left.summary.clone() + right.summary.clone(),
            pending: None,
            children: Some(Box::new(Children { left, right })),
        }
    }

    pub fn summary(&self) -> &S {
        &self.summary
    }

    pub fn rightmost(&self) -> usize {
        self.rightmost
    }

    fn len(&self) -> usize {
        self.rightmost - self.leftmost + 1
    }

    fn covered_by(&self, lo: usize, hi: usize) -> bool {
        lo <= self.leftmost && self.rightmost <= hi
    }

    fn is_disjoint(&self, lo: usize, hi: usize) -> bool {
        hi < self.leftmost || self.rightmost < lo
    }

    /// Applies the action to this node's summary, and stores it
    /// to be pushed to the children later.
    fn accumulate(&mut self, action: &A) {
        let len = self.len();
        self.summary = action.act(std::mem::take(&mut self.summary), len);
        if self.children.is_some() {
            self.pending = Some(match self.pending.take() {
                Some(earlier) => action.compose(&earlier),
                None => action.clone(),
            });
        }
    }

    /// Pushes the pending action onto the children.
    fn push(&mut self) {
        if let Some(children) = self.children.as_deref_mut() {
            if let Some(action) = self.pending.take() {
                children.left.accumulate(&action);
                children.right.accumulate(&action);
            }
        }
    }

    /// Pushes, then returns the children. Returns `None` for leaves.
    fn open(&mut self) -> Option<&mut Children<S, A>> {
        self.push();
        self.children.as_deref_mut()
    }

    /// Recomputes the summary from the children's summaries.
    /// Only call this when there is no pending action.
    fn rebuild(&mut self) {
        if let Some(children) = self.children.as_deref() {
            self.summary = children.left.summary.clone() + children.right.summary.clone();
        }
    }

    pub fn query(&mut self, lo: usize, hi: usize) -> S {
        if self.is_disjoint(lo, hi) {
            return S::default();
        }
        if self.covered_by(lo, hi) {
            return self.summary.clone();
        }
        match self.open() {
            Some(children) => {
                // the left half has to be queried first
                let left = children.left.query(lo, hi);
                left + children.right.query(lo, hi)
            }
            // a leaf is always either disjoint or covered
            None => S::default(),
        }
    }

    pub fn update(&mut self, lo: usize, hi: usize, action: &A) {
        if self.is_disjoint(lo, hi) {
            return;
        }
        if self.covered_by(lo, hi) {
            self.accumulate(action);
            return;
        }
        if let Some(children) = self.open() {
            children.left.update(lo, hi, action);
            children.right.update(lo, hi, action);
            self.rebuild();
        }
    }

    pub fn query_if<F: Filter<S>>(&mut self, lo: usize, hi: usize, filter: &F) -> S {
        if self.is_disjoint(lo, hi) {
            return S::default();
        }
        if self.covered_by(lo, hi) {
            match filter.judge(&self.summary) {
                Verdict::Reject => return S::default(),
                Verdict::Accept => return self.summary.clone(),
                Verdict::Descend => (),
            }
        }
        match self.open() {
            Some(children) => {
                let left = children.left.query_if(lo, hi, filter);
                left + children.right.query_if(lo, hi, filter)
            }
            // a leaf that wasn't accepted is dropped
            None => S::default(),
        }
    }

    pub fn update_if<F: Filter<S>>(&mut self, lo: usize, hi: usize, action: &A, filter: &F) {
        if self.is_disjoint(lo, hi) {
            return;
        }
        if self.covered_by(lo, hi) {
            match filter.judge(&self.summary) {
                Verdict::Reject => return,
                Verdict::Accept => {
                    self.accumulate(action);
                    return;
                }
                Verdict::Descend => (),
            }
        }
        if let Some(children) = self.open() {
            children.left.update_if(lo, hi, action, filter);
            children.right.update_if(lo, hi, action, filter);
            self.rebuild();
        }
    }

    /// Searches for the first `hi` such that `crossed(acc + query(lo, hi))`,
    /// where `acc` is the summary of everything between the first `lo` of the search
    /// and the current `lo`.
    ///
    /// Returns `(hi + 1, acc + query(lo, hi))`. If `hi` isn't in this subtree, returns
    /// `(rightmost + 2, acc + query(lo, rightmost))` instead.
    /// `crossed` must be monotone: once a prefix crosses, every longer prefix crosses.
    ///
    /// Only the nodes on the search path are pushed.
    pub fn search<C>(&mut self, lo: usize, crossed: &C, acc: S) -> (usize, S)
    where
        C: Fn(&S) -> bool,
    {
        // only prefixes that start in this node are of interest
        if lo < self.leftmost || self.rightmost < lo {
            return (self.rightmost + 2, acc);
        }
        // the empty prefix already crosses
        if crossed(&acc) {
            return (lo, acc);
        }

        if lo == self.leftmost {
            let total = acc.clone() + self.summary.clone();
            if self.children.is_none() {
                let end = if crossed(&total) {
                    self.rightmost + 1
                } else {
                    self.rightmost + 2
                };
                return (end, total);
            }
            // even the whole node doesn't cross, so skip it
            if !crossed(&total) {
                return (self.rightmost + 2, total);
            }
        }

        let not_found = self.rightmost + 2;
        match self.open() {
            Some(children) => {
                let (end, left_acc) = children.left.search(lo, crossed, acc);
                if end <= children.left.rightmost + 1 {
                    return (end, left_acc);
                }
                let right_lo = lo.max(children.right.leftmost);
                children.right.search(right_lo, crossed, left_acc)
            }
            None => (not_found, acc),
        }
    }

    /// Appends all of the leaves' summaries, in order.
    pub fn contents(&mut self, res: &mut Vec<S>) {
        if self.children.is_none() {
            res.push(self.summary.clone());
            return;
        }
        if let Some(children) = self.open() {
            children.left.contents(res);
            children.right.contents(res);
        }
    }
}
