#![allow(dead_code)]

use rand::{rngs::StdRng, Rng, SeedableRng};
use sapling::example_data::{self, MinMaxSum};
use sapling::*;

/// Adds to or assigns every element of a segment.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Change {
    Add(i64),
    Assign(i64),
}

impl Action<MinMaxSum> for Change {
    fn compose(&self, earlier: &Change) -> Change {
        use Change::*;
        match (*self, *earlier) {
            (Assign(value), _) => Assign(value),
            (Add(a), Add(b)) => Add(a + b),
            (Add(a), Assign(value)) => Assign(value + a),
        }
    }

    fn act(&self, summary: MinMaxSum, len: usize) -> MinMaxSum {
        match *self {
            Change::Add(value) => example_data::Add(value).act(summary, len),
            Change::Assign(value) => example_data::Assign(value).act(summary, len),
        }
    }
}

impl Change {
    fn apply(self, value: i64) -> i64 {
        match self {
            Change::Add(add) => value + add,
            Change::Assign(new_value) => new_value,
        }
    }
}

/// Accepts segments where every element is above `threshold`,
/// rejects segments where none is.
pub fn above(threshold: i64) -> impl Fn(&MinMaxSum) -> Verdict + Copy {
    move |summary: &MinMaxSum| {
        if summary.min > threshold {
            Verdict::Accept
        } else if summary.max <= threshold {
            Verdict::Reject
        } else {
            Verdict::Descend
        }
    }
}

pub fn max_less(acc: &MinMaxSum, target: &MinMaxSum) -> bool {
    acc.max < target.max
}

/// Something to perform in one round of tests.
/// Ranges may be inverted or reach outside of the tree.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum RoundAction {
    Act { lo: usize, hi: usize, change: Change },
    Query { lo: usize, hi: usize },
    ActAbove { lo: usize, hi: usize, threshold: i64, change: Change },
    QueryAbove { lo: usize, hi: usize, threshold: i64 },
    // first prefix whose maximum is at least `target`
    LowerBound { lo: usize, target: i64 },
    // first prefix whose maximum is more than `target`
    UpperBound { lo: usize, target: i64 },
    Contents,
}

/// The result after one round
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum RoundResult {
    Empty,
    Summary(MinMaxSum),
    Found(Boundary),
    Leaves(Vec<MinMaxSum>),
}

/// A naive implementation to compare against.
pub struct Simulator {
    values: Vec<i64>,
}

impl Simulator {
    pub fn new(values: &[i64]) -> Self {
        Simulator {
            values: values.to_vec(),
        }
    }

    /// Clips the range to the array. `None` for empty ranges.
    fn indices(&self, lo: usize, hi: usize) -> Option<std::ops::RangeInclusive<usize>> {
        if lo > hi || lo >= self.values.len() {
            None
        } else {
            Some(lo..=hi.min(self.values.len() - 1))
        }
    }

    fn fold(&self, lo: usize, hi: usize, keep: impl Fn(i64) -> bool) -> MinMaxSum {
        match self.indices(lo, hi) {
            None => MinMaxSum::default(),
            Some(range) => self.values[range]
                .iter()
                .filter(|&&value| keep(value))
                .fold(MinMaxSum::default(), |acc, &value| acc + MinMaxSum::new(value)),
        }
    }

    fn act(&mut self, lo: usize, hi: usize, change: Change, keep: impl Fn(i64) -> bool) {
        if let Some(range) = self.indices(lo, hi) {
            for value in self.values[range].iter_mut() {
                if keep(*value) {
                    *value = change.apply(*value);
                }
            }
        }
    }

    fn search(&self, lo: usize, crossed: impl Fn(i64) -> bool) -> Boundary {
        let mut max = i64::MIN;
        for hi in lo..self.values.len() {
            max = max.max(self.values[hi]);
            if crossed(max) {
                return Boundary::At(hi);
            }
        }
        Boundary::NotFound
    }

    pub fn run(&mut self, round_action: &RoundAction) -> RoundResult {
        use RoundAction::*;

        match *round_action {
            Act { lo, hi, change } => {
                self.act(lo, hi, change, |_| true);
                RoundResult::Empty
            }
            Query { lo, hi } => RoundResult::Summary(self.fold(lo, hi, |_| true)),
            ActAbove {
                lo,
                hi,
                threshold,
                change,
            } => {
                self.act(lo, hi, change, |value| value > threshold);
                RoundResult::Empty
            }
            QueryAbove { lo, hi, threshold } => {
                RoundResult::Summary(self.fold(lo, hi, |value| value > threshold))
            }
            LowerBound { lo, target } => RoundResult::Found(self.search(lo, |max| max >= target)),
            UpperBound { lo, target } => RoundResult::Found(self.search(lo, |max| max > target)),
            Contents => RoundResult::Leaves(
                self.values.iter().map(|&value| MinMaxSum::new(value)).collect(),
            ),
        }
    }
}

pub fn run_round(tree: &mut SegmentTree<MinMaxSum, Change>, round_action: &RoundAction) -> RoundResult {
    use RoundAction::*;

    match *round_action {
        Act { lo, hi, change } => {
            tree.update(lo, hi, change);
            RoundResult::Empty
        }
        Query { lo, hi } => RoundResult::Summary(tree.query(lo, hi)),
        ActAbove {
            lo,
            hi,
            threshold,
            change,
        } => {
            tree.update_if(lo, hi, change, above(threshold));
            RoundResult::Empty
        }
        QueryAbove { lo, hi, threshold } => {
            RoundResult::Summary(tree.query_if(lo, hi, above(threshold)))
        }
        LowerBound { lo, target } => {
            RoundResult::Found(tree.lower_bound(lo, &MinMaxSum::new(target), max_less))
        }
        UpperBound { lo, target } => {
            RoundResult::Found(tree.upper_bound(lo, &MinMaxSum::new(target), max_less))
        }
        Contents => RoundResult::Leaves(tree.contents()),
    }
}

pub const MAX_VALUE: i64 = 1000;
const MAX_ADD: i64 = 100;

pub fn random_change(rng: &mut StdRng) -> Change {
    if rng.gen() {
        Change::Add(rng.gen_range(-MAX_ADD..=MAX_ADD))
    } else {
        Change::Assign(rng.gen_range(-MAX_VALUE..=MAX_VALUE))
    }
}

pub fn random_round_action(rng: &mut StdRng, len: usize) -> RoundAction {
    use RoundAction::*;
    // slightly out of bounds, and in any order
    let lo = rng.gen_range(0..len + 2);
    let hi = rng.gen_range(0..len + 2);
    let threshold = rng.gen_range(-MAX_VALUE..=MAX_VALUE);
    match rng.gen_range(0..20) {
        0..=4 => Act {
            lo,
            hi,
            change: random_change(rng),
        },
        5..=9 => Query { lo, hi },
        10..=11 => ActAbove {
            lo,
            hi,
            threshold,
            change: random_change(rng),
        },
        12..=13 => QueryAbove { lo, hi, threshold },
        14..=16 => LowerBound { lo, target: threshold },
        17..=18 => UpperBound { lo, target: threshold },
        _ => Contents,
    }
}

/// Runs all of the rounds both on a tree and on the simulator, and compares the results.
pub fn check_consistency(initial: &[i64], rounds: &[RoundAction]) {
    let mut tree: SegmentTree<MinMaxSum, Change> =
        SegmentTree::from_fn(initial.len(), |i| MinMaxSum::new(initial[i])).unwrap();
    let mut simulator = Simulator::new(initial);

    for round_action in rounds {
        let res1 = run_round(&mut tree, round_action);
        let res2 = simulator.run(round_action);
        assert_eq!(res1, res2, "after {:?}", round_action);
        assert_eq!(tree.total(), simulator.fold(0, initial.len() - 1, |_| true));
    }
}

pub fn random_values(rng: &mut StdRng, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(-MAX_VALUE..=MAX_VALUE)).collect()
}

pub fn check_random_consistency(seed: u64, len: usize, num_rounds: usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let initial = random_values(&mut rng, len);
    let rounds: Vec<_> = (0..num_rounds)
        .map(|_| random_round_action(&mut rng, len))
        .collect();
    check_consistency(&initial, &rounds);
}
