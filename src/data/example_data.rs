//! Example summaries and actions, ready to be used with [`SegmentTree`](crate::SegmentTree).

use super::*;

/// The sum of a segment, together with its length.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Sum {
    pub sum: i64,
    pub len: usize,
}

impl Sum {
    /// The summary of a single element.
    pub fn new(value: i64) -> Sum {
        Sum { sum: value, len: 1 }
    }
}

impl From<i64> for Sum {
    fn from(value: i64) -> Sum {
        Sum::new(value)
    }
}

impl std::ops::Add for Sum {
    type Output = Sum;
    fn add(self, other: Sum) -> Sum {
        Sum {
            sum: self.sum + other.sum,
            len: self.len + other.len,
        }
    }
}

/// Adds a constant to every element of the segment.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Add(pub i64);

impl Action<Sum> for Add {
    fn compose(&self, earlier: &Add) -> Add {
        Add(self.0 + earlier.0)
    }

    fn act(&self, summary: Sum, len: usize) -> Sum {
        Sum {
            sum: summary.sum + self.0 * len as i64,
            len: summary.len,
        }
    }
}

/// The minimum, maximum and sum of a segment, together with its length.
///
/// The empty segment has `min == i64::MAX` and `max == i64::MIN`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct MinMaxSum {
    pub min: i64,
    pub max: i64,
    pub sum: i64,
    pub len: usize,
}

impl MinMaxSum {
    /// The summary of a single element.
    pub fn new(value: i64) -> MinMaxSum {
        MinMaxSum {
            min: value,
            max: value,
            sum: value,
            len: 1,
        }
    }
}

impl Default for MinMaxSum {
    fn default() -> MinMaxSum {
        MinMaxSum {
            min: i64::MAX,
            max: i64::MIN,
            sum: 0,
            len: 0,
        }
    }
}

impl From<i64> for MinMaxSum {
    fn from(value: i64) -> MinMaxSum {
        MinMaxSum::new(value)
    }
}

impl std::ops::Add for MinMaxSum {
    type Output = MinMaxSum;
    fn add(self, other: MinMaxSum) -> MinMaxSum {
        MinMaxSum {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
            sum: self.sum + other.sum,
            len: self.len + other.len,
        }
    }
}

impl Action<MinMaxSum> for Add {
    fn compose(&self, earlier: &Add) -> Add {
        Add(self.0 + earlier.0)
    }

    fn act(&self, summary: MinMaxSum, len: usize) -> MinMaxSum {
        // the empty summary has sentinel extremes that shouldn't move
        if summary.len == 0 {
            return summary;
        }
        MinMaxSum {
            min: summary.min + self.0,
            max: summary.max + self.0,
            sum: summary.sum + self.0 * len as i64,
            len: summary.len,
        }
    }
}

/// Sets every element of the segment to the given value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Assign(pub i64);

impl Action<MinMaxSum> for Assign {
    fn compose(&self, _earlier: &Assign) -> Assign {
        *self
    }

    fn act(&self, summary: MinMaxSum, len: usize) -> MinMaxSum {
        if summary.len == 0 {
            return summary;
        }
        MinMaxSum {
            min: self.0,
            max: self.0,
            sum: self.0 * len as i64,
            len: summary.len,
        }
    }
}

/// Bracket matching.
/// `matched` is the number of brackets in the longest correct bracket subsequence
/// of the segment, `open` and `close` count the brackets left unmatched.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Brackets {
    pub open: usize,
    pub close: usize,
    pub matched: usize,
}

impl Brackets {
    /// The summary of a single character. Characters other than
    /// `'('` and `')'` are treated as empty.
    pub fn from_char(c: char) -> Brackets {
        Brackets {
            open: (c == '(') as usize,
            close: (c == ')') as usize,
            matched: 0,
        }
    }
}

impl std::ops::Add for Brackets {
    type Output = Brackets;
    fn add(self, other: Brackets) -> Brackets {
        let pairs = self.open.min(other.close);
        Brackets {
            open: other.open + self.open - pairs,
            close: self.close + other.close - pairs,
            matched: self.matched + other.matched + 2 * pairs,
        }
    }
}

/// The prime modulus used by [`Linear`].
pub const MODULUS: u64 = 998_244_353;

/// The function `x -> mul * x + add` modulo [`MODULUS`].
///
/// The summary of a segment is the composition of its functions, leftmost first.
/// This summary is not commutative.
///
/// Both coefficients are always reduced modulo [`MODULUS`], so the products never overflow.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Linear {
    mul: u64,
    add: u64,
}

impl Linear {
    pub fn new(mul: u64, add: u64) -> Linear {
        Linear {
            mul: mul % MODULUS,
            add: add % MODULUS,
        }
    }

    /// The multiplicative coefficient, in `0..MODULUS`.
    pub fn mul(&self) -> u64 {
        self.mul
    }

    /// The additive coefficient, in `0..MODULUS`.
    pub fn offset(&self) -> u64 {
        self.add
    }

    pub fn eval(&self, x: u64) -> u64 {
        (self.mul * (x % MODULUS) + self.add) % MODULUS
    }

    /// The function composed with itself `exp` times.
    pub fn pow(self, mut exp: usize) -> Linear {
        let mut res = Linear::default();
        let mut base = self;
        while exp > 0 {
            if exp & 1 == 1 {
                res = res + base;
            }
            base = base + base;
            exp >>= 1;
        }
        res
    }
}

impl Default for Linear {
    fn default() -> Linear {
        Linear { mul: 1, add: 0 }
    }
}

impl std::ops::Add for Linear {
    type Output = Linear;
    /// `self` is applied first.
    fn add(self, other: Linear) -> Linear {
        Linear {
            mul: self.mul * other.mul % MODULUS,
            add: (other.mul * self.add + other.add) % MODULUS,
        }
    }
}

/// Replaces every function in the segment.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Set(pub Linear);

impl Action<Linear> for Set {
    fn compose(&self, _earlier: &Set) -> Set {
        *self
    }

    fn act(&self, _summary: Linear, len: usize) -> Linear {
        self.0.pow(len)
    }
}
