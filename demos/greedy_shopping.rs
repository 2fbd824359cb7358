//! Prices of shops along a street are non-increasing.
//!
//! * `1 x y`: every shop among the first `x` sets its price to `max(price, y)`.
//! * `2 x y`: a customer with `y` money walks from shop `x` to the end of the street,
//!   and buys one item in every shop they can afford. Prints the number of items bought.
//!
//! Input: `n q`, the `n` prices, then `q` queries. Shops are numbered from 1.

use std::cell::Cell;

use sapling::example_data::{Assign, MinMaxSum};
use sapling::{SegmentTree, Verdict};
use text_io::read;

fn main() -> Result<(), sapling::Error> {
    let n: usize = read!();
    let q: usize = read!();
    let mut tree: SegmentTree<MinMaxSum, Assign> = SegmentTree::from_fn(n, |_| {
        let price: i64 = read!();
        MinMaxSum::new(price)
    })?;

    let mut out = String::new();
    for _ in 0..q {
        let t: u8 = read!();
        let x: usize = read!();
        let y: i64 = read!();
        match t {
            1 => {
                // raise the prices below `y`, leave the others alone
                let raise = |s: &MinMaxSum| {
                    if s.max <= y {
                        Verdict::Accept
                    } else if s.min >= y {
                        Verdict::Reject
                    } else {
                        Verdict::Descend
                    }
                };
                tree.update_if(0, x - 1, Assign(y), raise);
            }
            _ => {
                let money = Cell::new(y);
                let bought = tree.query_if(x - 1, n - 1, |s: &MinMaxSum| {
                    if s.sum <= money.get() {
                        money.set(money.get() - s.sum);
                        Verdict::Accept
                    } else if s.min > money.get() {
                        Verdict::Reject
                    } else {
                        Verdict::Descend
                    }
                });
                out.push_str(&format!("{}\n", bought.len));
            }
        }
    }
    print!("{}", out);
    Ok(())
}
