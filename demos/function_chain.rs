//! A chain of linear functions `x -> a * x + b` modulo 998244353.
//!
//! * `0 p c d`: replaces the function at `p` with `x -> c * x + d`.
//! * `1 l r x`: prints `f[r - 1](...f[l + 1](f[l](x)))`.
//! * `2 l r c d`: replaces every function in `l..r` with `x -> c * x + d`.
//!
//! Input: `n q`, then `n` pairs `a b`, then `q` queries. Indices are 0-based,
//! ranges are half-open.

use sapling::example_data::{Linear, Set};
use sapling::SegmentTree;
use text_io::read;

fn main() -> Result<(), sapling::Error> {
    let n: usize = read!();
    let q: usize = read!();
    let mut tree: SegmentTree<Linear, Set> = SegmentTree::from_fn(n, |_| {
        let a: u64 = read!();
        let b: u64 = read!();
        Linear::new(a, b)
    })?;

    let mut out = String::new();
    for _ in 0..q {
        let t: u8 = read!();
        match t {
            0 => {
                let p: usize = read!();
                let c: u64 = read!();
                let d: u64 = read!();
                tree.point_update(p, Set(Linear::new(c, d)));
            }
            1 => {
                let l: usize = read!();
                let r: usize = read!();
                let x: u64 = read!();
                let f = tree.query_range(l..r);
                out.push_str(&format!("{}\n", f.eval(x)));
            }
            _ => {
                let l: usize = read!();
                let r: usize = read!();
                let c: u64 = read!();
                let d: u64 = read!();
                tree.update_range(l..r, Set(Linear::new(c, d)));
            }
        }
    }
    print!("{}", out);
    Ok(())
}
