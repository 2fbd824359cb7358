//! Answers queries for the length of the longest correct bracket
//! subsequence of a substring.
//!
//! Input: a string of brackets, the number of queries `q`, then `q` lines `l r`
//! with 1-based inclusive bounds. Prints one answer per query.

use sapling::example_data::Brackets;
use sapling::SegmentTree;
use text_io::read;

fn main() -> Result<(), sapling::Error> {
    let s: String = read!();
    let chars: Vec<char> = s.chars().collect();
    let mut tree: SegmentTree<Brackets> =
        SegmentTree::from_fn(chars.len(), |i| Brackets::from_char(chars[i]))?;

    let q: usize = read!();
    let mut out = String::new();
    for _ in 0..q {
        let l: usize = read!();
        let r: usize = read!();
        let res = tree.query(l - 1, r - 1);
        out.push_str(&format!("{}\n", res.matched));
    }
    print!("{}", out);
    Ok(())
}
