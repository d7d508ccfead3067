//! Example: two-pointer scans over sorted input.
//!
//! Run with:
//! `cargo run --example two_pointers`

use algo_patterns::{binary_search, compact_unique, sum_zero_pair};

fn main() {
    let sorted = [-4, -2, 1, 3, 4];
    println!("sum_zero_pair({sorted:?}) = {:?}", sum_zero_pair(&sorted));
    println!("binary_search({sorted:?}, 3) = {:?}", binary_search(&sorted, &3));

    let mut values = vec![1, 1, 1, 2, 3, 3, 7];
    let count = compact_unique(&mut values);
    println!("{count} unique values: {:?}", &values[..count]);
}
