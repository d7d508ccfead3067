//! Example: maximum fixed-size window sum with the incremental scanner.
//!
//! Run with:
//! `cargo run --example max_window`

use algo_patterns::{max_window, WindowScanner};

fn main() {
    let values = [2, 6, 9, 2, 1, 8, 5, 6, 3];
    let k = 3;

    println!("Values: {values:?}");
    println!("Window sums (k={k}):");
    if let Some(scanner) = WindowScanner::new(&values, k) {
        for w in scanner {
            println!("  [{}..{}) {:?} -> {}", w.start, w.end, w.slice(&values), w.sum);
        }
    }

    match max_window(&values, k) {
        Some(best) => println!(
            "Best window: [{}..{}) {:?} with sum {}",
            best.start,
            best.end,
            best.slice(&values),
            best.sum
        ),
        None => println!("No window of size {k} fits"),
    }
}
