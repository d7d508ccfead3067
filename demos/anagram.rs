//! Example: anagram and digit-frequency checks.
//!
//! Run with:
//! `cargo run --example anagram -- listen silent`

use algo_patterns::{char_frequencies, is_anagram, same_frequency};

fn main() {
    let mut args = std::env::args().skip(1);
    let a = args.next().unwrap_or_else(|| "listen".to_string());
    let b = args.next().unwrap_or_else(|| "silent".to_string());

    let mut freq: Vec<(char, usize)> = char_frequencies(&a).into_iter().collect();
    freq.sort_unstable();
    println!("Frequencies of {a:?}: {freq:?}");
    println!("is_anagram({a:?}, {b:?}) = {}", is_anagram(&a, &b));
    println!("same_frequency(182, 281) = {}", same_frequency(182, 281));
}
