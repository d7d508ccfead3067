//! Reference implementations of the classic problem-solving patterns.
//!
//! Each module groups a family of pure functions over in-memory slices and
//! strings:
//! - [`divide_and_conquer`] : binary search by interval halving.
//! - [`frequency_counter`]  : group-by, anagram and digit-frequency checks, prefix-sum hashing.
//! - [`multiple_pointers`]  : zero-sum pair, unique-value count, average pair, subsequence.
//! - [`sliding_window`]     : maximum fixed-size window sum and variable-size windows.

pub mod divide_and_conquer;
pub mod frequency_counter;
pub mod multiple_pointers;
pub mod sliding_window;
