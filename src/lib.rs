//! Classic problem-solving patterns
//!
//! This crate collects small, pure algorithms built around four recurring
//! techniques for working with in-memory sequences and strings.
//!
//! ## Core idea
//! 1. **Divide and conquer**: halve the candidate range at every step
//!    ([`binary_search`]).
//! 2. **Frequency counter**: trade nested loops for a hash map of counts
//!    ([`group_by`], [`is_anagram`], [`same_frequency`]).
//! 3. **Multiple pointers**: move index cursors towards each other based on
//!    comparisons ([`sum_zero_pair`], [`count_unique_values`]).
//! 4. **Sliding window**: update an aggregate incrementally as a contiguous
//!    range moves ([`max_sub_array_sum`], [`WindowScanner`]).
//!
//! Unsatisfiable queries return `None` (or `false`) rather than an error.
//! Sortedness preconditions are documented per function and not validated.
//!
//! ## Quick start
//! ```
//! use algo_patterns::{binary_search, is_anagram, max_sub_array_sum, sum_zero_pair};
//!
//! assert_eq!(binary_search(&[1, 3, 5, 7, 9], &7), Some(3));
//! assert!(is_anagram("listen", "silent"));
//! assert_eq!(sum_zero_pair(&[-4, -2, 1, 3, 4]), Some((-4, 4)));
//! assert_eq!(max_sub_array_sum(&[2, 6, 9, 2, 1, 8, 5, 6, 3], 3), Some(19));
//! ```
//!
//! ## Features
//! - `parallel`: [`par_max_sub_array_sum`] splits the window scan across rayon tasks.
//! - `tracing`: emits spans around scans and groupings.
//! - `json`: implements [`Record`] for `serde_json::Value` objects.

pub mod builder;
pub mod patterns;
pub mod scanner;
pub mod traits;
pub mod utils;
pub mod window;

pub use crate::builder::WindowScannerBuilder;
pub use crate::patterns::divide_and_conquer::binary_search;
pub use crate::patterns::frequency_counter::{
    char_frequencies, group_by, group_by_key, has_zero_sum_subarray, is_anagram, is_permutation,
    same_frequency, Groups,
};
pub use crate::patterns::multiple_pointers::{
    average_pair, compact_unique, count_unique_values, is_subsequence, sum_zero_pair,
};
#[cfg(feature = "parallel")]
pub use crate::patterns::sliding_window::par_max_sub_array_sum;
pub use crate::patterns::sliding_window::{
    find_longest_substring, max_sub_array_sum, max_window, min_sub_array_len,
};
pub use crate::scanner::WindowScanner;
pub use crate::traits::{Record, WindowValue};
pub use crate::window::Window;
