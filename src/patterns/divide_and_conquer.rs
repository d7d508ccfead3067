//! Divide and conquer: repeatedly halve the candidate range.
//!
//! Binary search keeps a low and a high bound over the indices that may still
//! hold the target, compares the midpoint element and discards the half that
//! cannot contain it. O(log n) time, O(1) space.

use std::cmp::Ordering;

use crate::utils::midpoint;

/// Locate `target` in an ascending slice.
///
/// Returns the index of a matching element, or `None` when the target is
/// absent. `sorted` must be in ascending order; unsorted input is not
/// detected and yields an unspecified result, but never panics.
///
/// ```
/// use algo_patterns::binary_search;
///
/// assert_eq!(binary_search(&[1, 3, 5, 7, 9], &7), Some(3));
/// assert_eq!(binary_search(&[1, 3, 5, 7, 9], &4), None);
/// ```
pub fn binary_search<T: Ord>(sorted: &[T], target: &T) -> Option<usize> {
    if sorted.is_empty() {
        return None;
    }

    // Inclusive bounds; `hi` would underflow below 0, so the loop exits instead.
    let mut lo = 0usize;
    let mut hi = sorted.len() - 1;
    while lo <= hi {
        let mid = midpoint(lo, hi);
        match sorted[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    return None;
                }
                hi = mid - 1;
            }
        }
    }
    None
}
