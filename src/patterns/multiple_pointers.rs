//! Multiple pointers: walk two index cursors through a sequence and move
//! them according to comparison outcomes, avoiding nested iteration.
//!
//! All functions here run in O(n) time and O(1) extra space. The sorted-input
//! functions rely on ascending order to decide which cursor to move; that
//! precondition is not validated, and unsorted input gives an unspecified
//! (but non-panicking) answer.

use std::cmp::Ordering;

use crate::traits::WindowValue;

/// Find a pair of elements, distinct by position, that sums to zero.
///
/// One cursor starts at the first element, the other at the last. A positive
/// sum moves the upper cursor down to a smaller value, a negative sum moves
/// the lower cursor up to a larger value, and the scan stops when the cursors
/// meet. Zero is `T::default()`.
///
/// The walk is only valid for a target sum of zero over input sorted in
/// ascending order; it does not generalise to unsorted input, and callers
/// needing another target must shift their values instead.
///
/// ```
/// use algo_patterns::sum_zero_pair;
///
/// assert_eq!(sum_zero_pair(&[-4, -2, 1, 3, 4]), Some((-4, 4)));
/// assert_eq!(sum_zero_pair(&[1, 2, 3]), None);
/// ```
pub fn sum_zero_pair<T>(sorted: &[T]) -> Option<(T, T)>
where
    T: WindowValue + Default,
{
    if sorted.len() < 2 {
        return None;
    }
    let zero = T::default();
    let mut left = 0usize;
    let mut right = sorted.len() - 1;

    while left < right {
        // Both cursors on one side of zero: no pair remains. Otherwise the
        // operands straddle zero and their sum cannot overflow.
        if sorted[left] > zero || sorted[right] < zero {
            return None;
        }
        let sum = sorted[left] + sorted[right];
        match sum.partial_cmp(&zero)? {
            Ordering::Equal => return Some((sorted[left], sorted[right])),
            Ordering::Greater => right -= 1,
            Ordering::Less => left += 1,
        }
    }
    None
}

/// Count the distinct values of an ascending slice.
///
/// A marker cursor stays on the last distinct value seen while a scanning
/// cursor runs ahead; each mismatch is a new distinct value.
pub fn count_unique_values<T: PartialEq>(sorted: &[T]) -> usize {
    if sorted.is_empty() {
        return 0;
    }
    let mut marker = 0usize;
    let mut count = 1usize;
    for scan in 1..sorted.len() {
        if sorted[marker] != sorted[scan] {
            marker = scan;
            count += 1;
        }
    }
    count
}

/// Count the distinct values of an ascending slice and compact them in place.
///
/// On return `values[..count]` holds one representative per distinct value,
/// in ascending order. The remaining tail holds the duplicates in
/// unspecified order.
///
/// ```
/// use algo_patterns::compact_unique;
///
/// let mut v = vec![1, 1, 1, 2, 3, 3];
/// let count = compact_unique(&mut v);
/// assert_eq!(count, 3);
/// assert_eq!(&v[..count], &[1, 2, 3]);
/// ```
pub fn compact_unique<T: PartialEq>(values: &mut [T]) -> usize {
    if values.is_empty() {
        return 0;
    }
    let mut marker = 0usize;
    for scan in 1..values.len() {
        if values[marker] != values[scan] {
            marker += 1;
            // Positions past `scan` are untouched, so the swap never disturbs unread input.
            values.swap(marker, scan);
        }
    }
    marker + 1
}

/// Returns true if two values of an ascending slice average exactly `target`.
pub fn average_pair(sorted: &[i64], target: f64) -> bool {
    if sorted.len() < 2 {
        return false;
    }
    let mut left = 0usize;
    let mut right = sorted.len() - 1;
    while left < right {
        let average = (sorted[left] as f64 + sorted[right] as f64) / 2.0;
        match average.partial_cmp(&target) {
            Some(Ordering::Equal) => return true,
            Some(Ordering::Greater) => right -= 1,
            Some(Ordering::Less) => left += 1,
            None => return false,
        }
    }
    false
}

/// Returns true if the characters of `needle` appear in `haystack` in the
/// same order, not necessarily contiguously. The empty string is a
/// subsequence of every string.
pub fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut pending = needle.chars();
    let mut wanted = pending.next();
    for c in haystack.chars() {
        match wanted {
            None => break,
            Some(w) if w == c => wanted = pending.next(),
            Some(_) => {}
        }
    }
    wanted.is_none()
}
