//! Sliding window: move a contiguous sub-range across a sequence, updating
//! an aggregate incrementally instead of recomputing it for every position.
//!
//! Fixed-size windows (maximum window sum) are driven by
//! [`WindowScanner`](crate::scanner::WindowScanner), which keeps a single
//! running sum equal to the sum of the current window at every step.
//! Variable-size windows grow on one side and shrink on the other:
//! - [`min_sub_array_len`]      : shortest run reaching a threshold sum.
//! - [`find_longest_substring`] : longest run of distinct characters.

use std::collections::HashMap;

use crate::scanner::WindowScanner;
use crate::traits::WindowValue;
use crate::window::Window;
#[cfg(feature = "parallel")]
use rayon::join;

/// Windows scanned sequentially by one task in [`par_max_sub_array_sum`].
#[cfg(feature = "parallel")]
pub const PAR_CHUNK_WINDOWS: usize = 2048;

/// Maximum sum over every contiguous window of `window_size` elements.
///
/// Returns `None` when no such window exists (`window_size == 0` or
/// `window_size > values.len()`). The first window is summed directly; each
/// following window is obtained by subtracting the outgoing element and
/// adding the incoming one. Sums use the native arithmetic of `T`.
///
/// ```
/// use algo_patterns::max_sub_array_sum;
///
/// assert_eq!(max_sub_array_sum(&[2, 6, 9, 2, 1, 8, 5, 6, 3], 3), Some(19));
/// assert_eq!(max_sub_array_sum(&[1, 2], 5), None);
/// ```
pub fn max_sub_array_sum<T: WindowValue>(values: &[T], window_size: usize) -> Option<T> {
    max_window(values, window_size).map(|w| w.sum)
}

/// Like [`max_sub_array_sum`], but also reports where the best window lies.
///
/// When several windows share the maximum sum, the leftmost one is returned.
pub fn max_window<T: WindowValue>(values: &[T], window_size: usize) -> Option<Window<T>> {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("max_window", len = values.len(), window_size);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut scanner = WindowScanner::new(values, window_size)?;
    let first = scanner.next()?;
    Some(scanner.fold(first, |best, w| if w.sum > best.sum { w } else { best }))
}

/// Parallel [`max_sub_array_sum`].
///
/// Window start positions are split in halves recursively with
/// [`rayon::join`] until a range holds at most [`PAR_CHUNK_WINDOWS`] windows;
/// each range is then scanned by its own [`WindowScanner`] and the partial
/// maxima are reduced. For integer types the result is identical to the
/// sequential scan; floating-point sums may differ by rounding because every
/// range restarts its running sum.
#[cfg(feature = "parallel")]
pub fn par_max_sub_array_sum<T>(values: &[T], window_size: usize) -> Option<T>
where
    T: WindowValue + Send + Sync,
{
    if window_size == 0 || window_size > values.len() {
        return None;
    }
    let starts = values.len() - window_size + 1;
    par_max_over_starts(values, window_size, 0, starts)
}

/// Maximum over the windows starting in [lo, hi).
#[cfg(feature = "parallel")]
fn par_max_over_starts<T>(values: &[T], window_size: usize, lo: usize, hi: usize) -> Option<T>
where
    T: WindowValue + Send + Sync,
{
    if hi - lo <= PAR_CHUNK_WINDOWS {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("par_window_chunk", lo, hi);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();
        return max_sub_array_sum(&values[lo..hi - 1 + window_size], window_size);
    }
    let mid = crate::utils::midpoint(lo, hi);
    let (left, right) = join(
        || par_max_over_starts(values, window_size, lo, mid),
        || par_max_over_starts(values, window_size, mid, hi),
    );
    match (left, right) {
        (Some(l), Some(r)) => Some(if r > l { r } else { l }),
        (l, r) => l.or(r),
    }
}

/// Length of the shortest non-empty contiguous run whose sum is at least `min_sum`.
///
/// The window grows on the right until its sum reaches `min_sum`, then
/// shrinks from the left while it still does, recording the smallest length
/// seen. Returns `None` if no run qualifies (including empty input).
pub fn min_sub_array_len(values: &[u64], min_sum: u64) -> Option<usize> {
    let mut best: Option<usize> = None;
    let mut start = 0usize;
    let mut sum = 0u64;

    for (end, &v) in values.iter().enumerate() {
        sum += v;
        while start <= end && sum >= min_sum {
            let len = end - start + 1;
            best = Some(best.map_or(len, |b| b.min(len)));
            sum -= values[start];
            start += 1;
        }
    }
    best
}

/// Length, in characters, of the longest substring without repeated characters.
///
/// The window start jumps past the previous occurrence of a repeated
/// character, but never moves backwards.
pub fn find_longest_substring(s: &str) -> usize {
    let mut start = 0usize;
    let mut longest = 0usize;
    // char -> index of its last occurrence
    let mut seen: HashMap<char, usize> = HashMap::new();

    for (i, c) in s.chars().enumerate() {
        if let Some(&last) = seen.get(&c) {
            start = start.max(last + 1);
        }
        longest = longest.max(i - start + 1);
        seen.insert(c, i);
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute_force_max(values: &[i64], k: usize) -> Option<i64> {
        if k == 0 {
            return None;
        }
        values.windows(k).map(|w| w.iter().sum()).max()
    }

    #[test]
    fn max_sub_array_sum_should_work() {
        assert_eq!(max_sub_array_sum(&[1, 2, 3], 0), None);
        assert_eq!(max_sub_array_sum(&[1, 2, 3], 4), None);
        assert_eq!(max_sub_array_sum(&[1, 2, 3], 1), Some(3));
        assert_eq!(max_sub_array_sum(&[1, 2, 3], 2), Some(5));
        assert_eq!(max_sub_array_sum(&[1, 2, 3], 3), Some(6));
        assert_eq!(max_sub_array_sum(&[2, 6, 9, 2, 1, 8, 5, 6, 3], 3), Some(19));
        assert_eq!(max_sub_array_sum::<i32>(&[], 1), None);
    }

    #[test]
    fn last_window_is_considered() {
        // The best window is the final one; an off-by-one in the slide bound would miss it.
        assert_eq!(max_sub_array_sum(&[1, 1, 1, 1, 9, 9], 2), Some(18));
        assert_eq!(max_sub_array_sum(&[0, 0, 5], 1), Some(5));
    }

    #[test]
    fn negative_values() {
        assert_eq!(max_sub_array_sum(&[-5, -2, -8, -1], 2), Some(-7));
        assert_eq!(max_sub_array_sum(&[-3], 1), Some(-3));
    }

    #[test]
    fn matches_brute_force_on_fixed_cases() {
        let cases: [&[i64]; 4] = [
            &[4, 2, 1, 6, 2],
            &[-1, 7, -3, 2, 9, -10, 4],
            &[100, 200, 300, 400],
            &[3, -4, 0, 0, 5],
        ];
        for values in cases {
            for k in 0..=values.len() + 1 {
                assert_eq!(
                    max_sub_array_sum(values, k),
                    brute_force_max(values, k),
                    "values={values:?} k={k}"
                );
            }
        }
    }

    #[test]
    fn max_window_reports_leftmost_best() {
        let w = max_window(&[2, 6, 9, 2, 1, 8, 5, 6, 3], 3).unwrap();
        assert_eq!((w.start, w.end, w.sum), (5, 8, 19));

        let tie = max_window(&[5, 1, 5, 1], 2).unwrap();
        assert_eq!(tie.start, 0);
        assert_eq!(tie.sum, 6);
    }

    #[test]
    fn float_windows() {
        let best = max_sub_array_sum(&[0.5f64, 1.25, -2.0, 3.0, 0.25], 2).unwrap();
        assert!((best - 3.25).abs() < 1e-12);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_sequential() {
        let values: Vec<i64> = (0..10_000).map(|i| ((i * 7919) % 201) - 100).collect();
        for k in [1, 3, 17, 2048, 5000, 10_000] {
            assert_eq!(
                par_max_sub_array_sum(&values, k),
                max_sub_array_sum(&values, k),
                "k={k}"
            );
        }
        assert_eq!(par_max_sub_array_sum(&values, 0), None);
        assert_eq!(par_max_sub_array_sum(&values, 10_001), None);
    }

    #[test]
    fn min_sub_array_len_should_work() {
        assert_eq!(min_sub_array_len(&[2, 3, 1, 2, 4, 3], 7), Some(2));
        assert_eq!(min_sub_array_len(&[2, 1, 6, 5, 4], 9), Some(2));
        assert_eq!(
            min_sub_array_len(&[3, 1, 7, 11, 2, 9, 8, 21, 62, 33, 19], 52),
            Some(1)
        );
        assert_eq!(min_sub_array_len(&[1, 4, 16, 22, 5, 7, 8, 9, 10], 39), Some(3));
        assert_eq!(min_sub_array_len(&[1, 4, 16, 22, 5, 7, 8, 9, 10], 55), Some(5));
        assert_eq!(min_sub_array_len(&[4, 3, 3, 8, 1, 2, 3], 11), Some(2));
        assert_eq!(min_sub_array_len(&[1, 4, 16, 22, 5, 7, 8, 9, 10], 95), None);
        assert_eq!(min_sub_array_len(&[], 1), None);
        assert_eq!(min_sub_array_len(&[3], 0), Some(1));
    }

    #[test]
    fn find_longest_substring_should_work() {
        assert_eq!(find_longest_substring(""), 0);
        assert_eq!(find_longest_substring("rithmschool"), 7);
        assert_eq!(find_longest_substring("thisisawesome"), 6);
        assert_eq!(find_longest_substring("thecatinthehat"), 7);
        assert_eq!(find_longest_substring("bbbbbb"), 1);
        assert_eq!(find_longest_substring("longestsubstring"), 8);
        assert_eq!(find_longest_substring("thisishowwedoit"), 6);
    }
}
