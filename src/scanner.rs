//! Incremental fixed-size window scanner.
//!
//! This module implements the sliding-window traversal shared by the window
//! patterns:
//! 1. The first window is summed directly.
//! 2. Every following window is derived from its predecessor by subtracting
//!    the element that leaves and adding the element that enters.
//!
//! The scanner therefore visits all `len - k + 1` windows of size `k` in
//! O(len) time with O(1) extra state, and is generic over [`WindowValue`].

use crate::traits::WindowValue;
use crate::window::Window;

/// Iterator over every contiguous window of a fixed size, in start order.
///
/// Typical usage:
/// ```
/// use algo_patterns::WindowScanner;
///
/// let values = [2, 6, 9, 2, 1, 8, 5, 6, 3];
/// let sums: Vec<i32> = WindowScanner::new(&values, 3)
///     .expect("window fits")
///     .map(|w| w.sum)
///     .collect();
/// assert_eq!(sums, vec![17, 17, 12, 11, 14, 19, 14]);
/// ```
#[derive(Debug, Clone)]
pub struct WindowScanner<'a, T> {
    values: &'a [T],
    window_size: usize,
    /// Start index of the next window to yield.
    start: usize,
    /// Sum of [start, start + window_size); stale once `start` passes the last window.
    sum: T,
}

impl<'a, T: WindowValue> WindowScanner<'a, T> {
    /// Create a scanner positioned on the first window.
    ///
    /// Returns `None` when no window of `window_size` fits, i.e. when
    /// `window_size == 0` or `window_size > values.len()`.
    pub fn new(values: &'a [T], window_size: usize) -> Option<Self> {
        if window_size == 0 || window_size > values.len() {
            return None;
        }
        let sum = values[1..window_size]
            .iter()
            .fold(values[0], |acc, &v| acc + v);
        Some(Self {
            values,
            window_size,
            start: 0,
            sum,
        })
    }

    /// Return the configured window size.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Sum of the window the scanner is positioned on, or `None` once exhausted.
    pub fn current_sum(&self) -> Option<T> {
        (self.remaining() > 0).then_some(self.sum)
    }

    /// Expose the scanned sequence.
    pub fn values(&self) -> &'a [T] {
        self.values
    }

    fn remaining(&self) -> usize {
        (self.values.len() + 1).saturating_sub(self.start + self.window_size)
    }
}

impl<'a, T: WindowValue> Iterator for WindowScanner<'a, T> {
    type Item = Window<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }
        let start = self.start;
        let end = start + self.window_size;
        let window = Window {
            start,
            end,
            sum: self.sum,
        };
        // Slide: drop values[start], take values[end] if there is one.
        if end < self.values.len() {
            self.sum = self.sum - self.values[start] + self.values[end];
        }
        self.start += 1;
        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl<'a, T: WindowValue> ExactSizeIterator for WindowScanner<'a, T> {}

impl<'a, T: WindowValue> std::iter::FusedIterator for WindowScanner<'a, T> {}
