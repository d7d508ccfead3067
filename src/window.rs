//! Located windows produced by the scanner.
//!
//! Each `Window` represents a contiguous range [start, end) of a sequence
//! together with the sum of its elements.

/// A contiguous, fixed-length range of a sequence and its sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window<T> {
    /// Inclusive start index.
    pub start: usize,
    /// Exclusive end index; the window covers [start, end).
    pub end: usize,
    /// Sum of the elements in [start, end).
    pub sum: T,
}

impl<T> Window<T> {
    /// Number of elements covered by the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the window covers no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The covered elements of `values`.
    ///
    /// # Panics
    /// Panics if the window does not lie within `values`.
    #[inline]
    pub fn slice<'a, U>(&self, values: &'a [U]) -> &'a [U] {
        &values[self.start..self.end]
    }
}
