//! Assorted utilities and helpers.
//!
//! These are intentionally minimal; the pattern modules lean on them for
//! index arithmetic.

/// Midpoint of the inclusive index range [lo, hi], rounded down.
///
/// Computed as `lo + (hi - lo) / 2` so it never overflows, unlike `(lo + hi) / 2`.
#[inline]
pub fn midpoint(lo: usize, hi: usize) -> usize {
    debug_assert!(lo <= hi, "midpoint requires lo <= hi");
    lo + (hi - lo) / 2
}

#[cfg(test)]
mod tests {
    use super::midpoint;

    #[test]
    fn midpoint_rounds_down() {
        assert_eq!(midpoint(0, 0), 0);
        assert_eq!(midpoint(0, 1), 0);
        assert_eq!(midpoint(0, 4), 2);
        assert_eq!(midpoint(3, 8), 5);
    }

    #[test]
    fn midpoint_does_not_overflow() {
        let hi = usize::MAX;
        let lo = usize::MAX - 10;
        assert_eq!(midpoint(lo, hi), usize::MAX - 5);
    }
}
