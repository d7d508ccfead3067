use crate::traits::WindowValue;
use crate::WindowScanner;

/// Window size used when none is configured.
pub const DEFAULT_WINDOW_SIZE: usize = 1;

pub struct WindowScannerBuilder<'a, T> {
    values: &'a [T],
    window_size: Option<usize>,
}

impl<'a, T: WindowValue> WindowScannerBuilder<'a, T> {
    pub fn new(values: &'a [T]) -> Self {
        Self {
            values,
            window_size: None,
        }
    }
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = Some(window_size);
        self
    }
    /// Returns `None` when the configured window does not fit the sequence.
    pub fn build(self) -> Option<WindowScanner<'a, T>> {
        let k = self.window_size.unwrap_or(DEFAULT_WINDOW_SIZE);
        WindowScanner::new(self.values, k)
    }
}
