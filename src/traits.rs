//! Core trait definitions shared by the pattern implementations.
//!
//! Two seams are exposed here:
//! - [`WindowValue`]: the numeric bound required by the sliding-window and
//!   pointer-based scans (anything that can be added, subtracted and ordered).
//! - [`Record`]: a keyed record whose fields can be looked up by name and
//!   rendered as a string, used by [`group_by`](crate::patterns::frequency_counter::group_by).

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::ops::{Add, Sub};

/// Numeric element type accepted by the window scans.
///
/// Sums accumulate in the same domain as the elements: integer types keep
/// their native overflow semantics, floating-point types their rounding.
/// Implemented automatically for every type meeting the bounds.
///
/// Intermediate results count too. The first window is folded left to right
/// and each slide computes `sum - outgoing + incoming`, so an integer scan can
/// overflow (panicking in debug builds, wrapping in release) even when every
/// complete window sum is representable. Widen the element type when inputs
/// approach its limits.
pub trait WindowValue: Copy + PartialOrd + Add<Output = Self> + Sub<Output = Self> {}

impl<T> WindowValue for T where T: Copy + PartialOrd + Add<Output = T> + Sub<Output = T> {}

/// A record whose named fields can be rendered as group keys.
///
/// Semantics:
/// - `field(name)` returns `Some(text)` when the record carries a field called
///   `name`, and `None` otherwise.
/// - The returned text is the *stringified* value; two records land in the
///   same group exactly when their rendered values are equal.
pub trait Record {
    /// Look up a field by name and render it as a string.
    fn field(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl<V: Display> Record for HashMap<String, V> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Owned(v.to_string()))
    }
}

impl<V: Display> Record for BTreeMap<String, V> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Owned(v.to_string()))
    }
}

/// JSON objects are records; string values render without quotes, every
/// other value renders as its JSON text. Non-object values have no fields.
#[cfg(feature = "json")]
impl Record for serde_json::Value {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match self.as_object()?.get(name)? {
            serde_json::Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_pair<T: WindowValue>(a: T, b: T) -> T {
        a + b
    }

    #[test]
    fn window_value_covers_integers_and_floats() {
        assert_eq!(sum_pair(2i32, 3), 5);
        assert_eq!(sum_pair(2u64, 3), 5);
        assert!((sum_pair(0.5f64, 0.25) - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn map_records_render_display() {
        let mut r: HashMap<String, i32> = HashMap::new();
        r.insert("age".to_string(), 42);
        assert_eq!(r.field("age").as_deref(), Some("42"));
        assert_eq!(r.field("name"), None);

        let mut b: BTreeMap<String, &str> = BTreeMap::new();
        b.insert("t".to_string(), "a");
        assert_eq!(b.field("t").as_deref(), Some("a"));
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_records_unquote_strings() {
        let v = serde_json::json!({"t": "a", "n": 3, "flag": true});
        assert_eq!(v.field("t").as_deref(), Some("a"));
        assert_eq!(v.field("n").as_deref(), Some("3"));
        assert_eq!(v.field("flag").as_deref(), Some("true"));
        assert_eq!(v.field("missing"), None);
        assert_eq!(serde_json::json!([1, 2]).field("t"), None);
    }
}
