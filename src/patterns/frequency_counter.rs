//! Frequency counter: collect values (or their counts) in a hash map instead
//! of comparing elements pairwise.
//!
//! Building a map in one pass and consulting it in a second turns many O(n²)
//! nested-loop comparisons into O(n) scans. The functions here use that idea to:
//! - group records by a key, keeping first-seen group order ([`group_by`], [`group_by_key`]),
//! - check whether two sequences are permutations of each other by "unstacking"
//!   a frequency map ([`is_permutation`], [`is_anagram`], [`same_frequency`]),
//! - detect a zero-sum subarray from repeated prefix sums ([`has_zero_sum_subarray`]).

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::traits::Record;

/// Key assigned to records that do not carry the requested field.
pub const MISSING_KEY: &str = "undefined";

/// Ordered grouping of items by a stringified key.
///
/// Groups appear in the order their key was first seen; items inside a group
/// keep their input order. Every grouped item appears in exactly one group.
#[derive(Debug, Clone, PartialEq)]
pub struct Groups<T> {
    index: HashMap<String, usize>,
    groups: Vec<(String, Vec<T>)>,
}

impl<T> Default for Groups<T> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }
}

impl<T> Groups<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` to the group for `key`, creating the group if needed.
    pub fn push(&mut self, key: String, item: T) {
        match self.index.get(&key) {
            Some(&slot) => self.groups[slot].1.push(item),
            None => {
                self.index.insert(key.clone(), self.groups.len());
                self.groups.push((key, vec![item]));
            }
        }
    }

    /// Items grouped under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&[T]> {
        self.index
            .get(key)
            .map(|&slot| self.groups[slot].1.as_slice())
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(k, _)| k.as_str())
    }

    /// `(key, items)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[T])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Total number of grouped items.
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|(_, v)| v.len()).sum()
    }

    pub fn into_inner(self) -> Vec<(String, Vec<T>)> {
        self.groups
    }
}

impl<T> IntoIterator for Groups<T> {
    type Item = (String, Vec<T>);
    type IntoIter = std::vec::IntoIter<(String, Vec<T>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Group items by the stringified result of `key_fn`.
pub fn group_by_key<T, K, F, I>(items: I, key_fn: F) -> Groups<T>
where
    I: IntoIterator<Item = T>,
    K: ToString,
    F: Fn(&T) -> K,
{
    let mut groups = Groups::new();
    for item in items {
        let key = key_fn(&item).to_string();
        groups.push(key, item);
    }
    groups
}

/// Group records by the value of their field named `key`.
///
/// Records without that field are grouped under [`MISSING_KEY`].
///
/// ```
/// use std::collections::BTreeMap;
/// use algo_patterns::group_by;
///
/// let rec = |t: &str| BTreeMap::from([("t".to_string(), t.to_string())]);
/// let groups = group_by(vec![rec("a"), rec("b"), rec("a")], "t");
/// assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["a", "b"]);
/// assert_eq!(groups.get("a").map(<[_]>::len), Some(2));
/// ```
pub fn group_by<R, I>(records: I, key: &str) -> Groups<R>
where
    R: Record,
    I: IntoIterator<Item = R>,
{
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("group_by", key);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    group_by_key(records, |r| {
        r.field(key)
            .map(|v| v.into_owned())
            .unwrap_or_else(|| MISSING_KEY.to_string())
    })
}

/// Count occurrences of each character of `s`.
pub fn char_frequencies(s: &str) -> HashMap<char, usize> {
    frequencies(s.chars())
}

fn frequencies<K, I>(items: I) -> HashMap<K, usize>
where
    K: Eq + Hash,
    I: IntoIterator<Item = K>,
{
    items.into_iter().fold(HashMap::new(), |mut map, k| {
        *map.entry(k).or_insert(0) += 1;
        map
    })
}

/// Returns true if `second` is a rearrangement of `first`.
///
/// Builds the frequency map of `first`, then "unstacks" it while scanning
/// `second`: an element that is absent or already exhausted fails
/// immediately. Finally every counted element must have been consumed.
pub fn is_permutation<K, A, B>(first: A, second: B) -> bool
where
    K: Eq + Hash,
    A: IntoIterator<Item = K>,
    B: IntoIterator<Item = K>,
{
    let mut lookup = frequencies(first);
    let mut outstanding: usize = lookup.values().sum();
    for k in second {
        match lookup.get_mut(&k) {
            Some(count) if *count > 0 => {
                *count -= 1;
                outstanding -= 1;
            }
            _ => return false,
        }
    }
    outstanding == 0
}

/// Returns true if `a` and `b` contain the same characters with the same counts.
///
/// Strings of different character length are rejected before any map is built.
///
/// ```
/// use algo_patterns::is_anagram;
///
/// assert!(is_anagram("listen", "silent"));
/// assert!(!is_anagram("abc", "abd"));
/// assert!(!is_anagram("a", "ab"));
/// ```
pub fn is_anagram(a: &str, b: &str) -> bool {
    if a.chars().count() != b.chars().count() {
        return false;
    }
    is_permutation(a.chars(), b.chars())
}

/// Returns true if the decimal representations of `a` and `b` use the same
/// digits with the same counts (e.g. 182 and 281).
pub fn same_frequency(a: u64, b: u64) -> bool {
    let (a, b) = (a.to_string(), b.to_string());
    a.len() == b.len() && is_permutation(a.bytes(), b.bytes())
}

/// Returns true if some non-empty contiguous run of `values` sums to zero.
///
/// Two equal prefix sums bracket a zero-sum run, and a zero prefix sum is one
/// by itself. Prefix sums are widened to `i128`, so no input can overflow them.
pub fn has_zero_sum_subarray(values: &[i64]) -> bool {
    let mut seen = HashSet::from([0i128]);
    let mut prefix = 0i128;
    for &v in values {
        prefix += i128::from(v);
        if !seen.insert(prefix) {
            return true;
        }
    }
    false
}
