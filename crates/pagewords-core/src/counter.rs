//! Frequency counting.
//!
//! [`Counter`] maps a string key to the number of times it was seen. Keys
//! are only ever added or incremented. An empty key is silently ignored so
//! callers can feed raw tokens without filtering first.

use std::collections::HashMap;
use std::collections::hash_map::{Iter, Keys};

/// A string → occurrence count table.
///
/// Not synchronized: one owner accumulates into it, and partial counters
/// built elsewhere are combined with [`Counter::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counter {
    counts: HashMap<String, usize>,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `key`, returning the updated count.
    ///
    /// Returns `None` without touching the table when `key` is empty.
    pub fn count(&mut self, key: &str) -> Option<usize> {
        self.add(key, 1)
    }

    /// Count `n` occurrences of `key` at once.
    pub fn add(&mut self, key: &str, n: usize) -> Option<usize> {
        if key.is_empty() || n == 0 {
            return None;
        }
        if let Some(slot) = self.counts.get_mut(key) {
            *slot += n;
            return Some(*slot);
        }
        self.counts.insert(key.to_owned(), n);
        Some(n)
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.counts.get(key).copied()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, usize> {
        self.counts.iter()
    }

    pub fn keys(&self) -> Keys<'_, String, usize> {
        self.counts.keys()
    }

    /// Fold every count of `other` into `self`.
    pub fn merge(&mut self, other: Counter) {
        if self.counts.is_empty() {
            self.counts = other.counts;
            return;
        }
        for (key, n) in other.counts {
            *self.counts.entry(key).or_insert(0) += n;
        }
    }
}

impl<'a> IntoIterator for &'a Counter {
    type Item = (&'a String, &'a usize);
    type IntoIter = Iter<'a, String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Counter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut counter = Counter::new();
        for key in iter {
            counter.count(key.as_ref());
        }
        counter
    }
}
