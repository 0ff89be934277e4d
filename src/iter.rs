// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Read-only traversals of an [`IntervalMap`](crate::IntervalMap).
//!
//! Two views of the same step function:
//!
//! - [`Boundaries`]: the raw canonical `(key, value)` entries, one per change
//!   point. What a diagnostic dump prints.
//! - [`Runs`]: the maximal constant intervals between change points, including
//!   the unbounded run below the first boundary. Always one more run than
//!   boundaries.

use std::collections::btree_map;
use std::fmt;
use std::iter::FusedIterator;

/// Iterator over canonical boundaries in increasing key order.
pub struct Boundaries<'a, K, V> {
    inner: btree_map::Iter<'a, K, V>,
}

impl<K, V> Clone for Boundaries<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Boundaries<'a, K, V> {
    pub(crate) fn new(inner: btree_map::Iter<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Boundaries<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Boundaries<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for Boundaries<'_, K, V> {}

impl<K, V> FusedIterator for Boundaries<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Boundaries<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// A maximal half-open run `[start, end)` carrying one value.
///
/// `start == None` means unbounded below, `end == None` unbounded above.
#[derive(Debug, PartialEq, Eq)]
pub struct Run<'a, K, V> {
    pub start: Option<&'a K>,
    pub end: Option<&'a K>,
    pub value: &'a V,
}

impl<K, V> Clone for Run<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Run<'_, K, V> {}

impl<K: Ord, V> Run<'_, K, V> {
    /// True if `key` falls inside this run.
    pub fn contains(&self, key: &K) -> bool {
        self.start.is_none_or(|start| start <= key) && self.end.is_none_or(|end| key < end)
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Run<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.start {
            Some(start) => write!(f, "[{}", start)?,
            None => write!(f, "(-inf")?,
        }
        match self.end {
            Some(end) => write!(f, ", {}) -> {}", end, self.value),
            None => write!(f, ", +inf) -> {}", self.value),
        }
    }
}

/// Iterator over maximal constant runs, see [`IntervalMap::runs`](crate::IntervalMap::runs).
pub struct Runs<'a, K, V> {
    /// Start and value of the run not yet yielded. `None` once exhausted.
    pending: Option<(Option<&'a K>, &'a V)>,
    rest: btree_map::Iter<'a, K, V>,
}

impl<'a, K, V> Runs<'a, K, V> {
    pub(crate) fn new(default: &'a V, rest: btree_map::Iter<'a, K, V>) -> Self {
        Self {
            pending: Some((None, default)),
            rest,
        }
    }
}

impl<'a, K, V> Iterator for Runs<'a, K, V> {
    type Item = Run<'a, K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let (start, value) = self.pending.take()?;
        let end = match self.rest.next() {
            Some((key, next_value)) => {
                self.pending = Some((Some(key), next_value));
                Some(key)
            }
            None => None,
        };

        Some(Run { start, end, value })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.pending.is_some() {
            self.rest.len() + 1
        } else {
            0
        };
        (remaining, Some(remaining))
    }
}

impl<K, V> ExactSizeIterator for Runs<'_, K, V> {}

impl<K, V> FusedIterator for Runs<'_, K, V> {}
