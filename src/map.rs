// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The canonical interval map.
//!
//! A step function over an ordered key space, stored as the set of keys where
//! the value changes. Everything below the first boundary maps to the default
//! value. The boundary set is kept canonical: no two neighbouring boundaries
//! carry the same value, and the first boundary never repeats the default.
//! Because the canonical form of a step function is unique, two maps compare
//! equal exactly when they answer every lookup the same way.
//!
//! # Invariants
//!
//! - Key-adjacent boundaries have different values.
//! - The first boundary's value differs from the default.
//! - Hence every boundary changes the value seen immediately to its left.
//! - `at` is total: default below the first boundary, else the predecessor.
//!
//! Debug builds check the first two after every `assign`
//! (see [`crate::verify::contracts`]).

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Bound, Index, Range};

use crate::iter::{Boundaries, Run, Runs};
use crate::verify::{contracts, validate_canonical, InvariantError};

/// Maps every key of `K` to a value of `V` through a canonical set of
/// half-open intervals.
///
/// ```
/// use stepmap::IntervalMap;
///
/// let mut map = IntervalMap::new('A');
/// map.assign(2, 5, 'C');
///
/// assert_eq!(*map.at(&1), 'A');
/// assert_eq!(*map.at(&2), 'C');
/// assert_eq!(*map.at(&5), 'A');
/// assert_eq!(map.len(), 2);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct IntervalMap<K, V> {
    /// Value for every key below the first boundary.
    default: V,
    /// `k -> v`: keys in `[k, next boundary)` map to `v`.
    boundaries: BTreeMap<K, V>,
}

impl<K, V> IntervalMap<K, V> {
    /// Create a map where every key maps to `default`.
    pub fn new(default: V) -> Self {
        Self {
            default,
            boundaries: BTreeMap::new(),
        }
    }

    /// The value of every key below the first boundary.
    pub fn default_value(&self) -> &V {
        &self.default
    }

    /// Number of boundaries. The map has `len() + 1` runs.
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    /// True when every key maps to the default value.
    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// Canonical boundaries in increasing key order.
    pub fn iter(&self) -> Boundaries<'_, K, V> {
        Boundaries::new(self.boundaries.iter())
    }

    /// Alias for [`iter`](Self::iter), reads better at diagnostic call sites.
    pub fn boundaries(&self) -> Boundaries<'_, K, V> {
        self.iter()
    }

    /// Maximal constant runs in increasing key order.
    ///
    /// The first run is unbounded below and carries the default value; the
    /// last run is unbounded above.
    pub fn runs(&self) -> Runs<'_, K, V> {
        Runs::new(&self.default, self.boundaries.iter())
    }
}

impl<K: Ord, V> IntervalMap<K, V> {
    pub fn first_boundary(&self) -> Option<(&K, &V)> {
        self.boundaries.first_key_value()
    }

    pub fn last_boundary(&self) -> Option<(&K, &V)> {
        self.boundaries.last_key_value()
    }

    /// Look up the value of `key`.
    ///
    /// Predecessor search: the greatest boundary `<= key` wins, and keys
    /// below every boundary get the default. O(log n).
    pub fn at(&self, key: &K) -> &V {
        self.boundaries
            .range(..=key)
            .next_back()
            .map_or(&self.default, |(_, value)| value)
    }

    /// The maximal run containing `key`.
    pub fn run_at(&self, key: &K) -> Run<'_, K, V> {
        let (start, value) = match self.boundaries.range(..=key).next_back() {
            Some((start, value)) => (Some(start), value),
            None => (None, &self.default),
        };
        let end = self
            .boundaries
            .range((Bound::Excluded(key), Bound::Unbounded))
            .next()
            .map(|(end, _)| end);

        Run { start, end, value }
    }

    /// Value in effect immediately left of `key`, ignoring any boundary at
    /// `key` itself.
    fn value_before(&self, key: &K) -> &V {
        self.boundaries
            .range(..key)
            .next_back()
            .map_or(&self.default, |(_, value)| value)
    }
}

impl<K: Ord + Clone, V: PartialEq + Clone> IntervalMap<K, V> {
    /// Assign `value` to every key in `[begin, end)`.
    ///
    /// Does nothing when `!(begin < end)`. Keys outside the interval keep
    /// their value and the boundary set stays canonical.
    ///
    /// ```
    /// use stepmap::IntervalMap;
    ///
    /// let mut map = IntervalMap::new('A');
    /// map.assign(1, 9, 'B');
    /// map.assign(3, 4, 'B');
    /// map.assign(6, 2, 'Z');
    ///
    /// let bounds: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
    /// assert_eq!(bounds, vec![(1, 'B'), (9, 'A')]);
    /// ```
    pub fn assign(&mut self, begin: K, end: K, value: V) {
        if !(begin < end) {
            return;
        }

        // Must come from the untouched map: planting `begin` first could
        // shadow the true value at `end`.
        let tail = self.at(&end).clone();

        if tail == value {
            self.boundaries.remove(&end);
        } else {
            self.boundaries.insert(end.clone(), tail.clone());
        }

        // Only `end` has changed so far, and `end > begin`, so the left
        // neighbour is still the pre-assignment one.
        let plant_begin = *self.value_before(&begin) != value;

        // Purge [begin, end). An old boundary at `begin` is replaced below.
        while let Some(stale) = self.first_key_in(&begin..&end) {
            self.boundaries.remove(&stale);
        }

        if plant_begin {
            self.boundaries.insert(begin.clone(), value.clone());
        }

        contracts::check_canonical_near(&self.default, &self.boundaries, &begin, &end);
        contracts::check_assign_postcondition(self, &begin, &end, &value, &tail);
    }

    fn first_key_in(&self, range: Range<&K>) -> Option<K> {
        self.boundaries.range(range).next().map(|(key, _)| key.clone())
    }

    /// Build the canonical map of an arbitrary step list.
    ///
    /// Each `(k, v)` step means "from `k` onwards the value is `v`". Steps may
    /// arrive in any order; for repeated keys the last one wins. Steps that
    /// don't change the value are dropped.
    ///
    /// ```
    /// use stepmap::IntervalMap;
    ///
    /// let map = IntervalMap::from_steps(0, [(5, 1), (1, 1), (3, 1), (7, 0)]);
    /// let bounds: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
    /// assert_eq!(bounds, vec![(1, 1), (7, 0)]);
    /// ```
    pub fn from_steps<I>(default: V, steps: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let sorted: BTreeMap<K, V> = steps.into_iter().collect();

        let mut boundaries = BTreeMap::new();
        let mut current = &default;
        for (key, value) in &sorted {
            if value != current {
                boundaries.insert(key.clone(), value.clone());
                current = value;
            }
        }

        contracts::check_canonical(&default, &boundaries);
        Self {
            default,
            boundaries,
        }
    }

    /// Build a map from a boundary list that is already canonical.
    ///
    /// Keys must be strictly increasing, neighbouring values must differ, and
    /// the first value must differ from `default`.
    pub fn try_from_boundaries<I>(default: V, boundaries: I) -> Result<Self, InvariantError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let entries: Vec<(K, V)> = boundaries.into_iter().collect();
        validate_canonical(&default, entries.iter().map(|(key, value)| (key, value)))?;

        Ok(Self {
            default,
            boundaries: entries.into_iter().collect(),
        })
    }

    /// Re-check the canonical-form invariants of this map.
    pub fn verify(&self) -> Result<(), InvariantError> {
        validate_canonical(&self.default, self.boundaries.iter())
    }
}

impl<K: Ord + Clone, V: PartialEq + Clone> Extend<(Range<K>, V)> for IntervalMap<K, V> {
    fn extend<I: IntoIterator<Item = (Range<K>, V)>>(&mut self, iter: I) {
        for (range, value) in iter {
            self.assign(range.start, range.end, value);
        }
    }
}

impl<K: Ord, V> Index<&K> for IntervalMap<K, V> {
    type Output = V;

    fn index(&self, key: &K) -> &V {
        self.at(key)
    }
}

impl<K, V: Default> Default for IntervalMap<K, V> {
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<'a, K, V> IntoIterator for &'a IntervalMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Boundaries<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntervalMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalMap")
            .field("default", &self.default)
            .field("boundaries", &self.boundaries)
            .finish()
    }
}
