// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::fmt::Debug;

use crate::IntervalMap;

/// The reference walkthrough: `(begin, end, value)` applied to a map with
/// default `'A'`, paired with the boundaries expected after each step.
pub const SCENARIO: &[((i64, i64, char), &[(i64, char)])] = &[
    ((2, 5, 'C'), &[(2, 'C'), (5, 'A')]),
    ((1, 9, 'B'), &[(1, 'B'), (9, 'A')]),
    ((2, 5, 'C'), &[(1, 'B'), (2, 'C'), (5, 'B'), (9, 'A')]),
    ((3, 4, 'D'), &[(1, 'B'), (2, 'C'), (3, 'D'), (4, 'C'), (5, 'B'), (9, 'A')]),
    ((4, 6, 'D'), &[(1, 'B'), (2, 'C'), (3, 'D'), (6, 'B'), (9, 'A')]),
    ((2, 4, 'D'), &[(1, 'B'), (2, 'D'), (6, 'B'), (9, 'A')]),
];

/// Lookups over `0..=10` after the full scenario.
pub const SCENARIO_FINAL_ROW: &str = "ABDDDDBBBAA";

/// Default value of the scenario map.
pub const SCENARIO_DEFAULT: char = 'A';

/// Build the map at the end of the scenario.
pub fn scenario_map() -> IntervalMap<i64, char> {
    let mut map = IntervalMap::new(SCENARIO_DEFAULT);
    for &((begin, end, value), _) in SCENARIO {
        map.assign(begin, end, value);
    }
    map
}

/// Collect boundaries into owned pairs for easy comparison.
pub fn boundary_pairs<K: Clone, V: Clone>(map: &IntervalMap<K, V>) -> Vec<(K, V)> {
    map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

/// Render lookups over `keys` as one string, e.g. `"ABDDDDBBBAA"`.
pub fn lookup_row<K, I>(map: &IntervalMap<K, char>, keys: I) -> String
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    keys.into_iter().map(|key| *map.at(&key)).collect()
}

/// Panic with a readable message if `map` is not canonical.
pub fn assert_canonical<K: Ord + Clone + Debug, V: PartialEq + Clone + Debug>(
    map: &IntervalMap<K, V>,
) {
    if let Err(err) = map.verify() {
        panic!("map is not canonical: {}\n{:?}", err, map);
    }
}
