// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the canonical interval map.
//!
//! These are debug-mode assertions run at the end of every mutation:
//!
//! 1. **Zero-cost in release builds** (guarded by `cfg!(debug_assertions)`)
//! 2. **Early failure detection** while tests and fuzzers run
//!
//! `assign` only checks the boundaries it could have touched, so debug
//! builds keep its logarithmic cost.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function            | Property                                               |
//! |------------------------------|--------------------------------------------------------|
//! | `check_canonical`            | no adjacent duplicates, first != default               |
//! | `check_canonical_near`       | the same, around the assigned range                    |
//! | `check_assign_postcondition` | `[begin, end)` reads the new value, `end` the old tail |

use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Included, Unbounded};

use crate::IntervalMap;

/// Check that a boundary map is canonical for `default`.
///
/// O(n). Used where the whole map is rebuilt anyway.
///
/// # Panics (debug builds only)
/// Panics if the first boundary repeats `default` or two neighbouring
/// boundaries share a value.
#[inline]
pub fn check_canonical<K: Ord, V: PartialEq>(default: &V, boundaries: &BTreeMap<K, V>) {
    if !cfg!(debug_assertions) {
        return;
    }

    let mut previous = default;
    for (position, value) in boundaries.values().enumerate() {
        debug_assert!(
            value != previous,
            "Contract violation: canonical form - boundary {} repeats the value to its left{}",
            position,
            if position == 0 { " (the default)" } else { "" }
        );
        previous = value;
    }
}

/// Check canonical form around `[begin, end]` after an assignment.
///
/// Covers the last boundary before `begin`, any boundaries at `begin` and
/// `end`, and the first boundary after `end`. At most four entries, found in
/// O(log n).
///
/// # Panics (debug builds only)
/// Panics if two neighbouring boundaries in the window share a value, or if
/// the window starts at the first boundary and it repeats `default`.
#[inline]
pub fn check_canonical_near<K: Ord, V: PartialEq>(
    default: &V,
    boundaries: &BTreeMap<K, V>,
    begin: &K,
    end: &K,
) {
    if !cfg!(debug_assertions) {
        return;
    }

    let lower = boundaries.range(..begin).next_back().map(|(key, _)| key);
    let upper = boundaries
        .range((Excluded(end), Unbounded))
        .next()
        .map(|(key, _)| key);

    let window = boundaries.range((
        lower.map_or(Unbounded, Included),
        upper.map_or(Unbounded, Included),
    ));

    // Without a predecessor the window opens on the first boundary, whose left
    // neighbour is the default.
    let mut previous = if lower.is_none() { Some(default) } else { None };
    for value in window.map(|(_, value)| value) {
        if let Some(left) = previous {
            debug_assert!(
                value != left,
                "Contract violation: canonical form - boundary near [begin, end] repeats the value to its left"
            );
        }
        previous = Some(value);
    }
}

/// Check what `assign(begin, end, value)` promises at its two edges.
///
/// `tail` is the value `end` carried before the call.
///
/// # Panics (debug builds only)
/// Panics if `begin` doesn't read `value`, `end` doesn't read `tail`, or a
/// boundary is left strictly inside the interval.
#[inline]
pub fn check_assign_postcondition<K: Ord, V: PartialEq>(
    map: &IntervalMap<K, V>,
    begin: &K,
    end: &K,
    value: &V,
    tail: &V,
) {
    if !cfg!(debug_assertions) {
        return;
    }

    debug_assert!(
        map.at(begin) == value,
        "Contract violation: assign - begin does not read the assigned value"
    );
    debug_assert!(
        map.at(end) == tail,
        "Contract violation: assign - end no longer reads its previous value"
    );

    // The run holding `begin` must reach at least to `end`.
    let run = map.run_at(begin);
    debug_assert!(
        run.end.is_none_or(|next| next >= end),
        "Contract violation: assign - boundary left inside [begin, end)"
    );
}
