//! Tests for the canonical-form invariants and the assignment contract.
//!
//! - neighbouring boundaries carry different values
//! - the first boundary differs from the default
//! - lookups are total and follow the predecessor boundary
//!
//! Plus the semantic contract of `assign`: inside the range reads the new
//! value, outside keeps the old one, empty ranges change nothing, and
//! repeating an assignment changes nothing.

use super::common::{
    assert_canonical, boundary_pairs, build_map, lookup_row, snapshot, Op, VALUE_COUNT,
};
use proptest::prelude::*;
use stepmap::{IntervalMap, InvariantError};

fn op_strategy() -> impl Strategy<Value = Op> {
    (any::<i8>(), any::<i8>(), 0..VALUE_COUNT)
}

fn history_strategy() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op_strategy(), 0..32)
}

// ============================================================================
// INVARIANT PRESERVATION
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(400))]

    /// Both canonical-form rules hold after every single assignment.
    #[test]
    fn prop_invariants_hold_after_each_assign(ops in history_strategy()) {
        let mut map = IntervalMap::new(0u8);
        for &(begin, end, value) in &ops {
            map.assign(begin, end, value);

            let pairs = boundary_pairs(&map);
            if let Some(&(_, first)) = pairs.first() {
                prop_assert_ne!(first, *map.default_value(), "first boundary repeats the default");
            }
            for pair in pairs.windows(2) {
                prop_assert!(pair[0].0 < pair[1].0, "keys out of order");
                prop_assert_ne!(pair[0].1, pair[1].1, "adjacent boundaries share a value");
            }
        }
        assert_canonical(&map);
    }

    /// `at` is the value of the greatest boundary <= key, or the default.
    #[test]
    fn prop_lookup_is_predecessor_value(ops in history_strategy(), key in any::<i8>()) {
        let map = build_map(&ops);
        let expected = boundary_pairs(&map)
            .into_iter()
            .filter(|&(boundary, _)| boundary <= key)
            .last()
            .map_or(*map.default_value(), |(_, value)| value);
        prop_assert_eq!(*map.at(&key), expected);
        prop_assert_eq!(map[&key], expected);
    }
}

// ============================================================================
// ASSIGNMENT SEMANTICS
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(400))]

    /// Inside `[begin, end)` reads `value`; everything else is untouched.
    #[test]
    fn prop_assign_only_touches_its_range(history in history_strategy(), op in op_strategy()) {
        let mut map = build_map(&history);
        let before = snapshot(&map);

        let (begin, end, value) = op;
        map.assign(begin, end, value);
        let after = snapshot(&map);

        for (index, key) in (i8::MIN..=i8::MAX).enumerate() {
            if begin <= key && key < end {
                prop_assert_eq!(after[index], value, "key {} inside range", key);
            } else {
                prop_assert_eq!(after[index], before[index], "key {} outside range", key);
            }
        }
    }

    /// `!(begin < end)` leaves lookups and boundary count unchanged.
    #[test]
    fn prop_empty_interval_is_noop(
        history in history_strategy(),
        a in any::<i8>(),
        b in any::<i8>(),
        value in 0..VALUE_COUNT,
    ) {
        let (begin, end) = if a < b { (b, a) } else { (a, b) };
        let mut map = build_map(&history);
        let before = map.clone();

        map.assign(begin, end, value);
        prop_assert_eq!(map.len(), before.len());
        prop_assert_eq!(snapshot(&map), snapshot(&before));
        prop_assert_eq!(map, before);
    }

    /// Assigning twice is the same as assigning once.
    #[test]
    fn prop_assign_idempotent(history in history_strategy(), op in op_strategy()) {
        let (begin, end, value) = op;

        let mut once = build_map(&history);
        once.assign(begin, end, value);

        let mut twice = once.clone();
        twice.assign(begin, end, value);

        prop_assert_eq!(twice, once);
    }

    /// Equal step functions have identical boundary sets, no matter how they
    /// were built.
    #[test]
    fn prop_canonical_form_is_unique(history in history_strategy()) {
        let map = build_map(&history);

        // Rebuild by assigning every bounded run, widest runs first.
        let mut rebuilt = IntervalMap::new(0u8);
        let mut runs: Vec<(i8, i8, u8)> = map
            .runs()
            .filter_map(|run| Some((*run.start?, *run.end?, *run.value)))
            .collect();
        runs.sort_by_key(|&(start, end, _)| std::cmp::Reverse(i16::from(end) - i16::from(start)));
        for (start, end, value) in runs {
            rebuilt.assign(start, end, value);
        }

        prop_assert_eq!(snapshot(&rebuilt), snapshot(&map));
        prop_assert_eq!(boundary_pairs(&rebuilt), boundary_pairs(&map));
    }
}

// ============================================================================
// CONCRETE INVARIANT CASES
// ============================================================================

#[test]
fn first_boundary_never_repeats_default() {
    let mut map = IntervalMap::new('A');
    map.assign(0, 5, 'B');
    map.assign(0, 3, 'A');
    assert_eq!(boundary_pairs(&map), vec![(3, 'B'), (5, 'A')]);
    assert_canonical(&map);
}

#[test]
fn neighbours_merge_when_gap_is_filled() {
    let mut map = IntervalMap::new('A');
    map.assign(0, 2, 'B');
    map.assign(4, 6, 'B');
    map.assign(2, 4, 'B');
    assert_eq!(boundary_pairs(&map), vec![(0, 'B'), (6, 'A')]);
}

#[test]
fn lookup_below_every_boundary_is_default() {
    let mut map = IntervalMap::new('A');
    map.assign(i32::MIN + 1, 0, 'B');
    assert_eq!(*map.at(&i32::MIN), 'A');
    assert_eq!(lookup_row(&map, [i32::MIN, i32::MIN + 1, -1, 0]), "ABBA");
}

#[test]
fn verify_reports_broken_input_lists() {
    assert_eq!(
        IntervalMap::try_from_boundaries(0u8, [(1i8, 1u8), (2, 1)]).unwrap_err(),
        InvariantError::AdjacentDuplicate { position: 1 }
    );
    assert_eq!(
        IntervalMap::try_from_boundaries(0u8, [(1i8, 0u8)]).unwrap_err(),
        InvariantError::RedundantFirstBoundary
    );
}
