//! Differential testing: compare the compact map against the dense oracle.
//!
//! Every generated assignment is applied to both. After each step the two
//! must agree on every key of the `i8` domain and on the canonical boundary
//! list. If they disagree, the oracle is right.

use super::common::{Op, VALUE_COUNT};
use super::oracles::{map_boundaries, oracle_is_canonical, DenseModel};
use proptest::prelude::*;
use stepmap::IntervalMap;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Arbitrary assignment, including empty and inverted intervals.
fn op_strategy() -> impl Strategy<Value = Op> {
    (any::<i8>(), any::<i8>(), 0..VALUE_COUNT)
}

/// Assignments clustered in a narrow window so they overlap a lot.
fn clustered_op_strategy() -> impl Strategy<Value = Op> {
    (-12i8..12, -12i8..12, 0..VALUE_COUNT)
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(prop_oneof![op_strategy(), clustered_op_strategy()], 0..48)
}

// =============================================================================
// ASSIGN + LOOKUP: map vs oracle
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Differential test: lookups and boundaries agree after every step.
    #[test]
    fn diff_assign_sequence(default in 0..VALUE_COUNT, ops in ops_strategy()) {
        let mut map = IntervalMap::new(default);
        let mut model = DenseModel::new(default);

        for (step, &(begin, end, value)) in ops.iter().enumerate() {
            map.assign(begin, end, value);
            model.assign(begin, end, value);

            for key in i8::MIN..=i8::MAX {
                prop_assert_eq!(
                    *map.at(&key), model.at(key),
                    "lookup of {} differs after step {} assign({}, {}, {})",
                    key, step, begin, end, value
                );
            }
            prop_assert_eq!(
                map_boundaries(&map), model.boundaries(),
                "boundaries differ after step {}", step
            );
        }
    }

    /// Differential test: the map's boundary list passes the brute-force
    /// canonical check and `verify` agrees with it.
    #[test]
    fn diff_canonical_check(ops in ops_strategy()) {
        let mut map = IntervalMap::new(0u8);
        for &(begin, end, value) in &ops {
            map.assign(begin, end, value);
        }

        let boundaries = map_boundaries(&map);
        prop_assert!(oracle_is_canonical(0, &boundaries));
        prop_assert!(map.verify().is_ok());
    }
}

// =============================================================================
// RUNS: map vs oracle
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Differential test: `run_at` returns the oracle's maximal run.
    #[test]
    fn diff_run_at(ops in ops_strategy(), probe in any::<i8>()) {
        let mut map = IntervalMap::new(0u8);
        let mut model = DenseModel::new(0);
        for &(begin, end, value) in &ops {
            map.assign(begin, end, value);
            model.assign(begin, end, value);
        }

        let run = map.run_at(&probe);
        prop_assert!(run.contains(&probe));
        prop_assert_eq!(
            (run.start.copied(), run.end.copied(), *run.value),
            model.run_at(probe)
        );
    }

    /// Differential test: walking `runs()` reproduces every oracle lookup, and
    /// neighbouring runs never share a value.
    #[test]
    fn diff_runs_cover_domain(ops in ops_strategy()) {
        let mut map = IntervalMap::new(0u8);
        let mut model = DenseModel::new(0);
        for &(begin, end, value) in &ops {
            map.assign(begin, end, value);
            model.assign(begin, end, value);
        }

        let runs: Vec<_> = map.runs().collect();
        prop_assert_eq!(runs.len(), map.len() + 1);

        for pair in runs.windows(2) {
            prop_assert_ne!(pair[0].value, pair[1].value);
            prop_assert_eq!(pair[0].end, pair[1].start);
        }

        for key in i8::MIN..=i8::MAX {
            let covering: Vec<_> = runs.iter().filter(|run| run.contains(&key)).collect();
            prop_assert_eq!(covering.len(), 1, "key {} not covered exactly once", key);
            prop_assert_eq!(*covering[0].value, model.at(key));
        }
    }

    /// Differential test: canonicalizing the oracle's dense steps gives the
    /// same map as assigning.
    #[test]
    fn diff_from_steps(ops in ops_strategy()) {
        let mut map = IntervalMap::new(0u8);
        let mut model = DenseModel::new(0);
        for &(begin, end, value) in &ops {
            map.assign(begin, end, value);
            model.assign(begin, end, value);
        }

        // One step per key: maximally redundant input.
        let steps = (i8::MIN..=i8::MAX).map(|key| (key, model.at(key)));
        let rebuilt = IntervalMap::from_steps(0u8, steps);
        prop_assert_eq!(&rebuilt, &map);

        let validated = IntervalMap::try_from_boundaries(0u8, model.boundaries());
        prop_assert_eq!(validated.as_ref(), Ok(&map));
    }
}
