// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for arbitrary assignment sequences.
//!
//! Keys are `u8` so a dense array over the whole key space is a complete
//! model. After every assignment the map must agree with the model at every
//! key and must still be canonical. The release profile keeps debug
//! assertions on, so the runtime contracts inside `assign` fire too.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stepmap::IntervalMap;

#[derive(Debug, Arbitrary)]
struct Assignment {
    begin: u8,
    end: u8,
    /// Few distinct values so merges actually happen.
    value: u8,
}

#[derive(Debug, Arbitrary)]
struct AssignSequenceInput {
    default: u8,
    ops: Vec<Assignment>,
}

fuzz_target!(|input: AssignSequenceInput| {
    let default = input.default % 4;
    let mut map = IntervalMap::new(default);
    let mut model = [default; 256];

    for op in input.ops.iter().take(256) {
        let value = op.value % 4;
        map.assign(op.begin, op.end, value);
        if op.begin < op.end {
            model[op.begin as usize..op.end as usize].fill(value);
        }

        for key in 0..=255u8 {
            assert_eq!(
                *map.at(&key),
                model[key as usize],
                "lookup mismatch at {} after {:?}",
                key,
                op
            );
        }

        // Each boundary must be a real change point of the model.
        let changes = (1..256).filter(|&k| model[k] != model[k - 1]).count()
            + usize::from(model[0] != default);
        assert_eq!(map.len(), changes, "non-minimal boundary set after {:?}", op);
        assert!(map.verify().is_ok());
    }
});
