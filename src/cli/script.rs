// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Assignment scripts: a default value plus an ordered list of range
//! assignments, read as JSON.
//!
//! ```json
//! {"default": "A", "ops": [{"begin": 2, "end": 5, "value": "C"}]}
//! ```

use std::fs;
use std::io::Read;

use anyhow::{Context, Result};
use serde::Deserialize;
use stepmap::IntervalMap;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    pub default: String,
    #[serde(default)]
    pub ops: Vec<Op>,
}

/// One `assign(begin, end, value)` call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Op {
    pub begin: i64,
    pub end: i64,
    pub value: String,
}

impl Op {
    fn new(begin: i64, end: i64, value: &str) -> Self {
        Self {
            begin,
            end,
            value: value.to_string(),
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "assign({}, {}, {})", self.begin, self.end, self.value)
    }
}

impl Script {
    /// The reference walkthrough used by `stepmap demo`.
    pub fn walkthrough() -> Self {
        Self {
            default: "A".to_string(),
            ops: vec![
                Op::new(2, 5, "C"),
                Op::new(1, 9, "B"),
                Op::new(2, 5, "C"),
                Op::new(3, 4, "D"),
                Op::new(4, 6, "D"),
                Op::new(2, 4, "D"),
            ],
        }
    }

    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid assignment script")
    }

    /// Read a script from `path`, or from stdin when `path` is `-`.
    pub fn load(path: &str) -> Result<Self> {
        let json = if path == "-" {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read script from stdin")?;
            buf
        } else {
            fs::read_to_string(path).with_context(|| format!("failed to read script {}", path))?
        };

        Self::parse(&json).with_context(|| format!("while loading {}", path))
    }

    /// Apply every op in order, calling `after_each` with the op index, the
    /// op and the map state right after it.
    ///
    /// With `verify`, canonical form is re-checked after every op and the
    /// first violation aborts the replay.
    pub fn apply_with<F>(&self, verify: bool, mut after_each: F) -> Result<IntervalMap<i64, String>>
    where
        F: FnMut(usize, &Op, &IntervalMap<i64, String>),
    {
        let mut map = IntervalMap::new(self.default.clone());

        for (index, op) in self.ops.iter().enumerate() {
            if op.begin < op.end {
                map.assign(op.begin, op.end, op.value.clone());
                tracing::debug!(index, %op, boundaries = map.len(), "applied");
            } else {
                tracing::warn!(index, begin = op.begin, end = op.end, "empty interval, skipped");
            }

            if verify {
                map.verify()
                    .with_context(|| format!("op {} ({}) broke canonical form", index, op))?;
            }
            after_each(index, op, &map);
        }

        Ok(map)
    }

    pub fn apply(&self, verify: bool) -> Result<IntervalMap<i64, String>> {
        self.apply_with(verify, |_, _, _| {})
    }
}
