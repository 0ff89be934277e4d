// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: canonical-form checks and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Fallible validation** (`validate_canonical`, `IntervalMap::verify`,
//!    `IntervalMap::try_from_boundaries`) that reports the first broken
//!    invariant as an [`InvariantError`]. Use it at trust boundaries, where a
//!    boundary list comes from outside the container.
//!
//! 2. **Runtime contracts** that panic in debug builds when `assign` leaves the
//!    map in a non-canonical state. Zero-cost in release, but catch algorithmic
//!    bugs when tests run.

mod types;
pub mod contracts;

pub use types::*;
