// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Canonical-form validation.
//!
//! A boundary list is canonical for a default value `d` when:
//!
//! | Check                    | What's Guaranteed                              |
//! |--------------------------|------------------------------------------------|
//! | strictly increasing keys | one boundary per key, traversal in key order   |
//! | no adjacent duplicates   | every boundary is a real change point          |
//! | first value != default   | the first boundary is not dead                 |
//!
//! Errors carry positions rather than keys or values, so they stay `'static`
//! whatever the map's type parameters are.

use std::fmt;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// Key at `position` is not strictly greater than the key before it.
    UnsortedBoundaries { position: usize },
    /// Boundaries at `position - 1` and `position` carry equal values.
    AdjacentDuplicate { position: usize },
    /// The first boundary carries the default value.
    RedundantFirstBoundary,
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::UnsortedBoundaries { position } => {
                write!(
                    f,
                    "boundary keys not strictly increasing at position {}",
                    position
                )
            }
            InvariantError::AdjacentDuplicate { position } => {
                write!(
                    f,
                    "boundaries {} and {} carry the same value",
                    position - 1,
                    position
                )
            }
            InvariantError::RedundantFirstBoundary => {
                write!(f, "first boundary repeats the default value")
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Check that `boundaries` is the canonical boundary list for `default`.
///
/// Returns the first violation found, scanning in order.
///
/// ```
/// use stepmap::{validate_canonical, InvariantError};
///
/// let ok = [(1, 'B'), (4, 'A')];
/// assert!(validate_canonical(&'A', ok.iter().map(|(k, v)| (k, v))).is_ok());
///
/// let dup = [(1, 'B'), (4, 'B')];
/// assert_eq!(
///     validate_canonical(&'A', dup.iter().map(|(k, v)| (k, v))),
///     Err(InvariantError::AdjacentDuplicate { position: 1 })
/// );
/// ```
pub fn validate_canonical<'a, K, V, I>(default: &V, boundaries: I) -> Result<(), InvariantError>
where
    K: Ord + 'a,
    V: PartialEq + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    let mut previous: Option<(&K, &V)> = None;

    for (position, (key, value)) in boundaries.into_iter().enumerate() {
        match previous {
            None => {
                if value == default {
                    return Err(InvariantError::RedundantFirstBoundary);
                }
            }
            Some((prev_key, prev_value)) => {
                if prev_key >= key {
                    return Err(InvariantError::UnsortedBoundaries { position });
                }
                if prev_value == value {
                    return Err(InvariantError::AdjacentDuplicate { position });
                }
            }
        }
        previous = Some((key, value));
    }

    Ok(())
}
