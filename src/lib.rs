//! Canonical interval maps: step functions over an ordered key space.
//!
//! An [`IntervalMap<K, V>`] maps *every* key of `K` to a value of `V`. It is
//! stored as the sorted set of keys where the value changes, plus one default
//! value for everything below the first change. Assigning a value to a
//! half-open range `[begin, end)` rewrites only the boundaries at the two ends
//! and purges the ones in between, keeping the set minimal.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │    map.rs    │────▶│   iter.rs    │     │  testing.rs  │
//! │ (IntervalMap,│     │ (Boundaries, │     │ (scenario,   │
//! │  at, assign) │     │  Runs, Run)  │     │  helpers)    │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │
//!        ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                      verify/                         │
//! │  (validate_canonical, InvariantError, contracts -   │
//! │   debug-build checks after every assign)            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Canonical form
//!
//! | Property                   | Where it is enforced                                    |
//! |----------------------------|---------------------------------------------------------|
//! | no adjacent duplicates     | `assign` checks both neighbours before planting         |
//! | first boundary is live     | the left neighbour of the first boundary is the default |
//! | every boundary is a change | follows from the two above                              |
//! | total lookup               | `at` is a predecessor search with a default fallback    |
//!
//! # Usage
//!
//! ```
//! use stepmap::IntervalMap;
//!
//! let mut map = IntervalMap::new('A');
//! map.assign(1, 9, 'B');
//! map.assign(2, 5, 'C');
//!
//! let row: String = (0..=10).map(|k| *map.at(&k)).collect();
//! assert_eq!(row, "ABCCCBBBBAA");
//!
//! for (key, value) in &map {
//!     println!("{key} -> {value}");
//! }
//! ```

// Module declarations
mod iter;
mod map;
pub mod testing;
pub mod verify;

// Re-exports for public API
pub use iter::{Boundaries, Run, Runs};
pub use map::IntervalMap;
pub use verify::{validate_canonical, InvariantError};
