//! Best-effort shortest-path search on tile grids.
//!
//! [`find_path`] routes a unit between two cells of a bounded grid using a
//! best-first (A\*) search with unit-cost, 4-directional moves and the
//! [`manhattan`] heuristic. When the goal cannot be reached the search does
//! not fail: it returns the path to the closest walkable cell it finalized.
//!
//! Traversability is supplied by a [`Walkable`] oracle. Closures of type
//! `Fn(Point) -> bool` implement it directly; `waypath-layers` provides a
//! multi-layer tile map implementation.
//!
//! Every call owns its frontier, closed set and parent links, so searches
//! share no state and may run on separate threads as long as the oracle is
//! read-only.

mod distance;
mod frontier;
mod outcome;
mod search;
mod traits;

pub use distance::manhattan;
pub use outcome::{PathOutcome, SearchStats};
pub use search::{find_path, find_path_from_positions, search, search_with_stats};
pub use traits::Walkable;
