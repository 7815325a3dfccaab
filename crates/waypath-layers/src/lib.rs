//! Stacked tile layers for waypath.
//!
//! A map is a [`LayerStack`] of named [`TileLayer`]s (ground, walls,
//! furniture, ...). Each layer may mark cells non-walkable; the stack
//! implements [`waypath_paths::Walkable`] by letting any single layer veto a
//! cell.

pub mod layer;
pub mod scatter;
pub mod stack;
pub mod tile;

pub use layer::{LayerError, TileLayer};
pub use scatter::{scatter, scatter_with};
pub use stack::LayerStack;
pub use tile::{Legend, Tile};
