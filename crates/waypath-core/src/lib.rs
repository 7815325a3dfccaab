//! **waypath-core**: geometry shared by the waypath crates.
//!
//! Provides the cell coordinate [`Point`] and the half-open rectangle
//! [`Range`] used as map bounds by the layer store and the path search.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
