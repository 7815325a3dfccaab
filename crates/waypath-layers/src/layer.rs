//! A single named tile layer.
//!
//! A [`TileLayer`] holds at most one [`Tile`] per cell of its bounds. Layers
//! can be built cell by cell, parsed from ASCII art through a [`Legend`], or
//! scattered randomly (see [`crate::scatter`]).

use std::fmt;

use waypath_core::{Point, Range};

use crate::tile::{Legend, Tile};

/// A named, dense layer of optional tiles over a rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileLayer {
    name: String,
    bounds: Range,
    tiles: Vec<Option<Tile>>,
}

impl TileLayer {
    /// Create an empty layer covering `bounds`.
    pub fn new(name: impl Into<String>, bounds: Range) -> Self {
        Self {
            name: name.into(),
            bounds,
            tiles: vec![None; bounds.len()],
        }
    }

    /// Parse a layer from ASCII art, one character per cell.
    ///
    /// Leading and trailing blank lines are ignored; every remaining line
    /// must have the same number of characters. Each character is looked up
    /// in `legend`. The layer covers `[0, width) × [0, lines)`.
    pub fn parse(name: impl Into<String>, text: &str, legend: &Legend) -> Result<Self, LayerError> {
        let text = text.trim_matches(|c| c == '\n' || c == '\r');
        if text.is_empty() {
            return Err(LayerError::Empty);
        }
        let rows: Vec<&str> = text.lines().collect();
        let width = rows[0].chars().count();
        for (line, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(LayerError::InconsistentWidth {
                    line,
                    expected: width,
                    found,
                });
            }
        }

        let mut layer = Self::new(name, Range::sized(width as i32, rows.len() as i32));
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let Some(entry) = legend.get(ch) else {
                    return Err(LayerError::UnknownGlyph { ch, pos });
                };
                if let Some(tile) = entry {
                    layer.set_tile(pos, tile);
                }
            }
        }
        log::debug!(
            "parsed layer {:?}: {} cells, {} blocked",
            layer.name,
            layer.bounds.len(),
            layer.blocked_count()
        );
        Ok(layer)
    }

    /// Layer name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rectangle this layer covers.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Tile at `p`, or `None` if the cell is empty or outside the layer.
    pub fn tile(&self, p: Point) -> Option<Tile> {
        self.bounds.index(p).and_then(|i| self.tiles[i])
    }

    /// Place a tile. Does nothing if `p` is outside the layer.
    pub fn set_tile(&mut self, p: Point, tile: Tile) {
        if let Some(i) = self.bounds.index(p) {
            self.tiles[i] = Some(tile);
        }
    }

    /// Remove the tile at `p`, returning it.
    pub fn clear_tile(&mut self, p: Point) -> Option<Tile> {
        self.bounds.index(p).and_then(|i| self.tiles[i].take())
    }

    /// Put `tile` on every cell of the layer.
    pub fn fill(&mut self, tile: Tile) {
        self.tiles.fill(Some(tile));
    }

    /// Whether this layer explicitly marks `p` non-walkable.
    ///
    /// Empty cells, unmarked tiles and cells outside the layer never veto.
    #[inline]
    pub fn vetoes(&self, p: Point) -> bool {
        self.tile(p).is_some_and(Tile::vetoes)
    }

    /// Number of cells this layer vetoes.
    pub fn blocked_count(&self) -> usize {
        self.tiles.iter().flatten().filter(|t| t.vetoes()).count()
    }

    /// Iterate over occupied cells in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.bounds
            .iter()
            .zip(self.tiles.iter())
            .filter_map(|(p, t)| t.map(|t| (p, t)))
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Option<Tile>] {
        &mut self.tiles
    }
}

/// Errors that can occur when parsing a layer from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerError {
    /// The text contains no lines.
    Empty,
    /// A line's width differs from the first line's.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character has no entry in the legend.
    UnknownGlyph { ch: char, pos: Point },
}

impl fmt::Display for LayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "layer: empty map text"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "layer: line {line} has width {found}, expected {expected}"
            ),
            Self::UnknownGlyph { ch, pos } => {
                write!(f, "layer: unknown glyph \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for LayerError {}
