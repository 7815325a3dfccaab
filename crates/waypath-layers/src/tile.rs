//! Tile entries and the glyph legend used to parse layers from text.

use std::collections::HashMap;

/// One layer's entry for a map cell.
///
/// `walkable` is the tile's explicit passability marker. `None` means the
/// tile says nothing about passability, which counts as walkable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub id: u32,
    pub walkable: Option<bool>,
}

impl Tile {
    /// A tile without a passability marker.
    pub const fn unmarked(id: u32) -> Self {
        Self { id, walkable: None }
    }

    /// A tile explicitly marked walkable.
    pub const fn open(id: u32) -> Self {
        Self {
            id,
            walkable: Some(true),
        }
    }

    /// A tile explicitly marked non-walkable.
    pub const fn blocked(id: u32) -> Self {
        Self {
            id,
            walkable: Some(false),
        }
    }

    /// Whether this tile forbids standing on its cell.
    #[inline]
    pub const fn vetoes(self) -> bool {
        matches!(self.walkable, Some(false))
    }
}

/// Mapping from text glyphs to layer entries.
///
/// A glyph mapped to `None` leaves the cell empty in that layer.
#[derive(Debug, Clone)]
pub struct Legend {
    glyphs: HashMap<char, Option<Tile>>,
}

impl Default for Legend {
    /// `#` blocks, `.` is explicitly open, space and `_` leave the cell empty.
    fn default() -> Self {
        Self::empty()
            .with('#', Some(Tile::blocked(1)))
            .with('.', Some(Tile::open(0)))
            .with(' ', None)
            .with('_', None)
    }
}

impl Legend {
    /// A legend that knows no glyphs.
    pub fn empty() -> Self {
        Self {
            glyphs: HashMap::new(),
        }
    }

    /// Add or replace the entry for `ch`.
    pub fn with(mut self, ch: char, tile: Option<Tile>) -> Self {
        self.glyphs.insert(ch, tile);
        self
    }

    /// Entry for `ch`, or `None` if the glyph is unknown.
    pub fn get(&self, ch: char) -> Option<Option<Tile>> {
        self.glyphs.get(&ch).copied()
    }
}
