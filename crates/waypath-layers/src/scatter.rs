//! Random obstacle layers.
//!
//! Useful for stress maps and randomized checks of the path search.

use rand::RngExt;
use waypath_core::Range;

use crate::layer::TileLayer;
use crate::tile::Tile;

/// Tile id used for scattered obstacles.
pub const SCATTER_ID: u32 = 1;

/// Create a layer where each cell is independently blocked with
/// probability `density`, using the thread-local generator.
pub fn scatter(name: impl Into<String>, bounds: Range, density: f64) -> TileLayer {
    scatter_with(name, bounds, density, &mut rand::rng())
}

/// Like [`scatter`], drawing from `rng`.
///
/// `density` is clamped to `[0, 1]`; cells that are not blocked stay empty.
pub fn scatter_with<R: RngExt + ?Sized>(
    name: impl Into<String>,
    bounds: Range,
    density: f64,
    rng: &mut R,
) -> TileLayer {
    let density = density.clamp(0.0, 1.0);
    let mut layer = TileLayer::new(name, bounds);
    for slot in layer.slots_mut() {
        let r: f64 = rng.random();
        if r < density {
            *slot = Some(Tile::blocked(SCATTER_ID));
        }
    }
    log::debug!(
        "scattered layer {:?} over {bounds}: {} blocked",
        layer.name(),
        layer.blocked_count()
    );
    layer
}
