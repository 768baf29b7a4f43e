//! Nearest-color tile lookup
//!
//! A linear scan over every tile per cell. Ties resolve to the earliest tile in
//! input order: a later tile only wins with a strictly smaller distance. Any
//! indexed replacement for this scan has to keep that ordering.

use crate::analysis::tiles::TileImage;
use crate::io::error::{MosaicError, Result};
use crate::math::color::{Color, distance_squared};

/// Index of the tile whose average color is closest to `color`
///
/// Returns `None` only when `tiles` is empty.
pub fn closest_tile(color: Color, tiles: &[TileImage]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (index, tile) in tiles.iter().enumerate() {
        let dist = distance_squared(color, tile.average());
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((index, dist)),
        }
    }

    best.map(|(index, _)| index)
}

/// Matcher over a non-empty set of prepared tiles
#[derive(Debug, Clone, Copy)]
pub struct TileMatcher<'a> {
    tiles: &'a [TileImage],
}

impl<'a> TileMatcher<'a> {
    /// Create a matcher, rejecting an empty tile set up front
    ///
    /// # Errors
    ///
    /// Returns `EmptyTileSet` if `tiles` is empty
    pub fn new(tiles: &'a [TileImage]) -> Result<Self> {
        if tiles.is_empty() {
            return Err(MosaicError::EmptyTileSet);
        }
        Ok(Self { tiles })
    }

    /// Closest tile to `color` and its index in the tile set
    ///
    /// # Errors
    ///
    /// Returns `EmptyTileSet` if the tile set has no candidates
    pub fn closest(&self, color: Color) -> Result<(usize, &'a TileImage)> {
        closest_tile(color, self.tiles)
            .and_then(|index| self.tiles.get(index).map(|tile| (index, tile)))
            .ok_or(MosaicError::EmptyTileSet)
    }
}
