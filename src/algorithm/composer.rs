//! Mosaic composition: match every grid cell to a tile and stamp it into a canvas
//!
//! The canvas is `square_size * n` pixels on each side for an `n x n` grid, but
//! only rows and columns `0..n-1` are drawn. The trailing row and column are
//! profiled and then dropped so a clipped partial tile is never rendered; that
//! strip of the canvas keeps its zeroed (transparent black) default.
//!
//! Painting splits the canvas into horizontal bands, one per rendered grid row.
//! Each band is a disjoint slice of the canvas, so bands are painted in
//! parallel without locking.

use image::{GenericImageView, Rgba, RgbaImage};
use ndarray::Array2;
use rayon::prelude::*;

use crate::algorithm::matching::TileMatcher;
use crate::analysis::profile::{grid_dimension, profile};
use crate::analysis::tiles::{TileImage, prepare_tiles};
use crate::io::configuration::{BYTES_PER_PIXEL, MosaicConfig};
use crate::io::error::{MosaicError, Result, degenerate_input};
use crate::spatial::grid::ColorGrid;

/// Finished mosaic together with the tile chosen for every rendered cell
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    canvas: RgbaImage,
    selections: Array2<Option<usize>>,
    grid_dimension: usize,
}

impl Composition {
    /// The composed image
    pub const fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    /// Consume the composition and return the composed image
    pub fn into_canvas(self) -> RgbaImage {
        self.canvas
    }

    /// Tile index drawn at each rendered cell, indexed `[row, col]`
    ///
    /// `None` marks a rendered cell that lay outside the target and was left blank.
    pub const fn selections(&self) -> &Array2<Option<usize>> {
        &self.selections
    }

    /// Tile index drawn at (`row`, `col`), if that cell was rendered with a tile
    pub fn selection(&self, row: usize, col: usize) -> Option<usize> {
        self.selections.get([row, col]).copied().flatten()
    }

    /// Dimension of the profiled grid, including the dropped row and column
    pub const fn grid_dimension(&self) -> usize {
        self.grid_dimension
    }

    /// How many cells each tile was drawn into, indexed by tile
    pub fn tile_usage(&self, tile_count: usize) -> Vec<usize> {
        let mut usage = vec![0; tile_count];
        for index in self.selections.iter().flatten() {
            if let Some(count) = usage.get_mut(*index) {
                *count += 1;
            }
        }
        usage
    }
}

/// Composes mosaics from a fixed, preprocessed tile set
///
/// Tiles are resized and profiled once at construction, so one composer can
/// render any number of targets.
#[derive(Debug, Clone)]
pub struct MosaicComposer {
    config: MosaicConfig,
    tiles: Vec<TileImage>,
}

impl MosaicComposer {
    /// Preprocess `tiles` for the configured square size
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `EmptyTileSet` if `tiles` is empty
    /// - `DegenerateInput` if any tile has zero area
    pub fn new<I>(tiles: &[I], config: MosaicConfig) -> Result<Self>
    where
        I: GenericImageView<Pixel = Rgba<u8>> + Sync,
    {
        if tiles.is_empty() {
            return Err(MosaicError::EmptyTileSet);
        }
        let tiles = prepare_tiles(tiles, &config)?;
        Ok(Self { config, tiles })
    }

    /// Build a composer from tiles that were already prepared
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `EmptyTileSet` if `tiles` is empty
    /// - `DegenerateInput` if a tile was prepared for a different square size
    pub fn from_prepared(tiles: Vec<TileImage>, config: MosaicConfig) -> Result<Self> {
        if tiles.is_empty() {
            return Err(MosaicError::EmptyTileSet);
        }
        let size = config.square_size();
        if let Some((index, tile)) = tiles
            .iter()
            .enumerate()
            .find(|(_, tile)| tile.image().dimensions() != (size, size))
        {
            let (width, height) = tile.image().dimensions();
            return Err(degenerate_input(&format!(
                "tile {index} is {width}x{height}, expected {size}x{size}"
            )));
        }
        Ok(Self { config, tiles })
    }

    /// Configuration used for every composition
    pub const fn config(&self) -> &MosaicConfig {
        &self.config
    }

    /// Prepared tiles in input order
    pub fn tiles(&self) -> &[TileImage] {
        &self.tiles
    }

    /// Compose a mosaic of `target`
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `DegenerateInput` if the target has zero area
    /// - `InvalidConfiguration` if the canvas would exceed the size limit
    pub fn compose<I>(&self, target: &I) -> Result<RgbaImage>
    where
        I: GenericImageView<Pixel = Rgba<u8>> + Sync,
    {
        self.compose_with_selections(target).map(Composition::into_canvas)
    }

    /// Compose a mosaic of `target`, keeping the per-cell tile choices
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `DegenerateInput` if the target has zero area
    /// - `InvalidConfiguration` if the canvas would exceed the size limit
    pub fn compose_with_selections<I>(&self, target: &I) -> Result<Composition>
    where
        I: GenericImageView<Pixel = Rgba<u8>> + Sync,
    {
        // Reject an oversized canvas before the cell grid is allocated
        let grid_dimension = grid_dimension(target.width(), self.config.square_size());
        let side = self.config.canvas_side(grid_dimension)?;
        let grid = profile(target, &self.config)?;

        // Both constructors rule out an empty tile set, so this cannot fail
        let matcher = TileMatcher::new(&self.tiles)?;
        let selections = self.select_tiles(&grid, matcher)?;

        let mut canvas = RgbaImage::new(side, side);
        self.paint(&mut canvas, &selections);

        tracing::debug!(
            grid_dimension,
            rendered = selections.nrows(),
            canvas = side,
            tiles = self.tiles.len(),
            "composed mosaic"
        );

        Ok(Composition {
            canvas,
            selections,
            grid_dimension,
        })
    }

    // Every rendered cell is matched before any pixel is written
    fn select_tiles(
        &self,
        grid: &ColorGrid,
        matcher: TileMatcher<'_>,
    ) -> Result<Array2<Option<usize>>> {
        let rendered = grid.rendered_dimension();
        let cell_count = rendered * rendered;

        let select_cell = |index: usize| -> Result<Option<usize>> {
            let (row, col) = (index / rendered, index % rendered);
            match grid.get(row, col).and_then(|square| square.average) {
                Some(color) => matcher.closest(color).map(|(tile, _)| Some(tile)),
                None => {
                    tracing::trace!(row, col, "cell outside target left blank");
                    Ok(None)
                }
            }
        };

        let cells = if self.config.use_parallel(cell_count) {
            (0..cell_count)
                .into_par_iter()
                .map(select_cell)
                .collect::<Result<Vec<_>>>()?
        } else {
            (0..cell_count)
                .map(select_cell)
                .collect::<Result<Vec<_>>>()?
        };

        Ok(Array2::from_shape_vec((rendered, rendered), cells)?)
    }

    fn paint(&self, canvas: &mut RgbaImage, selections: &Array2<Option<usize>>) {
        let size = self.config.square_size() as usize;
        let canvas_row_bytes = canvas.width() as usize * BYTES_PER_PIXEL;
        let band_bytes = canvas_row_bytes * size;
        let rendered = selections.nrows();

        let paint_band = |(row, band): (usize, &mut [u8])| {
            for col in 0..rendered {
                let tile = selections
                    .get([row, col])
                    .copied()
                    .flatten()
                    .and_then(|index| self.tiles.get(index));
                if let Some(tile) = tile {
                    stamp(band, canvas_row_bytes, col * size * BYTES_PER_PIXEL, tile);
                }
            }
        };

        let pixels: &mut [u8] = canvas;
        if self.config.use_parallel(rendered * rendered) {
            pixels
                .par_chunks_mut(band_bytes)
                .enumerate()
                .take(rendered)
                .for_each(paint_band);
        } else {
            pixels
                .chunks_mut(band_bytes)
                .enumerate()
                .take(rendered)
                .for_each(paint_band);
        }
    }
}

// Opaque copy of a tile into one band; every channel is overwritten, alpha included
fn stamp(band: &mut [u8], canvas_row_bytes: usize, x_offset: usize, tile: &TileImage) {
    let tile_row_bytes = tile.size() as usize * BYTES_PER_PIXEL;
    for (y, source) in tile.image().as_raw().chunks_exact(tile_row_bytes).enumerate() {
        let start = y * canvas_row_bytes + x_offset;
        if let Some(dest) = band.get_mut(start..start + tile_row_bytes) {
            dest.copy_from_slice(source);
        }
    }
}

/// Build a photomosaic of `target` from `tiles` with `square_size` pixel squares
///
/// Runs the whole pipeline with the default (parallel) configuration:
/// validation, tile preprocessing, target profiling, matching and painting.
///
/// # Errors
///
/// Returns:
/// - `InvalidConfiguration` if `square_size` is zero or the canvas would be too large
/// - `EmptyTileSet` if `tiles` is empty
/// - `DegenerateInput` if the target or any tile has zero area
pub fn mosaic<T, I>(target: &T, tiles: &[I], square_size: u32) -> Result<RgbaImage>
where
    T: GenericImageView<Pixel = Rgba<u8>> + Sync,
    I: GenericImageView<Pixel = Rgba<u8>> + Sync,
{
    let config = MosaicConfig::new(square_size)?;
    MosaicComposer::new(tiles, config)?.compose(target)
}
