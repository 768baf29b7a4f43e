//! Tile preprocessing: normalize every candidate to the square size
//!
//! Tiles are resized with nearest-neighbour sampling. Matching only needs each
//! tile's identity and average color, so smoothing would cost time without
//! changing which tile wins.

use image::imageops::{self, FilterType};
use image::{GenericImageView, Rgba, RgbaImage};
use rayon::prelude::*;

use crate::io::configuration::MosaicConfig;
use crate::io::error::{Result, degenerate_input};
use crate::math::average::image_average_color;
use crate::math::color::Color;

/// A candidate tile resized to the square size, with its average color attached
#[derive(Debug, Clone, PartialEq)]
pub struct TileImage {
    image: RgbaImage,
    average: Color,
}

impl TileImage {
    /// Resize `source` to `size x size` and compute its average color
    ///
    /// # Errors
    ///
    /// Returns `DegenerateInput` if `source` has zero width or height
    pub fn from_image<I>(source: &I, size: u32) -> Result<Self>
    where
        I: GenericImageView<Pixel = Rgba<u8>>,
    {
        let (width, height) = source.dimensions();
        if width == 0 || height == 0 {
            return Err(degenerate_input(&format!(
                "tile image is {width}x{height}; tiles must have positive dimensions"
            )));
        }

        let image = imageops::resize(source, size, size, FilterType::Nearest);
        let average = image_average_color(&image)?;
        Ok(Self { image, average })
    }

    /// Resized pixels, exactly square-size on each side
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Average color of the resized pixels
    pub const fn average(&self) -> Color {
        self.average
    }

    /// Side length in pixels
    pub fn size(&self) -> u32 {
        self.image.width()
    }
}

/// Resize every tile to the configured square size, preserving input order
///
/// An empty input yields an empty output; composing with it fails later with
/// `EmptyTileSet`.
///
/// # Errors
///
/// Returns `DegenerateInput` if any tile has zero width or height
pub fn prepare_tiles<I>(tiles: &[I], config: &MosaicConfig) -> Result<Vec<TileImage>>
where
    I: GenericImageView<Pixel = Rgba<u8>> + Sync,
{
    let size = config.square_size();

    let prepared = if config.use_parallel(tiles.len()) {
        tiles
            .par_iter()
            .map(|tile| TileImage::from_image(tile, size))
            .collect::<Result<Vec<_>>>()?
    } else {
        tiles
            .iter()
            .map(|tile| TileImage::from_image(tile, size))
            .collect::<Result<Vec<_>>>()?
    };

    tracing::debug!(tiles = prepared.len(), size, "prepared tiles");
    Ok(prepared)
}
