//! Color profiling of the target image into a square grid of cells

use image::{GenericImageView, Rgba};
use ndarray::Array2;
use rayon::prelude::*;

use crate::io::configuration::MosaicConfig;
use crate::io::error::{Result, degenerate_input};
use crate::math::average::average_color;
use crate::spatial::grid::{ColorGrid, ImageSquare};
use crate::spatial::region::Region;

/// Number of grid rows and columns for a target `width` pixels wide
///
/// Only the width is consulted: the grid is `n x n` even for non-square
/// targets. A wide target gets rows below its bottom edge (profiled as empty);
/// a tall target loses everything below row `n`.
pub const fn grid_dimension(width: u32, square_size: u32) -> usize {
    (width / square_size) as usize + 1
}

/// Partition `target` into squares and compute each square's average color
///
/// Cell (`row`, `col`) covers `[col*s, row*s]` to `[(col+1)*s, (row+1)*s]`
/// clipped to the target. Cells with no pixels left after clipping are kept
/// with no average color.
///
/// # Errors
///
/// Returns `DegenerateInput` if the target has zero width or height
pub fn profile<I>(target: &I, config: &MosaicConfig) -> Result<ColorGrid>
where
    I: GenericImageView<Pixel = Rgba<u8>> + Sync,
{
    let (width, height) = target.dimensions();
    if width == 0 || height == 0 {
        return Err(degenerate_input(&format!(
            "target image is {width}x{height}; it must have positive dimensions"
        )));
    }

    let size = config.square_size();
    let n = grid_dimension(width, size);
    let cell_count = n * n;

    let profile_cell = |index: usize| -> Result<ImageSquare> {
        let (row, col) = (index / n, index % n);
        let bounds = Region::square(row, col, size).clip_to(width, height);
        let average = if bounds.is_empty() {
            None
        } else {
            Some(average_color(target, bounds)?)
        };
        Ok(ImageSquare { bounds, average })
    };

    let cells = if config.use_parallel(cell_count) {
        (0..cell_count)
            .into_par_iter()
            .map(profile_cell)
            .collect::<Result<Vec<_>>>()?
    } else {
        (0..cell_count)
            .map(profile_cell)
            .collect::<Result<Vec<_>>>()?
    };

    let empty = cells.iter().filter(|cell| !cell.is_profiled()).count();
    tracing::debug!(
        width,
        height,
        square_size = size,
        dimension = n,
        empty_cells = empty,
        "profiled target"
    );
    if width != height {
        tracing::debug!(
            width,
            height,
            "non-square target: grid rows are sized from the width"
        );
    }

    ColorGrid::new(Array2::from_shape_vec((n, n), cells)?, size)
}
