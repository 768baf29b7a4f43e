//! Square grid of profiled image cells
//!
//! The grid is always `n x n`, indexed `[row, col]`, where `n` comes from the
//! target's width alone. Cells along the right and bottom edge may be clipped
//! or entirely outside the target; they are kept so the grid stays square.

use ndarray::Array2;

use crate::math::color::Color;
use crate::spatial::region::Region;

/// One profiled grid cell: where it lies in the target and its average color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageSquare {
    /// Cell bounds clipped to the target image
    pub bounds: Region,
    /// Average color of the in-bounds pixels, `None` when the cell lies outside the target
    pub average: Option<Color>,
}

impl ImageSquare {
    /// Whether the cell has an average color to match against
    pub const fn is_profiled(&self) -> bool {
        self.average.is_some()
    }
}

/// Color profile of a target image
#[derive(Debug, Clone, PartialEq)]
pub struct ColorGrid {
    squares: Array2<ImageSquare>,
    square_size: u32,
}

impl ColorGrid {
    /// Wrap a square array of profiled cells
    ///
    /// # Errors
    ///
    /// Returns `Computation` if the array is not square
    pub fn new(squares: Array2<ImageSquare>, square_size: u32) -> crate::io::error::Result<Self> {
        let (rows, cols) = squares.dim();
        if rows != cols {
            return Err(crate::io::error::computation_error(
                "color grid",
                &format!("expected a square grid, got {rows}x{cols}"),
            ));
        }
        Ok(Self {
            squares,
            square_size,
        })
    }

    /// Number of rows (and columns) in the grid
    pub fn dimension(&self) -> usize {
        self.squares.nrows()
    }

    /// Number of rows (and columns) that composition draws
    ///
    /// The final row and column are profiled but never rendered.
    pub fn rendered_dimension(&self) -> usize {
        self.dimension().saturating_sub(1)
    }

    /// Side length of each cell slot in pixels
    pub const fn square_size(&self) -> u32 {
        self.square_size
    }

    /// Cell at (`row`, `col`), if inside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<&ImageSquare> {
        self.squares.get([row, col])
    }
}
