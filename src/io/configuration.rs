//! Mosaic constants and runtime configuration

use crate::io::error::{Result, invalid_configuration};

/// Factor expanding an 8-bit sample into the 16-bit range (0xFF -> 0xFFFF)
pub const SAMPLE_EXPANSION: f64 = 257.0;

/// Bytes per pixel in RGBA canvases and tiles
pub const BYTES_PER_PIXEL: usize = 4;

// Safety limit to prevent excessive canvas allocation
/// Maximum allowed side length of the output canvas in pixels
pub const MAX_CANVAS_DIMENSION: u64 = 65_535;

/// Default side length of a tile square in pixels
pub const DEFAULT_SQUARE_SIZE: u32 = 16;

// Below this many cells the rayon scheduling overhead outweighs the work
/// Minimum number of grid cells before work is spread across threads
pub const PARALLEL_CELL_THRESHOLD: usize = 64;

/// Validated parameters for a mosaic composition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicConfig {
    square_size: u32,
    parallel: bool,
}

impl MosaicConfig {
    /// Create a configuration for the given square size
    ///
    /// Parallel execution is enabled by default.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `square_size` is zero or larger than
    /// [`MAX_CANVAS_DIMENSION`]
    pub fn new(square_size: u32) -> Result<Self> {
        if square_size == 0 {
            return Err(invalid_configuration(
                "square_size",
                &square_size,
                &"must be at least 1 pixel",
            ));
        }
        if u64::from(square_size) > MAX_CANVAS_DIMENSION {
            return Err(invalid_configuration(
                "square_size",
                &square_size,
                &format!("must not exceed {MAX_CANVAS_DIMENSION} pixels"),
            ));
        }

        Ok(Self {
            square_size,
            parallel: true,
        })
    }

    /// Enable or disable multi-threaded execution
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Side length of each grid square and each prepared tile
    pub const fn square_size(&self) -> u32 {
        self.square_size
    }

    /// Whether independent cells and tiles are processed on the rayon pool
    pub const fn parallel(&self) -> bool {
        self.parallel
    }

    /// Canvas side length for a grid of `grid_dimension` cells per side
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the canvas would exceed
    /// [`MAX_CANVAS_DIMENSION`] pixels per side
    pub fn canvas_side(&self, grid_dimension: usize) -> Result<u32> {
        let side = u64::from(self.square_size) * grid_dimension as u64;
        if side > MAX_CANVAS_DIMENSION {
            return Err(invalid_configuration(
                "square_size",
                &self.square_size,
                &format!(
                    "canvas of {grid_dimension} squares would be {side} pixels wide (max {MAX_CANVAS_DIMENSION})"
                ),
            ));
        }
        Ok(side as u32)
    }

    pub(crate) const fn use_parallel(&self, units: usize) -> bool {
        self.parallel && units >= PARALLEL_CELL_THRESHOLD
    }
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            square_size: DEFAULT_SQUARE_SIZE,
            parallel: true,
        }
    }
}
