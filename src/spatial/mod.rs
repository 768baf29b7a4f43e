//! Spatial data structures for the target image
//!
//! This module contains:
//! - Pixel rectangles and clipping
//! - The square grid of profiled cells

/// Grid of profiled image squares
pub mod grid;
/// Pixel rectangles in image coordinates
pub mod region;

pub use grid::{ColorGrid, ImageSquare};
pub use region::Region;
