//! Input analysis: tile preprocessing and target color profiling

/// Square grid color profile of the target image
pub mod profile;
/// Tile resizing and average color extraction
pub mod tiles;

pub use profile::{grid_dimension, profile};
pub use tiles::{TileImage, prepare_tiles};
