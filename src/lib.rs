//! Photomosaic composition by nearest average color
//!
//! The target image is partitioned into a grid of fixed-size squares, each square's
//! average color is computed, and each square is replaced by the candidate tile whose
//! own average color is closest.
//!
//! ```no_run
//! use image::RgbaImage;
//!
//! let target = RgbaImage::new(64, 64);
//! let tiles = vec![RgbaImage::new(8, 8)];
//! let output = photomosaic::mosaic(&target, &tiles, 8)?;
//! assert_eq!(output.width(), 72);
//! # Ok::<(), photomosaic::MosaicError>(())
//! ```

#![forbid(unsafe_code)]

/// Tile matching and mosaic composition
pub mod algorithm;
/// Tile preprocessing and target color profiling
pub mod analysis;
/// Configuration and error handling
pub mod io;
/// Color averaging and distance
pub mod math;
/// Pixel regions and the profiled cell grid
pub mod spatial;

pub use algorithm::{Composition, MosaicComposer, mosaic};
pub use io::configuration::MosaicConfig;
pub use io::error::{MosaicError, Result};
