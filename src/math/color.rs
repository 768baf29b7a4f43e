//! RGB color values in the 16-bit sample range and the distance between them

use crate::io::configuration::SAMPLE_EXPANSION;

/// Average color of a pixel region
///
/// Channels are floating point in `0.0..=65535.0`, the 16-bit expansion of
/// 8-bit source samples.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Red channel
    pub r: f64,
    /// Green channel
    pub g: f64,
    /// Blue channel
    pub b: f64,
}

impl Color {
    /// Create a color from 16-bit range channel values
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit scale samples, expanding each to the 16-bit range
    ///
    /// Samples may be fractional, as when they are means over a region.
    pub fn from_samples(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: expand_sample(r),
            g: expand_sample(g),
            b: expand_sample(b),
        }
    }
}

/// Expand an 8-bit scale sample into the 16-bit range (`0xAB` -> `0xABAB`)
pub fn expand_sample(sample: f64) -> f64 {
    sample * SAMPLE_EXPANSION
}

/// Euclidean distance between two colors in RGB space
pub fn distance(c1: Color, c2: Color) -> f64 {
    distance_squared(c1, c2).sqrt()
}

/// Squared Euclidean distance, ordering candidates the same way as [`distance`]
///
/// Matching compares these directly to skip the square root per candidate.
pub fn distance_squared(c1: Color, c2: Color) -> f64 {
    let dr = c1.r - c2.r;
    let dg = c1.g - c2.g;
    let db = c1.b - c2.b;
    db.mul_add(db, dr.mul_add(dr, dg * dg))
}
