//! Axis-aligned pixel rectangles in image coordinates

use std::fmt;

/// Rectangle of pixels given by its top-left origin and size
///
/// The right and bottom edges are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    /// Left edge (inclusive)
    pub x: u32,
    /// Top edge (inclusive)
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Region {
    /// Create a region from origin and size
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The unclipped square slot of grid cell (`row`, `col`)
    ///
    /// Coordinates past `u32::MAX` saturate at the edge of the coordinate space.
    pub fn square(row: usize, col: usize, size: u32) -> Self {
        Self {
            x: u32::try_from(col).unwrap_or(u32::MAX).saturating_mul(size),
            y: u32::try_from(row).unwrap_or(u32::MAX).saturating_mul(size),
            width: size,
            height: size,
        }
    }

    /// Right edge (exclusive)
    pub const fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive)
    pub const fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// Intersect with an image of the given dimensions anchored at the origin
    ///
    /// A region entirely outside the image collapses to zero size at the
    /// image edge rather than failing.
    pub fn clip_to(&self, width: u32, height: u32) -> Self {
        let x = self.x.min(width);
        let y = self.y.min(height);
        Self {
            x,
            y,
            width: self.right().min(width) - x,
            height: self.bottom().min(height) - y,
        }
    }

    /// Whether the region covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels covered
    pub const fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{}]-[{},{}]",
            self.x,
            self.y,
            self.right(),
            self.bottom()
        )
    }
}
