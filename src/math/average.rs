//! Per-channel arithmetic mean over a rectangular pixel region

use image::{GenericImageView, Rgba};

use crate::io::error::{Result, degenerate_input};
use crate::math::color::Color;
use crate::spatial::region::Region;

/// Average red, green and blue over every pixel of `region`
///
/// The region is clipped to the image before sampling, so squares hanging off
/// the right or bottom edge are averaged over their in-bounds pixels only.
/// Alpha is ignored.
///
/// # Errors
///
/// Returns `DegenerateInput` if the clipped region contains no pixels
pub fn average_color<I>(image: &I, region: Region) -> Result<Color>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (width, height) = image.dimensions();
    let clipped = region.clip_to(width, height);
    if clipped.is_empty() {
        return Err(degenerate_input(&format!(
            "region {region} has no pixels inside a {width}x{height} image"
        )));
    }

    // Integer sums keep uniform regions exact
    let (mut sum_r, mut sum_g, mut sum_b) = (0u64, 0u64, 0u64);
    for y in clipped.y..clipped.bottom() {
        for x in clipped.x..clipped.right() {
            let Rgba([r, g, b, _]) = image.get_pixel(x, y);
            sum_r += u64::from(r);
            sum_g += u64::from(g);
            sum_b += u64::from(b);
        }
    }

    let count = clipped.pixel_count() as f64;
    Ok(Color::from_samples(
        sum_r as f64 / count,
        sum_g as f64 / count,
        sum_b as f64 / count,
    ))
}

/// Average color over the whole image
///
/// # Errors
///
/// Returns `DegenerateInput` if the image has zero width or height
pub fn image_average_color<I>(image: &I) -> Result<Color>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (width, height) = image.dimensions();
    average_color(image, Region::new(0, 0, width, height))
}
