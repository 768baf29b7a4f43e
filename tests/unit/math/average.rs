//! Tests for region averaging including clipping and empty regions

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use photomosaic::MosaicError;
    use photomosaic::math::average::{average_color, image_average_color};
    use photomosaic::math::color::Color;
    use photomosaic::spatial::region::Region;

    // Tests that a uniform region averages to exactly its color
    // Verified by dividing by pixel count minus one
    #[test]
    fn test_uniform_region_is_exact() {
        let img = RgbaImage::from_pixel(5, 3, Rgba([10, 200, 33, 255]));

        let avg = average_color(&img, Region::new(1, 0, 3, 3));

        assert_eq!(avg, Ok(Color::from_samples(10.0, 200.0, 33.0)));
    }

    // Tests averaging two different pixels
    // Verified by summing only the first pixel
    #[test]
    fn test_mixed_region_average() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([255, 100, 0, 255]));

        let avg = image_average_color(&img).unwrap_or_default();

        assert!((avg.r - 127.5 * 257.0).abs() < 1e-9);
        assert!((avg.g - 50.0 * 257.0).abs() < 1e-9);
        assert_eq!(avg.b, 0.0);
    }

    // Tests that alpha does not influence the average
    // Verified by premultiplying samples by alpha
    #[test]
    fn test_alpha_ignored() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([40, 40, 40, 0]));
        img.put_pixel(1, 0, Rgba([40, 40, 40, 255]));

        assert_eq!(image_average_color(&img), Ok(Color::from_samples(40.0, 40.0, 40.0)));
    }

    // Tests that regions overflowing the edge only count in-bounds pixels
    // Verified by counting the full unclipped area
    #[test]
    fn test_region_clipped_to_image() {
        let mut img = RgbaImage::from_pixel(3, 3, Rgba([0, 0, 0, 255]));
        img.put_pixel(2, 2, Rgba([255, 255, 255, 255]));

        let avg = average_color(&img, Region::new(2, 2, 4, 4));

        assert_eq!(avg, Ok(Color::from_samples(255.0, 255.0, 255.0)));
    }

    // Tests that a region entirely outside the image is rejected
    // Verified by returning NaN channels instead of an error
    #[test]
    fn test_empty_region_error() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 255]));

        let result = average_color(&img, Region::new(4, 0, 2, 2));

        assert!(matches!(result, Err(MosaicError::DegenerateInput { .. })));
    }

    // Tests that a zero-area image is rejected
    // Verified by skipping the empty check
    #[test]
    fn test_zero_area_image_error() {
        let img = RgbaImage::new(0, 3);

        assert!(matches!(
            image_average_color(&img),
            Err(MosaicError::DegenerateInput { .. })
        ));
    }
}
