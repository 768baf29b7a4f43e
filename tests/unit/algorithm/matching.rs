//! Tests for nearest-color tile lookup and tie-breaking

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use photomosaic::MosaicError;
    use photomosaic::algorithm::matching::{TileMatcher, closest_tile};
    use photomosaic::analysis::tiles::TileImage;
    use photomosaic::math::color::Color;

    fn solid_tile(rgb: [u8; 3]) -> TileImage {
        let source = RgbaImage::from_pixel(2, 2, Rgba([rgb[0], rgb[1], rgb[2], 255]));
        TileImage::from_image(&source, 2).unwrap_or_else(|_| unreachable!("valid tile"))
    }

    // Tests the nearest tile is chosen
    // Verified by selecting the farthest tile
    #[test]
    fn test_closest_tile_nearest() {
        let tiles = vec![
            solid_tile([0, 0, 0]),
            solid_tile([128, 128, 128]),
            solid_tile([255, 255, 255]),
        ];

        assert_eq!(closest_tile(Color::from_samples(10.0, 0.0, 5.0), &tiles), Some(0));
        assert_eq!(
            closest_tile(Color::from_samples(120.0, 140.0, 130.0), &tiles),
            Some(1)
        );
        assert_eq!(
            closest_tile(Color::from_samples(250.0, 250.0, 240.0), &tiles),
            Some(2)
        );
    }

    // Tests that equal distances keep the earliest tile
    // Verified by replacing on less-or-equal
    #[test]
    fn test_tie_break_first_wins() {
        let tiles = vec![
            solid_tile([0, 0, 255]),
            solid_tile([255, 0, 0]),
            solid_tile([255, 0, 0]),
        ];

        assert_eq!(closest_tile(Color::from_samples(255.0, 0.0, 0.0), &tiles), Some(1));
    }

    // Tests equidistant tiles with different colors
    // Verified by keeping the last minimum
    #[test]
    fn test_equidistant_tiles() {
        let tiles = vec![solid_tile([100, 0, 0]), solid_tile([0, 100, 0])];

        assert_eq!(closest_tile(Color::from_samples(0.0, 0.0, 0.0), &tiles), Some(0));
    }

    // Tests empty tile sets produce no match
    // Verified by defaulting to index zero
    #[test]
    fn test_closest_tile_empty() {
        assert_eq!(closest_tile(Color::default(), &[]), None);
    }

    // Tests matcher rejects empty tile sets
    // Verified by deferring the check to lookup
    #[test]
    fn test_matcher_empty_tile_set() {
        assert_eq!(TileMatcher::new(&[]).err(), Some(MosaicError::EmptyTileSet));
    }

    // Tests matcher returns index and tile
    // Verified by returning the first tile unconditionally
    #[test]
    fn test_matcher_closest() {
        let tiles = vec![solid_tile([0, 0, 0]), solid_tile([0, 255, 0])];
        let Ok(matcher) = TileMatcher::new(&tiles) else {
            unreachable!("non-empty tile set must be accepted");
        };

        let Ok((index, tile)) = matcher.closest(Color::from_samples(0.0, 200.0, 0.0)) else {
            unreachable!("lookup on a non-empty matcher must succeed");
        };

        assert_eq!(index, 1);
        assert_eq!(tile.average(), Color::from_samples(0.0, 255.0, 0.0));
    }
}
