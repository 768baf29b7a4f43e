/// Mosaic composition and the top-level pipeline
pub mod composer;
/// Nearest average color tile lookup
pub mod matching;

pub use composer::{Composition, MosaicComposer, mosaic};
pub use matching::{TileMatcher, closest_tile};
