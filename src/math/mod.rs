//! Color arithmetic shared by every pipeline stage

/// Region averaging over pixel samples
pub mod average;
/// Color values and the distance metric
pub mod color;

pub use average::{average_color, image_average_color};
pub use color::{Color, distance, distance_squared};
