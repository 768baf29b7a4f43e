//! Configuration and error handling

/// Mosaic constants and validated runtime configuration
pub mod configuration;
/// Error types and constructors
pub mod error;
