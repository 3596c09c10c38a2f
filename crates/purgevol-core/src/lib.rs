//! Purgevol Core — purge volume estimation for multi-material color changes.
//!
//! Maps the perceptual distance between two filament colors to the volume of
//! material to purge. Pure and synchronous; no I/O besides optional config
//! file loading.

pub mod color;
pub mod error;
pub mod flush;

// Re-exports for convenience.
pub use color::{Hsv, Rgb8, luminance, rgb_to_hsv};
pub use error::PurgeError;
pub use flush::{EstimatorConfig, FlushBreakdown, FlushMatrix, FlushVolumeEstimator};
