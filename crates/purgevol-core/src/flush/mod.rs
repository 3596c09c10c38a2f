//! Flush (purge) volume estimation — distance terms, the estimator, and matrices.

pub mod distance;
pub mod estimator;
pub mod matrix;

pub use estimator::{EstimatorConfig, FlushBreakdown, FlushVolumeEstimator};
pub use matrix::{FlushMatrix, parse_tool_colors};
