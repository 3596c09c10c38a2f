//! Purge volume estimation for a filament color change.
//!
//! The pipeline is:
//!
//! ```text
//! rgb → hsv → delta_hs ─┐
//!                       ├─ luminance asymmetry → fuse at 120° → floor/scale/cap
//! rgb → luminance ──────┘
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::{Rgb8, luminance, rgb_to_hsv};
use crate::color::hex::parse_hex;
use crate::error::PurgeError;

use super::distance::{
    FUSION_ANGLE_DEGREES, HS_FLUSH_SCALE, delta_hs, luminance_adjustment, triangle_third_edge,
};

/// Defaults used when generating purge matrices for wash/flush macros.
const DEFAULT_MIN_FLUSH_VOL: f64 = 0.0;
const DEFAULT_MAX_FLUSH_VOL: f64 = 800.0;
const DEFAULT_MULTIPLIER: f64 = 1.0;

/// Volume limits and scaling for [`FlushVolumeEstimator`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Added to the perceptual distance before scaling.
    pub min_flush_vol: f64,
    /// Hard cap on the returned volume.
    pub max_flush_vol: f64,
    /// Applied after the floor has been added.
    pub multiplier: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            min_flush_vol: DEFAULT_MIN_FLUSH_VOL,
            max_flush_vol: DEFAULT_MAX_FLUSH_VOL,
            multiplier: DEFAULT_MULTIPLIER,
        }
    }
}

impl EstimatorConfig {
    pub fn new(min_flush_vol: f64, max_flush_vol: f64, multiplier: f64) -> Self {
        Self {
            min_flush_vol,
            max_flush_vol,
            multiplier,
        }
    }

    /// Check that the estimator's output will land in `[0, max_flush_vol]`.
    ///
    /// The estimator never calls this; callers decide whether an invalid
    /// configuration is fatal.
    pub fn validate(&self) -> Result<(), PurgeError> {
        let fields = [
            ("min_flush_vol", self.min_flush_vol),
            ("max_flush_vol", self.max_flush_vol),
            ("multiplier", self.multiplier),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(PurgeError::InvalidConfig(format!("{name} is not finite")));
            }
        }
        if self.min_flush_vol < 0.0 {
            return Err(PurgeError::InvalidConfig(format!(
                "min_flush_vol {} is negative",
                self.min_flush_vol
            )));
        }
        if self.multiplier < 0.0 {
            return Err(PurgeError::InvalidConfig(format!(
                "multiplier {} is negative",
                self.multiplier
            )));
        }
        if self.min_flush_vol > self.max_flush_vol {
            return Err(PurgeError::InvalidConfig(format!(
                "min_flush_vol {} exceeds max_flush_vol {}",
                self.min_flush_vol, self.max_flush_vol
            )));
        }
        Ok(())
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, PurgeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file.
    pub fn load(path: &Path) -> Result<Self, PurgeError> {
        let json = std::fs::read_to_string(path).map_err(|source| PurgeError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

/// Intermediate values of a single estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlushBreakdown {
    /// Hue/saturation distance after the darkening cap.
    pub hs_dist: f64,
    /// `hs_dist` scaled to a purge length.
    pub hs_flush: f64,
    /// Luminance contribution.
    pub lumi_flush: f64,
    /// Fused distance, clamped at zero.
    pub fused: f64,
    /// Final volume after floor, multiplier, truncation, and cap.
    pub volume: i64,
}

/// Estimates how much material to purge when switching between two colors.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlushVolumeEstimator {
    config: EstimatorConfig,
}

impl FlushVolumeEstimator {
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Purge volume for switching from `from` to `to`.
    pub fn estimate(&self, from: Rgb8, to: Rgb8) -> i64 {
        self.estimate_normalized(from.normalized(), to.normalized())
    }

    /// Purge volume for normalized `[0, 1]` colors.
    pub fn estimate_normalized(&self, from: [f64; 3], to: [f64; 3]) -> i64 {
        self.breakdown(from, to).volume
    }

    /// Decode two hex colors and estimate the purge between them.
    pub fn estimate_hex(&self, from: &str, to: &str) -> Result<i64, PurgeError> {
        Ok(self.estimate(parse_hex(from)?, parse_hex(to)?))
    }

    /// Run the full pipeline and keep every intermediate value.
    pub fn breakdown(&self, from: [f64; 3], to: [f64; 3]) -> FlushBreakdown {
        let from_hsv = rgb_to_hsv(from);
        let to_hsv = rgb_to_hsv(to);
        let hs_dist = delta_hs(from_hsv, to_hsv);

        let adjusted =
            luminance_adjustment(luminance(from), luminance(to), from_hsv, to_hsv, hs_dist);
        let hs_flush = HS_FLUSH_SCALE * adjusted.hs_dist;

        // No 60.0 minimum here; only negative distances are clamped.
        let fused = triangle_third_edge(hs_flush, adjusted.lumi_flush, FUSION_ANGLE_DEGREES)
            .max(0.0);

        let volume = self.scale(fused);

        tracing::trace!(
            hs_dist = adjusted.hs_dist,
            lumi_flush = adjusted.lumi_flush,
            fused,
            volume,
            "flush estimate"
        );

        FlushBreakdown {
            hs_dist: adjusted.hs_dist,
            hs_flush,
            lumi_flush: adjusted.lumi_flush,
            fused,
            volume,
        }
    }

    /// Volume for a transition with no perceptual distance.
    pub fn floor_volume(&self) -> i64 {
        self.scale(0.0)
    }

    fn scale(&self, distance: f64) -> i64 {
        let scaled = (distance + self.config.min_flush_vol) * self.config.multiplier;
        // `as` truncates toward zero.
        scaled.trunc().min(self.config.max_flush_vol) as i64
    }
}

impl From<EstimatorConfig> for FlushVolumeEstimator {
    fn from(config: EstimatorConfig) -> Self {
        Self::new(config)
    }
}
