//! Runtime configuration for the command-line tool.

use std::path::PathBuf;

use purgevol_core::{EstimatorConfig, PurgeError};

/// JSON file holding an [`EstimatorConfig`]; takes precedence over the
/// individual variables below.
const ENV_CONFIG_PATH: &str = "PURGEVOL_CONFIG";
const ENV_MIN: &str = "PURGEVOL_MIN";
const ENV_MAX: &str = "PURGEVOL_MAX";
const ENV_MULTIPLIER: &str = "PURGEVOL_MULTIPLIER";
/// `tracing-subscriber` filter directives.
const ENV_LOG: &str = "PURGEVOL_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Runtime configuration for the purgevol CLI.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Volume limits and scaling passed to the estimator.
    pub estimator: EstimatorConfig,
    /// Log filter, e.g. `purgevol_core=trace`.
    pub log_filter: String,
    /// Where `estimator` was loaded from, if a file was used.
    pub source: Option<PathBuf>,
}

impl AppConfig {
    /// Load from the environment.
    pub fn from_env() -> Result<Self, PurgeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, PurgeError> {
        let log_filter = lookup(ENV_LOG).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        if let Some(path) = lookup(ENV_CONFIG_PATH).map(PathBuf::from) {
            let estimator = EstimatorConfig::load(&path)?;
            return Ok(Self {
                estimator,
                log_filter,
                source: Some(path),
            });
        }

        let defaults = EstimatorConfig::default();
        let number = |key: &str, fallback: f64| -> Result<f64, PurgeError> {
            match lookup(key) {
                Some(raw) => raw.trim().parse().map_err(|_| {
                    PurgeError::InvalidConfig(format!("{key}={raw:?} is not a number"))
                }),
                None => Ok(fallback),
            }
        };

        let estimator = EstimatorConfig::new(
            number(ENV_MIN, defaults.min_flush_vol)?,
            number(ENV_MAX, defaults.max_flush_vol)?,
            number(ENV_MULTIPLIER, defaults.multiplier)?,
        );

        Ok(Self {
            estimator,
            log_filter,
            source: None,
        })
    }
}
