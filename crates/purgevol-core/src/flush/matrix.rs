//! N×N purge volume matrix over a set of tool colors.

use std::fmt;

use serde::Serialize;

use crate::color::Rgb8;
use crate::color::hex::parse_hex;
use crate::error::PurgeError;

use super::estimator::FlushVolumeEstimator;

/// Parse a comma-separated tool color list such as `FFFF00,80FFFF,FFFFFF`.
///
/// Entries are trimmed before decoding.
pub fn parse_tool_colors(list: &str) -> Result<Vec<Rgb8>, PurgeError> {
    if list.trim().is_empty() {
        return Err(PurgeError::EmptyColorList);
    }
    list.split(',').map(|entry| parse_hex(entry.trim())).collect()
}

/// Purge volumes for every ordered pair of tool colors.
///
/// Stored row-major: row is the color being unloaded, column the color
/// being loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlushMatrix {
    colors: Vec<Rgb8>,
    volumes: Vec<i64>,
}

impl FlushMatrix {
    pub fn build(estimator: &FlushVolumeEstimator, colors: &[Rgb8]) -> Self {
        let volumes = colors
            .iter()
            .flat_map(|&from| colors.iter().map(move |&to| estimator.estimate(from, to)))
            .collect();

        tracing::debug!(tools = colors.len(), "built purge matrix");

        Self {
            colors: colors.to_vec(),
            volumes,
        }
    }

    /// Parse a comma-separated color list and build its matrix.
    pub fn from_color_list(
        estimator: &FlushVolumeEstimator,
        list: &str,
    ) -> Result<Self, PurgeError> {
        let colors = parse_tool_colors(list)?;
        Ok(Self::build(estimator, &colors))
    }

    /// Number of tools (the matrix is `size × size`).
    pub fn size(&self) -> usize {
        self.colors.len()
    }

    pub fn colors(&self) -> &[Rgb8] {
        &self.colors
    }

    /// Volume for switching from tool `from` to tool `to`.
    pub fn get(&self, from: usize, to: usize) -> Option<i64> {
        let n = self.size();
        if from >= n || to >= n {
            return None;
        }
        self.volumes.get(from * n + to).copied()
    }

    /// Row-major volumes, `size²` entries.
    pub fn volumes(&self) -> &[i64] {
        &self.volumes
    }

    pub fn rows(&self) -> impl Iterator<Item = &[i64]> {
        self.volumes.chunks(self.size().max(1))
    }

    /// Flattened comma-joined volumes, the format of a `PURGE_VOLUMES` macro variable.
    pub fn to_purge_volumes(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FlushMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.volumes.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
