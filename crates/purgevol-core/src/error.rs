use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PurgeError {
    #[error("malformed color input {input:?}: {reason}")]
    MalformedColorInput { input: String, reason: &'static str },
    #[error("color list is empty")]
    EmptyColorList,
    #[error("invalid estimator config: {0}")]
    InvalidConfig(String),
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub(crate) fn malformed(input: &str, reason: &'static str) -> PurgeError {
    PurgeError::MalformedColorInput {
        input: input.to_string(),
        reason,
    }
}
