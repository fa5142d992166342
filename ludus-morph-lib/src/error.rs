use thiserror::Error;

/// Failure loading or saving a serialized index artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed artifact json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported schema version {found:?}, expected {expected:?}")]
    SchemaVersion { found: String, expected: String },
}
