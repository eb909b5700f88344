use std::io;

use thiserror::Error;

/// Library-wide error type for verpin operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Coordinate field failed validation.
    #[error(
        "Invalid {field} '{value}': must be non-empty and contain only alphanumerics, hyphens, underscores, or periods"
    )]
    InvalidCoordinate { field: &'static str, value: String },

    /// No manifest found at the expected location.
    #[error("Manifest not found: {0}")]
    ManifestMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
