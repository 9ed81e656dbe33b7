use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures surfaced to the caller before or outside the per-resource
/// validation loop. Per-resource failures are captured in the validation
/// result instead (see [`crate::provider::FactError`]).
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("provider '{0}' is not supported")]
    UnsupportedProvider(String),

    #[error("'{0}' CLI not found in PATH")]
    CliNotFound(String),

    #[error("failed to write report: {}", path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CheckError>;
