use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while bringing the predictor up.
///
/// A file that is absent, unreadable, not valid JSON, or whose parameters do not
/// line up with the three advertising channels all surface as `ArtifactMissing`:
/// the predictor has no degraded mode, so the distinction does not matter to callers.
#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("Artifact not available at {}: {reason}", .path.display())]
    ArtifactMissing { path: PathBuf, reason: String },
}

impl PredictorError {
    pub fn artifact_missing(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        PredictorError::ArtifactMissing {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Path of the artifact that could not be loaded.
    pub fn path(&self) -> &std::path::Path {
        match self {
            PredictorError::ArtifactMissing { path, .. } => path,
        }
    }
}

/// Errors raised by presentation layers that accept free-form numeric input.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("{channel} investment {value} is outside the allowed range [{min}, {max}]")]
    OutOfRange {
        channel: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{channel} investment must be a finite number, got {value}")]
    NotFinite { channel: &'static str, value: f64 },
}
