use crate::domain::errors::PredictorError;
use crate::domain::ml::{FittedScaler, LinearModel, LinearModelArtifact, ScalerArtifact};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::{error, info};

/// Reads one JSON artifact. Every failure, including a missing file, maps to `ArtifactMissing`.
pub fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, PredictorError> {
    let content = fs::read_to_string(path).map_err(|e| {
        error!("Failed to read artifact {:?}: {}", path, e);
        PredictorError::artifact_missing(path, e)
    })?;

    serde_json::from_str(&content).map_err(|e| {
        error!("Failed to deserialize artifact {:?}: {}", path, e);
        PredictorError::artifact_missing(path, format!("invalid artifact JSON: {}", e))
    })
}

pub fn load_model(path: &Path) -> Result<LinearModel, PredictorError> {
    let artifact: LinearModelArtifact = read_artifact(path)?;
    let model = LinearModel::try_from(artifact).map_err(|reason| {
        error!("Rejected model artifact {:?}: {}", path, reason);
        PredictorError::artifact_missing(path, reason)
    })?;
    info!("Loaded {:?} model from {:?}", model.kind, path);
    Ok(model)
}

pub fn load_scaler(path: &Path) -> Result<FittedScaler, PredictorError> {
    let artifact: ScalerArtifact = read_artifact(path)?;
    let scaler = FittedScaler::try_from(artifact).map_err(|reason| {
        error!("Rejected scaler artifact {:?}: {}", path, reason);
        PredictorError::artifact_missing(path, reason)
    })?;
    info!("Loaded {} from {:?}", scaler.kind(), path);
    Ok(scaler)
}
