//! Configuration module for Salescast.
//!
//! Artifact locations are loaded from environment variables (a `.env` file is
//! honored by the binaries through `dotenvy`).

use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_ARTIFACT_DIR: &str = ".";
pub const DEFAULT_MODEL_FILE: &str = "linear_regression_model.json";
pub const DEFAULT_SCALER_FILE: &str = "scaler.json";

/// Where the two fitted artifacts live.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactConfig {
    pub artifact_dir: PathBuf,
    pub model_file: String,
    pub scaler_file: String,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            artifact_dir: PathBuf::from(DEFAULT_ARTIFACT_DIR),
            model_file: DEFAULT_MODEL_FILE.to_string(),
            scaler_file: DEFAULT_SCALER_FILE.to_string(),
        }
    }
}

impl ArtifactConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let artifact_dir = PathBuf::from(
            env::var("ARTIFACT_DIR").unwrap_or_else(|_| DEFAULT_ARTIFACT_DIR.to_string()),
        );
        let model_file =
            env::var("MODEL_FILE").unwrap_or_else(|_| DEFAULT_MODEL_FILE.to_string());
        let scaler_file =
            env::var("SCALER_FILE").unwrap_or_else(|_| DEFAULT_SCALER_FILE.to_string());

        let config = Self {
            artifact_dir,
            model_file,
            scaler_file,
        };
        config.validate().context("Failed to load artifact config")?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        for (var, file) in [("MODEL_FILE", &self.model_file), ("SCALER_FILE", &self.scaler_file)] {
            if file.trim().is_empty() {
                anyhow::bail!("{} must not be empty", var);
            }
        }
        Ok(())
    }

    pub fn with_artifact_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.artifact_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn model_path(&self) -> PathBuf {
        self.artifact_dir.join(&self.model_file)
    }

    pub fn scaler_path(&self) -> PathBuf {
        self.artifact_dir.join(&self.scaler_file)
    }
}

#[cfg(test)]
mod tests;
