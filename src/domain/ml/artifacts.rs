//! Serialized forms of the two fitted objects the predictor needs.
//!
//! The JSON documents mirror the learned attributes of the offline fit
//! (`coef`, `intercept`, `mean`, `scale`, ...). They are validated once into
//! fixed-width [`LinearModel`] and [`FittedScaler`] values; nothing is re-derived.

use super::feature_registry::{N_FEATURES, ScaledFeatures, check_feature_names};
use serde::{Deserialize, Serialize};

/// Estimator families whose inference is `intercept + coef · x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    LinearRegression,
    Ridge,
    Lasso,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModelArtifact {
    pub kind: ModelKind,
    #[serde(default)]
    pub feature_names_in: Option<Vec<String>>,
    pub coef: Vec<f64>,
    pub intercept: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScalerArtifact {
    /// `x' = (x - mean) / scale`, either step skipped when absent.
    StandardScaler {
        #[serde(default)]
        feature_names_in: Option<Vec<String>>,
        #[serde(default)]
        mean: Option<Vec<f64>>,
        #[serde(default)]
        scale: Option<Vec<f64>>,
    },
    /// `x' = x * scale + min`
    MinMaxScaler {
        #[serde(default)]
        feature_names_in: Option<Vec<String>>,
        min: Vec<f64>,
        scale: Vec<f64>,
    },
    /// `x' = x / scale`
    MaxAbsScaler {
        #[serde(default)]
        feature_names_in: Option<Vec<String>>,
        scale: Vec<f64>,
    },
    /// `x' = (x - center) / scale`, either step skipped when absent.
    RobustScaler {
        #[serde(default)]
        feature_names_in: Option<Vec<String>>,
        #[serde(default)]
        center: Option<Vec<f64>>,
        #[serde(default)]
        scale: Option<Vec<f64>>,
    },
}

/// Fitted linear estimator over the three advertising channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel {
    pub kind: ModelKind,
    pub coef: [f64; N_FEATURES],
    pub intercept: f64,
}

impl LinearModel {
    /// `intercept + Σ coef[i] * x[i]`, accumulated left to right.
    pub fn predict(&self, features: &ScaledFeatures) -> f64 {
        let mut dot = 0.0;
        for (c, x) in self.coef.iter().zip(features.values()) {
            dot += c * x;
        }
        self.intercept + dot
    }
}

impl TryFrom<LinearModelArtifact> for LinearModel {
    type Error = String;

    fn try_from(artifact: LinearModelArtifact) -> Result<Self, Self::Error> {
        if let Some(names) = &artifact.feature_names_in {
            check_feature_names(names)?;
        }
        let coef = fixed_width("coef", &artifact.coef)?;
        if !artifact.intercept.is_finite() {
            return Err(format!("intercept is not finite: {}", artifact.intercept));
        }
        Ok(Self {
            kind: artifact.kind,
            coef,
            intercept: artifact.intercept,
        })
    }
}

/// Fitted per-column affine transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FittedScaler {
    Standard {
        mean: Option<[f64; N_FEATURES]>,
        scale: Option<[f64; N_FEATURES]>,
    },
    MinMax {
        min: [f64; N_FEATURES],
        scale: [f64; N_FEATURES],
    },
    MaxAbs {
        scale: [f64; N_FEATURES],
    },
    Robust {
        center: Option<[f64; N_FEATURES]>,
        scale: Option<[f64; N_FEATURES]>,
    },
}

impl FittedScaler {
    pub fn kind(&self) -> &'static str {
        match self {
            FittedScaler::Standard { .. } => "standard_scaler",
            FittedScaler::MinMax { .. } => "min_max_scaler",
            FittedScaler::MaxAbs { .. } => "max_abs_scaler",
            FittedScaler::Robust { .. } => "robust_scaler",
        }
    }

    pub fn transform(&self, row: [f64; N_FEATURES]) -> ScaledFeatures {
        let mut x = row;
        match self {
            FittedScaler::Standard { mean, scale } => {
                center_and_divide(&mut x, mean.as_ref(), scale.as_ref())
            }
            FittedScaler::Robust { center, scale } => {
                center_and_divide(&mut x, center.as_ref(), scale.as_ref())
            }
            FittedScaler::MinMax { min, scale } => {
                for i in 0..N_FEATURES {
                    x[i] *= scale[i];
                    x[i] += min[i];
                }
            }
            FittedScaler::MaxAbs { scale } => {
                for i in 0..N_FEATURES {
                    x[i] /= scale[i];
                }
            }
        }
        ScaledFeatures(x)
    }
}

fn center_and_divide(
    x: &mut [f64; N_FEATURES],
    center: Option<&[f64; N_FEATURES]>,
    scale: Option<&[f64; N_FEATURES]>,
) {
    if let Some(center) = center {
        for i in 0..N_FEATURES {
            x[i] -= center[i];
        }
    }
    if let Some(scale) = scale {
        for i in 0..N_FEATURES {
            x[i] /= scale[i];
        }
    }
}

impl TryFrom<ScalerArtifact> for FittedScaler {
    type Error = String;

    fn try_from(artifact: ScalerArtifact) -> Result<Self, Self::Error> {
        let names = match &artifact {
            ScalerArtifact::StandardScaler {
                feature_names_in, ..
            }
            | ScalerArtifact::MinMaxScaler {
                feature_names_in, ..
            }
            | ScalerArtifact::MaxAbsScaler {
                feature_names_in, ..
            }
            | ScalerArtifact::RobustScaler {
                feature_names_in, ..
            } => feature_names_in,
        };
        if let Some(names) = names {
            check_feature_names(names)?;
        }

        match artifact {
            ScalerArtifact::StandardScaler { mean, scale, .. } => Ok(FittedScaler::Standard {
                mean: mean.map(|m| fixed_width("mean", &m)).transpose()?,
                scale: scale.map(|s| divisor("scale", &s)).transpose()?,
            }),
            ScalerArtifact::MinMaxScaler { min, scale, .. } => Ok(FittedScaler::MinMax {
                min: fixed_width("min", &min)?,
                scale: fixed_width("scale", &scale)?,
            }),
            ScalerArtifact::MaxAbsScaler { scale, .. } => Ok(FittedScaler::MaxAbs {
                scale: divisor("scale", &scale)?,
            }),
            ScalerArtifact::RobustScaler { center, scale, .. } => Ok(FittedScaler::Robust {
                center: center.map(|c| fixed_width("center", &c)).transpose()?,
                scale: scale.map(|s| divisor("scale", &s)).transpose()?,
            }),
        }
    }
}

fn fixed_width(field: &str, values: &[f64]) -> Result<[f64; N_FEATURES], String> {
    let array: [f64; N_FEATURES] = values.try_into().map_err(|_| {
        format!(
            "{} has {} entries, expected {}",
            field,
            values.len(),
            N_FEATURES
        )
    })?;
    if let Some(bad) = array.iter().find(|v| !v.is_finite()) {
        return Err(format!("{} contains a non-finite value: {}", field, bad));
    }
    Ok(array)
}

fn divisor(field: &str, values: &[f64]) -> Result<[f64; N_FEATURES], String> {
    let array = fixed_width(field, values)?;
    if array.contains(&0.0) {
        return Err(format!("{} contains a zero divisor", field));
    }
    Ok(array)
}
