pub mod artifacts;
pub mod feature_registry;

pub use artifacts::{FittedScaler, LinearModel, LinearModelArtifact, ModelKind, ScalerArtifact};
pub use feature_registry::{AdSpend, Channel, FEATURE_NAMES, N_FEATURES, ScaledFeatures};
