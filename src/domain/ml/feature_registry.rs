use serde::{Deserialize, Serialize};

/// Ordered list of feature names.
/// This order MUST match exactly with the column order the scaler and model were fit on.
/// Any change here is a breaking change for the shipped artifacts.
pub const FEATURE_NAMES: &[&str] = &["TV", "Radio", "Newspaper"];

/// Number of input columns expected by every artifact.
pub const N_FEATURES: usize = 3;

/// One advertising medium, in artifact column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Tv,
    Radio,
    Newspaper,
}

impl Channel {
    pub const ALL: [Channel; N_FEATURES] = [Channel::Tv, Channel::Radio, Channel::Newspaper];

    /// Column index of this channel in a feature row.
    pub fn index(self) -> usize {
        match self {
            Channel::Tv => 0,
            Channel::Radio => 1,
            Channel::Newspaper => 2,
        }
    }

    pub fn name(self) -> &'static str {
        FEATURE_NAMES[self.index()]
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw advertising investment for one prediction, one value per channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdSpend {
    pub tv: f64,
    pub radio: f64,
    pub newspaper: f64,
}

impl AdSpend {
    pub fn new(tv: f64, radio: f64, newspaper: f64) -> Self {
        Self {
            tv,
            radio,
            newspaper,
        }
    }

    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Tv => self.tv,
            Channel::Radio => self.radio,
            Channel::Newspaper => self.newspaper,
        }
    }

    pub fn set(&mut self, channel: Channel, value: f64) {
        match channel {
            Channel::Tv => self.tv = value,
            Channel::Radio => self.radio = value,
            Channel::Newspaper => self.newspaper = value,
        }
    }

    /// Single feature row in artifact column order.
    pub fn to_row(&self) -> [f64; N_FEATURES] {
        [self.tv, self.radio, self.newspaper]
    }
}

/// Feature row after the fitted scaler has been applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledFeatures(pub [f64; N_FEATURES]);

impl ScaledFeatures {
    pub fn values(&self) -> &[f64; N_FEATURES] {
        &self.0
    }
}

/// Checks that an artifact's recorded column names follow [`FEATURE_NAMES`].
pub fn check_feature_names(names: &[String]) -> Result<(), String> {
    let mismatch = names
        .iter()
        .zip(FEATURE_NAMES)
        .any(|(a, b)| a.as_str() != *b);
    if names.len() != FEATURE_NAMES.len() || mismatch {
        return Err(format!(
            "feature_names_in {:?} does not match expected column order {:?}",
            names, FEATURE_NAMES
        ));
    }
    Ok(())
}
