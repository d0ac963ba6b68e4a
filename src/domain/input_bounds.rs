//! Ranges offered to the person filling in the form.
//!
//! The predictor accepts any float; only presentation layers consult these.

use crate::domain::errors::InputError;
use crate::domain::ml::{AdSpend, Channel};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
    /// Decimal places implied by `step`.
    pub decimals: u32,
}

pub const TV_BOUNDS: ChannelBounds = ChannelBounds {
    min: 0.0,
    max: 300.0,
    step: 1.0,
    default: 150.0,
    decimals: 0,
};

pub const RADIO_BOUNDS: ChannelBounds = ChannelBounds {
    min: 0.0,
    max: 50.0,
    step: 0.1,
    default: 25.0,
    decimals: 1,
};

pub const NEWSPAPER_BOUNDS: ChannelBounds = ChannelBounds {
    min: 0.0,
    max: 120.0,
    step: 0.1,
    default: 60.0,
    decimals: 1,
};

impl Channel {
    pub fn bounds(self) -> ChannelBounds {
        match self {
            Channel::Tv => TV_BOUNDS,
            Channel::Radio => RADIO_BOUNDS,
            Channel::Newspaper => NEWSPAPER_BOUNDS,
        }
    }
}

impl ChannelBounds {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamps into range and rounds to the nearest step, as a slider would.
    pub fn snap(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.default;
        }
        let steps = ((value.clamp(self.min, self.max) - self.min) / self.step).round();
        let factor = 10f64.powi(self.decimals as i32);
        let snapped = ((self.min + steps * self.step) * factor).round() / factor;
        snapped.clamp(self.min, self.max)
    }
}

impl AdSpend {
    /// Slider starting positions.
    pub fn defaults() -> Self {
        AdSpend::new(TV_BOUNDS.default, RADIO_BOUNDS.default, NEWSPAPER_BOUNDS.default)
    }

    /// Rejects values a bounded control could not have produced.
    pub fn validated(tv: f64, radio: f64, newspaper: f64) -> Result<Self, InputError> {
        let spend = AdSpend::new(tv, radio, newspaper);
        for channel in Channel::ALL {
            let value = spend.get(channel);
            let bounds = channel.bounds();
            if !value.is_finite() {
                return Err(InputError::NotFinite {
                    channel: channel.name(),
                    value,
                });
            }
            if !bounds.contains(value) {
                return Err(InputError::OutOfRange {
                    channel: channel.name(),
                    value,
                    min: bounds.min,
                    max: bounds.max,
                });
            }
        }
        Ok(spend)
    }
}
