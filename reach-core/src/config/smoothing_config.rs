//! Noise reduction strategy selection.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Which noise reduction strategy to run ahead of the predictor.
///
/// One strategy is selected per run and carries its own parameters.
/// `None` is the identity pass-through and the default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum SmoothingConfig {
    /// No smoothing; samples pass through unchanged.
    #[default]
    None,
    /// Simple moving average over the last `window` samples.
    Simple { window: usize },
    /// Weighted moving average with a linear weight ramp over `window` samples.
    Weighted { window: usize },
    /// Exponential moving average with smoothing factor `alpha`.
    Exponential { alpha: f64 },
}

impl SmoothingConfig {
    /// Validate strategy parameters.
    ///
    /// Windows must be at least 1; alpha must lie strictly inside (0, 1).
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Self::None => Ok(()),
            Self::Simple { window } | Self::Weighted { window } => {
                if window < 1 {
                    Err(ConfigError::InvalidWindow { window })
                } else {
                    Ok(())
                }
            }
            Self::Exponential { alpha } => {
                if !(alpha > 0.0 && alpha < 1.0) {
                    Err(ConfigError::InvalidAlpha { alpha })
                } else {
                    Ok(())
                }
            }
        }
    }
}
