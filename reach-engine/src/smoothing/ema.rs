//! Exponential moving average.

use reach_core::{ConfigError, Vec3};

/// Bufferless smoother: `ema = alpha * x + (1 - alpha) * ema`, seeded by
/// the first sample.
#[derive(Debug, Clone)]
pub struct Ema {
    alpha: f64,
    state: Option<Vec3>,
}

impl Ema {
    pub fn new(alpha: f64) -> Result<Self, ConfigError> {
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(ConfigError::InvalidAlpha { alpha });
        }
        Ok(Self { alpha, state: None })
    }

    pub fn add(&mut self, position: Vec3) {
        self.state = Some(match self.state {
            None => position,
            Some(ema) => self.alpha * position + (1.0 - self.alpha) * ema,
        });
    }

    pub fn get(&self) -> Option<Vec3> {
        self.state
    }
}
