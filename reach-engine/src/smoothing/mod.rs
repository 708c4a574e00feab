//! Noise reduction for raw position samples.
//!
//! Three interchangeable strategies plus an identity pass-through. A
//! larger window (or smaller alpha) smooths harder but reacts slower to
//! sudden changes; EMA handles sudden changes best, SMA worst.
//!
//! Reducers are stateful and must not be shared across runs.

pub mod ema;
pub mod sma;
pub mod wma;

pub use ema::Ema;
pub use sma::Sma;
pub use wma::Wma;

use reach_core::{ConfigError, SmoothingConfig, Vec3};

/// A configured noise reduction strategy.
///
/// Contract: [`NoiseReducer::add`] ingests one sample,
/// [`NoiseReducer::get`] yields the current smoothed estimate, or `None`
/// before any sample arrived.
#[derive(Debug, Clone)]
pub enum NoiseReducer {
    /// Identity pass-through; returns the latest sample unchanged.
    Passthrough { last: Option<Vec3> },
    Simple(Sma),
    Weighted(Wma),
    Exponential(Ema),
}

impl NoiseReducer {
    /// Build the reducer selected by the run configuration.
    pub fn from_config(config: &SmoothingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(match *config {
            SmoothingConfig::None => Self::Passthrough { last: None },
            SmoothingConfig::Simple { window } => Self::Simple(Sma::new(window)?),
            SmoothingConfig::Weighted { window } => Self::Weighted(Wma::new(window)?),
            SmoothingConfig::Exponential { alpha } => Self::Exponential(Ema::new(alpha)?),
        })
    }

    /// Ingest one position sample.
    pub fn add(&mut self, position: Vec3) {
        match self {
            Self::Passthrough { last } => *last = Some(position),
            Self::Simple(sma) => sma.add(position),
            Self::Weighted(wma) => wma.add(position),
            Self::Exponential(ema) => ema.add(position),
        }
    }

    /// The current smoothed estimate, or `None` without history.
    pub fn get(&self) -> Option<Vec3> {
        match self {
            Self::Passthrough { last } => *last,
            Self::Simple(sma) => sma.get(),
            Self::Weighted(wma) => wma.get(),
            Self::Exponential(ema) => ema.get(),
        }
    }
}
