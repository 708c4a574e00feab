//! Trajectory predictor configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MIN_PROGRESSION, DEFAULT_MIN_SAMPLE_DISTANCE};

/// Configuration for the trajectory predictor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PredictorConfig {
    /// Minimum spatial separation between samples before the predictor
    /// recomputes, in meters. Default: 0.05.
    pub min_distance: Option<f64>,
    /// Lower bound for the progression coordinate `s`. Default: 0.1.
    pub min_progression: Option<f64>,
}

impl PredictorConfig {
    pub fn effective_min_distance(&self) -> f64 {
        self.min_distance.unwrap_or(DEFAULT_MIN_SAMPLE_DISTANCE)
    }

    pub fn effective_min_progression(&self) -> f64 {
        self.min_progression.unwrap_or(DEFAULT_MIN_PROGRESSION)
    }
}
