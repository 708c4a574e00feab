//! Probability evaluator configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DECISION_THRESHOLD, DEFAULT_DISTANCE_WEIGHT, DEFAULT_MAX_VARIANCE,
    DEFAULT_MIN_VARIANCE, DEFAULT_PROBABILITY_FLOOR,
};
use crate::errors::ConfigError;

/// Configuration for the probability evaluator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProbabilityConfig {
    /// Lower bound for the angle variance. Default: 0.0625.
    pub min_variance: Option<f64>,
    /// Upper bound for the angle variance. Default: 0.125.
    pub max_variance: Option<f64>,
    /// Weight of the distance discount; 0 disables it. Default: 0.5.
    pub distance_weight: Option<f64>,
    /// Floor below which an angle likelihood resets the streak. Default: 0.001.
    pub probability_floor: Option<f64>,
    /// Decision threshold on the 0-100 scale. Default: 60.
    pub decision_threshold: Option<f64>,
}

impl ProbabilityConfig {
    pub fn effective_min_variance(&self) -> f64 {
        self.min_variance.unwrap_or(DEFAULT_MIN_VARIANCE)
    }

    pub fn effective_max_variance(&self) -> f64 {
        self.max_variance.unwrap_or(DEFAULT_MAX_VARIANCE)
    }

    pub fn effective_distance_weight(&self) -> f64 {
        self.distance_weight.unwrap_or(DEFAULT_DISTANCE_WEIGHT)
    }

    pub fn effective_probability_floor(&self) -> f64 {
        self.probability_floor.unwrap_or(DEFAULT_PROBABILITY_FLOOR)
    }

    pub fn effective_decision_threshold(&self) -> f64 {
        self.decision_threshold.unwrap_or(DEFAULT_DECISION_THRESHOLD)
    }

    /// Validate the variance bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let min = self.effective_min_variance();
        let max = self.effective_max_variance();
        if min <= 0.0 || max < min || !min.is_finite() || !max.is_finite() {
            return Err(ConfigError::InvalidVarianceBounds { min, max });
        }
        Ok(())
    }
}
