//! Top-level run configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::types::ActionKind;

use super::{PredictorConfig, ProbabilityConfig, RuntimeConfig, SmoothingConfig};

/// Direction of the observed task.
///
/// Determines which action verb consumes a goal: a `pick` removes a goal
/// during assembly, a `place` removes one during disassembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskDirection {
    #[default]
    Assembly,
    Disassembly,
}

impl TaskDirection {
    /// The action kind that consumes a goal under this task direction.
    pub fn relevant_kind(self) -> ActionKind {
        match self {
            Self::Assembly => ActionKind::Pick,
            Self::Disassembly => ActionKind::Place,
        }
    }
}

/// Complete configuration for one Reach run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReachConfig {
    /// Task direction; selects the goal-consuming action verb.
    pub task: TaskDirection,
    /// Noise reduction strategy.
    pub smoothing: SmoothingConfig,
    /// Trajectory predictor parameters.
    pub predictor: PredictorConfig,
    /// Probability evaluator parameters.
    pub probability: ProbabilityConfig,
    /// Queue and emitter parameters.
    pub runtime: RuntimeConfig,
}

impl ReachConfig {
    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Parse and validate a configuration from a TOML string.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all sub-configurations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.smoothing.validate()?;
        self.probability.validate()?;
        self.runtime.validate()?;
        Ok(())
    }
}
