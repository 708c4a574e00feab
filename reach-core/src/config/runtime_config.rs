//! Runtime (queue + emitter) configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PACING, DEFAULT_QUEUE_CAPACITY, DEFAULT_TIME_STEP};
use crate::errors::ConfigError;

/// What the producer does when the bounded sample queue is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Block the producer until the consumer catches up.
    #[default]
    Block,
    /// Drop the oldest queued envelope to make room for the newest.
    DropOldest,
}

/// Configuration for the simulated real-time runtime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Bounded queue capacity between producer and consumer. Default: 256.
    pub queue_capacity: Option<usize>,
    /// Producer behavior on a full queue. Default: block.
    pub overflow: OverflowPolicy,
    /// Emitter tick length in source time units. Default: 17 (~60 Hz).
    pub time_step: Option<f64>,
    /// Pacing factor: wall-clock milliseconds slept per tick unit.
    /// 1.0 emulates real time, 0 disables sleeping. Default: 1.0.
    pub pacing: Option<f64>,
}

impl RuntimeConfig {
    pub fn effective_queue_capacity(&self) -> usize {
        self.queue_capacity.unwrap_or(DEFAULT_QUEUE_CAPACITY)
    }

    pub fn effective_time_step(&self) -> f64 {
        self.time_step.unwrap_or(DEFAULT_TIME_STEP)
    }

    pub fn effective_pacing(&self) -> f64 {
        self.pacing.unwrap_or(DEFAULT_PACING)
    }

    /// Validate the queue capacity (a zero-capacity channel would rendezvous).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.effective_queue_capacity() < 1 {
            return Err(ConfigError::InvalidQueueCapacity);
        }
        Ok(())
    }
}
