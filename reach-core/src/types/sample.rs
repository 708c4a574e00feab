//! Position samples from the tracker.

use serde::{Deserialize, Serialize};

use crate::errors::IngestError;

use super::Vec3;

/// One raw wrist position sample.
///
/// Timestamps are source time units and must be non-decreasing across a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time: f64,
    pub position: Vec3,
}

impl Sample {
    pub fn new(time: f64, position: Vec3) -> Self {
        Self { time, position }
    }

    /// Validate this sample against the pipeline's current time.
    ///
    /// Rejection happens before any state mutation; a bad sample is
    /// skipped, never fatal.
    pub fn validate(&self, current_time: Option<f64>) -> Result<(), IngestError> {
        if !self.time.is_finite() {
            return Err(IngestError::NonFiniteTime);
        }
        if self.time < 0.0 {
            return Err(IngestError::NegativeTime { time: self.time });
        }
        if !(self.position.x.is_finite() && self.position.y.is_finite() && self.position.z.is_finite())
        {
            return Err(IngestError::NonFinitePosition);
        }
        if let Some(current) = current_time {
            if self.time < current {
                return Err(IngestError::TimeRegression {
                    time: self.time,
                    current,
                });
            }
        }
        Ok(())
    }
}
