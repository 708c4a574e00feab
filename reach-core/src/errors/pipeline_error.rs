//! Pipeline errors.
//! Aggregates subsystem errors via `From` conversions.

use super::{ActionError, ConfigError, IngestError, LoadError};

/// Errors that can occur while driving the inference pipeline.
///
/// Only [`PipelineError::GoalsExhausted`] is fatal for a run: once the last
/// active goal has been consumed there is nothing left to disambiguate and
/// continuing would emit misleading results.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Ingest error: {0}")]
    Ingest(#[from] IngestError),

    #[error("Action error: {0}")]
    Action(#[from] ActionError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("No active goals remain")]
    GoalsExhausted,
}

impl PipelineError {
    /// Whether this error terminates the run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::GoalsExhausted)
    }
}
