//! Core types, errors, config, constants, and tracing for Reach.
//!
//! Reach infers, in real time, which of several candidate spatial targets
//! ("goals") a tracked hand is moving toward. This crate holds everything
//! the engine and runtime crates share: the goal arena, sample and action
//! records, per-subsystem errors, the layered configuration, and the
//! tracing bootstrap. No inference logic lives here.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::{
    OverflowPolicy, PredictorConfig, ProbabilityConfig, ReachConfig, RuntimeConfig,
    SmoothingConfig, TaskDirection,
};
pub use errors::{ActionError, ConfigError, IngestError, LoadError, PipelineError};
pub use types::{
    Action, ActionKind, CubicModel, Goal, GoalArena, GoalId, GoalReport, Hand, RankedGoal,
    Sample, SampleResult, Vec3,
};
