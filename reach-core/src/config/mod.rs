//! Layered configuration for a Reach run.
//!
//! All fields are optional in the TOML surface and resolved through
//! `effective_*()` accessors backed by [`crate::constants`].

pub mod predictor_config;
pub mod probability_config;
pub mod reach_config;
pub mod runtime_config;
pub mod smoothing_config;

pub use predictor_config::PredictorConfig;
pub use probability_config::ProbabilityConfig;
pub use reach_config::{ReachConfig, TaskDirection};
pub use runtime_config::{OverflowPolicy, RuntimeConfig};
pub use smoothing_config::SmoothingConfig;
