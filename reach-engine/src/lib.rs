//! Reach inference engine.
//!
//! Every accepted sample flows noise reduction → trajectory prediction →
//! probability scoring → goal-set maintenance, carrying the previous
//! sample's state forward. The [`pipeline::Pipeline`] orchestrator owns
//! all per-run state and sequences the stages.

pub mod lifecycle;
pub mod pipeline;
pub mod prediction;
pub mod probability;
pub mod smoothing;

pub use lifecycle::{Applied, LifecycleManager};
pub use pipeline::Pipeline;
pub use prediction::{PredictorState, TrajectoryPredictor};
pub use probability::ProbabilityEvaluator;
pub use smoothing::NoiseReducer;
