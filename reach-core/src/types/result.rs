//! Per-sample result records.
//!
//! These are the in-process boundary to the test/plotting/reporting
//! collaborators; every field is serde-serializable so a consumer may
//! ship them as JSON unchanged.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Action, GoalId, Vec3};

/// Snapshot of one goal's state after a processed sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalReport {
    pub position: Vec3,
    /// Normalized probability on the 0-100 scale.
    pub probability: f64,
    /// Distance to the last observed hand position, in meters.
    pub distance: f64,
    /// Consecutive on-target samples backing the probability.
    pub sample_count: u32,
}

/// One entry of the ranked probability list.
///
/// `id == None` is the synthetic "uncategorized" entry: the residual
/// probability mass not attributed to any goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedGoal {
    pub id: Option<GoalId>,
    /// Probability on the 0-100 scale.
    pub probability: f64,
    pub distance: f64,
}

/// The packaged outcome of one processed sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleResult {
    pub time: f64,
    /// Raw hand position as observed.
    pub hand_position: Vec3,
    /// Position after noise reduction (equals `hand_position` without it).
    pub smoothed_position: Vec3,
    /// Per-goal snapshots for the scored candidate subset.
    pub goals: FxHashMap<GoalId, GoalReport>,
    /// Residual probability mass, 0-100 scale.
    pub uncategorized: f64,
    /// Top-3 candidates by probability, uncategorized entry included.
    pub top: SmallVec<[RankedGoal; 4]>,
    /// Set when the leading candidate crossed the decision threshold.
    pub decision: Option<RankedGoal>,
    /// Historical actions applied while processing this sample.
    pub actions: Vec<Action>,
    /// Look-ahead action observed with this sample, if any.
    pub lookahead: Option<Action>,
}

impl SampleResult {
    /// Ranked (id, probability) pairs for quick consumers.
    pub fn probability_pairs(&self) -> Vec<(GoalId, f64)> {
        let mut pairs: Vec<(GoalId, f64)> = self
            .goals
            .iter()
            .map(|(&id, report)| (id, report.probability))
            .collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        pairs
    }
}
