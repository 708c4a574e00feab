//! Pipeline orchestrator.
//!
//! Owns all per-run state (goal arena, reducer, predictor, evaluator,
//! lifecycle manager, current time) and sequences the stages for each
//! incoming sample. One instance per run; processing is strictly
//! sequential and never reentrant.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::{debug, info};

use reach_core::types::goal::to_percent;
use reach_core::{
    Action, GoalArena, GoalId, GoalReport, PipelineError, RankedGoal, ReachConfig, Sample,
    SampleResult, Vec3,
};

use crate::lifecycle::LifecycleManager;
use crate::prediction::{PredictorState, TrajectoryPredictor};
use crate::probability::ProbabilityEvaluator;
use crate::smoothing::NoiseReducer;

/// Per-run inference pipeline.
pub struct Pipeline {
    goals: GoalArena,
    reducer: NoiseReducer,
    predictor: TrajectoryPredictor,
    evaluator: ProbabilityEvaluator,
    lifecycle: LifecycleManager,
    decision_threshold: f64,
    current_time: Option<f64>,
    action_log: Vec<Action>,
    lookahead: Option<Action>,
}

impl Pipeline {
    /// Build a pipeline from the run configuration and the goal table.
    pub fn new(config: &ReachConfig, goal_table: &[(u32, Vec3)]) -> Result<Self, PipelineError> {
        config.validate()?;
        let goals = GoalArena::from_table(goal_table)?;
        info!(goals = goals.len(), task = ?config.task, "pipeline initialized");
        Ok(Self {
            goals,
            reducer: NoiseReducer::from_config(&config.smoothing)?,
            predictor: TrajectoryPredictor::new(&config.predictor),
            evaluator: ProbabilityEvaluator::new(&config.probability),
            lifecycle: LifecycleManager::new(config.task),
            decision_threshold: config.probability.effective_decision_threshold(),
            current_time: None,
            action_log: Vec::new(),
            lookahead: None,
        })
    }

    /// The canonical goal collection.
    pub fn goals(&self) -> &GoalArena {
        &self.goals
    }

    /// Timestamp of the last accepted sample.
    pub fn current_time(&self) -> Option<f64> {
        self.current_time
    }

    /// Process one sample and its accompanying actions.
    ///
    /// Returns `Ok(None)` while the predictor warms up or when the sample
    /// is spatially too close to the previous one; both are expected and
    /// not errors. A malformed sample is rejected before any state
    /// mutation. `Err(GoalsExhausted)` terminates the run.
    pub fn process_sample(
        &mut self,
        sample: Sample,
        actions: &[Action],
    ) -> Result<Option<SampleResult>, PipelineError> {
        sample.validate(self.current_time)?;

        self.current_time = Some(sample.time);
        self.action_log.clear();
        self.lookahead = None;

        for action in actions {
            self.lifecycle.handle(action, sample.time, &mut self.goals)?;
            if action.time <= sample.time {
                self.action_log.push(action.clone());
            } else {
                self.lookahead = Some(action.clone());
            }
        }

        if self.goals.is_exhausted() {
            return Err(PipelineError::GoalsExhausted);
        }

        self.reducer.add(sample.position);
        let smoothed = self.reducer.get().unwrap_or(sample.position);

        match self.predictor.update(smoothed, &mut self.goals) {
            PredictorState::Warmup | PredictorState::Skipped => {
                debug!(time = sample.time, "no prediction for this sample");
                return Ok(None);
            }
            PredictorState::Updated => {}
        }

        let uncategorized = self.evaluator.update(&mut self.goals);
        Ok(Some(self.assemble(sample, smoothed, uncategorized)))
    }

    /// Package the scored goal state into the per-sample result record.
    fn assemble(&self, sample: Sample, smoothed: Vec3, uncategorized: f64) -> SampleResult {
        let mut goals: FxHashMap<GoalId, GoalReport> = FxHashMap::default();
        for goal in self.goals.candidates() {
            goals.insert(goal.id, goal.report());
        }

        let uncategorized = to_percent(uncategorized);

        let mut ranked: Vec<RankedGoal> = goals
            .iter()
            .map(|(&id, report)| RankedGoal {
                id: Some(id),
                probability: report.probability,
                distance: report.distance,
            })
            .collect();
        ranked.push(RankedGoal {
            id: None,
            probability: uncategorized,
            distance: 0.0,
        });
        ranked.sort_by(|a, b| {
            b.probability
                .partial_cmp(&a.probability)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let top: SmallVec<[RankedGoal; 4]> = ranked
            .into_iter()
            .filter(|entry| entry.probability > 0.0)
            .take(3)
            .collect();

        // The synthetic uncategorized entry may be the leader; it counts.
        let decision = top
            .first()
            .filter(|leader| leader.probability > self.decision_threshold)
            .cloned();

        SampleResult {
            time: sample.time,
            hand_position: sample.position,
            smoothed_position: smoothed,
            goals,
            uncategorized,
            top,
            decision,
            actions: self.action_log.clone(),
            lookahead: self.lookahead.clone(),
        }
    }
}
