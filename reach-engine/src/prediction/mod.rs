//! Short-horizon trajectory prediction.
//!
//! From the last two observed positions the predictor fits, per active
//! goal, a cubic model whose endpoint blend lands on the goal, then reads
//! off the predicted progression point, its tangent, the planar deviation
//! angle, and whether the hand is closing in on the goal.

pub mod geometry;

pub use geometry::{distance, normalize, planar_angle};

use tracing::trace;

use reach_core::{CubicModel, GoalArena, PredictorConfig, Vec3};

/// What [`TrajectoryPredictor::update`] did with a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictorState {
    /// Fewer than two prior positions observed; no output yet.
    Warmup,
    /// The sample was closer than `min_distance` to the current position;
    /// state untouched, no output.
    Skipped,
    /// State shifted and every candidate goal annotated.
    Updated,
}

/// Two-point prediction state over the incoming sample stream.
#[derive(Debug, Clone)]
pub struct TrajectoryPredictor {
    min_distance: f64,
    min_progression: f64,
    prev_position: Option<Vec3>,
    curr_position: Option<Vec3>,
    prev_direction: Option<Vec3>,
    curr_direction: Option<Vec3>,
}

impl TrajectoryPredictor {
    pub fn new(config: &PredictorConfig) -> Self {
        Self {
            min_distance: config.effective_min_distance(),
            min_progression: config.effective_min_progression(),
            prev_position: None,
            curr_position: None,
            prev_direction: None,
            curr_direction: None,
        }
    }

    /// The most recent observed movement direction, once two samples exist.
    pub fn current_direction(&self) -> Option<Vec3> {
        self.curr_direction
    }

    /// The most recent accepted position.
    pub fn current_position(&self) -> Option<Vec3> {
        self.curr_position
    }

    /// Feed the next (smoothed) position and annotate the candidate goals.
    ///
    /// The spatial `min_distance` gate rate-limits recomputation to
    /// spatially separated samples; a skipped sample leaves all state
    /// untouched.
    pub fn update(&mut self, next: Vec3, goals: &mut GoalArena) -> PredictorState {
        let prev = match self.prev_position {
            None => {
                self.prev_position = Some(next);
                return PredictorState::Warmup;
            }
            Some(p) => p,
        };

        let curr = match self.curr_position {
            None => {
                self.curr_position = Some(next);
                self.curr_direction = Some(normalize(next - prev));
                return PredictorState::Warmup;
            }
            Some(c) => c,
        };

        if distance(curr, next) < self.min_distance {
            return PredictorState::Skipped;
        }

        // Shift the two-point window.
        self.prev_position = Some(curr);
        self.prev_direction = self.curr_direction;
        self.curr_position = Some(next);
        let curr_direction = normalize(next - curr);
        self.curr_direction = Some(curr_direction);

        let prev_position = curr;
        let prev_direction = self.prev_direction.unwrap_or(curr_direction);
        let step = distance(prev_position, next);

        for goal in goals.candidates_mut() {
            goal.set_distance(next);

            let model = CubicModel::fit(prev_position, prev_direction, goal.position);
            let s = progression(step, goal.distance, self.min_progression);

            let point = model.point_at(s);
            let tangent = normalize(model.tangent_at(s));

            goal.trajectory = Some(model);
            goal.progression_point = Some(point);
            goal.tangent_direction = Some(tangent);
            goal.angle = planar_angle(tangent, curr_direction);
            goal.moving_towards = (goal.position - next).dot(&curr_direction) > 0.0;

            trace!(
                goal = %goal.id,
                s,
                angle = goal.angle,
                towards = goal.moving_towards,
                "goal annotated"
            );
        }

        PredictorState::Updated
    }
}

/// Progression coordinate along the goal-directed path.
///
/// `s = d(prev, curr) / (d(prev, curr) + d(goal, curr))`, floored at
/// `min_progression` so a barely moving hand cannot push the evaluation
/// point onto a degenerate stretch of the curve.
fn progression(step: f64, goal_distance: f64, min_progression: f64) -> f64 {
    let denominator = step + goal_distance;
    let s = if denominator < f64::EPSILON {
        min_progression
    } else {
        step / denominator
    };
    s.max(min_progression)
}
