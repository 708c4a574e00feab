//! Candidate goals and their per-sample prediction state.

use serde::{Deserialize, Serialize};

use crate::constants::DISTANCE_SENTINEL;

use super::{GoalId, GoalReport, Vec3};

/// Per-axis cubic trajectory model and its derivative.
///
/// Coefficients are highest degree first: `position[axis]` holds
/// `[a3, a2, a1, a0]` and `derivative[axis]` holds `[3*a3, 2*a2, a1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicModel {
    pub position: [[f64; 4]; 3],
    pub derivative: [[f64; 3]; 3],
}

impl CubicModel {
    /// Fit a cubic from `start` toward `goal`.
    ///
    /// Boundary conditions: position `start` and derivative `start_direction`
    /// at s = 0, and a Hermite-style endpoint blend that lands the curve on
    /// `goal` at s = 1.
    pub fn fit(start: Vec3, start_direction: Vec3, goal: Vec3) -> Self {
        let a0 = start;
        let a1 = start_direction;
        let a2 = 1.5 * goal - 1.5 * a0 - 1.5 * a1;
        let a3 = -0.5 * goal + 0.5 * a0 + 0.5 * a1;

        let mut position = [[0.0; 4]; 3];
        let mut derivative = [[0.0; 3]; 3];
        for axis in 0..3 {
            position[axis] = [a3[axis], a2[axis], a1[axis], a0[axis]];
            derivative[axis] = [3.0 * a3[axis], 2.0 * a2[axis], a1[axis]];
        }
        Self {
            position,
            derivative,
        }
    }

    /// Evaluate the trajectory at progression `s`.
    pub fn point_at(&self, s: f64) -> Vec3 {
        Vec3::new(
            polyval(&self.position[0], s),
            polyval(&self.position[1], s),
            polyval(&self.position[2], s),
        )
    }

    /// Evaluate the (unnormalized) tangent at progression `s`.
    pub fn tangent_at(&self, s: f64) -> Vec3 {
        Vec3::new(
            polyval(&self.derivative[0], s),
            polyval(&self.derivative[1], s),
            polyval(&self.derivative[2], s),
        )
    }
}

/// Horner evaluation, coefficients highest degree first.
fn polyval(coefficients: &[f64], s: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, c| acc * s + c)
}

/// A candidate target the hand may be moving toward.
///
/// The position is immutable for the run; everything else is recomputed
/// by the predictor and evaluator on every accepted sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub position: Vec3,

    // prediction state
    pub distance: f64,
    pub previous_distance: f64,
    pub trajectory: Option<CubicModel>,
    pub progression_point: Option<Vec3>,
    pub tangent_direction: Option<Vec3>,
    pub angle: f64,
    pub moving_towards: bool,

    // probability state; `probability == 0.0` iff `sample_count == 0`
    pub probability: f64,
    pub sample_count: u32,
}

impl Goal {
    pub fn new(id: GoalId, position: Vec3) -> Self {
        Self {
            id,
            position,
            distance: DISTANCE_SENTINEL,
            previous_distance: DISTANCE_SENTINEL,
            trajectory: None,
            progression_point: None,
            tangent_direction: None,
            angle: std::f64::consts::PI,
            moving_towards: false,
            probability: 0.0,
            sample_count: 0,
        }
    }

    /// Update the distance pair from the current hand position.
    pub fn set_distance(&mut self, current: Vec3) {
        self.previous_distance = self.distance;
        self.distance = (current - self.position).norm();
    }

    /// Fold one angle likelihood into the accumulated streak probability.
    ///
    /// Three-way rule: an implausible or receding sample resets the streak,
    /// a plausible sample on an empty streak begins it, and anything else
    /// multiplies into the running product.
    pub fn apply_angle_probability(&mut self, angle_probability: f64, floor: f64) {
        if angle_probability < floor || !self.moving_towards {
            self.probability = 0.0;
            self.sample_count = 0;
        } else if self.probability < floor {
            self.probability = angle_probability;
            self.sample_count = 1;
        } else {
            self.probability *= angle_probability;
            self.sample_count += 1;
        }
    }

    /// Divide the accumulated probability by `divisor`.
    pub fn scale_probability(&mut self, divisor: f64) {
        self.probability /= divisor;
    }

    /// Snapshot this goal for the per-sample result record.
    pub fn report(&self) -> GoalReport {
        GoalReport {
            position: self.position,
            probability: to_percent(self.probability),
            distance: self.distance,
            sample_count: self.sample_count,
        }
    }
}

/// Convert a [0, 1] probability to the 0-100 output scale, 2 decimals.
pub fn to_percent(probability: f64) -> f64 {
    (probability * 100.0 * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn cubic_hits_boundary_conditions() {
        let start = Vec3::new(0.1, -0.2, 0.3);
        let direction = Vec3::new(1.0, 0.0, 0.0);
        let goal = Vec3::new(2.0, 1.0, 0.0);
        let model = CubicModel::fit(start, direction, goal);

        assert!((model.point_at(0.0) - start).norm() < TOL);
        assert!((model.tangent_at(0.0) - direction).norm() < TOL);
        // The endpoint blend lands the curve exactly on the goal at s = 1.
        assert!((model.point_at(1.0) - goal).norm() < TOL);
    }

    #[test]
    fn derivative_matches_position_coefficients() {
        let model = CubicModel::fit(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
        );
        for axis in 0..3 {
            let [a3, a2, a1, _] = model.position[axis];
            assert!((model.derivative[axis][0] - 3.0 * a3).abs() < TOL);
            assert!((model.derivative[axis][1] - 2.0 * a2).abs() < TOL);
            assert!((model.derivative[axis][2] - a1).abs() < TOL);
        }
    }

    #[test]
    fn streak_resets_on_receding_hand() {
        let mut goal = Goal::new(GoalId(1), Vec3::new(1.0, 0.0, 0.0));
        goal.moving_towards = true;
        goal.apply_angle_probability(0.8, 0.001);
        goal.apply_angle_probability(0.8, 0.001);
        assert_eq!(goal.sample_count, 2);
        assert!((goal.probability - 0.64).abs() < TOL);

        goal.moving_towards = false;
        goal.apply_angle_probability(0.9, 0.001);
        assert_eq!(goal.sample_count, 0);
        assert_eq!(goal.probability, 0.0);
    }

    #[test]
    fn streak_resets_on_subfloor_likelihood() {
        let mut goal = Goal::new(GoalId(1), Vec3::new(1.0, 0.0, 0.0));
        goal.moving_towards = true;
        goal.apply_angle_probability(0.5, 0.001);
        assert_eq!(goal.sample_count, 1);

        goal.apply_angle_probability(0.0005, 0.001);
        assert_eq!(goal.sample_count, 0);
        assert_eq!(goal.probability, 0.0);
    }

    #[test]
    fn probability_and_count_stay_in_lockstep() {
        let mut goal = Goal::new(GoalId(1), Vec3::new(1.0, 0.0, 0.0));
        for plausible in [true, true, false, true] {
            goal.moving_towards = plausible;
            goal.apply_angle_probability(0.7, 0.001);
            assert_eq!(goal.probability == 0.0, goal.sample_count == 0);
        }
    }

    #[test]
    fn percent_scale_rounds_to_two_decimals() {
        assert!((to_percent(0.123456) - 12.35).abs() < TOL);
        assert_eq!(to_percent(0.0), 0.0);
        assert_eq!(to_percent(1.0), 100.0);
    }
}
