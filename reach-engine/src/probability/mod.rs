//! Angle-likelihood scoring and streak accumulation.
//!
//! A single spread estimate is shared across all candidates per sample:
//! the standard deviation of the candidates' deviation angles, clamped to
//! configured variance bounds so one sample can never produce a
//! degenerate (zero or huge) distribution.

use statrs::distribution::{Continuous, Normal};
use tracing::warn;

use reach_core::{GoalArena, ProbabilityConfig};

/// Turns per-goal deviation angles into normalized streak probabilities.
#[derive(Debug, Clone)]
pub struct ProbabilityEvaluator {
    min_sd: f64,
    max_sd: f64,
    distance_weight: f64,
    floor: f64,
}

impl ProbabilityEvaluator {
    pub fn new(config: &ProbabilityConfig) -> Self {
        Self {
            min_sd: config.effective_min_variance().sqrt(),
            max_sd: config.effective_max_variance().sqrt(),
            distance_weight: config.effective_distance_weight(),
            floor: config.effective_probability_floor(),
        }
    }

    /// Score every candidate goal in place and return the uncategorized
    /// probability mass in [0, 1].
    ///
    /// Steps: shared spread estimate, per-goal normal likelihood folded
    /// through the streak rule, optional distance discount, then
    /// normalization by `max(1, Σ)` so the candidates sum to at most 1.
    pub fn update(&self, goals: &mut GoalArena) -> f64 {
        let angles: Vec<f64> = goals.candidates().map(|g| g.angle).collect();
        if angles.is_empty() {
            return 1.0;
        }

        let sd = angle_spread(&angles, self.min_sd, self.max_sd);
        let normal = match Normal::new(0.0, sd) {
            Ok(normal) => normal,
            Err(error) => {
                // Unreachable with clamped bounds; fail closed if it happens.
                warn!(%error, sd, "degenerate angle distribution");
                for goal in goals.candidates_mut() {
                    goal.probability = 0.0;
                    goal.sample_count = 0;
                }
                return 1.0;
            }
        };

        for goal in goals.candidates_mut() {
            let p_angle = normal.pdf(goal.angle);
            let p_angle = if p_angle.is_finite() { p_angle } else { 0.0 };
            goal.apply_angle_probability(p_angle, self.floor);

            if self.distance_weight > 0.0 {
                goal.scale_probability(1.0 + self.distance_weight * goal.distance);
            }
        }

        let total: f64 = goals.candidates().map(|g| g.probability).sum();
        let divisor = total.max(1.0);
        for goal in goals.candidates_mut() {
            goal.scale_probability(divisor);
        }

        (1.0 - total / divisor).max(0.0)
    }
}

/// Population standard deviation of the angles, clamped to [min_sd, max_sd].
fn angle_spread(angles: &[f64], min_sd: f64, max_sd: f64) -> f64 {
    let n = angles.len() as f64;
    let mean = angles.iter().sum::<f64>() / n;
    let variance = angles.iter().map(|a| (a - mean).powi(2)).sum::<f64>() / n;
    let sd = variance.sqrt();
    if !sd.is_finite() {
        return min_sd;
    }
    sd.clamp(min_sd, max_sd)
}
