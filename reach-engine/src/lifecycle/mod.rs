//! Goal/action lifecycle management.
//!
//! Goals move `Active -> Inactive` exactly once, when a relevant discrete
//! action consumes them; only an explicit look-ahead correction can bring
//! one back. Look-ahead actions narrow the scored candidate subset ahead
//! of time and fail open on inconsistent hints.

pub mod parse;

pub use parse::{parse_action_list, parse_action_token};

use tracing::{debug, info, warn};

use reach_core::{Action, ActionError, GoalArena, PipelineError, TaskDirection};

/// What handling one action did to the goal collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// A relevant historical action consumed its target goal.
    Deactivated,
    /// A look-ahead hint narrowed the candidate subset to `n` goals.
    Narrowed(usize),
    /// The action did not change the collection.
    Ignored,
}

/// Applies discrete actions to the goal arena.
#[derive(Debug, Clone)]
pub struct LifecycleManager {
    task: TaskDirection,
}

impl LifecycleManager {
    pub fn new(task: TaskDirection) -> Self {
        Self { task }
    }

    pub fn task(&self) -> TaskDirection {
        self.task
    }

    /// Apply one action against the arena at pipeline time `now`.
    ///
    /// Historical actions (time at or before `now`) consume their target
    /// when relevant; look-ahead actions narrow the candidate subset.
    /// Only an emptied active set is fatal.
    pub fn handle(
        &self,
        action: &Action,
        now: f64,
        goals: &mut GoalArena,
    ) -> Result<Applied, PipelineError> {
        if action.time <= now {
            self.handle_historical(action, goals)
        } else {
            Ok(self.handle_lookahead(action, goals))
        }
    }

    fn handle_historical(
        &self,
        action: &Action,
        goals: &mut GoalArena,
    ) -> Result<Applied, PipelineError> {
        if !action.is_relevant {
            debug!(
                goal = %action.target,
                kind = ?action.kind,
                "action verb does not consume goals for this task direction"
            );
            return Ok(Applied::Ignored);
        }

        match goals.deactivate(action.target) {
            Ok(()) => {
                info!(
                    goal = %action.target,
                    tracked_hand = action.is_tracked_hand,
                    remaining = goals.active_count(),
                    "goal consumed by action"
                );
            }
            Err(ActionError::UnknownGoal { id }) => {
                warn!(id, "action targets a goal missing from the goal table");
                return Ok(Applied::Ignored);
            }
            Err(error) => {
                warn!(%error, "action could not be applied");
                return Ok(Applied::Ignored);
            }
        }

        if goals.is_exhausted() {
            return Err(PipelineError::GoalsExhausted);
        }
        Ok(Applied::Deactivated)
    }

    fn handle_lookahead(&self, action: &Action, goals: &mut GoalArena) -> Applied {
        let Some(hinted) = &action.possible_targets else {
            // No hint to narrow by; keep scoring the full set.
            goals.reset_focus();
            return Applied::Ignored;
        };

        // An inactive goal named as the primary look-ahead target is an
        // explicit correction; goals merely listed in the hint are not.
        if goals.contains(action.target) && !goals.is_active(action.target) {
            if goals.reactivate(action.target).is_ok() {
                info!(goal = %action.target, "look-ahead correction restored goal");
            }
        }

        let mut candidate_ids = Vec::with_capacity(hinted.len() + 1);
        candidate_ids.push(action.target);
        candidate_ids.extend(hinted.iter().copied());

        if goals.narrow_focus(&candidate_ids) {
            let narrowed = goals.candidates().count();
            info!(
                goal = %action.target,
                narrowed,
                "look-ahead hint narrowed candidate goals"
            );
            Applied::Narrowed(narrowed)
        } else {
            warn!(
                goal = %action.target,
                "inconsistent look-ahead hint, keeping the full goal set"
            );
            Applied::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use reach_core::{ActionKind, GoalId, Hand, Vec3};

    fn arena() -> GoalArena {
        GoalArena::from_table(&[
            (1, Vec3::new(0.0, 0.0, 0.0)),
            (2, Vec3::new(1.0, 0.0, 0.0)),
            (3, Vec3::new(0.0, 1.0, 0.0)),
        ])
        .unwrap()
    }

    fn pick(time: f64, target: u32, hint: Option<Vec<GoalId>>) -> Action {
        Action::new(
            time,
            Hand::Right,
            ActionKind::Pick,
            GoalId(target),
            TaskDirection::Assembly,
            true,
            hint,
        )
    }

    #[test]
    fn relevant_past_action_consumes_goal() {
        let mut goals = arena();
        let manager = LifecycleManager::new(TaskDirection::Assembly);
        let applied = manager.handle(&pick(5.0, 1, None), 10.0, &mut goals).unwrap();
        assert_eq!(applied, Applied::Deactivated);
        assert!(!goals.is_active(GoalId(1)));
        assert_eq!(goals.active_count(), 2);
    }

    #[test]
    fn irrelevant_verb_is_ignored() {
        let mut goals = arena();
        let manager = LifecycleManager::new(TaskDirection::Assembly);
        let place = Action::new(
            5.0,
            Hand::Right,
            ActionKind::Place,
            GoalId(1),
            TaskDirection::Assembly,
            true,
            None,
        );
        let applied = manager.handle(&place, 10.0, &mut goals).unwrap();
        assert_eq!(applied, Applied::Ignored);
        assert_eq!(goals.active_count(), 3);
    }

    #[test]
    fn consuming_the_last_goal_is_fatal() {
        let mut goals = arena();
        let manager = LifecycleManager::new(TaskDirection::Assembly);
        manager.handle(&pick(1.0, 1, None), 10.0, &mut goals).unwrap();
        manager.handle(&pick(2.0, 2, None), 10.0, &mut goals).unwrap();
        let result = manager.handle(&pick(3.0, 3, None), 10.0, &mut goals);
        assert!(matches!(result, Err(PipelineError::GoalsExhausted)));
    }

    #[test]
    fn unknown_target_is_a_logged_noop() {
        let mut goals = arena();
        let manager = LifecycleManager::new(TaskDirection::Assembly);
        let applied = manager.handle(&pick(1.0, 99, None), 10.0, &mut goals).unwrap();
        assert_eq!(applied, Applied::Ignored);
        assert_eq!(goals.active_count(), 3);
    }

    #[test]
    fn lookahead_narrows_candidates() {
        let mut goals = arena();
        let manager = LifecycleManager::new(TaskDirection::Assembly);
        let applied = manager
            .handle(&pick(20.0, 2, Some(vec![GoalId(3)])), 10.0, &mut goals)
            .unwrap();
        assert_eq!(applied, Applied::Narrowed(2));
        let ids: Vec<GoalId> = goals.candidates().map(|g| g.id).collect();
        assert_eq!(ids, vec![GoalId(2), GoalId(3)]);
    }

    #[test]
    fn lookahead_without_hint_fails_open() {
        let mut goals = arena();
        goals.narrow_focus(&[GoalId(1)]);
        let manager = LifecycleManager::new(TaskDirection::Assembly);
        let applied = manager.handle(&pick(20.0, 2, None), 10.0, &mut goals).unwrap();
        assert_eq!(applied, Applied::Ignored);
        assert_eq!(goals.candidates().count(), 3);
    }

    #[test]
    fn inconsistent_hint_fails_open() {
        let mut goals = arena();
        let manager = LifecycleManager::new(TaskDirection::Assembly);
        let applied = manager
            .handle(&pick(20.0, 2, Some(vec![GoalId(99)])), 10.0, &mut goals)
            .unwrap();
        assert_eq!(applied, Applied::Ignored);
        assert_eq!(goals.candidates().count(), 3);
    }

    #[test]
    fn lookahead_correction_restores_consumed_goal() {
        let mut goals = arena();
        let manager = LifecycleManager::new(TaskDirection::Assembly);
        manager.handle(&pick(1.0, 2, None), 10.0, &mut goals).unwrap();
        assert!(!goals.is_active(GoalId(2)));

        // A future action that names goal 2 as its primary target brings
        // it back; hinted bystanders would not.
        manager
            .handle(&pick(20.0, 2, Some(vec![GoalId(1)])), 10.0, &mut goals)
            .unwrap();
        assert!(goals.is_active(GoalId(2)));
    }
}
