//! Discrete pick/place actions.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::TaskDirection;
use crate::errors::ActionError;

use super::GoalId;

/// Which hand performed an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hand {
    Left,
    Right,
    Robot,
}

impl FromStr for Hand {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "robot" => Ok(Self::Robot),
            other => Err(ActionError::UnknownHand {
                hand: other.to_string(),
            }),
        }
    }
}

/// The two action verbs the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Pick,
    Place,
}

impl FromStr for ActionKind {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pick" => Ok(Self::Pick),
            "place" => Ok(Self::Place),
            other => Err(ActionError::UnknownVerb {
                verb: other.to_string(),
            }),
        }
    }
}

/// One discrete action from the action source.
///
/// Actions are historical (time at or before the current sample) or
/// look-ahead (time after it, used to pre-narrow candidates).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub time: f64,
    pub hand: Hand,
    pub kind: ActionKind,
    pub target: GoalId,
    /// Whether the verb matches the configured task direction.
    pub is_relevant: bool,
    /// Whether `hand` is the hand the position stream tracks.
    pub is_tracked_hand: bool,
    /// Hinted future targets for look-ahead narrowing.
    pub possible_targets: Option<Vec<GoalId>>,
}

impl Action {
    /// Build an action, deriving the relevance flag from the task direction.
    pub fn new(
        time: f64,
        hand: Hand,
        kind: ActionKind,
        target: GoalId,
        task: TaskDirection,
        is_tracked_hand: bool,
        possible_targets: Option<Vec<GoalId>>,
    ) -> Self {
        Self {
            time,
            hand,
            kind,
            target,
            is_relevant: kind == task.relevant_kind(),
            is_tracked_hand,
            possible_targets,
        }
    }
}
