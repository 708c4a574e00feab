//! Goal identifier newtype.

use serde::{Deserialize, Serialize};

/// Identifier of a candidate goal, unique within a run.
///
/// Ids come from the goal table and need not be contiguous.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GoalId(pub u32);

impl GoalId {
    /// Get the inner id.
    pub fn inner(self) -> u32 {
        self.0
    }
}

impl From<u32> for GoalId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for GoalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
