//! Table loading errors (goal, trajectory, and action sources).

/// Errors raised while loading the external goal/trajectory/action tables.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Goal table is empty")]
    EmptyGoalTable,

    #[error("Goal table contains duplicate id {id}")]
    DuplicateGoal { id: u32 },

    #[error("Malformed row at line {line}: '{content}'")]
    MalformedRow { line: usize, content: String },

    #[error("Trajectory timestamp decreases at line {line}")]
    NonMonotonicTime { line: usize },
}
