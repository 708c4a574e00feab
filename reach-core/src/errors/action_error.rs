//! Discrete-action errors.
//!
//! A malformed action entry is skipped with a diagnostic; other actions
//! in the same batch still apply.

/// Errors raised while parsing or applying a discrete pick/place action.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("Malformed action token '{token}'")]
    MalformedToken { token: String },

    #[error("Unknown action verb '{verb}'")]
    UnknownVerb { verb: String },

    #[error("Unknown hand '{hand}'")]
    UnknownHand { hand: String },

    #[error("Action targets unknown goal {id}")]
    UnknownGoal { id: u32 },
}
