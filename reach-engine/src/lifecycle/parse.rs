//! Action string parsing.
//!
//! The action source encodes actions as `verb_goalID_tokenID` tokens,
//! comma-separated when several are listed. Malformed entries are skipped
//! with a diagnostic; they never abort the batch.

use tracing::warn;

use reach_core::{ActionError, ActionKind, GoalId};

/// Parse one `verb_goalID[_tokenID]` token.
pub fn parse_action_token(token: &str) -> Result<(ActionKind, GoalId), ActionError> {
    let mut parts = token.trim().split('_');
    let verb = parts.next().unwrap_or_default();
    let id = parts.next().ok_or_else(|| ActionError::MalformedToken {
        token: token.to_string(),
    })?;

    let kind: ActionKind = verb.parse()?;
    let id: u32 = id.parse().map_err(|_| ActionError::MalformedToken {
        token: token.to_string(),
    })?;
    Ok((kind, GoalId(id)))
}

/// Parse a comma-separated token list, skipping malformed entries.
pub fn parse_action_list(raw: &str) -> Vec<(ActionKind, GoalId)> {
    raw.split(',')
        .filter(|token| !token.trim().is_empty())
        .filter_map(|token| match parse_action_token(token) {
            Ok(parsed) => Some(parsed),
            Err(error) => {
                warn!(%error, token, "skipping malformed action entry");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_verb_and_goal_id() {
        assert_eq!(
            parse_action_token("pick_3_17").unwrap(),
            (ActionKind::Pick, GoalId(3))
        );
        // The trailing token id is optional.
        assert_eq!(
            parse_action_token("place_12").unwrap(),
            (ActionKind::Place, GoalId(12))
        );
    }

    #[test]
    fn rejects_unknown_verbs_and_bad_ids() {
        assert!(matches!(
            parse_action_token("jump_3_1"),
            Err(ActionError::UnknownVerb { .. })
        ));
        assert!(matches!(
            parse_action_token("pick_x_1"),
            Err(ActionError::MalformedToken { .. })
        ));
        assert!(matches!(
            parse_action_token("pick"),
            Err(ActionError::MalformedToken { .. })
        ));
    }

    #[test]
    fn list_skips_malformed_entries() {
        let parsed = parse_action_list("pick_1_1,garbage,place_2_9, ,pick_7_0");
        assert_eq!(
            parsed,
            vec![
                (ActionKind::Pick, GoalId(1)),
                (ActionKind::Place, GoalId(2)),
                (ActionKind::Pick, GoalId(7)),
            ]
        );
    }

    #[test]
    fn empty_list_parses_to_nothing() {
        assert!(parse_action_list("").is_empty());
    }
}
