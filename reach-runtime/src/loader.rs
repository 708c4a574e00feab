//! Plain-text table loaders for the goal, trajectory, and action sources.
//!
//! Row formats (a single header line is tolerated and skipped):
//!   goals        `ID,x,y,z`
//!   trajectory   `time,x,y,z`
//!   actions      `time,hand,verb_goalID_tokenID[,verb_goalID_tokenID...]`
//! Action fields beyond the third are the "possible future actions" hint.

use std::path::Path;

use tracing::warn;

use reach_core::{Action, GoalId, Hand, LoadError, Sample, TaskDirection, Vec3};
use reach_engine::lifecycle::{parse_action_list, parse_action_token};

/// Load the goal table: non-empty rows of `ID,x,y,z`.
pub fn load_goal_table(path: &Path) -> Result<Vec<(u32, Vec3)>, LoadError> {
    let raw = std::fs::read_to_string(path)?;
    let mut rows = Vec::new();
    for (line_no, line) in data_lines(&raw) {
        let fields = split_fields(line, line_no, 4)?;
        let id: u32 = fields[0].parse().map_err(|_| malformed(line_no, line))?;
        if rows.iter().any(|&(existing, _)| existing == id) {
            return Err(LoadError::DuplicateGoal { id });
        }
        rows.push((id, parse_position(&fields[1..4], line_no, line)?));
    }
    if rows.is_empty() {
        return Err(LoadError::EmptyGoalTable);
    }
    Ok(rows)
}

/// Load the trajectory: rows of `time,x,y,z` with non-decreasing time.
pub fn load_trajectory(path: &Path) -> Result<Vec<Sample>, LoadError> {
    let raw = std::fs::read_to_string(path)?;
    let mut samples: Vec<Sample> = Vec::new();
    for (line_no, line) in data_lines(&raw) {
        let fields = split_fields(line, line_no, 4)?;
        let time: f64 = fields[0].parse().map_err(|_| malformed(line_no, line))?;
        if let Some(last) = samples.last() {
            if time < last.time {
                return Err(LoadError::NonMonotonicTime { line: line_no });
            }
        }
        samples.push(Sample::new(
            time,
            parse_position(&fields[1..4], line_no, line)?,
        ));
    }
    Ok(samples)
}

/// Load the action source.
///
/// Malformed action tokens are skipped with a diagnostic, matching the
/// engine's parsing policy; a row without a single valid token is dropped
/// entirely.
pub fn load_actions(
    path: &Path,
    task: TaskDirection,
    tracked_hand: Hand,
) -> Result<Vec<Action>, LoadError> {
    let raw = std::fs::read_to_string(path)?;
    let mut actions = Vec::new();
    for (line_no, line) in data_lines(&raw) {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < 3 {
            return Err(malformed(line_no, line));
        }
        let time: f64 = fields[0].parse().map_err(|_| malformed(line_no, line))?;
        let hand: Hand = match fields[1].parse() {
            Ok(hand) => hand,
            Err(error) => {
                warn!(%error, line = line_no, "skipping action with unknown hand");
                continue;
            }
        };
        let (kind, target) = match parse_action_token(fields[2]) {
            Ok(parsed) => parsed,
            Err(error) => {
                warn!(%error, line = line_no, "skipping malformed action row");
                continue;
            }
        };

        let possible_targets = parse_hint(&fields[3..]);
        actions.push(Action::new(
            time,
            hand,
            kind,
            target,
            task,
            hand == tracked_hand,
            possible_targets,
        ));
    }
    actions.sort_by(|a, b| a.time.partial_cmp(&b.time).unwrap_or(std::cmp::Ordering::Equal));
    Ok(actions)
}

/// Parse the trailing hint fields back into the comma-joined token list
/// the action source uses, skipping malformed entries.
fn parse_hint(fields: &[&str]) -> Option<Vec<GoalId>> {
    if fields.is_empty() {
        return None;
    }
    let ids: Vec<GoalId> = parse_action_list(&fields.join(","))
        .into_iter()
        .map(|(_, id)| id)
        .collect();
    if ids.is_empty() {
        None
    } else {
        Some(ids)
    }
}

/// Iterate non-empty data lines, skipping an initial header row.
fn data_lines(raw: &str) -> impl Iterator<Item = (usize, &str)> {
    raw.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .filter(|&(line_no, line)| {
            // A header has a non-numeric first field.
            let first = line.split(',').next().unwrap_or_default().trim();
            !(line_no == 1 && first.parse::<f64>().is_err())
        })
}

fn split_fields<'a>(
    line: &'a str,
    line_no: usize,
    expected: usize,
) -> Result<Vec<&'a str>, LoadError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != expected {
        return Err(malformed(line_no, line));
    }
    Ok(fields)
}

fn parse_position(fields: &[&str], line_no: usize, line: &str) -> Result<Vec3, LoadError> {
    let mut coords = [0.0_f64; 3];
    for (slot, field) in coords.iter_mut().zip(fields) {
        *slot = field.parse().map_err(|_| malformed(line_no, line))?;
    }
    Ok(Vec3::new(coords[0], coords[1], coords[2]))
}

fn malformed(line: usize, content: &str) -> LoadError {
    LoadError::MalformedRow {
        line,
        content: content.to_string(),
    }
}
