//! Producer/consumer runs over small in-memory tables.

use reach_core::{
    Action, ActionKind, GoalId, Hand, ReachConfig, Sample, TaskDirection, Vec3,
};
use reach_runtime::{run, Termination};

fn config() -> ReachConfig {
    let raw = r#"
        [predictor]
        min_distance = 0.05

        [probability]
        distance_weight = 0.0

        [runtime]
        queue_capacity = 8
        time_step = 1.0
        pacing = 0.0
    "#;
    ReachConfig::from_toml_str(raw).unwrap()
}

fn goal_table() -> Vec<(u32, Vec3)> {
    vec![
        (1, Vec3::new(0.0, 0.0, 0.0)),
        (2, Vec3::new(1.0, 0.0, 0.0)),
    ]
}

fn straight_line(n: usize) -> Vec<Sample> {
    (0..n)
        .map(|i| Sample::new(i as f64 + 1.0, Vec3::new(0.1 * i as f64, 0.0, 0.0)))
        .collect()
}

#[test]
fn run_drains_source_and_scores_goal_on_the_line() {
    let outcome = run(&config(), &goal_table(), straight_line(8), Vec::new()).unwrap();

    assert_eq!(outcome.termination, Termination::SourceDrained);
    assert!(!outcome.results.is_empty());

    let last = outcome.results.last().unwrap();
    let ahead = &last.goals[&GoalId(2)];
    let behind = &last.goals[&GoalId(1)];
    assert!(ahead.probability > behind.probability);
    assert_eq!(last.top[0].id, Some(GoalId(2)));
}

#[test]
fn consuming_the_final_goal_terminates_early() {
    let actions = vec![
        Action::new(
            2.0,
            Hand::Right,
            ActionKind::Pick,
            GoalId(1),
            TaskDirection::Assembly,
            true,
            None,
        ),
        Action::new(
            4.0,
            Hand::Right,
            ActionKind::Pick,
            GoalId(2),
            TaskDirection::Assembly,
            true,
            None,
        ),
    ];
    let outcome = run(&config(), &goal_table(), straight_line(12), actions).unwrap();
    assert_eq!(outcome.termination, Termination::GoalsExhausted);
}

#[test]
fn historical_actions_arrive_with_their_tick() {
    let actions = vec![Action::new(
        3.0,
        Hand::Left,
        ActionKind::Pick,
        GoalId(1),
        TaskDirection::Assembly,
        false,
        None,
    )];
    let outcome = run(&config(), &goal_table(), straight_line(8), actions).unwrap();

    // The pick consumed goal 1, so later results only score goal 2.
    let last = outcome.results.last().unwrap();
    assert!(!last.goals.contains_key(&GoalId(1)));
    assert!(last.goals.contains_key(&GoalId(2)));

    // Some result recorded the applied action.
    assert!(outcome
        .results
        .iter()
        .any(|r| r.actions.iter().any(|a| a.target == GoalId(1))));
}

#[test]
fn empty_goal_table_fails_fast() {
    assert!(run(&config(), &[], straight_line(4), Vec::new()).is_err());
}
