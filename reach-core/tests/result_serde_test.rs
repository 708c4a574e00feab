//! The result record is the contract with external consumers; make sure
//! every promised field survives JSON serialization.

use rustc_hash::FxHashMap;
use smallvec::smallvec;

use reach_core::{GoalId, GoalReport, RankedGoal, SampleResult, Vec3};

#[test]
fn sample_result_serializes_with_all_contract_fields() {
    let mut goals = FxHashMap::default();
    goals.insert(
        GoalId(3),
        GoalReport {
            position: Vec3::new(1.0, 0.0, 0.0),
            probability: 72.5,
            distance: 0.4,
            sample_count: 5,
        },
    );

    let result = SampleResult {
        time: 42.0,
        hand_position: Vec3::new(0.6, 0.0, 0.0),
        smoothed_position: Vec3::new(0.6, 0.0, 0.0),
        goals,
        uncategorized: 27.5,
        top: smallvec![
            RankedGoal {
                id: Some(GoalId(3)),
                probability: 72.5,
                distance: 0.4,
            },
            RankedGoal {
                id: None,
                probability: 27.5,
                distance: 0.0,
            },
        ],
        decision: Some(RankedGoal {
            id: Some(GoalId(3)),
            probability: 72.5,
            distance: 0.4,
        }),
        actions: Vec::new(),
        lookahead: None,
    };

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["time"], 42.0);
    assert_eq!(json["uncategorized"], 27.5);
    assert_eq!(json["goals"]["3"]["sample_count"], 5);
    assert_eq!(json["top"][1]["id"], serde_json::Value::Null);
    assert_eq!(json["decision"]["probability"], 72.5);
    assert!(json["actions"].as_array().unwrap().is_empty());
}

#[test]
fn probability_pairs_are_sorted_by_id() {
    let mut goals = FxHashMap::default();
    for (id, p) in [(9u32, 10.0), (1, 55.0), (4, 35.0)] {
        goals.insert(
            GoalId(id),
            GoalReport {
                position: Vec3::zeros(),
                probability: p,
                distance: 1.0,
                sample_count: 1,
            },
        );
    }
    let result = SampleResult {
        time: 0.0,
        hand_position: Vec3::zeros(),
        smoothed_position: Vec3::zeros(),
        goals,
        uncategorized: 0.0,
        top: smallvec::SmallVec::new(),
        decision: None,
        actions: Vec::new(),
        lookahead: None,
    };

    let pairs = result.probability_pairs();
    assert_eq!(
        pairs,
        vec![
            (GoalId(1), 55.0),
            (GoalId(4), 35.0),
            (GoalId(9), 10.0),
        ]
    );
}
