//! Predictor throughput over a growing goal set.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use reach_core::{GoalArena, PredictorConfig, Vec3};
use reach_engine::TrajectoryPredictor;

fn bench_predictor_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("predictor_update");

    for goal_count in [4u32, 16, 64] {
        group.bench_with_input(
            BenchmarkId::from_parameter(goal_count),
            &goal_count,
            |b, &goal_count| {
                let rows: Vec<(u32, Vec3)> = (0..goal_count)
                    .map(|i| (i, Vec3::new(i as f64 * 0.1, 0.5, 0.0)))
                    .collect();

                b.iter(|| {
                    let mut goals = GoalArena::from_table(&rows).unwrap();
                    let mut predictor =
                        TrajectoryPredictor::new(&PredictorConfig::default());
                    for step in 0..50 {
                        let x = step as f64 * 0.06;
                        predictor.update(black_box(Vec3::new(x, 0.0, 0.0)), &mut goals);
                    }
                    black_box(goals.active_count())
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_predictor_update);
criterion_main!(benches);
