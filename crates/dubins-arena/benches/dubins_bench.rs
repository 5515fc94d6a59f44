//! Criterion microbenches for the Dubins shortest-path solver and
//! discretization: the two hottest inner loops during roadmap construction.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use dubins_arena::dubins::{discretize_curve, shortest_path};
use dubins_arena::Pose2D;
use rand::{rngs::StdRng, Rng, SeedableRng};

const KMAX: f64 = 10.0;

fn random_pose(rng: &mut StdRng, radius: f64) -> Pose2D {
    Pose2D::new(
        rng.gen_range(-radius..radius),
        rng.gen_range(-radius..radius),
        rng.gen_range(0.0..std::f64::consts::TAU),
    )
}

fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("dubins_shortest_path");
    group.bench_function(BenchmarkId::new("shortest_path", "random_pair"), |b| {
        b.iter_batched(
            || {
                let mut rng = StdRng::seed_from_u64(1);
                (random_pose(&mut rng, 2.0), random_pose(&mut rng, 2.0))
            },
            |(start, end)| {
                let _ = shortest_path(start, end, KMAX, &[]);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_discretize(c: &mut Criterion) {
    let mut group = c.benchmark_group("dubins_discretize");
    group.bench_function(BenchmarkId::new("discretize_curve", "step_0.05"), |b| {
        b.iter_batched(
            || {
                let mut rng = StdRng::seed_from_u64(2);
                loop {
                    let start = random_pose(&mut rng, 2.0);
                    let end = random_pose(&mut rng, 2.0);
                    if let Some((_, curve)) = shortest_path(start, end, KMAX, &[]) {
                        break curve;
                    }
                }
            },
            |curve| {
                let _ = discretize_curve(&curve, 0.05, 0.0);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_shortest_path, bench_discretize);
criterion_main!(benches);
