//! Criterion microbench for `NavMap::compute_forward`/`compute_reverse`
//! over a small pre-built roadmap.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use dubins_arena::navmap::NavMap;
use dubins_arena::roadmap::RoadMap;
use dubins_arena::visibility::{build_visibility, collision_barriers, free_space_barriers, make_visibility_vertices};
use dubins_arena::{Point, PlannerConfig, Polygon, Pose2D};

fn square(half: f64) -> Polygon {
    Polygon::new(vec![
        Point::new(-half, -half),
        Point::new(half, -half),
        Point::new(half, half),
        Point::new(-half, half),
    ])
}

fn built_roadmap(cfg: &PlannerConfig) -> RoadMap {
    let border = square(5.0);
    let obstacles = vec![square(1.0)];
    let vis_barriers = free_space_barriers(&border, &obstacles, cfg);
    let col_barriers = collision_barriers(&border, &obstacles, cfg);
    let vertices = make_visibility_vertices(&border, &obstacles, cfg);
    let edges = build_visibility(&vertices, &vis_barriers);

    let mut roadmap = RoadMap::new();
    let node_ids: Vec<_> = vertices.iter().map(|&v| roadmap.add_node(v)).collect();
    let visibility_edges: Vec<_> = edges.iter().map(|&(i, j)| (node_ids[i], node_ids[j])).collect();
    roadmap.build(cfg, &col_barriers, &visibility_edges);

    let start = Pose2D::new(-4.5, -4.5, 0.0);
    roadmap
        .add_start_pose(start, cfg, &col_barriers)
        .expect("synthetic arena should admit a start connection");
    roadmap
}

fn bench_compute_forward(c: &mut Criterion) {
    let cfg = PlannerConfig::default();
    let roadmap = built_roadmap(&cfg);
    let source = roadmap.nodes().next().unwrap().0;
    let source_ref = (source, dubins_arena::roadmap::PoseIndex(0));

    let mut group = c.benchmark_group("navmap_compute");
    group.bench_function(BenchmarkId::new("compute_forward", "5x5_one_obstacle"), |b| {
        b.iter_batched(
            || NavMap::new(&roadmap),
            |mut navmap| navmap.compute_forward(source_ref),
            BatchSize::SmallInput,
        )
    });
    group.bench_function(BenchmarkId::new("compute_reverse", "5x5_one_obstacle"), |b| {
        b.iter_batched(
            || NavMap::new(&roadmap),
            |mut navmap| navmap.compute_reverse(source_ref),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_compute_forward);
criterion_main!(benches);
