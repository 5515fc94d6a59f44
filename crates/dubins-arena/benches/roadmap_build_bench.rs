//! Criterion microbench for `RoadMap::build`: materializing headings and
//! trying Dubins connections across a small synthetic arena's visibility
//! graph.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use dubins_arena::roadmap::RoadMap;
use dubins_arena::visibility::{build_visibility, collision_barriers, free_space_barriers, make_visibility_vertices};
use dubins_arena::{Point, Polygon, PlannerConfig};

fn square(half: f64) -> Polygon {
    Polygon::new(vec![
        Point::new(-half, -half),
        Point::new(half, -half),
        Point::new(half, half),
        Point::new(-half, half),
    ])
}

fn bench_build(c: &mut Criterion) {
    let cfg = PlannerConfig::default();
    let border = square(5.0);
    let obstacles = vec![square(1.0)];

    let mut group = c.benchmark_group("roadmap_build");
    group.bench_function(BenchmarkId::new("build", "5x5_one_obstacle"), |b| {
        b.iter_batched(
            || {
                let vis_barriers = free_space_barriers(&border, &obstacles, &cfg);
                let col_barriers = collision_barriers(&border, &obstacles, &cfg);
                let vertices = make_visibility_vertices(&border, &obstacles, &cfg);
                let edges = build_visibility(&vertices, &vis_barriers);
                let mut roadmap = RoadMap::new();
                let node_ids: Vec<_> = vertices.iter().map(|&v| roadmap.add_node(v)).collect();
                let visibility_edges: Vec<_> = edges
                    .iter()
                    .map(|&(i, j)| (node_ids[i], node_ids[j]))
                    .collect();
                (roadmap, col_barriers, visibility_edges)
            },
            |(mut roadmap, col_barriers, visibility_edges)| {
                roadmap.build(&cfg, &col_barriers, &visibility_edges);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
