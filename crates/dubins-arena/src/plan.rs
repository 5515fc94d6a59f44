//! The library's single entry point: build a roadmap from an arena
//! description, attach both robots and every gate, and play one round of the
//! pursuer-evader game.
//!
//! References
//! - original_source: student_planning_interface.hpp's top-level
//!   `planPath`/`runGame` glue, reassembled here as a single `Result`-
//!   returning call per §7 ("replace exceptions with a result-or-error
//!   return on every fallible entry point").

use rand::Rng;

use crate::config::PlannerConfig;
use crate::error::PlanError;
use crate::game::{self, GlobalSample};
use crate::geometry::{Polygon, Pose2D};
use crate::navmap::NavMap;
use crate::roadmap::{NodeId, PoseRef, RoadMap};
use crate::visibility;

/// Build the roadmap, attach both robots' start poses and every gate, play
/// one round of the game, and return each robot's discretized, length-
/// aligned path.
///
/// `starts[0]` is the evader, `starts[1]` the pursuer, matching spec.md §6.
pub fn plan(
    border: &Polygon,
    obstacles: &[Polygon],
    gates: &[Polygon],
    starts: [Pose2D; 2],
    cfg: &PlannerConfig,
    rng: &mut impl Rng,
) -> Result<[Vec<GlobalSample>; 2], PlanError> {
    let vis_barriers = visibility::free_space_barriers(border, obstacles, cfg);
    let collision_barriers = visibility::collision_barriers(border, obstacles, cfg);
    let vertices = visibility::make_visibility_vertices(border, obstacles, cfg);
    let visibility_edges = visibility::build_visibility(&vertices, &vis_barriers);

    let mut roadmap = RoadMap::new();
    let node_ids: Vec<NodeId> = vertices.iter().map(|&v| roadmap.add_node(v)).collect();
    let node_edges: Vec<(NodeId, NodeId)> = visibility_edges
        .iter()
        .map(|&(i, j)| (node_ids[i], node_ids[j]))
        .collect();
    roadmap.build(cfg, &collision_barriers, &node_edges);

    let evader_start = roadmap.add_start_pose(starts[0], cfg, &collision_barriers)?;
    let pursuer_start = roadmap.add_start_pose(starts[1], cfg, &collision_barriers)?;

    let gate_poses: Vec<PoseRef> = gates
        .iter()
        .enumerate()
        .map(|(i, gate)| {
            let pose = crate::geometry::gate_pose(gate, border);
            roadmap
                .add_goal_pose(pose, cfg, &collision_barriers)
                .map_err(|_| PlanError::UnreachableGate { gate_index: i })
        })
        .collect::<Result<_, _>>()?;

    let evader_navmaps: Vec<NavMap> = gate_poses
        .iter()
        .map(|&gate| {
            let mut nm = NavMap::new(&roadmap);
            nm.compute_reverse(gate);
            nm
        })
        .collect();
    let mut pursuer_navmap = NavMap::new(&roadmap);

    let (_outcome, evader_path, pursuer_path) = game::run_game(
        &roadmap,
        evader_start,
        pursuer_start,
        &gate_poses,
        &evader_navmaps,
        &mut pursuer_navmap,
        rng,
    )?;

    let mut evader_samples = game::discretize_path(&evader_path, &roadmap, cfg.discretization_step);
    let mut pursuer_samples = game::discretize_path(&pursuer_path, &roadmap, cfg.discretization_step);
    if evader_samples.is_empty() {
        evader_samples.push(GlobalSample {
            s: 0.0,
            pose: roadmap.pose(evader_start).pose,
            k: 0.0,
        });
    }
    if pursuer_samples.is_empty() {
        // PursuerStuck: the pursuer never moves, so it holds its start pose
        // for the whole round.
        pursuer_samples.push(GlobalSample {
            s: 0.0,
            pose: roadmap.pose(pursuer_start).pose,
            k: 0.0,
        });
    }
    game::truncate_paths(&mut evader_samples, &mut pursuer_samples, cfg.robot_size);

    Ok([evader_samples, pursuer_samples])
}
