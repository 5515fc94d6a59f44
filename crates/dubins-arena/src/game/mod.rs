//! The pursuer-evader game loop: the evader commits to a path toward a
//! randomly chosen gate, the pursuer intercepts or gives chase, and the
//! engine reports which one reaches its target first.
//!
//! References
//! - original_source: include/nav/pursuerEvader.hpp, src/nav/pursuerevader.cpp
//!   (two-function `moveEvader`/`movePursuer`/`runGame` variant) and
//!   src/nav/pursuerEvader.cpp (merged single-function variant,
//!   `create_wait_connection`). The two revisions disagree on loop structure
//!   and the merged one never terminates on evader escape (its outer
//!   `while(true)` has no exit once `evader_s` hits infinity); both are
//!   superseded here by spec.md's explicit three-terminal-state protocol.

mod path;

pub use path::{discretize_path, truncate_paths, GlobalSample, NavList, PathStep};

use rand::Rng;

use crate::error::{GameOutcome, PlanError};
use crate::navmap::NavMap;
use crate::roadmap::{EdgeHandle, NodeId, PoseRef, RoadMap};

/// The node pair touched by one step, used for the catch predicate.
#[derive(Clone, Copy)]
struct StepNodes {
    from: NodeId,
    to: NodeId,
}

fn caught(evader: StepNodes, pursuer: StepNodes) -> bool {
    evader.to == pursuer.to || (evader.to == pursuer.from && evader.from == pursuer.to)
}

/// Try every gate in a random order until the evader's reverse `NavMap` for
/// that gate admits a plan from `evader_pose`, returning the chosen gate
/// index and its edge list. `gates` and `evader_navmaps` are parallel.
fn pick_reachable_gate<R: Rng>(
    evader_pose: PoseRef,
    gates: &[PoseRef],
    evader_navmaps: &[NavMap],
    rng: &mut R,
) -> Result<(usize, Vec<EdgeHandle>), PlanError> {
    let mut order: Vec<usize> = (0..gates.len()).collect();
    // Fisher-Yates: every permutation of candidate gates is equally likely,
    // matching the "uniformly random gate index" contract even when the
    // first draw turns out to be momentarily unreachable.
    for i in (1..order.len()).rev() {
        let j = rng.gen_range(0..=i);
        order.swap(i, j);
    }
    for g in order {
        if let Ok(path) = evader_navmaps[g].plan_from(evader_pose) {
            return Ok((g, path));
        }
    }
    Err(PlanError::InfeasibleGoal)
}

/// Play one round to completion: the evader repeatedly commits to the next
/// edge of a (re-drawn) random gate's path, and the pursuer re-plans from its
/// current pose to intercept or, failing that, gives chase. Terminal on
/// catch, the evader reaching a gate, or the pursuer having no remaining
/// move on its very first turn.
///
/// `evader_navmaps[g]` must already be reverse-computed from `gates[g]`;
/// `pursuer_navmap` is recomputed forward from the pursuer's current pose as
/// needed. Randomness (the per-iteration gate draw) is injectable via `rng`,
/// mirroring the teacher's `geom2::rand::draw_polygon_radial<R: Rng>`.
pub fn run_game<R: Rng>(
    roadmap: &RoadMap,
    evader_start: PoseRef,
    pursuer_start: PoseRef,
    gates: &[PoseRef],
    evader_navmaps: &[NavMap],
    pursuer_navmap: &mut NavMap,
    rng: &mut R,
) -> Result<(GameOutcome, NavList, NavList), PlanError> {
    if gates.is_empty() {
        return Err(PlanError::InfeasibleGoal);
    }

    let mut nav_list_e: NavList = NavList::new();
    let mut nav_list_p: NavList = NavList::new();

    let mut evader_pose = evader_start;
    let mut pursuer_pose = pursuer_start;
    let mut s_e = 0.0_f64;
    let mut s_p = 0.0_f64;
    let mut evader_last: Option<StepNodes> = None;
    let mut pursuer_last: Option<StepNodes> = None;
    let mut pursuer_has_moved = false;
    let mut evader_escaped = false;
    let mut current_gate = 0usize;

    loop {
        // Evader's turn: advance one edge at a time until it has drawn even
        // with (or past) the pursuer, or it reaches its gate outright.
        while s_e <= s_p {
            let (g, edge_path) = pick_reachable_gate(evader_pose, gates, evader_navmaps, rng)?;
            current_gate = g;
            let edge_handle = *edge_path.first().ok_or(PlanError::InfeasibleGoal)?;
            let edge = roadmap.edge(edge_handle);
            nav_list_e.push(PathStep::Edge(edge_handle));
            s_e += edge.kind.length();
            let step = StepNodes { from: edge.from.0, to: edge.to.0 };
            evader_pose = edge.to;
            evader_last = Some(step);

            if let Some(p) = pursuer_last {
                if caught(step, p) {
                    return Ok((GameOutcome::Caught, nav_list_e, nav_list_p));
                }
            }

            if edge_path.len() == 1 {
                s_e = f64::INFINITY;
                evader_escaped = true;
                break;
            }
        }

        // Pursuer's turn: look ahead at the evader's remaining path under its
        // current gate. If only the final edge is left (or the evader has
        // already arrived), the pursuer heads straight for the same gate
        // using the evader's own reverse NavMap queried from the pursuer's
        // pose — no forward recompute needed. Otherwise the pursuer's forward
        // NavMap is recomputed from its current pose and asked to intercept
        // the evader's remaining path.
        while s_p < s_e {
            let remaining = evader_navmaps[current_gate].plan_from(evader_pose);
            let plan_result = match remaining {
                Ok(ref path) if path.len() > 1 => {
                    pursuer_navmap.compute_forward(pursuer_pose);
                    let first_len = roadmap.edge(path[0]).kind.length();
                    let offset = first_len - s_e + s_p;
                    pursuer_navmap.intercept(path, offset)
                }
                Ok(_) => evader_navmaps[current_gate].plan_from(pursuer_pose),
                Err(e) => Err(e),
            };

            let chase_path = match plan_result {
                Ok(path) => path,
                Err(_) if pursuer_has_moved => {
                    s_p = f64::INFINITY;
                    break;
                }
                Err(_) => return Ok((GameOutcome::PursuerStuck, nav_list_e, nav_list_p)),
            };

            if chase_path.is_empty() {
                let wait_len = s_e - s_p;
                nav_list_p.push(PathStep::Wait { at: pursuer_pose, length: wait_len });
                s_p = s_e;
                break;
            }

            for edge_handle in chase_path {
                let edge = roadmap.edge(edge_handle);
                nav_list_p.push(PathStep::Edge(edge_handle));
                s_p += edge.kind.length();
                let step = StepNodes { from: edge.from.0, to: edge.to.0 };
                pursuer_pose = edge.to;
                pursuer_last = Some(step);
                pursuer_has_moved = true;

                if let Some(e) = evader_last {
                    if caught(e, step) {
                        return Ok((GameOutcome::Caught, nav_list_e, nav_list_p));
                    }
                }
                if s_p >= s_e {
                    break;
                }
            }

            if s_p < s_e {
                let wait_len = s_e - s_p;
                nav_list_p.push(PathStep::Wait { at: pursuer_pose, length: wait_len });
                s_p = s_e;
            }
        }

        // `s_p == INFINITY` without `evader_escaped` means the pursuer's plan
        // failed after it had already moved at least once: per spec.md's
        // resolution this does not end the game outright, it just leaves the
        // pursuer permanently behind. The next evader turn's `s_e <= s_p`
        // guard is vacuously true, so the evader keeps moving unopposed until
        // it reaches its own gate and `evader_escaped` trips this return.
        if evader_escaped {
            return Ok((GameOutcome::Escaped, nav_list_e, nav_list_p));
        }
    }
}
