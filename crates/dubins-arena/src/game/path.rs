//! Discretization and length-alignment of the two robots' committed paths.
//!
//! References
//! - original_source: include/nav/path.hpp / src/nav/path.cpp
//!   (`navList`, `discretizePath`, `truncatePaths`)

use crate::dubins;
use crate::geometry::Pose2D;
use crate::roadmap::{EdgeKind, PoseRef, RoadMap};

/// One step of a committed robot path: either a roadmap edge, or a
/// synthesized pause in place.
///
/// original_source represents a wait as a `DubinsConnection` whose `to`
/// equals `from`; that requires mutating the roadmap mid-game. Since a built
/// `RoadMap` here is borrowed immutably for the whole game (see §5
/// Concurrency & Resource Model), a wait is instead a variant of the game
/// module's own path-step type rather than a roadmap edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathStep {
    Edge(crate::roadmap::EdgeHandle),
    Wait { at: PoseRef, length: f64 },
}

/// A full committed path, in travel order.
pub type NavList = Vec<PathStep>;

/// One sampled point of a discretized path, in curve-local coordinates
/// (`s` measured from the path's own start).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlobalSample {
    pub s: f64,
    pub pose: Pose2D,
    pub k: f64,
}

/// Discretize `path` at `step` spacing, chaining both arclength and the
/// sampling-grid offset across edges so `s` is monotonic and evenly spaced
/// over the whole path, not just within a single edge.
///
/// A `navList` mixes Dubins edges and waits freely; the same offset carry
/// that keeps sampling uniform across a curve's own arc boundaries
/// (`dubins::discretize_curve`) is threaded here across edge boundaries too,
/// treating a wait as a zero-curvature arc for the purposes of the grid.
pub fn discretize_path(path: &NavList, roadmap: &RoadMap, step: f64) -> Vec<GlobalSample> {
    let mut out = Vec::new();
    let mut base_s = 0.0;
    let mut offset = 0.0;

    for step_item in path {
        match step_item {
            PathStep::Edge(handle) => {
                let edge = roadmap.edge(*handle);
                match &edge.kind {
                    EdgeKind::Dubins(curve) => {
                        let (samples, new_offset) = dubins::discretize_curve(curve, step, offset);
                        out.extend(samples.into_iter().map(|s| GlobalSample {
                            s: s.s + base_s,
                            pose: s.pose,
                            k: s.k,
                        }));
                        base_s += curve.l;
                        offset = new_offset;
                    }
                    EdgeKind::Wait { length } => {
                        let pose = roadmap.pose(edge.from).pose;
                        offset = append_wait(&mut out, &mut base_s, pose, *length, step, offset);
                    }
                }
            }
            PathStep::Wait { at, length } => {
                let pose = roadmap.pose(*at).pose;
                offset = append_wait(&mut out, &mut base_s, pose, *length, step, offset);
            }
        }
    }

    // The step grid rarely lands exactly on the path's own endpoint; append
    // it once here so the reported path still ends at the true destination,
    // rather than re-sampling each edge's endpoint internally and breaking
    // the uniform spacing across edge boundaries.
    if let Some(last) = path.last() {
        let final_pose = match last {
            PathStep::Edge(handle) => {
                let edge = roadmap.edge(*handle);
                match &edge.kind {
                    EdgeKind::Dubins(curve) => curve.end(),
                    EdgeKind::Wait { .. } => roadmap.pose(edge.to).pose,
                }
            }
            PathStep::Wait { at, .. } => roadmap.pose(*at).pose,
        };
        out.push(GlobalSample { s: base_s, pose: final_pose, k: 0.0 });
    }

    out
}

/// Mirrors `dubins::discretize_arc`'s offset-carry math for a stationary
/// wait: the pose doesn't move, but the sampling grid still advances by
/// `length`, so whatever follows picks up sampling exactly `step` after the
/// last sample emitted here.
fn append_wait(out: &mut Vec<GlobalSample>, base_s: &mut f64, pose: Pose2D, length: f64, step: f64, offset: f64) -> f64 {
    let mut samples = Vec::new();
    let mut s = step - offset;
    while s < length {
        samples.push(s);
        s += step;
    }
    let n_points = samples.len() as f64;
    out.extend(samples.into_iter().map(|s| GlobalSample {
        s: *base_s + s,
        pose,
        k: 0.0,
    }));
    *base_s += length;
    step * n_points + offset - length
}

/// Pad whichever of `a`/`b` is shorter by repeating its last sample (held in
/// place, `s` frozen) until both have the same number of samples, then scan
/// index-by-index for the first pair of samples whose Euclidean distance is
/// below `robot_size` (an interception) and truncate both paths there.
///
/// If no such pair exists, both (padded) paths are left intact: the two
/// robots never come within collision range of each other.
pub fn truncate_paths(a: &mut Vec<GlobalSample>, b: &mut Vec<GlobalSample>, robot_size: f64) {
    while a.len() < b.len() {
        let last = *a.last().expect("path must have at least its own start sample");
        a.push(last);
    }
    while b.len() < a.len() {
        let last = *b.last().expect("path must have at least its own start sample");
        b.push(last);
    }

    let collision_index = a.iter().zip(b.iter()).position(|(sa, sb)| {
        let dx = sa.pose.x - sb.pose.x;
        let dy = sa.pose.y - sb.pose.y;
        (dx * dx + dy * dy).sqrt() < robot_size
    });

    if let Some(i) = collision_index {
        a.truncate(i + 1);
        b.truncate(i + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn truncate_pads_to_equal_length() {
        let mut a = vec![
            GlobalSample { s: 0.0, pose: Pose2D::new(0.0, 0.0, 0.0), k: 0.0 },
            GlobalSample { s: 1.0, pose: Pose2D::new(1.0, 0.0, 0.0), k: 0.0 },
        ];
        let mut b = vec![GlobalSample { s: 0.0, pose: Pose2D::new(0.0, 0.0, 0.0), k: 0.0 }];
        truncate_paths(&mut a, &mut b, 0.14);
        assert_eq!(a.len(), b.len());
        assert_eq!(b.last(), b.first());
    }

    #[test]
    fn truncate_cuts_both_paths_at_first_interception() {
        let mut a = vec![
            sample_at(0.0, 0.0),
            sample_at(1.0, 1.0),
            sample_at(2.0, 2.0),
            sample_at(3.0, 3.0),
        ];
        let mut b = vec![
            sample_at(0.0, 5.0),
            sample_at(1.0, 3.0),
            sample_at(2.0, 2.05),
            sample_at(3.0, 1.0),
        ];
        truncate_paths(&mut a, &mut b, 0.14);
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 3);
        assert_eq!(a.last().unwrap().s, 2.0);
        assert_eq!(b.last().unwrap().s, 2.0);
    }

    fn sample_at(s: f64, x: f64) -> GlobalSample {
        GlobalSample { s, pose: Pose2D::new(x, 0.0, 0.0), k: 0.0 }
    }

    proptest! {
        /// Invariant 8 (truncation locality): after truncation both paths
        /// end at the same index, and the shorter one's padded tail repeats
        /// its own final sample rather than drifting toward the other's.
        #[test]
        fn truncate_paths_pads_with_repeated_final_sample(
            len_a in 1usize..8, len_b in 1usize..8,
        ) {
            let mut a: Vec<GlobalSample> = (0..len_a).map(|i| sample_at(i as f64, i as f64)).collect();
            let mut b: Vec<GlobalSample> = (0..len_b).map(|i| sample_at(i as f64, 100.0 + i as f64)).collect();
            let a_last = *a.last().unwrap();
            let b_last = *b.last().unwrap();

            truncate_paths(&mut a, &mut b, 0.14);

            prop_assert_eq!(a.len(), b.len());
            prop_assert_eq!(*a.last().unwrap(), a_last);
            prop_assert_eq!(*b.last().unwrap(), b_last);
        }
    }
}
