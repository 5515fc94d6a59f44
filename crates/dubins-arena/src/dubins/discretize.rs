//! Fixed-step discretization of arcs and curves into pose samples, used for
//! collision checking and for driving the robot simulation.
//!
//! References
//! - original_source: include/dubins/dubins.hpp / src/dubins/dubins.cpp
//!   (`discretizeArc`, `discretizeCurve`) — the offset-carry trick that keeps
//!   sample spacing uniform across an arc boundary is ported verbatim in
//!   spirit: `offset = step * n_points + offset - arc.s`.

use super::solver::propagate;
use super::types::{DubinsArc, DubinsCurve};
use crate::geometry::Pose2D;

/// One sampled point along a curve: arclength from the curve start, the pose
/// there, and the curvature in force at that point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathSample {
    pub s: f64,
    pub pose: Pose2D,
    pub k: f64,
}

/// Sample `arc` at `step` spacing, starting `offset` into the arc (so a
/// caller can chain several arcs with uniform global spacing). Returns the
/// samples (with `s` measured from `arc.start`, not from the curve start)
/// and the leftover offset to carry into the next arc.
pub fn discretize_arc(arc: &DubinsArc, step: f64, offset: f64) -> (Vec<PathSample>, f64) {
    let mut samples = Vec::new();
    let mut s = step - offset;
    while s < arc.s {
        samples.push(PathSample {
            s,
            pose: propagate(arc.start, arc.k, s),
            k: arc.k,
        });
        s += step;
    }
    let n_points = samples.len() as f64;
    let new_offset = step * n_points + offset - arc.s;
    (samples, new_offset)
}

/// Sample the full curve at `step` spacing, starting `offset` into the first
/// arc, with global arclength (`s`) measured from the curve's start pose.
///
/// Returns the samples and the leftover offset to carry into whatever comes
/// next in a navList — another curve, a wait, or the end of the path (see
/// `crate::game::discretize_path`, which owns appending the path's true
/// terminal pose once, rather than this function re-sampling the curve's own
/// endpoint on every call and breaking the uniform spacing across edges).
pub fn discretize_curve(curve: &DubinsCurve, step: f64, offset: f64) -> (Vec<PathSample>, f64) {
    let mut out = Vec::new();
    let mut offset = offset;
    let mut base_s = 0.0;
    for arc in curve.arcs() {
        let (samples, new_offset) = discretize_arc(&arc, step, offset);
        out.extend(samples.into_iter().map(|mut p| {
            p.s += base_s;
            p
        }));
        base_s += arc.s;
        offset = new_offset;
    }
    (out, offset)
}
