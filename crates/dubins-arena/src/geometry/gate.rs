//! Gate pose synthesis: turns a gate polygon (a slot in the arena border)
//! into an oriented `Pose2D` a robot can be planned to/from.
//!
//! original_source declares `getGatePose` in include/rm/geometry.hpp but
//! never defines it anywhere in the tree, so this is a from-scratch
//! implementation of the prescribed algorithm: take the gate polygon's
//! centroid as the gate position, and pick the outward normal of whichever
//! border edge the gate centroid is closest to — equivalent to testing which
//! quadrant the centroid falls in against the border's two diagonals, for a
//! border given as four corners ordered SW, SE, NE, NW.

use super::types::{norm_angle, Point, Polygon, Pose2D};

/// Derive an oriented pose for `gate` against the 4-corner `border`
/// (vertices ordered SW, SE, NE, NW). The position is the gate's centroid;
/// the heading is the outward normal of the border edge the gate centroid is
/// closest to, i.e. the edge whose outward normal has the largest dot
/// product with the vector from the border's centroid to the gate's
/// centroid.
pub fn gate_pose(gate: &Polygon, border: &Polygon) -> Pose2D {
    debug_assert_eq!(border.vertices.len(), 4, "border must be a 4-corner quadrilateral");
    let gate_center = gate.centroid();
    let border_center = border.centroid();
    let to_gate = gate_center - border_center;

    let sw = border.vertices[0];
    let se = border.vertices[1];
    let ne = border.vertices[2];
    let nw = border.vertices[3];
    let edges = [(sw, se), (se, ne), (ne, nw), (nw, sw)];

    let mut best_normal = Point::new(1.0, 0.0);
    let mut best_score = f64::NEG_INFINITY;
    for (a, b) in edges {
        let along = b - a;
        let mut normal = Point::new(along.y, -along.x);
        if normal.norm() > 1e-12 {
            normal /= normal.norm();
        }
        // Border vertices wind counter-clockwise (SW,SE,NE,NW per spec.md
        // §3), so rotating each edge direction -90 degrees, (dy,-dx), already
        // points outward; flip defensively if it doesn't, for robustness
        // against a border supplied the other way round.
        let mid = (a + b) / 2.0;
        if normal.dot(&(mid - border_center)) < 0.0 {
            normal = -normal;
        }
        let score = normal.dot(&to_gate);
        if score > best_score {
            best_score = score;
            best_normal = normal;
        }
    }

    let theta = best_normal.y.atan2(best_normal.x);
    Pose2D::new(gate_center.x, gate_center.y, norm_angle(theta))
}
