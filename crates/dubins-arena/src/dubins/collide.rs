//! Arc/curve vs. polygon collision tests, built on top of the geometry
//! kernel's segment and circular-arc primitives.
//!
//! References
//! - original_source: include/rm/geometry.hpp (`collisionCheck` overloads for
//!   `DubinsArc`/`DubinsCurve`, declared but left as stubs in this revision)

use super::types::{DubinsArc, DubinsCurve};
use crate::geometry::{self, BoundingBox, Point, Polygon, Segment};

fn arc_center_and_sweep(arc: &DubinsArc) -> (Point, f64, f64, f64) {
    let rho = 1.0 / arc.k;
    let center = arc.start.position() + rho * Point::new(-arc.start.theta.sin(), arc.start.theta.cos());
    let theta0 = (arc.start.y - center.y).atan2(arc.start.x - center.x);
    let theta1 = (arc.end.y - center.y).atan2(arc.end.x - center.x);
    (center, rho, theta0, theta1)
}

fn arc_bounding_box(arc: &DubinsArc) -> BoundingBox {
    if arc.is_straight() {
        return BoundingBox::from_points(&[arc.start.position(), arc.end.position()]);
    }
    let (center, rho, _, _) = arc_center_and_sweep(arc);
    let r = rho.abs();
    // Conservative: bound by the full circle, not just the swept wedge.
    BoundingBox {
        xmin: center.x - r,
        xmax: center.x + r,
        ymin: center.y - r,
        ymax: center.y + r,
    }
}

/// True iff `arc` crosses any edge of `poly`.
pub fn arc_crosses_polygon(arc: &DubinsArc, poly: &Polygon) -> bool {
    if poly.is_empty() {
        return false;
    }
    if !geometry::bounding_boxes_overlap(&arc_bounding_box(arc), &poly.bounding_box()) {
        return false;
    }
    if arc.is_straight() {
        let seg = Segment::new(arc.start.position(), arc.end.position());
        return geometry::segment_crosses_polygon(seg, poly);
    }
    let (center, rho, theta0, theta1) = arc_center_and_sweep(arc);
    poly.edges()
        .any(|e| geometry::arc_crosses_segment(rho, center, theta0, theta1, e))
}

/// True iff any arc of `curve` crosses any edge of `poly`.
pub fn curve_crosses_polygon(curve: &DubinsCurve, poly: &Polygon) -> bool {
    curve.arcs().iter().any(|arc| arc_crosses_polygon(arc, poly))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dubins::solver::shortest_path;
    use crate::geometry::Pose2D;

    #[test]
    fn straight_arc_through_obstacle_collides() {
        let start = Pose2D::new(0.0, 0.0, 0.0);
        let end = Pose2D::new(10.0, 0.0, 0.0);
        let (_, curve) = shortest_path(start, end, 1.0, &[]).expect("feasible");
        let box_in_the_way = Polygon::new(vec![
            Point::new(4.0, -1.0),
            Point::new(4.0, 1.0),
            Point::new(6.0, 1.0),
            Point::new(6.0, -1.0),
        ]);
        assert!(curve_crosses_polygon(&curve, &box_in_the_way));
    }

    #[test]
    fn straight_arc_clear_of_distant_obstacle_does_not_collide() {
        let start = Pose2D::new(0.0, 0.0, 0.0);
        let end = Pose2D::new(10.0, 0.0, 0.0);
        let (_, curve) = shortest_path(start, end, 1.0, &[]).expect("feasible");
        let far_box = Polygon::new(vec![
            Point::new(100.0, 100.0),
            Point::new(100.0, 101.0),
            Point::new(101.0, 101.0),
            Point::new(101.0, 100.0),
        ]);
        assert!(!curve_crosses_polygon(&curve, &far_box));
    }
}
