//! 2D geometry kernel: point/pose/polygon types, segment and point-in-polygon
//! predicates, and gate-pose synthesis.
//!
//! Mirrors the role of `geom2` in the teacher crate, but the type family is
//! rebuilt around oriented poses and arcs instead of halfspace polyhedra.

mod gate;
mod predicates;
mod types;

pub use gate::gate_pose;
pub use predicates::{
    angle_in_range, bounding_boxes_overlap, point_in_convex_polygon, segment_crosses_polygon,
    segment_intersects, arc_crosses_segment,
};
pub use types::{mod2pi, norm_angle, BoundingBox, Point, Polygon, Pose2D, Segment};
