//! Dubins arc and curve types.
//!
//! References
//! - original_source: include/dubins/dubins.hpp (`DubinsArc`, `DubinsCurve`)

use crate::geometry::Pose2D;

/// One constant-curvature segment of a Dubins curve: a straight line when
/// `k == 0.0`, otherwise a circular arc of radius `1 / k.abs()`, turning left
/// for `k > 0` and right for `k < 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DubinsArc {
    pub start: Pose2D,
    pub end: Pose2D,
    pub k: f64,
    /// Arc length, always non-negative.
    pub s: f64,
}

impl DubinsArc {
    #[inline]
    pub fn is_straight(&self) -> bool {
        self.k == 0.0
    }
}

/// A full Dubins curve: three consecutive arcs, tangent at the two internal
/// junction poses, running from `arc_1.start` to `arc_3.end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DubinsCurve {
    pub arc_1: DubinsArc,
    pub arc_2: DubinsArc,
    pub arc_3: DubinsArc,
    /// Total length, `arc_1.s + arc_2.s + arc_3.s`.
    pub l: f64,
}

impl DubinsCurve {
    #[inline]
    pub fn start(&self) -> Pose2D {
        self.arc_1.start
    }

    #[inline]
    pub fn end(&self) -> Pose2D {
        self.arc_3.end
    }

    pub fn arcs(&self) -> [DubinsArc; 3] {
        [self.arc_1, self.arc_2, self.arc_3]
    }
}
