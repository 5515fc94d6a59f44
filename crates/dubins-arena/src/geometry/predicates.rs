//! Pure geometric predicates: segment intersection, point-in-polygon, and
//! arc/polygon collision tests.
//!
//! All functions here are total and side-effect free. Collision tests are
//! conservative: an endpoint touching counts as a collision, and the
//! tolerance is the caller's `numerical_tol` (see `crate::config`).
//!
//! References
//! - original_source: include/rm/geometry.hpp, src/rm/geometry.cpp
//!   (`collisionCheck` overloads; several bodies there are stubs filled in
//!   here per spec.md's prescribed semantics)

use super::types::{BoundingBox, Point, Polygon, Segment};

/// Parametric segment intersection via the 2x2 determinant. Returns true iff
/// both parameters lie in `[0, 1]` and the lines are not parallel. Endpoints
/// touching count as a collision.
pub fn segment_intersects(s0: Segment, s1: Segment) -> bool {
    let d0 = s0.p1 - s0.p0;
    let d1 = s1.p1 - s1.p0;
    let det = d1.x * (-d0.y) - (-d0.x) * d1.y;
    if det == 0.0 {
        return false;
    }
    let rhs = s1.p0 - s0.p0;
    let t = (-d0.y * rhs.x + d0.x * rhs.y) / det;
    let u = (-d1.y * rhs.x + d1.x * rhs.y) / det;
    (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
}

/// True iff `p` is on or to the right of every directed edge of `poly`.
/// Only meaningful for convex `poly`; behavior on non-convex input is
/// undefined by contract.
pub fn point_in_convex_polygon(p: Point, poly: &Polygon) -> bool {
    poly.edges().all(|e| is_right_of_or_on(p, e))
}

#[inline]
fn is_right_of_or_on(p: Point, s: Segment) -> bool {
    let edge = s.p1 - s.p0;
    let to_p = p - s.p0;
    // cross(edge, to_p) <= 0 means p is on or to the right of s (CW winding).
    edge.x * to_p.y - edge.y * to_p.x <= 0.0
}

/// True iff any edge of `poly` intersects `seg`.
pub fn segment_crosses_polygon(seg: Segment, poly: &Polygon) -> bool {
    poly.edges().any(|e| segment_intersects(seg, e))
}

/// True iff `seg` crosses the (unsigned) arc of radius `rho.abs()` centered at
/// `center`, sweeping from `theta0` to `theta1` in the direction implied by
/// the sign of `rho` (positive: counter-clockwise/left turn; negative:
/// clockwise/right turn).
///
/// Solves the quadratic obtained by substituting the segment's parametric
/// form into `x^2 + y^2 = rho^2` (circle centered at the origin in the
/// `center`-relative frame), accepts roots with parameter in `[0, 1]`, and
/// accepts each root only if its angular position lies within the oriented
/// arc `[theta0, theta1]`.
pub fn arc_crosses_segment(rho: f64, center: Point, theta0: f64, theta1: f64, seg: Segment) -> bool {
    let radius = rho.abs();
    let clockwise = rho < 0.0;
    let p0 = seg.p0 - center;
    let d = seg.p1 - seg.p0;

    let a = d.x * d.x + d.y * d.y;
    let b = 2.0 * (p0.x * d.x + p0.y * d.y);
    let c = p0.x * p0.x + p0.y * p0.y - radius * radius;

    if a.abs() < 1e-12 {
        // Degenerate (zero-length) segment: no intersection with a circle,
        // except the boundary case, which contributes measure zero.
        return false;
    }

    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return false;
    }
    let sqrt_disc = disc.sqrt();
    let roots = [(-b + sqrt_disc) / (2.0 * a), (-b - sqrt_disc) / (2.0 * a)];

    for t in roots {
        if !(0.0..=1.0).contains(&t) {
            continue;
        }
        let hit = p0 + d * t;
        let angle = hit.y.atan2(hit.x);
        if angle_in_range(angle, theta0, theta1, clockwise) {
            return true;
        }
    }
    false
}

/// True iff the unnormalized angle `theta` sweeps into `[theta0, theta1]`
/// travelling in the requested direction (counter-clockwise when
/// `clockwise` is false, clockwise otherwise).
pub fn angle_in_range(theta: f64, theta0: f64, theta1: f64, clockwise: bool) -> bool {
    use super::types::mod2pi;
    let t = mod2pi(theta - theta0);
    let span = if clockwise {
        mod2pi(theta0 - theta1)
    } else {
        mod2pi(theta1 - theta0)
    };
    let t = if clockwise { mod2pi(-t) } else { t };
    t <= span + 1e-9
}

/// Broad-phase bounding-box overlap test, used ahead of the narrow-phase
/// edge-by-edge test in `curve_crosses_polygon` callers.
pub fn bounding_boxes_overlap(a: &BoundingBox, b: &BoundingBox) -> bool {
    a.intersects(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
        Segment::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    #[test]
    fn crossing_segments_intersect() {
        assert!(segment_intersects(seg(0.0, 0.0, 1.0, 1.0), seg(0.0, 1.0, 1.0, 0.0)));
    }

    #[test]
    fn parallel_segments_do_not_intersect() {
        assert!(!segment_intersects(seg(0.0, 0.0, 1.0, 0.0), seg(0.0, 1.0, 1.0, 1.0)));
    }

    #[test]
    fn touching_endpoints_count_as_collision() {
        assert!(segment_intersects(seg(0.0, 0.0, 1.0, 0.0), seg(1.0, 0.0, 1.0, 1.0)));
    }

    #[test]
    fn point_inside_cw_square_is_inside() {
        let square = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ]);
        assert!(point_in_convex_polygon(Point::new(0.5, 0.5), &square));
        assert!(!point_in_convex_polygon(Point::new(2.0, 2.0), &square));
    }

    #[test]
    fn arc_crosses_segment_detects_diameter_crossing() {
        // Unit circle centered at origin, full half-turn from 0 to PI (CCW).
        let s = seg(-2.0, 0.5, 2.0, 0.5);
        assert!(arc_crosses_segment(
            1.0,
            Point::new(0.0, 0.0),
            0.0,
            std::f64::consts::PI,
            s
        ));
    }

    #[test]
    fn arc_crosses_segment_misses_when_outside_sweep() {
        // The segment only crosses the circle in the lower half, but the arc
        // only sweeps the upper half.
        let s = seg(-2.0, -0.5, 2.0, -0.5);
        assert!(!arc_crosses_segment(
            1.0,
            Point::new(0.0, 0.0),
            0.0,
            std::f64::consts::PI,
            s
        ));
    }

    #[test]
    fn angle_in_range_ccw_wraps() {
        assert!(angle_in_range(0.1, 6.0, 0.5, false));
        assert!(!angle_in_range(3.0, 6.0, 0.5, false));
    }
}
