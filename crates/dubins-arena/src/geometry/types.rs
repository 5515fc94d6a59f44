//! Basic 2D types shared by the geometry kernel, the Dubins solver and the roadmap.
//!
//! References
//! - original_source: include/dubins/dubins.hpp (`Pose2D`), include/rm/geometry.hpp (`Segment`, `Box`)

use nalgebra::Vector2;

/// A point/vertex in the plane. Kept as a bare alias (not a newtype) so
/// callers can use `nalgebra`'s vector arithmetic directly, as the teacher
/// crate does throughout `geom2`.
pub type Point = Vector2<f64>;

/// Oriented 2D pose. `theta` is measured counter-clockwise from +x and is
/// always stored normalized to `[0, 2*PI)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose2D {
    pub x: f64,
    pub y: f64,
    pub theta: f64,
}

impl Pose2D {
    #[inline]
    pub fn new(x: f64, y: f64, theta: f64) -> Self {
        Self {
            x,
            y,
            theta: mod2pi(theta),
        }
    }

    #[inline]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Signed angular delta from `other` to `self`, in `(-PI, PI]`.
    #[inline]
    pub fn signed_delta_theta(&self, other: &Pose2D) -> f64 {
        norm_angle(self.theta - other.theta)
    }
}

/// Normalize an angle to `[0, 2*PI)`.
#[inline]
pub fn mod2pi(angle: f64) -> f64 {
    let two_pi = 2.0 * std::f64::consts::PI;
    let mut a = angle % two_pi;
    if a < 0.0 {
        a += two_pi;
    }
    a
}

/// Normalize an angle to `(-PI, PI]`.
#[inline]
pub fn norm_angle(angle: f64) -> f64 {
    let two_pi = 2.0 * std::f64::consts::PI;
    let mut a = angle;
    while a <= -std::f64::consts::PI {
        a += two_pi;
    }
    while a > std::f64::consts::PI {
        a -= two_pi;
    }
    a
}

/// An ordered ring of vertices. Obstacles are stored clockwise, the arena
/// border counter-clockwise, so "inside" always means "to the right of every
/// directed edge" for obstacles and "to the left" for the border — see
/// `predicates::point_in_convex_polygon`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    pub fn centroid(&self) -> Point {
        let n = self.vertices.len().max(1) as f64;
        let sum = self
            .vertices
            .iter()
            .fold(Point::new(0.0, 0.0), |acc, v| acc + v);
        sum / n
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(&self.vertices)
    }
}

/// A directed segment `p0 -> p1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p0: Point,
    pub p1: Point,
}

impl Segment {
    #[inline]
    pub fn new(p0: Point, p1: Point) -> Self {
        Self { p0, p1 }
    }
}

/// Axis-aligned bounding box, used as a broad-phase collision filter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl BoundingBox {
    pub fn from_points(points: &[Point]) -> Self {
        let mut bb = BoundingBox {
            xmin: f64::INFINITY,
            xmax: f64::NEG_INFINITY,
            ymin: f64::INFINITY,
            ymax: f64::NEG_INFINITY,
        };
        for p in points {
            bb.xmin = bb.xmin.min(p.x);
            bb.xmax = bb.xmax.max(p.x);
            bb.ymin = bb.ymin.min(p.y);
            bb.ymax = bb.ymax.max(p.y);
        }
        bb
    }

    #[inline]
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.xmin <= other.xmax
            && self.xmax >= other.xmin
            && self.ymin <= other.ymax
            && self.ymax >= other.ymin
    }

    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.xmin && p.x <= self.xmax && p.y >= self.ymin && p.y <= self.ymax
    }
}
