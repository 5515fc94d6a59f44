//! Dubins curves: the shortest curvature-bounded path between two oriented
//! poses, its six candidate word families, and the discretization and
//! collision tests built on top of it.

mod collide;
mod discretize;
mod primitives;
mod solver;
mod types;

pub use collide::{arc_crosses_polygon, curve_crosses_polygon};
pub use discretize::{discretize_arc, discretize_curve, PathSample};
pub use primitives::{Family, WordLengths};
pub use solver::{check, propagate, scale_from_standard, scale_to_standard, shortest_path, sinc, StandardProblem};
pub use types::{DubinsArc, DubinsCurve};
