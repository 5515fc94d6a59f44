//! Planner configuration: the tunables every module reads, gathered in one
//! struct so the CLI has a single place to override from JSON.
//!
//! Mirrors the teacher's `GeomCfg` (`geom2::types`): a plain struct of `f64`
//! tolerances with a `Default` impl, passed by shared reference everywhere.

/// Tunable parameters for roadmap construction, visibility inflation, and
/// the Dubins solver. Defaults match spec.md §6's table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlannerConfig {
    /// Robot footprint radius, used as the collision distance between the
    /// two robots' discretized paths (`game::truncate_paths`).
    pub robot_size: f64,
    /// Minkowski inflation distance applied to obstacles/border for
    /// collision checks. Already sized relative to `robot_size` by the
    /// caller (spec.md §6's defaults: `robot_size * 0.5`), so it is used
    /// directly rather than added on top of `robot_size` again.
    pub collision_offset: f64,
    /// Minkowski inflation distance applied to obstacles/border for
    /// visibility-graph construction (kept separate, and wider than
    /// `collision_offset`, so the visibility graph can be more conservative
    /// than raw collision checking).
    pub visibility_offset: f64,
    /// Vertices closer together than this, after inflation, are merged into
    /// one visibility-graph vertex (weighted by original vertex count).
    pub visibility_threshold: f64,
    /// Number of discrete headings materialized per roadmap node.
    pub n_poses: usize,
    /// Maximum path curvature, i.e. `1 / min_turn_radius`.
    pub kmax: f64,
    /// Number of nearest roadmap nodes tried when attaching a start/goal
    /// pose.
    pub k_attach: usize,
    /// Arclength spacing used when discretizing a Dubins curve into poses.
    pub discretization_step: f64,
    /// Tolerance used by numerical checks (Dubins propagate-and-compare,
    /// angle wraparound, collision margins).
    pub numerical_tol: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        let robot_size = 0.14;
        let kmax = 1.0 / robot_size;
        Self {
            robot_size,
            collision_offset: 0.07,
            visibility_offset: 0.091,
            visibility_threshold: 0.07,
            n_poses: 8,
            kmax,
            k_attach: 10,
            discretization_step: std::f64::consts::PI / (32.0 * kmax),
            numerical_tol: 1e-4,
        }
    }
}
