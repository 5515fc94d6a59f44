//! Curated public API surface. Mirrors the teacher's own `api.rs`
//! convention of a single place that re-exports the crate's contract, rather
//! than requiring callers to reach into individual modules.

pub use crate::config::PlannerConfig;
pub use crate::error::{GameOutcome, PlanError};
pub use crate::game::GlobalSample;
pub use crate::geometry::{Point, Polygon, Pose2D};
pub use crate::plan::plan;
