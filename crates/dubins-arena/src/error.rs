//! Error and outcome types for the planning core.
//!
//! The library hand-rolls `Display` and `std::error::Error` rather than
//! pulling in `thiserror`, matching the teacher crate's own error types
//! (`geom4::volume::VolumeError`, `rand4::GeneratorError`): those have zero
//! error-handling dependencies, and this crate follows suit. The CLI
//! application boundary uses `anyhow` instead (see `dubins-arena-cli`).

use std::fmt;

/// Everything that can keep `plan()` from producing a pair of paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanError {
    /// The evader's or pursuer's start pose collides with an obstacle or
    /// lies outside the border.
    InfeasibleStart,
    /// A start pose could not be attached to any roadmap node within
    /// `k_attach` nearest candidates.
    InfeasibleGoal,
    /// The gate at this index could not be reached from the roadmap.
    UnreachableGate { gate_index: usize },
    /// A `NavMap` method was called before `compute_forward`/`compute_reverse`.
    PlannerUncomputed,
    /// A reverse-mode `NavMap` was queried with a forward-mode operation, or
    /// vice versa.
    WrongDirection,
    /// Internal: a Dubins solver result failed the propagate-and-compare
    /// check. Never escapes `plan()` — the caller retries or drops the
    /// candidate edge.
    NumericalCheckFailure,
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::InfeasibleStart => write!(f, "start pose is infeasible (collides or out of bounds)"),
            PlanError::InfeasibleGoal => write!(f, "goal pose could not be attached to the roadmap"),
            PlanError::UnreachableGate { gate_index } => {
                write!(f, "gate {gate_index} is unreachable from the roadmap")
            }
            PlanError::PlannerUncomputed => write!(f, "navmap queried before compute_forward/compute_reverse"),
            PlanError::WrongDirection => write!(f, "navmap queried in the wrong direction (forward vs reverse)"),
            PlanError::NumericalCheckFailure => write!(f, "dubins solver result failed its numerical check"),
        }
    }
}

impl std::error::Error for PlanError {}

/// Terminal state of a pursuer-evader game, distinct from `PlanError`: these
/// are expected outcomes of a well-formed run, not failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// The pursuer reached the evader's node before the evader escaped.
    Caught,
    /// The evader reached a gate.
    Escaped,
    /// The pursuer has no feasible move left (every candidate edge is
    /// infeasible or blocked); the evader wins by default.
    PursuerStuck,
}
