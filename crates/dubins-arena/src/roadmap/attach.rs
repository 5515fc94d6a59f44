//! Append-only attachment of ad hoc poses (robot starts, goals, gates) to an
//! already-built roadmap via k-nearest-node Dubins connections.
//!
//! References
//! - original_source: include/rm/RoadMap.hpp (`addStartPose`, `addGoalPose`,
//!   `findKClosest`)

use super::build::try_connect;
use super::{NodeId, PoseRef, RoadMap};
use crate::config::PlannerConfig;
use crate::error::PlanError;
use crate::geometry::{Polygon, Pose2D};

impl RoadMap {
    /// Attach `pose` as a new node with a Dubins connection to its
    /// `cfg.k_attach` nearest existing nodes, oriented by `outgoing`: `true`
    /// attempts connections FROM the new pose TO each neighbor orientation
    /// (a start pose, which must be able to leave); `false` attempts
    /// connections FROM each neighbor orientation TO the new pose (a goal
    /// pose, which must be reachable). Does not touch any existing node or
    /// edge (append-only).
    fn attach_pose(
        &mut self,
        pose: Pose2D,
        cfg: &PlannerConfig,
        barriers: &[Polygon],
        outgoing: bool,
    ) -> Option<PoseRef> {
        let neighbors: Vec<NodeId> = self.k_nearest(pose.position(), cfg.k_attach);
        let new_node = self.add_node(pose.position());
        let new_pose_idx = self.push_orientation(new_node, pose);
        let new_ref: PoseRef = (new_node, new_pose_idx);

        let mut connected = false;
        for neighbor in neighbors {
            if neighbor == new_node {
                continue;
            }
            let orientation_count = self.node(neighbor).orientations.len();
            for i in 0..orientation_count {
                let other_ref: PoseRef = (neighbor, super::PoseIndex(i));
                let other_pose = self.pose(other_ref).pose;

                let kind = if outgoing {
                    try_connect(pose, other_pose, cfg, barriers)
                } else {
                    try_connect(other_pose, pose, cfg, barriers)
                };
                if let Some(kind) = kind {
                    if outgoing {
                        self.connect_poses(new_ref, other_ref, kind);
                        self.connect(new_node, neighbor);
                    } else {
                        self.connect_poses(other_ref, new_ref, kind);
                        self.connect(neighbor, new_node);
                    }
                    connected = true;
                }
            }
        }
        connected.then_some(new_ref)
    }

    /// Attach a robot start pose: connections run FROM the new pose TO every
    /// orientation at each of its `k_attach` nearest nodes.
    pub fn add_start_pose(
        &mut self,
        pose: Pose2D,
        cfg: &PlannerConfig,
        barriers: &[Polygon],
    ) -> Result<PoseRef, PlanError> {
        self.attach_pose(pose, cfg, barriers, true).ok_or(PlanError::InfeasibleStart)
    }

    /// Attach a goal (or gate) pose: connections run FROM every orientation
    /// at each of its `k_attach` nearest nodes TO the new pose.
    pub fn add_goal_pose(
        &mut self,
        pose: Pose2D,
        cfg: &PlannerConfig,
        barriers: &[Polygon],
    ) -> Result<PoseRef, PlanError> {
        self.attach_pose(pose, cfg, barriers, false).ok_or(PlanError::InfeasibleGoal)
    }
}
