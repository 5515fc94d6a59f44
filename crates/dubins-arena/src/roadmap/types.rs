//! Roadmap data model: nodes, oriented poses, and edges, addressed by stable
//! handles instead of pointers.
//!
//! References
//! - original_source: include/rm/RoadMap.hpp (`Node`, `Orientation`,
//!   `DubinsConnection`) — there `Orientation` holds a raw `Node *_parent`
//!   back-pointer and `DubinsConnection` holds raw `Orientation *from/*to`;
//!   here every cross-reference is a `usize`-based handle into a flat `Vec`
//!   owned by `RoadMap`, following the teacher's
//!   `oriented_edge::types::{RidgeId, FacetId}` pattern.

use crate::dubins::DubinsCurve;
use crate::geometry::{Point, Pose2D};

/// Stable handle to a `Node` in a `RoadMap`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Index of an `Orientation` within its owning `Node`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PoseIndex(pub usize);

/// Stable handle to a `DubinsConnection` in a `RoadMap`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeHandle(pub usize);

/// A fully qualified reference to one oriented pose in the roadmap.
pub type PoseRef = (NodeId, PoseIndex);

/// One discrete heading at a `Node`, with the edges that touch it.
#[derive(Clone, Debug, PartialEq)]
pub struct Orientation {
    pub pose: Pose2D,
    pub out_edges: Vec<EdgeHandle>,
    pub in_edges: Vec<EdgeHandle>,
}

impl Orientation {
    fn new(pose: Pose2D) -> Self {
        Self {
            pose,
            out_edges: Vec::new(),
            in_edges: Vec::new(),
        }
    }
}

/// A position in the arena, carrying one `Orientation` per discretized
/// heading (or a single ad hoc orientation for attached start/goal poses),
/// plus the directed base graph's outgoing neighbor ids.
///
/// References original_source's `rm::Node`, whose `_connected` is a
/// `std::vector<node_id>` of the same kind.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub position: Point,
    pub orientations: Vec<Orientation>,
    pub connected: Vec<NodeId>,
}

impl Node {
    pub(super) fn new(position: Point) -> Self {
        Self {
            position,
            orientations: Vec::new(),
            connected: Vec::new(),
        }
    }

    pub(super) fn push_orientation(&mut self, pose: Pose2D) -> PoseIndex {
        let idx = PoseIndex(self.orientations.len());
        self.orientations.push(Orientation::new(pose));
        idx
    }
}

/// The kind of connection between two oriented poses: either a feasible
/// Dubins curve, or a zero-length "wait in place" edge synthesized by the
/// game engine when the pursuer has no useful move.
///
/// References original_source's `pursuerEvader.cpp::create_wait_connection`,
/// which builds a `DubinsConnection` whose `to == from`; here that case is a
/// distinct enum variant rather than a same-node Dubins curve of length zero.
#[derive(Clone, Debug, PartialEq)]
pub enum EdgeKind {
    Dubins(DubinsCurve),
    Wait { length: f64 },
}

impl EdgeKind {
    #[inline]
    pub fn length(&self) -> f64 {
        match self {
            EdgeKind::Dubins(curve) => curve.l,
            EdgeKind::Wait { length } => *length,
        }
    }

    #[inline]
    pub fn is_wait(&self) -> bool {
        matches!(self, EdgeKind::Wait { .. })
    }
}

/// A directed edge between two oriented poses.
#[derive(Clone, Debug, PartialEq)]
pub struct DubinsConnection {
    pub from: PoseRef,
    pub to: PoseRef,
    pub kind: EdgeKind,
}
