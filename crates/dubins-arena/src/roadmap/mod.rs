//! Roadmap construction: nodes at visibility-graph vertices, `n_poses`
//! discrete headings per node, and feasible Dubins connections between them.

mod attach;
mod build;
mod types;

pub use types::{DubinsConnection, EdgeHandle, EdgeKind, Node, NodeId, Orientation, PoseIndex, PoseRef};

use crate::geometry::Point;

/// Owns every `Node` and `DubinsConnection` in a roadmap. All cross-
/// references are handles (`NodeId`, `PoseIndex`, `EdgeHandle`) into this
/// struct's own `Vec`s — no pointers, no global registry, no cycles.
///
/// References original_source's `rm::RoadMap`, whose `Node`/`Orientation`
/// instead carry raw back-pointers into their owning `RoadMap` (see §9
/// Design Notes: "Back-pointers and cyclic references").
#[derive(Clone, Debug, Default)]
pub struct RoadMap {
    nodes: Vec<Node>,
    edges: Vec<DubinsConnection>,
}

impl RoadMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn edge(&self, handle: EdgeHandle) -> &DubinsConnection {
        &self.edges[handle.0]
    }

    pub fn edges(&self) -> &[DubinsConnection] {
        &self.edges
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    pub fn pose(&self, pose_ref: PoseRef) -> &Orientation {
        &self.nodes[pose_ref.0 .0].orientations[pose_ref.1 .0]
    }

    /// Insert a node at `position`, or return the existing one if a node at
    /// exactly this position already exists.
    ///
    /// Dedup is by exact `f64` equality, per spec.md §4.3 — the roadmap
    /// vertices come from the visibility builder's already-merged vertex
    /// set, so exact duplicates only arise from re-adding the same vertex
    /// twice, not from near-miss floating point noise.
    pub fn add_node(&mut self, position: Point) -> NodeId {
        if let Some((i, _)) = self
            .nodes
            .iter()
            .enumerate()
            .find(|(_, n)| n.position == position)
        {
            return NodeId(i);
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(position));
        id
    }

    pub(crate) fn push_orientation(&mut self, node: NodeId, pose: crate::geometry::Pose2D) -> PoseIndex {
        self.nodes[node.0].push_orientation(pose)
    }

    /// Record a directed Dubins/wait edge `from -> to` between two oriented
    /// poses, registering the handle in both endpoints' edge lists.
    ///
    /// This is the oriented-pose-level connection used for Dijkstra routing
    /// (`crate::navmap`); see `connect` for the coarser, node-level base
    /// graph.
    pub fn connect_poses(&mut self, from: PoseRef, to: PoseRef, kind: EdgeKind) -> EdgeHandle {
        let handle = EdgeHandle(self.edges.len());
        self.edges.push(DubinsConnection { from, to, kind });
        self.nodes[from.0 .0].orientations[from.1 .0].out_edges.push(handle);
        self.nodes[to.0 .0].orientations[to.1 .0].in_edges.push(handle);
        handle
    }

    /// Insert `b` into `a`'s base-graph neighbor set. Returns `false` without
    /// modifying anything if `a == b` or `b` is already a neighbor of `a`.
    ///
    /// This is the directed node-level base graph that `build` attempts
    /// Dubins connections over; it is coarser than, and persisted
    /// independently of, the oriented-pose edges recorded by
    /// `connect_poses`.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> bool {
        if a == b {
            return false;
        }
        let neighbors = &mut self.nodes[a.0].connected;
        if neighbors.contains(&b) {
            return false;
        }
        neighbors.push(b);
        true
    }

    /// The `k` nodes whose position is closest to `position`, nearest
    /// first. Ties broken by ascending `NodeId` for determinism.
    pub fn k_nearest(&self, position: Point, k: usize) -> Vec<NodeId> {
        let mut ranked: Vec<(f64, NodeId)> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, n)| ((n.position - position).norm(), NodeId(i)))
            .collect();
        ranked.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap().then(a.1.cmp(&b.1)));
        ranked.into_iter().take(k).map(|(_, id)| id).collect()
    }
}
