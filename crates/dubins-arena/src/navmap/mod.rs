//! Single-source Dijkstra over a built `RoadMap`, in either direction:
//! forward from a source pose, or reverse from a goal pose.
//!
//! References
//! - original_source: include/nav/NavMap.hpp / src/nav/NavMap.cpp
//!   (`compute`, `computeReverse`, `reset`, `planTo`). The `operator+`,
//!   `operator-`, `operator+=`, `operator-=` overloads on `NavMap` there are
//!   dead code (no caller in the tree) and a redesign-flagged anti-pattern
//!   (§9 Design Notes) — not ported.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::error::PlanError;
use crate::roadmap::{EdgeHandle, NodeId, PoseRef, RoadMap};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Forward,
    Reverse,
}

/// Total ordering on `(cost, PoseRef)` so the priority queue has a
/// deterministic tie-break between equal-cost frontier nodes, by ascending
/// `(NodeId, PoseIndex)`. Costs are assumed finite and non-NaN.
#[derive(Clone, Copy, Debug, PartialEq)]
struct HeapItem(f64, PoseRef);

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so `BinaryHeap` (a max-heap) pops the smallest cost first.
        other
            .0
            .partial_cmp(&self.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.1.cmp(&self.1))
    }
}

/// A computed single-source shortest-path tree over a `RoadMap`'s oriented
/// poses.
///
/// `compute_forward` gives `value(x) = cost(source -> x)`. `compute_reverse`
/// gives `value(x) = -cost(x -> goal)`, per spec.md's Open Question
/// resolution: storing the negated cost keeps "smaller `value` is further
/// from the goal" consistent between the two modes without a second sign
/// convention leaking into callers.
pub struct NavMap<'a> {
    roadmap: &'a RoadMap,
    direction: Option<Direction>,
    root: Option<PoseRef>,
    dist: HashMap<PoseRef, f64>,
    prev_edge: HashMap<PoseRef, EdgeHandle>,
}

impl<'a> NavMap<'a> {
    pub fn new(roadmap: &'a RoadMap) -> Self {
        Self {
            roadmap,
            direction: None,
            root: None,
            dist: HashMap::new(),
            prev_edge: HashMap::new(),
        }
    }

    /// Discard any previously computed tree, ready for a fresh
    /// `compute_forward`/`compute_reverse` call.
    pub fn reset(&mut self) {
        self.direction = None;
        self.root = None;
        self.dist.clear();
        self.prev_edge.clear();
    }

    /// Dijkstra from `source`, walking outgoing edges. `value(x)` then
    /// returns `cost(source -> x)`.
    pub fn compute_forward(&mut self, source: PoseRef) {
        self.reset();
        self.direction = Some(Direction::Forward);
        self.root = Some(source);
        self.run(source, true);
    }

    /// Dijkstra from `goal`, walking incoming edges backward. `value(x)`
    /// then returns `-cost(x -> goal)`.
    pub fn compute_reverse(&mut self, goal: PoseRef) {
        self.reset();
        self.direction = Some(Direction::Reverse);
        self.root = Some(goal);
        self.run(goal, false);
    }

    fn run(&mut self, root: PoseRef, forward: bool) {
        let mut heap = BinaryHeap::new();
        self.dist.insert(root, 0.0);
        heap.push(HeapItem(0.0, root));

        while let Some(HeapItem(cost, cur)) = heap.pop() {
            if cost > *self.dist.get(&cur).unwrap_or(&f64::INFINITY) {
                continue;
            }
            let orientation = self.roadmap.pose(cur);
            let candidate_edges = if forward {
                &orientation.out_edges
            } else {
                &orientation.in_edges
            };
            for &handle in candidate_edges {
                let edge = self.roadmap.edge(handle);
                let (next, length) = if forward {
                    (edge.to, edge.kind.length())
                } else {
                    (edge.from, edge.kind.length())
                };
                let next_cost = cost + length;
                if next_cost < *self.dist.get(&next).unwrap_or(&f64::INFINITY) {
                    self.dist.insert(next, next_cost);
                    self.prev_edge.insert(next, handle);
                    heap.push(HeapItem(next_cost, next));
                }
            }
        }

        if !forward {
            for v in self.dist.values_mut() {
                *v = -*v;
            }
        }
    }

    fn require_computed(&self) -> Result<Direction, PlanError> {
        self.direction.ok_or(PlanError::PlannerUncomputed)
    }

    /// The shortest-path value at `x`: `cost(source -> x)` in forward mode,
    /// `-cost(x -> goal)` in reverse mode. `f64::INFINITY` if `x` is
    /// unreachable from the root.
    pub fn value(&self, x: PoseRef) -> Result<f64, PlanError> {
        self.require_computed()?;
        let raw = self.dist.get(&x).copied().unwrap_or(f64::INFINITY);
        Ok(match self.direction {
            Some(Direction::Reverse) if raw.is_finite() => raw,
            Some(Direction::Reverse) => f64::NEG_INFINITY,
            _ => raw,
        })
    }

    /// Cheapest reachable orientation at `node`, by `value()` (most negative
    /// in reverse mode, smallest in forward mode).
    fn best_orientation(&self, node: NodeId) -> Option<PoseRef> {
        let n = self.roadmap.node(node).orientations.len();
        (0..n)
            .map(|i| (node, crate::roadmap::PoseIndex(i)))
            .filter(|p| self.dist.contains_key(p))
            .min_by(|a, b| {
                let da = self.dist[a];
                let db = self.dist[b];
                da.partial_cmp(&db).unwrap_or(Ordering::Equal)
            })
    }

    /// Walk `prev_edge` from `target` back to the computed root and return
    /// the edges in source-to-target execution order.
    ///
    /// In forward mode the walk runs goal-to-source (each `prev_edge` step
    /// moves towards `root == source`), so the collected handles come out
    /// last-to-first and must be reversed. In reverse mode the walk instead
    /// runs source-to-goal (`prev_edge[x]` is the first edge of the best
    /// path from `x` to `root == goal`, per `compute_reverse`'s doc comment),
    /// so the handles are already in execution order and reversing them
    /// would hand callers the path backwards.
    fn edge_chain_to(&self, target: PoseRef) -> Result<Vec<EdgeHandle>, PlanError> {
        let root = self.root.ok_or(PlanError::PlannerUncomputed)?;
        let direction = self.direction.ok_or(PlanError::PlannerUncomputed)?;
        if !self.dist.contains_key(&target) {
            return Err(PlanError::InfeasibleGoal);
        }
        let mut chain = Vec::new();
        let mut cur = target;
        while cur != root {
            let handle = *self
                .prev_edge
                .get(&cur)
                .ok_or(PlanError::InfeasibleGoal)?;
            chain.push(handle);
            let edge = self.roadmap.edge(handle);
            cur = if edge.to == cur { edge.from } else { edge.to };
        }
        if direction == Direction::Forward {
            chain.reverse();
        }
        Ok(chain)
    }

    /// The edge sequence from the computed root to `target`.
    ///
    /// Requires `Direction::Forward` (computed via `compute_forward`): the
    /// natural reading of "plan to `target`" is "from the source I computed
    /// from, reach `target`".
    pub fn plan_to(&self, target: PoseRef) -> Result<Vec<EdgeHandle>, PlanError> {
        if self.require_computed()? != Direction::Forward {
            return Err(PlanError::WrongDirection);
        }
        self.edge_chain_to(target)
    }

    /// As `plan_to`, but to the cheapest orientation at `node`.
    pub fn plan_to_node(&self, node: NodeId) -> Result<Vec<EdgeHandle>, PlanError> {
        if self.require_computed()? != Direction::Forward {
            return Err(PlanError::WrongDirection);
        }
        let target = self.best_orientation(node).ok_or(PlanError::InfeasibleGoal)?;
        self.edge_chain_to(target)
    }

    /// The edge sequence from `source` to the computed root (the goal used
    /// in `compute_reverse`).
    ///
    /// Requires `Direction::Reverse`.
    pub fn plan_from(&self, source: PoseRef) -> Result<Vec<EdgeHandle>, PlanError> {
        if self.require_computed()? != Direction::Reverse {
            return Err(PlanError::WrongDirection);
        }
        self.edge_chain_to(source)
    }

    /// Earliest point along `evader_path` (a plan already computed by the
    /// evader's own forward `NavMap`) that `self` — the pursuer's forward
    /// `NavMap`, computed from the pursuer's current pose — can reach no
    /// later than the evader does.
    ///
    /// `evader_path` edges are consumed in order, with arclength accumulated
    /// from `-offset` (the caller's accounting for how far ahead the evader
    /// already is, e.g. `first_edge.L - s_e + s_p` in the game loop). For the
    /// first node the pursuer can reach in time (`adv = running - pursuer_cost
    /// >= 0`), this returns the pursuer's own path to that node. If no such
    /// node exists, it falls back to chasing the evader's final destination
    /// (spec.md's Open Question resolution #3: robustness over optimality).
    pub fn intercept(&self, evader_path: &[EdgeHandle], offset: f64) -> Result<Vec<EdgeHandle>, PlanError> {
        if self.require_computed()? != Direction::Forward {
            return Err(PlanError::WrongDirection);
        }
        let mut running = -offset;
        let mut last_node = None;
        for &handle in evader_path {
            let edge = self.roadmap.edge(handle);
            running += edge.kind.length();
            last_node = Some(edge.to.0);

            if let Some(pursuer_target) = self.best_orientation(edge.to.0) {
                let pursuer_cost = self.dist[&pursuer_target];
                let adv = running - pursuer_cost;
                if adv >= 0.0 {
                    return self.edge_chain_to(pursuer_target);
                }
            }
        }
        match last_node {
            Some(node) => self.plan_to_node(node),
            None => Err(PlanError::InfeasibleGoal),
        }
    }
}
