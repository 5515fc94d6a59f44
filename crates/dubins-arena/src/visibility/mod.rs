//! Visibility-graph construction: inflate obstacles and shrink the border by
//! the robot's footprint, subtract the inflated obstacles from the shrunk
//! border, and connect every pair of mutually visible free-space vertices.
//!
//! References
//! - original_source: src/rm/visibility.cpp (`visibility`, `makeVisibilityNodes`),
//!   which delegates the polygon offset/difference to `ClipperLib`. Here that
//!   role is played by `geo` + `geo-offset`, the idiomatic Rust equivalent,
//!   following `zainthemaynnn-GRIN`'s `grin_map` (`src/map.rs`), which already
//!   wires up the same `offset_with_arc_segments` + `boolean_op` pipeline for
//!   navmesh generation from obstacle/boundary hulls.

use geo::{BooleanOps, Coord, LineString, MultiPolygon, OpType};
use geo_offset::Offset;

use crate::config::PlannerConfig;
use crate::geometry::{self, Point, Polygon, Segment};

fn to_geo_polygon(poly: &Polygon) -> geo::Polygon<f64> {
    let coords: Vec<Coord<f64>> = poly.vertices.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
    geo::Polygon::new(LineString::new(coords), vec![])
}

fn ring_to_polygon(ring: &LineString<f64>) -> Polygon {
    let vertices: Vec<Point> = ring
        .coords()
        .map(|c| Point::new(c.x, c.y))
        .collect();
    // `geo` closes rings by repeating the first vertex at the end; drop it
    // so `Polygon::edges()` doesn't produce a degenerate zero-length edge.
    let vertices = if vertices.len() > 1 && vertices.first() == vertices.last() {
        vertices[..vertices.len() - 1].to_vec()
    } else {
        vertices
    };
    Polygon::new(vertices)
}

fn multipolygon_to_rings(mp: &MultiPolygon<f64>) -> Vec<Polygon> {
    let mut rings = Vec::new();
    for poly in mp.iter() {
        rings.push(ring_to_polygon(poly.exterior()));
        for hole in poly.interiors() {
            rings.push(ring_to_polygon(hole));
        }
    }
    rings
}

fn inflate_union(polys: &[Polygon], distance: f64) -> MultiPolygon<f64> {
    polys.iter().fold(MultiPolygon::new(Vec::new()), |acc, poly| {
        match to_geo_polygon(poly).offset_with_arc_segments(distance, 8) {
            Ok(inflated) => acc.boolean_op(&inflated, OpType::Union),
            Err(_) => acc,
        }
    })
}

fn free_space_barriers_at(border: &Polygon, obstacles: &[Polygon], clearance: f64) -> Vec<Polygon> {
    let shrunk_border = inflate_union(std::slice::from_ref(border), -clearance);
    let inflated_obstacles = inflate_union(obstacles, clearance);
    let free_space = shrunk_border.boolean_op(&inflated_obstacles, OpType::Difference);
    multipolygon_to_rings(&free_space)
}

/// Free-space boundary after shrinking `border` inward and inflating
/// `obstacles` outward, both by `cfg.visibility_offset`.
///
/// `visibility_offset` is itself already sized relative to the robot
/// footprint (spec.md §6's defaults derive it as `collision_offset * 1.3`
/// with `collision_offset = robot_size * 0.5`), so it is used directly as
/// the Minkowski inflation distance rather than added on top of
/// `robot_size` again.
///
/// This is the *outer*, more generous inflation: it only ever feeds vertex
/// extraction (`make_visibility_vertices`) and the visibility-graph edge
/// test (`build_visibility`), never the Dubins collision check — see
/// `collision_barriers` for that narrower margin. spec.md §4.4's rationale:
/// vertices placed at this wider offset give Dubins curves enough slack to
/// pass nearby without colliding against the tighter `collision_barriers`.
pub fn free_space_barriers(border: &Polygon, obstacles: &[Polygon], cfg: &PlannerConfig) -> Vec<Polygon> {
    free_space_barriers_at(border, obstacles, cfg.visibility_offset)
}

/// Free-space boundary inflated by `cfg.collision_offset` alone — the
/// narrower margin used to reject actual Dubins curves during roadmap
/// construction and start/goal attachment (`RoadMap::build`,
/// `add_start_pose`, `add_goal_pose`). Kept distinct from
/// `free_space_barriers` per spec.md §6's separate `collision_offset` and
/// `visibility_offset` tunables.
pub fn collision_barriers(border: &Polygon, obstacles: &[Polygon], cfg: &PlannerConfig) -> Vec<Polygon> {
    free_space_barriers_at(border, obstacles, cfg.collision_offset)
}

/// Extract and threshold-merge the vertices of the free-space boundary,
/// producing the roadmap's visibility-graph node positions.
///
/// Vertices closer together than `cfg.visibility_threshold` are merged into
/// one, located at the running weighted centroid of the vertices merged so
/// far (so merging three nearly-coincident vertices lands at their mean, not
/// at whichever one happened to be seen first).
pub fn make_visibility_vertices(border: &Polygon, obstacles: &[Polygon], cfg: &PlannerConfig) -> Vec<Point> {
    let rings = free_space_barriers(border, obstacles, cfg);
    let mut merged: Vec<(Point, f64)> = Vec::new();

    for ring in &rings {
        for &v in &ring.vertices {
            if let Some((center, count)) = merged
                .iter_mut()
                .find(|(center, _)| (*center - v).norm() <= cfg.visibility_threshold)
            {
                let new_count = *count + 1.0;
                *center = (*center * *count + v) / new_count;
                *count = new_count;
            } else {
                merged.push((v, 1.0));
            }
        }
    }

    merged.into_iter().map(|(center, _)| center).collect()
}

/// All pairs of mutually visible vertices: `(i, j)` with `i < j` such that
/// the straight segment between `vertices[i]` and `vertices[j]` crosses none
/// of `barriers`.
///
/// O(V^2) in the vertex count, matching original_source's own pairwise
/// `visibility()` test.
pub fn build_visibility(vertices: &[Point], barriers: &[Polygon]) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            let seg = Segment::new(vertices[i], vertices[j]);
            let blocked = barriers.iter().any(|p| geometry::segment_crosses_polygon(seg, p));
            if !blocked {
                edges.push((i, j));
            }
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(cx: f64, cy: f64, half: f64) -> Polygon {
        Polygon::new(vec![
            Point::new(cx - half, cy - half),
            Point::new(cx + half, cy - half),
            Point::new(cx + half, cy + half),
            Point::new(cx - half, cy + half),
        ])
    }

    #[test]
    fn empty_arena_has_no_obstacle_rings_beyond_the_border() {
        let border = square(0.0, 0.0, 10.0);
        let cfg = PlannerConfig {
            robot_size: 0.1,
            visibility_offset: 0.0,
            ..PlannerConfig::default()
        };
        let barriers = free_space_barriers(&border, &[], &cfg);
        assert_eq!(barriers.len(), 1);
    }

    #[test]
    fn distant_vertices_across_a_blocking_wall_are_not_mutually_visible() {
        let v = vec![Point::new(-5.0, 0.0), Point::new(5.0, 0.0)];
        let wall = Polygon::new(vec![
            Point::new(-0.1, -5.0),
            Point::new(0.1, -5.0),
            Point::new(0.1, 5.0),
            Point::new(-0.1, 5.0),
        ]);
        let edges = build_visibility(&v, &[wall]);
        assert!(edges.is_empty());
    }

    #[test]
    fn unobstructed_vertices_are_mutually_visible() {
        let v = vec![Point::new(-5.0, 0.0), Point::new(5.0, 0.0)];
        let edges = build_visibility(&v, &[]);
        assert_eq!(edges, vec![(0, 1)]);
    }
}
