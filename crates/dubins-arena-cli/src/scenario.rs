//! JSON scenario format: borders, obstacles, gates, and the two robots'
//! start poses, plus an optional config override and RNG seed.
//!
//! This is the CLI's own glue, not part of the core library's contract —
//! the core library only knows about `Polygon`/`Pose2D`.

use anyhow::{Context, Result};
use dubins_arena::{Point, Polygon, Pose2D};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct ScenarioFile {
    pub border: Vec<[f64; 2]>,
    #[serde(default)]
    pub obstacles: Vec<Vec<[f64; 2]>>,
    #[serde(default)]
    pub gates: Vec<Vec<[f64; 2]>>,
    pub evader_start: [f64; 3],
    pub pursuer_start: [f64; 3],
    pub seed: Option<u64>,
}

pub struct Scenario {
    pub border: Polygon,
    pub obstacles: Vec<Polygon>,
    pub gates: Vec<Polygon>,
    pub starts: [Pose2D; 2],
    pub seed: u64,
}

fn to_polygon(vertices: &[[f64; 2]]) -> Polygon {
    Polygon::new(vertices.iter().map(|&[x, y]| Point::new(x, y)).collect())
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario file {}", path.display()))?;
        let raw: ScenarioFile = serde_json::from_str(&text)
            .with_context(|| format!("parsing scenario file {}", path.display()))?;

        Ok(Scenario {
            border: to_polygon(&raw.border),
            obstacles: raw.obstacles.iter().map(|v| to_polygon(v)).collect(),
            gates: raw.gates.iter().map(|v| to_polygon(v)).collect(),
            starts: [
                Pose2D::new(raw.evader_start[0], raw.evader_start[1], raw.evader_start[2]),
                Pose2D::new(raw.pursuer_start[0], raw.pursuer_start[1], raw.pursuer_start[2]),
            ],
            seed: raw.seed.unwrap_or(0),
        })
    }
}
