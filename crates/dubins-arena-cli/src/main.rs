use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use serde_json::json;
use tracing_subscriber::fmt::SubscriberBuilder;

use dubins_arena::{plan, PlannerConfig};

mod scenario;

use scenario::Scenario;

#[derive(Parser)]
#[command(name = "dubins-arena")]
#[command(about = "Plan a pursuer-evader round in a polygonal arena")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Load a scenario, play one round, and print the two discretized paths.
    Run {
        /// Path to a scenario JSON file (border/obstacles/gates/starts).
        #[arg(long)]
        scenario: PathBuf,
        /// Optional JSON file overriding individual `PlannerConfig` fields.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Optional RNG seed, overriding the scenario's own `seed` field.
        #[arg(long)]
        seed: Option<u64>,
        /// Write the result JSON here instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the default `PlannerConfig` as JSON.
    DefaultConfig,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run { scenario, config, seed, out } => run(scenario, config, seed, out),
        Action::DefaultConfig => default_config(),
    }
}

/// Mirrors `PlannerConfig`'s fields as `Option`s, so a config override file
/// only needs to name the fields it wants to change.
#[derive(Debug, Deserialize, Default)]
struct ConfigOverride {
    robot_size: Option<f64>,
    collision_offset: Option<f64>,
    visibility_offset: Option<f64>,
    visibility_threshold: Option<f64>,
    n_poses: Option<usize>,
    kmax: Option<f64>,
    k_attach: Option<usize>,
    discretization_step: Option<f64>,
    numerical_tol: Option<f64>,
}

impl ConfigOverride {
    fn apply(self, base: PlannerConfig) -> PlannerConfig {
        PlannerConfig {
            robot_size: self.robot_size.unwrap_or(base.robot_size),
            collision_offset: self.collision_offset.unwrap_or(base.collision_offset),
            visibility_offset: self.visibility_offset.unwrap_or(base.visibility_offset),
            visibility_threshold: self.visibility_threshold.unwrap_or(base.visibility_threshold),
            n_poses: self.n_poses.unwrap_or(base.n_poses),
            kmax: self.kmax.unwrap_or(base.kmax),
            k_attach: self.k_attach.unwrap_or(base.k_attach),
            discretization_step: self.discretization_step.unwrap_or(base.discretization_step),
            numerical_tol: self.numerical_tol.unwrap_or(base.numerical_tol),
        }
    }
}

fn load_config(path: Option<PathBuf>) -> Result<PlannerConfig> {
    let base = PlannerConfig::default();
    let Some(path) = path else { return Ok(base) };
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading config override {}", path.display()))?;
    let over: ConfigOverride = serde_json::from_str(&text)
        .with_context(|| format!("parsing config override {}", path.display()))?;
    Ok(over.apply(base))
}

fn run(scenario_path: PathBuf, config_path: Option<PathBuf>, seed: Option<u64>, out: Option<PathBuf>) -> Result<()> {
    let scenario = Scenario::load(&scenario_path)?;
    let cfg = load_config(config_path)?;
    let seed = seed.unwrap_or(scenario.seed);

    tracing::info!(scenario = %scenario_path.display(), seed, "loaded scenario");
    tracing::debug!(
        obstacles = scenario.obstacles.len(),
        gates = scenario.gates.len(),
        "scenario shape"
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let result = plan(
        &scenario.border,
        &scenario.obstacles,
        &scenario.gates,
        scenario.starts,
        &cfg,
        &mut rng,
    );

    let [evader, pursuer] = result.map_err(|e| anyhow::anyhow!("planning failed: {e}"))?;
    tracing::info!(
        evader_samples = evader.len(),
        pursuer_samples = pursuer.len(),
        "round complete"
    );

    let doc = json!({
        "seed": seed,
        "evader": samples_to_json(&evader),
        "pursuer": samples_to_json(&pursuer),
    });
    let text = serde_json::to_string_pretty(&doc)?;

    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&path, text)?;
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn samples_to_json(samples: &[dubins_arena::GlobalSample]) -> serde_json::Value {
    json!(samples
        .iter()
        .map(|s| json!({"s": s.s, "x": s.pose.x, "y": s.pose.y, "theta": s.pose.theta, "k": s.k}))
        .collect::<Vec<_>>())
}

fn default_config() -> Result<()> {
    let cfg = PlannerConfig::default();
    let doc = json!({
        "robot_size": cfg.robot_size,
        "collision_offset": cfg.collision_offset,
        "visibility_offset": cfg.visibility_offset,
        "visibility_threshold": cfg.visibility_threshold,
        "n_poses": cfg.n_poses,
        "kmax": cfg.kmax,
        "k_attach": cfg.k_attach,
        "discretization_step": cfg.discretization_step,
        "numerical_tol": cfg.numerical_tol,
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
