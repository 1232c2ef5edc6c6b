//! terminal — watch one delivery agent work a grid, frame by frame.
//!
//! ```text
//! cargo run -p terminal -- --seed 7 --fps 10
//! cargo run -p terminal -- --config run.toml --csv ./trace
//! RUST_LOG=dg_sim=debug cargo run -p terminal -- --fps 0
//! ```

mod render;


use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dg_core::{Cell, SimConfig, Tick};
use dg_obstacles::RandomWalk;
use dg_output::{CsvWriter, TraceObserver};
use dg_path::{AStar, Path};
use dg_sim::{ReplanReason, RunSummary, SimBuilder, SimObserver, Snapshot, TickOutcome};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_FPS: u32 = 5;
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

// ── Command line ──────────────────────────────────────────────────────────────

/// Grid delivery simulator: one agent, static and wandering obstacles.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file holding a `SimConfig`; flags below override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    seed: Option<u64>,

    /// Grid side length in cells
    #[arg(long)]
    grid_size: Option<u16>,

    #[arg(long = "static")]
    static_obstacles: Option<usize>,

    #[arg(long = "moving")]
    moving_obstacles: Option<usize>,

    #[arg(long)]
    deliveries: Option<usize>,

    #[arg(long)]
    max_ticks: Option<u64>,

    /// Frames per second (0 = as fast as possible)
    #[arg(long, default_value_t = DEFAULT_FPS)]
    fps: u32,

    /// Write ticks.csv and deliveries.csv into this directory
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print only the final summary
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    /// File config (or the default), then flag overrides.
    fn sim_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
            }
            None => SimConfig::default(),
        };

        if let Some(v) = self.seed             { config.seed = v; }
        if let Some(v) = self.grid_size        { config.grid_size = v; }
        if let Some(v) = self.static_obstacles { config.static_obstacles = v; }
        if let Some(v) = self.moving_obstacles { config.moving_obstacles = v; }
        if let Some(v) = self.deliveries       { config.deliveries = v; }
        if let Some(v) = self.max_ticks        { config.max_ticks = v; }

        config.validate()?;
        Ok(config)
    }

    fn frame_time(&self) -> Option<Duration> {
        (self.fps > 0).then(|| Duration::from_secs_f64(1.0 / f64::from(self.fps)))
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Counts replans and forwards everything to the optional CSV trace.
struct DemoObserver {
    trace:   Option<TraceObserver<CsvWriter>>,
    blocked: u64,
    no_path: u64,
}

impl SimObserver for DemoObserver {
    fn on_replan(&mut self, tick: Tick, reason: ReplanReason, path: &Path) {
        match reason {
            ReplanReason::Blocked => self.blocked += 1,
            ReplanReason::NoPath => self.no_path += 1,
        }
        if let Some(t) = &mut self.trace {
            t.on_replan(tick, reason, path);
        }
    }

    fn on_delivery(&mut self, tick: Tick, cell: Cell, remaining: usize) {
        info!(%tick, %cell, remaining, "delivered");
        if let Some(t) = &mut self.trace {
            t.on_delivery(tick, cell, remaining);
        }
    }

    fn on_tick_end(&mut self, outcome: &TickOutcome, snapshot: &Snapshot<'_>) {
        if let Some(t) = &mut self.trace {
            t.on_tick_end(outcome, snapshot);
        }
    }

    fn on_sim_end(&mut self, summary: &RunSummary) {
        if let Some(t) = &mut self.trace {
            t.on_sim_end(summary);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.sim_config()?;
    let frame_time = args.frame_time();

    println!("=== delivery_grid ===");
    println!(
        "Grid: {0}x{0}  |  Static: {1}  |  Moving: {2}  |  Deliveries: {3}  |  Seed: {4}",
        config.grid_size, config.static_obstacles, config.moving_obstacles, config.deliveries, config.seed
    );

    let trace = match &args.csv {
        Some(dir) => {
            std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
            Some(TraceObserver::new(CsvWriter::new(dir)?))
        }
        None => None,
    };
    let mut obs = DemoObserver { trace, blocked: 0, no_path: 0 };

    let max_ticks = config.max_ticks;
    let mut sim = SimBuilder::new(config, AStar, RandomWalk).build()?;

    let t0 = Instant::now();
    if !args.quiet {
        print!("{CLEAR_SCREEN}{}", render::render(&sim.snapshot()));
    }

    while !sim.is_done() && sim.current_tick().0 < max_ticks {
        let frame_start = Instant::now();
        sim.run_ticks(1, &mut obs);

        if !args.quiet {
            print!("{CLEAR_SCREEN}{}", render::render(&sim.snapshot()));
        }
        if let Some(frame) = frame_time {
            thread::sleep(frame.saturating_sub(frame_start.elapsed()));
        }
    }

    let summary = sim.summary();
    obs.on_sim_end(&summary);

    println!();
    println!("{}", sim.snapshot());
    println!(
        "Ticks: {}  |  Completed: {}  |  Replans: {} blocked, {} unreachable  |  Wall: {:.2?}",
        summary.ticks,
        summary.completed,
        obs.blocked,
        obs.no_path,
        t0.elapsed()
    );

    if let Some(mut trace) = obs.trace {
        if let Some(e) = trace.take_error() {
            eprintln!("output error: {e}");
        } else if let Some(dir) = &args.csv {
            println!("Trace written to {}", dir.display());
        }
    }

    Ok(())
}
