//! Fluent builder for constructing a [`Sim`].

use dg_core::SimConfig;
use dg_obstacles::ObstacleMotion;
use dg_path::PathFinder;
use tracing::debug;

use crate::{Layout, Sim, SimResult};

/// Fluent builder for [`Sim<P, M>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — grid size, counts, seed, start cell, tick cap
/// - `P: PathFinder` — the path search (e.g. [`dg_path::AStar`])
/// - `M: ObstacleMotion` — how obstacles wander (e.g. [`dg_obstacles::RandomWalk`])
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                           |
/// |-----------------|---------------------------------------------------|
/// | `.layout(l)`    | Sampled from the config counts with `config.seed` |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, AStar, RandomWalk)
///     .layout(layout)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<P: PathFinder, M: ObstacleMotion> {
    config: SimConfig,
    layout: Option<Layout>,
    finder: P,
    motion: M,
}

impl<P: PathFinder, M: ObstacleMotion> SimBuilder<P, M> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, finder: P, motion: M) -> Self {
        Self { config, layout: None, finder, motion }
    }

    /// Use a hand-written layout instead of sampling one.
    ///
    /// The config's obstacle and delivery counts are ignored; the layout's own
    /// lengths are used.  Grid size, start cell, seed, and tick cap still come
    /// from the config.
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Validate inputs, place everything, plan the first path, and return a
    /// ready-to-run [`Sim`].
    ///
    /// Fails if the configuration cannot be satisfied (counts larger than the
    /// free cells, start off the grid, …) or an explicit layout is invalid.
    /// Nothing is ever silently truncated.
    pub fn build(self) -> SimResult<Sim<P, M>> {
        let layout = match self.layout {
            Some(layout) => {
                layout.validate(self.config.grid(), self.config.start)?;
                layout
            }
            None => Layout::generate(&self.config)?,
        };

        debug!(
            grid = self.config.grid_size,
            seed = self.config.seed,
            static_obstacles = layout.static_obstacles.len(),
            moving_obstacles = layout.moving_obstacles.len(),
            deliveries = layout.deliveries.len(),
            "layout ready"
        );

        Ok(Sim::from_layout(self.config, layout, self.finder, self.motion))
    }
}
