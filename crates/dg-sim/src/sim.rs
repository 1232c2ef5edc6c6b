//! The `Sim` struct and its tick loop.

use dg_core::{Cell, CellSet, Grid, ObstacleRng, SimConfig, Tick};
use dg_delivery::{nearest_target, DeliveryPoints};
use dg_obstacles::{advance, MotionContext, ObstacleMotion};
use dg_path::{Path, PathFinder};
use tracing::{debug, info};

use crate::{Layout, Phase, SimObserver, Snapshot};

// ── Per-tick results ──────────────────────────────────────────────────────────

/// Why the path was recomputed during step ② of a tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ReplanReason {
    /// No route was known (the target was unreachable last time).
    NoPath,
    /// A moving obstacle stepped onto the remaining route.
    Blocked,
}

/// What happened during one call to [`Sim::tick`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TickOutcome {
    pub tick:        Tick,
    /// Set if the path was stale and recomputed before the agent moved.
    pub replanned:   Option<ReplanReason>,
    /// `true` if the agent advanced one cell.
    pub moved:       bool,
    /// The delivery completed this tick, if any.
    pub delivered:   Option<Cell>,
    /// The target chosen after a delivery (`None` once everything is done).
    pub next_target: Option<Cell>,
}

impl TickOutcome {
    fn idle(tick: Tick) -> Self {
        Self { tick, replanned: None, moved: false, delivered: None, next_target: None }
    }
}

/// Totals reported when [`Sim::run`] stops.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct RunSummary {
    /// Ticks processed over the lifetime of the sim (not just this call).
    pub ticks:             u64,
    pub distance_traveled: u64,
    pub deliveries_done:   u64,
    /// `true` if every delivery was made; `false` if the tick cap hit first.
    pub completed:         bool,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation runner.
///
/// `Sim<P, M>` owns all mutable state and drives the four-step tick:
///
/// 1. **Obstacles**: [`dg_obstacles::advance`] moves every obstacle from an
///    immutable pre-tick view.
/// 2. **Validate**: a stale path (empty, or crossing a moving obstacle) is
///    recomputed from the agent's current cell, blocking on static ∪ moving.
/// 3. **Step**: the agent pops one cell off the path; no path, no move.
/// 4. **Deliver**: reaching the target removes it and plans to the nearest
///    remaining one, or clears the path when none are left.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: PathFinder, M: ObstacleMotion> {
    /// Run configuration (grid size, seed, tick cap, …).
    pub config: SimConfig,

    /// The path search.
    pub finder: P,

    /// The obstacle motion model.
    pub motion: M,

    grid:  Grid,
    tick:  Tick,
    agent: Cell,

    static_obstacles: CellSet,

    /// Positions by obstacle identity; `obstacle_rngs[i]` drives `[i]`.
    moving_obstacles: Vec<Cell>,
    obstacle_rngs:    Vec<ObstacleRng>,

    deliveries:         DeliveryPoints,
    initial_deliveries: u64,
    target:             Option<Cell>,
    path:               Path,

    distance_traveled: u64,
    deliveries_done:   u64,
    just_delivered:    bool,

    /// Kept for [`Sim::reset`].
    initial: Layout,
}

impl<P: PathFinder, M: ObstacleMotion> Sim<P, M> {
    /// Assemble a sim from an already-validated layout.
    pub(crate) fn from_layout(config: SimConfig, layout: Layout, finder: P, motion: M) -> Self {
        let mut sim = Sim {
            grid:               config.grid(),
            tick:               Tick::ZERO,
            agent:              config.start,
            static_obstacles:   CellSet::default(),
            moving_obstacles:   Vec::new(),
            obstacle_rngs:      Vec::new(),
            deliveries:         DeliveryPoints::new(),
            initial_deliveries: 0,
            target:             None,
            path:               Path::empty(),
            distance_traveled:  0,
            deliveries_done:    0,
            just_delivered:     false,
            initial:            layout,
            config,
            finder,
            motion,
        };
        sim.reset();
        sim
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Return to tick 0: the initial layout, fresh counters, re-seeded
    /// obstacle RNGs, and a fresh plan to the nearest delivery.
    ///
    /// Ticking after a reset replays the previous run exactly.
    pub fn reset(&mut self) {
        let layout = &self.initial;

        self.tick = Tick::ZERO;
        self.agent = self.config.start;
        self.static_obstacles = layout.static_obstacles.iter().copied().collect();
        self.moving_obstacles = layout.moving_obstacles.clone();
        self.obstacle_rngs = ObstacleRng::for_obstacles(self.config.seed, layout.moving_obstacles.len());
        self.deliveries = layout.deliveries.iter().copied().collect();
        self.initial_deliveries = self.deliveries.len() as u64;
        self.distance_traveled = 0;
        self.deliveries_done = 0;
        self.just_delivered = false;

        self.target = nearest_target(self.agent, &self.deliveries);
        self.path = match self.target {
            Some(target) => self.plan_to(target),
            None => Path::empty(),
        };

        debug!(
            start = %self.agent,
            static_obstacles = self.static_obstacles.len(),
            moving_obstacles = self.moving_obstacles.len(),
            deliveries = self.initial_deliveries,
            target = ?self.target,
            path_len = self.path.len(),
            "simulation initialised"
        );
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Advance the simulation by exactly one tick.
    ///
    /// Once every delivery is done, further ticks only move obstacles.
    pub fn tick(&mut self) -> TickOutcome {
        let now = self.tick;
        let mut outcome = TickOutcome::idle(now);

        // ── ① Obstacles ───────────────────────────────────────────────────
        //
        // Explicit field borrows so the borrow checker sees disjoint access.
        let ctx = MotionContext::new(self.grid, &self.static_obstacles, &self.deliveries, self.agent);
        self.moving_obstacles = advance(&self.motion, &self.moving_obstacles, &ctx, &mut self.obstacle_rngs);

        if let Some(target) = self.target {
            // ── ② Validate / replan ───────────────────────────────────────
            if self.path.is_stale(&self.moving_obstacles) {
                let reason = if self.path.is_empty() {
                    ReplanReason::NoPath
                } else {
                    ReplanReason::Blocked
                };
                self.path = self.plan_to(target);
                outcome.replanned = Some(reason);
                debug!(tick = %now, ?reason, agent = %self.agent, %target, path_len = self.path.len(), "replanned");
            }

            // ── ③ Step ────────────────────────────────────────────────────
            match self.path.next_step() {
                Some(next) => {
                    self.agent = next;
                    self.distance_traveled += 1;
                    outcome.moved = true;
                }
                None => {
                    debug!(tick = %now, agent = %self.agent, %target, "no route, holding position");
                }
            }

            // ── ④ Deliver ─────────────────────────────────────────────────
            if self.agent == target {
                self.deliveries.remove(target);
                self.deliveries_done += 1;
                outcome.delivered = Some(target);
                info!(
                    tick = %now,
                    cell = %target,
                    done = self.deliveries_done,
                    remaining = self.deliveries.len(),
                    distance = self.distance_traveled,
                    "delivery completed"
                );

                self.target = nearest_target(self.agent, &self.deliveries);
                outcome.next_target = self.target;
                match self.target {
                    Some(next) => self.path = self.plan_to(next),
                    None => {
                        self.path.clear();
                        info!(tick = %now, distance = self.distance_traveled, "all deliveries completed");
                    }
                }
            }
        }

        self.just_delivered = outcome.delivered.is_some();
        self.tick = now.next();
        outcome
    }

    /// Tick until every delivery is made or `config.max_ticks` ticks have
    /// been processed, reporting to `observer` along the way.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> RunSummary {
        while !self.is_done() && self.tick.0 < self.config.max_ticks {
            self.observed_tick(observer);
        }
        let summary = self.summary();
        observer.on_sim_end(&summary);
        summary
    }

    /// Run exactly `n` ticks from the current position, ignoring both the
    /// tick cap and completion.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.observed_tick(observer);
        }
    }

    /// Read-only view of the current state.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            tick:               self.tick,
            grid:               self.grid,
            agent:              self.agent,
            target:             self.target,
            path:               &self.path,
            static_obstacles:   &self.static_obstacles,
            moving_obstacles:   &self.moving_obstacles,
            deliveries:         &self.deliveries,
            distance_traveled:  self.distance_traveled,
            deliveries_done:    self.deliveries_done,
            initial_deliveries: self.initial_deliveries,
            phase:              self.phase(),
        }
    }

    pub fn phase(&self) -> Phase {
        if self.target.is_none() {
            Phase::Done
        } else if self.just_delivered {
            Phase::Arrived
        } else if self.path.is_empty() {
            Phase::Planning
        } else {
            Phase::EnRoute
        }
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.target.is_none()
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            ticks:             self.tick.0,
            distance_traveled: self.distance_traveled,
            deliveries_done:   self.deliveries_done,
            completed:         self.is_done(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    #[inline]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[inline]
    pub fn agent(&self) -> Cell {
        self.agent
    }

    #[inline]
    pub fn target(&self) -> Option<Cell> {
        self.target
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn static_obstacles(&self) -> &CellSet {
        &self.static_obstacles
    }

    #[inline]
    pub fn moving_obstacles(&self) -> &[Cell] {
        &self.moving_obstacles
    }

    #[inline]
    pub fn deliveries(&self) -> &DeliveryPoints {
        &self.deliveries
    }

    #[inline]
    pub fn distance_traveled(&self) -> u64 {
        self.distance_traveled
    }

    #[inline]
    pub fn deliveries_done(&self) -> u64 {
        self.deliveries_done
    }

    #[inline]
    pub fn initial_deliveries(&self) -> u64 {
        self.initial_deliveries
    }

    /// The layout this sim was built from (and returns to on reset).
    #[inline]
    pub fn initial_layout(&self) -> &Layout {
        &self.initial
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn observed_tick<O: SimObserver>(&mut self, observer: &mut O) {
        observer.on_tick_start(self.tick);
        let outcome = self.tick();
        if let Some(reason) = outcome.replanned {
            observer.on_replan(outcome.tick, reason, &self.path);
        }
        if let Some(cell) = outcome.delivered {
            observer.on_delivery(outcome.tick, cell, self.deliveries.len());
        }
        observer.on_tick_end(&outcome, &self.snapshot());
    }

    /// Shortest path from the agent's current cell to `goal`, blocking on
    /// every static and moving obstacle.
    fn plan_to(&self, goal: Cell) -> Path {
        let mut blocked = self.static_obstacles.clone();
        blocked.extend(self.moving_obstacles.iter().copied());
        self.finder.find_path(&self.grid, self.agent, goal, &blocked)
    }
}
