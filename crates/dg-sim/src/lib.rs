//! `dg-sim` — tick loop orchestrator for the delivery_grid simulator.
//!
//! # Tick loop
//!
//! ```text
//! every tick:
//!   ① Obstacles — every moving obstacle takes one random step (or stays),
//!                 decided from the pre-tick state and applied at once.
//!   ② Validate  — if the remaining path is empty or crosses a moving
//!                 obstacle, replan from the agent's current cell.
//!   ③ Step      — pop the next cell and move the agent (or stay if no path).
//!   ④ Deliver   — on the target: remove it, count it, pick the nearest
//!                 remaining target and plan to it, or finish.
//! ```
//!
//! Rendering is not part of the core: a driver calls [`Sim::tick`] (or
//! [`Sim::run`] with a [`SimObserver`]) and reads [`Sim::snapshot`].
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Computes obstacle moves on Rayon's thread pool.        |
//! | `fx-hash`  | FxHash for the obstacle sets.                          |
//! | `serde`    | Serde derives on config, layout, path, and deliveries. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dg_core::SimConfig;
//! use dg_obstacles::RandomWalk;
//! use dg_path::AStar;
//! use dg_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), AStar, RandomWalk).build()?;
//! let summary = sim.run(&mut NoopObserver);
//! println!("{}", sim.snapshot());
//! ```

pub mod builder;
pub mod error;
pub mod layout;
pub mod observer;
pub mod sim;
pub mod snapshot;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use layout::Layout;
pub use observer::{NoopObserver, SimObserver};
pub use sim::{ReplanReason, RunSummary, Sim, TickOutcome};
pub use snapshot::{Phase, Snapshot};
