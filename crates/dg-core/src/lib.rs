//! `dg-core` — foundational types for the `delivery_grid` simulator.
//!
//! This crate is a dependency of every other `dg-*` crate.  It has no `dg-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde` and `rustc-hash`).
//!
//! # What lives here
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`cell`]   | `Cell`, `Direction`, `CellSet`                         |
//! | [`grid`]   | `Grid` — dimension and in-bounds test                  |
//! | [`time`]   | `Tick`                                                 |
//! | [`config`] | `SimConfig` and its validation                         |
//! | [`rng`]    | `ObstacleRng` (per-obstacle), `SimRng` (layout)        |
//! | [`error`]  | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `serde`   | Adds `Serialize`/`Deserialize` to all public types.      |
//! | `fx-hash` | `CellSet` becomes `rustc_hash::FxHashSet<Cell>`.         |

pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{Cell, CellSet, Direction};
pub use config::SimConfig;
pub use error::{CoreError, CoreResult};
pub use grid::Grid;
pub use rng::{ObstacleRng, SimRng};
pub use time::Tick;
