//! `dg-path` — shortest-path search over the delivery grid.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`path`]   | `Path` — the remaining steps toward the current target    |
//! | [`finder`] | `PathFinder` trait, `AStar`                               |
//!
//! # Failure model
//!
//! Search never errors.  An unreachable goal (or `start == goal`) yields an
//! empty [`Path`]; the caller keeps the agent in place and retries next tick.

pub mod finder;
pub mod path;


pub use finder::{AStar, PathFinder};
pub use path::Path;
