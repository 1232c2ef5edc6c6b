//! `dg-obstacles` — moving-obstacle motion.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`context`]    | `MotionContext<'a>` — read-only pre-tick state            |
//! | [`motion`]     | `ObstacleMotion` trait, `advance` (apply to all obstacles)|
//! | [`random_walk`]| `RandomWalk` — uniform over {down, right, up, left, stay} |
//! | [`stationary`] | `Stationary` — obstacles never move                       |
//!
//! # Design notes
//!
//! A tick's obstacle update is split in two:
//!
//! 1. **Choose** (optionally parallel): every obstacle picks a
//!    [`Direction`][dg_core::Direction] from its own RNG, reading only the
//!    pre-tick [`MotionContext`].
//! 2. **Apply**: candidates that leave the grid or land on a static obstacle,
//!    a delivery point, or the agent are rejected and the obstacle stays put.
//!    The new positions replace the old ones all at once.
//!
//! Obstacles never check each other, so two may share a cell.

pub mod context;
pub mod motion;
pub mod random_walk;
pub mod stationary;


pub use context::MotionContext;
pub use motion::{advance, ObstacleMotion};
pub use random_walk::RandomWalk;
pub use stationary::Stationary;
