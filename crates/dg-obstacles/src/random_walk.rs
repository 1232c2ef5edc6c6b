//! Uniform random walk.

use dg_core::{Cell, Direction, ObstacleRng};

use crate::{MotionContext, ObstacleMotion};

/// Each tick, every obstacle picks one of down, right, up, left, or stay with
/// equal probability (1/5 each).
#[derive(Copy, Clone, Debug, Default)]
pub struct RandomWalk;

impl ObstacleMotion for RandomWalk {
    fn choose(
        &self,
        _position: Cell,
        _ctx:      &MotionContext<'_>,
        rng:       &mut ObstacleRng,
    ) -> Direction {
        rng.choose(&Direction::ALL).copied().unwrap_or(Direction::Stay)
    }
}
