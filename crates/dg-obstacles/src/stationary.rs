//! A motion model in which obstacles never move.

use dg_core::{Cell, Direction, ObstacleRng};

use crate::{MotionContext, ObstacleMotion};

/// An [`ObstacleMotion`] that always stays put.
///
/// Useful for scripted scenarios and tests where "moving" obstacles must sit
/// exactly where they were placed.
#[derive(Copy, Clone, Debug, Default)]
pub struct Stationary;

impl ObstacleMotion for Stationary {
    fn choose(
        &self,
        _position: Cell,
        _ctx:      &MotionContext<'_>,
        _rng:      &mut ObstacleRng,
    ) -> Direction {
        Direction::Stay
    }
}
