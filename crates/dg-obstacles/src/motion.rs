//! The `ObstacleMotion` trait and the shared advance step.

use dg_core::{Cell, Direction, ObstacleRng};

use crate::MotionContext;

/// Pluggable obstacle movement.
///
/// A model only *chooses* a direction; [`advance`] owns the rejection rule, so
/// no model can push an obstacle onto an illegal cell.
///
/// # Thread safety
///
/// With the `parallel` feature `choose` runs on Rayon's pool, so models must
/// be `Send + Sync` and keep no per-obstacle state of their own.  Per-obstacle
/// randomness comes in through `rng`.
pub trait ObstacleMotion: Send + Sync + 'static {
    /// Pick this tick's move for the obstacle currently at `position`.
    fn choose(
        &self,
        position: Cell,
        ctx:      &MotionContext<'_>,
        rng:      &mut ObstacleRng,
    ) -> Direction;
}

/// Compute every obstacle's position for the next tick.
///
/// `rngs[i]` is the stream for `positions[i]`; the slices must have equal
/// length.  Rejected candidates (out of bounds, static obstacle, delivery
/// point, agent cell) leave the obstacle where it was, with no retry.  Order
/// and identity of obstacles are preserved.
pub fn advance<M: ObstacleMotion>(
    model:     &M,
    positions: &[Cell],
    ctx:       &MotionContext<'_>,
    rngs:      &mut [ObstacleRng],
) -> Vec<Cell> {
    debug_assert_eq!(positions.len(), rngs.len());

    #[cfg(not(feature = "parallel"))]
    {
        positions
            .iter()
            .zip(rngs.iter_mut())
            .map(|(&pos, rng)| resolve(pos, model.choose(pos, ctx, rng), ctx))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        positions
            .par_iter()
            .zip(rngs.par_iter_mut())
            .map(|(&pos, rng)| resolve(pos, model.choose(pos, ctx, rng), ctx))
            .collect()
    }
}

#[inline]
fn resolve(position: Cell, dir: Direction, ctx: &MotionContext<'_>) -> Cell {
    let candidate = position.step(dir);
    if candidate == position || ctx.accepts(candidate) {
        candidate
    } else {
        position
    }
}
