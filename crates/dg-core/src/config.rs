//! Top-level simulation configuration.

use crate::{Cell, CoreError, CoreResult, Grid};

/// Everything needed to generate and run one simulation.
///
/// Typically loaded from a TOML file by the driver (with the `serde` feature)
/// and handed to `dg_sim::SimBuilder`.  Missing fields fall back to
/// [`SimConfig::default`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Side length of the square grid.
    pub grid_size: u16,

    /// Number of permanently blocked cells placed at random.
    pub static_obstacles: usize,

    /// Number of wandering obstacles placed at random.
    pub moving_obstacles: usize,

    /// Number of delivery targets placed at random.
    pub deliveries: usize,

    /// Cell the agent starts on.  Never receives an obstacle or a delivery.
    pub start: Cell,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Upper bound on ticks for `Sim::run`.  Guards against layouts where a
    /// target is permanently unreachable.
    pub max_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid_size:        10,
            static_obstacles: 10,
            moving_obstacles: 3,
            deliveries:       4,
            start:            Cell::ORIGIN,
            seed:             42,
            max_ticks:        1_000,
        }
    }
}

impl SimConfig {
    /// The grid this configuration describes.
    #[inline]
    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_size)
    }

    /// Cells available for random placement (everything except the start).
    #[inline]
    pub fn free_cells(&self) -> usize {
        self.grid().cell_count().saturating_sub(1)
    }

    /// Total number of cells the random layout must place.
    #[inline]
    pub fn requested_cells(&self) -> usize {
        self.static_obstacles + self.moving_obstacles + self.deliveries
    }

    /// Reject configurations that cannot produce a layout.
    ///
    /// Counts are never truncated: if they do not fit, this is an error.
    pub fn validate(&self) -> CoreResult<()> {
        if self.grid_size == 0 {
            return Err(CoreError::EmptyGrid);
        }
        if !self.grid().in_bounds(self.start) {
            return Err(CoreError::OutOfBounds {
                what: "start cell",
                cell: self.start,
                size: self.grid_size,
            });
        }
        let requested = self.requested_cells();
        let available = self.free_cells();
        if requested > available {
            return Err(CoreError::TooCrowded { requested, available });
        }
        Ok(())
    }
}
