//! Initial placement of obstacles and deliveries.
//!
//! A [`Layout`] is either sampled from a [`SimConfig`] (the usual case) or
//! written out by hand for scripted scenarios.  Either way it is validated
//! before a simulation is built from it.

use std::collections::BTreeSet;

use dg_core::{Cell, CoreError, CoreResult, Grid, SimConfig, SimRng};

/// Where everything sits at tick 0.  The agent starts on `SimConfig::start`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub static_obstacles: Vec<Cell>,
    /// Order is the obstacles' identity for the whole run.
    pub moving_obstacles: Vec<Cell>,
    pub deliveries:       Vec<Cell>,
}

impl Layout {
    /// Sample a layout from `config` using `config.seed`.
    ///
    /// Static obstacles are drawn from every cell except the start, moving
    /// obstacles from what remains, then deliveries from what remains after
    /// that.  The three groups are therefore pairwise disjoint.
    pub fn generate(config: &SimConfig) -> CoreResult<Layout> {
        config.validate()?;

        let start = config.start;
        let mut pool: Vec<Cell> = config.grid().cells().filter(|&c| c != start).collect();
        let mut rng = SimRng::new(config.seed);

        let too_crowded = || CoreError::TooCrowded {
            requested: config.requested_cells(),
            available: config.free_cells(),
        };

        let mut static_obstacles = rng
            .take_sample(&mut pool, config.static_obstacles)
            .ok_or_else(too_crowded)?;
        let moving_obstacles = rng
            .take_sample(&mut pool, config.moving_obstacles)
            .ok_or_else(too_crowded)?;
        let mut deliveries = rng
            .take_sample(&mut pool, config.deliveries)
            .ok_or_else(too_crowded)?;

        // Sets have no meaningful order; sort for stable debug output.
        static_obstacles.sort_unstable();
        deliveries.sort_unstable();

        Ok(Layout { static_obstacles, moving_obstacles, deliveries })
    }

    /// Check a hand-written layout against `grid` and `start`.
    ///
    /// Every cell must be on the grid and off the start cell.  Static
    /// obstacles and deliveries must be unique and disjoint from every other
    /// group.  Moving obstacles may share a cell with each other (they can at
    /// runtime too) but not with anything else.
    pub fn validate(&self, grid: Grid, start: Cell) -> CoreResult<()> {
        if grid.size() == 0 {
            return Err(CoreError::EmptyGrid);
        }
        if !grid.in_bounds(start) {
            return Err(CoreError::OutOfBounds { what: "start cell", cell: start, size: grid.size() });
        }

        let mut taken: BTreeSet<Cell> = BTreeSet::new();
        let groups: [(&'static str, &[Cell], bool); 3] = [
            ("static obstacle", &self.static_obstacles, false),
            ("delivery point",  &self.deliveries,       false),
            ("moving obstacle", &self.moving_obstacles, true),
        ];

        for (what, cells, may_share) in groups {
            let mut own: BTreeSet<Cell> = BTreeSet::new();
            for &cell in cells {
                if !grid.in_bounds(cell) {
                    return Err(CoreError::OutOfBounds { what, cell, size: grid.size() });
                }
                if cell == start || taken.contains(&cell) {
                    return Err(CoreError::Overlap { what, cell });
                }
                if !own.insert(cell) && !may_share {
                    return Err(CoreError::Overlap { what, cell });
                }
            }
            taken.extend(own);
        }
        Ok(())
    }
}
