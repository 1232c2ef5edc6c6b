//! Path finder trait and the A* implementation.
//!
//! # Pluggability
//!
//! `dg-sim` calls search through the [`PathFinder`] trait so tests can wrap or
//! instrument it without touching the simulation core.  [`AStar`] is the only
//! search shipped.
//!
//! # Cost model
//!
//! 4-connected grid, uniform cost of 1 per step, Manhattan heuristic.  The
//! heuristic is admissible and consistent for unit moves, so the first time
//! the goal is popped its cost is optimal.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use dg_core::{Cell, CellSet, Grid};

use crate::Path;

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable shortest-path search.
///
/// # Contract
///
/// - The returned path starts at the first step after `start` and ends at
///   `goal` inclusive.
/// - Cells in `blocked` or outside `grid` are never part of the path.
/// - An unreachable goal, an out-of-bounds endpoint, or `start == goal`
///   yields [`Path::empty`].
pub trait PathFinder: Send + Sync {
    fn find_path(&self, grid: &Grid, start: Cell, goal: Cell, blocked: &CellSet) -> Path;
}

// ── AStar ─────────────────────────────────────────────────────────────────────

/// Best-first A* search.
///
/// Open-set ordering is `(f, g, cell)` ascending: lowest `f = g + h` first,
/// then lowest `g`, then lexicographic cell order.  Equal inputs therefore
/// always produce the same path.
#[derive(Copy, Clone, Debug, Default)]
pub struct AStar;

impl PathFinder for AStar {
    fn find_path(&self, grid: &Grid, start: Cell, goal: Cell, blocked: &CellSet) -> Path {
        a_star(grid, start, goal, blocked)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

fn a_star(grid: &Grid, start: Cell, goal: Cell, blocked: &CellSet) -> Path {
    if start == goal {
        return Path::empty();
    }
    let (Some(start_ix), Some(_)) = (grid.index(start), grid.index(goal)) else {
        return Path::empty();
    };

    let n = grid.cell_count();
    // g[v] = best known step count from start to v.
    let mut g = vec![u32::MAX; n];
    // came_from[v] = predecessor on the best known route to v.
    let mut came_from: Vec<Option<Cell>> = vec![None; n];

    g[start_ix] = 0;

    // Min-heap via Reverse.  Key: (f, g, cell).
    let mut open: BinaryHeap<Reverse<(u32, u32, Cell)>> = BinaryHeap::new();
    open.push(Reverse((start.manhattan(goal), 0, start)));

    while let Some(Reverse((_, cost, cell))) = open.pop() {
        if cell == goal {
            return reconstruct(grid, &came_from, start, goal);
        }

        let Some(ix) = grid.index(cell) else { continue };
        // Skip stale heap entries.
        if cost > g[ix] {
            continue;
        }

        for next in cell.neighbors() {
            let Some(next_ix) = grid.index(next) else { continue };
            if blocked.contains(&next) {
                continue;
            }
            let tentative = cost + 1;
            if tentative < g[next_ix] {
                g[next_ix] = tentative;
                came_from[next_ix] = Some(cell);
                open.push(Reverse((tentative + next.manhattan(goal), tentative, next)));
            }
        }
    }

    Path::empty()
}

fn reconstruct(grid: &Grid, came_from: &[Option<Cell>], start: Cell, goal: Cell) -> Path {
    let mut cells = Vec::new();
    let mut cur = goal;
    while cur != start {
        cells.push(cur);
        match grid.index(cur).and_then(|ix| came_from[ix]) {
            Some(prev) => cur = prev,
            None => return Path::empty(),
        }
    }
    cells.reverse();
    Path::from(cells)
}
