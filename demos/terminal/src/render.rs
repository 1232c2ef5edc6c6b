//! Text rendering of a [`Snapshot`].

use std::fmt::Write;

use dg_core::Cell;
use dg_sim::Snapshot;

pub const AGENT:    char = 'A';
pub const MOVING:   char = 'o';
pub const STATIC:   char = '#';
pub const DELIVERY: char = 'D';
pub const PATH:     char = '*';
pub const FREE:     char = '.';

/// The glyph for `cell`.  Earlier entries win when layers overlap.
pub fn glyph(s: &Snapshot<'_>, cell: Cell) -> char {
    if cell == s.agent {
        AGENT
    } else if s.moving_obstacles.contains(&cell) {
        MOVING
    } else if s.static_obstacles.contains(&cell) {
        STATIC
    } else if s.deliveries.contains(cell) {
        DELIVERY
    } else if s.path.contains(cell) {
        PATH
    } else {
        FREE
    }
}

/// One line per row, cells separated by spaces, then the stats line.
pub fn render(s: &Snapshot<'_>) -> String {
    let size = i32::from(s.grid.size());
    let mut out = String::with_capacity((size as usize * 2 + 1) * size as usize + 64);
    for y in 0..size {
        for x in 0..size {
            if x > 0 {
                out.push(' ');
            }
            out.push(glyph(s, Cell::new(x, y)));
        }
        out.push('\n');
    }
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}  [{}]", s, s.tick);
    out
}
