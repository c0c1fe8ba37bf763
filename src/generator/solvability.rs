/*
solvability.rs

Copyright 2025 Hervé Quatremain

This file is part of Mazelab.

Mazelab is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Mazelab is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Mazelab. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Difficulty adjustment and solvability repair.
//!
//! Whatever the difficulty pass does, [`ensure_solvable`] runs last and guarantees a route from
//! the start to the exit.

use log::{debug, warn};
use rand::Rng;

use crate::connectivity;
use crate::grid::Grid;
use crate::grid::cell::CellType;
use crate::grid::point::Point;

/// Share of the cells, at the highest difficulty, tried by the difficulty adjustment.
const WALL_ADJUST_FRACTION: f64 = 0.1;

/// Above this normalized difficulty, walls are added. At or below, walls are removed.
const ADD_WALLS_ABOVE: f64 = 0.5;

/// Changes made by [`adjust_difficulty`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Adjustment {
    pub walls_added: usize,
    pub walls_removed: usize,
}

/// Result of [`ensure_solvable`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Repair {
    /// The exit was already reachable.
    #[default]
    NotNeeded,

    /// An L-shaped corridor was cleared from the start to the exit; holds the number of wall
    /// cells removed.
    Corridor(usize),
}

/// Add or remove walls according to the normalized difficulty `scale` (between 0 and 1).
///
/// The number of tries is proportional to the grid area and to `scale`.
/// At high difficulty, random empty cells become walls, but only when the exit stays reachable
/// from the start. At low difficulty, random wall cells are cleared.
pub fn adjust_difficulty<R: Rng + ?Sized>(
    grid: &mut Grid,
    start: Point,
    exit: Point,
    scale: f64,
    rng: &mut R,
) -> Adjustment {
    let budget: usize = (grid.area() as f64 * WALL_ADJUST_FRACTION * scale).floor() as usize;
    let mut adjustment: Adjustment = Adjustment::default();

    for _ in 0..budget {
        let p: Point = Point::new(
            rng.random_range(0..grid.width()) as i32,
            rng.random_range(0..grid.height()) as i32,
        );
        if scale > ADD_WALLS_ABOVE {
            if grid.cell_type(p) != Some(CellType::Empty) {
                continue;
            }
            grid.set(p, CellType::Wall);
            if connectivity::is_reachable(grid, start, exit) {
                adjustment.walls_added += 1;
            } else {
                grid.set(p, CellType::Empty);
            }
        } else if grid.cell_type(p) == Some(CellType::Wall) {
            grid.set(p, CellType::Empty);
            adjustment.walls_removed += 1;
        }
    }
    debug!(
        "Difficulty scale {scale}: {budget} tries, {} walls added, {} walls removed",
        adjustment.walls_added, adjustment.walls_removed
    );
    adjustment
}

/// Make sure that the exit is reachable from the start.
///
/// When it is not, wall cells are cleared along the start row toward the exit column, then along
/// the exit column toward the exit row.
pub fn ensure_solvable(grid: &mut Grid, start: Point, exit: Point) -> Repair {
    if connectivity::is_reachable(grid, start, exit) {
        return Repair::NotNeeded;
    }
    warn!("Exit {exit} not reachable from {start}, repairing the maze");
    let cleared: usize = clear_corridor(grid, start, exit);
    debug!("Corridor cleared: {cleared} walls removed");
    Repair::Corridor(cleared)
}

/// Clear the wall cells of the L-shaped corridor from `start` to `exit` and return their number.
pub fn clear_corridor(grid: &mut Grid, start: Point, exit: Point) -> usize {
    let dx: i32 = if exit.x > start.x { 1 } else { -1 };
    let dy: i32 = if exit.y > start.y { 1 } else { -1 };
    let mut cleared: usize = 0;

    let mut x: i32 = start.x;
    while x != exit.x {
        let p: Point = Point::new(x, start.y);
        if grid.cell_type(p) == Some(CellType::Wall) {
            grid.set(p, CellType::Empty);
            cleared += 1;
        }
        x += dx;
    }

    let mut y: i32 = start.y;
    while y != exit.y {
        let p: Point = Point::new(exit.x, y);
        if grid.cell_type(p) == Some(CellType::Wall) {
            grid.set(p, CellType::Empty);
            cleared += 1;
        }
        y += dy;
    }
    cleared
}
