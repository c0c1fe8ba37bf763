/*
placement.rs

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

//! Placement of the start and exit cells.

use log::debug;
use rand::Rng;

use super::options::GeneratorError;
use crate::grid::Grid;
use crate::grid::cell::CellType;
use crate::grid::point::Point;

/// Place the start and the exit on empty cells and return their positions.
///
/// The inward corners (one cell away from the borders) are tried first, in the top-left,
/// top-right, bottom-left, bottom-right order: the first empty corner gets the start and the next
/// one the exit.
/// When the corners are taken by walls or obstacles, random empty cells are used instead, with an
/// exit farther than half the smaller side of the grid from the start when such a cell exists, and
/// the farthest empty cell otherwise.
pub fn place_endpoints<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
) -> Result<(Point, Point), GeneratorError> {
    let right: i32 = grid.width() as i32 - 2;
    let bottom: i32 = grid.height() as i32 - 2;
    let corners: [Point; 4] = [
        Point::new(1, 1),
        Point::new(right, 1),
        Point::new(1, bottom),
        Point::new(right, bottom),
    ];

    let mut start: Option<Point> = None;
    let mut exit: Option<Point> = None;
    for corner in corners {
        if grid.cell_type(corner) != Some(CellType::Empty) {
            continue;
        }
        if start.is_none() {
            grid.set(corner, CellType::Start);
            start = Some(corner);
        } else if exit.is_none() {
            grid.set(corner, CellType::Exit);
            exit = Some(corner);
            break;
        }
    }

    let start: Point = match start {
        Some(p) => p,
        None => {
            let empty: Vec<Point> = grid.find_by_type(CellType::Empty);
            if empty.is_empty() {
                return Err(GeneratorError::NoRoom);
            }
            let p: Point = empty[rng.random_range(0..empty.len())];
            debug!("No free corner for the start, using {p}");
            grid.set(p, CellType::Start);
            p
        }
    };

    let exit: Point = match exit {
        Some(p) => p,
        None => {
            let p: Point = random_far_cell(grid, start, rng).ok_or(GeneratorError::NoRoom)?;
            debug!("No free corner for the exit, using {p}");
            grid.set(p, CellType::Exit);
            p
        }
    };

    Ok((start, exit))
}

/// Pick a random empty cell farther than half the smaller side of the grid from `from`, or the
/// farthest empty cell when none is that far.
fn random_far_cell<R: Rng + ?Sized>(grid: &Grid, from: Point, rng: &mut R) -> Option<Point> {
    let min_distance: f64 = grid.width().min(grid.height()) as f64 / 2.0;
    let empty: Vec<Point> = grid.find_by_type(CellType::Empty);
    let far: Vec<Point> = empty
        .iter()
        .copied()
        .filter(|p| f64::from(p.manhattan(from)) > min_distance)
        .collect();
    if far.is_empty() {
        empty.into_iter().max_by_key(|p| p.manhattan(from))
    } else {
        Some(far[rng.random_range(0..far.len())])
    }
}
