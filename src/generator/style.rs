/*
style.rs

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

//! Style variations applied after carving.

use log::debug;
use rand::Rng;

use super::options::{MazeGenerationOptions, MazeStyle};
use crate::grid::Grid;
use crate::grid::cell::CellType;
use crate::grid::point::Point;

/// Share of the cells tried for removal in an [`MazeStyle::OpenSpace`] maze.
const OPEN_SPACE_FRACTION: f64 = 0.1;

/// Share of the cells tried for removal in a [`MazeStyle::MazeWithLoops`] maze.
const LOOPS_FRACTION: f64 = 0.05;

/// Key and door pairs per difficulty level in a [`MazeStyle::PuzzleChallenge`] maze.
const PAIRS_PER_DIFFICULTY: f64 = 0.7;

/// Obstacles are not placed when fewer empty cells remain, so that the start and the exit can
/// always be placed.
const MIN_FREE_CELLS: usize = 4;

/// Apply the variation of the requested style and return the number of modified cells.
pub fn apply<R: Rng + ?Sized>(
    grid: &mut Grid,
    options: &MazeGenerationOptions,
    rng: &mut R,
) -> usize {
    let changed: usize = match options.style {
        MazeStyle::Labyrinth => 0,
        MazeStyle::OpenSpace => open_space(grid, rng),
        MazeStyle::MazeWithLoops => add_loops(grid, rng),
        MazeStyle::PuzzleChallenge => place_obstacles(grid, options.difficulty, rng),
    };
    debug!("Style {}: {changed} cells changed", options.style);
    changed
}

/// Number of random tries for the given share of the grid.
fn tries(grid: &Grid, fraction: f64) -> usize {
    (grid.area() as f64 * fraction).ceil() as usize
}

/// Clear random wall cells anywhere in the grid.
fn open_space<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> usize {
    let mut cleared: usize = 0;
    for _ in 0..tries(grid, OPEN_SPACE_FRACTION) {
        let p: Point = Point::new(
            rng.random_range(0..grid.width()) as i32,
            rng.random_range(0..grid.height()) as i32,
        );
        if grid.cell_type(p) == Some(CellType::Wall) {
            grid.set(p, CellType::Empty);
            cleared += 1;
        }
    }
    cleared
}

/// Clear random inner wall cells, which connects corridors and creates loops.
fn add_loops<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> usize {
    let mut cleared: usize = 0;
    for _ in 0..tries(grid, LOOPS_FRACTION) {
        let p: Point = Point::new(
            rng.random_range(1..grid.width() - 1) as i32,
            rng.random_range(1..grid.height() - 1) as i32,
        );
        if grid.cell_type(p) == Some(CellType::Wall) {
            grid.set(p, CellType::Empty);
            cleared += 1;
        }
    }
    cleared
}

/// Place key and door pairs on random empty cells.
fn place_obstacles<R: Rng + ?Sized>(grid: &mut Grid, difficulty: u8, rng: &mut R) -> usize {
    let pairs: usize = (f64::from(difficulty) * PAIRS_PER_DIFFICULTY).floor() as usize;
    let mut placed: usize = 0;
    for _ in 0..pairs {
        for obstacle in [CellType::Key, CellType::Door] {
            let empty: Vec<Point> = grid.find_by_type(CellType::Empty);
            if empty.len() < MIN_FREE_CELLS {
                debug!("Only {} empty cells left, no more obstacles", empty.len());
                return placed;
            }
            let p: Point = empty[rng.random_range(0..empty.len())];
            grid.set(p, obstacle);
            placed += 1;
        }
    }
    placed
}
