/*
carve.rs

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

//! Randomized depth-first carving.
//!
//! Carving works on the lattice of cells with odd coordinates: moving two cells at a time leaves a
//! wall ridge between parallel corridors. Each carved lattice cell is linked to the cell it was
//! reached from by clearing the wall cell between them, so the carved cells form a spanning tree
//! and all of them are connected.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::grid::Grid;
use crate::grid::cell::CellType;
use crate::grid::point::Point;

/// Moves between lattice cells.
const CARVE_DIRECTIONS: [(i32, i32); 4] = [(2, 0), (0, 2), (-2, 0), (0, -2)];

/// A lattice cell being carved, with its shuffled directions and the next one to try.
struct Frame {
    cell: Point,
    directions: [(i32, i32); 4],
    next: usize,
}

impl Frame {
    fn new<R: Rng + ?Sized>(cell: Point, rng: &mut R) -> Self {
        let mut directions: [(i32, i32); 4] = CARVE_DIRECTIONS;
        directions.shuffle(rng);
        Self {
            cell,
            directions,
            next: 0,
        }
    }
}

/// Pick a random lattice cell to start carving from.
pub fn random_origin<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Point {
    let x: usize = rng.random_range(0..(grid.width() / 2).max(1)) * 2 + 1;
    let y: usize = rng.random_range(0..(grid.height() / 2).max(1)) * 2 + 1;
    Point::new(x as i32, y as i32)
}

/// Carve passages from `origin` into the wall cells of the grid and return the number of lattice
/// cells carved.
///
/// At each cell the four directions are shuffled and tried in turn; a direction is followed when
/// its target is inside the grid and still a wall. The frames are kept on an explicit stack, which
/// visits the cells in the same order as a recursive implementation without its depth limit.
pub fn carve<R: Rng + ?Sized>(grid: &mut Grid, origin: Point, rng: &mut R) -> usize {
    let mut carved: usize = 1;
    grid.set(origin, CellType::Empty);
    let mut stack: Vec<Frame> = vec![Frame::new(origin, rng)];

    while let Some(frame) = stack.last_mut() {
        if frame.next >= frame.directions.len() {
            stack.pop();
            continue;
        }
        let (dx, dy) = frame.directions[frame.next];
        frame.next += 1;
        let cell: Point = frame.cell;
        let target: Point = cell.offset(dx, dy);

        if grid.cell_type(target) == Some(CellType::Wall) {
            grid.set(cell.offset(dx / 2, dy / 2), CellType::Empty);
            grid.set(target, CellType::Empty);
            carved += 1;
            stack.push(Frame::new(target, rng));
        }
    }
    debug!("Carved {carved} lattice cells from {origin}");
    carved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectivity;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn carves_every_lattice_cell() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut grid = Grid::filled(11, 9, CellType::Wall).unwrap();
        let origin = random_origin(&grid, &mut rng);
        assert!(origin.x % 2 == 1 && origin.y % 2 == 1);
        let carved = carve(&mut grid, origin, &mut rng);
        // 5 x 4 odd coordinates
        assert_eq!(carved, 20);
        for y in (1..9).step_by(2) {
            for x in (1..11).step_by(2) {
                let p = Point::new(x, y);
                assert_eq!(grid.cell_type(p), Some(CellType::Empty));
                assert!(connectivity::is_reachable(&grid, origin, p));
            }
        }
    }

    #[test]
    fn spanning_tree_has_no_cycles() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut grid = Grid::filled(9, 9, CellType::Wall).unwrap();
        let origin = Point::new(1, 1);
        let carved = carve(&mut grid, origin, &mut rng);
        // A tree over n lattice cells has n - 1 connecting cells
        assert_eq!(grid.count(CellType::Empty), carved + carved - 1);
        // Even coordinates on both axes are never carved
        assert_eq!(grid.cell_type(Point::new(2, 2)), Some(CellType::Wall));
    }

    #[test]
    fn same_seed_same_maze() {
        let build = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut grid = Grid::filled(15, 15, CellType::Wall).unwrap();
            carve(&mut grid, Point::new(7, 7), &mut rng);
            grid
        };
        assert_eq!(build(42), build(42));
    }
}
