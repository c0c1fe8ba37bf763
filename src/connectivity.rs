/*
connectivity.rs

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

//! Breadth-first reachability queries.
//!
//! Walls are impassable; every other cell type, doors included, is passable.
//! Neighbors are expanded in [`DIRECTIONS`](crate::grid::point::DIRECTIONS) order so that the same
//! grid always produces the same shortest path.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::grid::Grid;
use crate::grid::point::Point;
use crate::path::Path;

/// Whether `to` can be reached from `from` without crossing a wall.
pub fn is_reachable(grid: &Grid, from: Point, to: Point) -> bool {
    let mut queue: VecDeque<Point> = VecDeque::from([from]);
    let mut visited: HashSet<Point> = HashSet::from([from]);

    while let Some(current) = queue.pop_front() {
        if current == to {
            return true;
        }
        for n in grid.passable_neighbors(current) {
            if visited.insert(n) {
                queue.push_back(n);
            }
        }
    }
    false
}

/// Return a shortest path from `from` to `to`, both included.
///
/// The path is empty when `to` cannot be reached.
pub fn shortest_path(grid: &Grid, from: Point, to: Point) -> Path {
    let mut queue: VecDeque<Point> = VecDeque::from([from]);
    let mut came_from: HashMap<Point, Point> = HashMap::new();
    let mut visited: HashSet<Point> = HashSet::from([from]);

    while let Some(current) = queue.pop_front() {
        if current == to {
            return reconstruct(&came_from, from, to);
        }
        for n in grid.passable_neighbors(current) {
            if visited.insert(n) {
                came_from.insert(n, current);
                queue.push_back(n);
            }
        }
    }
    Path::new()
}

/// Number of cells reachable from `from`, `from` included.
pub fn reachable_count(grid: &Grid, from: Point) -> usize {
    let mut queue: VecDeque<Point> = VecDeque::from([from]);
    let mut visited: HashSet<Point> = HashSet::from([from]);

    while let Some(current) = queue.pop_front() {
        for n in grid.passable_neighbors(current) {
            if visited.insert(n) {
                queue.push_back(n);
            }
        }
    }
    visited.len()
}

/// Walk the predecessors back from `to` and return the path in forward order.
pub(crate) fn reconstruct(came_from: &HashMap<Point, Point>, from: Point, to: Point) -> Path {
    let mut points: Vec<Point> = vec![to];
    let mut current: Point = to;
    while current != from {
        match came_from.get(&current) {
            Some(p) => {
                current = *p;
                points.push(current);
            }
            None => return Path::new(),
        }
    }
    points.reverse();
    Path::from_points(points)
}
