/*
path.rs

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

//! Path through the maze grid.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::grid::Grid;
use crate::grid::point::Point;

/// Path object.
///
/// An ordered list of points, from the start to the exit when produced by a successful search.
/// An empty path means that no solution exists.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(from = "Vec<Point>", into = "Vec<Point>")]
pub struct Path {
    /// Path as an ordered list of points.
    path: Vec<Point>,

    /// Stores the membership of the points.
    /// Instead of looking for the point in the [`Path::path`] vector, this
    /// [`std::collections::HashSet`] speeds up the lookup.
    members: HashSet<Point>,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl From<Vec<Point>> for Path {
    fn from(points: Vec<Point>) -> Self {
        Self::from_points(points)
    }
}

impl From<Path> for Vec<Point> {
    fn from(path: Path) -> Self {
        path.path
    }
}

impl Path {
    /// Create an empty [`Path`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a [`Path`] object from a vector.
    pub fn from_points(points: Vec<Point>) -> Self {
        let members: HashSet<Point> = points.iter().copied().collect();
        Self {
            path: points,
            members,
        }
    }

    /// Add a point to the path.
    pub fn push(&mut self, p: Point) {
        self.path.push(p);
        self.members.insert(p);
    }

    /// Remove the last point from the path and return it.
    pub fn pop(&mut self) -> Option<Point> {
        let p: Point = self.path.pop()?;
        if !self.path.contains(&p) {
            self.members.remove(&p);
        }
        Some(p)
    }

    /// Get the number of points in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the path has no points (no solution).
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of moves from the first to the last point.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Whether the point is in the path or not.
    pub fn contains(&self, p: Point) -> bool {
        self.members.contains(&p)
    }

    /// Return the path as a slice.
    pub fn get(&self) -> &[Point] {
        &self.path
    }

    /// Iterate over the points, from the first to the last.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.path.iter()
    }

    /// Return the first point in the path.
    pub fn get_first(&self) -> Option<Point> {
        self.path.first().copied()
    }

    /// Return the last point in the path.
    pub fn get_last(&self) -> Option<Point> {
        self.path.last().copied()
    }

    /// Whether each consecutive pair of points is adjacent and every point is passable in the
    /// given grid.
    pub fn is_walkable(&self, grid: &Grid) -> bool {
        self.path.iter().all(|p| grid.is_passable(*p))
            && self.path.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }
}
