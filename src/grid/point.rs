/*
point.rs

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

//! Coordinates in the maze grid.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Neighbor expansion order shared by every search: `+x`, `+y`, `-x`, `-y`.
///
/// Keeping a single fixed order makes the connectivity queries and the best-first search return
/// the same path for the same grid when several shortest paths exist.
pub const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// A coordinate pair.
///
/// Coordinates are signed so that probing the neighbors of a border cell does not underflow; the
/// grid simply reports those points as absent.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a [`Point`] object.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return the point moved by the given offset.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Manhattan distance between two points.
    pub fn manhattan(self, other: Point) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The four orthogonal neighbors, in [`DIRECTIONS`] order.
    ///
    /// Some of them might be outside the grid.
    pub fn neighbors(self) -> [Point; 4] {
        DIRECTIONS.map(|(dx, dy)| self.offset(dx, dy))
    }

    /// Whether the two points are orthogonally adjacent.
    pub fn is_adjacent(self, other: Point) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(i32, i32)> for Point {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
