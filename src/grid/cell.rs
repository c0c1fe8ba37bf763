/*
cell.rs

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

//! Cells of the maze grid.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

use super::point::Point;

/// Terrain of a cell.
///
/// - `Wall` cells are impassable.
/// - `Key` and `Door` cells are plain passable terrain: no search or generation logic makes a
///   door depend on a collected key.
/// - At most one `Start` and one `Exit` cell exist in a grid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash, FromRepr)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum CellType {
    #[default]
    Empty,
    Wall,
    Start,
    Exit,
    Key,
    Door,
}

impl CellType {
    /// Whether searches can walk through a cell of this type.
    pub fn is_passable(self) -> bool {
        self != CellType::Wall
    }

    /// Character used in the ASCII representation of a grid.
    pub fn to_char(self) -> char {
        match self {
            CellType::Empty => '.',
            CellType::Wall => '#',
            CellType::Start => 'S',
            CellType::Exit => 'E',
            CellType::Key => 'K',
            CellType::Door => 'D',
        }
    }

    /// Parse a character from the ASCII representation of a grid.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(CellType::Empty),
            '#' => Some(CellType::Wall),
            'S' | 's' => Some(CellType::Start),
            'E' | 'e' => Some(CellType::Exit),
            'K' | 'k' => Some(CellType::Key),
            'D' | 'd' => Some(CellType::Door),
            _ => None,
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CellType::Empty => write!(f, "empty"),
            CellType::Wall => write!(f, "wall"),
            CellType::Start => write!(f, "start"),
            CellType::Exit => write!(f, "exit"),
            CellType::Key => write!(f, "key"),
            CellType::Door => write!(f, "door"),
        }
    }
}

/// One grid position.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub x: i32,
    pub y: i32,

    /// Terrain type.
    #[serde(rename = "type")]
    pub cell_type: CellType,

    /// Whether the search engine explored the cell.
    /// Transient: cleared by [`super::Grid::reset_search_state`].
    pub visited: bool,

    /// Whether the cell is part of the emitted solution.
    /// Transient: cleared by [`super::Grid::reset_search_state`].
    pub on_path: bool,
}

impl Cell {
    /// Create an unvisited [`Cell`] object.
    pub fn new(x: i32, y: i32, cell_type: CellType) -> Self {
        Self {
            x,
            y,
            cell_type,
            visited: false,
            on_path: false,
        }
    }

    /// Coordinates of the cell.
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chars_map_back_to_types() {
        for i in 0..6u8 {
            let t = CellType::from_repr(i).unwrap();
            assert_eq!(CellType::from_char(t.to_char()), Some(t));
        }
        assert_eq!(CellType::from_repr(6), None);
        assert_eq!(CellType::from_char('?'), None);
    }

    #[test]
    fn only_walls_block() {
        assert!(!CellType::Wall.is_passable());
        assert!(CellType::Door.is_passable());
        assert!(CellType::Key.is_passable());
        assert!(CellType::Exit.is_passable());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&CellType::Door).unwrap();
        assert_eq!(json, "\"door\"");
    }
}
