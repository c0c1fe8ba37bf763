/*
grid.rs

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

//! Maze grid model.
//!
//! A [`Grid`] is a rectangle of [`cell::Cell`] objects stored row by row.
//! It has no algorithmic logic: the connectivity oracle, the search engine, and the maze generator
//! all read or update it through the methods below.
//!
//! Grids can be built from an "ASCII art" representation such as:
//!
//! ```text
//! #######
//! #S..#.#
//! #.#.#.#
//! #.#...#
//! #...#E#
//! #######
//! ```
//!
//! - `.` is an empty cell and `#` a wall.
//! - `S` and `E` are the start and the exit.
//! - `K` and `D` are key and door cells.

pub mod cell;
pub mod point;

use log::debug;
use std::error::Error;
use std::fmt;

use self::cell::{Cell, CellType};
use self::point::Point;
use crate::path::Path;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum GridError {
    /// The width or the height is zero.
    EmptyGrid,

    /// The coordinates or the number of cells do not fit the cell storage.
    TooLarge { width: usize, height: usize },

    /// Unknown character in the ASCII representation.
    UnknownCharacter { c: char, x: usize, y: usize },

    /// A row of the ASCII representation does not have the same length as the first row.
    RaggedRow {
        y: usize,
        expected: usize,
        found: usize,
    },

    /// More than one start or exit cell in the ASCII representation.
    DuplicateCell(CellType),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::EmptyGrid => write!(f, "the grid has no cells"),
            GridError::TooLarge { width, height } => {
                write!(f, "{width}x{height} grid is too large")
            }
            GridError::UnknownCharacter { c, x, y } => {
                write!(f, "unknown character '{c}' at ({x},{y})")
            }
            GridError::RaggedRow { y, expected, found } => {
                write!(f, "row {y} has {found} cells instead of {expected}")
            }
            GridError::DuplicateCell(t) => write!(f, "more than one {t} cell"),
        }
    }
}

impl Error for GridError {}

/// Finite 2-D field of typed cells.
///
/// See [`crate::saver::maze::MazeRecord`] for the persisted representation.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,

    /// Cells in row-major order. The cell at index `y * width + x` has coordinates `(x, y)`.
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid where all the cells are empty.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Self::filled(width, height, CellType::Empty)
    }

    /// Create a grid where all the cells have the given type.
    ///
    /// Filling a grid with start or exit cells breaks the grid invariants; use
    /// [`Grid::set_type`] for those.
    pub fn filled(width: usize, height: usize, cell_type: CellType) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        let (Ok(w), Ok(h), Some(area)) = (
            i32::try_from(width),
            i32::try_from(height),
            width.checked_mul(height),
        ) else {
            return Err(GridError::TooLarge { width, height });
        };
        let mut cells: Vec<Cell> = Vec::with_capacity(area);
        for y in 0..h {
            for x in 0..w {
                cells.push(Cell::new(x, y, cell_type));
            }
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a grid from its "ASCII art" representation.
    ///
    /// Blank lines are ignored and trailing spaces are trimmed.
    ///
    /// # Errors
    ///
    /// The method returns an error for unknown characters, rows of different lengths, or several
    /// start or exit cells.
    pub fn from_ascii(source: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = source
            .lines()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .collect();
        let height: usize = rows.len();
        let width: usize = rows.first().map_or(0, |r| r.chars().count());
        let mut grid: Grid = Self::new(width, height)?;
        let mut start_found: bool = false;
        let mut exit_found: bool = false;

        for (y, row) in rows.iter().enumerate() {
            let found: usize = row.chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    y,
                    expected: width,
                    found,
                });
            }
            for (x, c) in row.chars().enumerate() {
                let cell_type: CellType =
                    CellType::from_char(c).ok_or(GridError::UnknownCharacter { c, x, y })?;
                match cell_type {
                    CellType::Start if start_found => {
                        return Err(GridError::DuplicateCell(CellType::Start));
                    }
                    CellType::Exit if exit_found => {
                        return Err(GridError::DuplicateCell(CellType::Exit));
                    }
                    CellType::Start => start_found = true,
                    CellType::Exit => exit_found = true,
                    _ => (),
                }
                grid.cells[y * width + x].cell_type = cell_type;
            }
        }
        Ok(grid)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells.
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            None
        } else {
            Some(y * self.width + x)
        }
    }

    /// Whether the point is inside the grid.
    pub fn contains(&self, p: Point) -> bool {
        self.index(p.x, p.y).is_some()
    }

    /// Get the cell at the given coordinates, or [`None`] when out of range.
    pub fn cell_at(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Get the type of the cell at the given point, or [`None`] when out of range.
    pub fn cell_type(&self, p: Point) -> Option<CellType> {
        self.cell_at(p.x, p.y).map(|c| c.cell_type)
    }

    /// Whether the point is inside the grid and not a wall.
    pub fn is_passable(&self, p: Point) -> bool {
        self.cell_type(p).is_some_and(CellType::is_passable)
    }

    /// Set the type of a cell.
    ///
    /// Setting a start or exit cell first turns any existing cell of that type into an empty
    /// cell, so that a grid never has more than one start and one exit.
    ///
    /// Return `false` when the coordinates are out of range; the grid is then unchanged.
    pub fn set_type(&mut self, x: i32, y: i32, cell_type: CellType) -> bool {
        let Some(i) = self.index(x, y) else {
            return false;
        };
        if matches!(cell_type, CellType::Start | CellType::Exit) {
            for c in self.cells.iter_mut().filter(|c| c.cell_type == cell_type) {
                c.cell_type = CellType::Empty;
            }
        }
        self.cells[i].cell_type = cell_type;
        true
    }

    /// Mutable access to a cell. Callers must keep the single start and exit invariant.
    pub(crate) fn cell_at_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Set the type of the cell at the given point. See [`Grid::set_type`].
    pub fn set(&mut self, p: Point, cell_type: CellType) -> bool {
        self.set_type(p.x, p.y, cell_type)
    }

    /// Clear the transient search flags of every cell.
    pub fn reset_search_state(&mut self) {
        for c in &mut self.cells {
            c.visited = false;
            c.on_path = false;
        }
    }

    /// Turn every cell into an empty, unvisited cell.
    pub fn clear(&mut self) {
        for c in &mut self.cells {
            *c = Cell::new(c.x, c.y, CellType::Empty);
        }
    }

    /// Return the coordinates of all the cells with the given type, in row-major order.
    pub fn find_by_type(&self, cell_type: CellType) -> Vec<Point> {
        self.cells
            .iter()
            .filter(|c| c.cell_type == cell_type)
            .map(Cell::point)
            .collect()
    }

    /// Number of cells with the given type.
    pub fn count(&self, cell_type: CellType) -> usize {
        self.cells
            .iter()
            .filter(|c| c.cell_type == cell_type)
            .count()
    }

    /// Return the start and the exit points, if both are present.
    ///
    /// Searches must not be run when this method returns [`None`].
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        let start: Point = *self.find_by_type(CellType::Start).first()?;
        let exit: Point = *self.find_by_type(CellType::Exit).first()?;
        Some((start, exit))
    }

    /// Passable neighbors of the given point, in expansion order.
    pub fn passable_neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors().into_iter().filter(|n| self.is_passable(*n))
    }

    /// Flag a cell as explored by a search.
    pub fn mark_visited(&mut self, p: Point) {
        if let Some(i) = self.index(p.x, p.y) {
            self.cells[i].visited = true;
        }
    }

    /// Flag all the cells of the path as part of the solution.
    pub fn mark_path(&mut self, path: &Path) {
        for p in path.iter() {
            if let Some(i) = self.index(p.x, p.y) {
                self.cells[i].on_path = true;
            }
        }
    }

    /// Iterate over the cells in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Iterate over the rows, from top to bottom.
    pub fn rows(&self) -> std::slice::Chunks<'_, Cell> {
        self.cells.chunks(self.width)
    }

    /// Return the "ASCII art" representation of the grid.
    ///
    /// With `search_state`, cells on the solution path are drawn as `*` and explored cells as
    /// `o`, except for walls and the start and exit cells.
    pub fn to_ascii(&self, search_state: bool) -> String {
        let mut s: String = String::with_capacity((self.width + 1) * self.height);
        for row in self.rows() {
            for c in row {
                let ch: char = match c.cell_type {
                    CellType::Wall | CellType::Start | CellType::Exit => c.cell_type.to_char(),
                    _ if search_state && c.on_path => '*',
                    _ if search_state && c.visited => 'o',
                    t => t.to_char(),
                };
                s.push(ch);
            }
            s.push('\n');
        }
        s
    }

    /// Print the grid in debug messages.
    pub fn debug(&self) {
        for line in self.to_ascii(true).lines() {
            debug!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_covers_every_coordinate_once() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.area(), 12);
        for (i, c) in grid.iter().enumerate() {
            assert_eq!(c.x as usize, i % 4);
            assert_eq!(c.y as usize, i / 4);
            assert_eq!(c.cell_type, CellType::Empty);
        }
        assert_eq!(Grid::new(0, 3), Err(GridError::EmptyGrid));
    }

    #[test]
    fn oversized_grids_are_rejected() {
        assert_eq!(
            Grid::new(usize::MAX, 2),
            Err(GridError::TooLarge {
                width: usize::MAX,
                height: 2
            })
        );
        let side: usize = i32::MAX as usize + 1;
        assert_eq!(
            Grid::filled(1, side, CellType::Wall),
            Err(GridError::TooLarge {
                width: 1,
                height: side
            })
        );
    }

    #[test]
    fn out_of_range_queries_are_absent() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert!(grid.cell_at(-1, 0).is_none());
        assert!(grid.cell_at(3, 0).is_none());
        assert!(grid.cell_at(0, 3).is_none());
        assert!(grid.cell_at(2, 2).is_some());
        assert!(!grid.set_type(5, 5, CellType::Wall));
        assert_eq!(grid.count(CellType::Wall), 0);
    }

    #[test]
    fn start_and_exit_are_unique() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_type(0, 0, CellType::Start);
        grid.set_type(1, 0, CellType::Exit);
        grid.set_type(4, 4, CellType::Start);
        grid.set_type(3, 3, CellType::Exit);
        grid.set_type(2, 2, CellType::Start);
        assert_eq!(grid.find_by_type(CellType::Start), vec![Point::new(2, 2)]);
        assert_eq!(grid.find_by_type(CellType::Exit), vec![Point::new(3, 3)]);
        assert_eq!(grid.cell_type(Point::new(0, 0)), Some(CellType::Empty));
        assert_eq!(
            grid.endpoints(),
            Some((Point::new(2, 2), Point::new(3, 3)))
        );
    }

    #[test]
    fn overwriting_start_with_wall_removes_it() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_type(1, 1, CellType::Start);
        grid.set_type(1, 1, CellType::Wall);
        assert!(grid.find_by_type(CellType::Start).is_empty());
        assert_eq!(grid.endpoints(), None);
    }

    #[test]
    fn reset_clears_transient_flags() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.mark_visited(Point::new(1, 1));
        grid.mark_path(&Path::from_points(vec![Point::new(0, 0), Point::new(1, 0)]));
        assert!(grid.cell_at(1, 1).unwrap().visited);
        assert!(grid.cell_at(1, 0).unwrap().on_path);
        grid.reset_search_state();
        assert!(grid.iter().all(|c| !c.visited && !c.on_path));
    }

    #[test]
    fn ascii_round_trip() {
        let source = "\
            #####
            #S.K#
            #.#D#
            #..E#
            #####";
        let grid = Grid::from_ascii(source).unwrap();
        assert_eq!((grid.width(), grid.height()), (5, 5));
        assert_eq!(grid.cell_type(Point::new(3, 1)), Some(CellType::Key));
        assert_eq!(grid.cell_type(Point::new(3, 2)), Some(CellType::Door));
        assert_eq!(
            grid.to_ascii(false),
            "#####\n#S.K#\n#.#D#\n#..E#\n#####\n"
        );
    }

    #[test]
    fn ascii_errors() {
        assert_eq!(
            Grid::from_ascii("..\n.x"),
            Err(GridError::UnknownCharacter { c: 'x', x: 1, y: 1 })
        );
        assert_eq!(
            Grid::from_ascii("...\n.."),
            Err(GridError::RaggedRow {
                y: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Grid::from_ascii("S.S"),
            Err(GridError::DuplicateCell(CellType::Start))
        );
        assert_eq!(Grid::from_ascii("\n\n"), Err(GridError::EmptyGrid));
    }

    #[test]
    fn rows_enumerate_top_to_bottom() {
        let grid = Grid::from_ascii("S.\n#E").unwrap();
        let rows: Vec<Vec<CellType>> = grid
            .rows()
            .map(|r| r.iter().map(|c| c.cell_type).collect())
            .collect();
        assert_eq!(
            rows,
            vec![
                vec![CellType::Start, CellType::Empty],
                vec![CellType::Wall, CellType::Exit]
            ]
        );
    }

    #[test]
    fn passable_neighbors_skip_walls_and_borders() {
        let grid = Grid::from_ascii("S#\n..").unwrap();
        let n: Vec<Point> = grid.passable_neighbors(Point::new(0, 0)).collect();
        assert_eq!(n, vec![Point::new(0, 1)]);
    }
}
