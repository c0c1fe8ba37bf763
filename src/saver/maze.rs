/*
maze.rs

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

//! Save and restore maze designs.
//!
//! A maze is exchanged with the storage layer as a [`MazeRecord`], serialized in JSON by using
//! [`serde`]:
//!
//! ```json
//! {
//!   "id": 3,
//!   "name": "Corner run",
//!   "isPublic": true,
//!   "gridSize": 10,
//!   "cells": [{"x": 0, "y": 0, "type": "wall"}, {"x": 1, "y": 0, "type": "empty"}],
//!   "createdAt": "2025-05-04T10:12:00+00:00"
//! }
//! ```
//!
//! The `cells` list covers every coordinate of the `gridSize` x `gridSize` square exactly once.

use chrono::{DateTime, FixedOffset, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::grid::Grid;
use crate::grid::cell::{Cell, CellType};

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum RecordError {
    /// Records only describe square grids.
    NotSquare { width: usize, height: usize },

    /// The grid size is zero.
    EmptyGrid,

    /// The number of cells does not match the grid size.
    CellCount { expected: Option<usize>, found: usize },

    /// A cell is outside the grid.
    OutOfRange { x: i32, y: i32 },

    /// Two cells have the same coordinates.
    DuplicateCoordinate { x: i32, y: i32 },

    /// No cell for these coordinates.
    MissingCoordinate { x: i32, y: i32 },

    /// More than one start or exit cell.
    DuplicateCell(CellType),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RecordError::NotSquare { width, height } => {
                write!(f, "{width}x{height} grid is not square")
            }
            RecordError::EmptyGrid => write!(f, "the grid size is zero"),
            RecordError::CellCount {
                expected: Some(expected),
                found,
            } => write!(f, "{found} cells listed instead of {expected}"),
            RecordError::CellCount {
                expected: None,
                found,
            } => write!(f, "{found} cells listed for a grid size that is too large"),
            RecordError::OutOfRange { x, y } => write!(f, "cell ({x},{y}) is outside the grid"),
            RecordError::DuplicateCoordinate { x, y } => {
                write!(f, "cell ({x},{y}) is listed more than once")
            }
            RecordError::MissingCoordinate { x, y } => write!(f, "cell ({x},{y}) is missing"),
            RecordError::DuplicateCell(t) => write!(f, "more than one {t} cell"),
        }
    }
}

impl Error for RecordError {}

/// Difficulty rating of a maze, from its size.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum DifficultyLevel {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DifficultyLevel::Easy => write!(f, "Easy"),
            DifficultyLevel::Medium => write!(f, "Medium"),
            DifficultyLevel::Hard => write!(f, "Hard"),
            DifficultyLevel::Expert => write!(f, "Expert"),
        }
    }
}

/// Persisted cell.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CellRecord {
    pub x: i32,
    pub y: i32,

    #[serde(rename = "type")]
    pub cell_type: CellType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visited: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<bool>,
}

impl From<&Cell> for CellRecord {
    fn from(c: &Cell) -> Self {
        Self {
            x: c.x,
            y: c.y,
            cell_type: c.cell_type,
            visited: c.visited.then_some(true),
            path: c.on_path.then_some(true),
        }
    }
}

/// Persisted maze.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MazeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub is_public: bool,

    /// Width and height of the grid.
    pub grid_size: usize,

    /// Every cell of the grid, in any order.
    pub cells: Vec<CellRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,

    /// Creation time, in RFC 3339 format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl MazeRecord {
    /// Create a private record for the given grid, stamped with the current time.
    ///
    /// # Errors
    ///
    /// The method returns an error if the grid is not square.
    pub fn from_grid(name: &str, grid: &Grid) -> Result<Self, RecordError> {
        if grid.width() != grid.height() {
            return Err(RecordError::NotSquare {
                width: grid.width(),
                height: grid.height(),
            });
        }
        Ok(Self {
            id: None,
            name: name.to_string(),
            description: None,
            is_public: false,
            grid_size: grid.width(),
            cells: grid.iter().map(CellRecord::from).collect(),
            user_id: None,
            created_at: Some(Utc::now().to_rfc3339()),
        })
    }

    /// Build the grid described by the record.
    ///
    /// # Errors
    ///
    /// The method returns an error if the number of cells is not `gridSize` squared, if the cells
    /// do not cover every coordinate exactly once, or if there are several start or exit cells.
    /// The cell count is checked before anything is allocated.
    pub fn to_grid(&self) -> Result<Grid, RecordError> {
        let size: usize = self.grid_size;
        let expected: Option<usize> = size.checked_mul(size);
        if expected != Some(self.cells.len()) {
            return Err(RecordError::CellCount {
                expected,
                found: self.cells.len(),
            });
        }
        let mut grid: Grid = Grid::new(size, size).map_err(|_| RecordError::EmptyGrid)?;
        let mut seen: Vec<bool> = vec![false; size * size];
        let mut start_found: bool = false;
        let mut exit_found: bool = false;

        for r in &self.cells {
            let Some(cell) = grid.cell_at_mut(r.x, r.y) else {
                return Err(RecordError::OutOfRange { x: r.x, y: r.y });
            };
            let i: usize = r.y as usize * size + r.x as usize;
            if seen[i] {
                return Err(RecordError::DuplicateCoordinate { x: r.x, y: r.y });
            }
            seen[i] = true;

            match r.cell_type {
                CellType::Start if start_found => {
                    return Err(RecordError::DuplicateCell(CellType::Start));
                }
                CellType::Exit if exit_found => {
                    return Err(RecordError::DuplicateCell(CellType::Exit));
                }
                CellType::Start => start_found = true,
                CellType::Exit => exit_found = true,
                _ => (),
            }
            cell.cell_type = r.cell_type;
            cell.visited = r.visited.unwrap_or(false);
            cell.on_path = r.path.unwrap_or(false);
        }

        if let Some(i) = seen.iter().position(|s| !s) {
            return Err(RecordError::MissingCoordinate {
                x: (i % size) as i32,
                y: (i / size) as i32,
            });
        }
        Ok(grid)
    }

    /// Difficulty rating from the grid size.
    pub fn difficulty_level(&self) -> DifficultyLevel {
        match self.grid_size {
            0..=10 => DifficultyLevel::Easy,
            11..=15 => DifficultyLevel::Medium,
            16..=20 => DifficultyLevel::Hard,
            _ => DifficultyLevel::Expert,
        }
    }

    /// Parsed creation time, if present and valid.
    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        self.created_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
    }
}

/// Object to save and restore a maze record.
pub struct SaverMaze {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverMaze {
    /// Create a [`SaverMaze`] object for the given JSON file.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("Maze file: {save_file:?}");
        Self { save_file }
    }

    /// Retrieve the saved [`MazeRecord`] object.
    ///
    /// Return None if the file does not exist.
    pub fn get_maze(&self) -> Result<Option<MazeRecord>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let record: MazeRecord = serde_json::from_reader(reader)?;
        Ok(Some(record))
    }

    /// Save the provided [`MazeRecord`] object.
    pub fn save_maze(&self, record: &MazeRecord) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, record)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the saved maze.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::point::Point;
    use crate::path::Path;

    fn sample() -> Grid {
        Grid::from_ascii(
            "\
            S.#
            .D#
            .KE",
        )
        .unwrap()
    }

    #[test]
    fn record_round_trip_keeps_types_and_flags() {
        let mut grid = sample();
        grid.mark_visited(Point::new(1, 0));
        grid.mark_path(&Path::from_points(vec![Point::new(0, 0), Point::new(0, 1)]));
        let record = MazeRecord::from_grid("sample", &grid).unwrap();
        assert_eq!(record.cells.len(), 9);
        assert_eq!(record.grid_size, 3);
        assert!(record.created_at().is_some());
        assert_eq!(record.to_grid().unwrap(), grid);
    }

    #[test]
    fn json_uses_camel_case_and_skips_unset_flags() {
        let record = MazeRecord::from_grid("sample", &sample()).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["gridSize"], 3);
        assert_eq!(json["isPublic"], false);
        assert_eq!(json["cells"][0]["type"], "start");
        assert!(json["cells"][0].get("visited").is_none());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn parses_external_records() {
        let json = r#"{
            "id": 4, "name": "tiny", "isPublic": true, "gridSize": 2,
            "cells": [
                {"x": 1, "y": 1, "type": "exit"},
                {"x": 0, "y": 0, "type": "start", "visited": true},
                {"x": 1, "y": 0, "type": "door", "path": false},
                {"x": 0, "y": 1, "type": "wall"}
            ],
            "createdAt": "2025-05-04T10:12:00+00:00"
        }"#;
        let record: MazeRecord = serde_json::from_str(json).unwrap();
        let grid = record.to_grid().unwrap();
        assert_eq!(grid.endpoints(), Some((Point::new(0, 0), Point::new(1, 1))));
        assert!(grid.cell_at(0, 0).unwrap().visited);
        assert_eq!(grid.cell_type(Point::new(1, 0)), Some(CellType::Door));
        assert_eq!(record.difficulty_level(), DifficultyLevel::Easy);
    }

    #[test]
    fn invalid_records() {
        let mut record = MazeRecord::from_grid("sample", &sample()).unwrap();
        let last = record.cells.pop().unwrap();
        assert_eq!(
            record.to_grid(),
            Err(RecordError::CellCount {
                expected: Some(9),
                found: 8
            })
        );
        record.cells.push(record.cells[0]);
        assert_eq!(
            record.to_grid(),
            Err(RecordError::DuplicateCoordinate { x: 0, y: 0 })
        );
        *record.cells.last_mut().unwrap() = last;
        assert!(record.to_grid().is_ok());

        let mut record = MazeRecord::from_grid("sample", &sample()).unwrap();
        record.cells[1] = record.cells[0];
        assert_eq!(
            record.to_grid(),
            Err(RecordError::DuplicateCoordinate { x: 0, y: 0 })
        );

        let mut record = MazeRecord::from_grid("sample", &sample()).unwrap();
        record.cells[1].cell_type = CellType::Exit;
        assert_eq!(
            record.to_grid(),
            Err(RecordError::DuplicateCell(CellType::Exit))
        );

        let mut record = MazeRecord::from_grid("sample", &sample()).unwrap();
        record.cells[4].x = 7;
        assert_eq!(record.to_grid(), Err(RecordError::OutOfRange { x: 7, y: 1 }));

        let wide = Grid::new(4, 3).unwrap();
        assert_eq!(
            MazeRecord::from_grid("wide", &wide),
            Err(RecordError::NotSquare {
                width: 4,
                height: 3
            })
        );
    }

    #[test]
    fn huge_grid_size_is_rejected_before_allocating() {
        let json = r#"{"name": "x", "isPublic": false, "gridSize": 4294967296,
            "cells": [{"x": 0, "y": 0, "type": "start"}]}"#;
        let record: MazeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            record.to_grid(),
            Err(RecordError::CellCount {
                expected: None,
                found: 1
            })
        );

        let mut record: MazeRecord = serde_json::from_str(json).unwrap();
        record.grid_size = 100_000;
        assert_eq!(
            record.to_grid(),
            Err(RecordError::CellCount {
                expected: Some(10_000_000_000),
                found: 1
            })
        );

        record.grid_size = 0;
        record.cells.clear();
        assert_eq!(record.to_grid(), Err(RecordError::EmptyGrid));
    }

    #[test]
    fn difficulty_levels_follow_size() {
        let mut record = MazeRecord::from_grid("sample", &sample()).unwrap();
        for (size, level) in [
            (10, DifficultyLevel::Easy),
            (15, DifficultyLevel::Medium),
            (20, DifficultyLevel::Hard),
            (21, DifficultyLevel::Expert),
        ] {
            record.grid_size = size;
            assert_eq!(record.difficulty_level(), level);
        }
    }

    #[test]
    fn saver_round_trip() {
        let mut file = std::env::temp_dir();
        file.push(format!("mazelab-test-{}.json", std::process::id()));
        let saver = SaverMaze::new(file);
        saver.delete_save();
        assert!(saver.get_maze().unwrap().is_none());

        let record = MazeRecord::from_grid("saved", &sample()).unwrap();
        saver.save_maze(&record).unwrap();
        assert_eq!(saver.get_maze().unwrap(), Some(record));
        saver.delete_save();
    }
}
