/*
lib.rs

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

//! Maze pathfinding and generation engine.
//!
//! * [`grid`]: the rectangular grid of typed cells, with its ASCII representation.
//! * [`connectivity`]: reachability and shortest route between two cells.
//! * [`search`]: step-wise path search strategies and their drivers.
//! * [`metrics`]: metrics of an algorithm run.
//! * [`generator`]: random, always solvable, maze generation.
//! * [`saver`]: persisted maze records.
//!
//! # Examples
//!
//! ```
//! use mazelab::generator::maze_generator;
//! use mazelab::generator::options::{MazeGenerationOptions, MazeStyle};
//! use mazelab::search::{Algorithm, SearchOptions};
//!
//! let options = MazeGenerationOptions {
//!     seed: Some(42),
//!     ..MazeGenerationOptions::new(MazeStyle::MazeWithLoops, 3, 15, 15)
//! };
//! let grid = maze_generator::generate(&options).unwrap();
//! let (start, exit) = grid.endpoints().unwrap();
//! let result = Algorithm::AStar.run(&grid, start, exit, |_| (), |_| (), &SearchOptions::default());
//! assert!(result.found());
//! ```

pub mod connectivity;
pub mod generator;
pub mod grid;
pub mod metrics;
pub mod path;
pub mod saver;
pub mod search;
