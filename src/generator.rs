/*
generator.rs

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

//! Generate random mazes.
//!
//! A [`maze_generator::MazeGenerator`] object runs the following steps, all driven by a single
//! random number generator so that a seed reproduces the same maze:
//!
//! 1. Fill the grid with walls.
//! 2. Carve a spanning tree of corridors ([`carve`]).
//! 3. Apply the variation of the requested [`options::MazeStyle`] ([`style`]): open space, loops,
//!    or key and door obstacles.
//! 4. Place the start and the exit, on the inward corners when possible ([`placement`]).
//! 5. Add walls (high difficulty) without breaking the route from the start to the exit, or remove
//!    walls (low difficulty) ([`solvability::adjust_difficulty`]).
//! 6. Verify that the exit is reachable and, if not, clear a corridor to it
//!    ([`solvability::ensure_solvable`]).
//!
//! The generator never returns an unsolvable maze.

pub mod carve;
pub mod maze_generator;
pub mod options;
pub mod placement;
pub mod solvability;
pub mod style;
