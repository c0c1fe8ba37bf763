/*
neural.rs

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

//! "Neural pathfinding" strategy.
//!
//! The strategy is presented to users as a learned heuristic. It runs the [`best_first`] search
//! unchanged, so it returns the same shortest path and the same trace, and reports a computation
//! time scaled by [`TIME_SCALE`].

use log::info;
use std::time::Duration;

use super::best_first;
use super::{SearchOptions, SearchResult};
use crate::grid::Grid;
use crate::grid::point::Point;
use crate::path::Path;

/// Factor applied to the computation time of the underlying best-first search.
pub const TIME_SCALE: f64 = 0.8;

/// Scale a best-first computation time into the time reported by this strategy.
pub fn scale_elapsed(elapsed: Duration) -> Duration {
    elapsed.mul_f64(TIME_SCALE)
}

/// Run the strategy from `start` to `exit`.
///
/// The grid must contain `start` and `exit`.
pub fn run(
    grid: &Grid,
    start: Point,
    exit: Point,
    on_visit: impl FnMut(Point),
    on_path_found: impl FnMut(&Path),
    options: &SearchOptions,
) -> SearchResult {
    let mut result: SearchResult =
        best_first::run(grid, start, exit, on_visit, on_path_found, options);
    result.elapsed = scale_elapsed(result.elapsed);
    info!(
        "Neural pathfinding {start} -> {exit}: reported time {:.3}ms",
        result.elapsed_ms()
    );
    result
}
