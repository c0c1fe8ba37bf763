/*
best_first.rs

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

//! Best-first (A*) search.
//!
//! The estimated total cost of a frontier cell is its distance from the start plus its Manhattan
//! distance to the exit. With unit moves in four directions the Manhattan distance never
//! overestimates, so the first time the exit is finalized its path is a shortest one.

use log::{debug, info};
use std::collections::{HashMap, HashSet, VecDeque};

use super::{SearchEvent, SearchOptions, SearchResult, Searcher};
use crate::connectivity;
use crate::grid::Grid;
use crate::grid::point::Point;
use crate::path::Path;

/// [`BestFirst`] searcher.
pub struct BestFirst<'a> {
    grid: &'a Grid,
    start: Point,
    exit: Point,

    /// Frontier cells.
    /// The vector is stably sorted by estimated total cost before each selection, so ties go to
    /// the cell that was first in the vector.
    open: Vec<Point>,

    /// Finalized cells.
    closed: HashSet<Point>,

    /// Number of moves from the start.
    cost: HashMap<Point, u32>,

    /// Cost from the start plus the Manhattan distance to the exit.
    estimate: HashMap<Point, u32>,

    /// Predecessor of each discovered cell on its best known path.
    came_from: HashMap<Point, Point>,

    /// Events produced but not yet returned by [`Searcher::step`].
    pending: VecDeque<SearchEvent>,

    finished: bool,
}

impl<'a> BestFirst<'a> {
    /// Create the searcher. The grid must contain `start` and `exit`.
    pub fn new(grid: &'a Grid, start: Point, exit: Point) -> Self {
        debug_assert!(grid.contains(start) && grid.contains(exit));
        Self {
            grid,
            start,
            exit,
            open: vec![start],
            closed: HashSet::new(),
            cost: HashMap::from([(start, 0)]),
            estimate: HashMap::from([(start, start.manhattan(exit))]),
            came_from: HashMap::new(),
            pending: VecDeque::new(),
            finished: false,
        }
    }

    /// Select the next frontier cell, finalize it, and expand its neighbors.
    fn advance(&mut self) {
        if self.open.is_empty() {
            debug!(
                "Open set exhausted after {} cells: no path to {}",
                self.closed.len(),
                self.exit
            );
            self.finished = true;
            self.pending.push_back(SearchEvent::NoPath);
            return;
        }

        let estimate: &HashMap<Point, u32> = &self.estimate;
        self.open
            .sort_by_key(|p| estimate.get(p).copied().unwrap_or(u32::MAX));
        let current: Point = self.open.remove(0);
        self.closed.insert(current);
        self.pending.push_back(SearchEvent::Visit(current));

        if current == self.exit {
            let path: Path = connectivity::reconstruct(&self.came_from, self.start, self.exit);
            debug!(
                "Exit {} reached: {} cells in path, {} cells closed",
                self.exit,
                path.len(),
                self.closed.len()
            );
            self.finished = true;
            self.pending.push_back(SearchEvent::PathFound(path));
            return;
        }

        let grid: &Grid = self.grid;
        let current_cost: u32 = self.cost.get(&current).copied().unwrap_or(0);
        for n in grid.passable_neighbors(current) {
            if self.closed.contains(&n) {
                continue;
            }
            let tentative: u32 = current_cost + 1;
            if !self.open.contains(&n) {
                self.open.push(n);
            } else if tentative >= self.cost.get(&n).copied().unwrap_or(u32::MAX) {
                continue;
            }
            self.came_from.insert(n, current);
            self.cost.insert(n, tentative);
            self.estimate.insert(n, tentative + n.manhattan(self.exit));
        }
    }
}

impl Searcher for BestFirst<'_> {
    fn step(&mut self) -> Option<SearchEvent> {
        if self.pending.is_empty() && !self.finished {
            self.advance();
        }
        self.pending.pop_front()
    }

    fn visited_count(&self) -> usize {
        self.closed.len()
    }
}

/// Run the best-first search from `start` to `exit`.
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
    let mut searcher: BestFirst = BestFirst::new(grid, start, exit);
    let result: SearchResult = super::drive(&mut searcher, on_visit, on_path_found, options);
    info!(
        "A* search {start} -> {exit}: {:?}, path length {}, {} cells visited in {:.3}ms",
        result.outcome,
        result.path.len(),
        result.visited_count,
        result.elapsed_ms()
    );
    result
}
