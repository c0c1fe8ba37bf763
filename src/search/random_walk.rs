/*
random_walk.rs

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

//! Random walk with backtracking.
//!
//! The walker explores without a map: from its current cell it moves to a random unvisited
//! neighbor, and steps back along its own trail when it is stuck.
//! The trail from the start to the exit is the returned path, so the path is usually much longer
//! than the shortest one.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashSet, VecDeque};

use super::{SearchEvent, SearchOptions, SearchResult, Searcher};
use crate::grid::Grid;
use crate::grid::point::Point;
use crate::path::Path;

/// [`RandomWalk`] searcher.
pub struct RandomWalk<'a> {
    grid: &'a Grid,
    exit: Point,
    rng: StdRng,

    /// Cells already visited, the start included.
    visited: HashSet<Point>,

    /// Current trail. The last point is the position of the walker.
    trail: Path,

    /// Number of steps (moves and backtracks) performed.
    steps: usize,
    max_steps: usize,

    /// Events produced but not yet returned by [`Searcher::step`].
    pending: VecDeque<SearchEvent>,

    finished: bool,
}

impl<'a> RandomWalk<'a> {
    /// Create the searcher.
    ///
    /// The walk is reproducible when [`SearchOptions::seed`] is set.
    pub fn new(grid: &'a Grid, start: Point, exit: Point, options: &SearchOptions) -> Self {
        debug_assert!(grid.contains(start) && grid.contains(exit));
        let rng: StdRng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let mut trail: Path = Path::new();
        trail.push(start);
        Self {
            grid,
            exit,
            rng,
            visited: HashSet::from([start]),
            trail,
            steps: 0,
            max_steps: options.max_steps,
            pending: VecDeque::new(),
            finished: false,
        }
    }

    /// Number of steps performed so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    fn advance(&mut self) {
        let Some(current) = self.trail.get_last() else {
            self.finished = true;
            self.pending.push_back(SearchEvent::NoPath);
            return;
        };

        if current == self.exit {
            debug!(
                "Exit {} reached after {} steps, trail of {} cells",
                self.exit,
                self.steps,
                self.trail.len()
            );
            self.finished = true;
            self.pending
                .push_back(SearchEvent::PathFound(self.trail.clone()));
            return;
        }

        if self.steps >= self.max_steps {
            debug!("Giving up after {} steps", self.steps);
            self.finished = true;
            self.pending.push_back(SearchEvent::StepLimit);
            return;
        }
        self.steps += 1;

        let candidates: Vec<Point> = self
            .grid
            .passable_neighbors(current)
            .filter(|n| !self.visited.contains(n))
            .collect();

        if !candidates.is_empty() {
            let next: Point = candidates[self.rng.random_range(0..candidates.len())];
            self.visited.insert(next);
            self.trail.push(next);
            self.pending.push_back(SearchEvent::Visit(next));
        } else if self.trail.len() > 1 {
            self.trail.pop();
            if let Some(back) = self.trail.get_last() {
                debug!("    Back: {current} is a dead end, returning to {back}");
                self.pending.push_back(SearchEvent::Backtrack(back));
            }
        } else {
            debug!("Every cell reachable from the start has been visited");
            self.finished = true;
            self.pending.push_back(SearchEvent::NoPath);
        }
    }
}

impl Searcher for RandomWalk<'_> {
    fn step(&mut self) -> Option<SearchEvent> {
        if self.pending.is_empty() && !self.finished {
            self.advance();
        }
        self.pending.pop_front()
    }

    fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

/// Run the random walk from `start` to `exit`.
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
    let mut searcher: RandomWalk = RandomWalk::new(grid, start, exit, options);
    let result: SearchResult = super::drive(&mut searcher, on_visit, on_path_found, options);
    info!(
        "Random walk {start} -> {exit}: {:?} after {} steps, path length {}, {} cells visited in {:.3}ms",
        result.outcome,
        searcher.steps(),
        result.path.len(),
        result.visited_count,
        result.elapsed_ms()
    );
    result
}
