/*
search.rs

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

//! Path search engine.
//!
//! Every strategy is a [`Searcher`] state machine.
//! Each call to [`Searcher::step`] performs one unit of work and returns the corresponding
//! [`SearchEvent`]; the searcher never modifies the grid it explores.
//! Callers apply the events to their own presentation grid (see
//! [`Grid::mark_visited`](crate::grid::Grid::mark_visited) and
//! [`Grid::mark_path`](crate::grid::Grid::mark_path)).
//!
//! Three strategies are available:
//!
//! * [`best_first`]: A* search with the Manhattan distance heuristic. Always returns a shortest
//!   path.
//! * [`random_walk`]: depth-first random walk with backtracking, bounded by a maximum number of
//!   steps. Returns a path, not a shortest one.
//! * [`neural`]: the "neural pathfinding" variant. Same path and trace as [`best_first`], with a
//!   different reported computation time.
//!
//! [`drive`] runs a searcher to completion and reports progress through the `on_visit` and
//! `on_path_found` callbacks, pausing [`SearchOptions::delay`] after each step.
//! [`stream::spawn`] runs a search on a worker thread and streams the events through a channel.

pub mod best_first;
pub mod neural;
pub mod random_walk;
pub mod stream;

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};
use strum_macros::FromRepr;

use crate::grid::Grid;
use crate::grid::point::Point;
use crate::path::Path;

/// Default maximum number of steps for the random walk.
pub const DEFAULT_MAX_STEPS: usize = 1000;

/// Event emitted by a [`Searcher`] at each step.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// The cell has been finalized (moved to the closed or visited set).
    Visit(Point),

    /// The random walk stepped back to the given cell.
    Backtrack(Point),

    /// Terminal event: the search reached the exit. Carries the final path.
    PathFound(Path),

    /// Terminal event: every reachable cell has been explored without reaching the exit.
    NoPath,

    /// Terminal event: the random walk used all its steps.
    StepLimit,
}

impl SearchEvent {
    /// Whether the event ends the search.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SearchEvent::PathFound(_) | SearchEvent::NoPath | SearchEvent::StepLimit
        )
    }
}

/// Step-wise search over a grid.
pub trait Searcher {
    /// Perform one step and return its event.
    ///
    /// After a terminal event has been returned, the method returns [`None`].
    fn step(&mut self) -> Option<SearchEvent>;

    /// Number of cells explored so far.
    fn visited_count(&self) -> usize;
}

/// Cancellation flag shared between a running search and its caller.
///
/// The flag is checked at every suspension point.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create a [`CancelToken`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the search to stop at its next suspension point.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether [`CancelToken::cancel`] has been called.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Search parameters.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Pause after each step. Used to pace animations; zero runs the search without pausing.
    pub delay: Duration,

    /// Maximum number of steps for the random walk.
    pub max_steps: usize,

    /// Seed for the random walk. A random seed is used when [`None`].
    pub seed: Option<u64>,

    /// Optional cancellation flag.
    pub cancel: Option<CancelToken>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            delay: Duration::ZERO,
            max_steps: DEFAULT_MAX_STEPS,
            seed: None,
            cancel: None,
        }
    }
}

impl SearchOptions {
    /// Whether the caller cancelled the search.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }
}

/// How a search ended.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found,
    NoPath,
    StepLimit,
    Cancelled,
}

/// Result of a search run.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Path from the start to the exit. Empty when no path was found.
    pub path: Path,

    /// Cells in the order they were visited.
    pub trace: Vec<Point>,

    /// Number of explored cells.
    pub visited_count: usize,

    /// Computation time.
    pub elapsed: Duration,

    pub outcome: SearchOutcome,
}

impl SearchResult {
    /// Whether a path was found.
    pub fn found(&self) -> bool {
        self.outcome == SearchOutcome::Found
    }

    /// Computation time in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Search strategies.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default, ValueEnum, FromRepr,
)]
#[repr(u8)]
pub enum Algorithm {
    #[default]
    #[value(name = "astar")]
    AStar,
    Neural,
    RandomWalk,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Algorithm::AStar => write!(f, "A* Algorithm"),
            Algorithm::Neural => write!(f, "Neural Pathfinding"),
            Algorithm::RandomWalk => write!(f, "Random Walk"),
        }
    }
}

impl Algorithm {
    /// Create the step-wise searcher for the strategy.
    pub fn searcher<'a>(
        self,
        grid: &'a Grid,
        start: Point,
        exit: Point,
        options: &SearchOptions,
    ) -> Box<dyn Searcher + 'a> {
        match self {
            Algorithm::AStar | Algorithm::Neural => {
                Box::new(best_first::BestFirst::new(grid, start, exit))
            }
            Algorithm::RandomWalk => {
                Box::new(random_walk::RandomWalk::new(grid, start, exit, options))
            }
        }
    }

    /// Adjust the raw result of the searcher to what the strategy reports.
    pub fn finish(self, mut result: SearchResult) -> SearchResult {
        if self == Algorithm::Neural {
            result.elapsed = neural::scale_elapsed(result.elapsed);
        }
        result
    }

    /// Run the strategy to completion.
    ///
    /// The grid must contain `start` and `exit`; check with
    /// [`Grid::endpoints`](crate::grid::Grid::endpoints) first.
    pub fn run(
        self,
        grid: &Grid,
        start: Point,
        exit: Point,
        on_visit: impl FnMut(Point),
        on_path_found: impl FnMut(&Path),
        options: &SearchOptions,
    ) -> SearchResult {
        match self {
            Algorithm::AStar => best_first::run(grid, start, exit, on_visit, on_path_found, options),
            Algorithm::Neural => neural::run(grid, start, exit, on_visit, on_path_found, options),
            Algorithm::RandomWalk => {
                random_walk::run(grid, start, exit, on_visit, on_path_found, options)
            }
        }
    }
}

/// Run the searcher to completion and report progress through the callbacks.
///
/// `on_visit` is called once per finalized cell, and `on_path_found` is called once with the
/// final path, only if a path exists.
pub fn drive<S: Searcher + ?Sized>(
    searcher: &mut S,
    mut on_visit: impl FnMut(Point),
    mut on_path_found: impl FnMut(&Path),
    options: &SearchOptions,
) -> SearchResult {
    drive_events(searcher, options, |event| {
        match event {
            SearchEvent::Visit(p) => on_visit(*p),
            SearchEvent::PathFound(path) => on_path_found(path),
            _ => (),
        }
        ControlFlow::Continue(())
    })
}

/// Run the searcher to completion and pass every event to `on_event`.
///
/// The search stops with [`SearchOutcome::Cancelled`] when `on_event` returns
/// [`ControlFlow::Break`] for a non-terminal event, or when the cancellation token of the options
/// is set.
pub fn drive_events<S: Searcher + ?Sized>(
    searcher: &mut S,
    options: &SearchOptions,
    mut on_event: impl FnMut(&SearchEvent) -> ControlFlow<()>,
) -> SearchResult {
    let start: Instant = Instant::now();
    let mut trace: Vec<Point> = Vec::new();
    let mut path: Path = Path::new();
    let outcome: SearchOutcome;

    loop {
        if options.is_cancelled() {
            debug!("Search cancelled after {} visits", trace.len());
            outcome = SearchOutcome::Cancelled;
            break;
        }
        let Some(event) = searcher.step() else {
            outcome = SearchOutcome::NoPath;
            break;
        };
        if let SearchEvent::Visit(p) = event {
            trace.push(p);
        }
        let flow: ControlFlow<()> = on_event(&event);
        match event {
            SearchEvent::PathFound(p) => {
                path = p;
                outcome = SearchOutcome::Found;
                break;
            }
            SearchEvent::NoPath => {
                outcome = SearchOutcome::NoPath;
                break;
            }
            SearchEvent::StepLimit => {
                outcome = SearchOutcome::StepLimit;
                break;
            }
            SearchEvent::Visit(_) | SearchEvent::Backtrack(_) => {
                if flow.is_break() {
                    debug!("Search stopped by the event consumer");
                    outcome = SearchOutcome::Cancelled;
                    break;
                }
                if !options.delay.is_zero() {
                    thread::sleep(options.delay);
                }
            }
        }
    }

    SearchResult {
        path,
        trace,
        visited_count: searcher.visited_count(),
        elapsed: start.elapsed(),
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPEN: &str = "\
        S....
        .....
        ....E";

    #[test]
    fn algorithms_from_repr() {
        assert_eq!(Algorithm::from_repr(0), Some(Algorithm::AStar));
        assert_eq!(Algorithm::from_repr(2), Some(Algorithm::RandomWalk));
        assert_eq!(Algorithm::RandomWalk.to_string(), "Random Walk");
    }

    #[test]
    fn cancelled_token_stops_before_first_step() {
        let grid = Grid::from_ascii(OPEN).unwrap();
        let (start, exit) = grid.endpoints().unwrap();
        let token = CancelToken::new();
        token.cancel();
        let options = SearchOptions {
            cancel: Some(token),
            ..SearchOptions::default()
        };
        let mut visits = 0;
        let result = Algorithm::AStar.run(&grid, start, exit, |_| visits += 1, |_| (), &options);
        assert_eq!(result.outcome, SearchOutcome::Cancelled);
        assert!(result.path.is_empty());
        assert_eq!(visits, 0);
    }

    #[test]
    fn consumer_break_cancels() {
        let grid = Grid::from_ascii(OPEN).unwrap();
        let (start, exit) = grid.endpoints().unwrap();
        let options = SearchOptions::default();
        let mut searcher = Algorithm::AStar.searcher(&grid, start, exit, &options);
        let result = drive_events(searcher.as_mut(), &options, |_| ControlFlow::Break(()));
        assert_eq!(result.outcome, SearchOutcome::Cancelled);
        assert_eq!(result.trace, vec![start]);
    }

    #[test]
    fn every_strategy_solves_an_open_grid() {
        let grid = Grid::from_ascii(OPEN).unwrap();
        let (start, exit) = grid.endpoints().unwrap();
        let options = SearchOptions {
            seed: Some(7),
            ..SearchOptions::default()
        };
        for algorithm in [Algorithm::AStar, Algorithm::Neural, Algorithm::RandomWalk] {
            let mut found = 0;
            let result = algorithm.run(&grid, start, exit, |_| (), |_| found += 1, &options);
            assert!(result.found(), "{algorithm}");
            assert_eq!(found, 1);
            assert!(result.path.is_walkable(&grid));
            assert_eq!(result.path.get_first(), Some(start));
            assert_eq!(result.path.get_last(), Some(exit));
        }
    }

    #[test]
    fn delay_paces_steps() {
        let grid = Grid::from_ascii("S.E").unwrap();
        let (start, exit) = grid.endpoints().unwrap();
        let options = SearchOptions {
            delay: Duration::from_millis(5),
            ..SearchOptions::default()
        };
        let result = Algorithm::AStar.run(&grid, start, exit, |_| (), |_| (), &options);
        assert!(result.found());
        // Two non-terminal visits before the exit is finalized
        assert!(result.elapsed >= Duration::from_millis(10));
    }
}
