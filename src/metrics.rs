/*
metrics.rs

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

//! Metrics displayed next to the maze for an algorithm run.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::search::{SearchOutcome, SearchResult};

/// Status of an algorithm run.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SolveStatus {
    #[default]
    Ready,
    Running,
    SolutionFound,
    NoSolution,
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolveStatus::Ready => write!(f, "Ready"),
            SolveStatus::Running => write!(f, "Running"),
            SolveStatus::SolutionFound => write!(f, "Solution Found"),
            SolveStatus::NoSolution => write!(f, "No Solution"),
        }
    }
}

/// Metrics of an algorithm run.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct AlgorithmMetrics {
    /// Time reported by the algorithm.
    pub computation_time: Duration,

    /// Number of explored cells.
    pub cells_evaluated: usize,

    /// Number of cells in the path, start and exit included.
    pub path_length: usize,

    pub status: SolveStatus,
}

impl AlgorithmMetrics {
    /// Metrics of an algorithm that has not run yet.
    pub fn ready() -> Self {
        Self::default()
    }

    /// Metrics while the algorithm runs, updated after each visited cell.
    pub fn running(cells_evaluated: usize) -> Self {
        Self {
            cells_evaluated,
            status: SolveStatus::Running,
            ..Self::default()
        }
    }
}

impl From<&SearchResult> for AlgorithmMetrics {
    fn from(result: &SearchResult) -> Self {
        let status: SolveStatus = match result.outcome {
            SearchOutcome::Found => SolveStatus::SolutionFound,
            SearchOutcome::NoPath | SearchOutcome::StepLimit => SolveStatus::NoSolution,
            SearchOutcome::Cancelled => SolveStatus::Ready,
        };
        Self {
            computation_time: result.elapsed,
            cells_evaluated: result.visited_count,
            path_length: result.path.len(),
            status,
        }
    }
}

impl fmt::Display for AlgorithmMetrics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: {} cells evaluated, path length {}, {:.2}ms",
            self.status,
            self.cells_evaluated,
            self.path_length,
            self.computation_time.as_secs_f64() * 1000.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::search::{Algorithm, SearchOptions};

    #[test]
    fn metrics_from_results() {
        let grid = Grid::from_ascii("S.#\n..E").unwrap();
        let (start, exit) = grid.endpoints().unwrap();
        let result = Algorithm::AStar.run(
            &grid,
            start,
            exit,
            |_| (),
            |_| (),
            &SearchOptions::default(),
        );
        let m = AlgorithmMetrics::from(&result);
        assert_eq!(m.status, SolveStatus::SolutionFound);
        assert_eq!(m.path_length, 4);
        assert_eq!(m.cells_evaluated, result.visited_count);

        let walled = Grid::from_ascii("S#\n#E").unwrap();
        let (start, exit) = walled.endpoints().unwrap();
        let result = Algorithm::AStar.run(
            &walled,
            start,
            exit,
            |_| (),
            |_| (),
            &SearchOptions::default(),
        );
        let m = AlgorithmMetrics::from(&result);
        assert_eq!(m.status, SolveStatus::NoSolution);
        assert_eq!(m.path_length, 0);
        assert_eq!(m.cells_evaluated, 1);
    }

    #[test]
    fn status_labels() {
        assert_eq!(SolveStatus::SolutionFound.to_string(), "Solution Found");
        assert_eq!(AlgorithmMetrics::running(3).cells_evaluated, 3);
        assert_eq!(AlgorithmMetrics::ready().status, SolveStatus::Ready);
    }
}
