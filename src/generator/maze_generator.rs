/*
maze_generator.rs

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

//! Generate a random, solvable maze.

use log::{Level, debug, info, log_enabled};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

use super::carve;
use super::options::{GeneratorError, MazeGenerationOptions};
use super::placement;
use super::solvability::{self, Adjustment, Repair};
use super::style;
use crate::grid::{Grid, GridError};
use crate::grid::cell::CellType;
use crate::grid::point::Point;

/// [`MazeGenerator`] object.
///
/// Besides the generated grid, the object keeps some statistics about the last run.
pub struct MazeGenerator {
    pub options: MazeGenerationOptions,

    /// Duration in seconds of the last run.
    pub duration: f32,

    /// Number of lattice cells carved during the last run.
    pub carved: usize,

    /// Number of cells changed by the style variation during the last run.
    pub style_changes: usize,

    /// Walls added or removed by the difficulty adjustment during the last run.
    pub adjustment: Adjustment,

    /// Whether the last run had to open a corridor to stay solvable.
    pub repair: Repair,

    /// Start and exit of the last generated maze.
    pub endpoints: Option<(Point, Point)>,
}

impl MazeGenerator {
    /// Create the object.
    pub fn new(options: MazeGenerationOptions) -> Self {
        Self {
            options,
            duration: 0.0,
            carved: 0,
            style_changes: 0,
            adjustment: Adjustment::default(),
            repair: Repair::NotNeeded,
            endpoints: None,
        }
    }

    /// Generate a maze, seeded from [`MazeGenerationOptions::seed`] when it is set.
    ///
    /// # Errors
    ///
    /// The method returns an error when the options are not valid.
    pub fn generate(&mut self) -> Result<Grid, GeneratorError> {
        let mut rng: StdRng = match self.options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        self.generate_with_rng(&mut rng)
    }

    /// Generate a maze with the given random number generator.
    ///
    /// The returned grid always has a start and an exit, and the exit is always reachable from
    /// the start.
    ///
    /// # Errors
    ///
    /// The method returns an error when the options are not valid.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Grid, GeneratorError> {
        self.options.validate()?;
        let start_time: Instant = Instant::now();
        let options: MazeGenerationOptions = self.options;

        // Start from a grid full of walls
        let mut grid: Grid = Grid::filled(options.width, options.height, CellType::Wall)
            .map_err(|e| match e {
                GridError::TooLarge { width, height } => GeneratorError::TooLarge { width, height },
                _ => GeneratorError::TooSmall {
                    width: options.width,
                    height: options.height,
                },
            })?;

        // Carve the spanning tree
        let origin: Point = carve::random_origin(&grid, rng);
        self.carved = carve::carve(&mut grid, origin, rng);

        // Style variation
        self.style_changes = style::apply(&mut grid, &options, rng);

        // Start and exit
        let (start, exit) = placement::place_endpoints(&mut grid, rng)?;
        debug!("Start {start}, exit {exit}");

        // Difficulty
        self.adjustment =
            solvability::adjust_difficulty(&mut grid, start, exit, options.difficulty_scale(), rng);

        // Final guarantee
        self.repair = solvability::ensure_solvable(&mut grid, start, exit);

        self.endpoints = Some((start, exit));
        self.duration = start_time.elapsed().as_secs_f32();
        info!(
            "Generated {}x{} {} maze (difficulty {}) in {}s, repair: {:?}",
            options.width,
            options.height,
            options.style,
            options.difficulty,
            self.duration,
            self.repair
        );
        if log_enabled!(Level::Debug) {
            grid.debug();
        }
        Ok(grid)
    }
}

/// Generate a solvable maze.
///
/// # Errors
///
/// The function returns an error when the options are not valid.
pub fn generate(options: &MazeGenerationOptions) -> Result<Grid, GeneratorError> {
    MazeGenerator::new(*options).generate()
}
