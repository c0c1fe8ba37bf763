/*
options.rs

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

//! Maze generation parameters.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use strum_macros::FromRepr;

/// Smallest width or height of a generated maze.
/// The four inward corners used for the start and the exit must be distinct cells.
pub const MIN_SIDE: usize = 5;

/// Largest width or height of a generated maze.
pub const MAX_SIDE: usize = 1000;

/// Lowest difficulty level.
pub const MIN_DIFFICULTY: u8 = 1;

/// Highest difficulty level.
pub const MAX_DIFFICULTY: u8 = 5;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum GeneratorError {
    /// The difficulty level is not between [`MIN_DIFFICULTY`] and [`MAX_DIFFICULTY`].
    Difficulty(u8),

    /// The width or the height is smaller than [`MIN_SIDE`].
    TooSmall { width: usize, height: usize },

    /// The width or the height is larger than [`MAX_SIDE`].
    TooLarge { width: usize, height: usize },

    /// No empty cell is left for the start or the exit.
    NoRoom,
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GeneratorError::Difficulty(d) => write!(
                f,
                "difficulty {d} is not between {MIN_DIFFICULTY} and {MAX_DIFFICULTY}"
            ),
            GeneratorError::TooSmall { width, height } => write!(
                f,
                "{width}x{height} maze is too small (minimum {MIN_SIDE}x{MIN_SIDE})"
            ),
            GeneratorError::TooLarge { width, height } => write!(
                f,
                "{width}x{height} maze is too large (maximum {MAX_SIDE}x{MAX_SIDE})"
            ),
            GeneratorError::NoRoom => write!(f, "no empty cell left for the start or the exit"),
        }
    }
}

impl Error for GeneratorError {}

/// Maze style.
///
/// - A `Labyrinth` is the carved maze, with a single route between any two cells.
/// - A `PuzzleChallenge` adds key and door cells; their number grows with the difficulty.
/// - An `OpenSpace` maze has about 10% of its walls removed.
/// - A `MazeWithLoops` has about 5% of its inner walls removed, which creates cycles.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default, ValueEnum, FromRepr,
)]
#[repr(u8)]
pub enum MazeStyle {
    #[default]
    Labyrinth,
    PuzzleChallenge,
    OpenSpace,
    MazeWithLoops,
}

impl MazeStyle {
    /// All the styles.
    pub const ALL: [MazeStyle; 4] = [
        MazeStyle::Labyrinth,
        MazeStyle::PuzzleChallenge,
        MazeStyle::OpenSpace,
        MazeStyle::MazeWithLoops,
    ];
}

impl fmt::Display for MazeStyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MazeStyle::Labyrinth => write!(f, "Labyrinth"),
            MazeStyle::PuzzleChallenge => write!(f, "Puzzle Challenge"),
            MazeStyle::OpenSpace => write!(f, "Open Space"),
            MazeStyle::MazeWithLoops => write!(f, "Maze with Loops"),
        }
    }
}

/// Parameters of a maze generation run.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct MazeGenerationOptions {
    pub style: MazeStyle,

    /// Difficulty level, from [`MIN_DIFFICULTY`] to [`MAX_DIFFICULTY`].
    pub difficulty: u8,

    pub width: usize,
    pub height: usize,

    /// Seed for the random generator. A random seed is used when [`None`].
    pub seed: Option<u64>,
}

impl Default for MazeGenerationOptions {
    fn default() -> Self {
        Self {
            style: MazeStyle::Labyrinth,
            difficulty: 3,
            width: 21,
            height: 21,
            seed: None,
        }
    }
}

impl MazeGenerationOptions {
    /// Create a [`MazeGenerationOptions`] object with a random seed.
    pub fn new(style: MazeStyle, difficulty: u8, width: usize, height: usize) -> Self {
        Self {
            style,
            difficulty,
            width,
            height,
            seed: None,
        }
    }

    /// Verify the parameters.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&self.difficulty) {
            return Err(GeneratorError::Difficulty(self.difficulty));
        }
        if self.width < MIN_SIDE || self.height < MIN_SIDE {
            return Err(GeneratorError::TooSmall {
                width: self.width,
                height: self.height,
            });
        }
        if self.width > MAX_SIDE || self.height > MAX_SIDE {
            return Err(GeneratorError::TooLarge {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Difficulty normalized between 0 and 1.
    pub fn difficulty_scale(&self) -> f64 {
        f64::from(self.difficulty) / f64::from(MAX_DIFFICULTY)
    }
}
