/*
cli_options.rs

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

//! Process command-line options.
//!
//! In command-line mode, Mazelab generates or loads a maze, solves it with the selected
//! algorithm, and prints the result.
//!
//! # Examples
//!
//! Generate a 15x15 maze with loops and solve it with the random walk:
//!
//! ```
//! $ mazelab --style maze-with-loops -f 2 --width 15 --height 15 -a random-walk
//! ###############
//! #S*************
//! ...
//! Random Walk: Solution Found: 61 cells evaluated, path length 45, 0.12ms
//! ```
//!
//! Generate 200 puzzle challenges and print statistics:
//!
//! ```
//! $ mazelab --style puzzle-challenge -c 200 -s
//! ```
//!
//! Solve a saved maze and keep the explored cells and the path in the record:
//!
//! ```
//! $ mazelab -i maze.json -o solved.json
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{COPYRIGHT_NOTICE, VERSION};
use mazelab::generator::maze_generator::MazeGenerator;
use mazelab::generator::options::{MazeGenerationOptions, MazeStyle};
use mazelab::generator::solvability::Repair;
use mazelab::grid::Grid;
use mazelab::metrics::AlgorithmMetrics;
use mazelab::saver::maze::{MazeRecord, SaverMaze};
use mazelab::search::stream::{self, SearchStream};
use mazelab::search::{Algorithm, DEFAULT_MAX_STEPS, SearchEvent, SearchOptions, SearchResult};

/// Generate and solve mazes.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Style of the generated maze
    #[arg(value_enum, long, default_value_t = MazeStyle::Labyrinth)]
    style: MazeStyle,

    /// Difficulty level, from 1 to 5
    #[arg(short = 'f', long, default_value_t = 3)]
    difficulty: u8,

    /// Width of the generated maze
    #[arg(long, default_value_t = 21)]
    width: usize,

    /// Height of the generated maze
    #[arg(long, default_value_t = 21)]
    height: usize,

    /// Seed for the maze generator and the random walk
    #[arg(long)]
    seed: Option<u64>,

    /// Algorithm to solve the maze
    #[arg(value_enum, short, long, default_value_t = Algorithm::AStar)]
    algorithm: Algorithm,

    /// Pause in milliseconds after each search step
    #[arg(long, default_value_t = 0)]
    delay: u64,

    /// Maximum number of steps for the random walk
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,

    /// Number of mazes to generate and solve
    #[arg(short, long, default_value_t = 1, conflicts_with = "input")]
    count: usize,

    /// Print some statistics after solving the mazes
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Load the maze from a JSON record instead of generating one
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Save the solved maze to a JSON record
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Name of the saved maze
    #[arg(long, default_value = "Generated maze", requires = "output")]
    name: String,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Statistics collected over several runs.
#[derive(Default)]
struct Summary {
    generation_time: f32,
    max_generation_time: f32,
    repairs: usize,
    search_time: Duration,
    cells_evaluated: usize,
    path_length: usize,
    failures: usize,
}

/// Parse and process command-line options.
///
/// Return the exit code of the program.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();
    debug!("Mazelab {VERSION}");

    let search_options: SearchOptions = SearchOptions {
        delay: Duration::from_millis(args.delay),
        max_steps: args.max_steps,
        seed: args.seed,
        cancel: None,
    };

    //
    // Solve a saved maze
    //
    if let Some(input) = &args.input {
        let record: MazeRecord = match SaverMaze::new(input.clone()).get_maze() {
            Ok(Some(r)) => r,
            Ok(None) => {
                eprintln!("{}: no such file", input.display());
                return 1;
            }
            Err(e) => {
                eprintln!("{}: {e}", input.display());
                return 1;
            }
        };
        debug!(
            "Loaded \"{}\" ({}x{}, {})",
            record.name,
            record.grid_size,
            record.grid_size,
            record.difficulty_level()
        );
        let grid: Grid = match record.to_grid() {
            Ok(g) => g,
            Err(e) => {
                eprintln!("{}: {e}", input.display());
                return 1;
            }
        };
        return match solve_and_print(&args, grid, &search_options) {
            Some(_) => 0,
            None => 1,
        };
    }

    //
    // Generate and solve mazes
    //
    let mut summary: Summary = Summary::default();
    for i in 0..args.count {
        let mut generator: MazeGenerator = MazeGenerator::new(MazeGenerationOptions {
            style: args.style,
            difficulty: args.difficulty,
            width: args.width,
            height: args.height,
            seed: args.seed.map(|s| s.wrapping_add(i as u64)),
        });
        let grid: Grid = match generator.generate() {
            Ok(g) => g,
            Err(e) => {
                eprintln!("Cannot generate the maze: {e}");
                return 1;
            }
        };
        debug!(
            "Maze {i}: {} cells carved, {} style changes, {:?}",
            generator.carved, generator.style_changes, generator.adjustment
        );
        summary.generation_time += generator.duration;
        if generator.duration > summary.max_generation_time {
            summary.max_generation_time = generator.duration;
        }
        if generator.repair != Repair::NotNeeded {
            summary.repairs += 1;
        }

        let Some(result) = solve_and_print(&args, grid, &search_options) else {
            return 1;
        };
        summary.search_time += result.elapsed;
        summary.cells_evaluated += result.visited_count;
        summary.path_length += result.path.len();
        if !result.found() {
            summary.failures += 1;
        }
    }

    // Print some stats
    if args.summary {
        let count: usize = args.count.max(1);
        println!(
            "
          algorithm = {}
              mazes = {}
    generation time = {}s
 average generation = {}s
     max generation = {}s
            repairs = {}
     average search = {:.3}ms
average cells eval. = {}
average path length = {}
           failures = {}",
            args.algorithm,
            args.count,
            summary.generation_time,
            summary.generation_time / count as f32,
            summary.max_generation_time,
            summary.repairs,
            summary.search_time.as_secs_f64() * 1000.0 / count as f64,
            summary.cells_evaluated / count,
            summary.path_length / count,
            summary.failures
        );
    }
    0
}

/// Solve the maze, print it with the explored cells and the path, and save it if requested.
///
/// Return None when the maze cannot be solved or saved.
fn solve_and_print(args: &Args, grid: Grid, options: &SearchOptions) -> Option<SearchResult> {
    let Some((start, exit)) = grid.endpoints() else {
        eprintln!("The maze has no start or no exit");
        return None;
    };

    // Apply the streamed events to a presentation copy of the grid
    let mut view: Grid = grid.clone();
    view.reset_search_state();
    let search: SearchStream = stream::spawn(args.algorithm, grid, start, exit, options.clone());
    while let Ok(event) = search.events.recv_blocking() {
        match event {
            SearchEvent::Visit(p) => view.mark_visited(p),
            SearchEvent::PathFound(path) => view.mark_path(&path),
            _ => (),
        }
    }
    let result: SearchResult = match search.finish() {
        Ok(r) => r,
        Err(_) => {
            eprintln!("The search worker failed");
            return None;
        }
    };

    if !args.summary || args.count == 1 {
        println!("{}", view.to_ascii(true));
        println!("{}: {}", args.algorithm, AlgorithmMetrics::from(&result));
    }

    if let Some(output) = &args.output {
        let record: MazeRecord = match MazeRecord::from_grid(&args.name, &view) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Cannot save the maze: {e}");
                return None;
            }
        };
        if let Err(e) = SaverMaze::new(output.clone()).save_maze(&record) {
            eprintln!("{}: {e}", output.display());
            return None;
        }
    }
    Some(result)
}
