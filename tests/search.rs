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

use proptest::prelude::*;

use mazelab::connectivity;
use mazelab::grid::Grid;
use mazelab::grid::cell::CellType;
use mazelab::grid::point::Point;
use mazelab::search::random_walk::RandomWalk;
use mazelab::search::{self, Algorithm, SearchOptions, SearchOutcome};

const SIDE: usize = 12;

/// Build a grid from a wall mask, with the start and the exit at the given cell indexes.
fn build(width: usize, height: usize, walls: &[bool], start: usize, exit: usize) -> Grid {
    let mut grid = Grid::new(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            if walls[y * SIDE + x] {
                grid.set_type(x as i32, y as i32, CellType::Wall);
            }
        }
    }
    let area = width * height;
    let (s, e) = (start % area, exit % area);
    grid.set_type((s % width) as i32, (s / width) as i32, CellType::Start);
    grid.set_type((e % width) as i32, (e / width) as i32, CellType::Exit);
    grid
}

proptest! {
    #[test]
    fn best_first_is_optimal(
        width in 2usize..=SIDE,
        height in 2usize..=SIDE,
        walls in prop::collection::vec(prop::bool::weighted(0.3), SIDE * SIDE),
        start in 0usize..SIDE * SIDE,
        exit in 0usize..SIDE * SIDE,
    ) {
        prop_assume!(start % (width * height) != exit % (width * height));
        let grid = build(width, height, &walls, start, exit);
        let (start, exit) = grid.endpoints().unwrap();

        let result = Algorithm::AStar.run(&grid, start, exit, |_| (), |_| (), &SearchOptions::default());
        let shortest = connectivity::shortest_path(&grid, start, exit);

        prop_assert_eq!(result.path.len(), shortest.len());
        prop_assert_eq!(result.path.is_empty(), shortest.is_empty());
        prop_assert_eq!(result.found(), connectivity::is_reachable(&grid, start, exit));
        prop_assert!(result.visited_count > 0);
        if result.found() {
            prop_assert!(result.path.is_walkable(&grid));
            prop_assert_eq!(result.path.get_first(), Some(start));
            prop_assert_eq!(result.path.get_last(), Some(exit));
        }
    }

    #[test]
    fn best_first_is_idempotent(
        walls in prop::collection::vec(prop::bool::weighted(0.25), SIDE * SIDE),
        start in 0usize..SIDE * SIDE,
        exit in 0usize..SIDE * SIDE,
    ) {
        prop_assume!(start != exit);
        let mut grid = build(SIDE, SIDE, &walls, start, exit);
        let (start, exit) = grid.endpoints().unwrap();

        let first = Algorithm::AStar.run(&grid, start, exit, |_| (), |_| (), &SearchOptions::default());
        grid.mark_path(&first.path);
        grid.reset_search_state();
        let second = Algorithm::AStar.run(&grid, start, exit, |_| (), |_| (), &SearchOptions::default());

        prop_assert_eq!(first.path, second.path);
        prop_assert_eq!(first.trace, second.trace);
    }

    #[test]
    fn random_walk_is_reproducible_and_bounded(
        walls in prop::collection::vec(prop::bool::weighted(0.25), SIDE * SIDE),
        start in 0usize..SIDE * SIDE,
        exit in 0usize..SIDE * SIDE,
        seed in any::<u64>(),
        max_steps in 1usize..300,
    ) {
        prop_assume!(start != exit);
        let grid = build(SIDE, SIDE, &walls, start, exit);
        let (start, exit) = grid.endpoints().unwrap();
        let options = SearchOptions { seed: Some(seed), max_steps, ..SearchOptions::default() };

        let mut walker = RandomWalk::new(&grid, start, exit, &options);
        let first = search::drive(&mut walker, |_| (), |_| (), &options);
        prop_assert!(walker.steps() <= max_steps);

        let second = Algorithm::RandomWalk.run(&grid, start, exit, |_| (), |_| (), &options);
        prop_assert_eq!(&first.path, &second.path);
        prop_assert_eq!(&first.trace, &second.trace);
        prop_assert_eq!(first.outcome, second.outcome);
        if first.found() {
            prop_assert!(first.path.is_walkable(&grid));
        }
    }

    #[test]
    fn at_most_one_start_and_exit(
        edits in prop::collection::vec((0i32..8, 0i32..8, 0u8..6), 0..64),
    ) {
        let mut grid = Grid::new(8, 8).unwrap();
        for (x, y, t) in edits {
            let cell_type = CellType::from_repr(t).unwrap();
            grid.set_type(x, y, cell_type);
            prop_assert!(grid.find_by_type(CellType::Start).len() <= 1);
            prop_assert!(grid.find_by_type(CellType::Exit).len() <= 1);
        }
    }
}

#[test]
fn wall_with_a_gap() {
    let mut grid = Grid::new(10, 10).unwrap();
    for y in 0..10 {
        if y != 5 {
            grid.set_type(5, y, CellType::Wall);
        }
    }
    grid.set_type(1, 1, CellType::Start);
    grid.set_type(8, 8, CellType::Exit);

    let mut visits = Vec::new();
    let mut found = 0;
    let result = Algorithm::AStar.run(
        &grid,
        Point::new(1, 1),
        Point::new(8, 8),
        |p| visits.push(p),
        |_| found += 1,
        &SearchOptions::default(),
    );
    assert_eq!(result.path.len(), 15);
    assert!(result.path.contains(Point::new(5, 5)));
    assert!(result.path.is_walkable(&grid));
    assert_eq!(found, 1);
    assert_eq!(visits, result.trace);
}

#[test]
fn enclosed_start() {
    let grid = Grid::from_ascii(
        "\
        #####...
        #S..#...
        #...#..E
        #####...",
    )
    .unwrap();
    let (start, exit) = grid.endpoints().unwrap();
    let mut found = false;
    for algorithm in [Algorithm::AStar, Algorithm::Neural] {
        let result = algorithm.run(&grid, start, exit, |_| (), |_| found = true, &SearchOptions::default());
        assert!(result.path.is_empty());
        assert_eq!(result.outcome, SearchOutcome::NoPath);
        assert_eq!(result.visited_count, connectivity::reachable_count(&grid, start));
        assert_eq!(result.visited_count, 6);
    }
    assert!(!found);
}
