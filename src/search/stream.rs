/*
stream.rs

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

//! Run a search in the background and stream its events.
//!
//! The search runs on a worker thread and sends each [`SearchEvent`] through a bounded channel of
//! capacity one: the worker waits until the consumer has taken the previous event, so a UI can
//! animate the search at its own pace, from an async task (`receiver.recv().await`) or from a
//! blocking loop (`receiver.recv_blocking()`).
//!
//! Dropping the receiver cancels the search at its next step.

use async_channel::{Receiver, Sender};
use log::debug;
use std::ops::ControlFlow;
use std::thread::{self, JoinHandle};

use super::{Algorithm, SearchEvent, SearchOptions, SearchResult};
use crate::grid::Grid;
use crate::grid::point::Point;

/// Handle on a search running in the background.
pub struct SearchStream {
    /// Events, in the order they are produced. The channel is closed after the terminal event.
    pub events: Receiver<SearchEvent>,

    worker: JoinHandle<SearchResult>,
}

impl SearchStream {
    /// Wait for the search to end and return its result.
    ///
    /// Events not consumed yet are discarded, which cancels a running search.
    pub fn finish(self) -> thread::Result<SearchResult> {
        drop(self.events);
        self.worker.join()
    }
}

/// Start a search on a worker thread.
///
/// The grid is moved to the worker; the caller keeps its own presentation grid and applies the
/// received events to it.
pub fn spawn(
    algorithm: Algorithm,
    grid: Grid,
    start: Point,
    exit: Point,
    options: SearchOptions,
) -> SearchStream {
    let (sender, receiver) = async_channel::bounded::<SearchEvent>(1);

    let worker: JoinHandle<SearchResult> = thread::spawn(move || {
        let mut searcher = algorithm.searcher(&grid, start, exit, &options);
        let result: SearchResult =
            super::drive_events(searcher.as_mut(), &options, |event| forward(&sender, event));
        debug!("{algorithm} worker done: {:?}", result.outcome);
        algorithm.finish(result)
    });

    SearchStream {
        events: receiver,
        worker,
    }
}

/// Send the event to the consumer; stop when the consumer is gone.
fn forward(sender: &Sender<SearchEvent>, event: &SearchEvent) -> ControlFlow<()> {
    match sender.send_blocking(event.clone()) {
        Ok(()) => ControlFlow::Continue(()),
        Err(_) => ControlFlow::Break(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::cell::CellType;
    use crate::search::SearchOutcome;

    #[test]
    fn streams_every_event_in_order() {
        let grid = Grid::from_ascii("S...\n.##.\n...E").unwrap();
        let (start, exit) = grid.endpoints().unwrap();
        let direct = Algorithm::AStar.run(
            &grid,
            start,
            exit,
            |_| (),
            |_| (),
            &SearchOptions::default(),
        );

        let stream = spawn(
            Algorithm::AStar,
            grid.clone(),
            start,
            exit,
            SearchOptions::default(),
        );
        let mut presentation = grid.clone();
        let mut visits: Vec<Point> = Vec::new();
        while let Ok(event) = stream.events.recv_blocking() {
            match event {
                SearchEvent::Visit(p) => {
                    presentation.mark_visited(p);
                    visits.push(p);
                }
                SearchEvent::PathFound(path) => presentation.mark_path(&path),
                _ => (),
            }
        }
        let result = stream.finish().unwrap();
        assert_eq!(result.outcome, SearchOutcome::Found);
        assert_eq!(visits, direct.trace);
        assert_eq!(result.path, direct.path);
        assert!(presentation.cell_at(3, 2).unwrap().on_path);
        assert_eq!(grid.iter().filter(|c| c.visited).count(), 0);
    }

    #[test]
    fn dropping_the_receiver_cancels() {
        let mut grid = Grid::new(40, 40).unwrap();
        grid.set_type(0, 0, CellType::Start);
        grid.set_type(39, 39, CellType::Wall);
        grid.set_type(39, 38, CellType::Wall);
        grid.set_type(38, 39, CellType::Exit);
        grid.set_type(37, 39, CellType::Wall);
        grid.set_type(38, 38, CellType::Wall);
        let (start, exit) = grid.endpoints().unwrap();

        let stream = spawn(Algorithm::AStar, grid, start, exit, SearchOptions::default());
        let first = stream.events.recv_blocking().unwrap();
        assert_eq!(first, SearchEvent::Visit(start));
        let result = stream.finish().unwrap();
        assert_eq!(result.outcome, SearchOutcome::Cancelled);
        assert!(result.path.is_empty());
    }
}
