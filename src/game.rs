/*
game.rs

Copyright 2026 Hervé Quatremain

This file is part of Zipgrid.

Zipgrid is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Zipgrid is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Zipgrid. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Manage the status of a game in progress.
//!
//! The [`Game`] object owns the puzzle grid and the player's drag trace.
//! Every move goes through [`Game::apply_move`], which delegates the rule
//! decisions to [`crate::validator::trace`]; the session only tracks the
//! outcome (solved state, move counter, elapsed time).

use std::time::{Duration, Instant};

use crate::generator::grid::{Grid, Position};
use crate::generator::path::Path;
use crate::validator::trace::{MoveOutcome, Trace};

/// Manage the status of the game in progress.
#[derive(Debug)]
pub struct Game {
    /// The puzzle being played.
    pub grid: Grid,

    /// The player's drag trace.
    pub trace: Trace,

    /// Whether the game has started.
    pub started: bool,

    /// Whether the puzzle is solved.
    pub solved: bool,

    /// Whether the player paused the game.
    pub paused: bool,

    /// Number of accepted moves (extensions and rewinds) so far.
    moves: usize,

    /// Time when the game started. Used to compute game duration.
    start_time: Instant,

    /// The elapsed time when the player paused the game.
    pause_duration: Option<Duration>,
}

impl Game {
    /// Create a [`Game`] object for the provided puzzle and start the
    /// clock.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            trace: Trace::new(),
            started: true,
            solved: false,
            paused: false,
            moves: 0,
            start_time: Instant::now(),
            pause_duration: None,
        }
    }

    /// Restart the game status (player trace), but keep the puzzle.
    pub fn reset(&mut self) {
        self.trace.clear();
        self.paused = false;
        self.started = true;
        self.moves = 0;
        if self.solved {
            self.start_time = Instant::now();
            self.solved = false;
        }
    }

    /// Apply one player move and return its outcome.
    ///
    /// Rejected moves leave the session untouched. A completing move marks
    /// the game as solved.
    pub fn apply_move(&mut self, position: Position) -> MoveOutcome {
        if self.solved || self.paused {
            return MoveOutcome::Rejected;
        }
        let outcome: MoveOutcome = self.trace.apply(&self.grid, position);
        match outcome {
            MoveOutcome::Rejected => (),
            MoveOutcome::Completed => {
                self.moves += 1;
                self.solved = true;
            }
            MoveOutcome::Extended | MoveOutcome::Rewound => {
                self.moves += 1;
            }
        }
        outcome
    }

    /// Erase the current trace so the player can start over.
    pub fn clear_trace(&mut self) {
        self.trace.clear();
    }

    /// Whether the puzzle is successfully solved.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Return the number of accepted moves so far.
    pub fn get_moves(&self) -> usize {
        self.moves
    }

    /// Return the known solution of the puzzle.
    pub fn solution(&self) -> Option<&Path> {
        self.grid.solution_path.as_ref()
    }

    /// Pause the game.
    pub fn pause(&mut self) {
        // Store the played time so far, so that the pause time can be
        // deduced when the player resumes the game.
        self.pause_duration = Some(self.start_time.elapsed());
        self.paused = true;
    }

    /// Resume the game.
    pub fn resume(&mut self) {
        // Refresh the game elapsed time by removing the pause time.
        if let Some(d) = self.pause_duration {
            self.start_time += self.start_time.elapsed() - d;
            self.pause_duration = None;
        }
        self.paused = false;
    }

    /// Return the game duration.
    pub fn get_duration(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Return the game duration in hours, minutes, and seconds.
    pub fn get_duration_hms(&self) -> (u64, u64, u64) {
        let duration: u64 = self.start_time.elapsed().as_secs();
        (
            duration / 3600,
            (duration % 3600) / 60,
            (duration % 3600) % 60,
        )
    }
}
