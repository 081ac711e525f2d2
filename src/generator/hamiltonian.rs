/*
hamiltonian.rs

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

//! Generate a random path covering every grid cell exactly once.

use log::debug;
use std::time::Instant;

use super::grid::Position;
use super::path::Path;
use super::rng;
use super::rng::SeededRandom;

/// Number of times the search is restarted from a fresh random start cell
/// before giving up. For the supported grid sizes the search virtually
/// always succeeds within the first few attempts; the bound is a safety
/// valve.
pub const MAX_ATTEMPTS: usize = 100;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum HamiltonianError {
    /// No full-coverage path found within the attempt budget.
    Exhausted,
}

/// Search frame: one entry per cell currently on the path, holding the
/// remaining candidate moves for that cell.
struct Frame {
    /// Neighbor candidates in the order they must be tried. Candidates may
    /// point outside the grid; they are discarded when consumed.
    candidates: [(i64, i64); 4],

    /// Index of the next candidate to try.
    next: usize,
}

impl Frame {
    /// Return the next candidate to try, or None when the cell is
    /// exhausted.
    fn next_candidate(&mut self) -> Option<(i64, i64)> {
        if self.next < self.candidates.len() {
            let candidate: (i64, i64) = self.candidates[self.next];
            self.next += 1;
            Some(candidate)
        } else {
            None
        }
    }
}

/// [`HamiltonianPath`] object.
pub struct HamiltonianPath {
    /// Width and height of the grid to cover.
    pub size: usize,

    /// Number of cells expanded during the last search.
    pub iteration: usize,

    /// Number of attempts (restarts from a fresh start cell) the last
    /// search used.
    pub attempts: usize,

    /// Duration in seconds of the last search.
    pub duration: f32,

    /// Time when the search started. Used to compute
    /// [`HamiltonianPath::duration`].
    start: Instant,
}

impl HamiltonianPath {
    /// Create the object.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            iteration: 0,
            attempts: 0,
            duration: 0.0,
            start: Instant::now(),
        }
    }

    /// Generate and return a random path that visits every cell of the
    /// grid exactly once, with every step moving to a 4-adjacent cell.
    ///
    /// When a [`SeededRandom`] source is provided, the result only depends
    /// on the seed. Otherwise the path is drawn from ambient randomness.
    ///
    /// # Errors
    ///
    /// The method returns an error if no path is found within
    /// [`MAX_ATTEMPTS`] restarts. The caller is expected to fall back to a
    /// deterministic traversal in that case.
    pub fn generate(
        &mut self,
        random: &mut Option<&mut SeededRandom>,
    ) -> Result<Path, HamiltonianError> {
        self.iteration = 0;
        self.attempts = 0;
        self.duration = 0.0;
        self.start = Instant::now();

        for attempt in 0..MAX_ATTEMPTS {
            self.attempts = attempt + 1;
            let x: usize = rng::random_index(random, self.size);
            let y: usize = rng::random_index(random, self.size);
            let start: Position = Position::new(x, y);
            debug!("Attempt {attempt}: starting cell ({x}, {y})");

            if let Some(path) = self.search_from(start, random) {
                self.duration = self.start.elapsed().as_secs_f32();
                debug!(
                    "Found a path in {} iterations ({}s)",
                    self.iteration, self.duration
                );
                return Ok(path);
            }
        }
        self.duration = self.start.elapsed().as_secs_f32();
        debug!("No path found after {MAX_ATTEMPTS} attempts");
        Err(HamiltonianError::Exhausted)
    }

    /// Depth-first backtracking search from the given start cell.
    ///
    /// The search runs on an explicit frame stack instead of recursing.
    /// The candidate moves of a cell are shuffled exactly once, when the
    /// cell is appended to the path, and are then tried in order; the final
    /// cell of a complete path is never expanded. Random draws therefore
    /// happen in the same order as in the recursive formulation, which
    /// keeps seeded generation reproducible.
    fn search_from(
        &mut self,
        start: Position,
        random: &mut Option<&mut SeededRandom>,
    ) -> Option<Path> {
        let total: usize = self.size * self.size;
        let mut path: Path = Path::new(self.size);
        let mut frames: Vec<Frame> = Vec::with_capacity(total);

        path.push(start);
        self.iteration += 1;
        if path.len() == total {
            return Some(path);
        }
        frames.push(Frame {
            candidates: self.shuffled_directions(start, random),
            next: 0,
        });

        while let Some(frame) = frames.last_mut() {
            match frame.next_candidate() {
                Some((x, y)) => {
                    if x < 0 || x >= self.size as i64 || y < 0 || y >= self.size as i64 {
                        continue;
                    }
                    let candidate: Position = Position::new(x as usize, y as usize);
                    if path.contains(candidate) {
                        continue;
                    }
                    path.push(candidate);
                    self.iteration += 1;
                    if path.len() == total {
                        return Some(path);
                    }
                    let candidates: [(i64, i64); 4] =
                        self.shuffled_directions(candidate, random);
                    frames.push(Frame {
                        candidates,
                        next: 0,
                    });
                }
                None => {
                    // The cell has no remaining candidate: backtrack.
                    frames.pop();
                    path.pop();
                }
            }
        }
        None
    }

    /// Return the four neighbor candidates of the cell in a random order.
    ///
    /// The base order is right, left, down, up; a Fisher-Yates shuffle
    /// driven by the random source reorders it.
    fn shuffled_directions(
        &self,
        position: Position,
        random: &mut Option<&mut SeededRandom>,
    ) -> [(i64, i64); 4] {
        let x: i64 = position.x as i64;
        let y: i64 = position.y as i64;
        let mut directions: [(i64, i64); 4] =
            [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)];
        for i in (1..directions.len()).rev() {
            let j: usize = rng::random_index(random, i + 1);
            directions.swap(i, j);
        }
        directions
    }
}
