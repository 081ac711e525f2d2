/*
connection.rs

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

//! Validate the ordered sequence of dots the player connected.

use crate::generator::grid::{Dot, Grid};

use super::reachability;

/// Validation result for a dot sequence.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ConnectionVerdict {
    /// Whether every connection in the sequence is legal.
    pub is_valid: bool,

    /// Whether the sequence connects all the dots, ending on the last one.
    pub is_complete: bool,
}

/// Whether the two dots may be connected, in this direction: the numbers
/// must be consecutive. Skipping a number is never allowed.
pub fn is_sequential(from: &Dot, to: &Dot) -> bool {
    to.number == from.number + 1
}

/// Whether every consecutive pair of the sequence is sequentially numbered
/// and reachable. A sequence with fewer than two dots is trivially valid.
pub fn validate(grid: &Grid, dot_sequence: &[Dot]) -> bool {
    if dot_sequence.len() < 2 {
        return true;
    }
    for pair in dot_sequence.windows(2) {
        if !is_sequential(&pair[0], &pair[1]) {
            return false;
        }
        if !reachability::can_connect(pair[0].position, pair[1].position, grid) {
            return false;
        }
    }
    true
}

/// Whether the sequence visits every dot of the grid and ends on the
/// highest-numbered one.
pub fn is_complete(grid: &Grid, dot_sequence: &[Dot]) -> bool {
    match dot_sequence.last() {
        Some(last) => {
            dot_sequence.len() == grid.dot_count() && last.number == grid.max_dot_number()
        }
        None => false,
    }
}

/// Validate the sequence and report both validity and completion.
pub fn verdict(grid: &Grid, dot_sequence: &[Dot]) -> ConnectionVerdict {
    ConnectionVerdict {
        is_valid: validate(grid, dot_sequence),
        is_complete: is_complete(grid, dot_sequence),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::puzzle;

    #[test]
    fn test_short_sequences_are_valid() {
        let grid: Grid = puzzle::generate(5, Some(42)).unwrap();
        assert!(validate(&grid, &[]));
        assert!(validate(&grid, &grid.dots[0..1]));
        assert!(!is_complete(&grid, &[]));
    }

    #[test]
    fn test_sequential_numbers_required() {
        let grid: Grid = puzzle::generate(5, Some(42)).unwrap();
        // Skipping dot 2 is invalid even if the cells are reachable.
        let skipping: Vec<Dot> = vec![grid.dots[0], grid.dots[2]];
        assert!(!validate(&grid, &skipping));
        // Going backward is invalid too.
        let backward: Vec<Dot> = vec![grid.dots[1], grid.dots[0]];
        assert!(!validate(&grid, &backward));
    }

    #[test]
    fn test_generated_solution_validates_and_completes() {
        for seed in [1, 7, 42, 2026] {
            for size in [5, 6] {
                let grid: Grid = puzzle::generate(size, Some(seed)).unwrap();
                // Project the solution path onto the dots it traverses.
                let dot_sequence: Vec<Dot> = grid
                    .solution_path
                    .as_ref()
                    .unwrap()
                    .get()
                    .iter()
                    .filter_map(|p| grid.dot_at(*p).copied())
                    .collect();
                let ret: ConnectionVerdict = verdict(&grid, &dot_sequence);
                assert!(ret.is_valid);
                assert!(ret.is_complete);
            }
        }
    }

    #[test]
    fn test_incomplete_prefix_is_not_complete() {
        let grid: Grid = puzzle::generate(5, Some(42)).unwrap();
        let prefix: Vec<Dot> = grid.dots[0..3].to_vec();
        // A prefix in order is valid when reachable, but never complete.
        assert!(!is_complete(&grid, &prefix));
    }
}
