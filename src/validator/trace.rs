/*
trace.rs

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

//! Validate the raw cell-by-cell drag trace.
//!
//! The trace grows one cell at a time as the player drags. A step forward
//! must move to an adjacent cell that is not already on the trace; dragging
//! back onto an earlier cell is not a mistake but an undo: the trace is
//! truncated to end at that cell. The puzzle is complete once the trace
//! covers the whole grid with the dots visited in ascending order.

use serde::{Deserialize, Serialize};

use crate::generator::grid::{Grid, Position};

/// Result of applying one player move to the trace.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MoveOutcome {
    /// The move is not legal; the trace is unchanged.
    Rejected,

    /// The trace was truncated back to the given cell.
    Rewound,

    /// The cell was appended to the trace.
    Extended,

    /// The cell was appended and the puzzle is now solved: every cell is
    /// covered and the dots were visited in order.
    Completed,
}

/// Whether the two positions differ by one unit on exactly one axis.
pub fn are_adjacent(a: Position, b: Position) -> bool {
    (a.x.abs_diff(b.x) == 1 && a.y == b.y) || (a.y.abs_diff(b.y) == 1 && a.x == b.x)
}

/// The player's drag trace.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Trace {
    /// Visited cells, in drag order.
    cells: Vec<Position>,
}

impl Trace {
    /// Create an empty [`Trace`] object.
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Remove all the cells from the trace.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Get the number of cells in the trace.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the trace is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Return a reference to the trace cells.
    pub fn get(&self) -> &Vec<Position> {
        &self.cells
    }

    /// Return the last cell of the trace.
    pub fn last(&self) -> Option<Position> {
        self.cells.last().copied()
    }

    /// Return the index of the given cell in the trace.
    pub fn position_index(&self, position: Position) -> Option<usize> {
        self.cells.iter().position(|p| *p == position)
    }

    /// Apply one player move to the trace.
    ///
    /// Moves are never errors: an illegal move is reported as
    /// [`MoveOutcome::Rejected`] and leaves the trace untouched, so the
    /// caller can keep feeding drag events without special handling.
    pub fn apply(&mut self, grid: &Grid, position: Position) -> MoveOutcome {
        if !grid.in_bounds(position) {
            return MoveOutcome::Rejected;
        }

        // The first cell of a drag can be anywhere on the grid.
        let last: Position = match self.last() {
            Some(p) => p,
            None => {
                self.cells.push(position);
                return MoveOutcome::Extended;
            }
        };

        if position == last {
            return MoveOutcome::Rejected;
        }

        // Dragging back onto an earlier cell rewinds the trace to end at
        // that cell. This is the only way the trace shrinks.
        if let Some(index) = self.position_index(position) {
            self.cells.truncate(index + 1);
            return MoveOutcome::Rewound;
        }

        if !are_adjacent(last, position) {
            return MoveOutcome::Rejected;
        }

        self.cells.push(position);
        if self.cells.len() == grid.size * grid.size && self.dots_in_order(grid) {
            return MoveOutcome::Completed;
        }
        MoveOutcome::Extended
    }

    /// Whether the trace visits every dot of the grid in ascending number
    /// order.
    fn dots_in_order(&self, grid: &Grid) -> bool {
        let on_trace: usize = grid
            .dots
            .iter()
            .filter(|dot| self.cells.contains(&dot.position))
            .count();
        if on_trace != grid.dot_count() {
            return false;
        }

        let mut expected: usize = 1;
        for cell in &self.cells {
            if let Some(dot) = grid.dot_at(*cell) {
                if dot.number != expected {
                    return false;
                }
                expected += 1;
            }
        }
        expected > grid.dot_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::puzzle;

    fn grid_with_dots(size: usize, cells: &[(usize, usize)]) -> Grid {
        let positions: Vec<Position> =
            cells.iter().map(|(x, y)| Position::new(*x, *y)).collect();
        let mut grid: Grid = Grid::new(size);
        grid.place_dots(&positions).unwrap();
        grid
    }

    #[test]
    fn test_adjacency() {
        assert!(are_adjacent(Position::new(1, 1), Position::new(2, 1)));
        assert!(are_adjacent(Position::new(1, 1), Position::new(1, 0)));
        assert!(!are_adjacent(Position::new(1, 1), Position::new(2, 2)));
        assert!(!are_adjacent(Position::new(1, 1), Position::new(1, 1)));
        assert!(!are_adjacent(Position::new(1, 1), Position::new(3, 1)));
    }

    #[test]
    fn test_forward_moves() {
        let grid: Grid = grid_with_dots(3, &[(0, 0), (2, 2)]);
        let mut trace: Trace = Trace::new();
        assert_eq!(trace.apply(&grid, Position::new(0, 0)), MoveOutcome::Extended);
        assert_eq!(trace.apply(&grid, Position::new(1, 0)), MoveOutcome::Extended);
        // Diagonal move.
        assert_eq!(trace.apply(&grid, Position::new(2, 1)), MoveOutcome::Rejected);
        // Teleport.
        assert_eq!(trace.apply(&grid, Position::new(1, 2)), MoveOutcome::Rejected);
        // Out of bounds.
        assert_eq!(trace.apply(&grid, Position::new(3, 0)), MoveOutcome::Rejected);
        // Same cell as the current head.
        assert_eq!(trace.apply(&grid, Position::new(1, 0)), MoveOutcome::Rejected);
        assert_eq!(trace.len(), 2);
    }

    #[test]
    fn test_rewind_truncates_then_extends() {
        let grid: Grid = grid_with_dots(3, &[(0, 0), (2, 2)]);
        let mut trace: Trace = Trace::new();
        trace.apply(&grid, Position::new(0, 0));
        trace.apply(&grid, Position::new(1, 0));
        trace.apply(&grid, Position::new(2, 0));
        assert_eq!(trace.apply(&grid, Position::new(1, 0)), MoveOutcome::Rewound);
        assert_eq!(
            trace.get(),
            &vec![Position::new(0, 0), Position::new(1, 0)]
        );
        assert_eq!(trace.apply(&grid, Position::new(1, 1)), MoveOutcome::Extended);
        assert_eq!(
            trace.get(),
            &vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_replaying_the_solution_completes() {
        for seed in [1, 42, 500] {
            for size in [5, 6] {
                let grid: Grid = puzzle::generate(size, Some(seed)).unwrap();
                let solution: Vec<Position> =
                    grid.solution_path.as_ref().unwrap().get().clone();
                let mut trace: Trace = Trace::new();
                for (index, position) in solution.iter().enumerate() {
                    let outcome: MoveOutcome = trace.apply(&grid, *position);
                    if index + 1 == solution.len() {
                        assert_eq!(outcome, MoveOutcome::Completed);
                    } else {
                        assert_eq!(outcome, MoveOutcome::Extended);
                    }
                }
            }
        }
    }

    #[test]
    fn test_full_coverage_with_bad_dot_order_is_not_complete() {
        // 3x3 grid, dots numbered against the traversal order: the snake
        // sweep covers every cell but meets dot 2 before dot 1.
        let grid: Grid = grid_with_dots(3, &[(2, 0), (0, 0), (2, 2)]);
        let sweep: Vec<Position> = vec![
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(2, 0),
            Position::new(2, 1),
            Position::new(1, 1),
            Position::new(0, 1),
            Position::new(0, 2),
            Position::new(1, 2),
            Position::new(2, 2),
        ];
        let mut trace: Trace = Trace::new();
        for position in &sweep {
            let outcome: MoveOutcome = trace.apply(&grid, *position);
            assert_ne!(outcome, MoveOutcome::Completed);
        }
        assert_eq!(trace.len(), 9);
    }

    #[test]
    fn test_partial_coverage_is_not_complete() {
        // All three dots visited in order, but one cell is left
        // uncovered.
        let grid: Grid = grid_with_dots(3, &[(0, 0), (1, 0), (2, 0)]);
        let mut trace: Trace = Trace::new();
        for position in [
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(2, 0),
        ] {
            assert_ne!(trace.apply(&grid, position), MoveOutcome::Completed);
        }
    }

    #[test]
    fn test_clear() {
        let grid: Grid = grid_with_dots(3, &[(0, 0), (2, 2)]);
        let mut trace: Trace = Trace::new();
        trace.apply(&grid, Position::new(1, 1));
        trace.clear();
        assert!(trace.is_empty());
    }
}
