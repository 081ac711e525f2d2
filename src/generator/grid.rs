/*
grid.rs

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

//! Puzzle grid, cells, and numbered dots.

use serde::{Deserialize, Serialize};

use super::path::Path;

/// Zero-based cell coordinates, `0 <= x, y < size`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    /// Create a [`Position`] object.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// A numbered dot placed on the grid.
///
/// The `number` parameter, between 1 and the dot count, is the order in which
/// the player must connect the dots. The `id` parameter is the creation
/// index, which is stable even if numbering schemes change. Dots are created
/// at generation time and never mutated afterward.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Dot {
    /// Stable identifier (creation index).
    pub id: usize,

    /// Cell holding the dot.
    pub position: Position,

    /// Required visiting order, starting at 1.
    pub number: usize,
}

/// A single grid cell.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GridCell {
    /// Coordinates of the cell.
    pub position: Position,

    /// Whether a dot sits on the cell. This is the only obstruction signal
    /// used by the reachability checks.
    pub is_occupied: bool,

    /// Whether the cell is part of the currently drawn path. Reserved for
    /// the rendering layer; the validators ignore it.
    pub is_path: bool,

    /// The dot on the cell, if any.
    pub dot: Option<Dot>,
}

/// Type of errors raised when placing dots.
#[derive(Debug, PartialEq)]
pub enum PlacementError {
    /// A computed dot position falls outside the grid. This is a generator
    /// defect, not a user error.
    OutOfBounds { position: Position, size: usize },
}

/// The puzzle grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Grid {
    /// Width and height of the square grid.
    pub size: usize,

    /// Cells indexed `[y][x]`.
    pub cells: Vec<Vec<GridCell>>,

    /// Dots in creation (numbering) order.
    pub dots: Vec<Dot>,

    /// The known full-coverage solution, attached at generation time for
    /// the "show solution" feature.
    pub solution_path: Option<Path>,
}

impl Grid {
    /// Create an empty grid with no dots.
    pub fn new(size: usize) -> Self {
        let mut cells: Vec<Vec<GridCell>> = Vec::with_capacity(size);
        for y in 0..size {
            let mut row: Vec<GridCell> = Vec::with_capacity(size);
            for x in 0..size {
                row.push(GridCell {
                    position: Position::new(x, y),
                    is_occupied: false,
                    is_path: false,
                    dot: None,
                });
            }
            cells.push(row);
        }
        Self {
            size,
            cells,
            dots: Vec::new(),
            solution_path: None,
        }
    }

    /// Whether the position is inside the grid.
    pub fn in_bounds(&self, position: Position) -> bool {
        position.x < self.size && position.y < self.size
    }

    /// Return the cell at the given position.
    pub fn cell(&self, position: Position) -> &GridCell {
        &self.cells[position.y][position.x]
    }

    /// Whether a dot occupies the cell at the given position.
    pub fn is_occupied(&self, position: Position) -> bool {
        self.cells[position.y][position.x].is_occupied
    }

    /// Return the dot at the given position, if any.
    pub fn dot_at(&self, position: Position) -> Option<&Dot> {
        self.cells[position.y][position.x].dot.as_ref()
    }

    /// Return the number of dots on the grid.
    pub fn dot_count(&self) -> usize {
        self.dots.len()
    }

    /// Return the highest dot number on the grid.
    ///
    /// Dot numbers form the contiguous range from 1 to the dot count, so
    /// this is also the number of the final dot of the puzzle.
    pub fn max_dot_number(&self) -> usize {
        self.dots.len()
    }

    /// Place a dot on each of the given positions, in numbering order: the
    /// first position receives dot 1, the second dot 2, and so on.
    ///
    /// # Errors
    ///
    /// The method returns an error if a position falls outside the grid.
    /// Silently skipping the dot would break the "exactly `dot_count` dots"
    /// invariant, so the defect is reported instead.
    pub fn place_dots(&mut self, positions: &[Position]) -> Result<(), PlacementError> {
        for (index, position) in positions.iter().enumerate() {
            if !self.in_bounds(*position) {
                return Err(PlacementError::OutOfBounds {
                    position: *position,
                    size: self.size,
                });
            }
            let dot: Dot = Dot {
                id: index,
                position: *position,
                number: index + 1,
            };
            self.cells[position.y][position.x].dot = Some(dot);
            self.cells[position.y][position.x].is_occupied = true;
            self.dots.push(dot);
        }
        Ok(())
    }

    /// Attach the full-coverage solution path to the grid.
    pub fn set_solution_path(&mut self, path: Path) {
        self.solution_path = Some(path);
    }
}
