/*
dots.rs

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

//! Select the numbered dot positions along a generated path.
//!
//! The first and last cells of the path always receive the first and last
//! dots. Because the remaining dots are drawn from the interior of the path
//! and numbered in path order, connecting the dots in ascending order while
//! filling every cell is always achievable: the full path itself is the
//! solution.

use log::debug;

use super::grid::Position;
use super::path::Path;
use super::rng;
use super::rng::SeededRandom;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum SelectionError {
    /// The path is too short to host the requested number of distinct
    /// dots.
    GridTooSmall,
}

/// Select `dot_count` ordered dot positions along the given full-coverage
/// path.
///
/// The returned positions are in visiting order: the first one is the
/// path's first cell, the last one is the path's last cell, and the
/// interior positions are distinct random interior path cells sorted by
/// path index.
///
/// # Errors
///
/// The method returns an error if the path holds fewer cells than
/// `dot_count`, since the dots could not all sit on distinct cells.
pub fn select_dot_positions(
    path: &Path,
    dot_count: usize,
    random: &mut Option<&mut SeededRandom>,
) -> Result<Vec<Position>, SelectionError> {
    let cells: &Vec<Position> = path.get();
    if dot_count < 2 || cells.len() < dot_count {
        return Err(SelectionError::GridTooSmall);
    }

    // Interior cells, excluding the pinned first and last cells.
    let middle: &[Position] = &cells[1..cells.len() - 1];

    // Draw distinct interior indices by rejection sampling.
    let mut selected: Vec<usize> = Vec::with_capacity(dot_count - 2);
    while selected.len() < dot_count - 2 && selected.len() < middle.len() {
        let index: usize = rng::random_index(random, middle.len());
        if !selected.contains(&index) {
            selected.push(index);
        }
    }

    // Sort by path index so the numbering respects the path order.
    selected.sort_unstable();
    debug!("Interior dot indices: {selected:?}");

    let mut positions: Vec<Position> = Vec::with_capacity(dot_count);
    positions.push(cells[0]);
    for index in &selected {
        positions.push(middle[*index]);
    }
    positions.push(cells[cells.len() - 1]);
    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::snake;
    use crate::generator::snake::Corner;

    #[test]
    fn test_ends_are_pinned() {
        let path: Path = snake::snake_path(5, Corner::TopLeft);
        let mut random: Option<&mut SeededRandom> = None;
        let positions: Vec<Position> =
            select_dot_positions(&path, 8, &mut random).unwrap();
        assert_eq!(positions.len(), 8);
        assert_eq!(positions[0], path.first().unwrap());
        assert_eq!(positions[7], path.last().unwrap());
    }

    #[test]
    fn test_positions_are_distinct_and_ordered() {
        let path: Path = snake::snake_path(6, Corner::BottomRight);
        let mut seeded = SeededRandom::new(1234);
        let mut random: Option<&mut SeededRandom> = Some(&mut seeded);
        let positions: Vec<Position> =
            select_dot_positions(&path, 8, &mut random).unwrap();

        let mut indices: Vec<usize> = Vec::new();
        for position in &positions {
            let index: usize = path.position_index(*position).unwrap();
            indices.push(index);
        }
        let mut sorted: Vec<usize> = indices.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(indices, sorted);
        assert_eq!(indices.len(), 8);
    }

    #[test]
    fn test_seeded_selection_is_reproducible() {
        let path: Path = snake::snake_path(5, Corner::TopLeft);
        let mut seeded1 = SeededRandom::new(42);
        let mut seeded2 = SeededRandom::new(42);
        let mut random1: Option<&mut SeededRandom> = Some(&mut seeded1);
        let mut random2: Option<&mut SeededRandom> = Some(&mut seeded2);
        assert_eq!(
            select_dot_positions(&path, 8, &mut random1),
            select_dot_positions(&path, 8, &mut random2)
        );
    }

    #[test]
    fn test_path_too_short() {
        let path: Path = snake::snake_path(2, Corner::TopLeft);
        let mut random: Option<&mut SeededRandom> = None;
        assert_eq!(
            select_dot_positions(&path, 8, &mut random),
            Err(SelectionError::GridTooSmall)
        );
    }

    #[test]
    fn test_exact_fit_uses_every_cell() {
        // A 3x3 snake holds 9 cells: 8 dots leave a single free cell.
        let path: Path = snake::snake_path(3, Corner::TopLeft);
        let mut seeded = SeededRandom::new(9);
        let mut random: Option<&mut SeededRandom> = Some(&mut seeded);
        let positions: Vec<Position> =
            select_dot_positions(&path, 8, &mut random).unwrap();
        assert_eq!(positions.len(), 8);
        let mut distinct: Vec<Position> = positions.clone();
        distinct.sort_unstable_by_key(|p| (p.y, p.x));
        distinct.dedup();
        assert_eq!(distinct.len(), 8);
    }
}
