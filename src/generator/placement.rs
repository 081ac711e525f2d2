/*
placement.rs

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

//! Free-form dot placement with a coverage estimate.
//!
//! This is the older, looser placement strategy: dots are dropped on
//! arbitrary cells and a probe estimates whether a path through them can
//! plausibly cover the grid, by walking concrete L-shaped segments between
//! consecutive dots and measuring how much of the grid the segments touch.
//! Unlike [`crate::generator::puzzle`], nothing here guarantees a
//! full-coverage solution; the strict path-first generator supersedes this
//! module and the main generation flow does not use it.

use log::debug;
use rand::Rng;
use std::collections::HashSet;

use super::grid::{Dot, Grid, Position};

/// Number of random placements tried before falling back to the spiral
/// pattern.
const MAX_ATTEMPTS: usize = 100;

/// Fraction of the grid that the dot-to-dot segments must touch for a
/// placement to be accepted.
const COVERAGE_RATIO: f64 = 0.6;

/// Estimate whether connecting the dots in ascending order can plausibly
/// cover the grid.
///
/// The probe walks an unobstructed L-shaped segment between each pair of
/// consecutive dots and accepts the placement when the union of the
/// segment cells reaches the coverage ratio. This is a heuristic: it
/// neither proves nor disproves that a full-coverage path exists.
pub fn covers_enough(grid: &Grid, dots: &[Dot]) -> bool {
    if dots.len() != crate::config::DOT_COUNT {
        return false;
    }

    let mut ordered: Vec<&Dot> = dots.iter().collect();
    ordered.sort_unstable_by_key(|d| d.number);

    let mut visited: HashSet<Position> = HashSet::new();
    for pair in ordered.windows(2) {
        let from: Position = pair[0].position;
        let to: Position = pair[1].position;
        match segment(from, to, grid) {
            Some(cells) => visited.extend(cells),
            None => return false,
        }
    }

    let wanted: usize = ((grid.size * grid.size) as f64 * COVERAGE_RATIO).floor() as usize;
    debug!("Coverage: {} cells, {} wanted", visited.len(), wanted);
    visited.len() >= wanted
}

/// Return the cells of an unobstructed L-shaped segment between the two
/// positions, trying horizontal-then-vertical first.
fn segment(from: Position, to: Position, grid: &Grid) -> Option<Vec<Position>> {
    hv_segment(from, to, grid).or_else(|| vh_segment(from, to, grid))
}

/// Whether the cell blocks a segment between `from` and `to`. The two
/// endpoints themselves never block.
fn obstructed(x: i64, y: i64, grid: &Grid, from: Position, to: Position) -> bool {
    if x < 0 || x >= grid.size as i64 || y < 0 || y >= grid.size as i64 {
        return true;
    }
    let position: Position = Position::new(x as usize, y as usize);
    if position == from || position == to {
        return false;
    }
    grid.is_occupied(position)
}

/// Horizontal-then-vertical segment walk.
fn hv_segment(from: Position, to: Position, grid: &Grid) -> Option<Vec<Position>> {
    let mut cells: Vec<Position> = Vec::new();

    if from.x != to.x {
        let step: i64 = if from.x < to.x { 1 } else { -1 };
        let mut x: i64 = from.x as i64;
        while x != to.x as i64 {
            if obstructed(x, from.y as i64, grid, from, to) {
                return None;
            }
            cells.push(Position::new(x as usize, from.y));
            x += step;
        }
    }

    if from.y != to.y {
        let step: i64 = if from.y < to.y { 1 } else { -1 };
        let mut y: i64 = from.y as i64;
        while y != to.y as i64 {
            if obstructed(to.x as i64, y, grid, from, to) {
                return None;
            }
            cells.push(Position::new(to.x, y as usize));
            y += step;
        }
    }

    cells.push(to);
    Some(cells)
}

/// Vertical-then-horizontal segment walk.
fn vh_segment(from: Position, to: Position, grid: &Grid) -> Option<Vec<Position>> {
    let mut cells: Vec<Position> = Vec::new();

    if from.y != to.y {
        let step: i64 = if from.y < to.y { 1 } else { -1 };
        let mut y: i64 = from.y as i64;
        while y != to.y as i64 {
            if obstructed(from.x as i64, y, grid, from, to) {
                return None;
            }
            cells.push(Position::new(from.x, y as usize));
            y += step;
        }
    }

    if from.x != to.x {
        let step: i64 = if from.x < to.x { 1 } else { -1 };
        let mut x: i64 = from.x as i64;
        while x != to.x as i64 {
            if obstructed(x, to.y as i64, grid, from, to) {
                return None;
            }
            cells.push(Position::new(x as usize, to.y));
            x += step;
        }
    }

    cells.push(to);
    Some(cells)
}

/// Draw random dot positions until the coverage probe accepts them.
///
/// After [`MAX_ATTEMPTS`] rejected placements, a spiral pattern around the
/// grid center is returned instead. This utility is inherently
/// non-deterministic and is not used by the seeded generation flow.
pub fn solvable_positions(size: usize, dot_count: usize) -> Vec<Position> {
    for attempt in 0..MAX_ATTEMPTS {
        let positions: Vec<Position> = random_positions(size, dot_count);

        let mut grid: Grid = Grid::new(size);
        if grid.place_dots(&positions).is_err() {
            continue;
        }
        if covers_enough(&grid, &grid.dots) {
            debug!("Placement accepted at attempt {attempt}");
            return positions;
        }
    }
    debug!("No random placement accepted: using the spiral pattern");
    spiral_positions(size, dot_count)
}

/// Draw `count` distinct random positions.
fn random_positions(size: usize, count: usize) -> Vec<Position> {
    let mut positions: Vec<Position> = Vec::with_capacity(count);
    while positions.len() < count {
        let position: Position = Position::new(
            rand::rng().random_range(0..size),
            rand::rng().random_range(0..size),
        );
        if !positions.contains(&position) {
            positions.push(position);
        }
    }
    positions
}

/// Build a center-out spiral placement.
fn spiral_positions(size: usize, dot_count: usize) -> Vec<Position> {
    let center: usize = size / 2;
    let mut positions: Vec<Position> = vec![Position::new(center, center)];

    let mut radius: usize = 1;
    while positions.len() < dot_count && radius < size {
        for candidate in ring_positions(center, radius, size) {
            if positions.len() >= dot_count {
                break;
            }
            if !positions.contains(&candidate) {
                positions.push(candidate);
            }
        }
        radius += 1;
    }

    // Complete with random cells if the rings did not provide enough.
    while positions.len() < dot_count {
        let position: Position = Position::new(
            rand::rng().random_range(0..size),
            rand::rng().random_range(0..size),
        );
        if !positions.contains(&position) {
            positions.push(position);
        }
    }
    positions.truncate(dot_count);
    positions
}

/// Return the in-bounds cells on the border of the square ring of the
/// given radius around the center.
fn ring_positions(center: usize, radius: usize, size: usize) -> Vec<Position> {
    let mut positions: Vec<Position> = Vec::new();
    let center: i64 = center as i64;
    let radius: i64 = radius as i64;

    for x in (center - radius)..=(center + radius) {
        for y in (center - radius)..=(center + radius) {
            if x < 0 || x >= size as i64 || y < 0 || y >= size as i64 {
                continue;
            }
            if x == center - radius
                || x == center + radius
                || y == center - radius
                || y == center + radius
            {
                positions.push(Position::new(x as usize, y as usize));
            }
        }
    }
    positions
}
