/*
reachability.rs

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

//! L-shaped reachability between two grid positions.
//!
//! Two positions are connectable when at least one of the two L-shaped
//! routes between them is unobstructed: one straight run along the starting
//! row then one along the target column, or the symmetric order. Only
//! occupied cells (cells holding a dot other than the endpoints) block a
//! route; plain cells never do. No diagonal or non-monotonic routing is
//! allowed: the routes mirror the family of moves the player can draw.

use crate::generator::grid::{Grid, Position};

/// Whether the two positions are connectable by an unobstructed L-shaped
/// route on the grid.
pub fn can_connect(from: Position, to: Position, grid: &Grid) -> bool {
    route_clear_hv(from, to, grid) || route_clear_vh(from, to, grid)
}

/// Check the horizontal-then-vertical route: along the row `from.y` from
/// `from.x` to `to.x`, then along the column `to.x` from `from.y` to
/// `to.y`. Cells on the endpoints' own column (first leg) or row (second
/// leg) are exempt, which covers the two endpoints and the corner cell.
fn route_clear_hv(from: Position, to: Position, grid: &Grid) -> bool {
    let start_x: usize = from.x.min(to.x);
    let end_x: usize = from.x.max(to.x);
    for x in start_x..=end_x {
        if x == from.x || x == to.x {
            continue;
        }
        if grid.is_occupied(Position::new(x, from.y)) {
            return false;
        }
    }

    let start_y: usize = from.y.min(to.y);
    let end_y: usize = from.y.max(to.y);
    for y in start_y..=end_y {
        if y == from.y || y == to.y {
            continue;
        }
        if grid.is_occupied(Position::new(to.x, y)) {
            return false;
        }
    }
    true
}

/// Check the vertical-then-horizontal route, symmetric to
/// [`route_clear_hv`].
fn route_clear_vh(from: Position, to: Position, grid: &Grid) -> bool {
    let start_y: usize = from.y.min(to.y);
    let end_y: usize = from.y.max(to.y);
    for y in start_y..=end_y {
        if y == from.y || y == to.y {
            continue;
        }
        if grid.is_occupied(Position::new(from.x, y)) {
            return false;
        }
    }

    let start_x: usize = from.x.min(to.x);
    let end_x: usize = from.x.max(to.x);
    for x in start_x..=end_x {
        if x == from.x || x == to.x {
            continue;
        }
        if grid.is_occupied(Position::new(x, to.y)) {
            return false;
        }
    }
    true
}
