/*
validator.rs

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

//! Validate the player's moves and connections.
//!
//! The rules are checked at two levels that must agree on what a legal
//! move is:
//!
//! * The [`connection`] module works on the dots the player visited, in
//!   order: consecutive dots must carry consecutive numbers and must be
//!   connectable by an unobstructed L-shaped route ([`reachability`]).
//!
//! * The [`trace`] module works on the raw cell-by-cell drag trace: each
//!   step must move to an adjacent free cell, dragging backward rewinds the
//!   trace, and the puzzle is complete once every cell is covered with the
//!   dots visited in ascending order.

pub mod connection;
pub mod reachability;
pub mod trace;
