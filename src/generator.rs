/*
generator.rs

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

//! Generate puzzles: grids with numbered dots and a known solution.
//!
//! A puzzle is built in three steps:
//!
//! * A random path that visits every cell of the grid exactly once is
//!   searched by [`hamiltonian::HamiltonianPath::generate`]. The search is
//!   bounded; if it gives up, the deterministic [`snake`] traversal is used
//!   instead, so a puzzle is always produced.
//!
//! * [`dots::select_dot_positions`] picks the numbered dot cells along the
//!   path. The first and last path cells always receive the first and last
//!   dots, which makes the generated path the puzzle's solution: connecting
//!   the dots in order while filling the whole grid is achievable by
//!   construction.
//!
//! * [`puzzle::assemble`] places the dots on a fresh [`grid::Grid`] and
//!   attaches the path as the grid's solution.
//!
//! [`puzzle::generate`] runs the three steps. When it is given a seed, all
//! the random draws come from the [`rng::SeededRandom`] source, and the
//! puzzle only depends on the seed: this is how the daily challenge
//! produces the same puzzle for every player (see [`crate::daily`]).
//!
//! The [`placement`] module is the older free-form placement strategy with
//! a coverage heuristic. It is kept for non-seeded experiments and is not
//! part of the generation flow above.

pub mod dots;
pub mod grid;
pub mod hamiltonian;
pub mod path;
pub mod placement;
pub mod puzzle;
pub mod rng;
pub mod snake;
