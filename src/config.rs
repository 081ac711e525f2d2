/*
config.rs

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

//! Application constants and the fixed puzzle configurations.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// Copyright notice displayed by `zipgrid --version`.
pub const COPYRIGHT_NOTICE: &str = "Copyright 2026 Hervé Quatremain

License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

/// Number of numbered dots placed on every puzzle.
pub const DOT_COUNT: usize = 8;

/// Smallest supported grid size. A smaller grid cannot host [`DOT_COUNT`]
/// distinct dots along its solution path.
pub const MIN_GRID_SIZE: usize = 3;

/// Puzzle difficulty level.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[repr(i32)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
        }
    }
}

/// Fixed parameters of a puzzle configuration.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridConfig {
    /// Width and height of the square grid.
    pub size: usize,

    /// Number of dots placed on the grid.
    pub dots: usize,

    /// Human readable name for the configuration.
    pub name: &'static str,
}

impl Difficulty {
    /// Return the grid configuration for the difficulty level.
    pub fn config(self) -> GridConfig {
        match self {
            Difficulty::Easy => GridConfig {
                size: 5,
                dots: DOT_COUNT,
                name: "5x5 Compact",
            },
            Difficulty::Medium => GridConfig {
                size: 6,
                dots: DOT_COUNT,
                name: "6x6 Balanced",
            },
        }
    }
}
