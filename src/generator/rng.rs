/*
rng.rs

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

//! Deterministic random number source for seeded puzzles.
//!
//! Daily challenges must produce the exact same puzzle for every player, so
//! the seeded generation path cannot rely on ambient randomness. The
//! [`SeededRandom`] object implements a linear congruential generator with
//! the Numerical Recipes constants: from the same 32-bit seed it yields the
//! same infinite sequence on every platform.
//!
//! Free-play puzzles do not need reproducibility and draw from
//! [`rand::rng`] instead. The [`random_index`] helper lets the generation
//! code handle both cases with a single call.

use rand::Rng;

/// LCG multiplier.
const MULTIPLIER: u32 = 1_664_525;

/// LCG increment.
const INCREMENT: u32 = 1_013_904_223;

/// Deterministic pseudo-random number generator.
#[derive(Debug, Clone, PartialEq)]
pub struct SeededRandom {
    /// Internal state, advanced on every draw.
    seed: u32,
}

impl SeededRandom {
    /// Create a [`SeededRandom`] object from a 32-bit seed.
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Return the next random value in `[0, 1)`.
    ///
    /// The state advances with `seed = (seed * 1664525 + 1013904223) mod 2^32`
    /// and the returned value is `seed / 2^32`.
    pub fn next(&mut self) -> f64 {
        self.seed = self
            .seed
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        f64::from(self.seed) / 4_294_967_296.0
    }

    /// Return a random integer in `[0, max)`.
    pub fn next_int(&mut self, max: usize) -> usize {
        (self.next() * max as f64).floor() as usize
    }

    /// Reset the internal state to the given seed.
    pub fn set_seed(&mut self, seed: u32) {
        self.seed = seed;
    }
}

/// Draw a random index in `[0, max)` from the seeded source if one is
/// provided, or from the ambient generator otherwise.
///
/// `max` must not be zero.
pub fn random_index(rng: &mut Option<&mut SeededRandom>, max: usize) -> usize {
    match rng {
        Some(r) => r.next_int(max),
        None => rand::rng().random_range(0..max),
    }
}
