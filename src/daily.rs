/*
daily.rs

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

//! Daily challenge seed and completion state.
//!
//! The daily challenge must be the same puzzle for every player in the
//! world, so its seed is derived from the UTC calendar date: the date
//! string is folded into a 32-bit hash, and that seed drives the whole
//! generation (see [`crate::generator::rng`]). This module is the only
//! bridge between the wall clock and puzzle determinism.
//!
//! The completion state is a single stored value, the date of the last
//! completed daily challenge. See the [`crate::saver::daily`] module that
//! saves and restores it.

use chrono::Utc;
use std::error::Error;

use crate::saver::daily::SaverDaily;

/// Return today's date in UTC, formatted as `YYYY-MM-DD`.
pub fn todays_date_string() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Fold a date string into a 32-bit seed.
///
/// The hash is the standard polynomial string hash (`h = h * 31 + byte`,
/// computed as `(h << 5) - h + byte` on wrapping 32-bit signed integers).
/// The absolute value keeps the seed non-negative, so a hash that lands on
/// a negative value is normalized instead of rejected.
pub fn seed_for_date(date: &str) -> u32 {
    let mut hash: i32 = 0;
    for byte in date.bytes() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(byte));
    }
    hash.unsigned_abs()
}

/// Return the seed for today's daily challenge. Every caller worldwide
/// gets the same value during a given UTC day.
pub fn todays_seed() -> u32 {
    seed_for_date(&todays_date_string())
}

/// Whether the player already completed today's daily challenge.
pub fn is_completed_today(saver: &SaverDaily) -> bool {
    match saver.get_completion() {
        Ok(Some(date)) => date == todays_date_string(),
        _ => false,
    }
}

/// Record that the player completed today's daily challenge.
///
/// # Errors
///
/// The method returns an error if the completion date cannot be saved.
pub fn mark_completed(saver: &SaverDaily) -> Result<(), Box<dyn Error>> {
    saver.save_completion(&todays_date_string())
}

/// Whether the player can still play today's daily challenge.
pub fn can_play_daily(saver: &SaverDaily) -> bool {
    !is_completed_today(saver)
}
