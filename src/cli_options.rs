/*
cli_options.rs

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

//! Process command-line options.
//!
//! The command-line tool is intended for developers and for front ends
//! embedding the engine: it generates puzzles, prints them as text, and
//! verifies each generated puzzle against the validators.
//!
//! # Examples
//!
//! Generate today's daily challenge and print its solution:
//!
//! ```
//! $ zipgrid --daily --solution
//! ```
//!
//! Generate three reproducible medium puzzles and print search statistics:
//!
//! ```
//! $ zipgrid -f medium --seed 42 --count 3 --summary
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::path::PathBuf;

use crate::config;
use crate::config::Difficulty;
use crate::daily;
use crate::game::Game;
use crate::generator::grid::{Dot, Grid, Position};
use crate::generator::hamiltonian::{HamiltonianError, HamiltonianPath};
use crate::generator::path::Path;
use crate::generator::puzzle;
use crate::generator::puzzle::GenerateError;
use crate::generator::rng::SeededRandom;
use crate::generator::snake;
use crate::saver::daily::SaverDaily;
use crate::validator::connection;

/// Generate and verify Zipgrid puzzles.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = config::COPYRIGHT_NOTICE)]
struct Args {
    /// Difficulty level for the puzzle
    #[arg(value_enum, short = 'f', long, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,

    /// Seed for reproducible generation
    #[arg(short, long, group = "mode")]
    seed: Option<u32>,

    /// Generate today's daily challenge
    #[arg(short = 'y', long, default_value_t = false, group = "mode")]
    daily: bool,

    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Print the solution along with each puzzle
    #[arg(short = 'p', long, default_value_t = false)]
    solution: bool,

    /// Print some statistics after generating the puzzles
    #[arg(short = 'm', long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process the command-line options, and return the process exit
/// code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let config::GridConfig { size, dots, name } = args.difficulty.config();
    debug!("Configuration: {name} ({size}x{size}, {dots} dots)");

    //
    // Resolve the base seed for the requested mode
    //
    let base_seed: Option<u32> = if args.daily {
        let seed: u32 = daily::todays_seed();
        println!(
            "Daily challenge for {} (seed {seed})",
            daily::todays_date_string()
        );
        if let Some(data_dir) = env::var_os("ZIPGRID_DATA_DIR") {
            let saver: SaverDaily = SaverDaily::new(PathBuf::from(data_dir));
            if daily::is_completed_today(&saver) {
                println!("Today's challenge is already completed.");
            }
        }
        Some(seed)
    } else {
        args.seed
    };

    let mut generator: HamiltonianPath = HamiltonianPath::new(size);
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut iterations: usize = 0;
    let mut fallbacks: usize = 0;

    for i in 0..args.count {
        debug!("Iteration {i}");

        // Derive one seed per puzzle so that --count produces distinct,
        // still reproducible, grids.
        let seed: Option<u32> = base_seed.map(|s| s.wrapping_add(i as u32));
        let mut seeded: Option<SeededRandom> = seed.map(SeededRandom::new);
        let mut random: Option<&mut SeededRandom> = seeded.as_mut();

        // Generate the full-coverage path
        let path: Path = match generator.generate(&mut random) {
            Ok(path) => {
                total += generator.duration;
                if generator.duration > max {
                    max = generator.duration;
                }
                iterations += generator.iteration;
                path
            }
            Err(HamiltonianError::Exhausted) => {
                fallbacks += 1;
                snake::random_snake_path(size, &mut random)
            }
        };

        // Verify that the path has the expected length
        if path.len() != size * size {
            eprintln!(
                "Wrong length: {} instead of {}: {:?}",
                path.len(),
                size * size,
                path.get()
            );
            panic!("Bug: wrong length for the generated path");
        }

        // Verify that there are no duplicated cells
        let mut cells: Vec<Position> = path.get().clone();
        cells.sort_unstable_by_key(|p| (p.y, p.x));
        cells.dedup();
        if cells.len() != size * size {
            eprintln!("Duplicated cells in path: {:?}", path.get());
            panic!("Bug: duplicated cells in generated path");
        }

        // Build the puzzle grid for the path
        let grid: Grid = match puzzle::assemble(size, path, &mut random) {
            Ok(grid) => grid,
            Err(GenerateError::GridTooSmall { size }) => {
                eprintln!("Grid size {size} is too small for {} dots", config::DOT_COUNT);
                return 1;
            }
            Err(GenerateError::Placement(error)) => {
                eprintln!("Dot placement failed: {error:?}");
                panic!("Bug: generated dot position outside the grid");
            }
        };

        verify(&grid);

        if let Some(s) = seed {
            println!("\nPuzzle {} ({name}, seed {s})", i + 1);
        } else {
            println!("\nPuzzle {} ({name})", i + 1);
        }
        print_grid(&grid);
        if args.solution {
            println!();
            print_solution(&grid);
        }
    }

    // Print some stats
    if args.summary {
        println!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
average iterations = {}
         fallbacks = {}",
            total,
            total / args.count as f32,
            max,
            iterations / args.count,
            fallbacks
        );
    }
    0
}

/// Verify the generated puzzle against the validators.
///
/// The generator's own solution must always be accepted: a rejection is a
/// bug, not a recoverable condition.
fn verify(grid: &Grid) {
    let solution: &Path = match grid.solution_path.as_ref() {
        Some(path) => path,
        None => panic!("Bug: generated grid without a solution path"),
    };

    // The solution must traverse every dot in ascending number order.
    let dot_sequence: Vec<Dot> = solution
        .get()
        .iter()
        .filter_map(|p| grid.dot_at(*p).copied())
        .collect();
    let numbers: Vec<usize> = dot_sequence.iter().map(|d| d.number).collect();
    let expected: Vec<usize> = (1..=config::DOT_COUNT).collect();
    if numbers != expected || !connection::is_complete(grid, &dot_sequence) {
        eprintln!("Solution dots: {dot_sequence:?}");
        panic!("Bug: the generated solution does not visit the dots in order");
    }

    // Replaying the solution cell by cell must solve the puzzle.
    let mut game: Game = Game::new(grid.clone());
    for position in solution.get() {
        game.apply_move(*position);
    }
    if !game.is_solved() {
        eprintln!("Solution path: {:?}", solution.get());
        panic!("Bug: replaying the generated solution does not solve the puzzle");
    }
}

/// Print the puzzle grid: dot numbers on their cells, dots elsewhere.
fn print_grid(grid: &Grid) {
    for row in &grid.cells {
        let mut line: String = String::with_capacity(grid.size * 3);
        for cell in row {
            match &cell.dot {
                Some(dot) => line.push_str(&format!("{:>3}", dot.number)),
                None => line.push_str("  ."),
            }
        }
        println!("{line}");
    }
}

/// Print the solution as the visiting order of each cell.
fn print_solution(grid: &Grid) {
    if let Some(path) = grid.solution_path.as_ref() {
        for y in 0..grid.size {
            let mut line: String = String::with_capacity(grid.size * 4);
            for x in 0..grid.size {
                match path.position_index(Position::new(x, y)) {
                    Some(index) => line.push_str(&format!("{:>4}", index + 1)),
                    None => line.push_str("   ?"),
                }
            }
            println!("{line}");
        }
    }
}
