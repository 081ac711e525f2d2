/*
path.rs

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

//! Ordered path of cells over the puzzle grid.

use serde::{Deserialize, Serialize};

use super::grid::Position;

/// Path object.
///
/// The path stores an ordered list of positions. Positions must be inside
/// the `size x size` grid the path was created for.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct Path {
    /// Width and height of the grid the path runs over.
    size: usize,

    /// Path as an ordered list of positions.
    path: Vec<Position>,

    /// Visited status of each cell, indexed by `y * size + x`.
    /// Instead of looking for the position in the [`Path::path`] vector,
    /// this array speeds up the lookup.
    visited: Vec<bool>,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Path {
    /// Create a [`Path`] object for a `size x size` grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            path: Vec::with_capacity(size * size),
            visited: vec![false; size * size],
        }
    }

    /// Remove all the positions from the path.
    pub fn clear(&mut self) {
        self.path.clear();
        self.visited.fill(false);
    }

    /// Add a position to the path.
    pub fn push(&mut self, position: Position) {
        self.path.push(position);
        self.visited[position.y * self.size + position.x] = true;
    }

    /// Remove the last position from the path.
    pub fn pop(&mut self) {
        if let Some(position) = self.path.pop() {
            self.visited[position.y * self.size + position.x] = false;
        }
    }

    /// Get the number of positions in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the path is empty.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether the position is in the path or not.
    pub fn contains(&self, position: Position) -> bool {
        self.visited[position.y * self.size + position.x]
    }

    /// Return a reference to the path vector.
    pub fn get(&self) -> &Vec<Position> {
        &self.path
    }

    /// Return the index of the given position in the path.
    pub fn position_index(&self, position: Position) -> Option<usize> {
        self.path.iter().position(|p| *p == position)
    }

    /// Return the first position in the path.
    pub fn first(&self) -> Option<Position> {
        self.path.first().copied()
    }

    /// Return the last position in the path.
    pub fn last(&self) -> Option<Position> {
        self.path.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_contains() {
        let mut path: Path = Path::new(3);
        assert!(path.is_empty());
        path.push(Position::new(0, 0));
        path.push(Position::new(1, 0));
        assert_eq!(path.len(), 2);
        assert!(path.contains(Position::new(0, 0)));
        assert!(path.contains(Position::new(1, 0)));
        assert!(!path.contains(Position::new(2, 2)));
        path.pop();
        assert_eq!(path.len(), 1);
        assert!(!path.contains(Position::new(1, 0)));
        path.pop();
        assert!(path.is_empty());
        // Popping an empty path is a no-op.
        path.pop();
        assert!(path.is_empty());
    }

    #[test]
    fn test_first_last_index() {
        let mut path: Path = Path::new(3);
        assert_eq!(path.first(), None);
        assert_eq!(path.last(), None);
        path.push(Position::new(2, 1));
        path.push(Position::new(2, 2));
        path.push(Position::new(1, 2));
        assert_eq!(path.first(), Some(Position::new(2, 1)));
        assert_eq!(path.last(), Some(Position::new(1, 2)));
        assert_eq!(path.position_index(Position::new(2, 2)), Some(1));
        assert_eq!(path.position_index(Position::new(0, 0)), None);
    }

    #[test]
    fn test_clear() {
        let mut path: Path = Path::new(2);
        path.push(Position::new(0, 1));
        path.clear();
        assert!(path.is_empty());
        assert!(!path.contains(Position::new(0, 1)));
    }

    #[test]
    fn test_equality_ignores_bookkeeping() {
        let mut path1: Path = Path::new(3);
        let mut path2: Path = Path::new(3);
        path1.push(Position::new(0, 0));
        path2.push(Position::new(0, 0));
        assert_eq!(path1, path2);
        path2.push(Position::new(1, 0));
        assert_ne!(path1, path2);
    }
}
