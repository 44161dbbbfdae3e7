//! Maze connectivity storage.
//!
//! A [`Maze`] stores one [`Walls`] record per cell of a 1-indexed grid. It
//! is a finished maze: nothing here decides *which* walls to carve, it only
//! records and answers questions about them.

use crate::geom::{Bounds, BoundsIter, Cell, Direction};
use crate::walls::Walls;

/// A rectangular maze: grid bounds plus a wall record per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    bounds: Bounds,
    walls: Vec<Walls>,
}

impl Maze {
    /// Create a `rows × cols` maze with every wall standing.
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Bounds::new(rows, cols);
        Self {
            bounds,
            walls: vec![Walls::CLOSED; bounds.len()],
        }
    }

    /// Create a `rows × cols` maze where every interior passage is open.
    ///
    /// Outer boundary sides stay walled.
    pub fn open_all(rows: i32, cols: i32) -> Self {
        let mut m = Self::new(rows, cols);
        for c in m.cells() {
            m.open(c, Direction::South);
            m.open(c, Direction::East);
        }
        m
    }

    /// The grid dimensions.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Whether `c` is inside the maze.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.bounds.contains(c)
    }

    /// Row-major iterator over every cell.
    #[inline]
    pub fn cells(&self) -> BoundsIter {
        self.bounds.iter()
    }

    /// Wall record of `c`. Cells outside the maze read as fully walled.
    #[inline]
    pub fn walls(&self, c: Cell) -> Walls {
        match self.bounds.index(c) {
            Some(i) => self.walls[i],
            None => Walls::CLOSED,
        }
    }

    /// Overwrite the wall record of a single cell, without touching its
    /// neighbours. Returns `false` if `c` is out of bounds.
    ///
    /// This can produce asymmetric connectivity; prefer [`open`](Self::open)
    /// and [`close`](Self::close) for ordinary construction.
    pub fn set_walls(&mut self, c: Cell, w: Walls) -> bool {
        match self.bounds.index(c) {
            Some(i) => {
                self.walls[i] = w;
                true
            }
            None => false,
        }
    }

    /// Open the passage between `c` and its neighbour in `dir`, on both
    /// sides. Returns `false` (and changes nothing) if either cell is out of
    /// bounds.
    pub fn open(&mut self, c: Cell, dir: Direction) -> bool {
        self.carve(c, dir, true)
    }

    /// Wall off the passage between `c` and its neighbour in `dir`, on both
    /// sides. Returns `false` if either cell is out of bounds.
    pub fn close(&mut self, c: Cell, dir: Direction) -> bool {
        self.carve(c, dir, false)
    }

    fn carve(&mut self, c: Cell, dir: Direction, open: bool) -> bool {
        let n = c.step(dir);
        let (Some(ci), Some(ni)) = (self.bounds.index(c), self.bounds.index(n)) else {
            return false;
        };
        let back = dir.opposite();
        if open {
            self.walls[ci] = self.walls[ci].with_open(dir);
            self.walls[ni] = self.walls[ni].with_open(back);
        } else {
            self.walls[ci] = self.walls[ci].with_closed(dir);
            self.walls[ni] = self.walls[ni].with_closed(back);
        }
        true
    }

    /// Whether `a` and `b` are orthogonally adjacent, both inside the maze,
    /// and the passage between them is open from both sides.
    pub fn is_open_between(&self, a: Cell, b: Cell) -> bool {
        if !self.contains(a) || !self.contains(b) {
            return false;
        }
        match a.direction_to(b) {
            Some(d) => self.walls(a).is_open(d) && self.walls(b).is_open(d.opposite()),
            None => false,
        }
    }

    /// Whether `path` is a non-empty walk through open passages: every
    /// consecutive pair is one step apart and open in both directions.
    pub fn is_valid_path(&self, path: &[Cell]) -> bool {
        match path.first() {
            None => false,
            Some(&first) => {
                self.contains(first) && path.windows(2).all(|w| self.is_open_between(w[0], w[1]))
            }
        }
    }

    /// Whether every open side has a matching open side on the neighbour and
    /// no open side leads outside the grid.
    pub fn is_symmetric(&self) -> bool {
        self.cells().all(|c| {
            self.walls(c)
                .open_directions()
                .all(|d| self.is_open_between(c, c.step(d)))
        })
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn maze_round_trip() {
        let mut m = Maze::new(2, 3);
        m.open(Cell::new(1, 1), Direction::South);
        m.open(Cell::new(2, 2), Direction::East);
        let json = serde_json::to_string(&m).unwrap();
        let back: Maze = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
