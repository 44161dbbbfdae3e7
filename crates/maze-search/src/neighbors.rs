use std::collections::HashMap;

use maze_core::{Bounds, Cell, Direction, Maze};

use crate::traits::Pather;

/// The wall records of a [`Maze`] drive adjacency: a neighbour is included
/// iff it lies inside the grid and the current cell's record marks that
/// side open. Neighbours come out in North, South, West, East order.
impl Pather for Maze {
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        let walls = self.walls(c);
        for d in Direction::ALL {
            let n = c.step(d);
            if walls.is_open(d) && self.contains(n) {
                buf.push(n);
            }
        }
    }

    #[inline]
    fn contains(&self, c: Cell) -> bool {
        Maze::contains(self, c)
    }
}

/// Explicit adjacency lists: cell → reachable neighbour cells.
///
/// An alternative to wall records for callers that already hold a
/// neighbour map. Entries pointing outside `bounds` are ignored.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    bounds: Bounds,
    map: HashMap<Cell, Vec<Cell>>,
}

impl Adjacency {
    /// Create an empty adjacency for a `rows × cols` grid.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            bounds: Bounds::new(rows, cols),
            map: HashMap::new(),
        }
    }

    /// Build the adjacency lists equivalent to a maze's wall records.
    pub fn from_maze(maze: &Maze) -> Self {
        let mut adj = Self::new(maze.rows(), maze.cols());
        let mut buf = Vec::with_capacity(4);
        for c in maze.cells() {
            buf.clear();
            maze.neighbors(c, &mut buf);
            if !buf.is_empty() {
                adj.map.insert(c, buf.clone());
            }
        }
        adj
    }

    /// The grid dimensions.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Add a one-way edge `from → to`. Duplicates are ignored.
    pub fn insert(&mut self, from: Cell, to: Cell) {
        let list = self.map.entry(from).or_default();
        if !list.contains(&to) {
            list.push(to);
        }
    }

    /// Add edges in both directions.
    pub fn connect(&mut self, a: Cell, b: Cell) {
        self.insert(a, b);
        self.insert(b, a);
    }
}

impl Pather for Adjacency {
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        if let Some(list) = self.map.get(&c) {
            buf.extend(list.iter().copied().filter(|&n| self.bounds.contains(n)));
        }
    }

    #[inline]
    fn contains(&self, c: Cell) -> bool {
        self.bounds.contains(c)
    }
}

/// Reusable neighbour buffer.
///
/// Wraps a small `Vec` so repeated neighbour queries do not allocate.
pub struct Neighbors {
    buf: Vec<Cell>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the neighbours of `c` according to `pather`.
    pub fn of<P: Pather + ?Sized>(&mut self, pather: &P, c: Cell) -> &[Cell] {
        self.buf.clear();
        pather.neighbors(c, &mut self.buf);
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::Walls;

    #[test]
    fn interior_cell_of_open_maze() {
        let m = Maze::open_all(3, 3);
        let mut nb = Neighbors::new();
        assert_eq!(
            nb.of(&m, Cell::new(2, 2)),
            &[
                Cell::new(1, 2),
                Cell::new(3, 2),
                Cell::new(2, 1),
                Cell::new(2, 3)
            ]
        );
    }

    #[test]
    fn corner_has_fewer_candidates() {
        let m = Maze::open_all(3, 3);
        let mut nb = Neighbors::new();
        assert_eq!(nb.of(&m, Cell::new(1, 1)), &[Cell::new(2, 1), Cell::new(1, 2)]);
        assert_eq!(nb.of(&m, Cell::new(3, 3)), &[Cell::new(2, 3), Cell::new(3, 2)]);
    }

    #[test]
    fn out_of_bounds_never_included() {
        let mut m = Maze::new(1, 1);
        m.set_walls(Cell::new(1, 1), Walls::OPEN);
        let mut nb = Neighbors::new();
        assert!(nb.of(&m, Cell::new(1, 1)).is_empty());
    }

    #[test]
    fn walls_block_neighbors() {
        let mut m = Maze::new(2, 2);
        m.open(Cell::new(1, 1), Direction::South);
        let mut nb = Neighbors::new();
        assert_eq!(nb.of(&m, Cell::new(1, 1)), &[Cell::new(2, 1)]);
        assert!(nb.of(&m, Cell::new(1, 2)).is_empty());
    }

    #[test]
    fn only_the_current_record_is_consulted() {
        // (1,1) says east is open, (1,2) says west is walled.
        let mut m = Maze::new(1, 2);
        m.set_walls(Cell::new(1, 1), Walls::CLOSED.with_open(Direction::East));
        let mut nb = Neighbors::new();
        assert_eq!(nb.of(&m, Cell::new(1, 1)), &[Cell::new(1, 2)]);
        assert!(nb.of(&m, Cell::new(1, 2)).is_empty());
    }

    #[test]
    fn adjacency_matches_maze() {
        let m = Maze::open_all(2, 3);
        let adj = Adjacency::from_maze(&m);
        let mut a = Neighbors::new();
        let mut b = Neighbors::new();
        for c in m.cells() {
            assert_eq!(a.of(&m, c), b.of(&adj, c));
        }
    }

    #[test]
    fn adjacency_filters_out_of_bounds() {
        let mut adj = Adjacency::new(1, 2);
        adj.connect(Cell::new(1, 1), Cell::new(1, 2));
        adj.insert(Cell::new(1, 1), Cell::new(0, 1));
        adj.insert(Cell::new(1, 1), Cell::new(1, 2));
        let mut nb = Neighbors::new();
        assert_eq!(nb.of(&adj, Cell::new(1, 1)), &[Cell::new(1, 2)]);
        assert_eq!(nb.of(&adj, Cell::new(1, 2)), &[Cell::new(1, 1)]);
        assert!(adj.contains(Cell::new(1, 2)));
        assert!(!adj.contains(Cell::new(2, 1)));
    }
}
