use maze_core::Cell;

/// Adjacency provider — enumerates the cells reachable in one step.
///
/// Implementations hold no mutable state, so one provider may serve any
/// number of concurrent searches.
pub trait Pather {
    /// Append the neighbours of `c` into `buf`. The caller clears `buf`
    /// before calling.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>);

    /// Whether `c` is a cell of the underlying grid.
    fn contains(&self, c: Cell) -> bool;
}
