//! Uninformed and informed search over grid mazes.
//!
//! This crate finds a path between two cells of a [`maze_core::Maze`] with
//! one of four classical strategies and reports what the search cost:
//!
//! - **BFS** — FIFO frontier ([`MazeSearch::bfs`])
//! - **DFS** — LIFO frontier ([`MazeSearch::dfs`])
//! - **Greedy best-first** — frontier ordered by Manhattan distance to the
//!   goal ([`MazeSearch::greedy`])
//! - **A\*** — frontier ordered by steps taken plus Manhattan distance
//!   ([`MazeSearch::astar`])
//!
//! All four share one search loop parameterised by a [`Frontier`]
//! discipline. Every call starts from fresh state; nothing is carried
//! between searches.
//!
//! # Example
//!
//! ```
//! use maze_core::{Cell, Maze};
//! use maze_search::{MazeSearch, Strategy};
//!
//! let maze = Maze::open_all(1, 3);
//! let outcome = MazeSearch::new(&maze).search(Cell::new(1, 1), Cell::new(1, 3), Strategy::Bfs);
//! assert_eq!(outcome.depth, 2);
//! assert_eq!(outcome.metrics.num_expanded, 3);
//! ```

mod distance;
mod error;
mod frontier;
mod neighbors;
mod outcome;
mod search;
mod strategy;
mod traits;

pub use distance::manhattan;
pub use error::SearchError;
pub use frontier::{Entry, FifoFrontier, Frontier, LifoFrontier, PriorityFrontier};
pub use neighbors::{Adjacency, Neighbors};
pub use outcome::{SearchMetrics, SearchOutcome};
pub use search::{MazeSearch, search};
pub use strategy::Strategy;
pub use traits::Pather;
