//! **maze-core** — core types for grid mazes.
//!
//! This crate provides the foundational types used by the maze search
//! engine: 1-indexed grid coordinates, per-cell wall records, the [`Maze`]
//! connectivity store and a plain-text layout format.

pub mod geom;
pub mod layout;
pub mod maze;
pub mod walls;

pub use geom::{Bounds, BoundsIter, Cell, Direction};
pub use layout::MazeError;
pub use maze::Maze;
pub use walls::Walls;
