use std::fmt;

use maze_core::Cell;

/// Errors returned to the caller of a search.
///
/// An unreachable goal is not an error; see
/// [`SearchOutcome::path`](crate::SearchOutcome::path).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The strategy name is not one of the recognised values.
    UnknownStrategy(String),
    /// Start or goal lies outside the grid.
    OutOfBounds { cell: Cell },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownStrategy(name) => write!(
                f,
                "unknown search strategy \u{201c}{name}\u{201d} (expected BFS, DFS, GS or AStar)"
            ),
            Self::OutOfBounds { cell } => write!(f, "cell {cell} is outside the maze"),
        }
    }
}

impl std::error::Error for SearchError {}
