use std::fmt;

use maze_core::Cell;

use crate::strategy::Strategy;

/// What a search cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchMetrics {
    /// Frontier entries ever pushed, the start entry included.
    pub num_created: usize,
    /// Cells expanded, counting each cell once.
    pub num_expanded: usize,
    /// Largest frontier size observed.
    pub max_fringe: usize,
}

/// Result of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    pub strategy: Strategy,
    pub start: Cell,
    pub goal: Cell,
    /// Cells from start to goal inclusive, or `None` if the goal is
    /// unreachable.
    pub path: Option<Vec<Cell>>,
    /// `path.len() - 1`, or `-1` when no path was found.
    pub depth: i32,
    /// Populated whether or not a path was found.
    pub metrics: SearchMetrics,
}

impl SearchOutcome {
    /// Whether a path to the goal was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// The path as a slice; empty when none was found.
    pub fn cells(&self) -> &[Cell] {
        self.path.as_deref().unwrap_or(&[])
    }
}

impl fmt::Display for SearchOutcome {
    /// One line per run: strategy, endpoints, depth and metrics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {} depth={} created={} expanded={} max_fringe={}",
            self.strategy,
            self.start,
            self.goal,
            self.depth,
            self.metrics.num_created,
            self.metrics.num_expanded,
            self.metrics.max_fringe
        )
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn outcome_round_trip() {
        let o = SearchOutcome {
            strategy: Strategy::Greedy,
            start: Cell::new(2, 1),
            goal: Cell::new(1, 1),
            path: Some(vec![Cell::new(2, 1), Cell::new(1, 1)]),
            depth: 1,
            metrics: SearchMetrics {
                num_created: 2,
                num_expanded: 2,
                max_fringe: 1,
            },
        };
        let json = serde_json::to_string(&o).unwrap();
        let back: SearchOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, o);
    }
}
