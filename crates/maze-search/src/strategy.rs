use std::fmt;
use std::str::FromStr;

use maze_core::Cell;

use crate::distance::manhattan;
use crate::error::SearchError;

/// Search strategy: frontier discipline plus priority key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Breadth-first: FIFO frontier.
    Bfs,
    /// Depth-first: LIFO frontier.
    Dfs,
    /// Greedy best-first: ordered by `h(cell, goal)`.
    Greedy,
    /// A*: ordered by `g(cell) + h(cell, goal)`.
    AStar,
}

impl Strategy {
    /// All strategies.
    pub const ALL: [Strategy; 4] = [
        Strategy::Bfs,
        Strategy::Dfs,
        Strategy::Greedy,
        Strategy::AStar,
    ];

    /// Canonical short name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Bfs => "BFS",
            Strategy::Dfs => "DFS",
            Strategy::Greedy => "GS",
            Strategy::AStar => "AStar",
        }
    }

    /// Priority of a frontier entry for `cell`, reached in `g` steps.
    ///
    /// BFS and DFS do not order by priority and always return 0.
    #[inline]
    pub fn priority(self, cell: Cell, g: i32, goal: Cell) -> i32 {
        match self {
            Strategy::Bfs | Strategy::Dfs => 0,
            Strategy::Greedy => manhattan(cell, goal),
            Strategy::AStar => g + manhattan(cell, goal),
        }
    }

    /// Whether the search keeps a best-cost table and re-enqueues cells only
    /// on strict improvement.
    #[inline]
    pub const fn tracks_cost(self) -> bool {
        matches!(self, Strategy::AStar)
    }

    /// Whether the strategy is guaranteed to return a shortest path on a
    /// unit-cost grid.
    #[inline]
    pub const fn is_optimal(self) -> bool {
        matches!(self, Strategy::Bfs | Strategy::AStar)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    /// Parse a strategy name, ignoring case. Accepts `BFS`, `DFS`,
    /// `GS`/`Greedy` and `AStar`/`A*`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Strategy::Bfs),
            "dfs" => Ok(Strategy::Dfs),
            "gs" | "greedy" => Ok(Strategy::Greedy),
            "astar" | "a*" => Ok(Strategy::AStar),
            _ => Err(SearchError::UnknownStrategy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("BFS".parse::<Strategy>(), Ok(Strategy::Bfs));
        assert_eq!("dfs".parse::<Strategy>(), Ok(Strategy::Dfs));
        assert_eq!("GS".parse::<Strategy>(), Ok(Strategy::Greedy));
        assert_eq!("greedy".parse::<Strategy>(), Ok(Strategy::Greedy));
        assert_eq!("AStar".parse::<Strategy>(), Ok(Strategy::AStar));
        assert_eq!(" a* ".parse::<Strategy>(), Ok(Strategy::AStar));
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            "UCS".parse::<Strategy>(),
            Err(SearchError::UnknownStrategy("UCS".to_string()))
        );
        assert!("".parse::<Strategy>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for s in Strategy::ALL {
            assert_eq!(s.to_string().parse::<Strategy>(), Ok(s));
        }
    }

    #[test]
    fn priority_keys() {
        let goal = Cell::new(3, 3);
        let c = Cell::new(1, 2);
        assert_eq!(Strategy::Bfs.priority(c, 4, goal), 0);
        assert_eq!(Strategy::Dfs.priority(c, 4, goal), 0);
        assert_eq!(Strategy::Greedy.priority(c, 4, goal), 3);
        assert_eq!(Strategy::AStar.priority(c, 4, goal), 7);
    }

    #[test]
    fn only_astar_tracks_cost() {
        assert!(Strategy::AStar.tracks_cost());
        assert!(!Strategy::Greedy.tracks_cost());
        assert!(Strategy::Bfs.is_optimal());
        assert!(!Strategy::Dfs.is_optimal());
    }
}
