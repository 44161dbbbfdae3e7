use std::collections::{HashMap, HashSet};

use maze_core::Cell;

use crate::error::SearchError;
use crate::frontier::{Entry, FifoFrontier, Frontier, LifoFrontier, PriorityFrontier};
use crate::outcome::{SearchMetrics, SearchOutcome};
use crate::strategy::Strategy;
use crate::traits::Pather;

/// Search engine bound to one adjacency provider.
///
/// Frontier, visited set, parent links and cost table are created fresh in
/// every call and dropped on return; the only thing kept between calls is a
/// scratch buffer for neighbour queries. Run concurrent searches through
/// separate `MazeSearch` values sharing the same pather.
pub struct MazeSearch<'a, P: Pather + ?Sized> {
    pather: &'a P,
    nbuf: Vec<Cell>,
}

/// Run a single search with a throwaway engine.
pub fn search<P: Pather + ?Sized>(
    pather: &P,
    start: Cell,
    goal: Cell,
    strategy: Strategy,
) -> SearchOutcome {
    MazeSearch::new(pather).search(start, goal, strategy)
}

impl<'a, P: Pather + ?Sized> MazeSearch<'a, P> {
    /// Create an engine over `pather`.
    pub fn new(pather: &'a P) -> Self {
        Self {
            pather,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Breadth-first search.
    pub fn bfs(&mut self, start: Cell, goal: Cell) -> SearchOutcome {
        self.run(Strategy::Bfs, FifoFrontier::new(), start, goal)
    }

    /// Depth-first search. Neighbours are pushed in North, South, West, East
    /// order, so East is explored first.
    pub fn dfs(&mut self, start: Cell, goal: Cell) -> SearchOutcome {
        self.run(Strategy::Dfs, LifoFrontier::new(), start, goal)
    }

    /// Greedy best-first search on Manhattan distance to the goal.
    pub fn greedy(&mut self, start: Cell, goal: Cell) -> SearchOutcome {
        self.run(Strategy::Greedy, PriorityFrontier::new(), start, goal)
    }

    /// A* search with the Manhattan heuristic.
    pub fn astar(&mut self, start: Cell, goal: Cell) -> SearchOutcome {
        self.run(Strategy::AStar, PriorityFrontier::new(), start, goal)
    }

    /// Search from `start` to `goal` with `strategy`.
    pub fn search(&mut self, start: Cell, goal: Cell, strategy: Strategy) -> SearchOutcome {
        match strategy {
            Strategy::Bfs => self.bfs(start, goal),
            Strategy::Dfs => self.dfs(start, goal),
            Strategy::Greedy => self.greedy(start, goal),
            Strategy::AStar => self.astar(start, goal),
        }
    }

    /// Like [`search`](Self::search) but selects the strategy by name.
    ///
    /// An unrecognised name fails before any search state is allocated.
    pub fn search_named(
        &mut self,
        start: Cell,
        goal: Cell,
        name: &str,
    ) -> Result<SearchOutcome, SearchError> {
        let strategy: Strategy = name.parse()?;
        Ok(self.search(start, goal, strategy))
    }

    /// Like [`search`](Self::search) but rejects a start or goal outside the
    /// grid instead of treating it as a precondition.
    pub fn search_checked(
        &mut self,
        start: Cell,
        goal: Cell,
        strategy: Strategy,
    ) -> Result<SearchOutcome, SearchError> {
        for cell in [start, goal] {
            if !self.pather.contains(cell) {
                return Err(SearchError::OutOfBounds { cell });
            }
        }
        Ok(self.search(start, goal, strategy))
    }

    /// The shared search loop.
    ///
    /// Parent links are recorded when a cell is expanded: an entry's parent
    /// was itself expanded before the entry was pushed, so following parents
    /// from the goal yields exactly the path that entry extended.
    pub fn run<F: Frontier>(
        &mut self,
        strategy: Strategy,
        mut frontier: F,
        start: Cell,
        goal: Cell,
    ) -> SearchOutcome {
        log::debug!("{strategy} search from {start} to {goal}");

        let mut visited: HashSet<Cell> = HashSet::new();
        let mut parents: HashMap<Cell, Option<Cell>> = HashMap::new();
        let mut costs: HashMap<Cell, i32> = HashMap::new();
        let track_cost = strategy.tracks_cost();

        if track_cost {
            costs.insert(start, 0);
        }
        frontier.push(
            strategy.priority(start, 0, goal),
            Entry {
                cell: start,
                parent: None,
                g: 0,
            },
        );
        let mut metrics = SearchMetrics {
            num_created: 1,
            num_expanded: 0,
            max_fringe: 1,
        };

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = frontier.pop() else {
                break 'search false;
            };

            // Skip stale entries.
            if !visited.insert(current.cell) {
                continue;
            }
            parents.insert(current.cell, current.parent);
            metrics.num_expanded += 1;
            log::trace!("expand {} g={}", current.cell, current.g);

            if current.cell == goal {
                break 'search true;
            }

            nbuf.clear();
            self.pather.neighbors(current.cell, &mut nbuf);

            for &n in nbuf.iter() {
                if visited.contains(&n) {
                    continue;
                }
                let g = current.g + 1;
                if track_cost {
                    if costs.get(&n).is_some_and(|&best| g >= best) {
                        continue;
                    }
                    costs.insert(n, g);
                }
                frontier.push(
                    strategy.priority(n, g, goal),
                    Entry {
                        cell: n,
                        parent: Some(current.cell),
                        g,
                    },
                );
                metrics.num_created += 1;
                metrics.max_fringe = metrics.max_fringe.max(frontier.len());
            }
        };

        self.nbuf = nbuf;

        let path = found.then(|| reconstruct(&parents, goal));
        let depth = match &path {
            Some(p) => p.len() as i32 - 1,
            None => -1,
        };
        log::debug!(
            "{strategy} search finished: depth={depth} created={} expanded={} max_fringe={}",
            metrics.num_created,
            metrics.num_expanded,
            metrics.max_fringe
        );

        SearchOutcome {
            strategy,
            start,
            goal,
            path,
            depth,
            metrics,
        }
    }
}

/// Follow parent links back from `goal` and return the path start-first.
fn reconstruct(parents: &HashMap<Cell, Option<Cell>>, goal: Cell) -> Vec<Cell> {
    let mut path = vec![goal];
    let mut cur = goal;
    while let Some(&Some(p)) = parents.get(&cur) {
        path.push(p);
        cur = p;
    }
    path.reverse();
    path
}
