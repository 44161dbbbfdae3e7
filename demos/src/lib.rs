//! Shared runner used by the `maze-runner` binary.
//!
//! Parses a maze layout, places a start and a goal at random distinct cells
//! and runs each configured strategy over the same pair.

use maze_core::{Cell, Maze, MazeError};
use maze_search::{MazeSearch, SearchError, SearchOutcome, Strategy};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// A 6x10 maze with a few loops.
pub const DEFAULT_LAYOUT: &str = "\
+-+-+-+-+-+-+-+-+-+-+
|     |       |     |
+ +-+ + +-+-+ + +-+ +
| |   |   |   |   | |
+ + +-+-+ + +-+-+ + +
| |       |     | | |
+ +-+-+-+-+-+ + + + +
|   |       | |     |
+-+ + +-+-+ + +-+-+ +
|     |   |       | |
+ +-+-+ + +-+-+-+ + +
|       |         | |
+-+-+-+-+-+-+-+-+-+-+
";

/// Runner configuration.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Maze layout, in the format accepted by [`Maze::parse`].
    pub layout: String,
    /// Seed for start/goal placement.
    pub seed: u64,
    /// Strategies to run, in order.
    pub strategies: Vec<Strategy>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            layout: DEFAULT_LAYOUT.to_string(),
            seed: 42,
            strategies: Strategy::ALL.to_vec(),
        }
    }
}

impl RunnerConfig {
    /// Replace the strategy list by parsing `names`. An empty list keeps all
    /// four strategies.
    pub fn with_strategy_names<S: AsRef<str>>(mut self, names: &[S]) -> Result<Self, SearchError> {
        if names.is_empty() {
            return Ok(self);
        }
        self.strategies = names
            .iter()
            .map(|n| n.as_ref().parse())
            .collect::<Result<_, _>>()?;
        Ok(self)
    }
}

/// The maze, the chosen endpoints and one outcome per strategy.
#[derive(Debug, Clone)]
pub struct Run {
    pub maze: Maze,
    pub start: Cell,
    pub goal: Cell,
    pub outcomes: Vec<SearchOutcome>,
}

/// Pick a random start and a random goal, redrawing the goal until it
/// differs from the start (when the maze has more than one cell).
pub fn place_endpoints(maze: &Maze, rng: &mut StdRng) -> (Cell, Cell) {
    let mut pick = || {
        Cell::new(
            rng.random_range(1..=maze.rows()),
            rng.random_range(1..=maze.cols()),
        )
    };
    let start = pick();
    let mut goal = pick();
    if maze.bounds().len() > 1 {
        while goal == start {
            goal = pick();
        }
    }
    (start, goal)
}

/// Parse the layout and run every configured strategy.
pub fn run(config: &RunnerConfig) -> Result<Run, MazeError> {
    let maze = Maze::parse(&config.layout)?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let (start, goal) = place_endpoints(&maze, &mut rng);
    log::info!(
        "maze {} start {start} goal {goal} seed {}",
        maze.bounds(),
        config.seed
    );

    let mut engine = MazeSearch::new(&maze);
    let outcomes = config
        .strategies
        .iter()
        .map(|&s| {
            let o = engine.search(start, goal, s);
            log::info!("{o}");
            o
        })
        .collect();

    Ok(Run {
        maze,
        start,
        goal,
        outcomes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_parses() {
        let m = Maze::parse(DEFAULT_LAYOUT).unwrap();
        assert_eq!(m.rows(), 6);
        assert_eq!(m.cols(), 10);
        assert!(m.is_symmetric());
    }

    #[test]
    fn default_run_finds_paths() {
        let r = run(&RunnerConfig::default()).unwrap();
        assert_ne!(r.start, r.goal);
        assert_eq!(r.outcomes.len(), 4);
        let bfs = &r.outcomes[0];
        for o in &r.outcomes {
            assert!(o.is_found(), "{o}");
            assert!(r.maze.is_valid_path(o.cells()));
            assert!(o.depth >= bfs.depth);
        }
        assert_eq!(r.outcomes[3].depth, bfs.depth);
    }

    #[test]
    fn same_seed_same_run() {
        let cfg = RunnerConfig {
            seed: 9,
            ..RunnerConfig::default()
        };
        let a = run(&cfg).unwrap();
        let b = run(&cfg).unwrap();
        assert_eq!(a.start, b.start);
        assert_eq!(a.goal, b.goal);
        assert_eq!(a.outcomes, b.outcomes);
    }

    #[test]
    fn strategy_names() {
        let cfg = RunnerConfig::default()
            .with_strategy_names(&["AStar", "dfs"])
            .unwrap();
        assert_eq!(cfg.strategies, vec![Strategy::AStar, Strategy::Dfs]);

        let empty: [&str; 0] = [];
        let cfg = RunnerConfig::default().with_strategy_names(&empty).unwrap();
        assert_eq!(cfg.strategies.len(), 4);

        assert!(matches!(
            RunnerConfig::default().with_strategy_names(&["BFS", "UCS"]),
            Err(SearchError::UnknownStrategy(name)) if name == "UCS"
        ));
    }

    #[test]
    fn single_cell_maze() {
        let cfg = RunnerConfig {
            layout: "+-+\n| |\n+-+".to_string(),
            ..RunnerConfig::default()
        };
        let r = run(&cfg).unwrap();
        assert_eq!(r.start, r.goal);
        assert!(r.outcomes.iter().all(|o| o.depth == 0));
    }

    #[test]
    fn bad_layout_is_reported() {
        let cfg = RunnerConfig {
            layout: String::new(),
            ..RunnerConfig::default()
        };
        assert_eq!(run(&cfg).unwrap_err(), MazeError::Empty);
    }
}
