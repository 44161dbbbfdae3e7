//! Runs the search strategies over the bundled maze and prints one line per
//! strategy.
//!
//! Run: cargo run --bin maze-runner [BFS|DFS|GS|AStar]...

use maze_demos::{RunnerConfig, run};

fn main() {
    let names: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run_with(&names) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_with(names: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let config = RunnerConfig::default().with_strategy_names(names)?;
    let result = run(&config)?;

    print!("{}", result.maze);
    println!("start {} goal {}", result.start, result.goal);
    for outcome in &result.outcomes {
        println!("{outcome}");
        match &outcome.path {
            Some(path) => {
                let steps: Vec<String> = path.iter().map(|c| c.to_string()).collect();
                println!("  {}", steps.join(" "));
            }
            None => println!("  no path found"),
        }
    }
    Ok(())
}
