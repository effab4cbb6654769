//! CLI for maze generation and solving

use anyhow::Context;
use backtrack_maze::maze_generator::MazeGenerator;
use backtrack_maze::render::render_solution;
use backtrack_maze::solver::solve_corners;
use clap::Parser;

/// Generate a perfect maze and walk it from the top-left to the bottom-right
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in cells
    #[arg(long, default_value_t = 15)]
    width: usize,

    /// Maze height in cells
    #[arg(long, default_value_t = 15)]
    height: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print only the solution, not the maze
    #[arg(short, long)]
    quiet: bool,
}

/// Generate maze, print it and its solution
fn main() -> anyhow::Result<()> {
    backtrack_maze::init_logging();
    let args = Args::parse();

    let mut gen = MazeGenerator::new(args.seed);
    let grid = gen
        .generate_maze(args.width, args.height)
        .context("Could not generate maze")?;
    if !args.quiet {
        println!("{}\n", grid);
    }

    let path = solve_corners(&grid).context("Could not solve maze")?;
    println!("{}", render_solution(path.as_ref()));
    Ok(())
}
