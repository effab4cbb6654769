//! CLI for maze generation

use anyhow::Context;
use backtrack_maze::maze_generator::MazeGenerator;
use clap::Parser;

/// Map generator for perfect mazes
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Generated maze height
    #[arg(long, default_value_t = 15)]
    height: usize,

    /// Generated maze width
    #[arg(long, default_value_t = 15)]
    width: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

/// Generate maze, print output
fn main() -> anyhow::Result<()> {
    backtrack_maze::init_logging();
    let args = Args::parse();

    let mut gen = MazeGenerator::new(args.seed);
    let grid = gen
        .generate_maze(args.width, args.height)
        .with_context(|| format!("Could not generate {}x{} maze", args.width, args.height))?;
    println!("{}", grid);
    Ok(())
}
