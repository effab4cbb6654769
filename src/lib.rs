//! Generate a perfect maze and find the shortest way through it
//!
//! A maze is carved into a rectangular [grid::Grid] by randomized
//! depth-first backtracking ([maze_generator::MazeGenerator]), which leaves
//! exactly one route between any two cells. [solver::solve] then finds that
//! route with A* search.
//!
//! # Examples
//! ## Seeded 15x15 maze, solved corner to corner
//! ```
//! use backtrack_maze::maze_generator::MazeGenerator;
//! use backtrack_maze::render::render_solution;
//! use backtrack_maze::solver::solve_corners;
//!
//! let mut gen = MazeGenerator::new(Some(0));
//! let grid = gen.generate_maze(15, 15).unwrap();
//! println!("{}", grid);
//!
//! let path = solve_corners(&grid).unwrap();
//! println!("{}", render_solution(path.as_ref()));
//! assert!(path.is_some());
//! ```
//!
//! ## Hand-built corridor
//! ```
//! use backtrack_maze::grid::{Grid, Point};
//! use backtrack_maze::solver::solve;
//!
//! let mut grid = Grid::new(3, 1).unwrap();
//! grid.remove_wall_between(Point::new(0, 0), Point::new(1, 0)).unwrap();
//! grid.remove_wall_between(Point::new(1, 0), Point::new(2, 0)).unwrap();
//! assert_eq!(grid.to_string(), "_ _ _|");
//!
//! let path = solve(&grid, Point::new(0, 0), Point::new(2, 0)).unwrap().unwrap();
//! assert_eq!(path.cost(), 2);
//! ```

pub mod grid;
pub mod maze_generator;
pub mod render;
pub mod solver;

/// Environment variable that enables logging in the binaries
pub const LOG_ENV: &str = "MAZE_LOG";
/// Environment variable for the log color style
pub const LOG_STYLE_ENV: &str = "MAZE_LOG_STYLE";

/// Initialize `env_logger`, if [LOG_ENV] is set
pub fn init_logging() {
    if std::env::var(LOG_ENV).is_ok() {
        let env = env_logger::Env::new()
            .filter(LOG_ENV)
            .write_style(LOG_STYLE_ENV);
        env_logger::init_from_env(env);
    }
}
