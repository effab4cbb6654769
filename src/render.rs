//! Text output for mazes and their solutions

use std::fmt;

use itertools::Itertools;

use crate::grid::Grid;
use crate::solver::Path;

/// Draw the maze, one line per row.
///
/// Every cell takes two characters: `_` when its north wall is present, then
/// `|` when its east wall is present, spaces otherwise.
pub fn render_grid(grid: &Grid) -> String {
    (0..grid.height())
        .map(|y| {
            (0..grid.width())
                .filter_map(|x| grid.cell_at(x, y).ok())
                .map(|cell| {
                    let above = if cell.north { '_' } else { ' ' };
                    let right = if cell.east { '|' } else { ' ' };
                    format!("{above}{right}")
                })
                .join("")
        })
        .join("\n")
}

/// Numbered listing of the steps, or a notice that there is none
pub fn render_solution(path: Option<&Path>) -> String {
    match path {
        None => "No solution found!".to_string(),
        Some(path) => {
            let steps = path
                .steps()
                .iter()
                .enumerate()
                .map(|(i, point)| format!("Step {}: {}", i + 1, point));
            itertools::chain(["Solution found:".to_string()], steps).join("\n")
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_grid(self))
    }
}
