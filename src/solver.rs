//! Shortest path search through a generated maze
//!
//! A* over the wall-free edges of a [Grid], every step costing one, guided by
//! the Manhattan distance to the goal. On a 4-connected grid with unit costs
//! that heuristic never overestimates and is consistent, so the first time
//! the goal is taken off the frontier its path is a shortest one.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use itertools::Itertools;
use log::{debug, warn};

use crate::grid::{Grid, GridError, Point};

/// Route through the maze, start and goal included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    steps: Vec<Point>,
}

impl Path {
    pub fn steps(&self) -> &[Point] {
        &self.steps
    }

    /// Number of moves, i.e. one less than the number of cells
    pub fn cost(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn start(&self) -> Point {
        self.steps[0]
    }

    pub fn goal(&self) -> Point {
        self.steps[self.steps.len() - 1]
    }

    pub fn contains(&self, point: Point) -> bool {
        self.steps.contains(&point)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.steps.iter().join(" -> "))
    }
}

/// Best known route to a cell during one search
struct SearchNode {
    /// Steps from start
    g: usize,
    /// Manhattan distance to goal
    h: usize,
    parent: Option<usize>,
    /// Order in which the cell first entered the open set
    seq: usize,
}

/// Open set entry
///
/// Ordered so that [BinaryHeap] yields the lowest f-score first, and among
/// equal f-scores the cell that entered the open set first.
#[derive(PartialEq, Eq)]
struct Frontier {
    f: usize,
    seq: usize,
    g: usize,
    index: usize,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Solve from the top-left corner to the bottom-right corner
pub fn solve_corners(grid: &Grid) -> Result<Option<Path>, GridError> {
    solve(
        grid,
        Point::new(0, 0),
        Point::new(grid.width() - 1, grid.height() - 1),
    )
}

/// Find the shortest path from `start` to `goal`.
///
/// Returns `Ok(None)` when the goal cannot be reached, which only happens on
/// a grid that has not been generated or has been tampered with. Points
/// outside the grid are an error.
///
/// # Examples
/// ```
/// use backtrack_maze::grid::{Grid, Point};
/// use backtrack_maze::solver::solve;
///
/// let mut grid = Grid::new(2, 1).unwrap();
/// let (a, b) = (Point::new(0, 0), Point::new(1, 0));
/// assert_eq!(solve(&grid, a, b).unwrap(), None);
///
/// grid.remove_wall_between(a, b).unwrap();
/// let path = solve(&grid, a, b).unwrap().unwrap();
/// assert_eq!(path.steps(), &[a, b]);
/// ```
pub fn solve(grid: &Grid, start: Point, goal: Point) -> Result<Option<Path>, GridError> {
    let start_index = grid.index_of(start)?;
    let goal_index = grid.index_of(goal)?;

    let mut nodes: Vec<Option<SearchNode>> = (0..grid.cell_count()).map(|_| None).collect();
    let mut closed = vec![false; grid.cell_count()];
    let mut open = BinaryHeap::new();
    let mut next_seq = 0;

    let h = start.manhattan(&goal);
    nodes[start_index] = Some(SearchNode {
        g: 0,
        h,
        parent: None,
        seq: next_seq,
    });
    open.push(Frontier {
        f: h,
        seq: next_seq,
        g: 0,
        index: start_index,
    });
    next_seq += 1;

    let mut expanded = 0;
    while let Some(Frontier { g, index, .. }) = open.pop() {
        // Entries superseded by a cheaper route are left in the heap
        if closed[index] || nodes[index].as_ref().is_some_and(|node| node.g != g) {
            continue;
        }
        closed[index] = true;
        expanded += 1;

        if index == goal_index {
            let path = reconstruct_path(grid, &nodes, index);
            debug!(
                "Found path {} -> {} of {} steps, expanded {} cells",
                start,
                goal,
                path.cost(),
                expanded
            );
            return Ok(Some(path));
        }

        for neighbor in grid.open_neighbors(grid.point_at(index))? {
            let neighbor_index = grid.index_of(neighbor)?;
            if closed[neighbor_index] {
                continue;
            }

            let tentative_g = g + 1;
            let h = neighbor.manhattan(&goal);
            match &mut nodes[neighbor_index] {
                Some(node) if tentative_g + h < node.g + node.h => {
                    node.g = tentative_g;
                    node.h = h;
                    node.parent = Some(index);
                    open.push(Frontier {
                        f: tentative_g + h,
                        seq: node.seq,
                        g: tentative_g,
                        index: neighbor_index,
                    });
                }
                Some(_) => (),
                slot @ None => {
                    *slot = Some(SearchNode {
                        g: tentative_g,
                        h,
                        parent: Some(index),
                        seq: next_seq,
                    });
                    open.push(Frontier {
                        f: tentative_g + h,
                        seq: next_seq,
                        g: tentative_g,
                        index: neighbor_index,
                    });
                    next_seq += 1;
                }
            }
        }
    }

    warn!(
        "No path from {} to {}, expanded {} cells",
        start, goal, expanded
    );
    Ok(None)
}

/// Follow parents from `goal_index` back to the start
fn reconstruct_path(grid: &Grid, nodes: &[Option<SearchNode>], goal_index: usize) -> Path {
    let mut steps = vec![grid.point_at(goal_index)];
    let mut current = nodes[goal_index].as_ref().and_then(|node| node.parent);
    while let Some(index) = current {
        steps.push(grid.point_at(index));
        current = nodes[index].as_ref().and_then(|node| node.parent);
    }
    steps.reverse();
    Path { steps }
}
