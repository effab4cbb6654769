//! Maze generation

use log::{debug, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::grid::{Grid, GridError, Point};

/// Perfect maze generator using randomized depth-first backtracking.
///
/// Each generator owns its random source, so two generators never share
/// state.
pub struct MazeGenerator<R = StdRng> {
    random: R,
}

/// Cell being carved, with the neighbors it has not tried yet
struct Frame {
    cell: Point,
    candidates: Vec<Point>,
}

impl MazeGenerator<StdRng> {
    /// Create generator, seeded if `seed` is given and from entropy otherwise
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }
}

impl<R: Rng> MazeGenerator<R> {
    /// Use an existing random source
    pub fn from_rng(random: R) -> Self {
        Self { random }
    }

    /// Create a `width` x `height` grid and carve a maze into it from the
    /// top-left corner.
    pub fn generate_maze(&mut self, width: usize, height: usize) -> Result<Grid, GridError> {
        let mut grid = Grid::new(width, height)?;
        self.generate(&mut grid, Point::new(0, 0))?;
        Ok(grid)
    }

    /// Carve a spanning tree into a freshly created `grid`, starting at `start`.
    ///
    /// The current cell picks one of its remaining candidate neighbors at
    /// random. Candidates that were reached through another branch in the
    /// meantime are dropped; otherwise the wall between the two is removed and
    /// the walk continues from the neighbor. A cell without candidates is
    /// popped off the stack, returning to the cell it was entered from.
    ///
    /// The stack holds at most one frame per cell.
    pub fn generate(&mut self, grid: &mut Grid, start: Point) -> Result<(), GridError> {
        grid.mark_visited(start)?;
        let mut stack = vec![Frame {
            cell: start,
            candidates: grid.unvisited_neighbors(start)?,
        }];
        let mut carved = 0;
        let mut max_depth = stack.len();

        while let Some(frame) = stack.last_mut() {
            if frame.candidates.is_empty() {
                stack.pop();
                continue;
            }

            // Drawn as u32 so that seeded layouts match across targets
            let pick = self.random.gen_range(0..frame.candidates.len() as u32) as usize;
            let next = frame.candidates.remove(pick);
            if grid.is_visited(next)? {
                continue;
            }

            let current = frame.cell;
            grid.remove_wall_between(current, next)?;
            grid.mark_visited(next)?;
            trace!("Carved {} -> {}", current, next);
            carved += 1;

            stack.push(Frame {
                cell: next,
                candidates: grid.unvisited_neighbors(next)?,
            });
            max_depth = max_depth.max(stack.len());
        }

        debug!(
            "Generated {}x{} maze: {} passages carved, deepest stack {}",
            grid.width(),
            grid.height(),
            carved,
            max_depth
        );
        Ok(())
    }
}
