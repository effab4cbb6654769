//! Grid model: cells, their walls and neighborhood queries

use std::fmt;

use thiserror::Error;

/// Location in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to `other`
    pub fn manhattan(&self, other: &Point) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Side of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    West,
    East,
    North,
    South,
}

impl Direction {
    /// Order in which neighbors are reported
    pub const ALL: [Direction; 4] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::West => Direction::East,
            Direction::East => Direction::West,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
        }
    }
}

/// Single square of the maze
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
    /// Spanning-tree membership, only meaningful during generation
    pub visited: bool,
}

impl Cell {
    /// Is there a wall on the given side
    pub fn has_wall(&self, direction: Direction) -> bool {
        match direction {
            Direction::West => self.west,
            Direction::East => self.east,
            Direction::North => self.north,
            Direction::South => self.south,
        }
    }

    fn wall_mut(&mut self, direction: Direction) -> &mut bool {
        match direction {
            Direction::West => &mut self.west,
            Direction::East => &mut self.east,
            Direction::North => &mut self.north,
            Direction::South => &mut self.south,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            north: true,
            east: true,
            south: true,
            west: true,
            visited: false,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid dimensions {width}x{height}, both must be positive")]
    InvalidDimensions { width: usize, height: usize },
    #[error("coordinate {0} is outside the grid")]
    OutOfBounds(Point),
    #[error("cells {0} and {1} are not orthogonally adjacent")]
    NotAdjacent(Point, Point),
}

/// Rectangular collection of cells
///
/// Cells are stored row by row, so the cell at `(x, y)` lives at index
/// `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid where every wall is present and no cell is visited.
    ///
    /// Returns [GridError::InvalidDimensions], if either size is zero.
    ///
    /// # Examples
    /// ```
    /// use backtrack_maze::grid::Grid;
    ///
    /// let grid = Grid::new(3, 2).unwrap();
    /// assert_eq!(grid.cell_count(), 6);
    /// assert!(grid.cell_at(2, 1).unwrap().south);
    /// assert!(Grid::new(0, 2).is_err());
    /// ```
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::default(); width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Dense index of `point`, row-major
    pub fn index_of(&self, point: Point) -> Result<usize, GridError> {
        if self.contains(point) {
            Ok(point.y * self.width + point.x)
        } else {
            Err(GridError::OutOfBounds(point))
        }
    }

    /// Inverse of [Self::index_of]; `index` must be below [Self::cell_count]
    pub fn point_at(&self, index: usize) -> Point {
        Point::new(index % self.width, index / self.width)
    }

    pub fn cell_at(&self, x: usize, y: usize) -> Result<&Cell, GridError> {
        let index = self.index_of(Point::new(x, y))?;
        Ok(&self.cells[index])
    }

    fn cell_mut(&mut self, point: Point) -> Result<&mut Cell, GridError> {
        let index = self.index_of(point)?;
        Ok(&mut self.cells[index])
    }

    pub fn is_visited(&self, point: Point) -> Result<bool, GridError> {
        Ok(self.cell_at(point.x, point.y)?.visited)
    }

    pub fn mark_visited(&mut self, point: Point) -> Result<(), GridError> {
        self.cell_mut(point)?.visited = true;
        Ok(())
    }

    /// True once generation has reached every cell
    pub fn is_fully_visited(&self) -> bool {
        self.cells.iter().all(|cell| cell.visited)
    }

    /// Clear the pair of walls separating `a` and `b`.
    ///
    /// Both cells lose the wall facing the other one, so the wall state stays
    /// symmetric.
    pub fn remove_wall_between(&mut self, a: Point, b: Point) -> Result<(), GridError> {
        self.index_of(a)?;
        self.index_of(b)?;
        let direction = Self::direction_between(a, b).ok_or(GridError::NotAdjacent(a, b))?;

        *self.cell_mut(a)?.wall_mut(direction) = false;
        *self.cell_mut(b)?.wall_mut(direction.opposite()) = false;
        Ok(())
    }

    /// Side of `a` that faces `b`, if the two are orthogonal neighbors
    fn direction_between(a: Point, b: Point) -> Option<Direction> {
        match (b.x as isize - a.x as isize, b.y as isize - a.y as isize) {
            (-1, 0) => Some(Direction::West),
            (1, 0) => Some(Direction::East),
            (0, -1) => Some(Direction::North),
            (0, 1) => Some(Direction::South),
            _ => None,
        }
    }

    /// In-bounds neighbor of `point` on the given side
    fn neighbor(&self, point: Point, direction: Direction) -> Option<Point> {
        let neighbor = match direction {
            Direction::West => Point::new(point.x.checked_sub(1)?, point.y),
            Direction::East => Point::new(point.x + 1, point.y),
            Direction::North => Point::new(point.x, point.y.checked_sub(1)?),
            Direction::South => Point::new(point.x, point.y + 1),
        };
        self.contains(neighbor).then_some(neighbor)
    }

    /// Adjacent cells that generation has not reached yet.
    ///
    /// Order is always west, east, north, south.
    pub fn unvisited_neighbors(&self, point: Point) -> Result<Vec<Point>, GridError> {
        self.index_of(point)?;
        Ok(Direction::ALL
            .iter()
            .filter_map(|&direction| self.neighbor(point, direction))
            .filter(|&neighbor| !self.cells[neighbor.y * self.width + neighbor.x].visited)
            .collect())
    }

    /// Adjacent cells reachable from `point` through a missing wall.
    ///
    /// Order is always west, east, north, south.
    pub fn open_neighbors(&self, point: Point) -> Result<Vec<Point>, GridError> {
        let cell = self.cell_at(point.x, point.y)?;
        Ok(Direction::ALL
            .iter()
            .filter(|&&direction| !cell.has_wall(direction))
            .filter_map(|&direction| self.neighbor(point, direction))
            .collect())
    }

    /// All points, row by row
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.cells.len()).map(move |index| self.point_at(index))
    }

    /// Every wall-free edge, each reported once from its west or north end
    pub fn open_edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points().flat_map(move |point| {
            let cell = &self.cells[point.y * self.width + point.x];
            [Direction::East, Direction::South]
                .into_iter()
                .filter(move |&direction| !cell.has_wall(direction))
                .filter_map(move |direction| self.neighbor(point, direction))
                .map(move |neighbor| (point, neighbor))
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::{Direction, Grid, GridError, Point};

    #[test]
    fn new_grid_is_closed_and_unvisited() {
        let grid = Grid::new(4, 3).unwrap();

        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        for point in grid.points() {
            let cell = grid.cell_at(point.x, point.y).unwrap();
            assert!(Direction::ALL.iter().all(|&d| cell.has_wall(d)));
            assert!(!cell.visited);
        }
        assert_eq!(grid.open_edges().count(), 0);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GridError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    fn cell_access_is_checked() {
        let grid = Grid::new(2, 2).unwrap();

        assert!(grid.cell_at(1, 1).is_ok());
        assert_eq!(
            grid.cell_at(2, 0),
            Err(GridError::OutOfBounds(Point::new(2, 0)))
        );
        assert!(grid.cell_at(0, 2).is_err());
    }

    #[test]
    fn points_are_row_major() {
        let grid = Grid::new(2, 2).unwrap();
        let points: Vec<Point> = grid.points().collect();

        assert_eq!(
            points,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(1, 1)
            ]
        );
        assert_eq!(grid.index_of(Point::new(1, 1)), Ok(3));
        assert_eq!(grid.point_at(2), Point::new(0, 1));
    }

    #[test]
    fn remove_horizontal_wall_clears_both_sides() {
        let mut grid = Grid::new(2, 1).unwrap();
        grid.remove_wall_between(Point::new(1, 0), Point::new(0, 0))
            .unwrap();

        assert!(!grid.cell_at(0, 0).unwrap().east);
        assert!(!grid.cell_at(1, 0).unwrap().west);
        assert!(grid.cell_at(0, 0).unwrap().north);
        assert_eq!(
            grid.open_edges().collect::<Vec<_>>(),
            vec![(Point::new(0, 0), Point::new(1, 0))]
        );
    }

    #[test]
    fn remove_vertical_wall_clears_both_sides() {
        let mut grid = Grid::new(1, 2).unwrap();
        grid.remove_wall_between(Point::new(0, 0), Point::new(0, 1))
            .unwrap();

        assert!(!grid.cell_at(0, 0).unwrap().south);
        assert!(!grid.cell_at(0, 1).unwrap().north);
        assert!(grid.cell_at(0, 1).unwrap().south);
    }

    #[test]
    fn remove_wall_requires_adjacency() {
        let mut grid = Grid::new(3, 3).unwrap();
        let (a, b) = (Point::new(0, 0), Point::new(1, 1));

        assert_eq!(
            grid.remove_wall_between(a, b),
            Err(GridError::NotAdjacent(a, b))
        );
        assert_eq!(
            grid.remove_wall_between(a, Point::new(2, 0)),
            Err(GridError::NotAdjacent(a, Point::new(2, 0)))
        );
        assert_eq!(
            grid.remove_wall_between(a, a),
            Err(GridError::NotAdjacent(a, a))
        );
        assert_eq!(
            grid.remove_wall_between(Point::new(2, 2), Point::new(3, 2)),
            Err(GridError::OutOfBounds(Point::new(3, 2)))
        );
        assert_eq!(grid.open_edges().count(), 0);
    }

    #[test]
    fn unvisited_neighbors_follow_fixed_order() {
        let mut grid = Grid::new(3, 3).unwrap();
        let center = Point::new(1, 1);

        assert_eq!(
            grid.unvisited_neighbors(center).unwrap(),
            vec![
                Point::new(0, 1),
                Point::new(2, 1),
                Point::new(1, 0),
                Point::new(1, 2)
            ]
        );

        grid.mark_visited(Point::new(2, 1)).unwrap();
        assert_eq!(
            grid.unvisited_neighbors(center).unwrap(),
            vec![Point::new(0, 1), Point::new(1, 0), Point::new(1, 2)]
        );

        // Corner only has two neighbors
        assert_eq!(
            grid.unvisited_neighbors(Point::new(0, 0)).unwrap(),
            vec![Point::new(1, 0), Point::new(0, 1)]
        );
        assert!(grid.unvisited_neighbors(Point::new(3, 0)).is_err());
    }

    #[test]
    fn open_neighbors_ignore_visited_flag() {
        let mut grid = Grid::new(3, 3).unwrap();
        let center = Point::new(1, 1);
        assert!(grid.open_neighbors(center).unwrap().is_empty());

        grid.remove_wall_between(center, Point::new(1, 2)).unwrap();
        grid.remove_wall_between(center, Point::new(0, 1)).unwrap();
        grid.mark_visited(Point::new(0, 1)).unwrap();

        assert_eq!(
            grid.open_neighbors(center).unwrap(),
            vec![Point::new(0, 1), Point::new(1, 2)]
        );
        assert_eq!(
            grid.open_neighbors(Point::new(1, 2)).unwrap(),
            vec![center]
        );
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(Point::new(0, 0).manhattan(&Point::new(3, 4)), 7);
        assert_eq!(Point::new(5, 1).manhattan(&Point::new(2, 1)), 3);
        assert_eq!(Point::new(2, 2).to_string(), "(2,2)");
    }
}
