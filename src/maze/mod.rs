pub mod cell;
mod grid;

use std::collections::VecDeque;

pub use cell::{Cell, Side};
use grid::Grid;

/// A rectangular maze of packed cells.
///
/// Coordinates outside the maze behave like a fully walled cell: reads return
/// [`Cell::CLOSED`] and writes are dropped, so algorithms may probe past the edge freely.
pub struct Maze {
    grid: Grid,
}

impl Maze {
    /// Dimensions of the watch face maze.
    pub const WATCH_WIDTH: u8 = 24;
    pub const WATCH_HEIGHT: u8 = 24;

    /// Creates a maze with every wall up and every cell empty.
    ///
    /// Panics if either dimension is below 2 or equal to `u8::MAX`, since `u8::MAX` is
    /// reserved as the out-of-bounds coordinate.
    pub fn new(width: u8, height: u8) -> Self {
        assert!(
            (2..u8::MAX).contains(&width) && (2..u8::MAX).contains(&height),
            "Maze dimensions must be between 2 and {} (got {}x{})",
            u8::MAX - 1,
            width,
            height
        );
        Maze {
            grid: Grid::new(width, height, Cell::FRESH),
        }
    }

    /// Creates a maze with the watch face dimensions.
    pub fn watch() -> Self {
        Maze::new(Maze::WATCH_WIDTH, Maze::WATCH_HEIGHT)
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u8 {
        self.grid.height()
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u8 {
        self.grid.width()
    }

    /// Number of cells in the maze.
    pub fn area(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    pub fn is_in_bounds(&self, coord: (u8, u8)) -> bool {
        self.grid.is_in_bounds(coord)
    }

    pub fn get(&self, coord: (u8, u8)) -> Cell {
        self.grid.get(coord)
    }

    pub fn set(&mut self, coord: (u8, u8), cell: Cell) {
        self.grid.set(coord, cell);
    }

    /// See [`Grid::fill`].
    pub fn fill(&mut self, value: Cell, mask: u8) {
        self.grid.fill(value, mask);
    }

    /// Puts every wall back up and marks every cell empty and unvisited.
    pub fn reset(&mut self) {
        self.fill(Cell::FRESH, Cell::ALL_MASK);
    }

    /// Clears the visited flag on every cell.
    pub fn clear_visited(&mut self) {
        self.fill(Cell::default(), Cell::FLAG_VISITED);
    }

    /// Checks whether the wall on the given side of a cell is standing.
    /// Walls on the outer boundary always read as standing.
    pub fn wall(&self, coord: (u8, u8), side: Side) -> bool {
        match side {
            Side::Up => self.get(coord).wall_up(),
            Side::Left => self.get(coord).wall_left(),
            Side::Down => self.get(side.step(coord)).wall_up(),
            Side::Right => self.get(side.step(coord)).wall_left(),
        }
    }

    /// Raises or removes the wall on the given side of a cell.
    /// Does nothing if the cell owning that wall is out of bounds.
    pub fn set_wall(&mut self, coord: (u8, u8), side: Side, value: bool) {
        match side {
            Side::Up => self.set(coord, self.get(coord).with_wall_up(value)),
            Side::Left => self.set(coord, self.get(coord).with_wall_left(value)),
            Side::Down => {
                let below = side.step(coord);
                self.set(below, self.get(below).with_wall_up(value));
            }
            Side::Right => {
                let right = side.step(coord);
                self.set(right, self.get(right).with_wall_left(value));
            }
        }
    }

    pub fn set_empty(&mut self, coord: (u8, u8), value: bool) {
        self.set(coord, self.get(coord).with_empty(value));
    }

    pub fn set_visited(&mut self, coord: (u8, u8), value: bool) {
        self.set(coord, self.get(coord).with_visited(value));
    }

    /// Checks whether one can step from `coord` across `side` without leaving the maze or
    /// crossing a wall.
    pub fn is_open(&self, coord: (u8, u8), side: Side) -> bool {
        self.is_in_bounds(side.step(coord)) && !self.wall(coord, side)
    }

    /// Iterates over all coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = (u8, u8)> + use<> {
        let (width, height) = (self.width(), self.height());
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// Counts the interior walls that have been removed.
    pub fn open_edge_count(&self) -> usize {
        self.coords()
            .map(|coord| {
                [Side::Up, Side::Left]
                    .into_iter()
                    .filter(|&side| self.is_open(coord, side))
                    .count()
            })
            .sum()
    }

    /// Counts the cells reachable from `start` through removed walls, `start` included.
    /// Uses its own bookkeeping, so the cell flags are neither read nor written.
    pub fn reachable_from(&self, start: (u8, u8)) -> usize {
        if !self.is_in_bounds(start) {
            return 0;
        }
        let index = |(x, y): (u8, u8)| y as usize * self.width() as usize + x as usize;
        let mut seen = vec![false; self.area()];
        seen[index(start)] = true;
        let mut queue = VecDeque::from([start]);
        let mut count = 0;
        while let Some(coord) = queue.pop_front() {
            count += 1;
            for neighbor in get_open_neighbors(coord, self) {
                if !seen[index(neighbor)] {
                    seen[index(neighbor)] = true;
                    queue.push_back(neighbor);
                }
            }
        }
        count
    }

    /// Checks whether every cell can reach every other cell.
    pub fn is_connected(&self) -> bool {
        self.reachable_from((0, 0)) == self.area()
    }
}

/// Get the neighbors of a cell that are not separated from it by a wall.
pub fn get_open_neighbors(coord: (u8, u8), maze: &Maze) -> impl Iterator<Item = (u8, u8)> {
    Side::ALL
        .into_iter()
        .filter(move |&side| maze.is_open(coord, side))
        .map(move |side| side.step(coord))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_maze_is_fresh() {
        let maze = Maze::new(5, 4);
        assert!(maze.coords().all(|c| maze.get(c) == Cell::FRESH));
        assert_eq!(maze.open_edge_count(), 0);
        assert_eq!(maze.reachable_from((2, 2)), 1);
    }

    #[test]
    #[should_panic]
    fn test_degenerate_dimensions_panic() {
        Maze::new(1, 5);
    }

    #[test]
    fn test_down_and_right_map_to_neighbor_bits() {
        let mut maze = Maze::new(5, 5);
        maze.set_wall((1, 1), Side::Right, false);
        assert!(!maze.get((2, 1)).wall_left());
        assert!(!maze.wall((2, 1), Side::Left));
        maze.set_wall((1, 1), Side::Down, false);
        assert!(!maze.get((1, 2)).wall_up());
        assert_eq!(maze.open_edge_count(), 2);
        assert_eq!(maze.reachable_from((1, 1)), 3);
    }

    #[test]
    fn test_boundary_is_never_open() {
        let mut maze = Maze::new(3, 3);
        // Right of the last column would live in an out-of-bounds cell
        maze.set_wall((2, 0), Side::Right, false);
        assert!(maze.wall((2, 0), Side::Right));
        // The up bit of row 0 exists but still leads outside
        maze.set_wall((0, 0), Side::Up, false);
        assert!(!maze.is_open((0, 0), Side::Up));
        assert_eq!(maze.open_edge_count(), 0);
    }

    #[test]
    fn test_open_neighbors() {
        let mut maze = Maze::new(3, 3);
        maze.set_wall((1, 1), Side::Up, false);
        maze.set_wall((1, 1), Side::Left, false);
        let neighbors = get_open_neighbors((1, 1), &maze).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(1, 0), (0, 1)]);
    }

    #[test]
    fn test_clear_visited_keeps_walls() {
        let mut maze = Maze::new(3, 3);
        maze.set_visited((0, 0), true);
        maze.set_wall((0, 0), Side::Right, false);
        maze.clear_visited();
        assert!(!maze.get((0, 0)).is_visited());
        assert!(!maze.wall((0, 0), Side::Right));
    }
}
