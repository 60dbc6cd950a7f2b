pub mod cell;
mod grid;

pub use cell::{Cell, Direction};
use grid::Grid;

use crate::error::{Error, Result};

/// A rectangular maze whose walls are stored redundantly: every wall between
/// two adjacent cells is recorded on both of them.
///
/// All mutation goes through [`Maze::set_wall`], which writes both copies, so a
/// wall is never present on one side and missing on the other.
pub struct Maze {
    grid: Grid,
}

impl Maze {
    /// Creates a new maze with the given width and height, with every wall in place.
    pub fn new(width: u8, height: u8) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Maze {
            grid: Grid::new(width, height, Cell::SEALED),
        })
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u8 {
        self.grid.height()
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u8 {
        self.grid.width()
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: (u8, u8)) -> bool {
        self.grid.is_in_bounds(coord)
    }

    /// All cell coordinates in row-major order, starting at the origin.
    pub fn cells(&self) -> impl Iterator<Item = (u8, u8)> + use<> {
        let (width, height) = (self.width(), self.height());
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// Puts up every wall of every cell.
    ///
    /// Writes the flags directly instead of going through [`Maze::set_wall`]: each
    /// cell is set once, and the result is symmetric by construction.
    pub fn seal(&mut self) {
        self.grid.fill(Cell::SEALED);
    }

    /// Checks whether `coord` has a wall facing `direction`.
    ///
    /// # Panics
    /// * If `coord` is out of bounds
    pub fn has_wall(&self, coord: (u8, u8), direction: Direction) -> bool {
        self.grid[coord].has_wall(direction)
    }

    /// A cell is enclosed while all four of its walls are still standing.
    ///
    /// # Panics
    /// * If `coord` is out of bounds
    pub fn is_enclosed(&self, coord: (u8, u8)) -> bool {
        self.grid[coord].is_enclosed()
    }

    /// Sets the wall on the `direction` side of `coord`, together with the matching
    /// wall of the neighbor on the other side, if there is one.
    ///
    /// # Panics
    /// * If `coord` is out of bounds
    pub fn set_wall(&mut self, coord: (u8, u8), direction: Direction, present: bool) {
        self.grid[coord].set_wall(direction, present);
        if let Some(neighbor) = self.neighbor(coord, direction) {
            self.grid[neighbor].set_wall(direction.inverse(), present);
        }
    }

    /// Returns the cell one step away from `coord` in `direction`, if it lies inside the maze.
    pub fn neighbor(&self, coord: (u8, u8), direction: Direction) -> Option<(u8, u8)> {
        let (dx, dy) = direction.delta();
        let x = coord.0.checked_add_signed(dx)?;
        let y = coord.1.checked_add_signed(dy)?;
        self.is_in_bounds((x, y)).then_some((x, y))
    }

    /// Directions that lead to another cell of the maze.
    ///
    /// # Panics
    /// * If `coord` is out of bounds
    pub fn legal_directions(&self, coord: (u8, u8)) -> Vec<Direction> {
        if !self.is_in_bounds(coord) {
            panic!("The given coordinate {:?} is out of bounds", coord);
        }
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.neighbor(coord, direction).is_some())
            .collect()
    }

    /// Legal directions whose neighbor is still enclosed, i.e. not yet reached by any passage.
    ///
    /// # Panics
    /// * If `coord` is out of bounds
    pub fn unexplored_directions(&self, coord: (u8, u8)) -> Vec<Direction> {
        self.legal_directions(coord)
            .into_iter()
            .filter(|&direction| {
                self.neighbor(coord, direction)
                    .is_some_and(|neighbor| self.is_enclosed(neighbor))
            })
            .collect()
    }

    /// Number of carved passages between adjacent cells. Each passage is counted once.
    pub fn passage_count(&self) -> usize {
        self.cells()
            .map(|coord| {
                [Direction::North, Direction::East]
                    .into_iter()
                    .filter(|&direction| {
                        self.neighbor(coord, direction).is_some()
                            && !self.has_wall(coord, direction)
                    })
                    .count()
            })
            .sum()
    }
}
