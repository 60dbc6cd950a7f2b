use std::fmt;

/// One of the four cardinal directions a wall can face.
///
/// North points towards increasing `y`, East towards increasing `x`.
/// The origin `(0, 0)` is therefore the lower-left corner of the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions, in wall-storage order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The direction pointing back the way we came.
    pub fn inverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Coordinate offset `(dx, dy)` of one step in this direction.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        write!(f, "{}", name)
    }
}

/// Wall flags of a single cell, one per [`Direction`].
///
/// Only the `maze` module can write these flags; everything else goes through
/// [`Maze::set_wall`](super::Maze::set_wall), which keeps both sides of a wall in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    walls: [bool; 4],
}

impl Cell {
    /// A cell with all four walls up.
    pub const SEALED: Cell = Cell { walls: [true; 4] };

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.index()]
    }

    /// A cell is enclosed while no passage has been carved out of it.
    pub fn is_enclosed(&self) -> bool {
        self.walls.iter().all(|&wall| wall)
    }

    pub(super) fn set_wall(&mut self, direction: Direction, present: bool) {
        self.walls[direction.index()] = present;
    }
}
