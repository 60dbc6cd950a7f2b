use std::{str::FromStr, time::Instant};

use rand::{Rng, SeedableRng, rngs::StdRng};

mod cell_connect;
mod wanderers;

pub use cell_connect::CellConnect;
pub use wanderers::Wanderers;

use crate::{error::Error, maze::Maze};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// A maze-building algorithm. Implementations reseal the maze before carving,
/// so any maze can be handed to any generator.
pub trait MazeGenerator {
    fn generate<R: Rng + ?Sized>(&self, maze: &mut Maze, rng: &mut R);
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    /// Random walks from the origin, restarted until every cell is reached.
    #[default]
    Wanderers,
    /// Knocks down one random wall of each enclosed cell. May leave islands.
    CellConnect,
}

impl Generator {
    pub const ALL: [Generator; 2] = [Generator::Wanderers, Generator::CellConnect];
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::Wanderers => write!(f, "Randomized Walk (Wanderers)"),
            Generator::CellConnect => write!(f, "Random Cell Connect"),
        }
    }
}

impl FromStr for Generator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "walk" | "wanderers" => Ok(Generator::Wanderers),
            "2" | "connect" | "cell-connect" => Ok(Generator::CellConnect),
            _ => Err(Error::UnknownGenerator(s.trim().to_string())),
        }
    }
}

pub fn generate_maze(maze: &mut Maze, generator: Generator, seed: Option<u64>) {
    let mut rng = get_rng(seed);
    tracing::info!(
        "[generate] {} on a {}x{} maze (seed: {:?})",
        generator,
        maze.width(),
        maze.height(),
        seed
    );
    let started = Instant::now();
    match generator {
        Generator::Wanderers => Wanderers.generate(maze, &mut rng),
        Generator::CellConnect => CellConnect.generate(maze, &mut rng),
    }
    tracing::debug!(
        "[generate] carved {} passages in {:?}",
        maze.passage_count(),
        started.elapsed()
    );
}
