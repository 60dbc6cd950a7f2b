pub mod app;
pub mod config;
pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod renderer;

pub use error::{Error, Result};
pub use generators::{Generator, MazeGenerator, generate_maze};
pub use maze::{Direction, Maze};
