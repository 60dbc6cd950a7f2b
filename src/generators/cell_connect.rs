use rand::{Rng, seq::IndexedRandom, seq::SliceRandom};

use super::MazeGenerator;
use crate::maze::Maze;

/// Visits every cell once, in random order, and opens one random wall of each
/// cell that is still enclosed.
///
/// Cheaper than [`Wanderers`](super::Wanderers) but with no view of global
/// connectivity: the result usually falls apart into several unconnected regions.
pub struct CellConnect;

impl MazeGenerator for CellConnect {
    fn generate<R: Rng + ?Sized>(&self, maze: &mut Maze, rng: &mut R) {
        maze.seal();

        let width = maze.width() as usize;
        let mut order = (0..width * maze.height() as usize).collect::<Vec<_>>();
        order.shuffle(rng);

        let mut opened = 0usize;
        for idx in order {
            // Cell indices count along a row, then up through the rows
            let coord = ((idx % width) as u8, (idx / width) as u8);
            if !maze.is_enclosed(coord) {
                continue;
            }
            if let Some(&direction) = maze.legal_directions(coord).choose(rng) {
                maze.set_wall(coord, direction, false);
                opened += 1;
            }
        }

        tracing::debug!("[cell connect] opened {} walls", opened);
    }
}
