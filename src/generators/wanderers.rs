//! Randomized-walk maze generation.
//!
//! A walk starts at the origin and keeps stepping into random enclosed
//! neighbors, knocking down the wall it passes through, until it gets stuck.
//! Every cell a walk enters gets a single passage back to where it came from,
//! so the carved passages always form a tree. When a walk is stuck, the next
//! one resumes from an explored cell that still borders an enclosed one, until
//! no such cell is left.

use rand::{Rng, seq::IndexedRandom};

use super::MazeGenerator;
use crate::maze::Maze;

/// The primary generator. Produces a perfect maze: exactly one path between any two cells.
pub struct Wanderers;

impl MazeGenerator for Wanderers {
    fn generate<R: Rng + ?Sized>(&self, maze: &mut Maze, rng: &mut R) {
        maze.seal();

        let origin = (0, 0);
        // Explored cells, most recently entered last. A cell leaves the trail once it
        // has no enclosed neighbor left, and it can never get one back.
        let mut trail = vec![origin];
        let mut walks = 0usize;

        while let Some(start) = next_start(maze, &mut trail) {
            walks += 1;
            let entered = walk(maze, start, rng);
            tracing::trace!(
                "[wanderers] walk #{} from {:?} entered {} cells",
                walks,
                start,
                entered.len()
            );
            trail.extend(entered);
        }

        tracing::debug!("[wanderers] finished after {} walks", walks);
    }
}

/// Pops exhausted cells off the trail and returns the newest one that can still
/// reach an enclosed neighbor.
fn next_start(maze: &Maze, trail: &mut Vec<(u8, u8)>) -> Option<(u8, u8)> {
    while let Some(&coord) = trail.last() {
        if !maze.unexplored_directions(coord).is_empty() {
            return Some(coord);
        }
        trail.pop();
    }
    None
}

/// Walks from `start` into random enclosed neighbors until stuck.
///
/// A walk that is stuck on its very first cell while that cell is still enclosed
/// gets spliced into the explored region through one random legal wall.
///
/// Returns the cells entered by the walk, in order, not including `start`.
fn walk<R: Rng + ?Sized>(
    maze: &mut Maze,
    start: (u8, u8),
    rng: &mut R,
) -> Vec<(u8, u8)> {
    let mut entered = Vec::new();
    let mut current = start;

    loop {
        let directions = maze.unexplored_directions(current);
        let Some(&direction) = directions.choose(rng) else {
            if maze.is_enclosed(current) {
                // Every neighbor is explored already, so any of them is a safe attachment point
                if let Some(&direction) = maze.legal_directions(current).choose(rng) {
                    tracing::trace!("[wanderers] splicing {:?} to the {}", current, direction);
                    maze.set_wall(current, direction, false);
                }
            }
            break;
        };

        maze.set_wall(current, direction, false);
        let Some(next) = maze.neighbor(current, direction) else {
            break;
        };
        current = next;
        entered.push(current);
    }

    entered
}
