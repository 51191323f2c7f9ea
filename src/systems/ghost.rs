//! The adversary's pursuit policy.
//!
//! At every intersection the adversary looks one cell ahead in each direction and takes the step
//! whose destination is closest (in a straight line) to the player's cell. It never turns back
//! unless nothing else is open. This is a local greedy choice; it can be led around loops.

use glam::IVec2;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::map::direction::Direction;
use crate::map::maze::Maze;
use crate::systems::components::CharacterKind;
use crate::systems::movement::Motion;
use crate::systems::turn;

/// Picks the heading for an adversary standing on `cell` with the given current heading.
///
/// Candidates are considered in [`Direction::DIRECTIONS`] order and the first of several equally
/// close ones wins. Returns `None` only when a stationary adversary has nowhere to go.
pub fn choose_heading(maze: &Maze, cell: IVec2, heading: Option<Direction>, target: IVec2) -> Option<Direction> {
    let reverse = heading.map(Direction::opposite);
    let flags = CharacterKind::Adversary.traversal_flags();

    let mut options: SmallVec<[(Direction, f32); 4]> = SmallVec::new();
    for direction in Direction::DIRECTIONS {
        if Some(direction) == reverse {
            continue;
        }
        let destination = cell + direction.as_cell_offset();
        if maze.is_passable(destination, flags) {
            options.push((direction, destination.as_vec2().distance(target.as_vec2())));
        }
    }

    // `min_by` keeps the first of equal elements, which is the tie-break order
    if let Some((direction, distance)) = options.iter().copied().min_by(|a, b| a.1.total_cmp(&b.1)) {
        trace!(?cell, ?target, ?direction, distance, candidates = options.len(), "Adversary chose heading");
        return Some(direction);
    }

    let reverse = reverse?;
    if !maze.is_passable(cell + reverse.as_cell_offset(), flags) {
        warn!(?cell, ?heading, "Adversary boxed in; reversing into a wall");
    } else {
        debug!(?cell, direction = ?reverse, "Adversary at a dead end, reversing");
    }
    Some(reverse)
}

/// Re-decides the adversary's heading when it is on an intersection; otherwise leaves it alone.
///
/// Returns the new heading if it changed.
pub fn pursue(motion: &mut Motion, maze: &Maze, target: IVec2) -> Option<Direction> {
    if !turn::is_at_intersection(motion) {
        return None;
    }

    let next = choose_heading(maze, motion.cell(), motion.heading, target)?;
    if motion.heading == Some(next) {
        return None;
    }
    turn::turn(motion, next);
    Some(next)
}
