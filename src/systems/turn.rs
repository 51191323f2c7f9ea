//! Intersection detection and heading changes.

use tracing::trace;

use crate::map::direction::Direction;
use crate::map::maze::Maze;
use crate::map::tile::TraversalFlags;
use crate::systems::movement::Motion;

/// Half-width of the window around a cell center in which a character counts as being on it.
///
/// Scaling with speed guarantees that a character crossing a cell center lands inside the window
/// on at least one tick, however fast it moves.
pub fn intersection_tolerance(speed: f32) -> f32 {
    speed / 2.0
}

/// Returns true if the character is close enough to the center of its cell, on both axes, to
/// change heading.
pub fn is_at_intersection(motion: &Motion) -> bool {
    let offset = (motion.position - Maze::cell_center(motion.cell())).abs();
    let tolerance = intersection_tolerance(motion.speed);
    offset.x <= tolerance && offset.y <= tolerance
}

/// Returns true if the cell one step from the character in `direction` can be entered by `who`.
pub fn can_head(maze: &Maze, motion: &Motion, direction: Direction, who: TraversalFlags) -> bool {
    maze.is_passable(motion.cell() + direction.as_cell_offset(), who)
}

/// Applies a new heading, aligning the character onto its cell center when the heading changes.
pub fn turn(motion: &mut Motion, direction: Direction) {
    if motion.heading == Some(direction) {
        return;
    }
    trace!(from = ?motion.heading, to = ?direction, cell = ?motion.cell(), "Heading changed");
    motion.align_to_cell_center();
    motion.heading = Some(direction);
}
