use tracing::trace;

use crate::map::direction::Direction;
use crate::map::maze::Maze;
use crate::systems::components::CharacterKind;
use crate::systems::movement::Motion;
use crate::systems::turn;

/// Promotes the buffered direction to the active heading when the player is at an intersection
/// and the cell in that direction is open.
///
/// A buffered direction that cannot be taken yet stays buffered for the next intersection.
/// Returns the direction that was applied, if any.
pub fn promote_buffered_direction(motion: &mut Motion, buffered: &mut Option<Direction>, maze: &Maze) -> Option<Direction> {
    let direction = (*buffered)?;

    if !turn::is_at_intersection(motion) {
        return None;
    }
    if !turn::can_head(maze, motion, direction, CharacterKind::Player.traversal_flags()) {
        trace!(?direction, cell = ?motion.cell(), "Buffered direction blocked, keeping it");
        return None;
    }

    turn::turn(motion, direction);
    *buffered = None;
    Some(direction)
}
