//! Continuous movement on the tile grid.
//!
//! Characters move a fixed number of pixels per tick along their heading. Each tentative step is
//! checked against the maze with a 3x3 lattice of probes around the character's center; a step
//! that touches an impassable tile is rejected according to the configured [`RejectPolicy`].

use glam::{IVec2, Vec2};
use tracing::trace;

use crate::constants::{movement::PROBE_FACTOR, movement::RADIUS_FACTOR, CELL_SIZE};
use crate::map::direction::Direction;
use crate::map::maze::Maze;
use crate::map::tile::TraversalFlags;

/// What to do with a character whose tentative step is blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RejectPolicy {
    /// Leave the position untouched.
    Hold,
    /// Move the character to the exact center of the cell it occupies.
    #[default]
    Snap,
}

/// Result of a single [`advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No heading; nothing to do.
    Idle,
    Moved,
    /// The step was rejected by a wall.
    Blocked,
    /// The step carried the character off one side of the board and onto the other.
    Wrapped,
}

/// Position and kinematics shared by every character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// Center of the character, in board pixels.
    pub position: Vec2,
    /// Current direction of travel; `None` while standing still.
    pub heading: Option<Direction>,
    /// Pixels per tick.
    pub speed: f32,
    /// Collision envelope.
    pub radius: f32,
}

impl Motion {
    /// A stationary character centered on `cell`.
    pub fn spawn(cell: IVec2, speed: f32) -> Self {
        Self {
            position: Maze::cell_center(cell),
            heading: None,
            speed,
            radius: CELL_SIZE as f32 * RADIUS_FACTOR,
        }
    }

    /// The cell containing the character's center.
    pub fn cell(&self) -> IVec2 {
        Maze::cell_of(self.position)
    }

    pub fn align_to_cell_center(&mut self) {
        self.position = Maze::cell_center(self.cell());
    }
}

/// Returns true if a character of the given radius centered at `position` would touch a tile
/// that `who` may not enter.
pub fn is_blocked(maze: &Maze, position: Vec2, radius: f32, who: TraversalFlags) -> bool {
    let reach = radius * PROBE_FACTOR;
    [-1.0, 0.0, 1.0]
        .into_iter()
        .flat_map(|dy| [-1.0, 0.0, 1.0].into_iter().map(move |dx| Vec2::new(dx, dy)))
        .any(|offset| !maze.is_passable(Maze::cell_of(position + offset * reach), who))
}

/// Moves a character one tick along its heading.
///
/// `wraps` enables horizontal screen wrap: leaving the board by more than the character's radius
/// on one side places it just outside the opposite side.
pub fn advance(motion: &mut Motion, maze: &Maze, who: TraversalFlags, policy: RejectPolicy, wraps: bool) -> MoveOutcome {
    let Some(heading) = motion.heading else {
        return MoveOutcome::Idle;
    };

    let tentative = motion.position + heading.as_vec2() * motion.speed;
    if is_blocked(maze, tentative, motion.radius, who) {
        if policy == RejectPolicy::Snap {
            motion.align_to_cell_center();
        }
        trace!(?heading, position = ?motion.position, ?policy, "Move rejected by wall");
        return MoveOutcome::Blocked;
    }

    motion.position = tentative;

    if wraps {
        let width = maze.pixel_size().x;
        if motion.position.x < -motion.radius {
            motion.position.x = width + motion.radius;
            trace!(position = ?motion.position, "Wrapped to the right edge");
            return MoveOutcome::Wrapped;
        }
        if motion.position.x > width + motion.radius {
            motion.position.x = -motion.radius;
            trace!(position = ?motion.position, "Wrapped to the left edge");
            return MoveOutcome::Wrapped;
        }
    }

    MoveOutcome::Moved
}
