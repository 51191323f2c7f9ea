use glam::IVec2;

use crate::map::direction::Direction;
use crate::map::tile::TraversalFlags;
use crate::systems::movement::Motion;

/// The kind of a character, used wherever the two kinds need different rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterKind {
    Player,
    Adversary,
}

impl CharacterKind {
    /// Returns the traversal flags for this kind of character.
    pub const fn traversal_flags(self) -> TraversalFlags {
        match self {
            CharacterKind::Player => TraversalFlags::PLAYER,
            CharacterKind::Adversary => TraversalFlags::ADVERSARY,
        }
    }

    /// Only the player can leave the board through a tunnel and come back on the other side.
    pub const fn wraps_horizontally(self) -> bool {
        matches!(self, CharacterKind::Player)
    }
}

/// Per-kind state layered on top of the shared [`Motion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    Player {
        /// The most recently requested direction that has not been applied yet.
        buffered: Option<Direction>,
    },
    /// Steered by the pursuit policy.
    Adversary,
}

impl Behavior {
    pub const fn kind(&self) -> CharacterKind {
        match self {
            Behavior::Player { .. } => CharacterKind::Player,
            Behavior::Adversary => CharacterKind::Adversary,
        }
    }
}

/// A moving character: shared motion plus its behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Character {
    pub motion: Motion,
    pub behavior: Behavior,
}

impl Character {
    /// A stationary player with nothing buffered.
    pub fn player(spawn: IVec2, speed: f32) -> Self {
        Self {
            motion: Motion::spawn(spawn, speed),
            behavior: Behavior::Player { buffered: None },
        }
    }

    pub fn adversary(spawn: IVec2, speed: f32, heading: Direction) -> Self {
        let mut motion = Motion::spawn(spawn, speed);
        motion.heading = Some(heading);
        Self {
            motion,
            behavior: Behavior::Adversary,
        }
    }

    pub const fn kind(&self) -> CharacterKind {
        self.behavior.kind()
    }

    /// The player's buffered direction; always `None` for the adversary.
    pub fn buffered_direction(&self) -> Option<Direction> {
        match self.behavior {
            Behavior::Player { buffered } => buffered,
            Behavior::Adversary => None,
        }
    }
}
