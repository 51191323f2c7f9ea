use glam::IVec2;

use crate::config::Difficulty;
use crate::map::direction::Direction;
use crate::map::tile::PickupKind;
use crate::systems::state::RoundOutcome;

/// Commands sent into the game by the input collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    Exit,
    MovePlayer(Direction),
    StartRound(Difficulty),
    ReturnToMenu,
}

/// Things that happened during a tick, for renderers and persistence to react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    PickupConsumed { cell: IVec2, pickup: PickupKind, score: u32 },
    LifeLost { lives_remaining: u8 },
    RoundEnded(RoundOutcome),
    /// The final score of a round beat the previous high score.
    HighScoreUpdated(u32),
}
