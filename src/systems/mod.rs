//! The per-tick rules of the game: movement, turning, pursuit, pickups, collisions and round state.

pub mod collision;
pub mod components;
pub mod ghost;
pub mod item;
pub mod movement;
pub mod player;
pub mod state;
pub mod turn;

pub use self::collision::characters_collide;
pub use self::components::{Behavior, Character, CharacterKind};
pub use self::movement::{advance, Motion, MoveOutcome, RejectPolicy};
pub use self::state::{LifeLossId, RoundOutcome, RoundPhase};
