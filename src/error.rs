//! Centralized error types for the game.
//!
//! The simulation itself cannot fail; errors only arise at its edges (board parsing, invalid
//! round transitions requested by a collaborator, and the host's I/O).

use std::io;

use crate::systems::state::RoundPhase;

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Map parsing error: {0}")]
    MapParse(#[from] ParseError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Cannot {action} while the round is {phase:?}")]
    InvalidTransition { action: &'static str, phase: RoundPhase },

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Error type for map parsing operations.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown character in board: {character:?} at row {row}, column {col}")]
    UnknownCharacter { character: char, row: usize, col: usize },

    #[error("Board has no rows")]
    EmptyBoard,

    #[error("Board row {row} has {found} columns, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("Board has no {0} spawn")]
    MissingSpawn(&'static str),

    #[error("Board has more than one {0} spawn")]
    DuplicateSpawn(&'static str),

    #[error("Tunnel on row {0} must be paired with a tunnel on the opposite edge")]
    UnpairedTunnel(usize),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
