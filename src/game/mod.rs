//! This module contains the game driver: it owns the [`Session`] and feeds it commands and time.

use std::time::Instant;

use tracing::{debug, info, trace};

use crate::config::GameConfig;
use crate::constants::RAW_BOARD;
use crate::error::GameResult;
use crate::events::{GameCommand, GameEvent};
use crate::formatter;
use crate::map::maze::Maze;
use crate::systems::{LifeLossId, RoundPhase};

pub use self::state::{CharacterView, Session, Snapshot};

pub mod state;

/// A resume that will be delivered to the session once its due time passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingResume {
    pub life_loss: LifeLossId,
    pub due: Instant,
}

/// The `Game` struct is the entry point a host drives.
///
/// The host calls [`Game::update`] as often as it likes with the current time; the game caps the
/// simulation rate itself and delivers delayed resumes after a lost life. It never reads the clock
/// on its own, so tests can drive it with synthetic instants.
pub struct Game {
    session: Session,
    last_tick: Option<Instant>,
    pending_resume: Option<PendingResume>,
    exit_requested: bool,
}

impl Game {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            last_tick: None,
            pending_resume: None,
            exit_requested: false,
        }
    }

    /// Builds a game on the built-in board.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in board fails to parse.
    pub fn with_config(config: GameConfig, high_score: u32) -> GameResult<Self> {
        let maze = Maze::new(&RAW_BOARD)?;
        info!(
            width = maze.width(),
            height = maze.height(),
            pickups = maze.remaining_pickups(),
            high_score,
            "Board loaded"
        );
        Ok(Self::new(Session::new(maze, config, high_score)))
    }

    /// Applies a command from the input collaborator.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::GameError::InvalidTransition`] when a round command does not fit
    /// the current phase.
    pub fn handle_command(&mut self, command: GameCommand) -> GameResult<()> {
        trace!(?command, "Handling command");
        match command {
            GameCommand::Exit => {
                info!("Exit requested");
                self.exit_requested = true;
            }
            GameCommand::MovePlayer(direction) => self.session.set_requested_direction(direction),
            GameCommand::StartRound(difficulty) => self.session.start(difficulty)?,
            GameCommand::ReturnToMenu => self.session.return_to_menu()?,
        }
        Ok(())
    }

    /// Delivers any due resume, then runs one tick unless the previous one was too recent.
    ///
    /// Returns whether a tick ran.
    pub fn update(&mut self, now: Instant) -> bool {
        if let Some(pending) = self.pending_resume.filter(|pending| now >= pending.due) {
            self.pending_resume = None;
            self.session.resume_after_life_loss(pending.life_loss);
        }

        let interval = self.session.config().min_tick_interval;
        if self
            .last_tick
            .is_some_and(|last| now.saturating_duration_since(last) < interval)
        {
            return false;
        }
        self.last_tick = Some(now);

        formatter::increment_tick();
        self.session.tick();

        if let RoundPhase::Paused { life_loss } = self.session.phase() {
            if self.pending_resume.map(|pending| pending.life_loss) != Some(life_loss) {
                let due = now + self.session.config().life_lost_delay;
                debug!(?life_loss, delay = ?self.session.config().life_lost_delay, "Scheduling resume");
                self.pending_resume = Some(PendingResume { life_loss, due });
            }
        }

        true
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.session.snapshot()
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.session.drain_events()
    }

    pub fn pending_resume(&self) -> Option<PendingResume> {
        self.pending_resume
    }

    /// False once an exit has been requested.
    pub fn is_running(&self) -> bool {
        !self.exit_requested
    }
}
