use std::io::{self, BufWriter, Stdout};
use std::time::{Duration, Instant};

use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use tracing::{debug, info, warn};

use crate::config::{GameConfig, LaunchOptions};
use crate::constants::LOOP_TIME;
use crate::error::{GameError, GameResult};
use crate::events::{GameCommand, GameEvent};
use crate::game::Game;
use crate::input::Bindings;
use crate::render;
use crate::storage::HighScoreStore;

/// Puts the terminal into raw mode on the alternate screen, and restores it when dropped.
struct TerminalGuard;

impl TerminalGuard {
    fn enter(out: &mut impl io::Write) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, cursor::Hide, Clear(ClearType::All))?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, cursor::Show, LeaveAlternateScreen) {
            warn!(?error, "Failed to leave the alternate screen");
        }
        if let Err(error) = terminal::disable_raw_mode() {
            warn!(?error, "Failed to disable raw mode");
        }
    }
}

/// The terminal front-end: reads keys, drives the game, draws it and persists the high score.
pub struct App {
    pub game: Game,
    bindings: Bindings,
    store: HighScoreStore,
    out: BufWriter<Stdout>,
    // Dropped last so the terminal is restored after everything else
    _terminal: TerminalGuard,
}

impl App {
    /// Loads the high score, builds the game and takes over the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be built or the terminal cannot be set up. An
    /// unreadable high score file is logged and treated as zero.
    pub fn new(options: &LaunchOptions) -> GameResult<Self> {
        let store = HighScoreStore::new(&options.high_score_file);
        let high_score = store.load().unwrap_or_else(|error| {
            warn!(%error, "Could not load the high score; starting from zero");
            0
        });

        let mut game = Game::with_config(GameConfig::default(), high_score)?;
        if let Some(difficulty) = options.difficulty {
            game.handle_command(GameCommand::StartRound(difficulty))?;
        }

        let mut out = BufWriter::new(io::stdout());
        let terminal = TerminalGuard::enter(&mut out)?;
        info!("Terminal initialized");

        Ok(Self {
            game,
            bindings: Bindings::default(),
            store,
            out,
            _terminal: terminal,
        })
    }

    /// Runs one frame: input, update, persistence, drawing, then sleep for the rest of the frame.
    ///
    /// Returns `false` once the player asked to exit.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Io`] if the terminal cannot be read or written.
    pub fn run(&mut self) -> GameResult<bool> {
        let start = Instant::now();

        for command in self.bindings.poll_commands()? {
            match self.game.handle_command(command) {
                Ok(()) => {}
                Err(error @ GameError::InvalidTransition { .. }) => debug!(%error, "Command ignored"),
                Err(error) => return Err(error),
            }
        }
        if !self.game.is_running() {
            return Ok(false);
        }

        self.game.update(start);
        for event in self.game.drain_events() {
            self.handle_event(event);
        }

        render::draw(&mut self.out, &self.game.snapshot())?;

        let elapsed = start.elapsed();
        if elapsed < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(elapsed);
            if time != Duration::ZERO {
                spin_sleep::sleep(time);
            }
        } else {
            warn!(behind = ?(elapsed - LOOP_TIME), "Frame behind schedule");
        }

        Ok(true)
    }

    fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Game event");
        if let GameEvent::HighScoreUpdated(score) = event {
            if let Err(error) = self.store.save(score) {
                warn!(%error, "Could not save the high score");
            }
        }
    }
}
