//! Runtime-tunable game settings.

use std::path::PathBuf;
use std::time::Duration;

use strum_macros::{AsRefStr, Display, EnumString};

use crate::constants::{movement, LIFE_LOST_DELAY, MIN_TICK_INTERVAL, STARTING_LIVES};
use crate::error::{GameError, GameResult};
use crate::systems::movement::RejectPolicy;

/// Difficulty selected at round start. Only the adversary's speed depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl Difficulty {
    pub const fn adversary_speed_multiplier(self) -> f32 {
        match self {
            Difficulty::Easy => movement::EASY_SPEED_MULTIPLIER,
            Difficulty::Hard => movement::HARD_SPEED_MULTIPLIER,
        }
    }

    /// The adversary's speed in pixels per tick.
    pub fn adversary_speed(self) -> f32 {
        movement::ADVERSARY_SPEED * self.adversary_speed_multiplier()
    }
}

/// Settings that hosts and tests may override. Defaults come from [`crate::constants`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub starting_lives: u8,
    /// Wall-clock delay between a life being lost and play resuming.
    pub life_lost_delay: Duration,
    /// Soft frame-rate cap applied by the game driver.
    pub min_tick_interval: Duration,
    /// What happens to a character whose move runs into a wall.
    pub reject_policy: RejectPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_lives: STARTING_LIVES,
            life_lost_delay: LIFE_LOST_DELAY,
            min_tick_interval: MIN_TICK_INTERVAL,
            reject_policy: RejectPolicy::default(),
        }
    }
}

/// Where the high score is kept when no path is given.
pub const DEFAULT_HIGH_SCORE_FILE: &str = "pixel-muncher.highscore";
/// Where log lines go when no path is given.
pub const DEFAULT_LOG_FILE: &str = "pixel-muncher.log";

/// Settings for the terminal binary, read from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Start a round at this difficulty immediately instead of showing the menu.
    pub difficulty: Option<Difficulty>,
    pub high_score_file: PathBuf,
    pub log_file: PathBuf,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            difficulty: None,
            high_score_file: PathBuf::from(DEFAULT_HIGH_SCORE_FILE),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl LaunchOptions {
    /// Parses arguments, excluding the program name.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] for an unknown flag or a path flag without a value.
    pub fn parse<I, S>(args: I) -> GameResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--easy" => options.difficulty = Some(Difficulty::Easy),
                "--hard" => options.difficulty = Some(Difficulty::Hard),
                "--high-score-file" => options.high_score_file = required_value(&arg, args.next())?.into(),
                "--log-file" => options.log_file = required_value(&arg, args.next())?.into(),
                _ => return Err(GameError::InvalidState(format!("Unknown argument: {arg}"))),
            }
        }

        Ok(options)
    }
}

fn required_value(flag: &str, value: Option<String>) -> GameResult<String> {
    value.ok_or_else(|| GameError::InvalidState(format!("{flag} expects a path")))
}
