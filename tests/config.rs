use std::path::PathBuf;
use std::str::FromStr;

use pixel_muncher::{
    config::{Difficulty, GameConfig, LaunchOptions, DEFAULT_HIGH_SCORE_FILE},
    constants::{movement, LIFE_LOST_DELAY, MIN_TICK_INTERVAL, STARTING_LIVES},
    error::GameError,
    systems::RejectPolicy,
};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

#[test]
fn test_default_config() {
    let config = GameConfig::default();

    assert_eq!(config.starting_lives, STARTING_LIVES);
    assert_eq!(config.life_lost_delay, LIFE_LOST_DELAY);
    assert_eq!(config.min_tick_interval, MIN_TICK_INTERVAL);
    assert_eq!(config.reject_policy, RejectPolicy::Snap);
}

#[test]
fn test_difficulty_names() {
    assert_eq!(Difficulty::from_str("hard").unwrap(), Difficulty::Hard);
    assert_eq!(Difficulty::from_str("EASY").unwrap(), Difficulty::Easy);
    assert_that(&Difficulty::from_str("nightmare")).is_err();
    assert_eq!(Difficulty::Hard.to_string(), "hard");
    assert_eq!(Difficulty::Easy.as_ref(), "easy");
}

#[test]
fn test_difficulty_scales_adversary_only() {
    assert_eq!(Difficulty::Easy.adversary_speed(), movement::ADVERSARY_SPEED * 0.75);
    assert_eq!(Difficulty::Hard.adversary_speed(), movement::ADVERSARY_SPEED * 1.25);
    assert_that(&Difficulty::Easy.adversary_speed()).is_less_than(movement::PLAYER_SPEED);
    assert_that(&Difficulty::Hard.adversary_speed()).is_greater_than(movement::PLAYER_SPEED);
}

#[test]
fn test_launch_defaults() {
    let options = LaunchOptions::parse(Vec::<String>::new()).unwrap();

    assert_eq!(options.difficulty, None);
    assert_eq!(options.high_score_file, PathBuf::from(DEFAULT_HIGH_SCORE_FILE));
}

#[test]
fn test_launch_flags() {
    let options = LaunchOptions::parse(["--hard", "--high-score-file", "scores/best.txt", "--log-file", "run.log"]).unwrap();

    assert_eq!(options.difficulty, Some(Difficulty::Hard));
    assert_eq!(options.high_score_file, PathBuf::from("scores/best.txt"));
    assert_eq!(options.log_file, PathBuf::from("run.log"));

    let options = LaunchOptions::parse(["--hard", "--easy"]).unwrap();
    assert_eq!(options.difficulty, Some(Difficulty::Easy));
}

#[test]
fn test_launch_errors() {
    assert!(matches!(
        LaunchOptions::parse(["--turbo"]),
        Err(GameError::InvalidState(message)) if message.contains("--turbo")
    ));
    assert!(matches!(
        LaunchOptions::parse(["--log-file"]),
        Err(GameError::InvalidState(_))
    ));
}
