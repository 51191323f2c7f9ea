use std::time::{Duration, Instant};

use pixel_muncher::{
    config::{Difficulty, GameConfig},
    constants::{LIFE_LOST_DELAY, MIN_TICK_INTERVAL},
    error::GameError,
    events::{GameCommand, GameEvent},
    formatter,
    game::{Game, PendingResume},
    map::direction::Direction,
    systems::{LifeLossId, RoundPhase},
};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

use common::{center, session, stack_adversary_on_player, OPEN_ROOM};

fn started() -> Game {
    let mut game = Game::new(session(&OPEN_ROOM));
    game.handle_command(GameCommand::StartRound(Difficulty::Easy)).unwrap();
    game
}

#[test]
fn test_default_game_loads_board() {
    let game = Game::with_config(GameConfig::default(), 1_200).unwrap();

    assert_eq!(game.session().phase(), RoundPhase::Menu);
    assert_eq!(game.session().high_score(), 1_200);
    assert_eq!(game.session().maze().remaining_pickups(), 176);
    assert_that(&game.is_running()).is_true();
}

#[test]
fn test_commands_reach_session() {
    let mut game = started();

    game.handle_command(GameCommand::MovePlayer(Direction::Down)).unwrap();
    assert_eq!(game.session().player().buffered_direction(), Some(Direction::Down));

    let result = game.handle_command(GameCommand::StartRound(Difficulty::Hard));
    assert!(matches!(result, Err(GameError::InvalidTransition { .. })));
    assert!(matches!(
        game.handle_command(GameCommand::ReturnToMenu),
        Err(GameError::InvalidTransition { .. })
    ));

    game.handle_command(GameCommand::Exit).unwrap();
    assert_that(&game.is_running()).is_false();
}

#[test]
fn test_frame_gate() {
    let mut game = started();
    game.handle_command(GameCommand::MovePlayer(Direction::Right)).unwrap();
    let t0 = Instant::now();

    assert_that(&game.update(t0)).is_true();
    let after_first = game.session().player().motion.position;

    assert_that(&game.update(t0 + MIN_TICK_INTERVAL / 2)).is_false();
    assert_eq!(game.session().player().motion.position, after_first);

    assert_that(&game.update(t0 + MIN_TICK_INTERVAL)).is_true();
    assert_that(&game.session().player().motion.position.x).is_greater_than(after_first.x);
}

#[test]
fn test_update_advances_tick_counter() {
    let mut game = started();
    let before = formatter::get_tick_count();

    game.update(Instant::now());

    assert_that(&formatter::get_tick_count()).is_greater_than(before);
}

#[test]
fn test_resume_delivered_after_delay() {
    let mut game = started();
    stack_adversary_on_player(game.session_mut());
    let t0 = Instant::now();

    game.update(t0);
    let life_loss = LifeLossId(1);
    assert_eq!(game.session().phase(), RoundPhase::Paused { life_loss });
    assert_eq!(
        game.pending_resume(),
        Some(PendingResume {
            life_loss,
            due: t0 + LIFE_LOST_DELAY
        })
    );

    game.update(t0 + LIFE_LOST_DELAY / 2);
    assert_eq!(game.session().phase(), RoundPhase::Paused { life_loss });

    game.update(t0 + LIFE_LOST_DELAY);
    assert_eq!(game.session().phase(), RoundPhase::Playing);
    assert_that(&game.pending_resume()).is_none();
    assert_eq!(game.session().player().motion.position, center(1, 1));
}

#[test]
fn test_resume_after_restart_is_ignored() {
    let config = GameConfig {
        starting_lives: 2,
        life_lost_delay: Duration::from_secs(5),
        ..GameConfig::default()
    };
    let mut game = Game::new(common::session_with(&OPEN_ROOM, config));
    game.handle_command(GameCommand::StartRound(Difficulty::Easy)).unwrap();
    let t0 = Instant::now();

    // First catch schedules a resume
    stack_adversary_on_player(game.session_mut());
    game.update(t0);
    assert_that(&game.pending_resume()).is_some();

    // The round is ended and restarted behind the timer's back
    assert_that(&game.session_mut().resume_after_life_loss(LifeLossId(1))).is_true();
    stack_adversary_on_player(game.session_mut());
    game.update(t0 + Duration::from_secs(1));
    game.handle_command(GameCommand::ReturnToMenu).unwrap();
    game.handle_command(GameCommand::StartRound(Difficulty::Hard)).unwrap();

    game.update(t0 + Duration::from_secs(6));

    assert_eq!(game.session().phase(), RoundPhase::Playing);
    assert_eq!(game.session().difficulty(), Difficulty::Hard);
}

#[test]
fn test_events_drained_through_game() {
    let mut game = started();
    stack_adversary_on_player(game.session_mut());

    game.update(Instant::now());

    let events = game.drain_events();
    assert_that(&events).has_length(2);
    assert!(matches!(events[0], GameEvent::PickupConsumed { score: 10, .. }));
    assert_eq!(events[1], GameEvent::LifeLost { lives_remaining: 2 });
    assert_that(&game.drain_events()).is_empty();
}

#[test]
fn test_player_eats_along_corridor() {
    let mut game = Game::with_config(GameConfig::default(), 0).unwrap();
    game.handle_command(GameCommand::StartRound(Difficulty::Easy)).unwrap();
    game.handle_command(GameCommand::MovePlayer(Direction::Right)).unwrap();
    let t0 = Instant::now();

    for frame in 0..30 {
        game.update(t0 + MIN_TICK_INTERVAL * frame);
    }

    // The spawn pickup plus five more along the top row
    assert_eq!(game.session().score(), 60);
    assert_eq!(game.session().maze().remaining_pickups(), 170);
    assert_eq!(game.session().phase(), RoundPhase::Playing);
    let consumed = game
        .drain_events()
        .into_iter()
        .filter(|event| matches!(event, GameEvent::PickupConsumed { .. }))
        .count();
    assert_eq!(consumed, 6);
}
