use glam::Vec2;
use pixel_muncher::{
    config::Difficulty,
    game::{CharacterView, Snapshot},
    map::tile::{PickupKind, TileKind},
    render::{draw, hud_line, phase_message, tile_glyph},
    systems::{LifeLossId, RoundOutcome, RoundPhase},
};
use speculoos::prelude::*;

mod common;

use common::{center, maze, TUNNEL};

fn view(position: Vec2) -> CharacterView {
    CharacterView {
        position,
        radius: 8.0,
        heading: None,
    }
}

#[test]
fn test_hud_separates_thousands() {
    let maze = maze(&TUNNEL);
    let snapshot = Snapshot {
        maze: &maze,
        player: view(center(3, 1)),
        adversary: view(center(5, 3)),
        score: 12_340,
        lives: 2,
        high_score: 1_048_576,
        phase: RoundPhase::Playing,
        difficulty: Difficulty::Hard,
    };

    let hud = hud_line(&snapshot);

    assert_that(&hud).contains("12,340");
    assert_that(&hud).contains("1,048,576");
    assert_that(&hud).contains("Lives 2");
    assert_that(&hud).ends_with("hard");
}

#[test]
fn test_each_phase_has_a_message() {
    let phases = [
        RoundPhase::Menu,
        RoundPhase::Playing,
        RoundPhase::Paused {
            life_loss: LifeLossId(1),
        },
        RoundPhase::Ended(RoundOutcome::Won),
        RoundPhase::Ended(RoundOutcome::Lost),
    ];

    for phase in phases {
        assert_that(&phase_message(phase).is_empty()).is_false();
    }
    assert_that(&phase_message(RoundPhase::Ended(RoundOutcome::Lost))).contains("Game over");
}

#[test]
fn test_tiles_are_two_columns() {
    for tile in [
        TileKind::Empty,
        TileKind::Wall,
        TileKind::Pickup(PickupKind::Standard),
        TileKind::Pickup(PickupKind::Power),
        TileKind::RestrictedZone,
        TileKind::Tunnel,
    ] {
        assert_that(&tile_glyph(tile).0.chars().count()).is_equal_to(2);
    }
}

#[test]
fn test_draw_writes_board_and_characters() {
    let maze = maze(&TUNNEL);
    let snapshot = Snapshot {
        maze: &maze,
        player: view(center(3, 1)),
        // Off the board in the tunnel: not drawn
        adversary: view(Vec2::new(-8.0, 30.0)),
        score: 0,
        lives: 3,
        high_score: 0,
        phase: RoundPhase::Menu,
        difficulty: Difficulty::Easy,
    };
    let mut out: Vec<u8> = Vec::new();

    draw(&mut out, &snapshot).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_that(&text).contains("██");
    assert_that(&text).contains("()");
    assert_that(&text.contains("<>")).is_false();
    assert_that(&text).contains("Press E");
}
