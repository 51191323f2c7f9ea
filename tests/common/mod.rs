#![allow(dead_code)]

use glam::{IVec2, Vec2};
use pixel_muncher::{
    config::{Difficulty, GameConfig},
    game::Session,
    map::maze::Maze,
};

/// A small open room with pickups everywhere, spawns included.
pub const OPEN_ROOM: [&str; 6] = [
    "#######", //
    "#P....#", //
    "#.....#", //
    "#.....#", //
    "#....G#", //
    "#######", //
];

/// Only the two spawn pickups. See [`clear_adversary_spawn`].
pub const LAST_PICKUP: [&str; 5] = [
    "#######", //
    "#P    #", //
    "#     #", //
    "#    G#", //
    "#######", //
];

/// A vertical corridor at column 2 that opens onto a bottom passage, plus a dead end at (1, 5).
pub const CORRIDOR: [&str; 7] = [
    "#####", //
    "#P.G#", //
    "##.##", //
    "##.##", //
    "##.##", //
    "#...#", //
    "#####", //
];

/// A wrap-around tunnel on row 1. The adversary is walled off below.
pub const TUNNEL: [&str; 5] = [
    "#######", //
    "T  P  T", //
    "#######", //
    "#.   G#", //
    "#######", //
];

/// A player corridor that runs past the adversary's home.
pub const HOME: [&str; 5] = [
    "#####", //
    "#P.G#", //
    "#=.T#", //
    "#...#", //
    "#####", //
];

pub fn maze(rows: &[&str]) -> Maze {
    Maze::new(rows).expect("test board should parse")
}

pub fn session(rows: &[&str]) -> Session {
    session_with(rows, GameConfig::default())
}

pub fn session_with(rows: &[&str], config: GameConfig) -> Session {
    Session::new(maze(rows), config, 0)
}

/// A session with an easy round already started.
pub fn playing(rows: &[&str]) -> Session {
    playing_with(rows, GameConfig::default())
}

pub fn playing_with(rows: &[&str], config: GameConfig) -> Session {
    let mut session = session_with(rows, config);
    session.start(Difficulty::Easy).expect("round should start from the menu");
    session
}

pub fn center(col: i32, row: i32) -> Vec2 {
    Maze::cell_center(IVec2::new(col, row))
}

/// Puts the adversary exactly on top of the player.
pub fn stack_adversary_on_player(session: &mut Session) {
    let position = session.player().motion.position;
    session.adversary_mut().motion.position = position;
}

/// Eats the pickup under the adversary's spawn, leaving the player's as the last one on
/// [`LAST_PICKUP`].
pub fn clear_adversary_spawn(session: &mut Session) {
    let spawn = session.maze().adversary_spawn();
    session.maze_mut().consume(spawn.y, spawn.x);
}
