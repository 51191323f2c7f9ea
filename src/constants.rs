//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::UVec2;

/// Target duration of one frame of the host loop.
pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// Ticks arriving sooner than this after the last processed tick are skipped (soft frame-rate cap).
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(16);

/// The size of each cell, in pixels.
pub const CELL_SIZE: u32 = 20;
/// The size of the default game board, in cells.
pub const BOARD_CELL_SIZE: UVec2 = UVec2::new(20, 20);
/// The size of the default game board, in pixels.
pub const BOARD_PIXEL_SIZE: UVec2 = UVec2::new(BOARD_CELL_SIZE.x * CELL_SIZE, BOARD_CELL_SIZE.y * CELL_SIZE);

/// Number of lives at the start of a round.
pub const STARTING_LIVES: u8 = 3;

/// Wall-clock pause between losing a life and the characters returning to their spawns.
pub const LIFE_LOST_DELAY: Duration = Duration::from_secs(2);

/// Movement tuning. All speeds are in pixels per tick.
pub mod movement {
    /// Base speed unit.
    pub const BASE_SPEED: f32 = 4.0;
    pub const PLAYER_SPEED: f32 = 0.8 * BASE_SPEED;
    /// Adversary speed before the difficulty multiplier is applied.
    pub const ADVERSARY_SPEED: f32 = 0.75 * BASE_SPEED;

    pub const EASY_SPEED_MULTIPLIER: f32 = 0.75;
    pub const HARD_SPEED_MULTIPLIER: f32 = 1.25;

    /// Character radius as a fraction of the cell size.
    pub const RADIUS_FACTOR: f32 = 0.4;
    /// Wall probes sit this fraction of the radius away from the character center.
    pub const PROBE_FACTOR: f32 = 0.9;
}

/// Score values for consumable tiles.
pub mod score {
    pub const STANDARD_PICKUP: u32 = 10;
    pub const POWER_PICKUP: u32 = 50;
}

/// Minimum swipe length (in input units) before a touch gesture counts as a direction.
pub const SWIPE_THRESHOLD: f32 = 30.0;

/// The raw layout of the game board.
///
/// `#` wall, `.` pickup, `o` power pickup, `=` adversary home, `T` tunnel end, ` ` empty.
/// `P` and `G` mark the player and adversary spawns; both cells also hold a standard pickup.
pub const RAW_BOARD: [&str; BOARD_CELL_SIZE.y as usize] = [
    "####################",
    "#P................o#",
    "#.##.###.##.###.##.#",
    "#.##.###.##.###.##.#",
    "#........o.........#",
    "#.##.#.#####.#.###.#",
    "#....#...##....#...#",
    "####.###.##.####.###",
    "####.#....G....#.###",
    "####.#.#====#.##.###",
    "T......#====#....o.T",
    "####.#.######.##.###",
    "####.#.........#.###",
    "####.#.######.##.###",
    "#........##........#",
    "#.##.###.##.###.##.#",
    "#o.#............#.o#",
    "##.#.#.#####.#.##.##",
    "#....#...##..#.....#",
    "####################",
];
