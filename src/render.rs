//! Terminal drawing of a [`Snapshot`].
//!
//! Each board cell is two terminal columns wide so the maze keeps a roughly square aspect. Rows are
//! rewritten in place every frame; everything is queued and flushed once.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;
use glam::IVec2;
use thousands::Separable;

use crate::game::{CharacterView, Snapshot};
use crate::map::maze::Maze;
use crate::map::tile::{PickupKind, TileKind};
use crate::systems::{RoundOutcome, RoundPhase};

const PLAYER_GLYPH: (&str, Color) = ("()", Color::Yellow);
const ADVERSARY_GLYPH: (&str, Color) = ("<>", Color::Red);

/// The two-column glyph and color used for a tile.
pub fn tile_glyph(tile: TileKind) -> (&'static str, Color) {
    match tile {
        TileKind::Empty | TileKind::Tunnel => ("  ", Color::Reset),
        TileKind::Wall => ("██", Color::Blue),
        TileKind::Pickup(PickupKind::Standard) => (" ·", Color::White),
        TileKind::Pickup(PickupKind::Power) => (" ●", Color::White),
        TileKind::RestrictedZone => ("░░", Color::DarkGrey),
    }
}

/// The status line drawn under the board.
pub fn hud_line(snapshot: &Snapshot<'_>) -> String {
    format!(
        "Score {:>7}   Lives {}   High {:>7}   {}",
        snapshot.score.separate_with_commas(),
        snapshot.lives,
        snapshot.high_score.separate_with_commas(),
        snapshot.difficulty,
    )
}

/// The prompt shown under the HUD for the current phase.
pub fn phase_message(phase: RoundPhase) -> &'static str {
    match phase {
        RoundPhase::Menu => "Press E for easy or H for hard. Q quits.",
        RoundPhase::Playing => "Arrows or WASD to move.",
        RoundPhase::Paused { .. } => "Caught! Get ready...",
        RoundPhase::Ended(RoundOutcome::Won) => "You cleared the maze! Enter for the menu.",
        RoundPhase::Ended(RoundOutcome::Lost) => "Game over. Enter for the menu.",
    }
}

/// Queues a full frame on `out` and flushes it.
///
/// # Errors
///
/// Returns any I/O error raised by the terminal.
pub fn draw<W: Write>(out: &mut W, snapshot: &Snapshot<'_>) -> io::Result<()> {
    let player = visible_cell(snapshot.maze, &snapshot.player);
    let adversary = visible_cell(snapshot.maze, &snapshot.adversary);

    for (row, tiles) in snapshot.maze.rows().enumerate() {
        queue!(out, MoveTo(0, row as u16))?;
        for (col, tile) in tiles.iter().enumerate() {
            let cell = IVec2::new(col as i32, row as i32);
            // The adversary is drawn over the player when they share a cell
            let (glyph, color) = if Some(cell) == adversary {
                ADVERSARY_GLYPH
            } else if Some(cell) == player {
                PLAYER_GLYPH
            } else {
                tile_glyph(*tile)
            };
            queue!(out, SetForegroundColor(color), Print(glyph))?;
        }
    }

    let status_row = snapshot.maze.height() as u16;
    queue!(
        out,
        ResetColor,
        MoveTo(0, status_row + 1),
        Clear(ClearType::CurrentLine),
        Print(hud_line(snapshot)),
        MoveTo(0, status_row + 2),
        Clear(ClearType::CurrentLine),
        Print(phase_message(snapshot.phase)),
    )?;
    out.flush()
}

/// The board cell a character is drawn in, or `None` while it is off the board in a tunnel.
fn visible_cell(maze: &Maze, character: &CharacterView) -> Option<IVec2> {
    let cell = Maze::cell_of(character.position);
    let inside = (0..maze.width()).contains(&cell.x) && (0..maze.height()).contains(&cell.y);
    inside.then_some(cell)
}
