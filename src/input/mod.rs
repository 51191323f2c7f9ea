use std::collections::HashMap;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use glam::Vec2;
use tracing::debug;

use crate::config::Difficulty;
use crate::constants::SWIPE_THRESHOLD;
use crate::events::GameCommand;
use crate::map::direction::Direction;

/// Maps terminal keys to game commands.
#[derive(Debug, Clone)]
pub struct Bindings {
    key_bindings: HashMap<KeyCode, GameCommand>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut key_bindings = HashMap::new();

        // Player movement
        for (keys, direction) in [
            ([KeyCode::Up, KeyCode::Char('w')], Direction::Up),
            ([KeyCode::Down, KeyCode::Char('s')], Direction::Down),
            ([KeyCode::Left, KeyCode::Char('a')], Direction::Left),
            ([KeyCode::Right, KeyCode::Char('d')], Direction::Right),
        ] {
            for key in keys {
                key_bindings.insert(key, GameCommand::MovePlayer(direction));
            }
        }

        // Round control
        key_bindings.insert(KeyCode::Char('e'), GameCommand::StartRound(Difficulty::Easy));
        key_bindings.insert(KeyCode::Char('h'), GameCommand::StartRound(Difficulty::Hard));
        key_bindings.insert(KeyCode::Enter, GameCommand::ReturnToMenu);

        // Exit
        key_bindings.insert(KeyCode::Esc, GameCommand::Exit);
        key_bindings.insert(KeyCode::Char('q'), GameCommand::Exit);

        Self { key_bindings }
    }
}

impl Bindings {
    /// The command for a key event, if it is bound. Releases are ignored; Ctrl+C always exits.
    pub fn command_for(&self, key: &KeyEvent) -> Option<GameCommand> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c' | 'C')) {
            return Some(GameCommand::Exit);
        }

        let code = match key.code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            code => code,
        };
        self.key_bindings.get(&code).copied()
    }

    /// Drains every pending terminal event without blocking and returns the bound commands.
    ///
    /// # Errors
    ///
    /// Returns the terminal's I/O error if polling or reading fails.
    pub fn poll_commands(&self) -> io::Result<Vec<GameCommand>> {
        let mut commands = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(command) = self.command_for(&key) {
                    debug!(?command, "Triggering command");
                    commands.push(command);
                }
            }
        }
        Ok(commands)
    }
}

/// Classifies a swipe by its dominant axis.
///
/// `delta` is the end point minus the start point in screen coordinates (y grows downward). Swipes
/// whose dominant component is shorter than [`SWIPE_THRESHOLD`] are ignored. Equal components
/// count as vertical.
pub fn swipe_direction(delta: Vec2) -> Option<Direction> {
    let magnitude = delta.abs();
    if magnitude.x > magnitude.y {
        if magnitude.x < SWIPE_THRESHOLD {
            return None;
        }
        Some(if delta.x > 0.0 { Direction::Right } else { Direction::Left })
    } else {
        if magnitude.y < SWIPE_THRESHOLD {
            return None;
        }
        Some(if delta.y > 0.0 { Direction::Down } else { Direction::Up })
    }
}
