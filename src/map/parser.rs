//! Map parsing functionality for converting raw board layouts into structured data.

use glam::IVec2;

use crate::error::ParseError;
use crate::map::tile::{PickupKind, TileKind};

/// Represents the parsed data from a raw board layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMap {
    /// The parsed tile layout, row-major.
    pub tiles: Vec<TileKind>,
    pub width: usize,
    pub height: usize,
    /// The player's spawn cell (`x` is the column, `y` the row).
    pub player_spawn: IVec2,
    /// The adversary's spawn cell.
    pub adversary_spawn: IVec2,
    /// Rows with a tunnel at both edges.
    pub tunnel_rows: Vec<usize>,
}

/// Parser for converting raw board layouts into structured map data.
pub struct MapTileParser;

impl MapTileParser {
    /// Parses a single character into a map tile.
    ///
    /// Spawn markers (`P`, `G`) parse as standard pickups, so both spawns start with one.
    /// Returns `None` for characters with no meaning on a board.
    pub fn parse_character(c: char) -> Option<TileKind> {
        match c {
            '#' => Some(TileKind::Wall),
            'o' => Some(TileKind::Pickup(PickupKind::Power)),
            '.' | 'P' | 'G' => Some(TileKind::Pickup(PickupKind::Standard)),
            ' ' => Some(TileKind::Empty),
            '=' => Some(TileKind::RestrictedZone),
            'T' => Some(TileKind::Tunnel),
            _ => None,
        }
    }

    /// Parses a raw board layout into structured map data.
    ///
    /// # Errors
    ///
    /// Returns an error if the board is empty or ragged, contains unknown characters, does not
    /// have exactly one spawn per character, or has a tunnel end without a partner on the
    /// opposite edge of its row.
    pub fn parse_board(raw_board: &[&str]) -> Result<ParsedMap, ParseError> {
        let width = raw_board.first().map(|row| row.chars().count()).unwrap_or(0);
        if width == 0 {
            return Err(ParseError::EmptyBoard);
        }

        let mut tiles = Vec::with_capacity(width * raw_board.len());
        let mut player_spawn: Option<IVec2> = None;
        let mut adversary_spawn: Option<IVec2> = None;
        let mut tunnel_rows = Vec::new();

        for (y, line) in raw_board.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(ParseError::RaggedRow { row: y, expected: width, found });
            }

            for (x, character) in line.chars().enumerate() {
                let tile = Self::parse_character(character).ok_or(ParseError::UnknownCharacter {
                    character,
                    row: y,
                    col: x,
                })?;

                let spawn = match character {
                    'P' => Some((&mut player_spawn, "player")),
                    'G' => Some((&mut adversary_spawn, "adversary")),
                    _ => None,
                };
                if let Some((slot, name)) = spawn {
                    if slot.replace(IVec2::new(x as i32, y as i32)).is_some() {
                        return Err(ParseError::DuplicateSpawn(name));
                    }
                }

                tiles.push(tile);
            }

            // Tunnels only make sense as a pair of gaps on the same row
            let row = &tiles[y * width..];
            match (row[0] == TileKind::Tunnel, row[width - 1] == TileKind::Tunnel) {
                (true, true) => tunnel_rows.push(y),
                (false, false) => {}
                _ => return Err(ParseError::UnpairedTunnel(y)),
            }
        }

        Ok(ParsedMap {
            tiles,
            width,
            height: raw_board.len(),
            player_spawn: player_spawn.ok_or(ParseError::MissingSpawn("player"))?,
            adversary_spawn: adversary_spawn.ok_or(ParseError::MissingSpawn("adversary"))?,
            tunnel_rows,
        })
    }
}
