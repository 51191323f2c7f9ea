//! The maze grid: an immutable tile template plus the per-round overlay of consumed pickups.

use glam::{IVec2, Vec2};
use tracing::{debug, trace};

use crate::constants::CELL_SIZE;
use crate::error::ParseError;
use crate::map::parser::{MapTileParser, ParsedMap};
use crate::map::tile::{PickupKind, TileKind, TraversalFlags};

/// The playing field.
///
/// Cells are addressed either as `(row, col)` or as an [`IVec2`] whose `x` is the column and `y`
/// the row. The template is fixed at construction; gameplay mutates only the overlay copy.
#[derive(Debug, Clone)]
pub struct Maze {
    width: i32,
    height: i32,
    template: Box<[TileKind]>,
    cells: Vec<TileKind>,
    remaining_pickups: u32,
    player_spawn: IVec2,
    adversary_spawn: IVec2,
    tunnel_rows: Vec<i32>,
}

impl Maze {
    /// Parses a raw board layout and builds a fresh maze from it.
    pub fn new(raw_board: &[&str]) -> Result<Self, ParseError> {
        Ok(Self::from_parsed(MapTileParser::parse_board(raw_board)?))
    }

    pub fn from_parsed(parsed: ParsedMap) -> Self {
        let template: Box<[TileKind]> = parsed.tiles.into_boxed_slice();
        let cells = template.to_vec();
        let remaining_pickups = count_pickups(&cells);

        debug!(
            width = parsed.width,
            height = parsed.height,
            pickups = remaining_pickups,
            tunnels = parsed.tunnel_rows.len(),
            "Maze built from board layout"
        );

        Self {
            width: parsed.width as i32,
            height: parsed.height as i32,
            template,
            cells,
            remaining_pickups,
            player_spawn: parsed.player_spawn,
            adversary_spawn: parsed.adversary_spawn,
            tunnel_rows: parsed.tunnel_rows.into_iter().map(|row| row as i32).collect(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// The size of the board in pixels.
    pub fn pixel_size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32) * CELL_SIZE as f32
    }

    pub fn player_spawn(&self) -> IVec2 {
        self.player_spawn
    }

    pub fn adversary_spawn(&self) -> IVec2 {
        self.adversary_spawn
    }

    pub fn remaining_pickups(&self) -> u32 {
        self.remaining_pickups
    }

    /// Rows with a tunnel end on both edges, top to bottom.
    pub fn tunnel_rows(&self) -> &[i32] {
        &self.tunnel_rows
    }

    fn in_bounds(&self, row: i32, col: i32) -> bool {
        (0..self.height).contains(&row) && (0..self.width).contains(&col)
    }

    fn index(&self, row: i32, col: i32) -> usize {
        (row * self.width + col) as usize
    }

    /// Returns the current tile at `(row, col)`.
    ///
    /// Anything outside the board is a wall, except the single column just past each end of a
    /// tunnel row, which continues the tunnel so a character can slide off the edge and wrap.
    pub fn tile_at(&self, row: i32, col: i32) -> TileKind {
        if !(0..self.height).contains(&row) {
            return TileKind::Wall;
        }
        if !(0..self.width).contains(&col) {
            let just_past_edge = col == -1 || col == self.width;
            return if just_past_edge && self.tunnel_rows.contains(&row) {
                TileKind::Tunnel
            } else {
                TileKind::Wall
            };
        }
        self.cells[self.index(row, col)]
    }

    pub fn tile_at_cell(&self, cell: IVec2) -> TileKind {
        self.tile_at(cell.y, cell.x)
    }

    /// Returns true if a character with the given traversal flags may occupy the cell.
    pub fn is_passable(&self, cell: IVec2, who: TraversalFlags) -> bool {
        self.tile_at_cell(cell).allows(who)
    }

    /// Consumes the pickup at `(row, col)`, returning the score it was worth.
    ///
    /// Cells without a pickup (including already-consumed ones) are left untouched and score 0.
    pub fn consume(&mut self, row: i32, col: i32) -> u32 {
        self.take_pickup(IVec2::new(col, row)).map_or(0, PickupKind::score_value)
    }

    /// Consumes the pickup in `cell`, returning its kind if there was one.
    pub fn take_pickup(&mut self, cell: IVec2) -> Option<PickupKind> {
        if !self.in_bounds(cell.y, cell.x) {
            return None;
        }
        let index = self.index(cell.y, cell.x);
        let kind = self.cells[index].pickup()?;

        self.cells[index] = TileKind::Empty;
        self.remaining_pickups -= 1;
        trace!(?cell, ?kind, remaining = self.remaining_pickups, "Pickup consumed");
        Some(kind)
    }

    /// Restores every consumed pickup from the template.
    pub fn reset(&mut self) {
        self.cells.copy_from_slice(&self.template);
        self.remaining_pickups = count_pickups(&self.cells);
        debug!(pickups = self.remaining_pickups, "Maze reset from template");
    }

    /// The pixel position of the center of a cell.
    pub fn cell_center(cell: IVec2) -> Vec2 {
        (cell.as_vec2() + Vec2::splat(0.5)) * CELL_SIZE as f32
    }

    /// The cell containing a pixel position.
    pub fn cell_of(position: Vec2) -> IVec2 {
        (position / CELL_SIZE as f32).floor().as_ivec2()
    }

    /// Iterates over the rows of current tiles, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[TileKind]> {
        self.cells.chunks(self.width as usize)
    }
}

fn count_pickups(cells: &[TileKind]) -> u32 {
    cells.iter().filter(|tile| tile.pickup().is_some()).count() as u32
}
