use glam::IVec2;

use crate::map::maze::Maze;
use crate::map::tile::PickupKind;
use crate::systems::movement::Motion;

/// Consumes whatever pickup lies in the cell under the player's center.
///
/// Returns the cell and the kind of pickup eaten, or `None` if the cell held nothing.
pub fn collect_pickup(maze: &mut Maze, player: &Motion) -> Option<(IVec2, PickupKind)> {
    let cell = player.cell();
    maze.take_pickup(cell).map(|kind| (cell, kind))
}
