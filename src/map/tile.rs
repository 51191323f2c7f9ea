use bitflags::bitflags;

use crate::constants::score;

bitflags! {
    /// Which kinds of character may enter a tile.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TraversalFlags: u8 {
        const PLAYER = 1 << 0;
        const ADVERSARY = 1 << 1;
        const ALL = Self::PLAYER.bits() | Self::ADVERSARY.bits();
    }
}

/// The two kinds of collectible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickupKind {
    Standard,
    /// Worth more points. Eating one has no other effect.
    Power,
}

impl PickupKind {
    pub const fn score_value(self) -> u32 {
        match self {
            PickupKind::Standard => score::STANDARD_PICKUP,
            PickupKind::Power => score::POWER_PICKUP,
        }
    }
}

/// An enum representing the different types of tiles on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// An empty, walkable tile.
    Empty,
    /// A wall tile. Also returned for lookups outside the board.
    Wall,
    /// A walkable tile holding a collectible.
    Pickup(PickupKind),
    /// The adversary's home. Nobody may enter it.
    RestrictedZone,
    /// A wraparound gap at the edge of a row. Only the player may use it.
    Tunnel,
}

impl TileKind {
    /// Returns the traversal flags for this tile.
    pub const fn traversal_flags(self) -> TraversalFlags {
        match self {
            TileKind::Wall | TileKind::RestrictedZone => TraversalFlags::empty(),
            TileKind::Tunnel => TraversalFlags::PLAYER,
            TileKind::Empty | TileKind::Pickup(_) => TraversalFlags::ALL,
        }
    }

    /// Returns true if every character in `who` may enter this tile.
    pub const fn allows(self, who: TraversalFlags) -> bool {
        self.traversal_flags().contains(who)
    }

    pub const fn pickup(self) -> Option<PickupKind> {
        match self {
            TileKind::Pickup(kind) => Some(kind),
            _ => None,
        }
    }
}
