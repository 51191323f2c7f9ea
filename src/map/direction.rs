use glam::{I8Vec2, IVec2, Vec2};
use strum_macros::AsRefStr;

/// The four cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    /// The four cardinal directions, in the order ties are broken when choosing between them.
    pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Returns the opposite direction. Constant time.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns the direction as an I8Vec2.
    pub fn as_ivec2(self) -> I8Vec2 {
        self.into()
    }

    /// Returns the cell offset of one step in this direction.
    pub fn as_cell_offset(self) -> IVec2 {
        let offset = self.as_ivec2();
        IVec2::new(offset.x as i32, offset.y as i32)
    }

    /// Returns the unit vector of this direction in pixel space.
    pub fn as_vec2(self) -> Vec2 {
        self.as_cell_offset().as_vec2()
    }
}

impl From<Direction> for I8Vec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => -I8Vec2::Y,
            Direction::Down => I8Vec2::Y,
            Direction::Left => -I8Vec2::X,
            Direction::Right => I8Vec2::X,
        }
    }
}
