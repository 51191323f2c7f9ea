use glam::{I8Vec2, IVec2, Vec2};
use pixel_muncher::map::direction::Direction;
use pretty_assertions::assert_eq;

#[test]
fn test_direction_opposite() {
    let test_cases = [
        (Direction::Up, Direction::Down),
        (Direction::Down, Direction::Up),
        (Direction::Left, Direction::Right),
        (Direction::Right, Direction::Left),
    ];

    for (dir, expected) in test_cases {
        assert_eq!(dir.opposite(), expected);
        assert_eq!(dir.opposite().opposite(), dir);
    }
}

#[test]
fn test_direction_vectors() {
    let test_cases = [
        (Direction::Up, IVec2::new(0, -1)),
        (Direction::Down, IVec2::new(0, 1)),
        (Direction::Left, IVec2::new(-1, 0)),
        (Direction::Right, IVec2::new(1, 0)),
    ];

    for (dir, expected) in test_cases {
        assert_eq!(dir.as_cell_offset(), expected);
        assert_eq!(dir.as_vec2(), expected.as_vec2());
        assert_eq!(dir.as_ivec2(), I8Vec2::new(expected.x as i8, expected.y as i8));
    }
}

#[test]
fn test_direction_order() {
    assert_eq!(
        Direction::DIRECTIONS,
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    );
    assert_eq!(Direction::default(), Direction::Right);
    assert_eq!(Direction::Up.as_vec2(), Vec2::new(0.0, -1.0));
}

#[test]
fn test_direction_names() {
    assert_eq!(Direction::Up.as_ref(), "up");
    assert_eq!(Direction::Right.as_ref(), "right");
}
