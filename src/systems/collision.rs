use crate::systems::movement::Motion;

/// Circle-circle overlap test between two characters.
///
/// Touching exactly (distance equal to the sum of radii) does not count.
pub fn characters_collide(a: &Motion, b: &Motion) -> bool {
    a.position.distance(b.position) < a.radius + b.radius
}
