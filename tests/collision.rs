use glam::{IVec2, Vec2};
use pixel_muncher::systems::{collision::characters_collide, movement::Motion};
use speculoos::prelude::*;

mod common;

fn at(position: Vec2) -> Motion {
    let mut motion = Motion::spawn(IVec2::ZERO, 1.0);
    motion.position = position;
    motion
}

#[test]
fn test_coincident_characters_collide() {
    let a = at(Vec2::new(30.0, 30.0));

    assert_that(&characters_collide(&a, &a)).is_true();
}

#[test]
fn test_overlapping_envelopes_collide() {
    // Radii are 8 each
    let a = at(Vec2::new(30.0, 30.0));
    let b = at(Vec2::new(45.9, 30.0));

    assert_that(&characters_collide(&a, &b)).is_true();
    assert_that(&characters_collide(&b, &a)).is_true();
}

#[test]
fn test_touching_envelopes_do_not_collide() {
    let a = at(Vec2::new(30.0, 30.0));
    let b = at(Vec2::new(46.0, 30.0));

    assert_that(&characters_collide(&a, &b)).is_false();
}

#[test]
fn test_distant_characters() {
    let a = at(Vec2::new(30.0, 30.0));
    let b = at(Vec2::new(30.0, 90.0));

    assert_that(&characters_collide(&a, &b)).is_false();
}
