//! Unit tests for the pointer field

use glam::Vec2;
use particles_core::engine::PointerState;
use particles_core::pointer::PointerField;
use particles_core::tests::test_helpers::{approx_eq_f32, approx_eq_vec2};

fn field() -> PointerField {
    PointerField::new(100.0, 25.0)
}

#[test]
fn test_repulsion_is_unit_vector_away() {
    let pointer = PointerState::hovering(Vec2::new(100.0, 100.0));

    let near = field().velocity_change(Vec2::new(103.0, 104.0), &pointer);
    let far = field().velocity_change(Vec2::new(160.0, 180.0), &pointer);

    assert!(approx_eq_vec2(near, Vec2::new(0.6, 0.8), 1e-6));
    // Independent of distance
    assert!(approx_eq_vec2(far, Vec2::new(0.6, 0.8), 1e-6));
    assert!(approx_eq_f32(near.length(), 1.0, 1e-6));
}

#[test]
fn test_trigger_kicks_downward() {
    let pointer = PointerState::triggered(Vec2::new(100.0, 100.0));

    let dv = field().velocity_change(Vec2::new(130.0, 60.0), &pointer);

    assert_eq!(dv, Vec2::new(0.0, 25.0));
}

#[test]
fn test_outside_radius_no_effect() {
    let hovering = PointerState::hovering(Vec2::ZERO);
    let triggered = PointerState::triggered(Vec2::ZERO);
    let pos = Vec2::new(100.5, 0.0);

    assert_eq!(field().velocity_change(pos, &hovering), Vec2::ZERO);
    assert_eq!(field().velocity_change(pos, &triggered), Vec2::ZERO);
}

#[test]
fn test_radius_is_inclusive() {
    let pointer = PointerState::hovering(Vec2::ZERO);

    let dv = field().velocity_change(Vec2::new(100.0, 0.0), &pointer);

    assert!(approx_eq_vec2(dv, Vec2::new(1.0, 0.0), 1e-6));
}

#[test]
fn test_coincident_repulsion_skipped() {
    let pos = Vec2::new(42.0, 17.0);
    let pointer = PointerState::hovering(pos);

    let dv = field().velocity_change(pos, &pointer);

    assert_eq!(dv, Vec2::ZERO);
    assert!(!dv.is_nan());
}

#[test]
fn test_coincident_trigger_still_kicks() {
    let pos = Vec2::new(42.0, 17.0);
    let pointer = PointerState::triggered(pos);

    assert_eq!(field().velocity_change(pos, &pointer), Vec2::new(0.0, 25.0));
}

#[test]
fn test_zero_radius_field() {
    let field = PointerField::new(0.0, 25.0);
    let pointer = PointerState::hovering(Vec2::ZERO);

    assert_eq!(field.velocity_change(Vec2::new(0.1, 0.0), &pointer), Vec2::ZERO);
}
