//! Unit tests for pairwise collision detection and resolution

use glam::Vec2;
use particles_core::collision::{detect_contact, resolve_all};
use particles_core::engine::Particle;
use particles_core::tests::test_helpers::{approx_eq_f32, approx_eq_vec2, particle};

fn body(pos: Vec2, vel: Vec2, radius: f32, mass: f32) -> Particle {
    Particle {
        pos,
        vel,
        radius,
        mass,
        damping: 0.0,
    }
}

#[test]
fn test_head_on_equal_mass_scenario() {
    let mut particles = vec![
        body(Vec2::new(100.0, 100.0), Vec2::new(5.0, 0.0), 10.0, 10.0),
        body(Vec2::new(118.0, 100.0), Vec2::new(-5.0, 0.0), 10.0, 10.0),
    ];

    let contacts = resolve_all(&mut particles);
    assert_eq!(contacts, 1);

    // Overlap of 2 split evenly
    assert!(approx_eq_vec2(particles[0].pos, Vec2::new(99.0, 100.0), 1e-5));
    assert!(approx_eq_vec2(particles[1].pos, Vec2::new(119.0, 100.0), 1e-5));

    // Equal masses exchange normal velocities
    assert!(approx_eq_vec2(particles[0].vel, Vec2::new(-5.0, 0.0), 1e-5));
    assert!(approx_eq_vec2(particles[1].vel, Vec2::new(5.0, 0.0), 1e-5));
}

#[test]
fn test_positional_correction_weighted_by_mass() {
    let start_heavy = Vec2::new(100.0, 100.0);
    let start_light = Vec2::new(118.0, 100.0);
    let mut particles = vec![
        body(start_heavy, Vec2::ZERO, 10.0, 10.0),
        body(start_light, Vec2::ZERO, 10.0, 1.0),
    ];

    resolve_all(&mut particles);

    let heavy_moved = particles[0].pos.distance(start_heavy);
    let light_moved = particles[1].pos.distance(start_light);

    assert!(approx_eq_f32(heavy_moved, 2.0 / 11.0, 1e-5));
    assert!(approx_eq_f32(light_moved, 20.0 / 11.0, 1e-5));
    assert!(approx_eq_f32(light_moved / heavy_moved, 10.0, 1e-3));

    // Correction removes the overlap entirely
    let gap = particles[0].pos.distance(particles[1].pos);
    assert!(approx_eq_f32(gap, 20.0, 1e-4));
}

#[test]
fn test_tangential_velocity_untouched() {
    // Contact normal along X; Y velocities must survive
    let mut particles = vec![
        body(Vec2::new(100.0, 100.0), Vec2::new(3.0, 2.0), 10.0, 10.0),
        body(Vec2::new(115.0, 100.0), Vec2::new(-1.0, -4.0), 10.0, 10.0),
    ];

    resolve_all(&mut particles);

    assert!(approx_eq_f32(particles[0].vel.y, 2.0, 1e-5));
    assert!(approx_eq_f32(particles[1].vel.y, -4.0, 1e-5));
    assert!(approx_eq_f32(particles[0].vel.x, -1.0, 1e-5));
    assert!(approx_eq_f32(particles[1].vel.x, 3.0, 1e-5));
}

#[test]
fn test_momentum_conserved_unequal_masses() {
    let mut particles = vec![
        body(Vec2::new(50.0, 50.0), Vec2::new(4.0, 1.0), 8.0, 8.0),
        body(Vec2::new(60.0, 56.0), Vec2::new(-2.0, 0.5), 5.0, 3.0),
    ];
    let before: Vec2 = particles.iter().map(|p| p.vel * p.mass).sum();
    let energy_before: f32 = particles.iter().map(|p| p.kinetic_energy()).sum();

    assert_eq!(resolve_all(&mut particles), 1);

    let after: Vec2 = particles.iter().map(|p| p.vel * p.mass).sum();
    let energy_after: f32 = particles.iter().map(|p| p.kinetic_energy()).sum();
    assert!(approx_eq_vec2(before, after, 1e-3));
    assert!(approx_eq_f32(energy_before, energy_after, 1e-2));
}

#[test]
fn test_coincident_particles_skipped() {
    let pos = Vec2::new(200.0, 200.0);
    let mut particles = vec![
        particle(pos, Vec2::new(1.0, 0.0), 10.0),
        particle(pos, Vec2::new(-1.0, 0.0), 10.0),
    ];
    let before = particles.clone();

    assert!(detect_contact(&particles[0], &particles[1]).is_none());
    assert_eq!(resolve_all(&mut particles), 0);
    assert_eq!(particles, before);
}

#[test]
fn test_touching_particles_not_in_contact() {
    // Exactly touching: distance equals the radius sum
    let a = particle(Vec2::new(0.0, 0.0), Vec2::ZERO, 5.0);
    let b = particle(Vec2::new(10.0, 0.0), Vec2::ZERO, 5.0);
    assert!(detect_contact(&a, &b).is_none());
}

#[test]
fn test_detect_contact_normal_points_at_first() {
    let a = particle(Vec2::new(0.0, 0.0), Vec2::ZERO, 5.0);
    let b = particle(Vec2::new(0.0, 6.0), Vec2::ZERO, 5.0);

    let contact = detect_contact(&a, &b).expect("should overlap");
    assert!(approx_eq_vec2(contact.normal, Vec2::new(0.0, -1.0), 1e-6));
    assert!(approx_eq_f32(contact.overlap, 4.0, 1e-6));
}

#[test]
fn test_separated_pairs_ignored() {
    let mut particles = vec![
        particle(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), 2.0),
        particle(Vec2::new(50.0, 0.0), Vec2::new(-1.0, 0.0), 2.0),
        particle(Vec2::new(0.0, 50.0), Vec2::ZERO, 2.0),
    ];
    let before = particles.clone();

    assert_eq!(resolve_all(&mut particles), 0);
    assert_eq!(particles, before);
}

#[test]
fn test_sequential_resolution_in_index_order() {
    // Three bodies in a row: pair (0,1) resolves first and pushes 1 into 2,
    // so pair (1,2) sees the corrected position.
    let mut particles = vec![
        particle(Vec2::new(0.0, 0.0), Vec2::ZERO, 5.0),
        particle(Vec2::new(8.0, 0.0), Vec2::ZERO, 5.0),
        particle(Vec2::new(17.0, 0.0), Vec2::ZERO, 5.0),
    ];

    let contacts = resolve_all(&mut particles);
    assert_eq!(contacts, 2);

    // (0,1): overlap 2 -> 0 to -1, 1 to 9. (1,2): overlap 10 - 8 = 2 -> 1 to 8, 2 to 18.
    assert!(approx_eq_f32(particles[0].pos.x, -1.0, 1e-5));
    assert!(approx_eq_f32(particles[1].pos.x, 8.0, 1e-5));
    assert!(approx_eq_f32(particles[2].pos.x, 18.0, 1e-5));
}

#[test]
fn test_resolve_all_empty_and_single() {
    let mut empty: Vec<Particle> = Vec::new();
    assert_eq!(resolve_all(&mut empty), 0);

    let mut single = vec![particle(Vec2::new(1.0, 1.0), Vec2::ZERO, 1.0)];
    assert_eq!(resolve_all(&mut single), 0);
}
