use crate::boundary::resolve_bounds;
use crate::engine::{Particle, PointerState, WorldBounds};
use crate::pointer::PointerField;

/// Advance one particle by a single tick (semi-implicit Euler, unit timestep).
///
/// Order: pointer field, gravity scaled by mass, position, walls, damping.
pub fn integrate(
    particle: &mut Particle,
    pointer: Option<&PointerState>,
    field: &PointerField,
    gravity: f32,
    bounds: WorldBounds,
) {
    if let Some(pointer) = pointer {
        particle.vel += field.velocity_change(particle.pos, pointer);
    }

    // Heavier particles fall faster
    particle.vel.y += gravity * particle.mass;

    particle.pos += particle.vel;

    resolve_bounds(particle, bounds);

    particle.vel *= 1.0 - particle.damping;
}
