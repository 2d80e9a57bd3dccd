//! Wall handling for the simulation rectangle

use crate::engine::{Particle, WorldBounds};

/// Clamp a particle inside `bounds`, reflecting the velocity on each axis
/// that touched a wall. Both axes may fire in the same tick.
pub fn resolve_bounds(particle: &mut Particle, bounds: WorldBounds) {
    let r = particle.radius;

    if particle.pos.x - r <= 0.0 {
        particle.pos.x = r;
        particle.vel.x = -particle.vel.x;
    } else if particle.pos.x + r >= bounds.width {
        particle.pos.x = bounds.width - r;
        particle.vel.x = -particle.vel.x;
    }

    if particle.pos.y - r <= 0.0 {
        particle.pos.y = r;
        particle.vel.y = -particle.vel.y;
    } else if particle.pos.y + r >= bounds.height {
        particle.pos.y = bounds.height - r;
        particle.vel.y = -particle.vel.y;
    }
}

/// Pull a particle back inside `bounds` without touching its velocity.
///
/// Collision correction runs after the wall pass and can push a body past a
/// wall; this restores containment at the end of the tick.
pub fn contain(particle: &mut Particle, bounds: WorldBounds) {
    let r = particle.radius;
    particle.pos.x = particle.pos.x.clamp(r, bounds.width - r);
    particle.pos.y = particle.pos.y.clamp(r, bounds.height - r);
}
