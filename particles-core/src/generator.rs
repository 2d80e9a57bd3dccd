use crate::config::SimConfig;
use crate::engine::Particle;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Generate the initial population described by `config`.
///
/// `config` must already be validated: every particle is placed fully
/// inside the world, with mass equal to its radius.
pub fn generate_particles<R: Rng + ?Sized>(config: &SimConfig, rng: &mut R) -> Vec<Particle> {
    (0..config.particle_count)
        .map(|_| {
            let radius = rng.gen_range(config.min_radius..=config.max_radius);
            let pos = Vec2::new(
                rng.gen_range(radius..=config.world_width - radius),
                rng.gen_range(radius..=config.world_height - radius),
            );
            let direction = Vec2::from_angle(rng.gen_range(0.0..TAU));
            let speed = rng.gen_range(config.min_speed..=config.max_speed);

            Particle {
                pos,
                vel: direction * speed,
                radius,
                mass: radius,
                damping: config.damping,
            }
        })
        .collect()
}
