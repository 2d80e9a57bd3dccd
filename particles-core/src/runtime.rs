use crate::analyzer::analyze_config;
use crate::boundary::contain;
use crate::collision::resolve_all;
use crate::config::{ConfigError, SimConfig};
use crate::diagnostics::{DiagnosticSeverity, Diagnostics};
use crate::engine::{Particle, PointerState, WorldBounds};
use crate::generator::generate_particles;
use crate::integrator::integrate;
use crate::pointer::PointerField;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;

/// What the presentation layer needs to draw a particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleState {
    pub pos: Vec2,
    pub radius: f32,
}

/// Aggregate measurements over the population
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationStats {
    pub tick: u64,
    pub particles: usize,
    pub kinetic_energy: f32,
    pub momentum: Vec2,
    pub max_speed: f32,
    /// Particles not fully inside the world
    pub escaped: usize,
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tick {}: {} particles, kinetic energy {:.3}, momentum ({:.3}, {:.3}), max speed {:.3}, escaped {}",
            self.tick,
            self.particles,
            self.kinetic_energy,
            self.momentum.x,
            self.momentum.y,
            self.max_speed,
            self.escaped
        )
    }
}

pub fn measure(particles: &[Particle], bounds: WorldBounds, tick: u64) -> SimulationStats {
    SimulationStats {
        tick,
        particles: particles.len(),
        kinetic_energy: particles.iter().map(Particle::kinetic_energy).sum(),
        momentum: particles.iter().map(|p| p.vel * p.mass).sum(),
        max_speed: particles.iter().map(Particle::speed).fold(0.0, f32::max),
        escaped: particles
            .iter()
            .filter(|p| !bounds.contains(p.pos, p.radius))
            .count(),
    }
}

/// A running particle simulation.
///
/// The population is fixed for the lifetime of the simulation; `step`
/// mutates it in place.
#[derive(Debug, Clone)]
pub struct Simulation {
    particles: Vec<Particle>,
    config: SimConfig,
    bounds: WorldBounds,
    field: PointerField,
    tick: u64,
}

impl Simulation {
    /// Validate `config` and generate its population
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let particles = generate_particles(&config, &mut rng);

        tracing::debug!(
            count = particles.len(),
            width = config.world_width,
            height = config.world_height,
            seed = ?config.seed,
            "simulation generated"
        );

        Ok(Self::assemble(config, particles))
    }

    /// Build a simulation around an explicit population.
    ///
    /// `particle_count` in `config` is ignored; the population is `particles`.
    pub fn from_particles(config: SimConfig, particles: Vec<Particle>) -> Result<Self, ConfigError> {
        config.validate()?;
        for (index, particle) in particles.iter().enumerate() {
            particle
                .validate()
                .map_err(|source| ConfigError::InvalidParticle { index, source })?;
            config.check_fits(particle.radius)?;
        }

        tracing::debug!(count = particles.len(), "simulation assembled from particles");

        Ok(Self::assemble(config, particles))
    }

    fn assemble(config: SimConfig, particles: Vec<Particle>) -> Self {
        Self {
            bounds: config.bounds(),
            field: config.pointer_field(),
            particles,
            config,
            tick: 0,
        }
    }

    /// Advance one tick: integrate every particle, then resolve collisions once.
    /// Bodies pushed through a wall by collision correction are clamped back.
    ///
    /// Returns the number of contacts resolved.
    pub fn step(&mut self, pointer: Option<&PointerState>) -> usize {
        for particle in &mut self.particles {
            integrate(particle, pointer, &self.field, self.config.gravity, self.bounds);
        }
        let contacts = resolve_all(&mut self.particles);
        if contacts > 0 {
            for particle in &mut self.particles {
                contain(particle, self.bounds);
            }
        }

        self.tick += 1;
        tracing::trace!(tick = self.tick, contacts, "tick resolved");

        contacts
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle_states(&self) -> impl Iterator<Item = ParticleState> + '_ {
        self.particles.iter().map(|p| ParticleState {
            pos: p.pos,
            radius: p.radius,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    pub fn pointer_field(&self) -> PointerField {
        self.field
    }

    /// Ticks completed so far
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn stats(&self) -> SimulationStats {
        measure(&self.particles, self.bounds, self.tick)
    }
}

/// Build a simulation and surface configuration warnings alongside it
pub fn build_simulation(config: SimConfig) -> Result<(Simulation, Diagnostics), ConfigError> {
    config.validate()?;
    let diagnostics = analyze_config(&config);
    for diagnostic in &diagnostics {
        match diagnostic.severity {
            DiagnosticSeverity::Warning => tracing::warn!("{}", diagnostic.message),
            DiagnosticSeverity::Note => tracing::info!("{}", diagnostic.message),
        }
    }

    let simulation = Simulation::new(config)?;
    Ok((simulation, diagnostics))
}
