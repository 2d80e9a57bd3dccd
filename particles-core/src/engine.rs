use glam::Vec2;
use thiserror::Error;

/// Invariant violation on a single particle
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParticleError {
    #[error("radius must be positive and finite, got {0}")]
    NonPositiveRadius(f32),
    #[error("mass must be positive and finite, got {0}")]
    NonPositiveMass(f32),
    #[error("damping must lie in [0, 1), got {0}")]
    DampingOutOfRange(f32),
    #[error("position and velocity must be finite")]
    NonFiniteState,
}

/// A circular body in the simulation
///
/// `radius` is the collision extent. `mass` only enters the collision and
/// gravity math; generated particles use `mass == radius` but the two are
/// kept apart so they can diverge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub mass: f32,
    /// Fraction of velocity removed per tick
    pub damping: f32,
}

impl Particle {
    pub fn new(
        pos: Vec2,
        vel: Vec2,
        radius: f32,
        mass: f32,
        damping: f32,
    ) -> Result<Self, ParticleError> {
        let particle = Self {
            pos,
            vel,
            radius,
            mass,
            damping,
        };
        particle.validate()?;
        Ok(particle)
    }

    /// Build a particle whose mass equals its radius
    pub fn from_radius(
        pos: Vec2,
        vel: Vec2,
        radius: f32,
        damping: f32,
    ) -> Result<Self, ParticleError> {
        Self::new(pos, vel, radius, radius, damping)
    }

    pub fn validate(&self) -> Result<(), ParticleError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ParticleError::NonPositiveRadius(self.radius));
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(ParticleError::NonPositiveMass(self.mass));
        }
        if !(0.0..1.0).contains(&self.damping) {
            return Err(ParticleError::DampingOutOfRange(self.damping));
        }
        if !(self.pos.is_finite() && self.vel.is_finite()) {
            return Err(ParticleError::NonFiniteState);
        }
        Ok(())
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.vel.length_squared()
    }
}

/// Extent of the simulation rectangle, anchored at the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether a body of `radius` centred at `pos` lies fully inside
    pub fn contains(&self, pos: Vec2, radius: f32) -> bool {
        pos.x >= radius
            && pos.x <= self.width - radius
            && pos.y >= radius
            && pos.y <= self.height - radius
    }
}

/// Pointer input for a single tick
///
/// `triggered` is edge-triggered: true only on the tick the trigger begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub pos: Vec2,
    pub triggered: bool,
}

impl PointerState {
    pub fn hovering(pos: Vec2) -> Self {
        Self {
            pos,
            triggered: false,
        }
    }

    pub fn triggered(pos: Vec2) -> Self {
        Self {
            pos,
            triggered: true,
        }
    }
}
