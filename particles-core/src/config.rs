//! Simulation configuration
//!
//! All values are fixed at construction. Configurations can be loaded from
//! JSON; missing fields fall back to the defaults below.

use crate::engine::{ParticleError, WorldBounds};
use crate::pointer::PointerField;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration error raised before a simulation is built
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("world extents must be positive, got {width} x {height}")]
    NonPositiveExtent { width: f32, height: f32 },
    #[error("field '{0}' must be finite")]
    NonFinite(&'static str),
    #[error("invalid radius range [{min}, {max}]: need 0 < min <= max")]
    InvalidRadiusRange { min: f32, max: f32 },
    #[error("invalid speed range [{min}, {max}]: need 0 <= min <= max")]
    InvalidSpeedRange { min: f32, max: f32 },
    #[error("damping must lie in [0, 1), got {0}")]
    InvalidDamping(f32),
    #[error("pointer radius must not be negative, got {0}")]
    NegativePointerRadius(f32),
    #[error("world {width} x {height} cannot hold a particle of radius {radius}")]
    WorldTooSmall { width: f32, height: f32, radius: f32 },
    #[error("particle {index}: {source}")]
    InvalidParticle {
        index: usize,
        #[source]
        source: ParticleError,
    },
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    pub world_width: f32,
    pub world_height: f32,
    pub particle_count: usize,
    /// Downward acceleration per unit of mass per tick
    pub gravity: f32,
    pub pointer_radius: f32,
    pub pointer_impulse: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub damping: f32,
    /// Seed for particle generation; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world_width: 1280.0,
            world_height: 720.0,
            particle_count: 20,
            gravity: 0.1,
            pointer_radius: 100.0,
            pointer_impulse: 25.0,
            min_speed: 0.0,
            max_speed: 50.0,
            min_radius: 1.0,
            max_radius: 20.0,
            damping: 0.01,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_json_str(&source)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn bounds(&self) -> WorldBounds {
        WorldBounds::new(self.world_width, self.world_height)
    }

    pub fn pointer_field(&self) -> PointerField {
        PointerField::new(self.pointer_radius, self.pointer_impulse)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("gravity", self.gravity),
            ("pointer_radius", self.pointer_radius),
            ("pointer_impulse", self.pointer_impulse),
            ("min_speed", self.min_speed),
            ("max_speed", self.max_speed),
            ("min_radius", self.min_radius),
            ("max_radius", self.max_radius),
            ("damping", self.damping),
        ];
        if let Some(&(name, _)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite(name));
        }

        if self.world_width <= 0.0 || self.world_height <= 0.0 {
            return Err(ConfigError::NonPositiveExtent {
                width: self.world_width,
                height: self.world_height,
            });
        }
        if self.min_radius <= 0.0 || self.min_radius > self.max_radius {
            return Err(ConfigError::InvalidRadiusRange {
                min: self.min_radius,
                max: self.max_radius,
            });
        }
        if self.min_speed < 0.0 || self.min_speed > self.max_speed {
            return Err(ConfigError::InvalidSpeedRange {
                min: self.min_speed,
                max: self.max_speed,
            });
        }
        if !(0.0..1.0).contains(&self.damping) {
            return Err(ConfigError::InvalidDamping(self.damping));
        }
        if self.pointer_radius < 0.0 {
            return Err(ConfigError::NegativePointerRadius(self.pointer_radius));
        }
        self.check_fits(self.max_radius)
    }

    /// A body of `radius` needs room to sit between opposite walls
    pub(crate) fn check_fits(&self, radius: f32) -> Result<(), ConfigError> {
        if 2.0 * radius > self.world_width || 2.0 * radius > self.world_height {
            return Err(ConfigError::WorldTooSmall {
                width: self.world_width,
                height: self.world_height,
                radius,
            });
        }
        Ok(())
    }
}
