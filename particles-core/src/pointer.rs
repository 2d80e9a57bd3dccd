//! Pointer-driven repulsion and impulse field

use crate::engine::PointerState;
use glam::Vec2;

/// Parameters of the pointer field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerField {
    /// Influence radius around the pointer (inclusive)
    pub radius: f32,
    /// Downward kick applied on the tick the trigger fires
    pub impulse: f32,
}

impl PointerField {
    pub fn new(radius: f32, impulse: f32) -> Self {
        Self { radius, impulse }
    }

    /// Velocity change for a particle at `pos`.
    ///
    /// Inside the radius a triggered pointer adds `(0, impulse)`; otherwise the
    /// particle is nudged away along the unit vector from the pointer. A
    /// particle sitting exactly on the pointer has no direction and gets no
    /// nudge.
    pub fn velocity_change(&self, pos: Vec2, pointer: &PointerState) -> Vec2 {
        if pos.distance(pointer.pos) > self.radius {
            return Vec2::ZERO;
        }

        if pointer.triggered {
            Vec2::new(0.0, self.impulse)
        } else {
            (pos - pointer.pos).try_normalize().unwrap_or(Vec2::ZERO)
        }
    }
}
