//! Static checks on a validated configuration
//!
//! Flags setups that are legal but expensive or unlikely to settle, before
//! any particle is generated.

use crate::config::SimConfig;
use crate::diagnostics::{Diagnostic, Diagnostics};
use std::f32::consts::PI;

/// Populations above this make the exhaustive pair scan noticeably slow
pub const LARGE_POPULATION: usize = 2_000;

/// Fraction of the world area that generated bodies may cover before they
/// are expected to overlap permanently
pub const CROWDED_AREA_FRACTION: f32 = 0.5;

/// Analyze a configuration and return diagnostics
pub fn analyze_config(config: &SimConfig) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();

    if config.particle_count == 0 {
        diagnostics.push(Diagnostic::note("particle_count is 0; nothing will move"));
        return diagnostics;
    }

    if config.particle_count > LARGE_POPULATION {
        let pairs = config.particle_count * (config.particle_count - 1) / 2;
        diagnostics.push(Diagnostic::warning(format!(
            "{} particles means {} pair checks per tick",
            config.particle_count, pairs
        )));
    }

    // Worst case: every particle at the maximum radius
    let covered = config.particle_count as f32 * PI * config.max_radius * config.max_radius;
    let area = config.world_width * config.world_height;
    if covered > area * CROWDED_AREA_FRACTION {
        diagnostics.push(Diagnostic::warning(format!(
            "particles may cover up to {:.0}% of the world; expect persistent overlap",
            covered / area * 100.0
        )));
    }

    let smallest_extent = config.world_width.min(config.world_height);
    if config.max_speed > smallest_extent {
        diagnostics.push(Diagnostic::warning(format!(
            "max_speed {} exceeds the world extent {}; fast particles will hit a wall every tick",
            config.max_speed, smallest_extent
        )));
    }

    if config.gravity < 0.0 {
        diagnostics.push(Diagnostic::note("negative gravity pulls particles upwards"));
    }

    diagnostics
}
