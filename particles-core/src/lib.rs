pub mod analyzer;
pub mod boundary;
pub mod collision;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod generator;
pub mod integrator;
pub mod pointer;
pub mod runtime;

pub use analyzer::analyze_config;
pub use collision::{detect_contact, resolve_all, resolve_contact, Contact};
pub use config::{ConfigError, SimConfig};
pub use diagnostics::{Diagnostic, DiagnosticSeverity, Diagnostics};
pub use engine::{Particle, ParticleError, PointerState, WorldBounds};
pub use generator::generate_particles;
pub use integrator::integrate;
pub use pointer::PointerField;
pub use runtime::{build_simulation, measure, ParticleState, Simulation, SimulationStats};
