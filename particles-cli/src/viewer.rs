//! Interactive window for the particle simulation
//!
//! The window is the presentation layer: it owns pacing and input, feeds the
//! pointer into `Simulation::step`, and draws the returned positions. The
//! configuration file, if any, is watched and the simulation rebuilt when it
//! changes.

use crate::load_config;
use anyhow::Result;
use eframe::egui;
use glam::Vec2;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use particles_core::{build_simulation, PointerState, Simulation};
use std::path::PathBuf;
use std::sync::mpsc;

const CONTROLS_HEIGHT: f32 = 32.0;
/// Never run more than this many ticks in one frame, even after a stall
const MAX_TICKS_PER_FRAME: u32 = 8;

pub fn run(config_path: Option<PathBuf>, seed: Option<u64>) -> Result<()> {
    let config = load_config(config_path.as_deref(), seed)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("particles")
            .with_inner_size([config.world_width, config.world_height + CONTROLS_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "particles",
        options,
        Box::new(move |_cc| Ok(Box::new(ViewerApp::new(config_path, seed)))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {}", e))
}

/// Maps world coordinates onto the canvas, preserving aspect ratio
struct WorldView {
    origin: egui::Pos2,
    scale: f32,
    rect: egui::Rect,
}

impl WorldView {
    fn fit(canvas: egui::Rect, width: f32, height: f32) -> Self {
        let scale = (canvas.width() / width).min(canvas.height() / height);
        let size = egui::vec2(width * scale, height * scale);
        let origin = canvas.center() - size / 2.0;
        Self {
            origin,
            scale,
            rect: egui::Rect::from_min_size(origin, size),
        }
    }

    fn to_screen(&self, pos: Vec2) -> egui::Pos2 {
        self.origin + egui::vec2(pos.x * self.scale, pos.y * self.scale)
    }

    fn to_world(&self, pos: egui::Pos2) -> Option<Vec2> {
        if !self.rect.contains(pos) {
            return None;
        }
        let local = (pos - self.origin) / self.scale;
        Some(Vec2::new(local.x, local.y))
    }
}

pub struct ViewerApp {
    config_path: Option<PathBuf>,
    seed: Option<u64>,
    sim: Option<Simulation>,
    last_load_error: Option<String>,
    warnings: Vec<String>,
    playing: bool,
    tick_rate: f32,
    tick_accumulator: f32,
    /// Trigger pressed but not yet consumed by a tick
    pending_trigger: bool,
    #[allow(dead_code)] // Kept alive to maintain file watching
    file_watcher: Option<RecommendedWatcher>,
    file_receiver: mpsc::Receiver<notify::Result<Event>>,
}

impl ViewerApp {
    pub fn new(config_path: Option<PathBuf>, seed: Option<u64>) -> Self {
        let config_path = config_path.map(|p| p.canonicalize().unwrap_or(p));

        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = tx.send(res);
        })
        .ok();

        // Editors often replace the file, so watch its directory
        if let (Some(w), Some(dir)) = (
            watcher.as_mut(),
            config_path.as_ref().and_then(|p| p.parent()),
        ) {
            if let Err(e) = w.watch(dir, RecursiveMode::NonRecursive) {
                tracing::warn!("config hot reload disabled: {}", e);
            }
        }

        let mut app = Self {
            config_path,
            seed,
            sim: None,
            last_load_error: None,
            warnings: Vec::new(),
            playing: true,
            tick_rate: 60.0,
            tick_accumulator: 0.0,
            pending_trigger: false,
            file_watcher: watcher,
            file_receiver: rx,
        };

        app.reload();
        app
    }

    fn reload(&mut self) {
        let built = load_config(self.config_path.as_deref(), self.seed)
            .and_then(|config| build_simulation(config).map_err(Into::into));

        match built {
            Ok((sim, diagnostics)) => {
                tracing::info!(particles = sim.particles().len(), "simulation loaded");
                self.warnings = diagnostics.iter().map(|d| d.to_string()).collect();
                self.sim = Some(sim);
                self.last_load_error = None;
            }
            Err(e) => {
                tracing::error!("failed to load simulation: {:#}", e);
                self.last_load_error = Some(format!("{:#}", e));
                self.sim = None;
            }
        }
        self.tick_accumulator = 0.0;
        self.pending_trigger = false;
    }

    fn check_file_changes(&mut self) {
        let Some(path) = self.config_path.clone() else {
            return;
        };

        let mut changed = false;
        while let Ok(event) = self.file_receiver.try_recv() {
            match event {
                Ok(Event { kind, paths, .. })
                    if matches!(kind, EventKind::Modify(_) | EventKind::Create(_)) =>
                {
                    if paths.iter().any(|p| p.file_name() == path.file_name()) {
                        changed = true;
                    }
                }
                Ok(_) => {}
                Err(e) => tracing::warn!("file watcher error: {}", e),
            }
        }

        if changed {
            tracing::info!("config changed, reloading {}", path.display());
            self.reload();
        }
    }

    fn advance(&mut self, pointer: Option<Vec2>, dt: f32) {
        let Some(sim) = self.sim.as_mut() else {
            return;
        };

        self.tick_accumulator += dt * self.tick_rate;
        let ticks = (self.tick_accumulator.floor() as u32).min(MAX_TICKS_PER_FRAME);
        self.tick_accumulator = (self.tick_accumulator - ticks as f32).min(1.0);

        for _ in 0..ticks {
            let state = pointer.map(|pos| PointerState {
                pos,
                triggered: std::mem::take(&mut self.pending_trigger),
            });
            sim.step(state.as_ref());
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_file_changes();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(if self.playing { "⏸ Pause" } else { "▶ Play" }).clicked() {
                    self.playing = !self.playing;
                }

                if ui.button("⏮ Reset").clicked() {
                    self.reload();
                }

                if ui.button("⏭ Step").clicked() {
                    if let Some(ref mut sim) = self.sim {
                        sim.step(None);
                    }
                }

                ui.separator();

                ui.label("Ticks/s:");
                ui.add(egui::Slider::new(&mut self.tick_rate, 1.0..=240.0));

                ui.separator();

                if let Some(ref sim) = self.sim {
                    let stats = sim.stats();
                    ui.label(format!(
                        "Tick: {}  Energy: {:.1}  Max speed: {:.1}",
                        stats.tick, stats.kinetic_energy, stats.max_speed
                    ));
                }
            });
        });

        if self.last_load_error.is_some() || !self.warnings.is_empty() {
            egui::TopBottomPanel::bottom("errors").show(ctx, |ui| {
                ui.set_max_height(100.0);
                if let Some(ref error) = self.last_load_error {
                    ui.label(
                        egui::RichText::new(format!("Error: {}", error))
                            .color(egui::Color32::RED),
                    );
                }
                for warning in &self.warnings {
                    ui.label(egui::RichText::new(warning).color(egui::Color32::YELLOW));
                }
            });
        }

        let mut pointer_world = None;
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let Some(ref sim) = self.sim else {
                    return;
                };

                let bounds = sim.bounds();
                let view = WorldView::fit(ui.max_rect(), bounds.width, bounds.height);
                let painter = ui.painter();

                painter.rect_stroke(
                    view.rect,
                    0.0,
                    egui::Stroke::new(1.0, egui::Color32::DARK_GRAY),
                );

                let (hover, pressed) =
                    ctx.input(|i| (i.pointer.hover_pos(), i.pointer.primary_pressed()));
                pointer_world = hover.and_then(|pos| view.to_world(pos));

                if let Some(pos) = pointer_world {
                    if pressed {
                        self.pending_trigger = true;
                    }
                    painter.circle_stroke(
                        view.to_screen(pos),
                        sim.pointer_field().radius * view.scale,
                        egui::Stroke::new(3.0, egui::Color32::RED),
                    );
                }

                for particle in sim.particle_states() {
                    painter.circle_filled(
                        view.to_screen(particle.pos),
                        particle.radius * view.scale,
                        egui::Color32::BLUE,
                    );
                }
            });

        if self.playing {
            let dt = ctx.input(|i| i.stable_dt);
            self.advance(pointer_world, dt);
            ctx.request_repaint();
        }
    }
}
