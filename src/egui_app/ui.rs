//! egui renderer for the analyzer window.

mod analyzer_panel;
mod chrome;
mod results_panel;
mod strings;
pub mod style;

use std::time::Duration;

use crate::egui_app::controller::EguiController;
use eframe::egui::{self, Frame, Margin};

/// Smallest window size that keeps the analyzer card and results readable.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(640.0, 480.0);

/// Poll interval for background results while a request is in flight.
const LOADING_REPAINT: Duration = Duration::from_millis(100);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app, loading persisted configuration.
    pub fn new() -> Result<Self, String> {
        let controller =
            EguiController::load().map_err(|err| format!("Failed to load config: {err}"))?;
        Ok(Self::with_controller(controller))
    }

    pub fn with_controller(controller: EguiController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped_files = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped_files.is_empty() {
            return;
        }
        let paths: Vec<_> = dropped_files.into_iter().filter_map(|file| file.path).collect();
        if paths.is_empty() {
            return;
        }
        if self.controller.analysis_in_progress() {
            self.controller.set_status(
                "Wait for the current analysis to finish",
                style::StatusTone::Warning,
            );
            return;
        }
        self.controller.handle_dropped_files(paths);
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();
        self.handle_dropped_files(ctx);

        self.render_top_bar(ctx);
        self.render_status(ctx);
        let palette = style::palette();
        egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .inner_margin(Margin::same(12)),
            )
            .show(ctx, |ui| {
                self.render_analyzer_card(ui);
                ui.add_space(12.0);
                self.render_results(ui);
            });

        if self.controller.analysis_in_progress() {
            ctx.request_repaint_after(LOADING_REPAINT);
        }
    }
}
