#![deny(missing_docs)]

//! Entry point for the egui-based sentiment analyzer.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use tonality::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use tonality::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    match logging::init() {
        Ok(path) => tracing::info!("Logging to {}", path.display()),
        Err(err) => eprintln!("Logging disabled: {err}"),
    }

    let viewport = egui::ViewportBuilder::default()
        .with_title("Tonality")
        .with_inner_size([900.0, 680.0])
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_drag_and_drop(true);

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Tonality",
        native_options,
        Box::new(|_cc| match EguiApp::new() {
            Ok(app) => Ok(Box::new(app)),
            Err(err) => {
                tracing::error!("{err}");
                Ok(Box::new(LaunchError { message: err }))
            }
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
