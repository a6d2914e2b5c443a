use super::EguiApp;
use super::strings::strings;
use super::style;
use crate::sentiment::{AnalysisMode, Language};
use eframe::egui::{self, Frame, Margin, RichText, StrokeKind};

impl EguiApp {
    pub(super) fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::symmetric(8, 6)),
            )
            .show(ctx, |ui| {
                let text = strings(self.controller.ui.analyzer.language);
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(text.title)
                            .strong()
                            .color(palette.text_primary),
                    );
                    ui.separator();
                    let current = self.controller.ui.analyzer.mode;
                    let loading = self.controller.ui.analyzer.loading;
                    ui.add_enabled_ui(!loading, |ui| {
                        for mode in [AnalysisMode::Lines, AnalysisMode::Text] {
                            if ui
                                .selectable_label(current == mode, text.mode(mode))
                                .clicked()
                            {
                                self.controller.set_mode(mode);
                            }
                        }
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let mut language = self.controller.ui.analyzer.language;
                        egui::ComboBox::from_id_salt("language_combo")
                            .selected_text(language_caption(language))
                            .show_ui(ui, |ui| {
                                for option in Language::ALL {
                                    ui.selectable_value(
                                        &mut language,
                                        option,
                                        language_caption(option),
                                    );
                                }
                            });
                        if language != self.controller.ui.analyzer.language {
                            self.controller.set_language(language);
                        }
                        ui.label(RichText::new(text.language).color(palette.text_muted));
                    });
                });
            });
    }

    pub(super) fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = self.controller.ui.status.clone();
                let text = strings(self.controller.ui.analyzer.language);
                ui.horizontal(|ui| {
                    ui.add_space(6.0);
                    let (badge_rect, _) =
                        ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
                    ui.painter().rect_filled(badge_rect, 0.0, status.badge_color);
                    ui.painter().rect_stroke(
                        badge_rect,
                        0.0,
                        style::inner_border(),
                        StrokeKind::Inside,
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new(&status.badge_label).color(palette.text_primary));
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_primary));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button(text.open_logs).clicked() {
                            self.controller.open_logs_folder();
                        }
                    });
                });
            });
    }
}

fn language_caption(language: Language) -> &'static str {
    match language {
        Language::En => "English",
        Language::Ru => "Русский",
    }
}
