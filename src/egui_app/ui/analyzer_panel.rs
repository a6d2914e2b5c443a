use super::EguiApp;
use super::strings::strings;
use super::style;
use crate::sentiment::AnalysisMode;
use eframe::egui::{self, Frame, Margin, RichText};

impl EguiApp {
    /// Input card: file picker or text box, plus the analyze trigger.
    pub(super) fn render_analyzer_card(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let text = strings(self.controller.ui.analyzer.language);
        Frame::new()
            .fill(style::card_fill())
            .stroke(style::section_stroke())
            .inner_margin(Margin::same(12))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                match self.controller.ui.analyzer.mode {
                    AnalysisMode::Lines => self.render_file_input(ui),
                    AnalysisMode::Text => self.render_text_input(ui),
                }
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    let loading = self.controller.ui.analyzer.loading;
                    let caption = if loading { text.analyzing } else { text.analyze };
                    if ui
                        .add_enabled(self.controller.can_analyze(), egui::Button::new(caption))
                        .clicked()
                    {
                        self.controller.analyze();
                    }
                    if loading {
                        ui.add(egui::Spinner::new());
                    }
                });
                if let Some(error) = self.controller.ui.analyzer.last_error.as_ref() {
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(error)
                            .color(style::status_badge_color(style::StatusTone::Error)),
                    );
                }
                ui.add_space(4.0);
                ui.label(
                    RichText::new(text.mode_note(self.controller.ui.analyzer.mode))
                    .small()
                    .color(palette.text_muted),
                );
            });
    }

    fn render_file_input(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let text = strings(self.controller.ui.analyzer.language);
        ui.horizontal(|ui| {
            let enabled = !self.controller.ui.analyzer.loading;
            if ui
                .add_enabled(enabled, egui::Button::new(text.choose_file))
                .on_hover_text(text.choose_file_hint)
                .clicked()
            {
                self.controller.pick_file_via_dialog();
            }
            match self.controller.ui.analyzer.selected_file_name() {
                Some(name) => {
                    ui.label(RichText::new(name).color(palette.text_primary));
                }
                None => {
                    ui.label(RichText::new(text.no_file).color(palette.text_muted));
                }
            }
        });
    }

    fn render_text_input(&mut self, ui: &mut egui::Ui) {
        let enabled = !self.controller.ui.analyzer.loading;
        let text = strings(self.controller.ui.analyzer.language);
        ui.add_enabled(
            enabled,
            egui::TextEdit::multiline(&mut self.controller.ui.analyzer.text)
                .hint_text(text.text_hint)
                .desired_rows(6)
                .desired_width(f32::INFINITY),
        );
    }
}
