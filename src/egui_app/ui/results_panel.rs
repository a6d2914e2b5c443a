use super::EguiApp;
use super::strings::{UiStrings, strings};
use super::style;
use crate::egui_app::view_model::{self, ResultRowView, SingleResultView, StatCardView};
use eframe::egui::{self, Frame, Margin, RichText};

impl EguiApp {
    pub(super) fn render_results(&mut self, ui: &mut egui::Ui) {
        let language = self.controller.ui.analyzer.language;
        let text = strings(language);
        let results = &self.controller.ui.results;
        if let Some(single) = results.single.as_ref() {
            render_single(ui, single, text);
            return;
        }
        if let Some(stats) = results.stats.as_ref() {
            render_stats(ui, &view_model::stat_cards(stats, language));
            ui.add_space(12.0);
            if results.rows.is_empty() {
                ui.label(RichText::new(text.no_results).color(style::palette().text_muted));
                return;
            }
            render_rows(ui, &results.rows, text);
        }
    }
}

fn render_single(ui: &mut egui::Ui, single: &SingleResultView, text: &UiStrings) {
    let palette = style::palette();
    Frame::new()
        .fill(style::card_fill())
        .stroke(style::section_stroke())
        .inner_margin(Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let color = style::sentiment_color(single.tone);
                ui.label(RichText::new(single.glyph).size(28.0).color(color));
                ui.vertical(|ui| {
                    ui.label(RichText::new(single.label).heading().color(color));
                    ui.label(
                        RichText::new(format!("{} {}", text.column_confidence, single.confidence))
                            .color(palette.text_muted),
                    );
                });
            });
        });
}

fn render_stats(ui: &mut egui::Ui, cards: &[StatCardView]) {
    ui.columns(cards.len(), |columns| {
        for (column, card) in columns.iter_mut().zip(cards) {
            stat_card(column, card);
        }
    });
}

fn stat_card(ui: &mut egui::Ui, card: &StatCardView) {
    let palette = style::palette();
    let color = card
        .tone
        .map(style::sentiment_color)
        .unwrap_or(palette.text_primary);
    Frame::new()
        .fill(style::card_fill())
        .stroke(style::section_stroke())
        .inner_margin(Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(card.value.to_string()).heading().color(color));
                if let Some(share) = card.share.as_ref() {
                    ui.label(RichText::new(share).color(palette.text_muted));
                }
            });
            ui.label(RichText::new(card.caption).small().color(palette.text_muted));
        });
}

fn render_rows(ui: &mut egui::Ui, rows: &[ResultRowView], text: &UiStrings) {
    let palette = style::palette();
    egui::ScrollArea::vertical()
        .id_salt("results_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("results_grid")
                .num_columns(4)
                .striped(true)
                .spacing(egui::vec2(16.0, 6.0))
                .show(ui, |ui| {
                    ui.label(RichText::new("#").color(palette.text_muted));
                    ui.label(RichText::new(text.column_line).color(palette.text_muted));
                    ui.label(RichText::new(text.column_sentiment).color(palette.text_muted));
                    ui.label(RichText::new(text.column_confidence).color(palette.text_muted));
                    ui.end_row();
                    for row in rows {
                        let color = style::sentiment_color(row.tone);
                        ui.label(RichText::new(row.number.to_string()).color(palette.text_muted));
                        ui.add(egui::Label::new(&row.line).wrap());
                        ui.label(RichText::new(format!("{} {}", row.glyph, row.label)).color(color));
                        ui.label(&row.confidence);
                        ui.end_row();
                    }
                });
        });
}
