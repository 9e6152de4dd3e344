use eframe::egui::{Frame, RichText, Sense, Stroke, Ui, Vec2};

use super::DashboardApp;
use super::style;
use crate::analysis::StrategicInsight;

impl DashboardApp {
    /// Render strategic insights as cards with an impact badge.
    pub(super) fn render_insights_panel(&mut self, ui: &mut Ui, insights: &[StrategicInsight]) {
        if insights.is_empty() {
            return;
        }
        let palette = style::palette();
        ui.label(
            RichText::new("Strategic Insights")
                .strong()
                .color(palette.text_primary),
        );
        ui.add_space(6.0);
        for insight in insights {
            let impact_color = style::impact_color(insight.impact);
            Frame::new()
                .fill(palette.bg_panel)
                .stroke(style::card_outline())
                .corner_radius(8)
                .inner_margin(12)
                .show(ui, |ui| {
                    ui.horizontal_top(|ui| {
                        // Impact accent bar down the left edge of the card.
                        let (bar, _) =
                            ui.allocate_exact_size(Vec2::new(4.0, 40.0), Sense::hover());
                        ui.painter().rect_filled(bar, 2.0, impact_color);
                        ui.add_space(8.0);
                        ui.vertical(|ui| {
                            ui.horizontal(|ui| {
                                ui.label(
                                    RichText::new(&insight.title)
                                        .strong()
                                        .color(palette.text_primary),
                                );
                                Frame::new()
                                    .stroke(Stroke::new(1.0, impact_color))
                                    .corner_radius(10)
                                    .inner_margin(eframe::egui::Margin::symmetric(6, 2))
                                    .show(ui, |ui| {
                                        ui.label(
                                            RichText::new(style::impact_label(insight.impact))
                                                .small()
                                                .color(impact_color),
                                        );
                                    });
                            });
                            ui.label(
                                RichText::new(&insight.description).color(palette.text_muted),
                            );
                        });
                    });
                });
            ui.add_space(6.0);
        }
    }
}
