use eframe::egui::{Frame, ProgressBar, RichText, Ui};

use super::DashboardApp;
use super::style;
use crate::analysis::WorkforceMetric;
use crate::egui_app::view_model;

impl DashboardApp {
    /// Render one card per workforce metric with a current-vs-target bar.
    pub(super) fn render_metrics_panel(&mut self, ui: &mut Ui, metrics: &[WorkforceMetric]) {
        if metrics.is_empty() {
            return;
        }
        let palette = style::palette();
        ui.label(
            RichText::new("Workforce Metrics")
                .strong()
                .color(palette.text_primary),
        );
        ui.add_space(6.0);
        ui.horizontal_wrapped(|ui| {
            for metric in metrics {
                Frame::new()
                    .fill(palette.bg_panel)
                    .stroke(style::card_outline())
                    .corner_radius(8)
                    .inner_margin(12)
                    .show(ui, |ui| {
                        ui.set_width(220.0);
                        ui.label(RichText::new(&metric.category).color(palette.text_muted));
                        ui.add_space(4.0);
                        let progress = view_model::metric_progress(metric);
                        ui.add(
                            ProgressBar::new(progress)
                                .desired_height(8.0)
                                .fill(palette.accent),
                        );
                        ui.add_space(4.0);
                        ui.label(
                            RichText::new(view_model::metric_progress_text(metric))
                                .strong()
                                .color(palette.text_primary),
                        );
                    });
                ui.add_space(8.0);
            }
        });
    }
}
