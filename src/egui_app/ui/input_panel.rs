use eframe::egui::{self, Frame, RichText, Ui};

use super::DashboardApp;
use super::style;

impl DashboardApp {
    /// Render the document input card: text area, sample loader, analyze
    /// button, and any failure banner.
    pub(super) fn render_input_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        Frame::new()
            .fill(palette.bg_panel)
            .stroke(style::card_outline())
            .corner_radius(8)
            .inner_margin(14)
            .show(ui, |ui| {
                ui.label(
                    RichText::new("Strategy Document")
                        .strong()
                        .color(palette.text_primary),
                );
                ui.label(
                    RichText::new(
                        "Paste an HR strategy document, meeting notes, or workforce data below.",
                    )
                    .color(palette.text_muted),
                );
                ui.add_space(8.0);

                let analyzing = self.controller.ui.input.analyzing;
                ui.add_enabled(
                    !analyzing,
                    egui::TextEdit::multiline(&mut self.controller.ui.input.document)
                        .hint_text("e.g. \"Our 2025 strategy focuses on digital transformation…\"")
                        .desired_width(f32::INFINITY)
                        .desired_rows(8),
                );
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    let has_text = !self.controller.ui.input.document.trim().is_empty();
                    if ui
                        .add_enabled(
                            !analyzing && has_text,
                            egui::Button::new(
                                RichText::new("Generate Strategic Infographic").strong(),
                            ),
                        )
                        .clicked()
                    {
                        self.controller.submit_analysis();
                    }
                    if ui
                        .add_enabled(!analyzing, egui::Button::new("Load Sample Strategy"))
                        .clicked()
                    {
                        self.controller.load_sample_document();
                    }
                    if analyzing {
                        ui.add_space(8.0);
                        ui.spinner();
                        ui.label(
                            RichText::new("Analyzing document…").color(palette.text_muted),
                        );
                    }
                });

                if let Some(error) = self.controller.ui.analysis_error.clone() {
                    ui.add_space(8.0);
                    ui.label(RichText::new(error).color(palette.danger));
                }
                if self.controller.ui.restored_session {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("Showing a restored session from your last visit.")
                            .color(palette.text_muted),
                    );
                }
            });
    }
}
