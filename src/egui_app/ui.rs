//! egui renderer for the dashboard UI.

mod enroll_modal;
mod gap_panel;
mod input_panel;
mod insights_panel;
mod metrics_panel;
mod roadmap_panel;
pub mod style;

use std::time::{Duration, Instant};

use eframe::egui::{self, Frame, RichText, Vec2};

use crate::analysis::AnalysisGateway;
use crate::egui_app::controller::DashboardController;
use crate::session::SessionStore;

/// Smallest window that still fits the roadmap cards.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(960.0, 620.0);

/// Poll interval while a background analysis is in flight.
const ANALYSIS_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Renders the egui UI using the shared controller state.
pub struct DashboardApp {
    controller: DashboardController,
    visuals_set: bool,
}

impl DashboardApp {
    /// App with the default store and gateway, restoring any saved session.
    ///
    /// A store that cannot be opened disables persistence for this run
    /// instead of blocking startup.
    pub fn new() -> Self {
        let store = match SessionStore::open() {
            Ok(store) => Some(store),
            Err(err) => {
                tracing::warn!("Session persistence disabled: {err}");
                None
            }
        };
        let mut controller = DashboardController::new(store, AnalysisGateway::from_env());
        controller.restore_session(Instant::now());
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::light();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_panel)
                    .inner_margin(egui::Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("Workforce Strategy Dashboard")
                            .strong()
                            .color(palette.accent),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if self.controller.analysis().is_some() {
                            if ui.button("Start New Analysis").clicked() {
                                self.controller.clear_session();
                            }
                            if self.controller.persistence_enabled() {
                                ui.label(
                                    RichText::new("Auto-saved")
                                        .small()
                                        .color(palette.text_muted),
                                );
                            }
                        }
                    });
                });
            });
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(Frame::new().fill(palette.bg_panel))
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.painter().circle_filled(
                        ui.cursor().min + egui::vec2(6.0, 10.0),
                        5.0,
                        status.badge_color,
                    );
                    ui.add_space(10.0);
                    ui.label(RichText::new(&status.badge_label).color(palette.text_primary));
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_muted));
                });
            });
    }

    fn render_report(&mut self, ui: &mut egui::Ui) {
        let Some(report) = self.controller.analysis().cloned() else {
            return;
        };
        self.render_metrics_panel(ui, &report.metrics);
        ui.add_space(14.0);
        self.render_gap_panel(ui, &report.skill_gaps);
        ui.add_space(14.0);
        self.render_insights_panel(ui, &report.strategic_insights);
        ui.add_space(14.0);
        self.render_roadmap_panel(ui, &report.training_roadmap);
    }

    fn schedule_repaint(&self, ctx: &egui::Context, now: Instant) {
        if self.controller.ui.input.analyzing {
            ctx.request_repaint_after(ANALYSIS_POLL_INTERVAL);
            return;
        }
        if let Some(due) = self.controller.next_wakeup() {
            ctx.request_repaint_after(due.saturating_duration_since(now));
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();
        let now = Instant::now();
        self.controller.tick(now);

        self.render_top_bar(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("dashboard_scroll")
                .show(ui, |ui| {
                    ui.add_space(6.0);
                    self.render_input_panel(ui);
                    ui.add_space(14.0);
                    self.render_report(ui);
                    ui.add_space(10.0);
                });
        });
        self.render_enroll_modal(ctx, now);
        self.schedule_repaint(ctx, now);
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        style::palette().bg_primary.to_normalized_gamma_f32()
    }
}
