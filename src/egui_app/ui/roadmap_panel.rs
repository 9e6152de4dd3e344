use eframe::egui::{self, Frame, Grid, RichText, Stroke, Ui};

use super::DashboardApp;
use super::style;
use crate::analysis::TrainingProgram;
use crate::egui_app::view_model::{self, EnrollAffordance};

impl DashboardApp {
    /// Render one card per roadmap program with its enroll affordance.
    pub(super) fn render_roadmap_panel(&mut self, ui: &mut Ui, programs: &[TrainingProgram]) {
        if programs.is_empty() {
            return;
        }
        let palette = style::palette();
        ui.label(
            RichText::new("Training Roadmap")
                .strong()
                .color(palette.text_primary),
        );
        ui.add_space(6.0);
        for program in programs {
            self.render_program_card(ui, program);
            ui.add_space(8.0);
        }
    }

    fn render_program_card(&mut self, ui: &mut Ui, program: &TrainingProgram) {
        let palette = style::palette();
        let mut enroll_clicked = false;
        Frame::new()
            .fill(palette.bg_panel)
            .stroke(style::card_outline())
            .corner_radius(8)
            .inner_margin(14)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(&program.title)
                            .strong()
                            .color(palette.text_primary),
                    );
                    let approval_color = style::approval_color(program.manager_approval_status);
                    Frame::new()
                        .stroke(Stroke::new(1.0, approval_color))
                        .corner_radius(10)
                        .inner_margin(egui::Margin::symmetric(6, 2))
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(style::approval_label(
                                    program.manager_approval_status,
                                ))
                                .small()
                                .color(approval_color),
                            );
                        });
                });
                ui.label(RichText::new(&program.objective).color(palette.text_muted));
                ui.add_space(8.0);

                Grid::new(("program_facts", &program.title))
                    .num_columns(4)
                    .spacing([24.0, 4.0])
                    .show(ui, |ui| {
                        fact(ui, "Duration", &program.duration);
                        fact(ui, "Audience", &program.audience);
                        ui.end_row();
                        fact(ui, "Team size", &program.team_size);
                        fact(ui, "Delivery", &program.delivery_method);
                        ui.end_row();
                    });
                ui.add_space(6.0);

                if !program.skills_covered.is_empty() {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(RichText::new("Skills covered:").color(palette.text_muted));
                        for skill in &program.skills_covered {
                            Frame::new()
                                .fill(palette.accent_soft)
                                .corner_radius(10)
                                .inner_margin(egui::Margin::symmetric(6, 2))
                                .show(ui, |ui| {
                                    ui.label(RichText::new(skill).small().color(palette.accent));
                                });
                        }
                    });
                    ui.add_space(6.0);
                }

                if !program.modules.is_empty() {
                    ui.collapsing(
                        RichText::new(format!("Modules ({})", program.modules.len())),
                        |ui| {
                            for module in &program.modules {
                                ui.horizontal_wrapped(|ui| {
                                    ui.label(
                                        RichText::new(&module.name)
                                            .strong()
                                            .color(palette.text_primary),
                                    );
                                    ui.label(
                                        RichText::new(&module.detail).color(palette.text_muted),
                                    );
                                });
                            }
                        },
                    );
                }
                if !program.prerequisites.is_empty() {
                    ui.collapsing(
                        RichText::new(format!("Prerequisites ({})", program.prerequisites.len())),
                        |ui| {
                            for prerequisite in &program.prerequisites {
                                ui.horizontal_wrapped(|ui| {
                                    ui.label(
                                        RichText::new(&prerequisite.name)
                                            .strong()
                                            .color(palette.text_primary),
                                    );
                                    ui.label(
                                        RichText::new(&prerequisite.detail)
                                            .color(palette.text_muted),
                                    );
                                });
                            }
                        },
                    );
                }

                ui.add_space(6.0);
                ui.label(
                    RichText::new(format!("Expected outcome: {}", program.expected_outcome))
                        .color(palette.text_muted),
                );
                ui.add_space(8.0);

                let record = self.controller.enrollment(&program.title);
                let affordance =
                    view_model::enroll_affordance(program.manager_approval_status, record);
                ui.horizontal(|ui| {
                    match affordance {
                        EnrollAffordance::Available => {
                            if ui
                                .button(RichText::new(affordance.label()).color(palette.accent))
                                .clicked()
                            {
                                enroll_clicked = true;
                            }
                        }
                        EnrollAffordance::Locked => {
                            ui.add_enabled(false, egui::Button::new(affordance.label()));
                        }
                        EnrollAffordance::Processing => {
                            ui.spinner();
                            ui.label(
                                RichText::new(affordance.label()).color(palette.text_muted),
                            );
                        }
                        EnrollAffordance::Confirmed => {
                            ui.label(
                                RichText::new(affordance.label())
                                    .strong()
                                    .color(palette.success),
                            );
                        }
                    }
                    if let Some(record) = record {
                        ui.add_space(8.0);
                        ui.label(
                            RichText::new(format!("{} · {}", record.id, record.timestamp))
                                .small()
                                .color(palette.text_muted),
                        );
                    }
                });
            });
        if enroll_clicked {
            self.controller.request_enroll(&program.title);
        }
    }
}

fn fact(ui: &mut Ui, label: &str, value: &str) {
    let palette = style::palette();
    ui.label(RichText::new(label).color(palette.text_muted));
    ui.label(RichText::new(value).color(palette.text_primary));
}
