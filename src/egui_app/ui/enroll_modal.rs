use std::time::Instant;

use eframe::egui::{self, Align2, Color32, Id, LayerId, Order, RichText};

use super::DashboardApp;
use super::style;
use crate::enrollment::ConfirmationFlow;

impl DashboardApp {
    /// Render the modal enrollment confirmation dialog.
    pub(super) fn render_enroll_modal(&mut self, ctx: &egui::Context, now: Instant) {
        if !self.controller.confirmation().is_open() {
            return;
        }

        self.render_modal_backdrop(ctx);

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            // Ignored once synchronization has started.
            self.controller.cancel_enroll();
            if !self.controller.confirmation().is_open() {
                return;
            }
        }

        let flow = self.controller.confirmation().clone();
        let mut open = true;
        let mut confirm_clicked = false;
        let mut cancel_clicked = false;
        egui::Window::new("Confirm Enrollment")
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .order(Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .default_width(420.0)
            .open(&mut open)
            .show(ctx, |ui| {
                let palette = style::palette();
                ui.set_min_width(420.0);
                match &flow {
                    ConfirmationFlow::Idle => {}
                    ConfirmationFlow::Armed { title } => {
                        ui.label(
                            RichText::new(format!("Enroll your team in \"{title}\"?"))
                                .color(palette.text_primary),
                        );
                        if let Some(program) =
                            self.controller.analysis().and_then(|a| a.program(title))
                        {
                            ui.add_space(6.0);
                            ui.label(
                                RichText::new(format!(
                                    "{} · {} · team size {}",
                                    program.duration, program.delivery_method, program.team_size
                                ))
                                .color(palette.text_muted),
                            );
                        }
                        ui.add_space(12.0);
                        ui.horizontal(|ui| {
                            if ui.button("Cancel").clicked() {
                                cancel_clicked = true;
                            }
                            if ui
                                .button(RichText::new("Confirm Enrollment").strong())
                                .clicked()
                            {
                                confirm_clicked = true;
                            }
                        });
                    }
                    ConfirmationFlow::Confirming { .. } => {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label(
                                RichText::new("Synchronizing with HR systems…")
                                    .color(palette.text_muted),
                            );
                        });
                    }
                    ConfirmationFlow::Success { title, .. } => {
                        ui.label(
                            RichText::new("Enrollment Confirmed")
                                .strong()
                                .color(palette.success),
                        );
                        ui.label(
                            RichText::new(format!("Your team is enrolled in \"{title}\"."))
                                .color(palette.text_muted),
                        );
                    }
                }
            });

        // The close button and Cancel only apply while armed.
        if !open || cancel_clicked {
            self.controller.cancel_enroll();
        }
        if confirm_clicked {
            self.controller.confirm_enroll(now);
        }
    }

    fn render_modal_backdrop(&mut self, ctx: &egui::Context) {
        let rect = ctx.viewport_rect();
        let painter =
            ctx.layer_painter(LayerId::new(Order::Middle, Id::new("enroll_modal_backdrop")));
        painter.rect_filled(rect, 0.0, Color32::from_rgba_premultiplied(0, 0, 0, 100));

        egui::Area::new(Id::new("enroll_modal_blocker"))
            .order(Order::Middle)
            .fixed_pos(rect.min)
            .show(ctx, |ui| {
                ui.allocate_rect(rect, egui::Sense::click_and_drag());
            });
    }
}
