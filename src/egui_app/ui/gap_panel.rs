use std::f32::consts::TAU;

use eframe::egui::{
    Align2, Color32, FontId, Frame, Grid, RichText, Sense, Shape, Stroke, Ui, Vec2, pos2,
};

use super::DashboardApp;
use super::style;
use crate::analysis::SkillGap;
use crate::egui_app::view_model;

const RADAR_SIZE: Vec2 = Vec2::new(380.0, 300.0);
const RADAR_RINGS: usize = 4;
/// Proficiency values are on a 0-100 scale.
const PROFICIENCY_MAX: f32 = 100.0;

impl DashboardApp {
    /// Render the skill gap section: radar of current vs required
    /// proficiency next to a per-skill breakdown table.
    pub(super) fn render_gap_panel(&mut self, ui: &mut Ui, gaps: &[SkillGap]) {
        if gaps.is_empty() {
            return;
        }
        let palette = style::palette();
        ui.label(
            RichText::new("Skill Gap Analysis")
                .strong()
                .color(palette.text_primary),
        );
        ui.add_space(6.0);
        Frame::new()
            .fill(palette.bg_panel)
            .stroke(style::card_outline())
            .corner_radius(8)
            .inner_margin(12)
            .show(ui, |ui| {
                ui.horizontal_top(|ui| {
                    render_radar(ui, gaps);
                    ui.add_space(12.0);
                    ui.vertical(|ui| render_gap_table(ui, gaps));
                });
            });
    }
}

fn render_radar(ui: &mut Ui, gaps: &[SkillGap]) {
    let palette = style::palette();
    let (rect, _) = ui.allocate_exact_size(RADAR_SIZE, Sense::hover());
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = (rect.width().min(rect.height()) * 0.5 - 34.0).max(10.0);

    for ring in 1..=RADAR_RINGS {
        painter.circle_stroke(
            center,
            radius * ring as f32 / RADAR_RINGS as f32,
            Stroke::new(1.0, palette.grid_soft),
        );
    }

    let axis_count = gaps.len();
    let angle_of = |index: usize| -TAU / 4.0 + TAU * index as f32 / axis_count as f32;
    let point_at = |index: usize, value: f64| {
        let fraction = (value as f32 / PROFICIENCY_MAX).clamp(0.0, 1.0);
        let angle = angle_of(index);
        pos2(
            center.x + angle.cos() * radius * fraction,
            center.y + angle.sin() * radius * fraction,
        )
    };

    for (index, gap) in gaps.iter().enumerate() {
        let angle = angle_of(index);
        let tip = pos2(
            center.x + angle.cos() * radius,
            center.y + angle.sin() * radius,
        );
        painter.line_segment([center, tip], Stroke::new(1.0, palette.grid_soft));
        let label_pos = pos2(
            center.x + angle.cos() * (radius + 18.0),
            center.y + angle.sin() * (radius + 18.0),
        );
        painter.text(
            label_pos,
            Align2::CENTER_CENTER,
            &gap.skill,
            FontId::proportional(10.5),
            palette.text_muted,
        );
    }

    // Degenerate polygons (fewer than three axes) still read as segments.
    let required: Vec<_> = gaps
        .iter()
        .enumerate()
        .map(|(index, gap)| point_at(index, gap.required_proficiency))
        .collect();
    let current: Vec<_> = gaps
        .iter()
        .enumerate()
        .map(|(index, gap)| point_at(index, gap.current_proficiency))
        .collect();
    painter.add(Shape::closed_line(
        required,
        Stroke::new(2.0, Color32::from_rgb(225, 29, 72)),
    ));
    painter.add(Shape::closed_line(current, Stroke::new(2.0, palette.accent)));
}

fn render_gap_table(ui: &mut Ui, gaps: &[SkillGap]) {
    let palette = style::palette();
    Grid::new("gap_table")
        .num_columns(5)
        .spacing([18.0, 6.0])
        .striped(true)
        .show(ui, |ui| {
            ui.label(RichText::new("Skill").strong().color(palette.text_muted));
            ui.label(RichText::new("Current").strong().color(palette.text_muted));
            ui.label(RichText::new("Required").strong().color(palette.text_muted));
            ui.label(RichText::new("Gap").strong().color(palette.text_muted));
            ui.label(RichText::new("Priority").strong().color(palette.text_muted));
            ui.end_row();

            for gap in gaps {
                ui.label(RichText::new(&gap.skill).color(palette.text_primary));
                ui.label(format!("{:.0}", gap.current_proficiency));
                ui.label(format!("{:.0}", gap.required_proficiency));
                ui.label(
                    RichText::new(format!("{:.0}", view_model::gap_deficit(gap)))
                        .color(palette.text_primary),
                );
                ui.horizontal(|ui| {
                    let color = style::priority_color(gap.priority);
                    let (rect, _) =
                        ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
                    ui.painter().circle_filled(rect.center(), 4.0, color);
                    ui.label(RichText::new(style::priority_label(gap.priority)).color(color));
                });
                ui.end_row();
            }
        });
}
