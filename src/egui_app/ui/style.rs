use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

use crate::analysis::{ApprovalStatus, GapPriority, InsightImpact};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_panel: Color32,
    pub bg_inset: Color32,
    pub panel_outline: Color32,
    pub grid_soft: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub accent_soft: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub danger: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(248, 250, 252),
        bg_panel: Color32::from_rgb(255, 255, 255),
        bg_inset: Color32::from_rgb(241, 245, 249),
        panel_outline: Color32::from_rgb(226, 232, 240),
        grid_soft: Color32::from_rgb(203, 213, 225),
        text_primary: Color32::from_rgb(15, 23, 42),
        text_muted: Color32::from_rgb(100, 116, 139),
        accent: Color32::from_rgb(79, 70, 229),
        accent_soft: Color32::from_rgb(224, 231, 255),
        success: Color32::from_rgb(22, 163, 74),
        warning: Color32::from_rgb(217, 119, 6),
        danger: Color32::from_rgb(220, 38, 38),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_panel;
    visuals.panel_fill = palette.bg_primary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent;
    visuals.extreme_bg_color = palette.bg_panel;
    visuals.faint_bg_color = palette.bg_inset;
    visuals.error_fg_color = palette.danger;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = palette.accent_soft;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.widgets.noninteractive.bg_fill = palette.bg_panel;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_card_style(&mut visuals.widgets.inactive, palette);
    set_card_style(&mut visuals.widgets.hovered, palette);
    set_card_style(&mut visuals.widgets.active, palette);
    set_card_style(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::same(8);
    visuals.menu_corner_radius = CornerRadius::same(8);
    visuals.popup_shadow = Shadow::NONE;
    visuals.button_frame = true;
}

fn set_card_style(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(6);
    vis.bg_fill = palette.bg_inset;
    vis.weak_bg_fill = palette.bg_inset;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

pub fn card_outline() -> Stroke {
    Stroke::new(1.0, palette().panel_outline)
}

pub fn priority_color(priority: GapPriority) -> Color32 {
    match priority {
        GapPriority::High => Color32::from_rgb(239, 68, 68),
        GapPriority::Medium => Color32::from_rgb(245, 158, 11),
        GapPriority::Low => Color32::from_rgb(16, 185, 129),
    }
}

pub fn impact_color(impact: InsightImpact) -> Color32 {
    match impact {
        InsightImpact::Critical => Color32::from_rgb(225, 29, 72),
        InsightImpact::Moderate => Color32::from_rgb(217, 119, 6),
        InsightImpact::Low => Color32::from_rgb(2, 132, 199),
    }
}

pub fn approval_color(status: ApprovalStatus) -> Color32 {
    match status {
        ApprovalStatus::Approved => Color32::from_rgb(22, 163, 74),
        ApprovalStatus::Pending => Color32::from_rgb(217, 119, 6),
        ApprovalStatus::Rejected => Color32::from_rgb(220, 38, 38),
    }
}

pub fn approval_label(status: ApprovalStatus) -> &'static str {
    match status {
        ApprovalStatus::Approved => "Approved",
        ApprovalStatus::Pending => "Pending Approval",
        ApprovalStatus::Rejected => "Rejected",
    }
}

pub fn impact_label(impact: InsightImpact) -> &'static str {
    match impact {
        InsightImpact::Critical => "Critical",
        InsightImpact::Moderate => "Moderate",
        InsightImpact::Low => "Low",
    }
}

pub fn priority_label(priority: GapPriority) -> &'static str {
    match priority {
        GapPriority::High => "High",
        GapPriority::Medium => "Medium",
        GapPriority::Low => "Low",
    }
}
