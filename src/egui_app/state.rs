//! Shared state types for the egui UI.

use egui::Color32;

use crate::egui_app::controller::{StatusTone, status_badge};

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub input: InputPanelState,
    pub status: StatusBarState,
    /// Analysis failure banner shown above the input panel.
    pub analysis_error: Option<String>,
    /// True when the current analysis came from a persisted session.
    pub restored_session: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            input: InputPanelState::default(),
            status: StatusBarState::idle(),
            analysis_error: None,
            restored_session: false,
        }
    }
}

/// Document text area plus the in-flight analysis flag.
#[derive(Clone, Debug, Default)]
pub struct InputPanelState {
    pub document: String,
    pub analyzing: bool,
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
}

impl StatusBarState {
    pub fn idle() -> Self {
        let (badge_label, badge_color) = status_badge(StatusTone::Idle);
        Self {
            text: "Paste a strategy document to get started".into(),
            badge_label,
            badge_color,
        }
    }
}
