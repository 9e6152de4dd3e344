//! Maintains app state and bridges the analysis and enrollment logic to the
//! egui UI.

mod background_jobs;
pub(crate) mod jobs;

use std::time::Instant;

use egui::Color32;

use crate::analysis::{AnalysisError, AnalysisGateway, AnalysisReport, SAMPLE_DOCUMENT};
use crate::egui_app::state::UiState;
use crate::egui_app::view_model::{self, EnrollAffordance};
use crate::enrollment::{self, ConfirmationFlow, EnrollmentLedger, EnrollmentRecord};
use crate::logging;
use crate::session::{SessionSnapshot, SessionStore};

use jobs::ControllerJobs;

/// User-facing text for any analysis failure. Details go to the log only.
const ANALYSIS_FAILED_MESSAGE: &str =
    "Failed to analyze document. Please ensure your input is valid or try again later.";
const MISSING_KEY_MESSAGE: &str =
    "No analysis API key configured. Set GEMINI_API_KEY and restart.";

/// Drives the dashboard: one optional analysis, its enrollments, and the
/// confirmation dialog, all advanced from the frame loop.
pub struct DashboardController {
    pub ui: UiState,
    analysis: Option<AnalysisReport>,
    ledger: EnrollmentLedger,
    confirmation: ConfirmationFlow,
    store: Option<SessionStore>,
    gateway: AnalysisGateway,
    jobs: ControllerJobs,
}

impl DashboardController {
    /// Controller with an optional persistence store. `None` keeps the
    /// dashboard fully in-memory.
    pub fn new(store: Option<SessionStore>, gateway: AnalysisGateway) -> Self {
        Self {
            ui: UiState::default(),
            analysis: None,
            ledger: EnrollmentLedger::default(),
            confirmation: ConfirmationFlow::default(),
            store,
            gateway,
            jobs: ControllerJobs::new(),
        }
    }

    /// Load the persisted session, if any, and re-arm unfinished enrollments.
    pub fn restore_session(&mut self, now: Instant) {
        let Some(snapshot) = self.store.as_ref().and_then(SessionStore::load) else {
            return;
        };
        self.ledger.restore(snapshot.enrollments, now);
        self.analysis = Some(snapshot.analysis);
        self.ui.restored_session = true;
        self.set_status("Restored previous session", StatusTone::Info);
    }

    pub fn analysis(&self) -> Option<&AnalysisReport> {
        self.analysis.as_ref()
    }

    pub fn enrollment(&self, title: &str) -> Option<&EnrollmentRecord> {
        self.ledger.get(title)
    }

    pub fn confirmation(&self) -> &ConfirmationFlow {
        &self.confirmation
    }

    /// True when changes are being mirrored to disk.
    pub fn persistence_enabled(&self) -> bool {
        self.store.is_some()
    }

    /// Replace the input text with the built-in sample document.
    pub fn load_sample_document(&mut self) {
        self.ui.input.document = SAMPLE_DOCUMENT.to_string();
        self.ui.analysis_error = None;
    }

    /// Kick off a background analysis of the current input text.
    pub fn submit_analysis(&mut self) {
        if self.ui.input.analyzing {
            return;
        }
        let document = self.ui.input.document.trim().to_string();
        if document.is_empty() {
            self.set_status(
                "Paste or load a document before analyzing",
                StatusTone::Warning,
            );
            return;
        }
        let Some(api_key) = AnalysisGateway::api_key_from_env() else {
            self.ui.analysis_error = Some(MISSING_KEY_MESSAGE.to_string());
            self.set_status("Analysis unavailable", StatusTone::Error);
            return;
        };
        self.ui.analysis_error = None;
        self.ui.input.analyzing = true;
        self.set_status("Analyzing document…", StatusTone::Busy);
        self.jobs.spawn_analysis(self.gateway.clone(), api_key, document);
    }

    /// Install the outcome of an analysis job.
    ///
    /// A fresh report replaces the previous one wholesale and resets every
    /// enrollment, including scheduled confirmations and an open dialog.
    pub fn apply_analysis_result(&mut self, result: Result<AnalysisReport, AnalysisError>) {
        self.ui.input.analyzing = false;
        match result {
            Ok(report) => {
                self.ledger.clear();
                self.confirmation.abort();
                self.ui.restored_session = false;
                self.ui.analysis_error = None;
                self.set_status(
                    format!(
                        "Analysis complete: {} programs on the roadmap",
                        report.training_roadmap.len()
                    ),
                    StatusTone::Info,
                );
                self.analysis = Some(report);
                self.persist();
            }
            Err(err) => {
                tracing::error!("Document analysis failed: {err}");
                self.ui.analysis_error = Some(ANALYSIS_FAILED_MESSAGE.to_string());
                self.set_status("Analysis failed", StatusTone::Error);
            }
        }
    }

    /// Open the confirmation dialog for a program, if it can be enrolled.
    pub fn request_enroll(&mut self, title: &str) {
        let Some(program) = self.analysis.as_ref().and_then(|a| a.program(title)) else {
            return;
        };
        let affordance =
            view_model::enroll_affordance(program.manager_approval_status, self.ledger.get(title));
        if affordance == EnrollAffordance::Available {
            self.confirmation.open(title);
        }
    }

    /// User confirmed in the dialog; start the synchronizing phase.
    pub fn confirm_enroll(&mut self, now: Instant) {
        self.confirmation.confirm(now);
    }

    /// User dismissed the dialog. Ignored once synchronization has started.
    pub fn cancel_enroll(&mut self) {
        self.confirmation.cancel();
    }

    /// Advance every scheduled transition that is due at `now`.
    pub fn tick(&mut self, now: Instant) {
        if let Some(title) = self.confirmation.tick(now) {
            self.begin_enrollment(&title, now);
        }
        let confirmed = self.ledger.tick(now);
        for title in &confirmed {
            self.set_status(format!("Enrollment confirmed for {title}"), StatusTone::Info);
        }
        if !confirmed.is_empty() {
            self.persist();
        }
    }

    /// Earliest deadline the frame loop must wake up for, if any.
    pub fn next_wakeup(&self) -> Option<Instant> {
        match (self.ledger.next_due(), self.confirmation.next_due()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Drop the analysis, all enrollments, and the persisted session.
    pub fn clear_session(&mut self) {
        self.analysis = None;
        self.ledger.clear();
        self.confirmation.abort();
        self.ui.restored_session = false;
        self.ui.analysis_error = None;
        if let Some(store) = &self.store {
            if let Err(err) = store.clear() {
                tracing::warn!("Failed to clear persisted session: {err}");
            }
        }
        self.set_status("Session cleared", StatusTone::Idle);
    }

    fn begin_enrollment(&mut self, title: &str, now: Instant) {
        let Some(approval) = self
            .analysis
            .as_ref()
            .and_then(|a| a.program(title))
            .map(|program| program.manager_approval_status)
        else {
            self.confirmation.abort();
            return;
        };
        let timestamp = enrollment::format_timestamp(logging::now_local_or_utc());
        match self.ledger.begin(title, approval, now, timestamp) {
            Ok(record) => {
                let message = format!("Enrollment {} processing for {title}", record.id);
                self.set_status(message, StatusTone::Busy);
                self.persist();
            }
            Err(err) => {
                self.confirmation.abort();
                self.set_status(err.to_string(), StatusTone::Warning);
            }
        }
    }

    /// Write the current session to disk. Skipped while no analysis exists;
    /// failures are logged, never surfaced.
    fn persist(&self) {
        let (Some(store), Some(analysis)) = (&self.store, &self.analysis) else {
            return;
        };
        let snapshot = SessionSnapshot {
            analysis: analysis.clone(),
            enrollments: self.ledger.records().clone(),
        };
        if let Err(err) = store.save(&snapshot) {
            tracing::warn!("Failed to persist session: {err}");
        }
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        let (badge_label, badge_color) = status_badge(tone);
        self.ui.status.text = text.into();
        self.ui.status.badge_label = badge_label;
        self.ui.status.badge_color = badge_color;
    }
}

/// Visual tone of the footer status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Busy,
    Info,
    Warning,
    Error,
}

pub(crate) fn status_badge(tone: StatusTone) -> (String, Color32) {
    match tone {
        StatusTone::Idle => ("Idle".into(), Color32::from_rgb(120, 124, 130)),
        StatusTone::Busy => ("Working".into(), Color32::from_rgb(31, 139, 255)),
        StatusTone::Info => ("Info".into(), Color32::from_rgb(64, 140, 112)),
        StatusTone::Warning => ("Warning".into(), Color32::from_rgb(192, 138, 43)),
        StatusTone::Error => ("Error".into(), Color32::from_rgb(192, 57, 43)),
    }
}
