//! End-to-end dashboard flows through the public controller API, with time
//! driven synthetically.

mod support;

use std::time::{Duration, Instant};

use tempfile::TempDir;
use workstrat::analysis::{AnalysisGateway, ApprovalStatus};
use workstrat::egui_app::DashboardController;
use workstrat::enrollment::EnrollmentStatus;
use workstrat::enrollment::confirmation::{SUCCESS_HOLD, SYNC_DELAY};
use workstrat::enrollment::ledger::CONFIRMATION_DELAY;
use workstrat::session::SessionStore;

fn controller(dir: &TempDir) -> DashboardController {
    let store = SessionStore::at_path(dir.path().join("session.json"));
    let gateway = AnalysisGateway::new("http://127.0.0.1:9", "test-model");
    DashboardController::new(Some(store), gateway)
}

#[test]
fn analysis_enrollment_and_relaunch_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let now = Instant::now();

    let mut first = controller(&dir);
    first.apply_analysis_result(Ok(support::report(vec![
        support::program("Cloud Architecture Fundamentals", ApprovalStatus::Approved),
        support::program("Data Literacy Bootcamp", ApprovalStatus::Pending),
    ])));

    // Enroll in one program and let the whole sequence play out. The record
    // is created when the dialog closes, so its confirmation deadline counts
    // from there.
    first.request_enroll("Cloud Architecture Fundamentals");
    first.confirm_enroll(now);
    first.tick(now + SYNC_DELAY);
    first.tick(now + SYNC_DELAY + SUCCESS_HOLD);
    first.tick(now + SYNC_DELAY + SUCCESS_HOLD + CONFIRMATION_DELAY);
    assert_eq!(
        first
            .enrollment("Cloud Architecture Fundamentals")
            .unwrap()
            .status,
        EnrollmentStatus::Confirmed
    );

    // A relaunch sees the same analysis and the confirmed enrollment.
    let mut second = controller(&dir);
    second.restore_session(Instant::now());
    let report = second.analysis().expect("restored analysis");
    assert_eq!(report.training_roadmap.len(), 2);
    assert_eq!(
        second
            .enrollment("Cloud Architecture Fundamentals")
            .unwrap()
            .status,
        EnrollmentStatus::Confirmed
    );
    assert!(second.enrollment("Data Literacy Bootcamp").is_none());
}

#[test]
fn interrupted_enrollment_finishes_after_relaunch() {
    let dir = tempfile::tempdir().unwrap();
    let now = Instant::now();

    let mut first = controller(&dir);
    first.apply_analysis_result(Ok(support::report(vec![support::program(
        "Cloud Architecture Fundamentals",
        ApprovalStatus::Approved,
    )])));
    first.request_enroll("Cloud Architecture Fundamentals");
    first.confirm_enroll(now);
    first.tick(now + SYNC_DELAY);
    first.tick(now + SYNC_DELAY + SUCCESS_HOLD);
    // Dropped here while still Processing; the record is already on disk.

    let mut second = controller(&dir);
    let relaunch = Instant::now();
    second.restore_session(relaunch);
    assert_eq!(
        second
            .enrollment("Cloud Architecture Fundamentals")
            .unwrap()
            .status,
        EnrollmentStatus::Processing
    );

    // The confirmation deadline restarts in full on restore.
    second.tick(relaunch + Duration::from_millis(500));
    assert_eq!(
        second
            .enrollment("Cloud Architecture Fundamentals")
            .unwrap()
            .status,
        EnrollmentStatus::Processing
    );
    second.tick(relaunch + CONFIRMATION_DELAY);
    assert_eq!(
        second
            .enrollment("Cloud Architecture Fundamentals")
            .unwrap()
            .status,
        EnrollmentStatus::Confirmed
    );
}

#[test]
fn new_analysis_resets_enrollments_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let now = Instant::now();

    let mut controller = controller(&dir);
    controller.apply_analysis_result(Ok(support::report(vec![support::program(
        "Old Program",
        ApprovalStatus::Approved,
    )])));
    controller.request_enroll("Old Program");
    controller.confirm_enroll(now);
    controller.tick(now + SYNC_DELAY);
    controller.tick(now + SYNC_DELAY + SUCCESS_HOLD);
    assert!(controller.enrollment("Old Program").is_some());

    controller.apply_analysis_result(Ok(support::report(vec![support::program(
        "New Program",
        ApprovalStatus::Approved,
    )])));
    assert!(controller.enrollment("Old Program").is_none());

    // The stale confirmation deadline died with the old ledger.
    controller.tick(now + Duration::from_secs(10));
    assert!(controller.enrollment("Old Program").is_none());

    let store = SessionStore::at_path(dir.path().join("session.json"));
    let snapshot = store.load().unwrap();
    assert!(snapshot.analysis.program("New Program").is_some());
    assert!(snapshot.enrollments.is_empty());
}

#[test]
fn clear_session_survives_relaunch_as_empty() {
    let dir = tempfile::tempdir().unwrap();

    let mut first = controller(&dir);
    first.apply_analysis_result(Ok(support::report(vec![support::program(
        "Cloud Architecture Fundamentals",
        ApprovalStatus::Approved,
    )])));
    first.clear_session();

    let mut second = controller(&dir);
    second.restore_session(Instant::now());
    assert!(second.analysis().is_none());
    assert!(!second.ui.restored_session);
}

#[test]
fn rejected_program_cannot_be_enrolled_through_the_controller() {
    let dir = tempfile::tempdir().unwrap();
    let mut controller = controller(&dir);
    controller.apply_analysis_result(Ok(support::report(vec![support::program(
        "Vetoed Program",
        ApprovalStatus::Rejected,
    )])));

    controller.request_enroll("Vetoed Program");
    assert!(!controller.confirmation().is_open());
    controller.tick(Instant::now() + Duration::from_secs(10));
    assert!(controller.enrollment("Vetoed Program").is_none());
}
