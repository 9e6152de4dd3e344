//! Locally simulated enrollment workflow for roadmap programs.
//!
//! Enrollments never leave the machine: a new record starts as `Processing`
//! and flips to `Confirmed` after a fixed delay, driven by the frame loop
//! rather than detached timers so a session reset cancels everything at once.

pub mod confirmation;
pub mod ledger;

pub use confirmation::ConfirmationFlow;
pub use ledger::{EnrollError, EnrollmentLedger};

use rand::Rng;
use rand::distr::Alphanumeric;
use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, format_description::FormatItem, macros::format_description};

/// Lifecycle of one enrollment record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnrollmentStatus {
    Processing,
    Confirmed,
}

/// One enrollment, keyed externally by the program title.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    /// Display reference, e.g. `ENR-7K2M9QX4B`.
    pub id: String,
    pub status: EnrollmentStatus,
    /// Human-readable creation time, stored as formatted text.
    pub timestamp: String,
}

/// Generate a fresh enrollment reference: `ENR-` plus nine uppercase
/// alphanumerics.
pub fn new_enrollment_id() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(|byte| (byte as char).to_ascii_uppercase())
        .collect();
    format!("ENR-{suffix}")
}

/// Format an enrollment creation time for display and persistence.
pub fn format_timestamp(moment: OffsetDateTime) -> String {
    const TIMESTAMP_FORMAT: &[FormatItem<'_>] =
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    moment
        .format(TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| moment.unix_timestamp().to_string())
}
