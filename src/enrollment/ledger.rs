//! Enrollment records plus the deadlines that confirm them.
//!
//! The ledger owns both halves of the simulated workflow: the records keyed
//! by program title and the scheduled `Processing` to `Confirmed` flips.
//! Deadlines are plain [`Instant`]s inspected by [`EnrollmentLedger::tick`],
//! so clearing the ledger cancels every outstanding confirmation and tests
//! can drive time synthetically.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::analysis::ApprovalStatus;
use crate::enrollment::{EnrollmentRecord, EnrollmentStatus, new_enrollment_id};

/// Delay before a freshly created enrollment is confirmed.
pub const CONFIRMATION_DELAY: Duration = Duration::from_millis(2000);

/// Why an enrollment request was refused.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum EnrollError {
    #[error("Program `{0}` was rejected by management and cannot be enrolled")]
    ProgramRejected(String),
    #[error("Program `{0}` already has an enrollment")]
    AlreadyEnrolled(String),
}

#[derive(Debug)]
struct PendingConfirmation {
    title: String,
    due: Instant,
}

/// All enrollments for the current analysis, keyed by program title.
#[derive(Debug, Default)]
pub struct EnrollmentLedger {
    records: BTreeMap<String, EnrollmentRecord>,
    pending: Vec<PendingConfirmation>,
}

impl EnrollmentLedger {
    /// Create an enrollment for `title`, scheduled to confirm after
    /// [`CONFIRMATION_DELAY`].
    ///
    /// Refuses rejected programs and duplicate enrollments regardless of what
    /// the caller's UI allowed.
    pub fn begin(
        &mut self,
        title: &str,
        approval: ApprovalStatus,
        now: Instant,
        timestamp: String,
    ) -> Result<&EnrollmentRecord, EnrollError> {
        match approval {
            ApprovalStatus::Rejected => {
                return Err(EnrollError::ProgramRejected(title.to_string()));
            }
            ApprovalStatus::Pending | ApprovalStatus::Approved => {}
        }
        if self.records.contains_key(title) {
            return Err(EnrollError::AlreadyEnrolled(title.to_string()));
        }

        let record = EnrollmentRecord {
            id: new_enrollment_id(),
            status: EnrollmentStatus::Processing,
            timestamp,
        };
        self.pending.push(PendingConfirmation {
            title: title.to_string(),
            due: now + CONFIRMATION_DELAY,
        });
        Ok(self.records.entry(title.to_string()).or_insert(record))
    }

    /// Confirm every enrollment whose deadline has passed, returning the
    /// affected program titles.
    pub fn tick(&mut self, now: Instant) -> Vec<String> {
        let mut confirmed = Vec::new();
        self.pending.retain(|pending| {
            if pending.due > now {
                return true;
            }
            if let Some(record) = self.records.get_mut(&pending.title) {
                record.status = EnrollmentStatus::Confirmed;
                confirmed.push(pending.title.clone());
            }
            false
        });
        confirmed
    }

    /// Earliest outstanding confirmation deadline, if any.
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|pending| pending.due).min()
    }

    /// Drop all records and cancel every scheduled confirmation.
    pub fn clear(&mut self) {
        self.records.clear();
        self.pending.clear();
    }

    /// Replace the ledger with persisted records.
    ///
    /// Records stuck in `Processing` from an interrupted run get a fresh
    /// full-length deadline instead of confirming immediately.
    pub fn restore(&mut self, records: BTreeMap<String, EnrollmentRecord>, now: Instant) {
        self.pending.clear();
        for (title, record) in &records {
            if record.status == EnrollmentStatus::Processing {
                self.pending.push(PendingConfirmation {
                    title: title.clone(),
                    due: now + CONFIRMATION_DELAY,
                });
            }
        }
        self.records = records;
    }

    pub fn get(&self, title: &str) -> Option<&EnrollmentRecord> {
        self.records.get(title)
    }

    pub fn records(&self) -> &BTreeMap<String, EnrollmentRecord> {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
