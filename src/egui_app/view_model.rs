//! Helpers to convert domain data into egui-facing display values.

use crate::analysis::{ApprovalStatus, SkillGap, WorkforceMetric};
use crate::enrollment::{EnrollmentRecord, EnrollmentStatus};

/// Fraction of a metric's target already reached, clamped to `[0, 1]`.
///
/// A non-positive target reads as already met rather than dividing by zero.
pub fn metric_progress(metric: &WorkforceMetric) -> f32 {
    if metric.target <= 0.0 {
        return 1.0;
    }
    ((metric.current / metric.target) as f32).clamp(0.0, 1.0)
}

/// Proficiency still missing for a gap, floored at zero for display.
///
/// The signed value stays available on [`SkillGap::gap_points`]; a team that
/// already exceeds the requirement shows a zero deficit, not a negative one.
pub fn gap_deficit(gap: &SkillGap) -> f64 {
    gap.gap_points().max(0.0)
}

/// What the enroll button on a program card can do right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnrollAffordance {
    /// No enrollment yet and the program is open.
    Available,
    /// Management rejected the program; enrollment is never offered.
    Locked,
    /// Enrollment created, confirmation still pending.
    Processing,
    Confirmed,
}

impl EnrollAffordance {
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Enroll Team",
            Self::Locked => "Enrollment Locked",
            Self::Processing => "Processing…",
            Self::Confirmed => "Enrolled",
        }
    }
}

/// Resolve the enroll affordance from approval status and the ledger record.
pub fn enroll_affordance(
    approval: ApprovalStatus,
    record: Option<&EnrollmentRecord>,
) -> EnrollAffordance {
    match approval {
        ApprovalStatus::Rejected => EnrollAffordance::Locked,
        ApprovalStatus::Pending | ApprovalStatus::Approved => match record.map(|r| r.status) {
            None => EnrollAffordance::Available,
            Some(EnrollmentStatus::Processing) => EnrollAffordance::Processing,
            Some(EnrollmentStatus::Confirmed) => EnrollAffordance::Confirmed,
        },
    }
}

/// Short progress text for a metric, e.g. `45 / 85 %`.
pub fn metric_progress_text(metric: &WorkforceMetric) -> String {
    format!(
        "{} / {} {}",
        trim_float(metric.current),
        trim_float(metric.target),
        metric.unit
    )
}

fn trim_float(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::GapPriority;
    use crate::enrollment::EnrollmentStatus;

    fn metric(current: f64, target: f64) -> WorkforceMetric {
        WorkforceMetric {
            category: "Data Literacy".into(),
            current,
            target,
            unit: "%".into(),
        }
    }

    fn gap(current: f64, required: f64) -> SkillGap {
        SkillGap {
            skill: "Cloud".into(),
            current_proficiency: current,
            required_proficiency: required,
            priority: GapPriority::High,
        }
    }

    fn record(status: EnrollmentStatus) -> EnrollmentRecord {
        EnrollmentRecord {
            id: "ENR-AAAAAAAAA".into(),
            status,
            timestamp: "t0".into(),
        }
    }

    #[test]
    fn metric_progress_clamps_to_unit_interval() {
        assert_eq!(metric_progress(&metric(45.0, 90.0)), 0.5);
        assert_eq!(metric_progress(&metric(120.0, 90.0)), 1.0);
        assert_eq!(metric_progress(&metric(-5.0, 90.0)), 0.0);
    }

    #[test]
    fn non_positive_target_reads_as_met() {
        assert_eq!(metric_progress(&metric(10.0, 0.0)), 1.0);
        assert_eq!(metric_progress(&metric(10.0, -3.0)), 1.0);
    }

    #[test]
    fn gap_deficit_floors_at_zero() {
        assert_eq!(gap_deficit(&gap(40.0, 90.0)), 50.0);
        assert_eq!(gap_deficit(&gap(80.0, 60.0)), 0.0);
    }

    #[test]
    fn rejected_programs_are_locked_regardless_of_records() {
        assert_eq!(
            enroll_affordance(ApprovalStatus::Rejected, None),
            EnrollAffordance::Locked
        );
        assert_eq!(
            enroll_affordance(
                ApprovalStatus::Rejected,
                Some(&record(EnrollmentStatus::Confirmed))
            ),
            EnrollAffordance::Locked
        );
    }

    #[test]
    fn affordance_follows_the_record_status() {
        assert_eq!(
            enroll_affordance(ApprovalStatus::Approved, None),
            EnrollAffordance::Available
        );
        assert_eq!(
            enroll_affordance(
                ApprovalStatus::Pending,
                Some(&record(EnrollmentStatus::Processing))
            ),
            EnrollAffordance::Processing
        );
        assert_eq!(
            enroll_affordance(
                ApprovalStatus::Approved,
                Some(&record(EnrollmentStatus::Confirmed))
            ),
            EnrollAffordance::Confirmed
        );
    }

    #[test]
    fn metric_text_trims_integral_values() {
        assert_eq!(metric_progress_text(&metric(45.0, 85.0)), "45 / 85 %");
        assert_eq!(metric_progress_text(&metric(4.5, 8.0)), "4.5 / 8 %");
    }
}
