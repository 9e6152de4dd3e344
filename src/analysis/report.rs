//! Structured analysis result extracted from a strategy document.
//!
//! Field names serialize in camelCase because the same shapes travel over the
//! analysis response contract and the persisted session blob. A report is an
//! immutable snapshot: a fresh analysis replaces it wholesale, never merges.

use serde::{Deserialize, Serialize};

/// Complete structured output of one successful analysis call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub metrics: Vec<WorkforceMetric>,
    pub skill_gaps: Vec<SkillGap>,
    pub training_roadmap: Vec<TrainingProgram>,
    pub strategic_insights: Vec<StrategicInsight>,
}

impl AnalysisReport {
    /// Look up a roadmap program by its title (the natural key).
    pub fn program(&self, title: &str) -> Option<&TrainingProgram> {
        self.training_roadmap
            .iter()
            .find(|program| program.title == title)
    }

    /// True when every roadmap program carries a distinct title.
    ///
    /// Titles key the enrollment map, so a duplicate would silently merge two
    /// programs' enrollments.
    pub fn has_unique_program_titles(&self) -> bool {
        let mut seen = std::collections::BTreeSet::new();
        self.training_roadmap
            .iter()
            .all(|program| seen.insert(program.title.as_str()))
    }
}

/// Headline workforce KPI with a current value measured against a target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkforceMetric {
    pub category: String,
    pub current: f64,
    pub target: f64,
    pub unit: String,
}

/// Deficit between current and strategically required proficiency in a skill.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGap {
    pub skill: String,
    pub current_proficiency: f64,
    pub required_proficiency: f64,
    pub priority: GapPriority,
}

impl SkillGap {
    /// Signed gap in proficiency points. Negative means the team already
    /// exceeds the requirement; display code clamps at zero.
    pub fn gap_points(&self) -> f64 {
        self.required_proficiency - self.current_proficiency
    }
}

/// Remediation priority assigned to a skill gap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GapPriority {
    High,
    Medium,
    Low,
}

/// A recommended training offering on the roadmap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingProgram {
    /// Natural key for enrollment lookup; unique within one report.
    pub title: String,
    pub objective: String,
    pub duration: String,
    pub audience: String,
    pub expected_outcome: String,
    pub team_size: String,
    pub manager_approval_status: ApprovalStatus,
    pub skills_covered: Vec<String>,
    pub delivery_method: String,
    pub modules: Vec<TrainingModule>,
    pub prerequisites: Vec<Prerequisite>,
}

/// Pre-existing management decision on a program, independent of enrollment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

/// One learning module inside a program.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingModule {
    pub name: String,
    pub detail: String,
}

/// One prerequisite for joining a program.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prerequisite {
    pub name: String,
    pub detail: String,
}

/// Executive-level observation extracted from the document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategicInsight {
    pub title: String,
    pub description: String,
    pub impact: InsightImpact,
}

/// Business impact attached to a strategic insight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsightImpact {
    Critical,
    Moderate,
    Low,
}

/// Shared fixtures for unit tests across the crate.
#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::*;

    pub(crate) fn program(title: &str, approval: ApprovalStatus) -> TrainingProgram {
        TrainingProgram {
            title: title.to_string(),
            objective: "Close the highest-risk technical gap".to_string(),
            duration: "6 Weeks".to_string(),
            audience: "Platform engineers".to_string(),
            expected_outcome: "Certified cloud architects".to_string(),
            team_size: "12".to_string(),
            manager_approval_status: approval,
            skills_covered: vec!["Cloud Design".to_string()],
            delivery_method: "Instructor-led Virtual".to_string(),
            modules: vec![TrainingModule {
                name: "Landing Zones".to_string(),
                detail: "Account topology and guardrails".to_string(),
            }],
            prerequisites: vec![Prerequisite {
                name: "Networking Basics".to_string(),
                detail: "Subnetting and routing fundamentals".to_string(),
            }],
        }
    }

    pub(crate) fn report_with_titles(titles: &[&str]) -> AnalysisReport {
        AnalysisReport {
            metrics: vec![WorkforceMetric {
                category: "Data Literacy".to_string(),
                current: 45.0,
                target: 85.0,
                unit: "%".to_string(),
            }],
            skill_gaps: vec![SkillGap {
                skill: "Cloud Architecture".to_string(),
                current_proficiency: 40.0,
                required_proficiency: 90.0,
                priority: GapPriority::High,
            }],
            training_roadmap: titles
                .iter()
                .map(|title| program(title, ApprovalStatus::Approved))
                .collect(),
            strategic_insights: vec![StrategicInsight {
                title: "Succession cliff".to_string(),
                description: "30% of senior leadership retires within 3 years".to_string(),
                impact: InsightImpact::Critical,
            }],
        }
    }
}
