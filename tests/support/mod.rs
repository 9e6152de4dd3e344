//! Shared fixtures for integration tests.

use workstrat::analysis::{
    AnalysisReport, ApprovalStatus, GapPriority, InsightImpact, Prerequisite, SkillGap,
    StrategicInsight, TrainingModule, TrainingProgram, WorkforceMetric,
};

pub fn program(title: &str, approval: ApprovalStatus) -> TrainingProgram {
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

pub fn report(programs: Vec<TrainingProgram>) -> AnalysisReport {
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
        training_roadmap: programs,
        strategic_insights: vec![StrategicInsight {
            title: "Succession cliff".to_string(),
            description: "30% of senior leadership retires within 3 years".to_string(),
            impact: InsightImpact::Critical,
        }],
    }
}
