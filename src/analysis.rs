//! Workforce document analysis: data model and the external gateway.

pub mod gateway;
pub mod report;

pub use gateway::{AnalysisError, AnalysisGateway};
pub use report::{
    AnalysisReport, ApprovalStatus, GapPriority, InsightImpact, Prerequisite, SkillGap,
    StrategicInsight, TrainingModule, TrainingProgram, WorkforceMetric,
};

/// Built-in sample strategy document behind the "Load Sample Strategy" affordance.
pub const SAMPLE_DOCUMENT: &str = "STRATEGIC WORKFORCE PLAN 2025-2030
Executive Summary:
Our organization is pivoting towards a digital-first model. This requires a significant shift in our workforce composition.
Key Priorities:
1. Increase data literacy across middle management (Currently at 45% target 85%).
2. Accelerate AI adoption in customer service operations.
3. Reduce external hiring costs by upskilling internal talent.
4. Bridge the gap in cloud architecture skills which is currently our highest technical risk.
5. Succession planning for 30% of senior leadership retiring in the next 3 years.";
