//! Deterministic scoring and correlation engine. Every entry point is a pure function of
//! its inputs.

pub mod aegis;
pub mod cases;
pub mod crosswire;
pub mod remediation;

#[cfg(test)]
mod tests;

pub use aegis::{
    calculate_aegis_score, AegisScore, FactorKey, FactorScore, RiskLevel, ScoreDriver,
    ScoreSnapshot, ScoreTrend, TrendDirection, TrendError,
};
pub use cases::{calculate_case_priority, CaseData, CasePriority, CaseSubject, PriorityTier};
pub use crosswire::{
    detect_overlaps, write_overlaps_csv, CaseRef, ExportError, MatchType, OverlapMatch,
    OverlapResult, SubjectRecord, SubjectRef,
};
pub use remediation::{
    build_remediation_options, simulate_remediation, RemediationCategory, RemediationOption,
    SimulatedScore,
};
