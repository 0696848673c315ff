//! Case-level triage: fold subject scores, breach volume, staleness and case type into a
//! single priority tier.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::aegis::AegisScore;
use crate::profile::{calculate_completeness, ProfileData};

const LOW_COMPLETENESS: u8 = 40;
const ELEVATED_AEGIS: u8 = 55;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseData {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// `EP` (executive protection), `CT` (counter-threat), `CI` (counter-intelligence).
    #[serde(default, rename = "type")]
    pub case_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseSubject {
    pub id: String,
    #[serde(default)]
    pub profile_data: Option<ProfileData>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityTier {
    Low,
    Routine,
    High,
    Critical,
}

impl PriorityTier {
    pub const fn from_score(score: u8) -> Self {
        if score >= 75 {
            PriorityTier::Critical
        } else if score >= 55 {
            PriorityTier::High
        } else if score >= 30 {
            PriorityTier::Routine
        } else {
            PriorityTier::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            PriorityTier::Low => "low",
            PriorityTier::Routine => "routine",
            PriorityTier::High => "high",
            PriorityTier::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasePriority {
    pub priority: PriorityTier,
    pub score: u8,
    pub reasons: Vec<String>,
}

fn aegis_points(max_composite: u8) -> (u32, Option<String>) {
    match max_composite {
        75.. => (35, Some(format!("Critical Aegis score ({max_composite})"))),
        55..=74 => (25, Some(format!("High Aegis score ({max_composite})"))),
        35..=54 => (15, Some(format!("Moderate Aegis score ({max_composite})"))),
        _ => (0, None),
    }
}

fn breach_points(total: usize) -> (u32, Option<String>) {
    match total {
        10.. => (20, Some(format!("{total} breach records across subjects"))),
        5..=9 => (12, Some(format!("{total} breach records across subjects"))),
        1..=4 => (5, Some(format!("{total} breach record(s) across subjects"))),
        _ => (0, None),
    }
}

fn staleness_points(days: i64) -> (u32, Option<String>) {
    if days > 90 {
        (15, Some(format!("Profile data stale ({days} days since update)")))
    } else if days > 30 {
        (8, Some(format!("Profile data aging ({days} days since update)")))
    } else {
        (0, None)
    }
}

fn case_type_points(case_type: Option<&str>) -> (u32, Option<String>) {
    let code = case_type.map(|value| value.trim().to_ascii_uppercase());
    match code.as_deref() {
        Some("EP") => (15, Some("Executive protection case".to_string())),
        Some("CT") => (10, Some("Counter-threat case".to_string())),
        _ => (5, None),
    }
}

/// Triage a case. `now` anchors the staleness calculation. Subjects missing from
/// `aegis_scores` contribute a composite of zero.
pub fn calculate_case_priority(
    case: &CaseData,
    subjects: &[CaseSubject],
    aegis_scores: &HashMap<String, AegisScore>,
    now: DateTime<Utc>,
) -> CasePriority {
    let composite_of = |subject: &CaseSubject| {
        aegis_scores
            .get(&subject.id)
            .map(|score| score.composite)
            .unwrap_or(0)
    };

    let max_composite = subjects.iter().map(composite_of).max().unwrap_or(0);
    let breach_total: usize = subjects
        .iter()
        .filter_map(|subject| subject.profile_data.as_ref())
        .map(|profile| profile.breaches.records.len())
        .sum();
    let stale_days = subjects
        .iter()
        .filter_map(|subject| subject.updated_at)
        .map(|updated| (now - updated).num_days().max(0))
        .max()
        .unwrap_or(0);
    let incomplete_but_risky = subjects.iter().any(|subject| {
        let completeness = calculate_completeness(subject.profile_data.as_ref()).score;
        completeness < LOW_COMPLETENESS && composite_of(subject) >= ELEVATED_AEGIS
    });

    let completeness_flag = if incomplete_but_risky {
        (
            15,
            Some("Elevated risk on an incomplete profile".to_string()),
        )
    } else {
        (0, None)
    };

    let tiers = [
        aegis_points(max_composite),
        breach_points(breach_total),
        staleness_points(stale_days),
        completeness_flag,
        case_type_points(case.case_type.as_deref()),
    ];

    let mut total: u32 = 0;
    let mut reasons = Vec::new();
    for (points, reason) in tiers {
        total += points;
        reasons.extend(reason);
    }

    let score = total.min(100) as u8;
    let priority = PriorityTier::from_score(score);

    debug!(
        case = case.id.as_deref().unwrap_or("-"),
        score,
        priority = priority.label(),
        "calculated case priority"
    );

    CasePriority {
        priority,
        score,
        reasons,
    }
}
