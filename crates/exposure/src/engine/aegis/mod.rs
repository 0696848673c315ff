//! Aegis composite risk score: five weighted exposure factors plus ranked drivers.

mod drivers;
mod factors;
pub mod signals;
mod trend;

pub use trend::{ScoreSnapshot, ScoreTrend, TrendDirection, TrendError};

pub(crate) use factors::ExposureSignals;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::profile::ProfileData;

/// The five factors composing the Aegis score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKey {
    DigitalFootprint,
    BreachExposure,
    BehavioralPredictability,
    PhysicalOpsec,
    NetworkExposure,
}

impl FactorKey {
    pub const ALL: [FactorKey; 5] = [
        FactorKey::DigitalFootprint,
        FactorKey::BreachExposure,
        FactorKey::BehavioralPredictability,
        FactorKey::PhysicalOpsec,
        FactorKey::NetworkExposure,
    ];

    /// Percentage weight; the five weights sum to 100.
    pub const fn weight(self) -> u8 {
        match self {
            FactorKey::DigitalFootprint => 25,
            FactorKey::BreachExposure => 20,
            FactorKey::BehavioralPredictability => 25,
            FactorKey::PhysicalOpsec => 15,
            FactorKey::NetworkExposure => 15,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            FactorKey::DigitalFootprint => "Digital Footprint",
            FactorKey::BreachExposure => "Breach Exposure",
            FactorKey::BehavioralPredictability => "Behavioral Predictability",
            FactorKey::PhysicalOpsec => "Physical OPSEC",
            FactorKey::NetworkExposure => "Network Exposure",
        }
    }
}

/// Risk band derived from the composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub const fn from_composite(composite: u8) -> Self {
        if composite >= 75 {
            RiskLevel::Critical
        } else if composite >= 55 {
            RiskLevel::High
        } else if composite >= 35 {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Moderate => "MODERATE",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorScore {
    pub score: u8,
    pub weight: u8,
    pub label: String,
}

impl FactorScore {
    pub fn new(key: FactorKey, score: u8) -> Self {
        Self {
            score: score.min(100),
            weight: key.weight(),
            label: key.label().to_string(),
        }
    }
}

/// A single explained contributor to the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDriver {
    pub text: String,
    pub impact: u32,
    pub category: FactorKey,
}

/// Composite risk score for one subject. Recomputed from the profile on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AegisScore {
    pub composite: u8,
    pub risk_level: RiskLevel,
    pub factors: BTreeMap<FactorKey, FactorScore>,
    #[serde(default)]
    pub drivers: Vec<ScoreDriver>,
    #[serde(default)]
    pub calculated_at: DateTime<Utc>,
}

impl AegisScore {
    /// Zero-valued score carrying the full factor table and no drivers.
    pub fn empty() -> Self {
        Self {
            composite: 0,
            risk_level: RiskLevel::Low,
            factors: FactorKey::ALL
                .into_iter()
                .map(|key| (key, FactorScore::new(key, 0)))
                .collect(),
            drivers: Vec::new(),
            calculated_at: Utc::now(),
        }
    }

    pub fn factor(&self, key: FactorKey) -> Option<&FactorScore> {
        self.factors.get(&key)
    }

    pub fn snapshot(&self) -> ScoreSnapshot {
        ScoreSnapshot {
            composite: self.composite,
            risk_level: self.risk_level,
            calculated_at: self.calculated_at,
        }
    }
}

/// Score a dossier. A missing profile yields [`AegisScore::empty`].
pub fn calculate_aegis_score(profile: Option<&ProfileData>) -> AegisScore {
    let Some(profile) = profile else {
        return AegisScore::empty();
    };

    let signals = ExposureSignals::collect(profile);
    let factors = factors::score_factors(&signals);
    let composite = factors::composite_of(&factors);
    let risk_level = RiskLevel::from_composite(composite);
    let drivers = drivers::collect_drivers(profile, &signals);

    debug!(
        composite,
        risk_level = risk_level.label(),
        drivers = drivers.len(),
        "computed aegis score"
    );

    AegisScore {
        composite,
        risk_level,
        factors,
        drivers,
        calculated_at: Utc::now(),
    }
}
