//! Remediation what-if: actionable options derived from a dossier and a simulator that
//! applies the enabled ones to a previously computed score.

mod planner;
mod simulator;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::aegis::{AegisScore, FactorKey, FactorScore, RiskLevel};
use crate::profile::ProfileData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemediationCategory {
    DataBrokers,
    SocialMedia,
    BreachResponse,
    Behavioral,
    PhysicalSecurity,
    Network,
}

impl RemediationCategory {
    pub const fn label(self) -> &'static str {
        match self {
            RemediationCategory::DataBrokers => "Data Brokers",
            RemediationCategory::SocialMedia => "Social Media",
            RemediationCategory::BreachResponse => "Breach Response",
            RemediationCategory::Behavioral => "Behavioral",
            RemediationCategory::PhysicalSecurity => "Physical Security",
            RemediationCategory::Network => "Network",
        }
    }
}

/// A hypothetical corrective action. `enabled` is caller-controlled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemediationOption {
    pub id: String,
    pub label: String,
    pub description: String,
    pub score_reduction: u32,
    pub affected_factor: FactorKey,
    pub category: RemediationCategory,
    #[serde(default)]
    pub enabled: bool,
}

/// Score after applying the enabled options. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatedScore {
    pub composite: u8,
    pub risk_level: RiskLevel,
    pub factors: BTreeMap<FactorKey, FactorScore>,
    /// Composite points actually removed.
    pub reduction: u8,
}

/// Derive every applicable option, all disabled.
pub fn build_remediation_options(profile: Option<&ProfileData>) -> Vec<RemediationOption> {
    let options = profile.map(planner::plan_options).unwrap_or_default();
    debug!(options = options.len(), "built remediation options");
    options
}

pub fn simulate_remediation(base: &AegisScore, options: &[RemediationOption]) -> SimulatedScore {
    simulator::simulate(base, options)
}
