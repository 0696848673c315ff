use std::collections::BTreeMap;

use super::{RemediationOption, SimulatedScore};
use crate::engine::aegis::{AegisScore, FactorKey, RiskLevel};

/// Composite points converted back to the factor's own 0-100 scale, rounded half up.
fn factor_local_reduction(points: u64, weight: u8) -> u64 {
    if weight == 0 {
        return 0;
    }
    let weight = u64::from(weight);
    points.saturating_mul(200).saturating_add(weight) / (2 * weight)
}

pub(crate) fn simulate(base: &AegisScore, options: &[RemediationOption]) -> SimulatedScore {
    let mut by_factor: BTreeMap<FactorKey, u64> = BTreeMap::new();
    for option in options.iter().filter(|option| option.enabled) {
        *by_factor.entry(option.affected_factor).or_default() += u64::from(option.score_reduction);
    }

    let requested: u64 = by_factor.values().sum();
    let composite = u64::from(base.composite).saturating_sub(requested).min(100) as u8;

    let factors = base
        .factors
        .iter()
        .map(|(key, factor)| {
            let mut adjusted = factor.clone();
            if let Some(points) = by_factor.get(key) {
                let local = factor_local_reduction(*points, factor.weight);
                adjusted.score = u64::from(factor.score).saturating_sub(local).min(100) as u8;
            }
            (*key, adjusted)
        })
        .collect();

    SimulatedScore {
        composite,
        risk_level: RiskLevel::from_composite(composite),
        factors,
        reduction: base.composite.saturating_sub(composite),
    }
}
