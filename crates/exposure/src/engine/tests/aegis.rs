use super::common::*;
use crate::engine::aegis::{
    calculate_aegis_score, AegisScore, FactorKey, RiskLevel, ScoreSnapshot, ScoreTrend,
    TrendDirection, TrendError,
};
use crate::profile::ProfileData;
use chrono::Duration;

fn factor_score(score: &AegisScore, key: FactorKey) -> u8 {
    score.factor(key).expect("factor present").score
}

#[test]
fn reference_profile_matches_hand_computed_score() {
    let score = calculate_aegis_score(Some(&reference_profile()));

    assert_eq!(factor_score(&score, FactorKey::DigitalFootprint), 30);
    assert_eq!(factor_score(&score, FactorKey::BreachExposure), 45);
    assert_eq!(factor_score(&score, FactorKey::BehavioralPredictability), 0);
    assert_eq!(factor_score(&score, FactorKey::PhysicalOpsec), 30);
    assert_eq!(factor_score(&score, FactorKey::NetworkExposure), 0);
    assert_eq!(score.composite, 21);
    assert_eq!(score.risk_level, RiskLevel::Low);
}

#[test]
fn missing_profile_yields_zeroed_shape() {
    let score = calculate_aegis_score(None);

    assert_eq!(score.composite, 0);
    assert_eq!(score.risk_level, RiskLevel::Low);
    assert!(score.drivers.is_empty());
    assert_eq!(score.factors.len(), 5);
    assert!(score.factors.values().all(|factor| factor.score == 0));
}

#[test]
fn weights_always_sum_to_one_hundred() {
    for profile in [ProfileData::default(), reference_profile(), heavy_profile()] {
        let score = calculate_aegis_score(Some(&profile));
        let total: u32 = score
            .factors
            .values()
            .map(|factor| u32::from(factor.weight))
            .sum();
        assert_eq!(total, 100);
    }
}

#[test]
fn scoring_is_deterministic() {
    let profile = heavy_profile();
    let first = calculate_aegis_score(Some(&profile));
    let second = calculate_aegis_score(Some(&profile));

    assert_eq!(first.composite, second.composite);
    assert_eq!(first.risk_level, second.risk_level);
    assert_eq!(first.factors, second.factors);
    assert_eq!(first.drivers, second.drivers);
}

#[test]
fn factors_are_clamped_for_extreme_profiles() {
    let mut profile = heavy_profile();
    profile.digital.data_broker_listings = (0..40)
        .map(|index| broker(&format!("Broker {index}"), "active"))
        .collect();
    profile.breaches.records = (0..25)
        .map(|index| breach(&format!("Breach {index}"), "critical", &["Passwords"]))
        .collect();

    let score = calculate_aegis_score(Some(&profile));

    assert_eq!(factor_score(&score, FactorKey::DigitalFootprint), 100);
    assert_eq!(factor_score(&score, FactorKey::BreachExposure), 100);
    assert!(score.composite <= 100);
    assert!(score.factors.values().all(|factor| factor.score <= 100));
}

#[test]
fn another_active_broker_never_lowers_the_score() {
    let mut profile = reference_profile();
    let mut previous = calculate_aegis_score(Some(&profile));

    for index in 0..20 {
        profile
            .digital
            .data_broker_listings
            .push(broker(&format!("Broker {index}"), "active"));
        let next = calculate_aegis_score(Some(&profile));
        assert!(
            factor_score(&next, FactorKey::DigitalFootprint)
                >= factor_score(&previous, FactorKey::DigitalFootprint)
        );
        assert!(next.composite >= previous.composite);
        previous = next;
    }
}

#[test]
fn behavioral_factor_includes_observations_and_gps() {
    let mut profile = ProfileData::default();
    profile.behavioral.routines = vec![routine("Run", 0.5), routine("Commute", 50.0)];
    profile.behavioral.observations = vec![
        observation("Same coffee shop daily", "high"),
        observation("Walks dog at dusk", "low"),
    ];
    profile.digital.social_accounts = vec![social("Strava", "private")];

    let score = calculate_aegis_score(Some(&profile));

    // 0.5*80 + 2*5 + 15 + 2*3 + 1*8
    assert_eq!(factor_score(&score, FactorKey::BehavioralPredictability), 79);
}

#[test]
fn network_factor_weights_public_relatives() {
    let mut profile = ProfileData::default();
    profile.network.family_members = vec![
        relative("Sam Reyes", "public"),
        relative("Ana Reyes", "private"),
    ];
    profile.network.associates = vec![associate("Lee Park", "colleague")];

    let score = calculate_aegis_score(Some(&profile));

    assert_eq!(factor_score(&score, FactorKey::NetworkExposure), 15 + 10 + 5);
}

#[test]
fn risk_level_thresholds() {
    assert_eq!(RiskLevel::from_composite(34), RiskLevel::Low);
    assert_eq!(RiskLevel::from_composite(35), RiskLevel::Moderate);
    assert_eq!(RiskLevel::from_composite(55), RiskLevel::High);
    assert_eq!(RiskLevel::from_composite(74), RiskLevel::High);
    assert_eq!(RiskLevel::from_composite(75), RiskLevel::Critical);
}

#[test]
fn drivers_are_ranked_and_capped() {
    let mut profile = heavy_profile();
    profile.behavioral.observations = (0..8)
        .map(|index| observation(&format!("Exploitable habit {index}"), "high"))
        .collect();

    let score = calculate_aegis_score(Some(&profile));

    assert_eq!(score.drivers.len(), 10);
    assert!(score
        .drivers
        .windows(2)
        .all(|pair| pair[0].impact >= pair[1].impact));
}

#[test]
fn broker_driver_impact_steps_above_five_listings() {
    let mut profile = ProfileData::default();
    profile.digital.data_broker_listings = (0..6)
        .map(|index| broker(&format!("Broker {index}"), "active"))
        .collect();

    let score = calculate_aegis_score(Some(&profile));
    let driver = score
        .drivers
        .iter()
        .find(|driver| driver.text.contains("data brokers"))
        .expect("broker driver");

    assert_eq!(driver.impact, 14);
    assert_eq!(driver.category, FactorKey::DigitalFootprint);
}

#[test]
fn drivers_flag_password_exposure_and_predictable_routines() {
    let score = calculate_aegis_score(Some(&heavy_profile()));
    let texts: Vec<&str> = score
        .drivers
        .iter()
        .map(|driver| driver.text.as_str())
        .collect();

    assert!(texts.contains(&"Passwords exposed in breach data"));
    assert!(texts
        .iter()
        .any(|text| text.starts_with("Predictable routine: Morning run")));
    assert!(!texts.iter().any(|text| text.contains("Grocery")));
}

#[test]
fn trend_compares_latest_two_snapshots() {
    let now = fixed_now();
    let history = vec![
        ScoreSnapshot {
            composite: 48,
            risk_level: RiskLevel::Moderate,
            calculated_at: now,
        },
        ScoreSnapshot {
            composite: 40,
            risk_level: RiskLevel::Moderate,
            calculated_at: now - Duration::days(30),
        },
        ScoreSnapshot {
            composite: 61,
            risk_level: RiskLevel::High,
            calculated_at: now - Duration::days(60),
        },
    ];

    let trend = ScoreTrend::from_history(&history).expect("trend computes");

    assert_eq!(trend.latest.composite, 48);
    assert_eq!(trend.previous.as_ref().map(|s| s.composite), Some(40));
    assert_eq!(trend.delta, 8);
    assert_eq!(trend.direction, TrendDirection::Rising);
    assert_eq!(trend.samples, 3);
}

#[test]
fn trend_requires_history() {
    assert!(matches!(
        ScoreTrend::from_history(&[]),
        Err(TrendError::EmptyHistory)
    ));

    let single = calculate_aegis_score(Some(&reference_profile())).snapshot();
    let trend = ScoreTrend::from_history(&[single]).expect("single snapshot");
    assert_eq!(trend.direction, TrendDirection::Stable);
    assert!(trend.previous.is_none());
}
