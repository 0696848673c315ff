use std::collections::HashMap;

use chrono::Duration;

use super::common::*;
use crate::engine::aegis::{AegisScore, RiskLevel};
use crate::engine::cases::{calculate_case_priority, CaseData, CaseSubject, PriorityTier};
use crate::profile::{calculate_completeness, ProfileData, PropertyRecord};

fn case(case_type: &str) -> CaseData {
    CaseData {
        id: Some("case-1".to_string()),
        name: Some("Harbor".to_string()),
        case_type: Some(case_type.to_string()),
    }
}

fn scored(composite: u8) -> AegisScore {
    let mut score = AegisScore::empty();
    score.composite = composite;
    score.risk_level = RiskLevel::from_composite(composite);
    score
}

fn scores(entries: &[(&str, u8)]) -> HashMap<String, AegisScore> {
    entries
        .iter()
        .map(|(id, composite)| (id.to_string(), scored(*composite)))
        .collect()
}

fn case_subject(id: &str, profile: ProfileData, days_since_update: i64) -> CaseSubject {
    CaseSubject {
        id: id.to_string(),
        profile_data: Some(profile),
        updated_at: Some(fixed_now() - Duration::days(days_since_update)),
    }
}

/// Every section except breaches and associates.
fn thorough_profile() -> ProfileData {
    let mut profile = ProfileData::default();
    profile.identity.full_name = Some("Dana Reyes".to_string());
    profile.professional.organization = Some("Halcyon Labs".to_string());
    profile.locations.addresses = vec![address("Austin", "TX", "confirmed")];
    profile.contact.phone_numbers = vec![phone("512-555-0101")];
    profile.digital.social_accounts = vec![social("LinkedIn", "private")];
    profile.digital.data_broker_listings = vec![broker("Spokeo", "removed")];
    profile.behavioral.routines = vec![routine("Morning run", 0.4)];
    profile.network.family_members = vec![relative("Sam Reyes", "private")];
    profile.public_records.properties = vec![PropertyRecord::default()];
    profile.notes = Some("Principal travels quarterly.".to_string());
    profile
}

#[test]
fn executive_protection_case_with_critical_subject() {
    let profile = thorough_profile();
    assert_eq!(calculate_completeness(Some(&profile)).score, 90);

    let subjects = vec![case_subject("s1", profile, 5)];
    let priority = calculate_case_priority(
        &case("EP"),
        &subjects,
        &scores(&[("s1", 80)]),
        fixed_now(),
    );

    assert_eq!(priority.score, 50);
    assert_eq!(priority.priority, PriorityTier::Routine);
    assert_eq!(
        priority.reasons,
        vec![
            "Critical Aegis score (80)".to_string(),
            "Executive protection case".to_string(),
        ]
    );
}

#[test]
fn empty_case_only_scores_its_type() {
    let priority = calculate_case_priority(&case("CI"), &[], &HashMap::new(), fixed_now());

    assert_eq!(priority.score, 5);
    assert_eq!(priority.priority, PriorityTier::Low);
    assert!(priority.reasons.is_empty());
}

#[test]
fn uses_the_highest_subject_score() {
    let subjects = vec![
        case_subject("s1", ProfileData::default(), 0),
        case_subject("s2", ProfileData::default(), 0),
    ];
    let priority = calculate_case_priority(
        &case("CT"),
        &subjects,
        &scores(&[("s1", 40), ("s2", 60)]),
        fixed_now(),
    );

    assert_eq!(priority.reasons[0], "High Aegis score (60)");
}

#[test]
fn breach_volume_is_tiered_across_subjects() {
    let with_breaches = |count: usize| {
        let mut profile = thorough_profile();
        profile.breaches.records = (0..count)
            .map(|index| breach(&format!("Breach {index}"), "low", &["email"]))
            .collect();
        profile
    };
    let points_for = |subjects: Vec<CaseSubject>| {
        calculate_case_priority(&case("CI"), &subjects, &HashMap::new(), fixed_now()).score
    };

    assert_eq!(points_for(vec![case_subject("s1", with_breaches(3), 0)]), 5 + 5);
    assert_eq!(
        points_for(vec![
            case_subject("s1", with_breaches(3), 0),
            case_subject("s2", with_breaches(3), 0),
        ]),
        12 + 5
    );
    assert_eq!(points_for(vec![case_subject("s1", with_breaches(10), 0)]), 20 + 5);
}

#[test]
fn stale_profiles_raise_priority() {
    let aging = calculate_case_priority(
        &case("CI"),
        &[case_subject("s1", thorough_profile(), 45)],
        &HashMap::new(),
        fixed_now(),
    );
    let stale = calculate_case_priority(
        &case("CI"),
        &[case_subject("s1", thorough_profile(), 120)],
        &HashMap::new(),
        fixed_now(),
    );

    assert_eq!(aging.score, 8 + 5);
    assert_eq!(stale.score, 15 + 5);
    assert!(stale.reasons[0].contains("120 days"));
}

#[test]
fn incomplete_profile_with_elevated_score_is_flagged() {
    let subjects = vec![case_subject("s1", ProfileData::default(), 0)];
    let priority = calculate_case_priority(
        &case("EP"),
        &subjects,
        &scores(&[("s1", 60)]),
        fixed_now(),
    );

    assert_eq!(priority.score, 25 + 15 + 15);
    assert_eq!(priority.priority, PriorityTier::High);
    assert_eq!(
        priority.reasons,
        vec![
            "High Aegis score (60)".to_string(),
            "Elevated risk on an incomplete profile".to_string(),
            "Executive protection case".to_string(),
        ]
    );
}

#[test]
fn score_is_capped_at_one_hundred() {
    let mut profile = ProfileData::default();
    profile.breaches.records = (0..12)
        .map(|index| breach(&format!("Breach {index}"), "high", &["password"]))
        .collect();
    let subjects = vec![case_subject("s1", profile, 200)];

    let priority = calculate_case_priority(
        &case("ep"),
        &subjects,
        &scores(&[("s1", 95)]),
        fixed_now(),
    );

    assert_eq!(priority.score, 100);
    assert_eq!(priority.priority, PriorityTier::Critical);
    assert_eq!(priority.reasons.len(), 5);
}

#[test]
fn priority_tier_thresholds() {
    assert_eq!(PriorityTier::from_score(29), PriorityTier::Low);
    assert_eq!(PriorityTier::from_score(30), PriorityTier::Routine);
    assert_eq!(PriorityTier::from_score(55), PriorityTier::High);
    assert_eq!(PriorityTier::from_score(75), PriorityTier::Critical);
}
