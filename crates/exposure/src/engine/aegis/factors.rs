use std::collections::BTreeMap;

use super::signals::{
    consistency_fraction, is_high_exploitability, is_high_severity, is_password_exposure,
    mentions_gps_signal,
};
use super::{FactorKey, FactorScore};
use crate::profile::ProfileData;

/// Counts pulled from a dossier once and shared by the factor math and the driver pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct ExposureSignals {
    /// Accounts not marked public; public ones are weighted separately.
    pub non_public_account_count: u32,
    pub public_account_count: u32,
    pub active_broker_count: u32,
    pub breach_count: u32,
    pub high_severity_count: u32,
    pub password_exposed: bool,
    pub routine_count: u32,
    pub avg_consistency: f64,
    pub gps_signal: bool,
    pub observation_count: u32,
    pub high_exploit_observation_count: u32,
    pub confirmed_address_count: u32,
    pub address_count: u32,
    pub property_count: u32,
    pub family_count: u32,
    pub family_public_social_count: u32,
    pub associate_count: u32,
}

fn count<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> u32 {
    items.iter().filter(|item| predicate(*item)).count() as u32
}

impl ExposureSignals {
    pub(crate) fn collect(profile: &ProfileData) -> Self {
        let accounts = &profile.digital.social_accounts;
        let breaches = &profile.breaches.records;
        let routines = &profile.behavioral.routines;
        let observations = &profile.behavioral.observations;
        let addresses = &profile.locations.addresses;
        let family = &profile.network.family_members;

        let avg_consistency = if routines.is_empty() {
            0.0
        } else {
            routines.iter().map(consistency_fraction).sum::<f64>() / routines.len() as f64
        };

        let public_account_count = count(accounts, |account| account.is_public());

        Self {
            non_public_account_count: accounts.len() as u32 - public_account_count,
            public_account_count,
            active_broker_count: count(&profile.digital.data_broker_listings, |listing| {
                listing.is_active()
            }),
            breach_count: breaches.len() as u32,
            high_severity_count: count(breaches, is_high_severity),
            password_exposed: breaches.iter().any(is_password_exposure),
            routine_count: routines.len() as u32,
            avg_consistency,
            gps_signal: accounts.iter().any(mentions_gps_signal),
            observation_count: observations.len() as u32,
            high_exploit_observation_count: count(observations, is_high_exploitability),
            confirmed_address_count: count(addresses, |address| address.is_confirmed()),
            address_count: addresses.len() as u32,
            property_count: profile.public_records.properties.len() as u32,
            family_count: family.len() as u32,
            family_public_social_count: count(family, |member| member.has_public_social()),
            associate_count: profile.network.associates.len() as u32,
        }
    }
}

fn capped(raw: f64) -> u8 {
    raw.round().clamp(0.0, 100.0) as u8
}

fn points(count: u32, per_item: u32) -> f64 {
    f64::from(count) * f64::from(per_item)
}

fn flag(value: bool, weight: u32) -> f64 {
    if value {
        f64::from(weight)
    } else {
        0.0
    }
}

pub(crate) fn digital_footprint(signals: &ExposureSignals) -> u8 {
    capped(
        points(signals.non_public_account_count, 8)
            + points(signals.public_account_count, 12)
            + points(signals.active_broker_count, 6),
    )
}

pub(crate) fn breach_exposure(signals: &ExposureSignals) -> u8 {
    capped(
        points(signals.breach_count, 10)
            + points(signals.high_severity_count, 15)
            + flag(signals.password_exposed, 20),
    )
}

pub(crate) fn behavioral_predictability(signals: &ExposureSignals) -> u8 {
    capped(
        signals.avg_consistency * 80.0
            + points(signals.routine_count, 5)
            + flag(signals.gps_signal, 15)
            + points(signals.observation_count, 3)
            + points(signals.high_exploit_observation_count, 8),
    )
}

pub(crate) fn physical_opsec(signals: &ExposureSignals) -> u8 {
    capped(
        points(signals.confirmed_address_count, 20)
            + points(signals.address_count, 10)
            + points(signals.property_count, 12),
    )
}

pub(crate) fn network_exposure(signals: &ExposureSignals) -> u8 {
    capped(
        points(signals.family_public_social_count, 15)
            + points(signals.family_count, 5)
            + points(signals.associate_count, 5),
    )
}

pub(crate) fn score_factors(signals: &ExposureSignals) -> BTreeMap<FactorKey, FactorScore> {
    FactorKey::ALL
        .into_iter()
        .map(|key| {
            let score = match key {
                FactorKey::DigitalFootprint => digital_footprint(signals),
                FactorKey::BreachExposure => breach_exposure(signals),
                FactorKey::BehavioralPredictability => behavioral_predictability(signals),
                FactorKey::PhysicalOpsec => physical_opsec(signals),
                FactorKey::NetworkExposure => network_exposure(signals),
            };
            (key, FactorScore::new(key, score))
        })
        .collect()
}

/// Weighted sum of factor scores, rounded half up on the 0-100 scale.
pub(crate) fn composite_of(factors: &BTreeMap<FactorKey, FactorScore>) -> u8 {
    let weighted: u32 = factors
        .values()
        .map(|factor| u32::from(factor.score) * u32::from(factor.weight))
        .sum();
    ((weighted + 50) / 100).min(100) as u8
}
