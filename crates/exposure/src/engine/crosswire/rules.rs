use std::collections::{HashMap, HashSet};

use super::normalizer::{fold, normalize_phone};
use super::{MatchType, OverlapMatch};
use crate::profile::domain::present;
use crate::profile::ProfileData;

type MatchRule = fn(&ProfileData, &ProfileData) -> Vec<OverlapMatch>;

/// Symmetric rules, evaluated in this order for every pair.
pub(crate) const SHARED_FACT_RULES: &[MatchRule] = &[
    shared_phones,
    shared_emails,
    shared_organization,
    shared_breaches,
    shared_brokers,
    shared_associates,
    shared_locations,
    shared_platforms,
];

fn matched(kind: MatchType, label: impl Into<String>, detail: impl Into<String>) -> OverlapMatch {
    OverlapMatch {
        kind,
        label: label.into(),
        detail: detail.into(),
    }
}

/// Values from `current` (in order, original casing) whose folded key also appears in
/// `other`.
fn intersect<'a>(
    current: impl Iterator<Item = &'a str>,
    other: impl Iterator<Item = &'a str>,
) -> Vec<&'a str> {
    let other: HashSet<String> = other.map(fold).collect();
    current.filter(|value| other.contains(&fold(value))).collect()
}

fn phone_numbers(profile: &ProfileData) -> impl Iterator<Item = String> + '_ {
    profile
        .contact
        .phone_numbers
        .iter()
        .filter_map(|phone| present(&phone.number))
        .filter_map(normalize_phone)
}

pub(crate) fn shared_phones(current: &ProfileData, other: &ProfileData) -> Vec<OverlapMatch> {
    let other: HashSet<String> = phone_numbers(other).collect();
    phone_numbers(current)
        .filter(|number| other.contains(number))
        .map(|number| matched(MatchType::Phone, number, "Shared phone number"))
        .collect()
}

fn email_addresses(profile: &ProfileData) -> impl Iterator<Item = &str> {
    profile
        .contact
        .email_addresses
        .iter()
        .filter_map(|email| present(&email.address))
}

pub(crate) fn shared_emails(current: &ProfileData, other: &ProfileData) -> Vec<OverlapMatch> {
    intersect(email_addresses(current), email_addresses(other))
        .into_iter()
        .map(|address| matched(MatchType::Email, fold(address), "Shared email address"))
        .collect()
}

pub(crate) fn shared_organization(current: &ProfileData, other: &ProfileData) -> Vec<OverlapMatch> {
    match (
        present(&current.professional.organization),
        present(&other.professional.organization),
    ) {
        (Some(ours), Some(theirs)) if fold(ours) == fold(theirs) => vec![matched(
            MatchType::Organization,
            ours,
            "Both subjects are affiliated with this organization",
        )],
        _ => Vec::new(),
    }
}

fn breach_names(profile: &ProfileData) -> impl Iterator<Item = &str> {
    profile
        .breaches
        .records
        .iter()
        .filter_map(|record| present(&record.breach_name))
}

pub(crate) fn shared_breaches(current: &ProfileData, other: &ProfileData) -> Vec<OverlapMatch> {
    intersect(breach_names(current), breach_names(other))
        .into_iter()
        .map(|name| matched(MatchType::Breach, name, "Both subjects appear in this breach"))
        .collect()
}

fn brokers(profile: &ProfileData) -> impl Iterator<Item = &str> {
    profile
        .digital
        .data_broker_listings
        .iter()
        .filter_map(|listing| present(&listing.broker))
}

pub(crate) fn shared_brokers(current: &ProfileData, other: &ProfileData) -> Vec<OverlapMatch> {
    intersect(brokers(current), brokers(other))
        .into_iter()
        .map(|broker| {
            matched(
                MatchType::DataBroker,
                broker,
                "Both subjects are listed by this data broker",
            )
        })
        .collect()
}

/// Associates and family members, paired with the relationship recorded for them.
fn network_entries(profile: &ProfileData) -> impl Iterator<Item = (&str, Option<&str>)> {
    let associates = profile
        .network
        .associates
        .iter()
        .filter_map(|person| present(&person.name).map(|name| (name, present(&person.relationship))));
    let family = profile
        .network
        .family_members
        .iter()
        .filter_map(|person| present(&person.name).map(|name| (name, present(&person.relationship))));
    associates.chain(family)
}

pub(crate) fn shared_associates(current: &ProfileData, other: &ProfileData) -> Vec<OverlapMatch> {
    intersect(
        network_entries(current).map(|(name, _)| name),
        network_entries(other).map(|(name, _)| name),
    )
    .into_iter()
    .map(|name| {
        matched(
            MatchType::Associate,
            name,
            format!("Both subjects are connected to {name}"),
        )
    })
    .collect()
}

/// One-directional: only checks whether `other_name` sits in the current subject's network.
pub(crate) fn direct_link(current: &ProfileData, other_name: &str) -> Vec<OverlapMatch> {
    let key = fold(other_name);
    if key.is_empty() {
        return Vec::new();
    }
    network_entries(current)
        .find(|(name, _)| fold(name) == key)
        .map(|(name, relationship)| {
            let detail = match relationship {
                Some(relationship) => {
                    format!("{name} is listed in this subject's network ({relationship})")
                }
                None => format!("{name} is listed in this subject's network"),
            };
            vec![matched(MatchType::DirectLink, other_name.trim(), detail)]
        })
        .unwrap_or_default()
}

/// City/state pairs keyed case-insensitively, keeping the first casing seen.
fn city_states(profile: &ProfileData) -> Vec<(String, String)> {
    profile
        .locations
        .addresses
        .iter()
        .filter_map(|address| {
            let city = present(&address.city)?;
            let label = match present(&address.state) {
                Some(state) => format!("{city}, {state}"),
                None => city.to_string(),
            };
            let key = format!(
                "{}|{}",
                fold(city),
                present(&address.state).map(fold).unwrap_or_default()
            );
            Some((key, label))
        })
        .collect()
}

pub(crate) fn shared_locations(current: &ProfileData, other: &ProfileData) -> Vec<OverlapMatch> {
    let other: HashMap<String, String> = city_states(other).into_iter().collect();
    city_states(current)
        .into_iter()
        .filter(|(key, _)| other.contains_key(key))
        .map(|(_, label)| {
            matched(
                MatchType::Location,
                label,
                "Both subjects have addresses in this city",
            )
        })
        .collect()
}

fn platforms(profile: &ProfileData) -> impl Iterator<Item = &str> {
    profile
        .digital
        .social_accounts
        .iter()
        .filter_map(|account| present(&account.platform))
}

pub(crate) fn shared_platforms(current: &ProfileData, other: &ProfileData) -> Vec<OverlapMatch> {
    intersect(platforms(current), platforms(other))
        .into_iter()
        .map(|platform| {
            matched(
                MatchType::Platform,
                platform,
                "Both subjects hold accounts on this platform",
            )
        })
        .collect()
}

/// Drop repeats of the same `(type, label)` pair, comparing labels case-insensitively.
pub(crate) fn dedupe(matches: Vec<OverlapMatch>) -> Vec<OverlapMatch> {
    let mut seen = HashSet::new();
    matches
        .into_iter()
        .filter(|entry| seen.insert((entry.kind, entry.label.to_lowercase())))
        .collect()
}
