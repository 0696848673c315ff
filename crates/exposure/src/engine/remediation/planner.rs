use super::{RemediationCategory, RemediationOption};
use crate::engine::aegis::signals::{consistency_percent, is_gps_broadcaster, is_public_venmo};
use crate::engine::aegis::{ExposureSignals, FactorKey};
use crate::profile::domain::present;
use crate::profile::ProfileData;

/// Routines above this consistency (0-100 scale) get their own option.
const PREDICTABLE_ROUTINE_PERCENT: f64 = 60.0;

const BREACH_REDUCTION_CAP: u32 = 20;

fn option(
    id: impl Into<String>,
    label: impl Into<String>,
    description: impl Into<String>,
    score_reduction: u32,
    affected_factor: FactorKey,
    category: RemediationCategory,
) -> RemediationOption {
    RemediationOption {
        id: id.into(),
        label: label.into(),
        description: description.into(),
        score_reduction,
        affected_factor,
        category,
        enabled: false,
    }
}

pub(crate) fn plan_options(profile: &ProfileData) -> Vec<RemediationOption> {
    let signals = ExposureSignals::collect(profile);
    let mut options = Vec::new();

    if signals.active_broker_count > 0 {
        let count = signals.active_broker_count;
        options.push(option(
            "broker-opt-out",
            format!("Opt out of {count} data broker listing(s)"),
            "Submit removal requests to every broker still showing an active record.",
            count * 3,
            FactorKey::DigitalFootprint,
            RemediationCategory::DataBrokers,
        ));
    }

    if signals.public_account_count > 0 {
        let count = signals.public_account_count;
        options.push(option(
            "social-lockdown",
            format!("Make {count} public social account(s) private"),
            "Restrict profile visibility, follower lists and tagged media.",
            count * 4,
            FactorKey::DigitalFootprint,
            RemediationCategory::SocialMedia,
        ));
    }

    if profile.digital.social_accounts.iter().any(is_public_venmo) {
        options.push(option(
            "venmo-private",
            "Set Venmo transactions to private",
            "Public payment feeds reveal contacts, locations and spending habits.",
            5,
            FactorKey::DigitalFootprint,
            RemediationCategory::SocialMedia,
        ));
    }

    if signals.breach_count > 0 {
        let count = signals.breach_count;
        options.push(option(
            "breach-credential-rotation",
            "Rotate credentials exposed in breaches",
            format!(
                "Change passwords and enable MFA for accounts tied to {count} breach record(s)."
            ),
            (count * 4).min(BREACH_REDUCTION_CAP),
            FactorKey::BreachExposure,
            RemediationCategory::BreachResponse,
        ));
    }

    for (index, routine) in profile.behavioral.routines.iter().enumerate() {
        let percent = consistency_percent(routine);
        if percent > PREDICTABLE_ROUTINE_PERCENT {
            let name = present(&routine.name).unwrap_or("routine");
            options.push(option(
                format!("routine-vary-{index}"),
                format!("Vary timing of {name}"),
                format!("Break the {percent:.0}% consistent pattern with varied times and routes."),
                (percent * 0.08).round() as u32,
                FactorKey::BehavioralPredictability,
                RemediationCategory::Behavioral,
            ));
        }
    }

    let gps_accounts = profile
        .digital
        .social_accounts
        .iter()
        .filter(|account| is_gps_broadcaster(account))
        .count() as u32;
    if gps_accounts > 0 {
        options.push(option(
            "gps-sharing-off",
            "Disable GPS activity sharing",
            format!(
                "Hide start/end points and make activity feeds private on {gps_accounts} tracking account(s)."
            ),
            (4 + gps_accounts * 2).min(10),
            FactorKey::BehavioralPredictability,
            RemediationCategory::Behavioral,
        ));
    }

    for (index, address) in profile.locations.addresses.iter().enumerate() {
        let place = present(&address.label)
            .or_else(|| present(&address.city))
            .unwrap_or("address");
        let reduction = if address.is_confirmed() { 4 } else { 2 };
        options.push(option(
            format!("address-harden-{index}"),
            format!("Harden physical security at {place}"),
            "Review access control, camera coverage and package handling at this location.",
            reduction,
            FactorKey::PhysicalOpsec,
            RemediationCategory::PhysicalSecurity,
        ));
    }

    if signals.address_count > 1 {
        options.push(option(
            "address-footprint-reduce",
            "Reduce discoverable addresses",
            "Use a registered agent or PO box in place of residential addresses on filings.",
            ((signals.address_count - 1) * 3).min(10),
            FactorKey::PhysicalOpsec,
            RemediationCategory::PhysicalSecurity,
        ));
    }

    if signals.property_count > 0 {
        let count = signals.property_count;
        options.push(option(
            "property-records-shield",
            format!("Shield {count} property record(s)"),
            "Transfer title to a trust or LLC to decouple ownership from the subject's name.",
            count * 3,
            FactorKey::PhysicalOpsec,
            RemediationCategory::PhysicalSecurity,
        ));
    }

    if signals.family_public_social_count > 0 {
        let count = signals.family_public_social_count;
        options.push(option(
            "family-privacy-briefing",
            format!("Privacy briefing for {count} family member(s)"),
            "Coach relatives on locking down accounts that expose the subject.",
            count * 3,
            FactorKey::NetworkExposure,
            RemediationCategory::Network,
        ));
    }

    order_within_categories(&mut options);
    options
}

/// Keep categories in the order they first appear and sort each group by descending
/// reduction. The sort is stable, so equal reductions keep rule order.
fn order_within_categories(options: &mut [RemediationOption]) {
    let mut first_seen: Vec<RemediationCategory> = Vec::new();
    for option in options.iter() {
        if !first_seen.contains(&option.category) {
            first_seen.push(option.category);
        }
    }

    options.sort_by_key(|option| {
        let rank = first_seen
            .iter()
            .position(|category| *category == option.category)
            .unwrap_or(usize::MAX);
        (rank, std::cmp::Reverse(option.score_reduction))
    });
}
