use super::factors::ExposureSignals;
use super::signals::{consistency_percent, is_high_exploitability};
use super::{FactorKey, ScoreDriver};
use crate::profile::domain::present;
use crate::profile::ProfileData;

pub(crate) const MAX_DRIVERS: usize = 10;

/// Routines at or above this consistency are called out individually.
const PREDICTABLE_ROUTINE_PERCENT: f64 = 70.0;

fn plural(count: u32, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Human readable contributors to the composite, ranked by impact.
pub(crate) fn collect_drivers(profile: &ProfileData, signals: &ExposureSignals) -> Vec<ScoreDriver> {
    let mut drivers = Vec::new();
    let mut push = |text: String, impact: u32, category: FactorKey| {
        drivers.push(ScoreDriver {
            text,
            impact,
            category,
        });
    };

    if signals.active_broker_count > 0 {
        let count = signals.active_broker_count;
        let impact = if count > 5 { count + 8 } else { count + 4 };
        push(
            format!(
                "Listed on {} with active records",
                plural(count, "data broker", "data brokers")
            ),
            impact,
            FactorKey::DigitalFootprint,
        );
    }

    if signals.public_account_count > 0 {
        let count = signals.public_account_count;
        push(
            format!(
                "{} publicly visible",
                plural(count, "social account", "social accounts")
            ),
            (count * 4).min(15),
            FactorKey::DigitalFootprint,
        );
    }

    if signals.breach_count > 0 {
        push(
            format!(
                "Exposed in {}",
                plural(signals.breach_count, "data breach", "data breaches")
            ),
            (signals.breach_count * 3 + 2).min(15),
            FactorKey::BreachExposure,
        );
    }

    if signals.password_exposed {
        push(
            "Passwords exposed in breach data".to_string(),
            12,
            FactorKey::BreachExposure,
        );
    }

    if signals.high_severity_count > 0 {
        push(
            format!(
                "{} rated high severity",
                plural(signals.high_severity_count, "breach", "breaches")
            ),
            (signals.high_severity_count * 5).min(15),
            FactorKey::BreachExposure,
        );
    }

    for routine in &profile.behavioral.routines {
        let percent = consistency_percent(routine);
        if percent >= PREDICTABLE_ROUTINE_PERCENT {
            let name = present(&routine.name).unwrap_or("Unnamed routine");
            push(
                format!("Predictable routine: {name} ({percent:.0}% consistent)"),
                (percent / 10.0).round() as u32,
                FactorKey::BehavioralPredictability,
            );
        }
    }

    if signals.gps_signal {
        push(
            "GPS activity data shared publicly".to_string(),
            10,
            FactorKey::BehavioralPredictability,
        );
    }

    if signals.observation_count > 0 {
        push(
            format!(
                "{} on file",
                plural(
                    signals.observation_count,
                    "behavioral observation",
                    "behavioral observations"
                )
            ),
            (signals.observation_count * 2).min(10),
            FactorKey::BehavioralPredictability,
        );
    }

    for observation in profile
        .behavioral
        .observations
        .iter()
        .filter(|observation| is_high_exploitability(observation))
    {
        let description = present(&observation.description).unwrap_or("Unlabelled observation");
        push(
            format!("High-exploitability observation: {description}"),
            9,
            FactorKey::BehavioralPredictability,
        );
    }

    if signals.confirmed_address_count > 0 {
        push(
            format!(
                "{} confirmed",
                plural(
                    signals.confirmed_address_count,
                    "home/work address",
                    "home/work addresses"
                )
            ),
            signals.confirmed_address_count * 6,
            FactorKey::PhysicalOpsec,
        );
    }

    if signals.property_count > 0 {
        push(
            format!(
                "{} in public filings",
                plural(signals.property_count, "property record", "property records")
            ),
            signals.property_count * 4,
            FactorKey::PhysicalOpsec,
        );
    }

    if signals.family_public_social_count > 0 {
        push(
            format!(
                "{} with public social media",
                plural(
                    signals.family_public_social_count,
                    "family member",
                    "family members"
                )
            ),
            signals.family_public_social_count * 5,
            FactorKey::NetworkExposure,
        );
    }

    if signals.associate_count > 0 {
        push(
            format!(
                "{} mapped",
                plural(signals.associate_count, "known associate", "known associates")
            ),
            (signals.associate_count * 2).min(10),
            FactorKey::NetworkExposure,
        );
    }

    drivers.sort_by(|a, b| b.impact.cmp(&a.impact));
    drivers.truncate(MAX_DRIVERS);
    drivers
}
