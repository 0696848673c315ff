use chrono::{DateTime, TimeZone, Utc};

use crate::engine::crosswire::{CaseRef, SubjectRecord};
use crate::profile::{
    Address, Associate, BreachRecord, DataBrokerListing, EmailAddress, FamilyMember,
    Observation, PhoneNumber, ProfileData, PropertyRecord, Routine, SocialAccount,
};

pub(super) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn social(platform: &str, visibility: &str) -> SocialAccount {
    SocialAccount {
        platform: Some(platform.to_string()),
        username: Some(format!("{}_user", platform.to_lowercase())),
        visibility: Some(visibility.to_string()),
        ..SocialAccount::default()
    }
}

pub(super) fn broker(name: &str, status: &str) -> DataBrokerListing {
    DataBrokerListing {
        broker: Some(name.to_string()),
        status: Some(status.to_string()),
        ..DataBrokerListing::default()
    }
}

pub(super) fn breach(name: &str, severity: &str, data_types: &[&str]) -> BreachRecord {
    BreachRecord {
        breach_name: Some(name.to_string()),
        severity: Some(severity.to_string()),
        data_types: data_types.iter().map(|value| value.to_string()).collect(),
        ..BreachRecord::default()
    }
}

pub(super) fn address(city: &str, state: &str, confidence: &str) -> Address {
    Address {
        street: Some("100 Congress Ave".to_string()),
        city: Some(city.to_string()),
        state: Some(state.to_string()),
        confidence: Some(confidence.to_string()),
        ..Address::default()
    }
}

pub(super) fn routine(name: &str, consistency: f64) -> Routine {
    Routine {
        name: Some(name.to_string()),
        consistency: Some(consistency),
        ..Routine::default()
    }
}

pub(super) fn observation(description: &str, exploitability: &str) -> Observation {
    Observation {
        description: Some(description.to_string()),
        exploitability: Some(exploitability.to_string()),
        ..Observation::default()
    }
}

pub(super) fn phone(number: &str) -> PhoneNumber {
    PhoneNumber {
        number: Some(number.to_string()),
        ..PhoneNumber::default()
    }
}

pub(super) fn email(address: &str) -> EmailAddress {
    EmailAddress {
        address: Some(address.to_string()),
        ..EmailAddress::default()
    }
}

pub(super) fn associate(name: &str, relationship: &str) -> Associate {
    Associate {
        name: Some(name.to_string()),
        relationship: Some(relationship.to_string()),
        ..Associate::default()
    }
}

pub(super) fn relative(name: &str, visibility: &str) -> FamilyMember {
    FamilyMember {
        name: Some(name.to_string()),
        relationship: Some("sibling".to_string()),
        social_visibility: Some(visibility.to_string()),
        ..FamilyMember::default()
    }
}

pub(super) fn property(city: &str) -> PropertyRecord {
    PropertyRecord {
        address: Some("12 Lakeview Dr".to_string()),
        city: Some(city.to_string()),
        ..PropertyRecord::default()
    }
}

/// 2 public accounts, 1 active broker, 1 high-severity password breach, 1 confirmed
/// address, nothing else.
pub(super) fn reference_profile() -> ProfileData {
    let mut profile = ProfileData::default();
    profile.digital.social_accounts = vec![social("Instagram", "public"), social("X", "public")];
    profile.digital.data_broker_listings = vec![broker("Spokeo", "active")];
    profile.breaches.records = vec![breach("LinkedIn 2021", "high", &["email", "password"])];
    profile.locations.addresses = vec![address("Austin", "TX", "confirmed")];
    profile
}

/// A dossier touching every factor.
pub(super) fn heavy_profile() -> ProfileData {
    let mut profile = ProfileData::default();
    profile.identity.full_name = Some("Dana Reyes".to_string());
    profile.professional.organization = Some("Halcyon Labs".to_string());
    profile.digital.social_accounts = vec![
        social("Instagram", "public"),
        social("Strava", "public"),
        social("Venmo", "public"),
        social("LinkedIn", "private"),
    ];
    profile.digital.data_broker_listings = vec![
        broker("Spokeo", "active"),
        broker("Whitepages", "active"),
        broker("BeenVerified", "removed"),
    ];
    profile.breaches.records = vec![
        breach("LinkedIn 2021", "high", &["email", "password"]),
        breach("Canva 2019", "medium", &["email", "name"]),
    ];
    profile.behavioral.routines = vec![
        routine("Morning run", 0.9),
        routine("School pickup", 75.0),
        routine("Grocery", 0.3),
    ];
    profile.behavioral.observations = vec![
        observation("Leaves garage door open", "high"),
        observation("Posts travel plans", "medium"),
    ];
    profile.locations.addresses = vec![
        address("Austin", "TX", "confirmed"),
        address("Marfa", "TX", "probable"),
    ];
    profile.public_records.properties = vec![property("Austin")];
    profile.network.family_members = vec![relative("Sam Reyes", "public")];
    profile.network.associates = vec![associate("Lee Park", "colleague")];
    profile
}

pub(super) fn subject(id: &str, name: &str, profile: ProfileData) -> SubjectRecord {
    SubjectRecord {
        id: id.to_string(),
        name: name.to_string(),
        profile_data: Some(profile),
        cases: Some(CaseRef {
            name: Some(format!("Case {id}")),
            case_type: Some("EP".to_string()),
        }),
    }
}
