use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{present, ProfileData};

/// Sections tracked when measuring how much of a dossier has been filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileSection {
    Identity,
    Professional,
    Addresses,
    PhoneNumbers,
    SocialAccounts,
    DataBrokers,
    Breaches,
    Routines,
    Family,
    Associates,
    PublicRecords,
    Notes,
}

impl ProfileSection {
    pub const ALL: [ProfileSection; 12] = [
        ProfileSection::Identity,
        ProfileSection::Professional,
        ProfileSection::Addresses,
        ProfileSection::PhoneNumbers,
        ProfileSection::SocialAccounts,
        ProfileSection::DataBrokers,
        ProfileSection::Breaches,
        ProfileSection::Routines,
        ProfileSection::Family,
        ProfileSection::Associates,
        ProfileSection::PublicRecords,
        ProfileSection::Notes,
    ];

    pub const fn weight(self) -> u32 {
        match self {
            ProfileSection::Identity => 15,
            ProfileSection::Professional => 10,
            ProfileSection::Addresses => 12,
            ProfileSection::PhoneNumbers => 8,
            ProfileSection::SocialAccounts => 12,
            ProfileSection::DataBrokers => 8,
            ProfileSection::Breaches => 10,
            ProfileSection::Routines => 8,
            ProfileSection::Family => 5,
            ProfileSection::Associates => 5,
            ProfileSection::PublicRecords => 7,
            ProfileSection::Notes => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ProfileSection::Identity => "Full name",
            ProfileSection::Professional => "Professional details",
            ProfileSection::Addresses => "Addresses",
            ProfileSection::PhoneNumbers => "Phone numbers",
            ProfileSection::SocialAccounts => "Social media accounts",
            ProfileSection::DataBrokers => "Data broker listings",
            ProfileSection::Breaches => "Breach records",
            ProfileSection::Routines => "Behavioral routines",
            ProfileSection::Family => "Family members",
            ProfileSection::Associates => "Associates",
            ProfileSection::PublicRecords => "Public records",
            ProfileSection::Notes => "Analyst notes",
        }
    }

    fn is_filled(self, profile: &ProfileData) -> bool {
        match self {
            ProfileSection::Identity => present(&profile.identity.full_name).is_some(),
            ProfileSection::Professional => {
                present(&profile.professional.organization).is_some()
                    || present(&profile.professional.title).is_some()
            }
            ProfileSection::Addresses => !profile.locations.addresses.is_empty(),
            ProfileSection::PhoneNumbers => !profile.contact.phone_numbers.is_empty(),
            ProfileSection::SocialAccounts => !profile.digital.social_accounts.is_empty(),
            ProfileSection::DataBrokers => !profile.digital.data_broker_listings.is_empty(),
            ProfileSection::Breaches => !profile.breaches.records.is_empty(),
            ProfileSection::Routines => !profile.behavioral.routines.is_empty(),
            ProfileSection::Family => !profile.network.family_members.is_empty(),
            ProfileSection::Associates => !profile.network.associates.is_empty(),
            ProfileSection::PublicRecords => !profile.public_records.is_empty(),
            ProfileSection::Notes => present(&profile.notes).is_some(),
        }
    }
}

/// Result of a completeness pass over a dossier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletenessReport {
    pub score: u8,
    pub details: BTreeMap<ProfileSection, bool>,
    pub missing: Vec<String>,
}

/// Sum the weights of every filled section. A missing profile scores zero with every
/// section listed as missing.
pub fn calculate_completeness(profile: Option<&ProfileData>) -> CompletenessReport {
    let mut details = BTreeMap::new();
    let mut missing = Vec::new();
    let mut total: u32 = 0;

    for section in ProfileSection::ALL {
        let filled = profile
            .map(|profile| section.is_filled(profile))
            .unwrap_or(false);
        if filled {
            total += section.weight();
        } else {
            missing.push(section.label().to_string());
        }
        details.insert(section, filled);
    }

    CompletenessReport {
        score: total.min(100) as u8,
        details,
        missing,
    }
}
